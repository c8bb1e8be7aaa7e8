use std::{
    collections::{HashMap, HashSet, hash_map::Entry},
    fmt::{self, Debug, Display},
    hash::BuildHasher,
};

use log::{debug, trace};
use rustc_hash::FxBuildHasher;

use crate::{Graph, GraphError, graph::Vertex};

/// Directed graph stored as a map from each vertex to its out-neighbors.
///
/// The default hasher is [`FxBuildHasher`], which is not randomly seeded:
/// two graphs built by the same sequence of insertions iterate, and
/// therefore render, in the same order.
#[derive(Clone)]
pub struct HashGraph<V, S = FxBuildHasher> {
    adjacency: HashMap<V, HashSet<V, S>, S>,
    edge_count: usize,
}

impl<V: Vertex> HashGraph<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, FxBuildHasher)
    }
}

impl<V, S> HashGraph<V, S>
where
    V: Vertex,
    S: BuildHasher + Clone + Default,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            adjacency: HashMap::with_hasher(hasher),
            edge_count: 0,
        }
    }

    /// Create an empty graph with room for `capacity` vertices.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            adjacency: HashMap::with_capacity_and_hasher(capacity, hasher),
            edge_count: 0,
        }
    }

    fn neighbors_mut(&mut self, vertex: V) -> &mut HashSet<V, S> {
        let hasher = self.adjacency.hasher().clone();
        match self.adjacency.entry(vertex) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                trace!("add vertex {:?}", entry.key());
                entry.insert(HashSet::with_hasher(hasher))
            }
        }
    }
}

impl<V, S: Default> Default for HashGraph<V, S> {
    fn default() -> Self {
        HashGraph {
            adjacency: HashMap::default(),
            edge_count: 0,
        }
    }
}

impl<V, S> Graph for HashGraph<V, S>
where
    V: Vertex,
    S: BuildHasher + Clone + Default,
{
    type V = V;

    fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    fn num_edges(&self) -> usize {
        self.edge_count
    }

    fn add_vertex(&mut self, vertex: V) {
        self.neighbors_mut(vertex);
    }

    fn add_edge(&mut self, from: V, to: V) -> bool {
        self.edge_count += 1;

        if self.has_edge(&from, &to) {
            debug!(
                "edge ({:?}, {:?}) already present (edge_count = {})",
                from, to, self.edge_count
            );
            return false;
        }

        trace!("add edge ({:?}, {:?})", from, to);
        if !self.contains(&from) {
            self.add_vertex(from.clone());
        }
        if !self.contains(&to) {
            self.add_vertex(to.clone());
        }
        self.neighbors_mut(from).insert(to)
    }

    fn degree(&self, vertex: &V) -> Result<usize, GraphError> {
        self.adjacency
            .get(vertex)
            .map(HashSet::len)
            .ok_or_else(|| GraphError::NotFound(format!("{vertex:?}")))
    }

    fn contains(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn has_edge(&self, from: &V, to: &V) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|neighbors| neighbors.contains(to))
    }

    fn adjacent_to<'a>(&'a self, from: &V) -> impl Iterator<Item = &'a V> + use<'a, V, S>
    where
        V: 'a,
    {
        self.adjacency.get(from).into_iter().flatten()
    }

    fn vertices<'a>(&'a self) -> impl Iterator<Item = &'a V>
    where
        V: 'a,
    {
        self.adjacency.keys()
    }

    fn edges<'a>(&'a self) -> impl Iterator<Item = (&'a V, &'a V)>
    where
        V: 'a,
    {
        self.adjacency
            .iter()
            .flat_map(|(from, neighbors)| neighbors.iter().map(move |to| (from, to)))
    }
}

/// One line per vertex: `<vertex>:`, then ` <first>` and ` ,<next>` for each
/// further neighbor, terminated by `\n`.
impl<V: Display, S> Display for HashGraph<V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, neighbors) in &self.adjacency {
            write!(f, "{vertex}:")?;
            for (i, neighbor) in neighbors.iter().enumerate() {
                if i == 0 {
                    write!(f, " {neighbor}")?;
                } else {
                    write!(f, " ,{neighbor}")?;
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl<V: Debug, S> Debug for HashGraph<V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashGraph")
            .field("adjacency", &self.adjacency)
            .field("edge_count", &self.edge_count)
            .finish()
    }
}

/// Graphs are equal when their rendered strings are equal, so equality
/// depends on iteration order.
impl<V: Display, S> PartialEq for HashGraph<V, S> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.to_string() == other.to_string()
    }
}

impl<V: Display, S> Eq for HashGraph<V, S> {}

impl<V, S> Extend<(V, V)> for HashGraph<V, S>
where
    V: Vertex,
    S: BuildHasher + Clone + Default,
{
    fn extend<I: IntoIterator<Item = (V, V)>>(&mut self, iter: I) {
        iter.into_iter().for_each(|(from, to)| {
            self.add_edge(from, to);
        });
    }
}

impl<V, S> FromIterator<(V, V)> for HashGraph<V, S>
where
    V: Vertex,
    S: BuildHasher + Clone + Default,
{
    fn from_iter<I: IntoIterator<Item = (V, V)>>(iter: I) -> Self {
        let mut graph = HashGraph::default();
        graph.extend(iter);
        graph
    }
}

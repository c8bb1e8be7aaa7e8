use thiserror::Error;

pub mod factory;
pub mod graph;

pub use factory::{GraphBuilder, create_graph};
pub use graph::{Vertex, hash_graph::HashGraph};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("vertex {0} not found in graph")]
    NotFound(String),
}

/// A directed graph over vertices of type [`Graph::V`].
///
/// Edges are unweighted and directed. An undirected edge between `u` and `v`
/// is modelled by the two edges `(u, v)` and `(v, u)`.
pub trait Graph: Default {
    type V: Vertex;

    fn num_vertices(&self) -> usize;

    /// Number of calls to [`Graph::add_edge`], including calls for edges
    /// that were already present.
    fn num_edges(&self) -> usize;

    fn add_vertex(&mut self, vertex: Self::V);

    /// Adds the edge `(from, to)`, inserting missing endpoints first.
    ///
    /// Returns `true` if the edge was not present before. The edge counter is
    /// incremented either way.
    fn add_edge(&mut self, from: Self::V, to: Self::V) -> bool;

    /// Out-degree of `vertex`.
    fn degree(&self, vertex: &Self::V) -> Result<usize, GraphError>;

    fn contains(&self, vertex: &Self::V) -> bool;

    fn has_edge(&self, from: &Self::V, to: &Self::V) -> bool;

    /// Vertices `w` with an edge `(from, w)`.
    ///
    /// Yields nothing if `from` is not a vertex of the graph.
    /// The iterator borrows the graph only, not `from`.
    fn adjacent_to<'a>(
        &'a self,
        from: &Self::V,
    ) -> impl Iterator<Item = &'a Self::V> + use<'a, Self>
    where
        Self::V: 'a;

    fn vertices<'a>(&'a self) -> impl Iterator<Item = &'a Self::V>
    where
        Self::V: 'a;

    /// All distinct edges `(from, to)`.
    fn edges<'a>(&'a self) -> impl Iterator<Item = (&'a Self::V, &'a Self::V)>
    where
        Self::V: 'a;
}

use log::{debug, info};

use crate::{Graph, Vertex, graph::hash_graph::HashGraph};

/// Create an empty graph.
pub fn create_graph<V: Vertex>() -> HashGraph<V> {
    debug!("Created empty graph");
    HashGraph::new()
}

pub struct Uninitialized {}

pub struct FromEdges<V> {
    edges: Vec<(V, V)>,
}

#[derive(Debug)]
pub struct GraphBuilder<State> {
    state: State,
    capacity: usize,
}

impl GraphBuilder<Uninitialized> {
    pub fn new() -> Self {
        Self {
            state: Uninitialized {},
            capacity: 0,
        }
    }

    /// Reserve room for `capacity` vertices.
    ///
    /// The hint changes the bucket count of the vertex map, so the iteration
    /// order, and with it the rendering and equality, can differ from a graph
    /// built with the same `add_edge` calls but without the hint.
    pub fn capacity(self, capacity: usize) -> Self {
        Self { capacity, ..self }
    }

    /// Build the graph by adding `edges` in order, one `add_edge` call per pair.
    ///
    /// Without a capacity hint the result equals a graph from [`create_graph`]
    /// that received the same `add_edge` calls.
    pub fn edges<V, I>(self, edges: I) -> GraphBuilder<FromEdges<V>>
    where
        I: IntoIterator<Item = (V, V)>,
    {
        GraphBuilder {
            state: FromEdges {
                edges: edges.into_iter().collect(),
            },
            capacity: self.capacity,
        }
    }

    pub fn build<V: Vertex>(self) -> HashGraph<V> {
        debug!("Created empty graph (capacity = {})", self.capacity);
        HashGraph::with_capacity(self.capacity)
    }
}

impl Default for GraphBuilder<Uninitialized> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> GraphBuilder<FromEdges<V>> {
    pub fn build(self) -> HashGraph<V> {
        let mut graph = HashGraph::with_capacity(self.capacity);
        graph.extend(self.state.edges);

        info!(
            "Created directed graph (vertex_count: {:?}, edge_count = {:?})",
            graph.num_vertices(),
            graph.num_edges()
        );

        graph
    }
}

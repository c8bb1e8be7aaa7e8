use std::{fmt::Debug, hash::Hash};

pub mod hash_graph;

/// Types usable as graph vertices.
pub trait Vertex: Eq + Hash + Clone + Debug {}

impl<T> Vertex for T where T: Eq + Hash + Clone + Debug {}

use hash_graph::{Graph, HashGraph, create_graph};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Graph with the edges (A, A), (A, B), (C, A), (C, B).
pub fn setup() -> HashGraph<&'static str> {
    init_logger();

    let mut graph = create_graph();
    graph.add_edge("A", "A");
    graph.add_edge("A", "B");
    graph.add_edge("C", "A");
    graph.add_edge("C", "B");
    graph
}

/// Rendered lines, sorted so assertions do not depend on iteration order.
pub fn sorted_lines<G: std::fmt::Display>(graph: &G) -> Vec<String> {
    let mut lines = Vec::from_iter(graph.to_string().lines().map(str::to_owned));
    lines.sort();
    lines
}

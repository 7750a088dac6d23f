use dsi_progress_logger::prelude::*;
use relgraph::prelude::*;

#[test]
fn test_path() {
    let mut graph = Graph::new();
    let a = graph.add_vertex(());
    let b = graph.add_vertex(());
    let c = graph.add_vertex(());
    graph.add_edge(a, b, ());
    graph.add_edge(b, c, ());

    assert!(reachable(&graph, a, b, no_logging![]));
    assert!(reachable(&graph, a, c, no_logging![]));
    assert!(reachable(&graph, b, c, no_logging![]));
    assert!(!reachable(&graph, c, a, no_logging![]));
    assert!(!reachable(&graph, b, a, no_logging![]));
}

#[test]
fn test_direction_matters() {
    let mut graph = Graph::new();
    let a = graph.add_vertex(());
    let b = graph.add_vertex(());
    let c = graph.add_vertex(());
    graph.add_edge(a, b, ());
    graph.add_edge(c, b, ());

    // a and c are weakly connected through b but neither reaches the other.
    assert!(!reachable(&graph, a, c, no_logging![]));
    assert!(!reachable(&graph, c, a, no_logging![]));
}

#[test]
fn test_self_reachability_requires_a_self_loop() {
    let mut graph = Graph::new();
    let a = graph.add_vertex(());
    let b = graph.add_vertex(());
    let c = graph.add_vertex(());
    graph.add_edge(a, b, ());
    graph.add_edge(b, a, ());
    graph.add_edge(c, c, ());

    // Sitting on a longer cycle is not enough: only a self-loop makes a
    // vertex reachable from itself.
    assert!(!reachable(&graph, a, a, no_logging![]));
    assert!(!reachable(&graph, b, b, no_logging![]));
    assert!(reachable(&graph, c, c, no_logging![]));

    let lone = graph.add_vertex(());
    assert!(!reachable(&graph, lone, lone, no_logging![]));
}

#[test]
fn test_self_loop_shortcut() {
    let mut graph = Graph::new();
    let a = graph.add_vertex(());
    graph.add_edge(a, a, ());

    assert!(reachable(&graph, a, a, no_logging![]));
}

#[test]
fn test_absent_vertices() {
    let mut graph: Graph<(), ()> = Graph::new();
    let a = graph.add_vertex(());
    let ghost = VertexId::new(9);

    assert!(!reachable(&graph, a, ghost, no_logging![]));
    assert!(!reachable(&graph, ghost, a, no_logging![]));
    assert!(!reachable(&graph, ghost, ghost, no_logging![]));
}

#[test]
fn test_stops_at_first_discovery() {
    let mut graph = Graph::new();
    let a = graph.add_vertex(());
    let b = graph.add_vertex(());
    graph.add_edge(a, b, ());
    // A long tail behind b that a complete walk would have to cover.
    let mut prev = b;
    for _ in 0..1000 {
        let next = graph.add_vertex(());
        graph.add_edge(prev, next, ());
        prev = next;
    }

    assert!(reachable(&graph, a, b, no_logging![]));
}

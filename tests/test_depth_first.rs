use dsi_progress_logger::prelude::*;
use relgraph::prelude::*;

fn collect_dfs(
    graph: &Graph<&'static str, &'static str>,
    root: VertexId,
    mask: EventMask,
) -> Vec<(VertexId, VertexId, &'static str, EdgeKind)> {
    let mut events = Vec::new();
    each_dfs(
        Direct::new(graph),
        root,
        mask,
        |args, _| events.push((args.source, args.target, *args.info, args.kind)),
        no_logging![],
    );
    events
}

#[test]
fn test_two_cycle_classification() {
    let mut graph = Graph::new();
    let a = graph.add_vertex("a");
    let b = graph.add_vertex("b");
    graph.add_edge(a, b, "ab");
    graph.add_edge(b, a, "ba");

    assert_eq!(
        collect_dfs(&graph, a, EventMask::ALL),
        vec![(a, b, "ab", EdgeKind::Tree), (b, a, "ba", EdgeKind::Back)]
    );
}

#[test]
fn test_forward_or_cross() {
    let mut graph = Graph::new();
    let a = graph.add_vertex("a");
    let b = graph.add_vertex("b");
    let c = graph.add_vertex("c");
    graph.add_edge(a, b, "ab");
    graph.add_edge(b, c, "bc");
    graph.add_edge(a, c, "ac");

    assert_eq!(
        collect_dfs(&graph, a, EventMask::ALL),
        vec![
            (a, b, "ab", EdgeKind::Tree),
            (b, c, "bc", EdgeKind::Tree),
            (a, c, "ac", EdgeKind::ForwardOrCross)
        ]
    );
}

#[test]
fn test_each_edge_reported_exactly_once() {
    let mut graph = Graph::new();
    let a = graph.add_vertex("a");
    let b = graph.add_vertex("b");
    let c = graph.add_vertex("c");
    let d = graph.add_vertex("d");
    graph.add_edge(a, b, "ab");
    graph.add_edge(a, c, "ac");
    graph.add_edge(b, d, "bd");
    graph.add_edge(c, d, "cd");
    graph.add_edge(d, a, "da");

    let events = collect_dfs(&graph, a, EventMask::ALL);
    assert_eq!(events.len(), graph.num_edges());

    let mut infos: Vec<_> = events.iter().map(|(_, _, info, _)| *info).collect();
    infos.sort_unstable();
    assert_eq!(infos, vec!["ab", "ac", "bd", "cd", "da"]);
}

#[test]
fn test_mask_is_observational_only() {
    let mut graph = Graph::new();
    let a = graph.add_vertex("a");
    let b = graph.add_vertex("b");
    let c = graph.add_vertex("c");
    let d = graph.add_vertex("d");
    graph.add_edge(a, b, "ab");
    graph.add_edge(b, d, "bd");
    graph.add_edge(d, a, "da");
    graph.add_edge(a, c, "ac");
    graph.add_edge(c, d, "cd");

    // The walk is the same whatever the mask; only delivery is filtered.
    let all = collect_dfs(&graph, a, EventMask::ALL);
    let tree = collect_dfs(&graph, a, EventMask::TREE);
    let non_tree = collect_dfs(&graph, a, EventMask::NON_TREE);
    let back = collect_dfs(&graph, a, EventMask::BACK);

    assert_eq!(
        tree,
        all.iter()
            .copied()
            .filter(|&(_, _, _, kind)| kind == EdgeKind::Tree)
            .collect::<Vec<_>>()
    );
    assert_eq!(
        non_tree,
        all.iter()
            .copied()
            .filter(|&(_, _, _, kind)| kind != EdgeKind::Tree)
            .collect::<Vec<_>>()
    );
    assert_eq!(back, vec![(d, a, "da", EdgeKind::Back)]);
}

#[test]
fn test_absent_root_is_a_no_op() {
    let mut graph = Graph::new();
    let a = graph.add_vertex("a");
    let b = graph.add_vertex("b");
    graph.add_edge(a, b, "ab");

    each_dfs(
        Direct::new(&graph),
        VertexId::new(99),
        EventMask::ALL,
        |_, _| panic!("no event should be delivered for an absent root"),
        no_logging![],
    );
}

#[test]
fn test_multigraph_parallel_edges() {
    let mut graph = Graph::new();
    let a = graph.add_vertex("a");
    let b = graph.add_vertex("b");
    graph.add_edge(a, b, "first");
    graph.add_edge(a, b, "second");

    assert_eq!(
        collect_dfs(&graph, a, EventMask::ALL),
        vec![
            (a, b, "first", EdgeKind::Tree),
            (a, b, "second", EdgeKind::ForwardOrCross)
        ]
    );
}

#[test]
fn test_self_loop_is_a_back_edge() {
    let mut graph = Graph::new();
    let a = graph.add_vertex("a");
    graph.add_edge(a, a, "aa");

    assert_eq!(
        collect_dfs(&graph, a, EventMask::ALL),
        vec![(a, a, "aa", EdgeKind::Back)]
    );
}

#[test]
fn test_prune_confines_to_branch() {
    let mut graph = Graph::new();
    let r = graph.add_vertex("r");
    let a = graph.add_vertex("a");
    let b = graph.add_vertex("b");
    let c = graph.add_vertex("c");
    let d = graph.add_vertex("d");
    graph.add_edge(r, a, "ra");
    graph.add_edge(a, c, "ac");
    graph.add_edge(r, b, "rb");
    graph.add_edge(b, d, "bd");

    let mut events = Vec::new();
    each_dfs(
        Direct::new(&graph),
        r,
        EventMask::ALL,
        |args, pruner| {
            events.push((args.source, args.target, args.kind));
            // Cut the subtree below a; siblings and ancestors keep going.
            if args.target == a {
                pruner.prune();
            }
        },
        no_logging![],
    );

    assert_eq!(
        events,
        vec![
            (r, a, EdgeKind::Tree),
            (r, b, EdgeKind::Tree),
            (b, d, EdgeKind::Tree)
        ]
    );
}

#[test]
fn test_reverse_view_swaps_direction() {
    let mut graph = Graph::new();
    let a = graph.add_vertex("a");
    let b = graph.add_vertex("b");
    let c = graph.add_vertex("c");
    graph.add_edge(a, b, "ab");
    graph.add_edge(b, c, "bc");

    let mut events = Vec::new();
    each_dfs(
        Reverse::new(&graph),
        c,
        EventMask::ALL,
        |args, _| events.push((args.source, args.target, *args.info, args.kind)),
        no_logging![],
    );

    assert_eq!(
        events,
        vec![(c, b, "bc", EdgeKind::Tree), (b, a, "ab", EdgeKind::Tree)]
    );
}

#[test]
fn test_kernel_event_sequence() {
    let mut graph = Graph::new();
    let a = graph.add_vertex("a");
    let b = graph.add_vertex("b");
    let c = graph.add_vertex("c");
    graph.add_edge(a, b, "ab");
    graph.add_edge(b, c, "bc");

    let mut trace = Vec::new();
    let mut visit = depth_first::SeqPath::new(Direct::new(&graph));
    visit
        .visit::<std::convert::Infallible, _>(
            a,
            |event| {
                match event {
                    depth_first::Event::Init { root } => trace.push(("init", root, 0)),
                    depth_first::Event::Previsit { curr, depth, .. } => {
                        trace.push(("pre", curr, depth))
                    }
                    depth_first::Event::Postvisit { curr, depth, .. } => {
                        trace.push(("post", curr, depth))
                    }
                    depth_first::Event::Done { root } => trace.push(("done", root, 0)),
                    depth_first::Event::Revisit { .. } => panic!("no revisit on a path graph"),
                }
                Ok(())
            },
            no_logging![],
        )
        .unwrap_or_else(|e| match e {});

    assert_eq!(
        trace,
        vec![
            ("init", a, 0),
            ("pre", a, 0),
            ("pre", b, 1),
            ("pre", c, 2),
            ("post", c, 2),
            ("post", b, 1),
            ("post", a, 0),
            ("done", a, 0)
        ]
    );
}

#[test]
fn test_visit_all_covers_disconnected_components() {
    let mut graph = Graph::new();
    let a = graph.add_vertex("a");
    let b = graph.add_vertex("b");
    let c = graph.add_vertex("c");
    graph.add_edge(a, b, "ab");

    let mut inits = Vec::new();
    let mut visit = depth_first::SeqNoPath::new(Direct::new(&graph));
    visit
        .visit_all::<std::convert::Infallible, _>(
            |event| {
                if let depth_first::Event::Init { root } = event {
                    inits.push(root);
                }
                Ok(())
            },
            no_logging![],
        )
        .unwrap_or_else(|e| match e {});

    // b is reached from a, so only a and c start a walk.
    assert_eq!(inits, vec![a, c]);
}

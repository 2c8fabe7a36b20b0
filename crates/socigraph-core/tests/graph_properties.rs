//! Property tests for the graph container invariants.

use proptest::prelude::*;
use socigraph_common::NodeId;
use socigraph_core::{Node, NodeUpdate, SocialGraph, WeightConfig};

#[derive(Debug, Clone)]
enum Op {
    AddNode(u64),
    RemoveNode(u64),
    AddEdge(u64, u64),
    RemoveEdge(u64, u64),
    Update(u64, f64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0u64..12).prop_map(Op::AddNode),
        1 => (0u64..12).prop_map(Op::RemoveNode),
        4 => (0u64..12, 0u64..12).prop_map(|(u, v)| Op::AddEdge(u, v)),
        1 => (0u64..12, 0u64..12).prop_map(|(u, v)| Op::RemoveEdge(u, v)),
        1 => (0u64..12, 0.0f64..10.0).prop_map(|(id, a)| Op::Update(id, a)),
    ]
}

fn apply(graph: &mut SocialGraph, ops: &[Op], config: &WeightConfig) {
    for op in ops {
        // Errors are part of the property: a rejected call must leave the graph valid.
        let _ = match *op {
            Op::AddNode(id) => graph
                .add_node(Node::new(id, format!("n{id}")).with_activity(id as f64 / 3.0))
                .map(|_| ()),
            Op::RemoveNode(id) => {
                graph.remove_node(NodeId::new(id));
                Ok(())
            }
            Op::AddEdge(u, v) => graph.add_edge(NodeId::new(u), NodeId::new(v), config).map(|_| ()),
            Op::RemoveEdge(u, v) => {
                graph.remove_edge(NodeId::new(u), NodeId::new(v));
                Ok(())
            }
            Op::Update(id, a) => graph
                .update_node(NodeId::new(id), &NodeUpdate::new().activity(a))
                .map(|_| ()),
        };
    }
}

fn assert_consistent(graph: &SocialGraph) {
    assert!(graph.adjacency().is_symmetric());
    assert_eq!(graph.adjacency().edge_count(), graph.edge_count());
    assert_eq!(graph.adjacency().node_count(), graph.node_count());

    for edge in graph.edges() {
        assert_ne!(edge.u(), edge.v());
        assert!(edge.u() < edge.v());
        assert!(graph.contains_node(edge.u()));
        assert!(graph.contains_node(edge.v()));
        assert!(graph.neighbors(edge.u()).any(|n| n == edge.v()));
        assert!(edge.weight() > 0.0 && edge.weight() <= 1.0);
    }

    let degree_sum: usize = graph.node_ids().into_iter().map(|id| graph.degree(id)).sum();
    assert_eq!(degree_sum, 2 * graph.edge_count());
}

proptest! {
    #[test]
    fn prop_random_mutations_keep_graph_consistent(ops in prop::collection::vec(op(), 0..80)) {
        let mut graph = SocialGraph::new();
        apply(&mut graph, &ops, &WeightConfig::default());
        assert_consistent(&graph);
    }

    #[test]
    fn prop_remove_node_leaves_no_incident_edges(
        ops in prop::collection::vec(op(), 0..80),
        victim in 0u64..12,
    ) {
        let mut graph = SocialGraph::new();
        apply(&mut graph, &ops, &WeightConfig::default());

        let victim = NodeId::new(victim);
        graph.remove_node(victim);

        prop_assert!(!graph.contains_node(victim));
        prop_assert!(graph.edges().all(|e| !e.key().contains(victim)));
        prop_assert!(graph
            .node_ids()
            .into_iter()
            .all(|id| graph.neighbors(id).all(|n| n != victim)));
        assert_consistent(&graph);
    }

    #[test]
    fn prop_recompute_is_idempotent(
        ops in prop::collection::vec(op(), 0..60),
        a in 0.0f64..5.0,
        i in 0.0f64..5.0,
        c in 0.0f64..5.0,
    ) {
        let mut graph = SocialGraph::new();
        apply(&mut graph, &ops, &WeightConfig::default());
        let config = WeightConfig::new(a, i, c).unwrap();

        graph.recompute_all_weights(&config).unwrap();
        let first: Vec<f64> = graph.edges().map(|e| e.weight()).collect();
        graph.recompute_all_weights(&config).unwrap();
        let second: Vec<f64> = graph.edges().map(|e| e.weight()).collect();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_neighbors_are_ascending(ops in prop::collection::vec(op(), 0..80)) {
        let mut graph = SocialGraph::new();
        apply(&mut graph, &ops, &WeightConfig::default());
        for id in graph.node_ids() {
            let neighbors: Vec<NodeId> = graph.neighbors(id).collect();
            prop_assert!(neighbors.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

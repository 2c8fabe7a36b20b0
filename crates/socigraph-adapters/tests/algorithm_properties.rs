//! Property tests for the algorithm suite.

use proptest::prelude::*;
use socigraph_adapters::plugins::algorithms::{
    Heuristic, astar, bfs, bfs_layers, connected_components, dfs, dijkstra, welsh_powell,
};
use socigraph_common::NodeId;
use socigraph_core::{Node, SocialGraph};

/// A random graph on ids `0..n` with weights in `(0, 1]`.
fn arb_graph() -> impl Strategy<Value = SocialGraph> {
    (1u64..20).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n, 1u32..=100), 0..60).prop_map(move |edges| {
            let mut graph = SocialGraph::new();
            for id in 0..n {
                graph
                    .add_node(Node::new(id, format!("n{id}")).with_position(id as f64, 0.0))
                    .unwrap();
            }
            for (u, v, w) in edges {
                // Self-loops and duplicates are rejected; skipping them is fine here
                let _ = graph.add_edge(NodeId::new(u), NodeId::new(v), f64::from(w) / 100.0);
            }
            graph
        })
    })
}

proptest! {
    #[test]
    fn prop_coloring_is_proper(graph in arb_graph()) {
        let result = welsh_powell(&graph);
        prop_assert_eq!(result.colors.len(), graph.node_count());
        for edge in graph.edges() {
            prop_assert_ne!(result.colors[&edge.u()], result.colors[&edge.v()]);
        }
        let max_degree = graph.node_ids().into_iter().map(|id| graph.degree(id)).max().unwrap_or(0);
        prop_assert!(result.color_count <= max_degree + 1);
    }

    #[test]
    fn prop_astar_zero_matches_dijkstra(graph in arb_graph(), s in 0u64..20, t in 0u64..20) {
        let n = graph.node_count() as u64;
        let (s, t) = (NodeId::new(s % n), NodeId::new(t % n));
        let d = dijkstra(&graph, s, Some(t)).unwrap();
        let a = astar(&graph, s, t, Heuristic::Zero).unwrap();
        prop_assert_eq!(d.cost, a.cost);
        prop_assert_eq!(d.path, a.path);
    }

    #[test]
    fn prop_path_cost_matches_edge_weights(graph in arb_graph(), s in 0u64..20, t in 0u64..20) {
        let n = graph.node_count() as u64;
        let (s, t) = (NodeId::new(s % n), NodeId::new(t % n));
        let result = dijkstra(&graph, s, Some(t)).unwrap();
        if let Some(cost) = result.cost {
            prop_assert_eq!(result.path.first(), Some(&s));
            prop_assert_eq!(result.path.last(), Some(&t));
            let total: f64 = result
                .path
                .windows(2)
                .map(|w| graph.edge_weight(w[0], w[1]).unwrap())
                .sum();
            prop_assert!((total - cost).abs() < 1e-9);
        } else {
            prop_assert!(result.path.is_empty());
        }
    }

    #[test]
    fn prop_bfs_visits_in_level_order(graph in arb_graph(), s in 0u64..20) {
        let s = NodeId::new(s % graph.node_count() as u64);
        let order = bfs(&graph, s).unwrap().order;
        let layers = bfs_layers(&graph, s).unwrap().layers;

        let level_of = |id: NodeId| layers.iter().position(|layer| layer.contains(&id)).unwrap();
        let levels: Vec<usize> = order.iter().map(|&id| level_of(id)).collect();
        prop_assert!(levels.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(order.len(), layers.iter().map(Vec::len).sum::<usize>());
    }

    #[test]
    fn prop_traversals_reach_the_component(graph in arb_graph(), s in 0u64..20) {
        let s = NodeId::new(s % graph.node_count() as u64);
        let components = connected_components(&graph);
        let own = &components.components[components.component_of(s).unwrap()];

        let mut via_bfs = bfs(&graph, s).unwrap().order;
        let mut via_dfs = dfs(&graph, s).unwrap().order;
        let mut expected = own.clone();
        via_bfs.sort_unstable();
        via_dfs.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(&via_bfs, &expected);
        prop_assert_eq!(&via_dfs, &expected);
    }
}

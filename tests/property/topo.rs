use std::collections::HashSet;

use dagx::{Dag, DagError};
use dagx_test_utils::assert_valid_order;
use petgraph::algo::{is_cyclic_directed, toposort};
use petgraph::graphmap::DiGraphMap;
use proptest::prelude::*;

// Acyclic edge lists: node N may only point at nodes N+1.. so no cycle can form.
// Repeats are kept on purpose to exercise parallel edges.
fn acyclic_edges_strategy(max_nodes: usize) -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1..=max_nodes).prop_flat_map(|num_nodes| {
        let edges = proptest::collection::vec((0..num_nodes, 0..num_nodes), 0..num_nodes * 3)
            .prop_map(|raw| {
                raw.into_iter()
                    .filter(|(a, b)| a != b)
                    .map(|(a, b)| if a < b { (a, b) } else { (b, a) })
                    .collect::<Vec<_>>()
            });
        (Just(num_nodes), edges)
    })
}

// Arbitrary edge lists, self-loops included.
fn any_edges_strategy(max_nodes: usize) -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1..=max_nodes).prop_flat_map(|num_nodes| {
        (
            Just(num_nodes),
            proptest::collection::vec((0..num_nodes, 0..num_nodes), 0..num_nodes * 3),
        )
    })
}

fn name(i: usize) -> String {
    format!("n{i}")
}

fn build(num_nodes: usize, edges: &[(usize, usize)]) -> Dag {
    let mut dag = Dag::new();
    for i in 0..num_nodes {
        dag.add_node(&name(i));
    }
    for &(a, b) in edges {
        dag.add_edge(&name(a), &name(b));
    }
    dag
}

fn petgraph_of(dag: &Dag) -> DiGraphMap<&str, ()> {
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();
    for id in dag.nodes() {
        graph.add_node(id);
    }
    for edge in dag.edges() {
        graph.add_edge(edge.from, edge.to, ());
    }
    graph
}

proptest! {
    #[test]
    fn acyclic_graphs_sort_completely((num_nodes, edges) in acyclic_edges_strategy(12)) {
        let dag = build(num_nodes, &edges);
        let order = dag.topological_order();
        prop_assert!(order.is_ok(), "acyclic graph failed to sort: {:?}", order);
        let order = order.unwrap_or_default();

        assert_valid_order(&dag, &order);
        let distinct: HashSet<&String> = order.iter().collect();
        prop_assert_eq!(distinct.len(), num_nodes);
        prop_assert!(!dag.has_cycle());
    }

    #[test]
    fn cycle_detection_agrees_with_petgraph((num_nodes, edges) in any_edges_strategy(8)) {
        let dag = build(num_nodes, &edges);
        let graph = petgraph_of(&dag);

        prop_assert_eq!(dag.has_cycle(), is_cyclic_directed(&graph));
        match dag.topological_order() {
            Ok(order) => {
                prop_assert!(toposort(&graph, None).is_ok());
                assert_valid_order(&dag, &order);
            }
            Err(err) => {
                prop_assert_eq!(err, DagError::CycleDetected);
                prop_assert!(toposort(&graph, None).is_err());
            }
        }
    }

    #[test]
    fn in_degree_counts_edge_occurrences((num_nodes, edges) in any_edges_strategy(8)) {
        let dag = build(num_nodes, &edges);
        for i in 0..num_nodes {
            let expected = edges.iter().filter(|&&(_, b)| b == i).count();
            prop_assert_eq!(dag.in_degree(&name(i)), expected);
        }
        prop_assert_eq!(dag.edge_count(), edges.len());
    }

    #[test]
    fn add_node_is_idempotent(ids in proptest::collection::vec("[a-c]{0,2}", 0..10)) {
        let mut once = Dag::new();
        let mut twice = Dag::new();
        for id in ids.iter() {
            once.add_node(id);
            twice.add_node(id);
            twice.add_node(id);
        }
        let a: HashSet<&str> = once.nodes().collect();
        let b: HashSet<&str> = twice.nodes().collect();
        prop_assert_eq!(a, b);
        prop_assert!(!twice.contains(""));
    }
}

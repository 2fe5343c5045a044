//! Integration tests driving the crate entirely through its public API
//! (`graphwright::new` plus the `ImmutableGraph`/`MutableGraph` traits),
//! covering the universal invariants and round-trip laws rather than
//! re-testing individual module internals.

use graphwright::algorithms::set_ops::{components, union};
use graphwright::algorithms::tree::minimum_spanning_tree;
use graphwright::traits_config::directed;
use graphwright::{hash_fns, new, ErrorKind, ImmutableGraphContainer as _, MutableGraphContainer as _};

#[test]
fn add_vertex_increases_order_and_is_retrievable() {
    let mut g = new(hash_fns::i32(), vec![directed()]);
    g.add_vertex(1, vec![]).unwrap();
    assert_eq!(g.vertex(&1).unwrap(), 1);
    assert_eq!(g.order(), 1);
}

#[test]
fn add_edge_increases_size_and_appears_in_adjacency_map() {
    let mut g = new(hash_fns::i32(), vec![directed()]);
    g.add_vertex(1, vec![]).unwrap();
    g.add_vertex(2, vec![]).unwrap();
    g.add_edge(1, 2, vec![]).unwrap();
    assert_eq!(g.size(), 1);
    assert!(g.adjacency_map()[&1].contains_key(&2));
    assert!(g.edge(&1, &2).is_ok());
}

#[test]
fn undirected_edge_is_symmetric() {
    let mut g = new(hash_fns::i32(), vec![]);
    g.add_vertex(1, vec![]).unwrap();
    g.add_vertex(2, vec![]).unwrap();
    g.add_edge(1, 2, vec![]).unwrap();
    assert_eq!(g.edge(&1, &2).unwrap(), g.edge(&2, &1).unwrap());
}

#[test]
fn every_vertex_has_an_adjacency_map_entry_even_with_no_edges() {
    let mut g = new(hash_fns::i32(), vec![directed()]);
    g.add_vertex(1, vec![]).unwrap();
    assert!(g.adjacency_map().contains_key(&1));
}

#[test]
fn predecessor_map_mirrors_adjacency_map_in_directed_mode() {
    let mut g = new(hash_fns::i32(), vec![directed()]);
    g.add_vertex(1, vec![]).unwrap();
    g.add_vertex(2, vec![]).unwrap();
    g.add_edge(1, 2, vec![]).unwrap();
    let adjacency = g.adjacency_map();
    let predecessors = g.predecessor_map();
    assert_eq!(predecessors[&2][&1].weight, adjacency[&1][&2].weight);
}

#[test]
fn remove_edge_then_lookup_fails_with_edge_not_found() {
    let mut g = new(hash_fns::i32(), vec![directed()]);
    g.add_vertex(1, vec![]).unwrap();
    g.add_vertex(2, vec![]).unwrap();
    g.add_edge(1, 2, vec![]).unwrap();
    g.remove_edge(&1, &2).unwrap();
    assert!(matches!(g.edge(&1, &2).unwrap_err().kind(), ErrorKind::EdgeNotFound(1, 2)));
}

#[test]
fn clone_of_a_graph_is_independent() {
    let mut g = new(hash_fns::i32(), vec![directed()]);
    g.add_vertex(1, vec![]).unwrap();
    let mut cloned = g.clone();
    cloned.add_vertex(2, vec![]).unwrap();
    assert_eq!(g.order(), 1);
    assert_eq!(cloned.order(), 2);
}

#[test]
fn union_of_disjoint_directed_graphs_sums_order_and_size() {
    let mut g = new(hash_fns::i32(), vec![directed()]);
    g.add_vertex(1, vec![]).unwrap();
    g.add_vertex(2, vec![]).unwrap();
    g.add_edge(1, 2, vec![]).unwrap();

    let mut h = new(hash_fns::i32(), vec![directed()]);
    h.add_vertex(3, vec![]).unwrap();
    h.add_vertex(4, vec![]).unwrap();
    h.add_edge(3, 4, vec![]).unwrap();

    let merged = union(&g, &h).unwrap();
    assert_eq!(merged.order(), g.order() + h.order());
    assert_eq!(merged.size(), g.size() + h.size());
}

#[test]
fn components_partition_the_vertex_set() {
    let mut g = new(hash_fns::i32(), vec![directed()]);
    for v in 1..=5 {
        g.add_vertex(v, vec![]).unwrap();
    }
    g.add_edge(1, 2, vec![]).unwrap();
    g.add_edge(2, 3, vec![]).unwrap();
    g.add_edge(4, 5, vec![]).unwrap();

    let pieces = components(&g).unwrap();
    let total: usize = pieces.iter().map(|p| p.order()).sum();
    assert_eq!(total, g.order());

    let mut sizes: Vec<usize> = pieces.iter().map(|p| p.order()).collect();
    sizes.sort();
    assert_eq!(sizes, vec![2, 3]);
}

#[test]
fn minimum_spanning_tree_on_a_connected_graph_has_order_minus_one_edges() {
    let mut g = new(hash_fns::string(), vec![]);
    for v in ["A", "B", "C", "D"] {
        g.add_vertex(v.to_string(), vec![]).unwrap();
    }
    for (u, v, w) in [("A", "B", 2), ("A", "C", 4), ("A", "D", 3), ("B", "C", 4), ("B", "D", 1), ("C", "D", 3)] {
        g.add_edge(u.to_string(), v.to_string(), vec![graphwright::properties::edge_weight(w)]).unwrap();
    }
    let tree = minimum_spanning_tree(&g).unwrap();
    assert_eq!(tree.size(), g.order() - 1);
}

#[test]
fn prevent_cycles_rejects_any_edge_that_would_close_a_cycle() {
    use graphwright::traits_config::prevent_cycles;
    let mut g = new(hash_fns::i32(), vec![directed(), prevent_cycles()]);
    g.add_vertex(1, vec![]).unwrap();
    g.add_vertex(2, vec![]).unwrap();
    g.add_vertex(3, vec![]).unwrap();
    g.add_edge(1, 2, vec![]).unwrap();
    g.add_edge(2, 3, vec![]).unwrap();
    let err = g.add_edge(3, 1, vec![]).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::EdgeCreatesCycle(3, 1)));
}

#[test]
fn remove_vertex_with_incident_edges_fails() {
    let mut g = new(hash_fns::i32(), vec![directed()]);
    g.add_vertex(1, vec![]).unwrap();
    g.add_vertex(2, vec![]).unwrap();
    g.add_edge(1, 2, vec![]).unwrap();
    assert!(matches!(g.remove_vertex(&1).unwrap_err().kind(), ErrorKind::VertexHasEdges(1, _)));
}

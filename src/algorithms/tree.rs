//! # Tree algorithms
//!
//! ## Description
//! Kruskal's minimum and maximum spanning tree, built on the shared
//! [`UnionFind`] component. Both require `IsUndirected`.

use std::fmt::Debug;
use std::hash::Hash;

use crate::errors::{ErrorKind, GraphError, GraphResult};
use crate::graph::{ImmutableGraph, MutableGraph};
use crate::union_find::UnionFind;

/// # Minimum spanning tree
///
/// ## Description
/// Kruskal's algorithm: sort all edges ascending by weight, and greedily
/// add each one whose endpoints are in different union-find sets,
/// merging those sets. A disconnected input yields a spanning forest in
/// one returned graph — every vertex from the input is present, only
/// edges closing a cycle within the tree being built are skipped.
pub fn minimum_spanning_tree<T, K>(graph: &dyn MutableGraph<T, K>) -> GraphResult<Box<dyn MutableGraph<T, K>>, T, K>
where
    T: Clone + 'static,
    K: Clone + Eq + Hash + Debug + 'static,
{
    kruskal(graph, false)
}

/// # Maximum spanning tree
///
/// ## Description
/// Identical to [`minimum_spanning_tree`] with edges sorted descending by
/// weight instead of ascending.
pub fn maximum_spanning_tree<T, K>(graph: &dyn MutableGraph<T, K>) -> GraphResult<Box<dyn MutableGraph<T, K>>, T, K>
where
    T: Clone + 'static,
    K: Clone + Eq + Hash + Debug + 'static,
{
    kruskal(graph, true)
}

fn kruskal<T, K>(graph: &dyn MutableGraph<T, K>, descending: bool) -> GraphResult<Box<dyn MutableGraph<T, K>>, T, K>
where
    T: Clone + 'static,
    K: Clone + Eq + Hash + Debug + 'static,
{
    if graph.traits().is_directed() {
        return Err(GraphError::new(ErrorKind::WrongGraphKind("undirected")));
    }

    let mut tree = dyn_clone::clone_box(graph);
    for (source, target, _) in graph.edges() {
        tree.remove_edge(&source, &target).ok();
    }

    let keys: Vec<K> = graph.vertices_with_properties().into_iter().map(|(key, _, _)| key).collect();
    let mut union_find = UnionFind::new(keys);

    let mut edges = graph.edges();
    if descending {
        edges.sort_by(|a, b| b.2.weight.cmp(&a.2.weight));
    } else {
        edges.sort_by(|a, b| a.2.weight.cmp(&b.2.weight));
    }

    let label = if descending { "maximum_spanning_tree" } else { "minimum_spanning_tree" };
    for (source, target, properties) in edges {
        if union_find.find(&source) != union_find.find(&target) {
            tree.add_edge(source.clone(), target.clone(), vec![
                crate::properties::edge_weight(properties.weight),
                crate::properties::edge_attributes(properties.attributes.clone()),
            ]).map_err(|e| e.context(label))?;
            union_find.union(&source, &target);
        }
    }

    Ok(tree)
}



#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::edge_weight;
    use crate::traits_config::{directed, Traits};
    use crate::undirected::UndirectedGraph;
    use crate::directed::DirectedGraph;
    use std::sync::Arc;

    fn undirected_graph() -> UndirectedGraph<char, char> {
        UndirectedGraph::new(Arc::new(|v: &char| *v), Traits::default())
    }

    #[test]
    fn minimum_spanning_tree_matches_worked_example() {
        // {A,B,C,D} with (A,B,2),(A,C,4),(A,D,3),(B,C,4),(B,D,1),(C,D,3)
        // -> MST edges {(A,B,2),(B,D,1),(C,D,3)}, total weight 6.
        let mut g = undirected_graph();
        for v in "ABCD".chars() {
            g.add_vertex(v, vec![]).unwrap();
        }
        for (u, v, w) in [('A', 'B', 2), ('A', 'C', 4), ('A', 'D', 3), ('B', 'C', 4), ('B', 'D', 1), ('C', 'D', 3)] {
            g.add_edge(u, v, vec![edge_weight(w)]).unwrap();
        }
        let tree = minimum_spanning_tree(&g).unwrap();
        assert_eq!(tree.order(), 4);
        assert_eq!(tree.edges().len(), 3);
        let total: i64 = tree.edges().iter().map(|(_, _, p)| p.weight).sum();
        assert_eq!(total, 6);
    }

    #[test]
    fn maximum_spanning_tree_picks_heaviest_edges() {
        let mut g = undirected_graph();
        for v in "ABCD".chars() {
            g.add_vertex(v, vec![]).unwrap();
        }
        for (u, v, w) in [('A', 'B', 2), ('A', 'C', 4), ('A', 'D', 3), ('B', 'C', 4), ('B', 'D', 1), ('C', 'D', 3)] {
            g.add_edge(u, v, vec![edge_weight(w)]).unwrap();
        }
        let tree = maximum_spanning_tree(&g).unwrap();
        let total: i64 = tree.edges().iter().map(|(_, _, p)| p.weight).sum();
        assert!(total >= 10);
    }

    #[test]
    fn mst_on_directed_graph_fails() {
        let g: DirectedGraph<i32, i32> = DirectedGraph::new(Arc::new(|v: &i32| *v), Traits::from_options(vec![directed()]));
        let err = minimum_spanning_tree(&g).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::WrongGraphKind("undirected")));
    }

    #[test]
    fn disconnected_input_yields_forest() {
        let mut g = undirected_graph();
        for v in "ABCD".chars() {
            g.add_vertex(v, vec![]).unwrap();
        }
        g.add_edge('A', 'B', vec![edge_weight(1)]).unwrap();
        g.add_edge('C', 'D', vec![edge_weight(1)]).unwrap();
        let tree = minimum_spanning_tree(&g).unwrap();
        assert_eq!(tree.order(), 4);
        assert_eq!(tree.edges().len(), 2);
    }
}

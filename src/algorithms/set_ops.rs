//! # Set operations
//!
//! ## Description
//! Graph-level set operations: [`union`] merges two disjoint graphs of the
//! same kind into one, and [`components`] partitions a graph into its
//! weakly connected pieces, each returned as a fresh graph of the same
//! kind carrying only its own vertices and edges.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use crate::errors::{ErrorKind, GraphError, GraphResult};
use crate::graph::{ImmutableGraph, MutableGraph};
use crate::traversal::{self, Step};

/// # Union
///
/// ## Description
/// Merges `h` into a clone of `g`. Requires the two graphs to have
/// disjoint vertex keys — any shared key fails with
/// [`ErrorKind::VertexAlreadyExists`] before anything is mutated. Vertices
/// are re-added through `add_vertex` (so the key is rehashed rather than
/// copied verbatim) and edges through `add_edge`, carrying weight and
/// attributes but not the opaque data payload, which only `EdgeOption`
/// closures can set and which isn't retrievable from `EdgeProperties`
/// alone without re-running the original closure.
pub fn union<T, K>(g: &dyn MutableGraph<T, K>, h: &dyn MutableGraph<T, K>) -> GraphResult<Box<dyn MutableGraph<T, K>>, T, K>
where
    T: Clone + 'static,
    K: Clone + Eq + Hash + Debug + 'static,
{
    for (key, value, _) in h.vertices_with_properties() {
        if g.vertex(&key).is_ok() {
            return Err(GraphError::new(ErrorKind::VertexAlreadyExists(key, value)));
        }
    }

    let mut result = dyn_clone::clone_box(g);
    for (_, value, properties) in h.vertices_with_properties() {
        result.add_vertex(value, vec![
            crate::properties::vertex_weight(properties.weight),
            crate::properties::vertex_attributes(properties.attributes.clone()),
        ]).map_err(|e| e.context("union"))?;
    }
    for (source, target, properties) in h.edges() {
        result.add_edge(source, target, vec![
            crate::properties::edge_weight(properties.weight),
            crate::properties::edge_attributes(properties.attributes.clone()),
        ]).map_err(|e| e.context("union"))?;
    }
    Ok(result)
}

/// # Connected components
///
/// ## Description
/// Partitions `graph` into its weakly connected components — a walk
/// follows both `adjacency_map` and `predecessor_map` neighbors, so edge
/// direction is ignored even on a directed graph. Each component is
/// returned as a fresh graph of the same kind (same traits, same hash
/// function) holding only that component's vertices and the edges between
/// them; order across the returned list is unspecified but every input
/// vertex appears in exactly one output graph.
pub fn components<T, K>(graph: &dyn MutableGraph<T, K>) -> GraphResult<Vec<Box<dyn MutableGraph<T, K>>>, T, K>
where
    T: Clone + 'static,
    K: Clone + Eq + Hash + Debug + 'static,
{
    let adjacency = graph.adjacency_map();
    let predecessors = graph.predecessor_map();
    let all_vertices = graph.vertices_with_properties();
    let all_edges = graph.edges();

    let mut visited: HashSet<K> = HashSet::new();
    let mut pieces = Vec::new();

    for (key, _, _) in &all_vertices {
        if visited.contains(key) {
            continue;
        }
        let member_keys = traversal::bfs(
            key.clone(),
            |current| {
                let mut neighbors: Vec<K> = adjacency.get(current).map(|m| m.keys().cloned().collect()).unwrap_or_default();
                neighbors.extend(predecessors.get(current).map(|m| m.keys().cloned().collect::<Vec<K>>()).unwrap_or_default());
                neighbors
            },
            |_| Step::Continue,
        );
        visited.extend(member_keys.iter().cloned());

        let mut piece = dyn_clone::clone_box(graph);
        for (source, target, _) in &all_edges {
            if !member_keys.contains(source) || !member_keys.contains(target) {
                piece.remove_edge(source, target).ok();
            }
        }
        for (other_key, _, _) in &all_vertices {
            if !member_keys.contains(other_key) {
                piece.remove_vertex(other_key).ok();
            }
        }
        pieces.push(piece);
    }
    Ok(pieces)
}

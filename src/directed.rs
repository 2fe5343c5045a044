//! # Directed graph
//!
//! ## Description
//! A graph where `(u, v)` and `(v, u)` are independent edges. Matches
//! §4.F: edges are stored once, in `out_edges[u][v]` / `in_edges[v][u]`;
//! `predecessor_map` returns true predecessors (the store's `in_edges`
//! directly); `size` is the logical edge count with no symmetric-storage
//! correction.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use crate::algorithms::path::creates_cycle;
use crate::errors::{ErrorKind, GraphError, GraphResult};
use crate::graph::{ImmutableGraph, MutableGraph};
use crate::properties::{apply_edge_options, apply_vertex_options, EdgeOption, EdgeProperties, VertexOption, VertexProperties};
use crate::store::{InMemoryStore, Store};
use crate::traits_config::Traits;

pub struct DirectedGraph<T, K>
where
    T: Clone,
    K: Clone + Eq + Hash + Debug,
{
    pub(crate) hash_fn: Arc<dyn Fn(&T) -> K + Send + Sync>,
    pub(crate) traits: Traits,
    pub(crate) store: InMemoryStore<T, K>,
}

impl<T, K> DirectedGraph<T, K>
where
    T: Clone,
    K: Clone + Eq + Hash + Debug,
{
    pub fn new(hash_fn: Arc<dyn Fn(&T) -> K + Send + Sync>, traits: Traits) -> Self {
        DirectedGraph { hash_fn, traits, store: InMemoryStore::new() }
    }

    fn add_edge_with_properties(&mut self, source: K, target: K, properties: EdgeProperties) -> GraphResult<(), T, K> {
        self.store.vertex(&source).map_err(|_| GraphError::new(ErrorKind::VertexNotFound(source.clone())))?;
        self.store.vertex(&target).map_err(|_| GraphError::new(ErrorKind::VertexNotFound(target.clone())))?;
        if self.store.edge(&source, &target).is_ok() {
            return Err(GraphError::new(ErrorKind::EdgeAlreadyExists(source, target)));
        }
        if self.traits.prevents_cycles() && creates_cycle(self, &source, &target).map_err(|e| e.context("add_edge"))? {
            return Err(GraphError::new(ErrorKind::EdgeCreatesCycle(source, target)));
        }
        self.store.add_edge(source, target, properties);
        Ok(())
    }
}

impl<T, K> Clone for DirectedGraph<T, K>
where
    T: Clone,
    K: Clone + Eq + Hash + Debug,
{
    fn clone(&self) -> Self {
        DirectedGraph { hash_fn: Arc::clone(&self.hash_fn), traits: self.traits, store: self.store.clone() }
    }
}

impl<T, K> ImmutableGraph<T, K> for DirectedGraph<T, K>
where
    T: Clone,
    K: Clone + Eq + Hash + Debug,
{
    fn vertex(&self, key: &K) -> GraphResult<T, T, K> {
        self.store.vertex(key).map(|(value, _)| value)
    }

    fn vertex_with_properties(&self, key: &K) -> GraphResult<(T, VertexProperties), T, K> {
        self.store.vertex(key)
    }

    fn vertices_with_properties(&self) -> Vec<(K, T, VertexProperties)> {
        self.store
            .list_vertices()
            .into_iter()
            .filter_map(|key| self.store.vertex(&key).ok().map(|(value, properties)| (key, value, properties)))
            .collect()
    }

    fn edge(&self, source: &K, target: &K) -> GraphResult<EdgeProperties, T, K> {
        self.store.edge(source, target)
    }

    fn edges(&self) -> Vec<(K, K, EdgeProperties)> {
        self.store.list_edges()
    }

    fn adjacency_map(&self) -> HashMap<K, HashMap<K, EdgeProperties>> {
        self.store.adjacency_map()
    }

    fn predecessor_map(&self) -> HashMap<K, HashMap<K, EdgeProperties>> {
        self.store.predecessor_map()
    }

    fn order(&self) -> usize {
        self.store.vertex_count()
    }

    fn size(&self) -> usize {
        self.store.list_edges().len()
    }

    fn traits(&self) -> Traits {
        self.traits
    }

    fn hash(&self, value: &T) -> K {
        (self.hash_fn)(value)
    }
}

impl<T, K> MutableGraph<T, K> for DirectedGraph<T, K>
where
    T: Clone + 'static,
    K: Clone + Eq + Hash + Debug + 'static,
{
    fn add_vertex(&mut self, value: T, options: Vec<VertexOption>) -> GraphResult<(), T, K> {
        let key = self.hash(&value);
        let properties = apply_vertex_options(options);
        self.store.add_vertex(key, value, properties)
    }

    fn add_vertices_from(&mut self, other: &dyn ImmutableGraph<T, K>) -> GraphResult<(), T, K> {
        for (key, value, properties) in other.vertices_with_properties() {
            self.store.add_vertex(key, value, properties)?;
        }
        Ok(())
    }

    fn remove_vertex(&mut self, key: &K) -> GraphResult<(), T, K> {
        self.store.remove_vertex(key)
    }

    fn add_edge(&mut self, source: K, target: K, options: Vec<EdgeOption>) -> GraphResult<(), T, K> {
        let properties = apply_edge_options(options);
        self.add_edge_with_properties(source, target, properties)
    }

    fn add_edges_from(&mut self, other: &dyn ImmutableGraph<T, K>) -> GraphResult<(), T, K> {
        for (source, target, properties) in other.edges() {
            self.add_edge_with_properties(source, target, properties)?;
        }
        Ok(())
    }

    fn update_edge(&mut self, source: &K, target: &K, options: Vec<EdgeOption>) -> GraphResult<(), T, K> {
        if self.store.edge(source, target).is_err() {
            return Err(GraphError::new(ErrorKind::EdgeNotFound(source.clone(), target.clone())));
        }
        let properties = apply_edge_options(options);
        self.store.update_edge(source, target, properties)
    }

    fn remove_edge(&mut self, source: &K, target: &K) -> GraphResult<(), T, K> {
        if self.store.edge(source, target).is_err() {
            return Err(GraphError::new(ErrorKind::EdgeNotFound(source.clone(), target.clone())));
        }
        self.store.remove_edge(source, target);
        Ok(())
    }
}



#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits_config::{directed, prevent_cycles, Traits};

    fn fresh() -> DirectedGraph<i32, i32> {
        DirectedGraph::new(Arc::new(|v: &i32| *v), Traits::from_options(vec![directed()]))
    }

    #[test]
    fn add_vertex_then_fetch() {
        let mut g = fresh();
        g.add_vertex(1, vec![]).unwrap();
        assert_eq!(g.vertex(&1).unwrap(), 1);
        assert_eq!(g.order(), 1);
    }

    #[test]
    fn duplicate_vertex_fails() {
        let mut g = fresh();
        g.add_vertex(1, vec![]).unwrap();
        let err = g.add_vertex(1, vec![]).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::VertexAlreadyExists(1, 1)));
    }

    #[test]
    fn add_edge_requires_both_endpoints() {
        let mut g = fresh();
        g.add_vertex(1, vec![]).unwrap();
        let err = g.add_edge(1, 2, vec![]).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::VertexNotFound(2)));
    }

    #[test]
    fn both_directions_are_distinct_edges() {
        let mut g = fresh();
        g.add_vertex(1, vec![]).unwrap();
        g.add_vertex(2, vec![]).unwrap();
        g.add_edge(1, 2, vec![]).unwrap();
        g.add_edge(2, 1, vec![]).unwrap();
        assert_eq!(g.size(), 2);
    }

    #[test]
    fn prevent_cycles_rejects_closing_edge() {
        let mut g = DirectedGraph::new(Arc::new(|v: &i32| *v), Traits::from_options(vec![directed(), prevent_cycles()]));
        g.add_vertex(1, vec![]).unwrap();
        g.add_vertex(2, vec![]).unwrap();
        g.add_edge(1, 2, vec![]).unwrap();
        let err = g.add_edge(2, 1, vec![]).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::EdgeCreatesCycle(2, 1)));
    }

    #[test]
    fn remove_vertex_with_edges_fails() {
        let mut g = fresh();
        g.add_vertex(1, vec![]).unwrap();
        g.add_vertex(2, vec![]).unwrap();
        g.add_edge(1, 2, vec![]).unwrap();
        assert!(matches!(g.remove_vertex(&1).unwrap_err().kind(), ErrorKind::VertexHasEdges(1, _)));
    }

    #[test]
    fn remove_edge_then_lookup_fails() {
        let mut g = fresh();
        g.add_vertex(1, vec![]).unwrap();
        g.add_vertex(2, vec![]).unwrap();
        g.add_edge(1, 2, vec![]).unwrap();
        g.remove_edge(&1, &2).unwrap();
        assert!(matches!(g.edge(&1, &2).unwrap_err().kind(), ErrorKind::EdgeNotFound(1, 2)));
    }

    #[test]
    fn remove_edge_on_missing_edge_fails() {
        let mut g = fresh();
        g.add_vertex(1, vec![]).unwrap();
        g.add_vertex(2, vec![]).unwrap();
        assert!(matches!(g.remove_edge(&1, &2).unwrap_err().kind(), ErrorKind::EdgeNotFound(1, 2)));
    }

    #[test]
    fn clone_is_independent() {
        let mut g = fresh();
        g.add_vertex(1, vec![]).unwrap();
        let mut cloned = g.clone();
        cloned.add_vertex(2, vec![]).unwrap();
        assert_eq!(g.order(), 1);
        assert_eq!(cloned.order(), 2);
    }

    #[test]
    fn predecessor_map_matches_adjacency_map_entry() {
        let mut g = fresh();
        g.add_vertex(1, vec![]).unwrap();
        g.add_vertex(2, vec![]).unwrap();
        g.add_edge(1, 2, vec![]).unwrap();
        let adjacency = g.adjacency_map();
        let predecessors = g.predecessor_map();
        assert_eq!(predecessors[&2][&1].weight, adjacency[&1][&2].weight);
    }
}

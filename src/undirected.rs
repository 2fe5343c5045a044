//! # Undirected graph
//!
//! ## Description
//! A graph where `(u, v)` and `(v, u)` are the same logical edge, stored
//! symmetrically in both of the store's directed maps. Matches §4.G: edge
//! lookup falls back to the swapped pair on miss; `predecessor_map`
//! returns the adjacency map (every neighbor, since there is no directed
//! "in" vs "out" distinction); `size` divides the store's edge count by
//! two to undo the symmetric-storage duplication.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use crate::algorithms::path::creates_cycle;
use crate::errors::{ErrorKind, GraphError, GraphResult};
use crate::graph::{ImmutableGraph, MutableGraph};
use crate::properties::{apply_edge_options, apply_vertex_options, EdgeOption, EdgeProperties, VertexOption, VertexProperties};
use crate::store::{InMemoryStore, Store};
use crate::traits_config::Traits;

pub struct UndirectedGraph<T, K>
where
    T: Clone,
    K: Clone + Eq + Hash + Debug,
{
    pub(crate) hash_fn: Arc<dyn Fn(&T) -> K + Send + Sync>,
    pub(crate) traits: Traits,
    pub(crate) store: InMemoryStore<T, K>,
}

impl<T, K> UndirectedGraph<T, K>
where
    T: Clone,
    K: Clone + Eq + Hash + Debug,
{
    pub fn new(hash_fn: Arc<dyn Fn(&T) -> K + Send + Sync>, traits: Traits) -> Self {
        UndirectedGraph { hash_fn, traits, store: InMemoryStore::new() }
    }

    fn stored_direction(&self, source: &K, target: &K) -> Option<(K, K)> {
        if self.store.edge(source, target).is_ok() {
            Some((source.clone(), target.clone()))
        } else if self.store.edge(target, source).is_ok() {
            Some((target.clone(), source.clone()))
        } else {
            None
        }
    }

    fn add_edge_with_properties(&mut self, source: K, target: K, properties: EdgeProperties) -> GraphResult<(), T, K> {
        self.store.vertex(&source).map_err(|_| GraphError::new(ErrorKind::VertexNotFound(source.clone())))?;
        self.store.vertex(&target).map_err(|_| GraphError::new(ErrorKind::VertexNotFound(target.clone())))?;
        if self.stored_direction(&source, &target).is_some() {
            return Err(GraphError::new(ErrorKind::EdgeAlreadyExists(source, target)));
        }
        if self.traits.prevents_cycles() && creates_cycle(self, &source, &target).map_err(|e| e.context("add_edge"))? {
            return Err(GraphError::new(ErrorKind::EdgeCreatesCycle(source, target)));
        }
        self.store.add_edge(source.clone(), target.clone(), properties.clone());
        self.store.add_edge(target, source, properties);
        Ok(())
    }
}

impl<T, K> Clone for UndirectedGraph<T, K>
where
    T: Clone,
    K: Clone + Eq + Hash + Debug,
{
    fn clone(&self) -> Self {
        UndirectedGraph { hash_fn: Arc::clone(&self.hash_fn), traits: self.traits, store: self.store.clone() }
    }
}

impl<T, K> ImmutableGraph<T, K> for UndirectedGraph<T, K>
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
        self.store.edge(source, target).or_else(|_| self.store.edge(target, source))
    }

    fn edges(&self) -> Vec<(K, K, EdgeProperties)> {
        let mut seen: HashSet<(K, K)> = HashSet::new();
        let mut result = Vec::new();
        for (source, target, properties) in self.store.list_edges() {
            if seen.contains(&(source.clone(), target.clone())) {
                continue;
            }
            seen.insert((source.clone(), target.clone()));
            seen.insert((target.clone(), source.clone()));
            result.push((source, target, properties));
        }
        result
    }

    fn adjacency_map(&self) -> HashMap<K, HashMap<K, EdgeProperties>> {
        self.store.adjacency_map()
    }

    fn predecessor_map(&self) -> HashMap<K, HashMap<K, EdgeProperties>> {
        self.store.adjacency_map()
    }

    fn order(&self) -> usize {
        self.store.vertex_count()
    }

    fn size(&self) -> usize {
        self.store.list_edges().len() / 2
    }

    fn traits(&self) -> Traits {
        self.traits
    }

    fn hash(&self, value: &T) -> K {
        (self.hash_fn)(value)
    }
}

impl<T, K> MutableGraph<T, K> for UndirectedGraph<T, K>
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
        let Some((stored_source, stored_target)) = self.stored_direction(source, target) else {
            return Err(GraphError::new(ErrorKind::EdgeNotFound(source.clone(), target.clone())));
        };
        let properties = apply_edge_options(options);
        self.store.update_edge(&stored_source, &stored_target, properties.clone())?;
        self.store.update_edge(&stored_target, &stored_source, properties)
    }

    fn remove_edge(&mut self, source: &K, target: &K) -> GraphResult<(), T, K> {
        if self.stored_direction(source, target).is_none() {
            return Err(GraphError::new(ErrorKind::EdgeNotFound(source.clone(), target.clone())));
        }
        self.store.remove_edge(source, target);
        self.store.remove_edge(target, source);
        Ok(())
    }
}

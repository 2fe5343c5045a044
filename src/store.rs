//! # Storage backend
//!
//! ## Description
//! [`Store`] is the seam between the graph types ([`crate::directed`],
//! [`crate::undirected`]) and wherever vertex/edge data actually lives.
//! The only implementation shipped here, [`InMemoryStore`], is what every
//! [`crate::new`] call wires up; an alternative backend (on-disk,
//! distributed) would implement the same trait and plug in without the
//! graph types or algorithms changing at all.
//!
//! `InMemoryStore` guards its four maps — `values`, `properties`,
//! `out_edges`, `in_edges` — behind one [`std::sync::RwLock`], matching
//! the "single readers-writer lock, snapshot-then-release" concurrency
//! model: `adjacency_map`/`predecessor_map` clone a fresh owned `HashMap`
//! under a read guard and hand it back, so callers iterate a snapshot
//! rather than holding the lock.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::{Arc, RwLock};

use crate::errors::{ErrorKind, GraphError, GraphResult};
use crate::properties::{EdgeProperties, VertexProperties};

/// # Store
///
/// ## Description
/// Vertex/edge persistence, independent of directedness: the *graph*
/// types decide whether an edge gets mirrored into both directions, the
/// store just records whatever it's told. `add_edge` overwrites silently
/// at this layer — uniqueness is enforced one level up, by the graph
/// types' `add_edge`.
pub trait Store<T, K>: Clone + Send + Sync
where
    T: Clone,
    K: Clone + Eq + Hash + Debug,
{
    fn add_vertex(&self, key: K, value: T, properties: VertexProperties) -> GraphResult<(), T, K>;
    fn vertex(&self, key: &K) -> GraphResult<(T, VertexProperties), T, K>;
    fn list_vertices(&self) -> Vec<K>;
    fn vertex_count(&self) -> usize;
    fn remove_vertex(&self, key: &K) -> GraphResult<(), T, K>;
    fn add_edge(&self, source: K, target: K, edge: EdgeProperties);
    fn update_edge(&self, source: &K, target: &K, edge: EdgeProperties) -> GraphResult<(), T, K>;
    fn edge(&self, source: &K, target: &K) -> GraphResult<EdgeProperties, T, K>;
    fn remove_edge(&self, source: &K, target: &K);
    fn list_edges(&self) -> Vec<(K, K, EdgeProperties)>;
    fn adjacency_map(&self) -> HashMap<K, HashMap<K, EdgeProperties>>;
    fn predecessor_map(&self) -> HashMap<K, HashMap<K, EdgeProperties>>;
}

struct InMemoryStoreInner<T, K>
where
    K: Eq + Hash,
{
    values: HashMap<K, T>,
    properties: HashMap<K, VertexProperties>,
    out_edges: HashMap<K, HashMap<K, EdgeProperties>>,
    in_edges: HashMap<K, HashMap<K, EdgeProperties>>,
}

/// # In-memory store
///
/// ## Description
/// The default [`Store`] implementation. Cheaply `Clone`-able: it's a
/// handle (`Arc<RwLock<..>>`), so cloning a graph that owns one of these
/// does not share mutable state — [`crate::directed::DirectedGraph::clone`]
/// and friends materialize a brand-new `InMemoryStore` rather than cloning
/// the handle, so `Clone(g)` mutations stay independent as required.
pub struct InMemoryStore<T, K>
where
    K: Eq + Hash,
{
    inner: Arc<RwLock<InMemoryStoreInner<T, K>>>,
}

impl<T, K> InMemoryStore<T, K>
where
    T: Clone,
    K: Clone + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        InMemoryStore {
            inner: Arc::new(RwLock::new(InMemoryStoreInner {
                values: HashMap::new(),
                properties: HashMap::new(),
                out_edges: HashMap::new(),
                in_edges: HashMap::new(),
            })),
        }
    }
}

impl<T, K> Default for InMemoryStore<T, K>
where
    T: Clone,
    K: Clone + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K> Clone for InMemoryStore<T, K>
where
    T: Clone,
    K: Clone + Eq + Hash + Debug,
{
    /// # Clone
    ///
    /// ## Description
    /// Deep copy: a fresh lock around a fresh copy of every map. Does
    /// **not** share the underlying `Arc` — two independent stores result.
    fn clone(&self) -> Self {
        let guard = self.inner.read().expect("store lock poisoned");
        InMemoryStore {
            inner: Arc::new(RwLock::new(InMemoryStoreInner {
                values: guard.values.clone(),
                properties: guard.properties.clone(),
                out_edges: guard.out_edges.clone(),
                in_edges: guard.in_edges.clone(),
            })),
        }
    }
}

impl<T, K> Store<T, K> for InMemoryStore<T, K>
where
    T: Clone,
    K: Clone + Eq + Hash + Debug,
{
    fn add_vertex(&self, key: K, value: T, properties: VertexProperties) -> GraphResult<(), T, K> {
        let mut guard = self.inner.write().expect("store lock poisoned");
        if let Some(existing) = guard.values.get(&key) {
            return Err(GraphError::new(ErrorKind::VertexAlreadyExists(key, existing.clone())));
        }
        guard.out_edges.entry(key.clone()).or_default();
        guard.in_edges.entry(key.clone()).or_default();
        guard.properties.insert(key.clone(), properties);
        guard.values.insert(key, value);
        Ok(())
    }

    fn vertex(&self, key: &K) -> GraphResult<(T, VertexProperties), T, K> {
        let guard = self.inner.read().expect("store lock poisoned");
        match (guard.values.get(key), guard.properties.get(key)) {
            (Some(value), Some(properties)) => Ok((value.clone(), properties.clone())),
            _ => Err(GraphError::new(ErrorKind::VertexNotFound(key.clone()))),
        }
    }

    fn list_vertices(&self) -> Vec<K> {
        let guard = self.inner.read().expect("store lock poisoned");
        guard.values.keys().cloned().collect()
    }

    fn vertex_count(&self) -> usize {
        let guard = self.inner.read().expect("store lock poisoned");
        guard.values.len()
    }

    fn remove_vertex(&self, key: &K) -> GraphResult<(), T, K> {
        let mut guard = self.inner.write().expect("store lock poisoned");
        if !guard.values.contains_key(key) {
            return Err(GraphError::new(ErrorKind::VertexNotFound(key.clone())));
        }
        let incident = guard.out_edges.get(key).map(|m| m.len()).unwrap_or(0)
            + guard.in_edges.get(key).map(|m| m.len()).unwrap_or(0);
        if incident > 0 {
            return Err(GraphError::new(ErrorKind::VertexHasEdges(key.clone(), incident)));
        }
        guard.values.remove(key);
        guard.properties.remove(key);
        guard.out_edges.remove(key);
        guard.in_edges.remove(key);
        Ok(())
    }

    fn add_edge(&self, source: K, target: K, edge: EdgeProperties) {
        let mut guard = self.inner.write().expect("store lock poisoned");
        guard.out_edges.entry(source.clone()).or_default().insert(target.clone(), edge.clone());
        guard.in_edges.entry(target).or_default().insert(source, edge);
    }

    fn update_edge(&self, source: &K, target: &K, edge: EdgeProperties) -> GraphResult<(), T, K> {
        let mut guard = self.inner.write().expect("store lock poisoned");
        if !guard.out_edges.get(source).map(|m| m.contains_key(target)).unwrap_or(false) {
            return Err(GraphError::new(ErrorKind::EdgeNotFound(source.clone(), target.clone())));
        }
        guard.out_edges.get_mut(source).unwrap().insert(target.clone(), edge.clone());
        guard.in_edges.get_mut(target).unwrap().insert(source.clone(), edge);
        Ok(())
    }

    fn edge(&self, source: &K, target: &K) -> GraphResult<EdgeProperties, T, K> {
        let guard = self.inner.read().expect("store lock poisoned");
        guard
            .out_edges
            .get(source)
            .and_then(|m| m.get(target))
            .cloned()
            .ok_or_else(|| GraphError::new(ErrorKind::EdgeNotFound(source.clone(), target.clone())))
    }

    fn remove_edge(&self, source: &K, target: &K) {
        let mut guard = self.inner.write().expect("store lock poisoned");
        if let Some(m) = guard.out_edges.get_mut(source) {
            m.remove(target);
        }
        if let Some(m) = guard.in_edges.get_mut(target) {
            m.remove(source);
        }
    }

    fn list_edges(&self) -> Vec<(K, K, EdgeProperties)> {
        let guard = self.inner.read().expect("store lock poisoned");
        guard
            .out_edges
            .iter()
            .flat_map(|(source, targets)| {
                targets.iter().map(move |(target, edge)| (source.clone(), target.clone(), edge.clone()))
            })
            .collect()
    }

    fn adjacency_map(&self) -> HashMap<K, HashMap<K, EdgeProperties>> {
        let guard = self.inner.read().expect("store lock poisoned");
        guard.out_edges.clone()
    }

    fn predecessor_map(&self) -> HashMap<K, HashMap<K, EdgeProperties>> {
        let guard = self.inner.read().expect("store lock poisoned");
        guard.in_edges.clone()
    }
}



#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_fetch_vertex() {
        let store: InMemoryStore<&str, i32> = InMemoryStore::new();
        store.add_vertex(1, "a", VertexProperties::default()).unwrap();
        let (value, _) = store.vertex(&1).unwrap();
        assert_eq!(value, "a");
    }

    #[test]
    fn duplicate_vertex_fails() {
        let store: InMemoryStore<&str, i32> = InMemoryStore::new();
        store.add_vertex(1, "a", VertexProperties::default()).unwrap();
        let err = store.add_vertex(1, "b", VertexProperties::default()).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::VertexAlreadyExists(1, "a")));
    }

    #[test]
    fn remove_vertex_with_edges_fails() {
        let store: InMemoryStore<&str, i32> = InMemoryStore::new();
        store.add_vertex(1, "a", VertexProperties::default()).unwrap();
        store.add_vertex(2, "b", VertexProperties::default()).unwrap();
        store.add_edge(1, 2, EdgeProperties::default());
        let err = store.remove_vertex(&1).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::VertexHasEdges(1, 1)));
    }

    #[test]
    fn adjacency_and_predecessor_maps_stay_consistent() {
        let store: InMemoryStore<&str, i32> = InMemoryStore::new();
        for key in [1, 2] {
            store.add_vertex(key, "v", VertexProperties::default()).unwrap();
        }
        store.add_edge(1, 2, EdgeProperties::default());
        let adjacency = store.adjacency_map();
        let predecessors = store.predecessor_map();
        assert!(adjacency[&1].contains_key(&2));
        assert!(predecessors[&2].contains_key(&1));
    }

    #[test]
    fn clone_is_independent() {
        let store: InMemoryStore<&str, i32> = InMemoryStore::new();
        store.add_vertex(1, "a", VertexProperties::default()).unwrap();
        let cloned = store.clone();
        store.add_vertex(2, "b", VertexProperties::default()).unwrap();
        assert_eq!(cloned.vertex_count(), 1);
        assert_eq!(store.vertex_count(), 2);
    }
}

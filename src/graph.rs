//! # Graph contract
//!
//! ## Description
//! [`ImmutableGraph`] and [`MutableGraph`] are the polymorphic contract
//! every algorithm in [`crate::algorithms`] programs against. Two
//! concrete types implement them — [`crate::directed::DirectedGraph`] and
//! [`crate::undirected::UndirectedGraph`] — and differ in exactly four
//! behaviors (edge storage, edge lookup fallback, predecessor-map
//! semantics, size accounting); everything else is identical code living
//! once in each impl rather than behind inheritance, per the design notes'
//! preference for composition over a class hierarchy.
//!
//! Both traits are object-safe on purpose: `new` returns a boxed trait
//! object, and §7 requires *runtime* "only defined for {other kind}"
//! errors rather than a compile-time type distinction, so algorithms
//! dispatch on `traits().is_directed()` at runtime against a single
//! `&dyn` reference.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use dyn_clone::DynClone;

use crate::errors::{ErrorKind, GraphError, GraphResult};
use crate::properties::{EdgeOption, EdgeProperties, VertexOption, VertexProperties};
use crate::traits_config::Traits;

/// # Read-only graph contract
///
/// ## Description
/// Everything that can be observed about a graph without mutating it.
/// `Box<dyn MutableGraph<T, K>>` is also a `&dyn ImmutableGraph<T, K>`, so
/// read-only algorithms (shortest path, topological sort, ...) can take
/// the narrower reference.
pub trait ImmutableGraph<T, K>
where
    T: Clone,
    K: Clone + Eq + Hash + Debug,
{
    fn vertex(&self, key: &K) -> GraphResult<T, T, K>;
    fn vertex_with_properties(&self, key: &K) -> GraphResult<(T, VertexProperties), T, K>;
    fn vertices_with_properties(&self) -> Vec<(K, T, VertexProperties)>;
    fn edge(&self, source: &K, target: &K) -> GraphResult<EdgeProperties, T, K>;
    fn edges(&self) -> Vec<(K, K, EdgeProperties)>;
    fn adjacency_map(&self) -> HashMap<K, HashMap<K, EdgeProperties>>;
    fn predecessor_map(&self) -> HashMap<K, HashMap<K, EdgeProperties>>;
    fn order(&self) -> usize;
    fn size(&self) -> usize;
    fn traits(&self) -> Traits;
    fn hash(&self, value: &T) -> K;
}

impl<T, K> ImmutableGraph<T, K> for Box<dyn MutableGraph<T, K>>
where
    T: Clone,
    K: Clone + Eq + Hash + Debug,
{
    fn vertex(&self, key: &K) -> GraphResult<T, T, K> {
        (**self).vertex(key)
    }
    fn vertex_with_properties(&self, key: &K) -> GraphResult<(T, VertexProperties), T, K> {
        (**self).vertex_with_properties(key)
    }
    fn vertices_with_properties(&self) -> Vec<(K, T, VertexProperties)> {
        (**self).vertices_with_properties()
    }
    fn edge(&self, source: &K, target: &K) -> GraphResult<EdgeProperties, T, K> {
        (**self).edge(source, target)
    }
    fn edges(&self) -> Vec<(K, K, EdgeProperties)> {
        (**self).edges()
    }
    fn adjacency_map(&self) -> HashMap<K, HashMap<K, EdgeProperties>> {
        (**self).adjacency_map()
    }
    fn predecessor_map(&self) -> HashMap<K, HashMap<K, EdgeProperties>> {
        (**self).predecessor_map()
    }
    fn order(&self) -> usize {
        (**self).order()
    }
    fn size(&self) -> usize {
        (**self).size()
    }
    fn traits(&self) -> Traits {
        (**self).traits()
    }
    fn hash(&self, value: &T) -> K {
        (**self).hash(value)
    }
}

/// # Mutable graph contract
///
/// ## Description
/// The write half of the contract: vertex/edge creation, bulk import from
/// another graph, property update, and removal. `Clone()` is not a method
/// here; it falls out of `Box<dyn MutableGraph<T, K>>: Clone` below, which
/// forwards to `dyn_clone` to make the trait object cloneable.
pub trait MutableGraph<T, K>: ImmutableGraph<T, K> + DynClone
where
    T: Clone,
    K: Clone + Eq + Hash + Debug,
{
    fn add_vertex(&mut self, value: T, options: Vec<VertexOption>) -> GraphResult<(), T, K>;
    fn add_vertices_from(&mut self, other: &dyn ImmutableGraph<T, K>) -> GraphResult<(), T, K>;
    fn remove_vertex(&mut self, key: &K) -> GraphResult<(), T, K>;
    fn add_edge(&mut self, source: K, target: K, options: Vec<EdgeOption>) -> GraphResult<(), T, K>;
    fn add_edges_from(&mut self, other: &dyn ImmutableGraph<T, K>) -> GraphResult<(), T, K>;
    fn update_edge(&mut self, source: &K, target: &K, options: Vec<EdgeOption>) -> GraphResult<(), T, K>;
    fn remove_edge(&mut self, source: &K, target: &K) -> GraphResult<(), T, K>;
}

impl<T, K> Clone for Box<dyn MutableGraph<T, K>>
where
    T: Clone + 'static,
    K: Clone + Eq + Hash + Debug + 'static,
{
    fn clone(&self) -> Self {
        dyn_clone::clone_box(&**self)
    }
}

pub(crate) fn vertex_not_found<T, K>(key: &K) -> GraphError<T, K>
where
    K: Clone,
{
    GraphError::new(ErrorKind::VertexNotFound(key.clone()))
}

//! <h2 id="graphwright" style="text-align: center; font-variant: small-caps"><a href="#graphwright">Graphwright</a></h2>
//!
//! <div style="text-align: center"><b><i>A small, fast in-memory graph library for Rust</i></b></div>
//!
//! ## Welcome!
//! Graphwright builds, analyses and manipulates directed and undirected
//! graphs behind one polymorphic interface, plus a classic algorithm suite:
//! cycle prediction, Dijkstra shortest path, Tarjan strongly connected
//! components, Kahn topological sort (plain and stable), transitive
//! reduction, Kruskal minimum/maximum spanning tree, graph union, connected
//! components, and a DOT/Graphviz renderer.
//!
//! ## Features
//! * **One interface, two kinds of graph.** [`new`] dispatches to a
//!   directed or undirected implementation based on the [`Traits`] you pass
//!   in; every algorithm programs against the same
//!   [`ImmutableGraph`][graph::ImmutableGraph]/[`MutableGraph`][graph::MutableGraph]
//!   contract. [More about this...][kinds]
//! * **Properties.** Vertices and edges both carry a weight and a
//!   string-to-string attribute bag; edges can additionally carry an opaque
//!   `any`-typed payload. [More about this...][props]
//!
//! [kinds]: graph::ImmutableGraph
//! [props]: properties

pub mod algorithms;
pub mod directed;
pub mod dot;
pub mod errors;
pub mod graph;
pub mod priority_queue;
pub mod properties;
pub mod stack;
pub mod store;
pub mod traits_config;
pub mod traversal;
pub mod undirected;
pub mod union_find;

use std::hash::Hash;
use std::sync::Arc;

use directed::DirectedGraph;
use graph::MutableGraph;
use traits_config::{Traits, TraitOption};
use undirected::UndirectedGraph;

pub use errors::{ErrorKind, GraphError, GraphResult};
pub use graph::{ImmutableGraph as ImmutableGraphContainer, MutableGraph as MutableGraphContainer};
pub use properties::{EdgeOption, EdgeProperties, GraphData, VertexOption, VertexProperties};
pub use traits_config::{acyclic, directed, prevent_cycles, rooted, tree, weighted};



// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * CONSTRUCTOR                                                                       *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # New graph
///
/// ## Description
/// The single entry point into this crate. Builds a [`Traits`] record from
/// `options` and, depending on whether [`Traits::is_directed`] comes back
/// set, returns a [`DirectedGraph`] or an [`UndirectedGraph`] boxed behind
/// [`MutableGraph`]. Every algorithm in [`algorithms`] is written against
/// this boxed trait object and checks `.traits().is_directed()` at runtime
/// rather than branching on a compile-time type, since the kind check has
/// to be dynamic: the caller only has one type, `Box<dyn MutableGraph<T,
/// K>>`, regardless of which concrete struct `new` handed back.
///
/// ```
/// use graphwright::{new, directed, traits_config::weighted};
///
/// let mut g = new(std::sync::Arc::new(|v: &i32| *v), vec![directed(), weighted()]);
/// g.add_vertex(1, vec![]).unwrap();
/// g.add_vertex(2, vec![]).unwrap();
/// g.add_edge(1, 2, vec![]).unwrap();
/// assert_eq!(g.order(), 2);
/// ```
pub fn new<T, K>(hash_fn: Arc<dyn Fn(&T) -> K + Send + Sync>, options: Vec<TraitOption>) -> Box<dyn MutableGraph<T, K>>
where
    T: Clone + 'static,
    K: Clone + Eq + Hash + std::fmt::Debug + 'static,
{
    let traits = Traits::from_options(options);
    if traits.is_directed() {
        Box::new(DirectedGraph::new(hash_fn, traits))
    } else {
        Box::new(UndirectedGraph::new(hash_fn, traits))
    }
}



// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * PREDEFINED HASH FUNCTIONS                                                         *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Predefined hash functions
///
/// ## Description
/// Identity hash functions for the primitive key types named in §6 of the
/// design notes: every vertex value already *is* its own key, so these
/// just clone/copy the value through. Handy as the `hash_fn` argument to
/// [`new`] whenever `T == K` and no custom hashing is needed.
pub mod hash_fns {
    use std::sync::Arc;

    /// Identity hash for `String`-keyed graphs.
    pub fn string() -> Arc<dyn Fn(&String) -> String + Send + Sync> {
        Arc::new(|v: &String| v.clone())
    }

    /// Identity hash for `i32`-keyed graphs.
    pub fn i32() -> Arc<dyn Fn(&i32) -> i32 + Send + Sync> {
        Arc::new(|v: &i32| *v)
    }

    /// Identity hash for `i64`-keyed graphs.
    pub fn i64() -> Arc<dyn Fn(&i64) -> i64 + Send + Sync> {
        Arc::new(|v: &i64| *v)
    }

    /// Identity hash for `u32`-keyed graphs.
    pub fn u32() -> Arc<dyn Fn(&u32) -> u32 + Send + Sync> {
        Arc::new(|v: &u32| *v)
    }

    /// Identity hash for `u64`-keyed graphs.
    pub fn u64() -> Arc<dyn Fn(&u64) -> u64 + Send + Sync> {
        Arc::new(|v: &u64| *v)
    }
}

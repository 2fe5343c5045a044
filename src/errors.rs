//! # Errors
//!
//! ## Description
//! This module defines the single error type used across the whole crate,
//! [`GraphError`], together with the sentinel [`ErrorKind`] it wraps.  Every
//! fallible operation in this crate returns a [`GraphResult`].
//!
//! Errors carry a structured [`ErrorKind`] so callers can dispatch on the
//! *kind* of failure (`matches!(err.kind(), ErrorKind::VertexNotFound(_))`)
//! rather than parsing a message, while still reading as a normal error
//! message when printed.  Algorithms that call into lower-level operations
//! attach a contextual label with [`GraphError::context`]; this only ever
//! prefixes the `Display` output; it never changes what [`GraphError::kind`]
//! returns.

use std::fmt::{self, Debug, Display};



/// # Result alias
///
/// ## Description
/// Shorthand for `Result<V, GraphError<T, K>>`, used by every fallible
/// operation in this crate. `T` is the vertex value type and `K` the key
/// type, matching the payloads [`ErrorKind`] may need to carry (e.g. the
/// value already stored under a duplicate key).
pub type GraphResult<V, T, K> = Result<V, GraphError<T, K>>;



/// # Error kind
///
/// ## Description
/// The sentinel every [`GraphError`] unwraps to. The first six variants are
/// the core CRUD taxonomy; the last three surface failures that only
/// algorithms (not the store or the graph types) can produce.
#[derive(Clone, Debug)]
pub enum ErrorKind<T, K> {
    /// No vertex with this key exists.
    VertexNotFound(K),
    /// A vertex with this key already exists; carries the value already
    /// stored under that key.
    VertexAlreadyExists(K, T),
    /// The vertex cannot be removed because it has incident edges; carries
    /// the number of such edges.
    VertexHasEdges(K, usize),
    /// No edge exists between these two keys.
    EdgeNotFound(K, K),
    /// An edge already exists between these two keys.
    EdgeAlreadyExists(K, K),
    /// Inserting an edge between these two keys would close a directed
    /// cycle in a graph with `PreventCycles` set.
    EdgeCreatesCycle(K, K),
    /// The operation is only defined for graphs of the other kind, e.g.
    /// strongly connected components on an undirected graph.
    WrongGraphKind(&'static str),
    /// The operation requires an acyclic graph but the graph has a cycle.
    HasCycle,
    /// No path exists between the two vertices a shortest-path query named.
    NotReachable(K),
}

impl<T, K> Display for ErrorKind<T, K>
where
    K: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::VertexNotFound(key) => write!(f, "vertex {:?} doesn't exist", key),
            ErrorKind::VertexAlreadyExists(key, _) => write!(f, "vertex {:?} already exists", key),
            ErrorKind::VertexHasEdges(key, count) => write!(f, "vertex {:?} still has {} incident edge(s)", key, count),
            ErrorKind::EdgeNotFound(source, target) => write!(f, "edge ({:?}, {:?}) doesn't exist", source, target),
            ErrorKind::EdgeAlreadyExists(source, target) => write!(f, "edge ({:?}, {:?}) already exists", source, target),
            ErrorKind::EdgeCreatesCycle(source, target) => write!(f, "edge ({:?}, {:?}) would close a cycle", source, target),
            ErrorKind::WrongGraphKind(expected) => write!(f, "only defined for {} graphs", expected),
            ErrorKind::HasCycle => write!(f, "cannot be computed on a graph with cycles"),
            ErrorKind::NotReachable(target) => write!(f, "{:?} is not reachable", target),
        }
    }
}



/// # Graph error
///
/// ## Description
/// Wraps an [`ErrorKind`] with a stack of contextual labels attached by
/// intermediate call sites. `Display` renders the labels followed by the
/// underlying kind; [`GraphError::kind`] always returns the original kind
/// regardless of how much context has been layered on top.
#[derive(Clone, Debug)]
pub struct GraphError<T, K> {
    kind: ErrorKind<T, K>,
    context: Vec<String>,
}

impl<T, K> GraphError<T, K> {
    /// # New error
    ///
    /// ## Description
    /// Wrap an [`ErrorKind`] into a fresh error with no context attached.
    pub fn new(kind: ErrorKind<T, K>) -> Self {
        GraphError { kind, context: Vec::new() }
    }

    /// # Attach context
    ///
    /// ## Description
    /// Push a label describing the call site that observed this error,
    /// outermost label last. Does not change [`GraphError::kind`].
    pub fn context<S: Into<String>>(mut self, label: S) -> Self {
        self.context.push(label.into());
        self
    }

    /// # Sentinel kind
    ///
    /// ## Description
    /// The structured kind this error unwraps to, for category-level
    /// dispatch by callers.
    pub fn kind(&self) -> &ErrorKind<T, K> {
        &self.kind
    }
}

impl<T, K> Display for GraphError<T, K>
where
    K: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for label in self.context.iter().rev() {
            write!(f, "{}: ", label)?;
        }
        write!(f, "{}", self.kind)
    }
}

impl<T, K> std::error::Error for GraphError<T, K>
where
    T: Debug,
    K: Debug,
{}



#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_does_not_change_kind() {
        let err: GraphError<&str, i32> = GraphError::new(ErrorKind::VertexNotFound(3))
            .context("shortest_path")
            .context("add_edge");
        assert!(matches!(err.kind(), ErrorKind::VertexNotFound(3)));
        let rendered = err.to_string();
        assert!(rendered.starts_with("add_edge: shortest_path: "));
        assert!(rendered.ends_with("vertex 3 doesn't exist"));
    }
}

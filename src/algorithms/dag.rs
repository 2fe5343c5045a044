//! # DAG algorithms
//!
//! ## Description
//! Kahn's topological sort (plain and stable), and transitive reduction.
//! All three require `IsDirected` and fail on a graph with a cycle.

use std::fmt::Debug;
use std::hash::Hash;

use crate::errors::{ErrorKind, GraphError, GraphResult};
use crate::graph::{ImmutableGraph, MutableGraph};
use crate::stack::MembershipStack;

/// # Topological sort
///
/// ## Description
/// Kahn's algorithm. Builds the predecessor map, queues every vertex with
/// an empty predecessor set, then repeatedly dequeues a vertex, appends it
/// to the order, and removes it from each successor's predecessor set —
/// queuing the successor once that set empties. Fails with
/// [`ErrorKind::HasCycle`] if the resulting order misses any vertex.
pub fn topological_sort<T, K, G>(graph: &G) -> GraphResult<Vec<K>, T, K>
where
    T: Clone,
    K: Clone + Eq + Hash + Debug,
    G: ImmutableGraph<T, K> + ?Sized,
{
    stable_topological_sort(graph, |_, _| false)
}

/// # Stable topological sort
///
/// ## Description
/// Same as [`topological_sort`], but the initial frontier and every
/// per-step batch of newly-queued successors are sorted by `less` before
/// being appended to the work queue. Per the design notes' open
/// questions, the queue as a whole is *not* re-sorted at every step —
/// only these two insertion points are — which is weaker than a fully
/// sorted frontier but fully deterministic.
pub fn stable_topological_sort<T, K, G>(graph: &G, less: impl Fn(&K, &K) -> bool) -> GraphResult<Vec<K>, T, K>
where
    T: Clone,
    K: Clone + Eq + Hash + Debug,
    G: ImmutableGraph<T, K> + ?Sized,
{
    if !graph.traits().is_directed() {
        return Err(GraphError::new(ErrorKind::WrongGraphKind("directed")));
    }

    let adjacency = graph.adjacency_map();
    let mut predecessors = graph.predecessor_map();

    let mut frontier: Vec<K> = predecessors
        .iter()
        .filter(|(_, preds)| preds.is_empty())
        .map(|(key, _)| key.clone())
        .collect();
    sort_by(&mut frontier, &less);
    for key in &frontier {
        predecessors.remove(key);
    }

    let mut queue: std::collections::VecDeque<K> = frontier.into_iter().collect();
    let mut order = Vec::with_capacity(adjacency.len());

    while let Some(vertex) = queue.pop_front() {
        order.push(vertex.clone());
        let mut newly_ready = Vec::new();
        if let Some(successors) = adjacency.get(&vertex) {
            for successor in successors.keys() {
                if let Some(preds) = predecessors.get_mut(successor) {
                    preds.remove(&vertex);
                    if preds.is_empty() {
                        newly_ready.push(successor.clone());
                    }
                }
            }
        }
        sort_by(&mut newly_ready, &less);
        for successor in newly_ready {
            predecessors.remove(&successor);
            queue.push_back(successor);
        }
    }

    if order.len() != adjacency.len() {
        return Err(GraphError::new(ErrorKind::HasCycle));
    }
    Ok(order)
}

fn sort_by<K>(items: &mut [K], less: &impl Fn(&K, &K) -> bool) {
    items.sort_by(|a, b| if less(a, b) { std::cmp::Ordering::Less } else if less(b, a) { std::cmp::Ordering::Greater } else { std::cmp::Ordering::Equal });
}

/// # Transitive reduction
///
/// ## Description
/// Produces a new graph with the same vertices and the same reachability
/// relation, but a minimum edge set. For every vertex `v` and every direct
/// successor `s` of `v`, runs a non-recursive DFS from `s` (via
/// [`MembershipStack`]) over the *original* adjacency map; whenever the
/// walk reaches a vertex `a` that is also a direct successor of `v`, the
/// edge `(v, a)` is redundant and gets removed from the clone. A vertex
/// found both already visited and still on the stack — i.e. still an
/// ancestor on the current walk, not merely queued — means the graph has
/// a cycle, which fails with [`ErrorKind::HasCycle`].
pub fn transitive_reduction<T, K>(graph: &dyn MutableGraph<T, K>) -> GraphResult<Box<dyn MutableGraph<T, K>>, T, K>
where
    T: Clone + 'static,
    K: Clone + Eq + Hash + Debug + 'static,
{
    if !graph.traits().is_directed() {
        return Err(GraphError::new(ErrorKind::WrongGraphKind("directed")));
    }

    let adjacency = graph.adjacency_map();
    let mut reduced = dyn_clone::clone_box(graph);

    for (v, direct_successors) in &adjacency {
        let successor_keys: std::collections::HashSet<K> = direct_successors.keys().cloned().collect();
        for s in direct_successors.keys() {
            strip_redundant_edges(&adjacency, v, s, &successor_keys, reduced.as_mut())?;
        }
    }

    Ok(reduced)
}

/// One non-recursive DFS from `start`, simulating the call stack as a
/// `Vec` of frames so `on_path` reflects the vertices still being
/// processed (an ancestor in the current walk), not merely every vertex
/// ever pushed — that distinction is what makes the "already visited and
/// still on the stack" cycle check meaningful.
fn strip_redundant_edges<T, K>(
    adjacency: &std::collections::HashMap<K, std::collections::HashMap<K, crate::properties::EdgeProperties>>,
    v: &K,
    start: &K,
    successor_keys: &std::collections::HashSet<K>,
    reduced: &mut dyn MutableGraph<T, K>,
) -> GraphResult<(), T, K>
where
    T: Clone,
    K: Clone + Eq + Hash + Debug,
{
    struct Frame<K> {
        remaining: std::vec::IntoIter<K>,
    }

    let neighbors_of = |vertex: &K| -> Vec<K> {
        adjacency.get(vertex).map(|m| m.keys().cloned().collect()).unwrap_or_default()
    };

    let mut visited: std::collections::HashSet<K> = std::collections::HashSet::new();
    let mut on_path = MembershipStack::new();
    let mut frames: Vec<Frame<K>> = Vec::new();

    visited.insert(start.clone());
    on_path.push(start.clone());
    frames.push(Frame { remaining: neighbors_of(start).into_iter() });

    while let Some(frame) = frames.last_mut() {
        match frame.remaining.next() {
            Some(a) => {
                if successor_keys.contains(&a) {
                    reduced.remove_edge(v, &a).ok();
                }
                if on_path.contains(&a) {
                    return Err(GraphError::new(ErrorKind::HasCycle));
                }
                if visited.insert(a.clone()) {
                    on_path.push(a.clone());
                    frames.push(Frame { remaining: neighbors_of(&a).into_iter() });
                }
            }
            None => {
                frames.pop();
                on_path.pop();
            }
        }
    }

    Ok(())
}

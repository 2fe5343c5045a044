//! # Path algorithms
//!
//! ## Description
//! Cycle prediction, Dijkstra shortest path, and Tarjan strongly
//! connected components — the three algorithms in the suite that reason
//! about reachability along directed edges.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::errors::{ErrorKind, GraphError, GraphResult};
use crate::graph::ImmutableGraph;
use crate::priority_queue::MinPriorityQueue;
use crate::traversal::{self, Step};

/// # Cycle prediction
///
/// ## Description
/// Would inserting the edge `source -> target` close a directed cycle?
/// `source == target` is trivially `true`. Otherwise walks **backward**
/// from `source` over predecessor edges; encountering `target` along the
/// way means a path `target -> ... -> source` already exists, so adding
/// `source -> target` would close a cycle through it.
pub fn creates_cycle<T, K, G>(graph: &G, source: &K, target: &K) -> GraphResult<bool, T, K>
where
    T: Clone,
    K: Clone + Eq + Hash + Debug,
    G: ImmutableGraph<T, K> + ?Sized,
{
    graph.vertex(source)?;
    graph.vertex(target)?;
    if source == target {
        return Ok(true);
    }
    let predecessors = graph.predecessor_map();
    let mut found = false;
    traversal::dfs(
        source.clone(),
        |current| predecessors.get(current).map(|m| m.keys().cloned().collect()).unwrap_or_default(),
        |current| {
            if current == target {
                found = true;
                Step::Stop
            } else {
                Step::Continue
            }
        },
    );
    Ok(found)
}

/// # Shortest path
///
/// ## Description
/// Dijkstra's algorithm over edge weights, using a [`MinPriorityQueue`]
/// for O(log n) decrease-key. Returns the vertex sequence from `source`
/// to `target` inclusive, or `[source]` when they're equal.
///
/// Unreachability is decided by a single rule: if `target`'s *settled*
/// distance — the distance it had when it was popped off the queue — is
/// still `+∞`, it is unreachable. No separate ad-hoc check is layered on
/// top, which keeps zero-weight edges from tripping a spurious
/// unreachability result.
pub fn shortest_path<T, K, G>(graph: &G, source: &K, target: &K) -> GraphResult<Vec<K>, T, K>
where
    T: Clone,
    K: Clone + Eq + Hash + Debug,
    G: ImmutableGraph<T, K> + ?Sized,
{
    graph.vertex(source)?;
    graph.vertex(target)?;
    if source == target {
        return Ok(vec![source.clone()]);
    }

    let adjacency = graph.adjacency_map();
    let mut queue = MinPriorityQueue::new();
    let mut dist: HashMap<K, f64> = HashMap::new();
    for key in adjacency.keys() {
        let distance = if key == source { 0.0 } else { f64::INFINITY };
        dist.insert(key.clone(), distance);
        queue.push(key.clone(), distance);
    }

    let mut settled: HashMap<K, f64> = HashMap::new();
    let mut predecessor: HashMap<K, K> = HashMap::new();

    while let Some((u, du)) = queue.pop() {
        settled.insert(u.clone(), du);
        if du.is_infinite() {
            continue;
        }
        if let Some(neighbors) = adjacency.get(&u) {
            for (v, edge) in neighbors {
                if settled.contains_key(v) {
                    continue;
                }
                let candidate = du + edge.weight as f64;
                let best_so_far = dist.get(v).copied().unwrap_or(f64::INFINITY);
                if candidate < best_so_far {
                    dist.insert(v.clone(), candidate);
                    predecessor.insert(v.clone(), u.clone());
                    queue.update_priority(v, candidate);
                }
            }
        }
    }

    if settled.get(target).copied().unwrap_or(f64::INFINITY).is_infinite() {
        return Err(GraphError::new(ErrorKind::NotReachable(target.clone())));
    }

    let mut path = vec![target.clone()];
    let mut current = target.clone();
    while &current != source {
        current = predecessor
            .get(&current)
            .cloned()
            .ok_or_else(|| GraphError::new(ErrorKind::NotReachable(target.clone())))?;
        path.push(current.clone());
    }
    path.reverse();
    Ok(path)
}

/// # Strongly connected components
///
/// ## Description
/// Tarjan's algorithm. Only defined for directed graphs; fails with
/// [`ErrorKind::WrongGraphKind`] otherwise. Returns the SCCs in
/// unspecified order, each as an unordered vertex list.
pub fn strongly_connected_components<T, K, G>(graph: &G) -> GraphResult<Vec<Vec<K>>, T, K>
where
    T: Clone,
    K: Clone + Eq + Hash + Debug,
    G: ImmutableGraph<T, K> + ?Sized,
{
    if !graph.traits().is_directed() {
        return Err(GraphError::new(ErrorKind::WrongGraphKind("directed")));
    }

    let adjacency = graph.adjacency_map();
    let mut tarjan = Tarjan {
        adjacency: &adjacency,
        index: HashMap::new(),
        lowlink: HashMap::new(),
        on_stack: HashMap::new(),
        stack: Vec::new(),
        next_index: 0,
        components: Vec::new(),
    };
    for vertex in adjacency.keys() {
        if !tarjan.index.contains_key(vertex) {
            tarjan.run(vertex.clone());
        }
    }
    Ok(tarjan.components)
}

struct Tarjan<'a, K>
where
    K: Clone + Eq + Hash,
{
    adjacency: &'a HashMap<K, HashMap<K, crate::properties::EdgeProperties>>,
    index: HashMap<K, usize>,
    lowlink: HashMap<K, usize>,
    on_stack: HashMap<K, bool>,
    stack: Vec<K>,
    next_index: usize,
    components: Vec<Vec<K>>,
}

impl<'a, K> Tarjan<'a, K>
where
    K: Clone + Eq + Hash,
{
    /// Recursive by construction (classic Tarjan); graph sizes this suite
    /// targets don't threaten the call stack. The non-recursive traversal
    /// helper is reserved for cycle prediction and transitive reduction,
    /// which walk explicit stacks instead.
    fn run(&mut self, v: K) {
        self.index.insert(v.clone(), self.next_index);
        self.lowlink.insert(v.clone(), self.next_index);
        self.next_index += 1;
        self.stack.push(v.clone());
        self.on_stack.insert(v.clone(), true);

        if let Some(successors) = self.adjacency.get(&v) {
            for w in successors.keys() {
                if !self.index.contains_key(w) {
                    self.run(w.clone());
                    let w_low = self.lowlink[w];
                    let v_low = self.lowlink[&v];
                    self.lowlink.insert(v.clone(), v_low.min(w_low));
                } else if *self.on_stack.get(w).unwrap_or(&false) {
                    let w_index = self.index[w];
                    let v_low = self.lowlink[&v];
                    self.lowlink.insert(v.clone(), v_low.min(w_index));
                }
            }
        }

        if self.lowlink[&v] == self.index[&v] {
            let mut component = Vec::new();
            loop {
                let w = self.stack.pop().expect("scc stack underflow");
                self.on_stack.insert(w.clone(), false);
                let reached_v = w == v;
                component.push(w);
                if reached_v {
                    break;
                }
            }
            self.components.push(component);
        }
    }
}

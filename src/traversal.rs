//! # Non-recursive graph walks
//!
//! ## Description
//! A small DFS/BFS helper shared by the algorithms that need "walk from a
//! vertex, following some edge direction, until a condition is met" —
//! [cycle prediction][cc] walks backward over predecessors, [connected
//! components][cmp] walks the adjacency map forward. Both are iterative
//! (an explicit `Vec`/`VecDeque`, not a recursive call) so traversal depth
//! isn't bounded by the call stack, and both take a `visit` hook that can
//! ask the walk to stop early — cycle prediction stops the moment it sees
//! the target vertex instead of exhausting the whole reachable set.
//!
//! [cc]: crate::algorithms::path::creates_cycle
//! [cmp]: crate::algorithms::set_ops::components

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

/// # Visit outcome
///
/// ## Description
/// Returned by the `visit` hook passed to [`dfs`]/[`bfs`] to decide
/// whether the walk should keep exploring or stop immediately.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    Stop,
}

/// # Depth-first walk
///
/// ## Description
/// Visits `start` and everything reachable from it via `neighbors`,
/// using an explicit stack. Returns the set of visited vertices. `visit`
/// is called once per vertex, in visitation order; if it returns
/// [`Step::Stop`], the walk stops immediately (the returned set still
/// contains every vertex visited up to and including that one).
pub fn dfs<K>(start: K, mut neighbors: impl FnMut(&K) -> Vec<K>, mut visit: impl FnMut(&K) -> Step) -> HashSet<K>
where
    K: Clone + Eq + Hash,
{
    let mut visited = HashSet::new();
    let mut stack = vec![start];
    while let Some(current) = stack.pop() {
        if !visited.insert(current.clone()) {
            continue;
        }
        if visit(&current) == Step::Stop {
            break;
        }
        for next in neighbors(&current) {
            if !visited.contains(&next) {
                stack.push(next);
            }
        }
    }
    visited
}

/// # Breadth-first walk
///
/// ## Description
/// Same contract as [`dfs`], but explores in breadth-first order via an
/// explicit queue.
pub fn bfs<K>(start: K, mut neighbors: impl FnMut(&K) -> Vec<K>, mut visit: impl FnMut(&K) -> Step) -> HashSet<K>
where
    K: Clone + Eq + Hash,
{
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    queue.push_back(start);
    while let Some(current) = queue.pop_front() {
        if !visited.insert(current.clone()) {
            continue;
        }
        if visit(&current) == Step::Stop {
            break;
        }
        for next in neighbors(&current) {
            if !visited.contains(&next) {
                queue.push_back(next);
            }
        }
    }
    visited
}



#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn chain() -> HashMap<i32, Vec<i32>> {
        HashMap::from([(1, vec![2]), (2, vec![3]), (3, vec![])])
    }

    #[test]
    fn dfs_visits_everything_reachable() {
        let graph = chain();
        let visited = dfs(1, |k| graph.get(k).cloned().unwrap_or_default(), |_| Step::Continue);
        assert_eq!(visited, HashSet::from([1, 2, 3]));
    }

    #[test]
    fn dfs_stops_early() {
        let graph = chain();
        let mut seen = Vec::new();
        dfs(1, |k| graph.get(k).cloned().unwrap_or_default(), |&k| {
            seen.push(k);
            if k == 2 { Step::Stop } else { Step::Continue }
        });
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn bfs_visits_everything_reachable() {
        let graph = chain();
        let visited = bfs(1, |k| graph.get(k).cloned().unwrap_or_default(), |_| Step::Continue);
        assert_eq!(visited, HashSet::from([1, 2, 3]));
    }
}

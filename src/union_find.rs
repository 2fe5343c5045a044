//! # Union-find
//!
//! ## Description
//! A disjoint-set forest over vertex keys, with path compression on
//! [`UnionFind::find`]. Used by [Kruskal's spanning tree][tree] to decide
//! whether the next candidate edge would close a cycle within the tree
//! being built so far.
//!
//! [tree]: crate::algorithms::tree

use std::collections::HashMap;
use std::hash::Hash;

/// # Disjoint-set forest
///
/// ## Description
/// Maintains equivalence classes over a fixed universe of keys, seeded by
/// [`UnionFind::new`]. Union-by-rank keeps the tree shallow; `find` applies
/// path compression on every lookup.
pub struct UnionFind<K>
where
    K: Clone + Eq + Hash,
{
    parent: HashMap<K, K>,
    rank: HashMap<K, usize>,
}

impl<K> UnionFind<K>
where
    K: Clone + Eq + Hash,
{
    /// # New
    ///
    /// ## Description
    /// Seeds one singleton set per key in `keys`.
    pub fn new(keys: impl IntoIterator<Item = K>) -> Self {
        let mut parent = HashMap::new();
        let mut rank = HashMap::new();
        for key in keys {
            rank.insert(key.clone(), 0);
            parent.insert(key.clone(), key);
        }
        UnionFind { parent, rank }
    }

    /// # Find
    ///
    /// ## Description
    /// Returns the representative of the set `key` belongs to, compressing
    /// the path from `key` to the root along the way.
    pub fn find(&mut self, key: &K) -> K {
        let parent = self.parent.get(key).cloned().expect("key not in union-find universe");
        if &parent == key {
            return parent;
        }
        let root = self.find(&parent);
        self.parent.insert(key.clone(), root.clone());
        root
    }

    /// # Union
    ///
    /// ## Description
    /// Merges the sets containing `a` and `b`, attaching the lower-rank
    /// root under the higher-rank one. Returns `true` if the sets were
    /// distinct (a merge happened), `false` if they were already the same
    /// set.
    pub fn union(&mut self, a: &K, b: &K) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        let rank_a = self.rank[&root_a];
        let rank_b = self.rank[&root_b];
        if rank_a < rank_b {
            self.parent.insert(root_a, root_b);
        } else if rank_a > rank_b {
            self.parent.insert(root_b, root_a);
        } else {
            self.parent.insert(root_b, root_a.clone());
            *self.rank.get_mut(&root_a).unwrap() += 1;
        }
        true
    }
}



#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons_are_distinct() {
        let mut uf = UnionFind::new(['a', 'b', 'c']);
        assert_ne!(uf.find(&'a'), uf.find(&'b'));
    }

    #[test]
    fn union_merges_sets() {
        let mut uf = UnionFind::new(['a', 'b', 'c']);
        assert!(uf.union(&'a', &'b'));
        assert_eq!(uf.find(&'a'), uf.find(&'b'));
        assert_ne!(uf.find(&'a'), uf.find(&'c'));
    }

    #[test]
    fn repeated_union_is_noop() {
        let mut uf = UnionFind::new(['a', 'b']);
        assert!(uf.union(&'a', &'b'));
        assert!(!uf.union(&'a', &'b'));
        assert!(!uf.union(&'b', &'a'));
    }

    #[test]
    fn path_compression_keeps_find_consistent() {
        let mut uf = UnionFind::new(0..10);
        for i in 1..10 {
            uf.union(&0, &i);
        }
        let root = uf.find(&0);
        for i in 0..10 {
            assert_eq!(uf.find(&i), root);
        }
    }
}

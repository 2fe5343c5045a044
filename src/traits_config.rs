//! # Graph traits
//!
//! ## Description
//! A graph's [`Traits`] record is a small, immutable bitset fixed at
//! construction time: `IsDirected`, `IsAcyclic`, `PreventCycles`,
//! `IsWeighted`, `IsRooted`. Built as a `bitflags!` set plus named
//! accessors rather than five separate `bool` fields.

use bitflags::bitflags;

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    struct TraitFlags: u8 {
        const DIRECTED       = 0b0_0001;
        const ACYCLIC        = 0b0_0010;
        const PREVENT_CYCLES = 0b0_0100;
        const WEIGHTED       = 0b0_1000;
        const ROOTED         = 0b1_0000;
    }
}

/// # Traits
///
/// ## Description
/// The immutable configuration record carried by every graph. `Traits`
/// values are only ever produced by applying a sequence of
/// [`TraitOption`]s to [`Traits::default`]; there is no public way to flip
/// a flag after construction.
///
/// ## Invariants
/// `prevents_cycles() == true` implies `is_acyclic() == true` — the
/// [`prevent_cycles`] option sets both flags together, so this invariant
/// cannot be violated through the public option functions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Traits {
    flags: TraitFlags,
}

impl Traits {
    #[inline]
    pub fn is_directed(&self) -> bool {
        self.flags.contains(TraitFlags::DIRECTED)
    }

    #[inline]
    pub fn is_acyclic(&self) -> bool {
        self.flags.contains(TraitFlags::ACYCLIC)
    }

    #[inline]
    pub fn prevents_cycles(&self) -> bool {
        self.flags.contains(TraitFlags::PREVENT_CYCLES)
    }

    #[inline]
    pub fn is_weighted(&self) -> bool {
        self.flags.contains(TraitFlags::WEIGHTED)
    }

    #[inline]
    pub fn is_rooted(&self) -> bool {
        self.flags.contains(TraitFlags::ROOTED)
    }

    /// # Build from options
    ///
    /// ## Description
    /// Apply a sequence of [`TraitOption`]s, in order, onto the default
    /// (all flags cleared) record.
    pub fn from_options(options: impl IntoIterator<Item = TraitOption>) -> Self {
        let mut traits = Traits::default();
        for option in options {
            option(&mut traits);
        }
        traits
    }
}

/// # Trait option
///
/// ## Description
/// A function that sets one or more flags on a [`Traits`] record. Passed
/// to [`crate::new`] in the order they should be applied.
pub type TraitOption = Box<dyn Fn(&mut Traits)>;

/// # Directed
///
/// ## Description
/// Marks the graph as directed. Without this option, `new` constructs an
/// undirected graph.
pub fn directed() -> TraitOption {
    Box::new(|traits| traits.flags.insert(TraitFlags::DIRECTED))
}

/// # Acyclic
pub fn acyclic() -> TraitOption {
    Box::new(|traits| traits.flags.insert(TraitFlags::ACYCLIC))
}

/// # Prevent cycles
///
/// ## Description
/// Rejects any `add_edge` call that would close a directed cycle. Implies
/// [`acyclic`]: both flags are set together so the invariant
/// `prevents_cycles() ⇒ is_acyclic()` always holds.
pub fn prevent_cycles() -> TraitOption {
    Box::new(|traits| traits.flags.insert(TraitFlags::PREVENT_CYCLES | TraitFlags::ACYCLIC))
}

/// # Weighted
pub fn weighted() -> TraitOption {
    Box::new(|traits| traits.flags.insert(TraitFlags::WEIGHTED))
}

/// # Rooted
pub fn rooted() -> TraitOption {
    Box::new(|traits| traits.flags.insert(TraitFlags::ROOTED))
}

/// # Tree preset
///
/// ## Description
/// Shorthand for `acyclic() ∧ rooted()`, matching the `Tree` preset
/// defined in the data model.
pub fn tree() -> TraitOption {
    Box::new(|traits| traits.flags.insert(TraitFlags::ACYCLIC | TraitFlags::ROOTED))
}



#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prevent_cycles_implies_acyclic() {
        let traits = Traits::from_options(vec![prevent_cycles()]);
        assert!(traits.prevents_cycles());
        assert!(traits.is_acyclic());
    }

    #[test]
    fn tree_preset_sets_acyclic_and_rooted() {
        let traits = Traits::from_options(vec![tree()]);
        assert!(traits.is_acyclic());
        assert!(traits.is_rooted());
        assert!(!traits.prevents_cycles());
    }

    #[test]
    fn options_compose() {
        let traits = Traits::from_options(vec![directed(), weighted()]);
        assert!(traits.is_directed());
        assert!(traits.is_weighted());
        assert!(!traits.is_rooted());
    }
}

//! # Algorithm suite
//!
//! ## Description
//! Free functions over the [`crate::graph::ImmutableGraph`]/
//! [`crate::graph::MutableGraph`] contracts, grouped by concern:
//! path-finding, DAG-only transforms, spanning trees, and set operations
//! over whole graphs.

pub mod dag;
pub mod path;
pub mod set_ops;
pub mod tree;

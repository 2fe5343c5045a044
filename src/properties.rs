//! # Vertex and edge properties
//!
//! ## Description
//! This module defines the property records attached to vertices and
//! edges ([`VertexProperties`], [`EdgeProperties`]) and the functional
//! options used to build them ([`VertexOption`], [`EdgeOption`]). Each
//! option is a small closure that mutates a default record; `add_vertex`
//! and `add_edge` apply the options left-to-right, one attribute at a
//! time, onto a freshly defaulted record.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt::Debug;
use dyn_clone::{clone_trait_object, DynClone};



// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * OPAQUE EDGE DATA                                                                   *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Opaque edge payload
///
/// ## Description
/// Marker trait for values that can be stashed in
/// [`EdgeProperties::data`]. Blanket-implemented for every
/// `Any + Debug + Clone + Send + Sync` type.
pub trait GraphData: Any + Debug + DynClone + Send + Sync {}

impl<V> GraphData for V where V: Any + Debug + Clone + Send + Sync {}

clone_trait_object!(GraphData);

impl dyn GraphData {
    /// # Type check
    ///
    /// ## Description
    /// Check whether the payload holds a value of type `V`.
    #[inline]
    pub fn is<V: Any>(&self) -> bool {
        TypeId::of::<V>() == self.type_id()
    }

    /// # Downcast
    ///
    /// ## Description
    /// Borrow the payload as `V` if it holds one, `None` otherwise.
    pub fn downcast_ref<V: Any>(&self) -> Option<&V> {
        if self.is::<V>() {
            // SAFETY: `is::<V>()` just confirmed the concrete type behind
            // this trait object is exactly `V`.
            Some(unsafe { &*(self as *const dyn GraphData as *const V) })
        } else {
            None
        }
    }
}



// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * VERTEX PROPERTIES                                                                 *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Vertex properties
///
/// ## Description
/// The weight and attribute bag attached to a vertex. Built via
/// [`VertexOption`] closures applied left-to-right onto
/// `VertexProperties::default()`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VertexProperties {
    pub weight: i64,
    pub attributes: HashMap<String, String>,
}

/// # Vertex option
///
/// ## Description
/// A function that mutates a [`VertexProperties`] record in place. Passed
/// to `add_vertex` in the order they should be applied.
pub type VertexOption = Box<dyn FnOnce(&mut VertexProperties)>;

/// # Set vertex weight
pub fn vertex_weight(weight: i64) -> VertexOption {
    Box::new(move |props| props.weight = weight)
}

/// # Set one vertex attribute
pub fn vertex_attribute(key: impl Into<String>, value: impl Into<String>) -> VertexOption {
    let (key, value) = (key.into(), value.into());
    Box::new(move |props| { props.attributes.insert(key, value); })
}

/// # Merge vertex attributes
///
/// ## Description
/// Merges `attributes` into the record's attribute map, overwriting keys
/// already present. The map is copied at the time the option is built, so
/// mutating the caller's map afterwards has no effect on the vertex.
pub fn vertex_attributes(attributes: HashMap<String, String>) -> VertexOption {
    Box::new(move |props| props.attributes.extend(attributes))
}

pub(crate) fn apply_vertex_options(options: impl IntoIterator<Item = VertexOption>) -> VertexProperties {
    let mut props = VertexProperties::default();
    for option in options {
        option(&mut props);
    }
    props
}



// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * EDGE PROPERTIES                                                                   *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Edge properties
///
/// ## Description
/// The weight, attribute bag and opaque data payload attached to an edge.
/// Built via [`EdgeOption`] closures applied left-to-right onto
/// `EdgeProperties::default()`.
#[derive(Clone, Debug, Default)]
pub struct EdgeProperties {
    pub weight: i64,
    pub attributes: HashMap<String, String>,
    pub data: Option<Box<dyn GraphData>>,
}

impl PartialEq for EdgeProperties {
    /// Data payloads are intentionally excluded: there is no way to compare
    /// two `Box<dyn GraphData>` for equality without requiring every
    /// payload type to implement it, and tests only ever compare weight and
    /// attributes.
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.attributes == other.attributes
    }
}

/// # Edge option
///
/// ## Description
/// A function that mutates an [`EdgeProperties`] record in place. Passed
/// to `add_edge`/`update_edge` in the order they should be applied.
pub type EdgeOption = Box<dyn FnOnce(&mut EdgeProperties)>;

/// # Set edge weight
pub fn edge_weight(weight: i64) -> EdgeOption {
    Box::new(move |props| props.weight = weight)
}

/// # Set one edge attribute
pub fn edge_attribute(key: impl Into<String>, value: impl Into<String>) -> EdgeOption {
    let (key, value) = (key.into(), value.into());
    Box::new(move |props| { props.attributes.insert(key, value); })
}

/// # Merge edge attributes
pub fn edge_attributes(attributes: HashMap<String, String>) -> EdgeOption {
    Box::new(move |props| props.attributes.extend(attributes))
}

/// # Set the opaque edge payload
pub fn edge_data<D: GraphData>(data: D) -> EdgeOption {
    Box::new(move |props| props.data = Some(Box::new(data)))
}

pub(crate) fn apply_edge_options(options: impl IntoIterator<Item = EdgeOption>) -> EdgeProperties {
    let mut props = EdgeProperties::default();
    for option in options {
        option(&mut props);
    }
    props
}

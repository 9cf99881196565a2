//! Base trait for state trees held by a store.

/// Marker trait for state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data a view needs)
/// - Comparable (PartialEq for detecting changes)
pub trait StoreState: Clone + PartialEq + Default + Send + 'static {}

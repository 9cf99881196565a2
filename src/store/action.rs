//! Base trait for actions in the state container.

/// Marker trait for action objects.
///
/// Actions represent:
/// - The start of an asynchronous operation (INIT)
/// - Its completion, successful or not (DONE)
/// - Synchronous UI events (toggles, drops)
///
/// Actions are processed by reducers to produce new states.
pub trait Action: Clone + std::fmt::Debug + Send + 'static {
    /// Stable, namespaced kind string (e.g. `CHALLENGE/GET_DETAILS_INIT`).
    fn kind(&self) -> &'static str;
}

//! Reducer trait and the store that drives it.

use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::Mutex;

use super::action::Action;
use super::state::StoreState;

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Action) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: StoreState;

    /// The action type this reducer handles.
    type Action: Action;

    /// Process an action and return the new state.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}

/// Single owner of a state tree.
///
/// Every dispatch replaces the whole tree under the lock, so readers
/// never observe a partially reduced state. Cloning the store shares
/// the same tree.
pub struct Store<R: Reducer> {
    state: Arc<Mutex<R::State>>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        Self {
            state: Arc::new(Mutex::new(initial)),
            _reducer: PhantomData,
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> R::State {
        self.state.lock().clone()
    }

    /// Reduce one action and return the resulting state.
    pub fn dispatch(&self, action: R::Action) -> R::State {
        tracing::debug!(kind = action.kind(), "reducing action");
        let mut guard = self.state.lock();
        let current = std::mem::take(&mut *guard);
        *guard = R::reduce(current, action);
        guard.clone()
    }
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            _reducer: PhantomData,
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

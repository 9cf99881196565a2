//! Dispatch adapter for deferred action payloads.
//!
//! Action creators return either a ready action or a future that
//! resolves to one. The [`Dispatcher`] awaits the future and hands the
//! resolved action to the store, so reducers only ever see plain values.

use std::future::Future;
use std::pin::Pin;

use crate::store::{Reducer, Store};

/// Boxed future resolving to an action.
pub type PendingAction<A> = Pin<Box<dyn Future<Output = A> + Send + 'static>>;

/// Output of an action creator.
pub enum Dispatchable<A> {
    /// Immediately dispatchable action.
    Ready(A),
    /// Action produced once a remote operation settles.
    Deferred(PendingAction<A>),
}

impl<A: Send + 'static> Dispatchable<A> {
    /// Wrap a fallible operation; `tag` turns its outcome into the DONE action.
    pub fn deferred<T, E, F>(operation: F, tag: fn(Result<T, E>) -> A) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
        T: Send + 'static,
        E: Send + 'static,
    {
        Dispatchable::Deferred(Box::pin(async move { tag(operation.await) }))
    }

    /// Settle into a plain action.
    pub async fn resolve(self) -> A {
        match self {
            Dispatchable::Ready(action) => action,
            Dispatchable::Deferred(pending) => pending.await,
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, Dispatchable::Deferred(_))
    }
}

impl<A> From<A> for Dispatchable<A> {
    fn from(action: A) -> Self {
        Dispatchable::Ready(action)
    }
}

/// Feeds resolved actions into a [`Store`].
pub struct Dispatcher<R: Reducer> {
    store: Store<R>,
}

impl<R: Reducer> Dispatcher<R> {
    pub fn new(store: Store<R>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Store<R> {
        &self.store
    }

    /// Await the payload if needed, then reduce it.
    pub async fn dispatch(&self, dispatchable: Dispatchable<R::Action>) -> R::State {
        let action = dispatchable.resolve().await;
        self.store.dispatch(action)
    }

    /// Dispatch an INIT action and its DONE counterpart in order.
    pub async fn run_lifecycle(
        &self,
        init: R::Action,
        done: Dispatchable<R::Action>,
    ) -> R::State {
        self.store.dispatch(init);
        self.dispatch(done).await
    }
}

//! Unidirectional state-container primitives.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ View
//!    ↑                               │
//!    └───────────────────────────────┘
//! ```
//!
//! - **State**: Immutable, serializable snapshot of one entity family
//! - **Action**: Tagged INIT/DONE lifecycle events and UI toggles
//! - **Reducer**: Pure function that folds an action into a new state
//! - **Store**: Single owner of the current state; reduces one action at a time

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::{Reducer, Store};
pub use state::StoreState;

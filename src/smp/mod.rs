//! Submission management (`SMP/*`) actions.
//!
//! The challenge reducer folds these too: deleting a submission drops
//! it from the loaded `mySubmissions` list.

mod action;
pub mod actions;

pub use action::SmpAction;

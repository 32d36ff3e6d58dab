//! The navigation engine.
//!
//! This module is the imperative shell around the core types: it owns the
//! live screens and drives lifecycle hooks and presentation.
//!
//! # Key Concepts
//!
//! - **NavigationStack**: never-empty stack of owned screens
//! - **Transition**: guarded edge between two screen names
//! - **Router**: first-match transition engine fed by state notifications

mod error;
mod router;
mod stack;
mod transition;

pub use error::RouterError;
pub use router::{Navigation, Router};
pub use stack::NavigationStack;
pub use transition::Transition;

//! Builder API for ergonomic router construction.
//!
//! This module provides fluent builders for routers and transitions, plus
//! validation of the assembled transition table.

pub mod error;
pub mod router;
pub mod transition;
pub mod validation;

pub use error::BuildError;
pub use router::RouterBuilder;
pub use transition::TransitionBuilder;
pub use validation::{validate_transitions, TransitionIssue};

use crate::core::{Condition, TransitionDirection};
use crate::navigation::Transition;

/// Create an unconditional push transition.
///
/// # Example
///
/// ```
/// use wayfinder::builder::push_always;
///
/// struct AppState;
///
/// let transition = push_always::<AppState>("splash", "home");
/// assert!(transition.should_transition(&AppState));
/// ```
pub fn push_always<T: 'static>(
    source: impl Into<String>,
    destination: impl Into<String>,
) -> Transition<T> {
    Transition::with_condition(
        source,
        destination,
        TransitionDirection::Push,
        Condition::always(),
    )
}

/// Create an unconditional pop transition.
///
/// # Example
///
/// ```
/// use wayfinder::builder::pop_always;
///
/// struct AppState;
///
/// let transition = pop_always::<AppState>("receipt", "home");
/// assert!(transition.condition().is_unconditional());
/// ```
pub fn pop_always<T: 'static>(
    source: impl Into<String>,
    destination: impl Into<String>,
) -> Transition<T> {
    Transition::with_condition(
        source,
        destination,
        TransitionDirection::Pop,
        Condition::always(),
    )
}

//! Conditions controlling when a transition fires.
//!
//! A condition is a pure boolean function over the externally supplied
//! application state. Conditions are only ever invoked, never compared.

use std::fmt;
use std::sync::Arc;

/// Pure predicate over the application state `T`.
///
/// Conditions are shared behind an `Arc`, so cloning a transition shares
/// its predicate instead of duplicating it.
///
/// # Example
///
/// ```rust
/// use wayfinder::core::Condition;
///
/// struct AppState {
///     selected: Option<u32>,
/// }
///
/// let has_selection = Condition::new(|state: &AppState| state.selected.is_some());
///
/// assert!(has_selection.check(&AppState { selected: Some(5) }));
/// assert!(!has_selection.check(&AppState { selected: None }));
/// ```
pub struct Condition<T> {
    predicate: Arc<dyn Fn(&T) -> bool + Send + Sync>,
    unconditional: bool,
}

impl<T> Condition<T> {
    /// Create a condition from a pure predicate function.
    ///
    /// The predicate must be deterministic and free of side effects.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Condition {
            predicate: Arc::new(predicate),
            unconditional: false,
        }
    }

    /// A condition that holds for every state.
    pub fn always() -> Self
    where
        T: 'static,
    {
        Condition {
            predicate: Arc::new(|_: &T| true),
            unconditional: true,
        }
    }

    /// Evaluate the condition against a state.
    pub fn check(&self, state: &T) -> bool {
        (self.predicate)(state)
    }

    /// Whether this condition was built with [`Condition::always`].
    ///
    /// Predicates built with [`Condition::new`] report `false` even if they
    /// happen to accept every state.
    pub fn is_unconditional(&self) -> bool {
        self.unconditional
    }
}

impl<T> Clone for Condition<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            unconditional: self.unconditional,
        }
    }
}

impl<T> fmt::Debug for Condition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unconditional {
            f.write_str("Condition(always)")
        } else {
            f.write_str("Condition(<predicate>)")
        }
    }
}

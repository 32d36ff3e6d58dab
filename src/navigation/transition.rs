//! Transitions between named screens.

use crate::core::{Condition, TransitionDirection};
use std::fmt;

/// A guarded, directed edge from one screen name to another.
///
/// If the router currently shows a screen named `source` and the condition
/// holds for the incoming state, the router navigates to `destination` in
/// the given direction. Transitions are immutable once created.
///
/// # Example
///
/// ```rust
/// use wayfinder::{Transition, TransitionDirection};
///
/// struct AppState {
///     selected: Option<u32>,
/// }
///
/// let open_detail = Transition::new(
///     "home",
///     "detail",
///     TransitionDirection::Push,
///     |state: &AppState| state.selected.is_some(),
/// );
///
/// assert_eq!(open_detail.source(), "home");
/// assert!(open_detail.should_transition(&AppState { selected: Some(5) }));
/// ```
pub struct Transition<T> {
    source: String,
    destination: String,
    direction: TransitionDirection,
    condition: Condition<T>,
}

impl<T> Transition<T> {
    /// Create a transition from a predicate over the state.
    pub fn new<F>(
        source: impl Into<String>,
        destination: impl Into<String>,
        direction: TransitionDirection,
        condition: F,
    ) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::with_condition(source, destination, direction, Condition::new(condition))
    }

    /// Create a transition from an existing [`Condition`].
    pub fn with_condition(
        source: impl Into<String>,
        destination: impl Into<String>,
        direction: TransitionDirection,
        condition: Condition<T>,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            direction,
            condition,
        }
    }

    /// Shorthand for a [`TransitionDirection::Push`] transition.
    pub fn push<F>(source: impl Into<String>, destination: impl Into<String>, condition: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::new(source, destination, TransitionDirection::Push, condition)
    }

    /// Shorthand for a [`TransitionDirection::Pop`] transition.
    pub fn pop<F>(source: impl Into<String>, destination: impl Into<String>, condition: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::new(source, destination, TransitionDirection::Pop, condition)
    }

    /// The name of the screen to transition from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The name of the screen to transition to.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Whether the destination is pushed or popped to.
    pub fn direction(&self) -> TransitionDirection {
        self.direction
    }

    /// The condition guarding this transition.
    pub fn condition(&self) -> &Condition<T> {
        &self.condition
    }

    /// Evaluate whether the transition should be performed given `state`.
    pub fn should_transition(&self, state: &T) -> bool {
        self.condition.check(state)
    }

    /// Check whether this transition fires from `current` given `state`.
    ///
    /// The source is compared first; the condition is only evaluated for
    /// transitions leaving the current screen.
    pub fn applies_to(&self, current: &str, state: &T) -> bool {
        self.source == current && self.should_transition(state)
    }
}

impl<T> Clone for Transition<T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            destination: self.destination.clone(),
            direction: self.direction,
            condition: self.condition.clone(),
        }
    }
}

impl<T> fmt::Debug for Transition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("source", &self.source)
            .field("destination", &self.destination)
            .field("direction", &self.direction)
            .field("condition", &self.condition)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Editor {
        cancelled: bool,
    }

    #[test]
    fn accessors_return_constructor_values() {
        let transition = Transition::new("edit", "home", TransitionDirection::Pop, |s: &Editor| {
            s.cancelled
        });

        assert_eq!(transition.source(), "edit");
        assert_eq!(transition.destination(), "home");
        assert_eq!(transition.direction(), TransitionDirection::Pop);
    }

    #[test]
    fn should_transition_evaluates_condition() {
        let transition = Transition::pop("edit", "home", |s: &Editor| s.cancelled);

        assert!(transition.should_transition(&Editor { cancelled: true }));
        assert!(!transition.should_transition(&Editor { cancelled: false }));
    }

    #[test]
    fn applies_to_requires_matching_source() {
        let transition = Transition::push("home", "detail", |_: &Editor| true);

        assert!(transition.applies_to("home", &Editor { cancelled: false }));
        assert!(!transition.applies_to("detail", &Editor { cancelled: false }));
    }

    #[test]
    fn applies_to_skips_condition_for_other_sources() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counted = Arc::clone(&calls);
        let transition = Transition::push("home", "detail", move |_: &Editor| {
            counted.fetch_add(1, Ordering::SeqCst);
            true
        });

        assert!(!transition.applies_to("settings", &Editor { cancelled: false }));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn shorthands_set_direction() {
        let push = Transition::push("a", "b", |_: &Editor| true);
        let pop = Transition::pop("b", "a", |_: &Editor| true);

        assert_eq!(push.direction(), TransitionDirection::Push);
        assert_eq!(pop.direction(), TransitionDirection::Pop);
    }

    #[test]
    fn with_condition_keeps_unconditional_flag() {
        let transition: Transition<Editor> = Transition::with_condition(
            "home",
            "detail",
            TransitionDirection::Push,
            Condition::always(),
        );

        assert!(transition.condition().is_unconditional());
    }

    #[test]
    fn debug_lists_fields() {
        let transition = Transition::push("home", "detail", |_: &Editor| true);

        assert_eq!(
            format!("{:?}", transition),
            r#"Transition { source: "home", destination: "detail", direction: Push, condition: Condition(<predicate>) }"#
        );
    }
}

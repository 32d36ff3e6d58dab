//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{Condition, TransitionDirection};
use crate::navigation::Transition;

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<T> {
    from: Option<String>,
    to: Option<String>,
    direction: Option<TransitionDirection>,
    condition: Option<Condition<T>>,
}

impl<T: 'static> TransitionBuilder<T> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            to: None,
            direction: None,
            condition: None,
        }
    }

    /// Set the source screen name (required).
    pub fn from(mut self, screen: impl Into<String>) -> Self {
        self.from = Some(screen.into());
        self
    }

    /// Set the destination screen name (required).
    pub fn to(mut self, screen: impl Into<String>) -> Self {
        self.to = Some(screen.into());
        self
    }

    /// Set the direction (required, or use `.push()` / `.pop()`).
    pub fn direction(mut self, direction: TransitionDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Shorthand for `.direction(TransitionDirection::Push)`.
    pub fn push(self) -> Self {
        self.direction(TransitionDirection::Push)
    }

    /// Shorthand for `.direction(TransitionDirection::Pop)`.
    pub fn pop(self) -> Self {
        self.direction(TransitionDirection::Pop)
    }

    /// Set the condition (optional, defaults to [`Condition::always`]).
    pub fn condition(mut self, condition: Condition<T>) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Set the condition using a closure (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.condition = Some(Condition::new(predicate));
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<T>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingSource)?;
        let to = self.to.ok_or(BuildError::MissingDestination)?;
        let direction = self.direction.ok_or(BuildError::MissingDirection)?;
        let condition = self.condition.unwrap_or_else(Condition::always);

        Ok(Transition::with_condition(from, to, direction, condition))
    }
}

impl<T: 'static> Default for TransitionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

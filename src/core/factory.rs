//! Screen construction capability supplied by the embedding application.

use thiserror::Error;

/// Errors a screens factory reports back to the router.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FactoryError {
    /// The factory does not know how to build a screen with this name.
    #[error("No screen named '{name}' is implemented by the factory")]
    UnknownScreen { name: String },

    /// The screen is known but could not be constructed.
    #[error("Failed to create screen '{name}': {reason}")]
    CreationFailed { name: String, reason: String },
}

impl FactoryError {
    /// Shorthand for [`FactoryError::UnknownScreen`].
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownScreen { name: name.into() }
    }
}

/// Creates new screens by name.
///
/// The factory is invoked exactly once each time a push transition fires,
/// with the transition's destination name. It typically holds whatever
/// dependencies the concrete screens need.
///
/// Any `FnMut(&str) -> Result<S, FactoryError>` closure is a valid factory.
///
/// # Example
///
/// ```rust
/// use wayfinder::core::{FactoryError, Screen, ScreensFactory};
///
/// struct Named(String);
///
/// impl Screen for Named {
///     fn name(&self) -> &str { &self.0 }
///     fn will_present(&mut self) {}
///     fn did_present(&mut self) {}
///     fn will_disappear(&mut self) {}
/// }
///
/// let mut factory = |name: &str| match name {
///     "home" | "player" => Ok(Named(name.to_string())),
///     other => Err(FactoryError::unknown(other)),
/// };
///
/// assert_eq!(factory.create("player").unwrap().name(), "player");
/// assert!(factory.create("missing").is_err());
/// ```
pub trait ScreensFactory<S> {
    /// Create a new screen named `screen_name`.
    fn create(&mut self, screen_name: &str) -> Result<S, FactoryError>;
}

impl<S, F> ScreensFactory<S> for F
where
    F: FnMut(&str) -> Result<S, FactoryError>,
{
    fn create(&mut self, screen_name: &str) -> Result<S, FactoryError> {
        self(screen_name)
    }
}

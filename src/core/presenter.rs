//! Presentation capability supplied by the embedding application.

/// Displays a screen to the end user.
///
/// The implementation depends on the host UI toolkit: typically the screen
/// is swapped into some container widget. Presentation is synchronous and
/// infallible from the navigation core's point of view.
///
/// Any `FnMut(&S)` closure is a valid presenter.
///
/// # Example
///
/// ```rust
/// use wayfinder::core::{Presenter, Screen};
///
/// struct Title(&'static str);
///
/// impl Screen for Title {
///     fn name(&self) -> &str { self.0 }
///     fn will_present(&mut self) {}
///     fn did_present(&mut self) {}
///     fn will_disappear(&mut self) {}
/// }
///
/// let mut shown = Vec::new();
/// let mut presenter = |screen: &Title| shown.push(screen.name().to_string());
/// presenter.present(&Title("home"));
/// assert_eq!(shown, vec!["home"]);
/// ```
pub trait Presenter<S: ?Sized> {
    /// Present a screen.
    fn present(&mut self, screen: &S);
}

impl<S: ?Sized, F> Presenter<S> for F
where
    F: FnMut(&S),
{
    fn present(&mut self, screen: &S) {
        self(screen)
    }
}

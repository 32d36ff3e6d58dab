//! The Screen trait implemented by every navigable unit of content.
//!
//! Screens carry a name used for transition matching and three lifecycle
//! hooks driven by the navigation stack.

/// A named, independently lifecycle-managed unit of presented content.
///
/// Every hook must be implemented explicitly. When a navigation occurs the
/// hooks fire in a fixed order:
///
/// - `will_disappear` on the outgoing top of the stack,
/// - `will_present` on the destination, before the presenter runs,
/// - `did_present` on the destination, right after the presenter runs.
///
/// # Example
///
/// ```rust
/// use wayfinder::core::Screen;
///
/// struct Home {
///     visible: bool,
/// }
///
/// impl Screen for Home {
///     fn name(&self) -> &str {
///         "home"
///     }
///
///     fn will_present(&mut self) {}
///
///     fn did_present(&mut self) {
///         self.visible = true;
///     }
///
///     fn will_disappear(&mut self) {
///         self.visible = false;
///     }
/// }
///
/// let mut home = Home { visible: false };
/// home.did_present();
/// assert!(home.visible);
/// assert_eq!(home.name(), "home");
/// ```
pub trait Screen {
    /// Name of the screen, matched against transition sources and destinations.
    fn name(&self) -> &str;

    /// Called before the presenter presents the screen.
    fn will_present(&mut self);

    /// Called right after the presenter presents the screen.
    fn did_present(&mut self);

    /// Called before the screen gets replaced by another one.
    fn will_disappear(&mut self);
}

impl<S: Screen + ?Sized> Screen for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn will_present(&mut self) {
        (**self).will_present()
    }

    fn did_present(&mut self) {
        (**self).did_present()
    }

    fn will_disappear(&mut self) {
        (**self).will_disappear()
    }
}

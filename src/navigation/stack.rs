//! The stack of presented screens.

use crate::core::{Presenter, Screen};

/// Ordered, never-empty sequence of live screens.
///
/// The stack owns every screen pushed on it and a presenter that is asked
/// to display whichever screen becomes current. Index order is push order;
/// the last element is the current screen.
pub struct NavigationStack<S: Screen> {
    presenter: Box<dyn Presenter<S>>,
    stack: Vec<S>,
}

#[allow(clippy::len_without_is_empty)]
impl<S: Screen> NavigationStack<S> {
    /// Create a stack holding only `initial_screen`.
    ///
    /// The initial screen is not presented.
    pub fn new(presenter: impl Presenter<S> + 'static, initial_screen: S) -> Self {
        Self::with_boxed_presenter(Box::new(presenter), initial_screen)
    }

    pub(crate) fn with_boxed_presenter(presenter: Box<dyn Presenter<S>>, initial_screen: S) -> Self {
        Self {
            presenter,
            stack: vec![initial_screen],
        }
    }

    /// Push a screen on the stack and present it.
    ///
    /// Fires `will_disappear` on the current top, then `will_present`,
    /// the presenter and `did_present` on the pushed screen.
    pub fn push(&mut self, screen: S) -> &S {
        self.top_mut().will_disappear();
        self.stack.push(screen);

        tracing::debug!(
            target: "wayfinder.stack",
            op = "stack.push",
            screen = self.peek().name(),
            depth = self.stack.len(),
            "screen pushed"
        );

        self.present_top();
        self.peek()
    }

    /// Pop to the screen named `destination`.
    ///
    /// The stack is searched from the bottom, so with duplicate names the
    /// lowest occurrence wins. Returns `None` without touching the stack or
    /// firing any hook when no screen has that name.
    pub fn pop(&mut self, destination: &str) -> Option<&S> {
        let Some(index) = self.position(destination) else {
            tracing::debug!(
                target: "wayfinder.stack",
                op = "stack.pop",
                destination,
                "pop destination not on stack"
            );
            return None;
        };

        self.top_mut().will_disappear();
        let discarded = self.stack.len() - index - 1;
        self.stack.truncate(index + 1);

        tracing::debug!(
            target: "wayfinder.stack",
            op = "stack.pop",
            destination,
            discarded,
            depth = self.stack.len(),
            "popped to screen"
        );

        self.present_top();
        Some(self.peek())
    }

    /// The screen on top of the stack.
    pub fn peek(&self) -> &S {
        // The stack is created with one screen and pop never truncates below
        // the matched index, so there is always a last element.
        &self.stack[self.stack.len() - 1]
    }

    /// Number of screens on the stack. Always at least one.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Screens from bottom to top.
    pub fn screens(&self) -> &[S] {
        &self.stack
    }

    /// Screen names from bottom to top.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.stack.iter().map(|s| s.name())
    }

    /// Whether any screen on the stack is named `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.stack.iter().position(|s| s.name() == name)
    }

    fn top_mut(&mut self) -> &mut S {
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    fn present_top(&mut self) {
        let last = self.stack.len() - 1;
        let screen = &mut self.stack[last];
        screen.will_present();
        self.presenter.present(screen);
        screen.did_present();
    }
}

impl<S: Screen> std::fmt::Debug for NavigationStack<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

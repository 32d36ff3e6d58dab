//! Router that performs transitions between screens.

use crate::core::{
    NavigationHistory, NavigationRecord, Presenter, Screen, ScreensFactory, TransitionDirection,
};
use crate::navigation::error::RouterError;
use crate::navigation::stack::NavigationStack;
use crate::navigation::transition::Transition;
use uuid::Uuid;

/// Outcome of feeding one state to the router.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// No transition leaving the current screen accepted the state
    Unchanged,

    /// A new screen was created and pushed
    Pushed { from: String, to: String },

    /// The stack was popped to an existing screen
    Popped {
        from: String,
        to: String,
        discarded: usize,
    },

    /// A pop transition fired but its destination is not on the stack
    DestinationMissing { destination: String },
}

impl Navigation {
    /// Whether the navigation stack changed its top (or re-presented it).
    pub fn navigated(&self) -> bool {
        matches!(self, Self::Pushed { .. } | Self::Popped { .. })
    }
}

/// Finite-state machine over screen names.
///
/// Nodes are screens and edges are the registered [`Transition`]s. Each
/// call to [`Router::on_state`] performs at most one transition: the first,
/// in registration order, whose source is the current screen and whose
/// condition holds for the state.
///
/// # Example
///
/// ```rust
/// use wayfinder::core::{FactoryError, Screen};
/// use wayfinder::{Router, Transition};
///
/// struct Page(&'static str);
///
/// impl Screen for Page {
///     fn name(&self) -> &str { self.0 }
///     fn will_present(&mut self) {}
///     fn did_present(&mut self) {}
///     fn will_disappear(&mut self) {}
/// }
///
/// struct AppState {
///     selected: Option<u32>,
/// }
///
/// let factory = |name: &str| match name {
///     "detail" => Ok(Page("detail")),
///     other => Err(FactoryError::unknown(other)),
/// };
///
/// let mut router = Router::new(Page("home"), |_: &Page| {}, factory);
/// router.add_transition(Transition::push("home", "detail", |s: &AppState| {
///     s.selected.is_some()
/// }));
///
/// let outcome = router.on_state(&AppState { selected: Some(5) }).unwrap();
/// assert!(outcome.navigated());
/// assert_eq!(router.current_screen().name(), "detail");
/// ```
pub struct Router<T, S: Screen> {
    navigation_stack: NavigationStack<S>,
    screens_factory: Box<dyn ScreensFactory<S>>,
    transitions: Vec<Transition<T>>,
    history: NavigationHistory,
    session_id: Uuid,
}

impl<T, S: Screen> Router<T, S> {
    /// Create a router showing `initial_screen`.
    pub fn new(
        initial_screen: S,
        presenter: impl Presenter<S> + 'static,
        screens_factory: impl ScreensFactory<S> + 'static,
    ) -> Self {
        Self::from_boxed(initial_screen, Box::new(presenter), Box::new(screens_factory))
    }

    pub(crate) fn from_boxed(
        initial_screen: S,
        presenter: Box<dyn Presenter<S>>,
        screens_factory: Box<dyn ScreensFactory<S>>,
    ) -> Self {
        Self {
            navigation_stack: NavigationStack::with_boxed_presenter(presenter, initial_screen),
            screens_factory,
            transitions: Vec::new(),
            history: NavigationHistory::new(),
            session_id: Uuid::new_v4(),
        }
    }

    /// Register a possible transition.
    ///
    /// Transitions are evaluated in registration order; no deduplication
    /// or validation is performed.
    pub fn add_transition(&mut self, transition: Transition<T>) {
        self.transitions.push(transition);
    }

    /// Try to perform a transition given a new state.
    ///
    /// Intended as a subscriber callback for some state publisher. Returns
    /// an error only when the screens factory fails, in which case the
    /// navigation stack is left as it was.
    pub fn on_state(&mut self, state: &T) -> Result<Navigation, RouterError> {
        let current = self.navigation_stack.peek().name().to_string();

        let Some(index) = self.find_valid_transition(&current, state) else {
            tracing::trace!(
                target: "wayfinder.router",
                session = %self.session_id,
                current = %current,
                "no transition matched state"
            );
            return Ok(Navigation::Unchanged);
        };

        let transition = &self.transitions[index];
        let destination = transition.destination().to_string();
        let direction = transition.direction();

        tracing::debug!(
            target: "wayfinder.router",
            session = %self.session_id,
            transition = index,
            source = %current,
            destination = %destination,
            direction = %direction,
            "transition fired"
        );

        match direction {
            TransitionDirection::Push => self.push(current, destination),
            TransitionDirection::Pop => Ok(self.pop(current, destination)),
        }
    }

    /// The currently displayed screen.
    pub fn current_screen(&self) -> &S {
        self.navigation_stack.peek()
    }

    /// Registered transitions in evaluation order.
    pub fn transitions(&self) -> &[Transition<T>] {
        &self.transitions
    }

    /// The stack of live screens, bottom to top.
    pub fn navigation_stack(&self) -> &NavigationStack<S> {
        &self.navigation_stack
    }

    /// Navigations performed so far in this session.
    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }

    /// Identifier attached to this router's log events.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub(crate) fn set_history_limit(&mut self, limit: usize) {
        self.history = NavigationHistory::with_limit(limit);
    }

    fn find_valid_transition(&self, current: &str, state: &T) -> Option<usize> {
        self.transitions
            .iter()
            .position(|t| t.applies_to(current, state))
    }

    fn push(&mut self, from: String, destination: String) -> Result<Navigation, RouterError> {
        let screen = self
            .screens_factory
            .create(&destination)
            .map_err(|err| {
                tracing::warn!(
                    target: "wayfinder.router",
                    session = %self.session_id,
                    source = %from,
                    destination = %destination,
                    error = %err,
                    "screens factory failed, navigation aborted"
                );
                RouterError::from(err)
            })?;

        let to = self.navigation_stack.push(screen).name().to_string();
        self.record(&from, &to, TransitionDirection::Push);

        Ok(Navigation::Pushed { from, to })
    }

    fn pop(&mut self, from: String, destination: String) -> Navigation {
        let depth = self.navigation_stack.len();

        let Some(screen) = self.navigation_stack.pop(&destination) else {
            tracing::debug!(
                target: "wayfinder.router",
                session = %self.session_id,
                source = %from,
                destination = %destination,
                "pop destination missing, navigation skipped"
            );
            return Navigation::DestinationMissing { destination };
        };

        let to = screen.name().to_string();
        let discarded = depth - self.navigation_stack.len();
        self.record(&from, &to, TransitionDirection::Pop);

        Navigation::Popped {
            from,
            to,
            discarded,
        }
    }

    fn record(&mut self, from: &str, to: &str, direction: TransitionDirection) {
        self.history = self
            .history
            .record(NavigationRecord::now(from, to, direction));
    }
}

impl<T, S: Screen> std::fmt::Debug for Router<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("session_id", &self.session_id)
            .field("navigation_stack", &self.navigation_stack)
            .field("transitions", &self.transitions)
            .finish_non_exhaustive()
    }
}

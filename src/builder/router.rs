//! Builder for constructing routers.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::builder::validation::validate_transitions;
use crate::core::{Presenter, Screen, ScreensFactory};
use crate::navigation::{Router, Transition};
use stillwater::validation::Validation;

/// Builder for constructing routers with a fluent API.
///
/// Unlike [`Router::add_transition`], [`RouterBuilder::build`] validates the
/// whole transition table and reports every issue at once.
pub struct RouterBuilder<T, S: Screen> {
    initial: Option<S>,
    presenter: Option<Box<dyn Presenter<S>>>,
    factory: Option<Box<dyn ScreensFactory<S>>>,
    transitions: Vec<Transition<T>>,
    history_limit: Option<usize>,
}

impl<T: 'static, S: Screen> RouterBuilder<T, S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            presenter: None,
            factory: None,
            transitions: Vec::new(),
            history_limit: None,
        }
    }

    /// Set the initial screen (required).
    pub fn initial(mut self, screen: S) -> Self {
        self.initial = Some(screen);
        self
    }

    /// Set the presenter (required).
    pub fn presenter(mut self, presenter: impl Presenter<S> + 'static) -> Self {
        self.presenter = Some(Box::new(presenter));
        self
    }

    /// Set the screens factory (required).
    pub fn factory(mut self, factory: impl ScreensFactory<S> + 'static) -> Self {
        self.factory = Some(Box::new(factory));
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<T>) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<T>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once, keeping their order.
    pub fn transitions(mut self, transitions: Vec<Transition<T>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Keep at most `limit` records in the router's navigation history.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Build the router.
    /// Returns an error if required fields are missing or the transition
    /// table has issues.
    pub fn build(self) -> Result<Router<T, S>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialScreen)?;
        let presenter = self.presenter.ok_or(BuildError::MissingPresenter)?;
        let factory = self.factory.ok_or(BuildError::MissingFactory)?;

        if let Validation::Failure(issues) = validate_transitions(&self.transitions) {
            return Err(BuildError::InvalidTransitions(
                issues.iter().cloned().collect(),
            ));
        }

        let mut router = Router::from_boxed(initial, presenter, factory);
        if let Some(limit) = self.history_limit {
            router.set_history_limit(limit);
        }
        for transition in self.transitions {
            router.add_transition(transition);
        }

        tracing::debug!(
            target: "wayfinder.router",
            session = %router.session_id(),
            initial = router.current_screen().name(),
            transitions = router.transitions().len(),
            "router built"
        );

        Ok(router)
    }
}

impl<T: 'static, S: Screen> Default for RouterBuilder<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::validation::TransitionIssue;
    use crate::core::FactoryError;

    struct Page(String);

    impl Screen for Page {
        fn name(&self) -> &str {
            &self.0
        }
        fn will_present(&mut self) {}
        fn did_present(&mut self) {}
        fn will_disappear(&mut self) {}
    }

    struct AppState {
        selected: Option<u32>,
    }

    fn factory(name: &str) -> Result<Page, FactoryError> {
        Ok(Page(name.to_string()))
    }

    fn complete() -> RouterBuilder<AppState, Page> {
        RouterBuilder::new()
            .initial(Page("home".to_string()))
            .presenter(|_: &Page| {})
            .factory(factory)
    }

    #[test]
    fn builder_validates_initial_screen() {
        let result = RouterBuilder::<AppState, Page>::new()
            .presenter(|_: &Page| {})
            .factory(factory)
            .build();

        assert!(matches!(result, Err(BuildError::MissingInitialScreen)));
    }

    #[test]
    fn builder_validates_presenter() {
        let result = RouterBuilder::<AppState, Page>::new()
            .initial(Page("home".to_string()))
            .factory(factory)
            .build();

        assert!(matches!(result, Err(BuildError::MissingPresenter)));
    }

    #[test]
    fn builder_validates_factory() {
        let result = RouterBuilder::<AppState, Page>::new()
            .initial(Page("home".to_string()))
            .presenter(|_: &Page| {})
            .build();

        assert!(matches!(result, Err(BuildError::MissingFactory)));
    }

    #[test]
    fn router_without_transitions_is_valid() {
        let router = complete().build().unwrap();
        assert_eq!(router.current_screen().name(), "home");
        assert!(router.transitions().is_empty());
    }

    #[test]
    fn fluent_api_builds_router() {
        let mut router = complete()
            .transition(
                TransitionBuilder::new()
                    .from("home")
                    .to("detail")
                    .push()
                    .when(|s: &AppState| s.selected.is_some()),
            )
            .unwrap()
            .add_transition(Transition::pop("detail", "home", |s: &AppState| {
                s.selected.is_none()
            }))
            .build()
            .unwrap();

        assert_eq!(router.transitions().len(), 2);

        router.on_state(&AppState { selected: Some(3) }).unwrap();
        assert_eq!(router.current_screen().name(), "detail");

        router.on_state(&AppState { selected: None }).unwrap();
        assert_eq!(router.current_screen().name(), "home");
    }

    #[test]
    fn transition_builder_errors_surface_immediately() {
        let result = complete().transition(TransitionBuilder::new().from("home").push());
        assert!(matches!(result, Err(BuildError::MissingDestination)));
    }

    #[test]
    fn build_reports_all_transition_issues() {
        let result = complete()
            .transitions(vec![
                Transition::push("", "detail", |_: &AppState| true),
                Transition::pop("detail", "", |_: &AppState| true),
            ])
            .build();

        match result {
            Err(BuildError::InvalidTransitions(issues)) => {
                assert_eq!(
                    issues,
                    vec![
                        TransitionIssue::EmptySource { index: 0 },
                        TransitionIssue::EmptyDestination { index: 1 },
                    ]
                );
            }
            other => panic!("Expected InvalidTransitions, got {:?}", other.err()),
        }
    }

    #[test]
    fn build_rejects_shadowed_transitions() {
        let result = complete()
            .transition(TransitionBuilder::new().from("home").to("detail").push())
            .unwrap()
            .transition(
                TransitionBuilder::new()
                    .from("home")
                    .to("settings")
                    .push()
                    .when(|s: &AppState| s.selected.is_none()),
            )
            .unwrap()
            .build();

        assert!(matches!(
            result,
            Err(BuildError::InvalidTransitions(ref issues))
                if issues == &[TransitionIssue::Shadowed {
                    index: 1,
                    screen: "home".to_string(),
                    by: 0,
                }]
        ));
    }

    #[test]
    fn history_limit_is_forwarded() {
        let router = complete().history_limit(5).build().unwrap();
        assert_eq!(router.history().limit(), Some(5));
    }
}

//! Build errors for router and transition builders.

use crate::builder::validation::TransitionIssue;
use thiserror::Error;

/// Errors that can occur when building routers and transitions.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial screen not specified. Call .initial(screen) before .build()")]
    MissingInitialScreen,

    #[error("Presenter not specified. Call .presenter(presenter) before .build()")]
    MissingPresenter,

    #[error("Screens factory not specified. Call .factory(factory) before .build()")]
    MissingFactory,

    #[error("Transition source screen not specified. Call .from(name)")]
    MissingSource,

    #[error("Transition destination screen not specified. Call .to(name)")]
    MissingDestination,

    #[error("Transition direction not specified. Call .push() or .pop()")]
    MissingDirection,

    #[error("Transition table has {} issue(s): {}", .0.len(), describe(.0))]
    InvalidTransitions(Vec<TransitionIssue>),
}

fn describe(issues: &[TransitionIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

//! Validation of a router's transition table.
//!
//! Uses Stillwater's `Validation` to accumulate ALL issues in one pass
//! instead of stopping at the first bad transition.

use crate::navigation::Transition;
use std::collections::HashMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Problems detected in a transition table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransitionIssue {
    #[error("Transition #{index} has an empty source screen name")]
    EmptySource { index: usize },

    #[error("Transition #{index} has an empty destination screen name")]
    EmptyDestination { index: usize },

    /// An earlier unconditional transition from the same screen always wins.
    #[error(
        "Transition #{index} from '{screen}' can never fire: transition #{by} from the same screen is unconditional"
    )]
    Shadowed {
        index: usize,
        screen: String,
        by: usize,
    },
}

/// Check every transition, accumulating all issues.
///
/// Returns `Validation::Success(())` for a clean table and
/// `Validation::Failure` with every issue otherwise, in table order.
pub fn validate_transitions<T>(
    transitions: &[Transition<T>],
) -> Validation<(), NonEmptyVec<TransitionIssue>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<TransitionIssue>>> = Vec::new();
    let mut unconditional: HashMap<&str, usize> = HashMap::new();

    for (index, transition) in transitions.iter().enumerate() {
        checks.push(require_name(
            transition.source(),
            TransitionIssue::EmptySource { index },
        ));
        checks.push(require_name(
            transition.destination(),
            TransitionIssue::EmptyDestination { index },
        ));

        match unconditional.get(transition.source()) {
            Some(&by) => checks.push(Validation::fail(TransitionIssue::Shadowed {
                index,
                screen: transition.source().to_string(),
                by,
            })),
            None => {
                if transition.condition().is_unconditional() {
                    unconditional.insert(transition.source(), index);
                }
            }
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

fn require_name(
    name: &str,
    issue: TransitionIssue,
) -> Validation<(), NonEmptyVec<TransitionIssue>> {
    if name.is_empty() {
        Validation::fail(issue)
    } else {
        Validation::success(())
    }
}

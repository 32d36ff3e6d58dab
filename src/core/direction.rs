//! How a transition moves along the navigation stack.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The direction of a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionDirection {
    /// Push the destination screen on top of the navigation stack.
    Push,

    /// Pop every screen from the navigation stack that is on top of the destination.
    Pop,
}

impl fmt::Display for TransitionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Push => f.write_str("push"),
            Self::Pop => f.write_str("pop"),
        }
    }
}

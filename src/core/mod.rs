//! Core navigation types.
//!
//! This module contains the capability interfaces the navigation core calls
//! into, plus the plain value types shared by the stack and the router:
//! - `Screen`, `Presenter` and `ScreensFactory` capabilities
//! - `Condition` predicates and `TransitionDirection`
//! - Immutable navigation history

mod condition;
mod direction;
mod factory;
mod history;
mod presenter;
mod screen;

pub use condition::Condition;
pub use direction::TransitionDirection;
pub use factory::{FactoryError, ScreensFactory};
pub use history::{NavigationHistory, NavigationRecord};
pub use presenter::Presenter;
pub use screen::Screen;

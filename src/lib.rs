//! Wayfinder: state-driven screen navigation
//!
//! Wayfinder models an application's screens as nodes of an implicit graph
//! and moves between them when the application's state changes. A
//! [`Router`] holds guarded [`Transition`]s between screen names; every
//! state notification fires at most one of them, pushing a freshly created
//! screen or popping back to one already on the [`NavigationStack`].
//!
//! # Core Concepts
//!
//! - **Screen**: named unit of content with lifecycle hooks (`Screen` trait)
//! - **Presenter**: renders whichever screen becomes current
//! - **Screens factory**: creates screens by name when a push fires
//! - **Transition**: guarded edge; the first match in registration order wins
//!
//! # Example
//!
//! ```rust
//! use wayfinder::core::{FactoryError, Screen};
//! use wayfinder::{RouterBuilder, Transition, TransitionBuilder};
//!
//! struct Page(String);
//!
//! impl Screen for Page {
//!     fn name(&self) -> &str { &self.0 }
//!     fn will_present(&mut self) {}
//!     fn did_present(&mut self) {}
//!     fn will_disappear(&mut self) {}
//! }
//!
//! struct AppState {
//!     selected: Option<u32>,
//!     cancelled: bool,
//! }
//!
//! let mut router = RouterBuilder::new()
//!     .initial(Page("home".to_string()))
//!     .presenter(|page: &Page| println!("showing {}", page.name()))
//!     .factory(|name: &str| match name {
//!         "detail" | "edit" => Ok(Page(name.to_string())),
//!         other => Err(FactoryError::unknown(other)),
//!     })
//!     .transition(
//!         TransitionBuilder::new()
//!             .from("home")
//!             .to("detail")
//!             .push()
//!             .when(|s: &AppState| s.selected.is_some()),
//!     )?
//!     .add_transition(Transition::push("detail", "edit", |s: &AppState| !s.cancelled))
//!     .add_transition(Transition::pop("edit", "home", |s: &AppState| s.cancelled))
//!     .build()?;
//!
//! router.on_state(&AppState { selected: Some(5), cancelled: false })?;
//! router.on_state(&AppState { selected: Some(5), cancelled: false })?;
//! assert_eq!(router.navigation_stack().len(), 3);
//!
//! router.on_state(&AppState { selected: None, cancelled: true })?;
//! assert_eq!(router.current_screen().name(), "home");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod core;
pub mod navigation;

// Re-export commonly used types
pub use builder::{BuildError, RouterBuilder, TransitionBuilder, TransitionIssue};
pub use self::core::{
    Condition, FactoryError, NavigationHistory, NavigationRecord, Presenter, Screen,
    ScreensFactory, TransitionDirection,
};
pub use navigation::{Navigation, NavigationStack, Router, RouterError, Transition};

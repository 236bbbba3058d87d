//! # Application State
//!
//! Core business state for Numera. Domain data only; presentation state
//! (input buffers, scroll offsets, list selection) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── nav: NavigationState              // page + selected topic
//! ├── operation: Operation              // GCD or LCM toggle
//! ├── result: Option<Result<Outcome, EngineError>>  // last execute result
//! ├── status_message: String            // title bar text
//! ├── limits: Limits                    // input bounds
//! └── default_inputs: DefaultInputs     // pre-filled input text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::{DefaultInputs, ResolvedConfig};
use crate::core::engine::gcd_lcm::Operation;
use crate::core::engine::{EngineError, Limits, Outcome};
use crate::core::nav::{self, NavAction, NavigationState};

pub struct App {
    pub nav: NavigationState,
    pub operation: Operation,
    pub result: Option<Result<Outcome, EngineError>>,
    pub status_message: String,
    pub limits: Limits,
    pub default_inputs: DefaultInputs,
}

impl App {
    pub fn new() -> Self {
        Self::from_config(&ResolvedConfig::default())
    }

    /// Build the app from resolved config. A configured start topic opens
    /// its definition page straight away.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let nav = match config.start_topic {
            Some(topic) => nav::transition(NavigationState::Menu, NavAction::SelectTopic(topic)),
            None => NavigationState::Menu,
        };
        Self {
            nav,
            operation: Operation::default(),
            result: None,
            status_message: String::from("Pick a topic"),
            limits: config.limits,
            default_inputs: config.default_inputs.clone(),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

//! # Core Application Logic
//!
//! This module contains Numera's arithmetic and navigation logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Topics (content)     │
//!                    │  • Engines (arithmetic) │
//!                    │  • Navigation (pages)   │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │    CLI     │
//!            │  Adapter   │            │  one-shot  │
//!            │ (ratatui)  │            │  (clap)    │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`topic`]: `TopicId` and the static content attached to each topic
//! - [`engine`]: the five computations, input parsing, and dispatch
//! - [`nav`]: the page state machine
//! - [`state`]: the `App` struct, all application state in one place
//! - [`action`]: the `Action` enum and `update()` reducer
//! - [`config`]: config file, env, and CLI resolution (the one module that reads files)

pub mod action;
pub mod config;
pub mod engine;
pub mod nav;
pub mod state;
pub mod topic;

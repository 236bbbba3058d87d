//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `TitleBar`: breadcrumb and status message
//! - `ResultPanel`: outcome of the last run, or the error
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `TopicMenu`: the home page list
//! - `Document`: scrollable definition or source listing
//! - `InputBox`: the execute page entry field
//!
//! Stateful components keep a `...State` struct in `TuiState` and are
//! wrapped in a transient struct each frame that borrows it.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs
//! ├── topic_menu.rs
//! ├── document.rs      (scrollable text)
//! ├── result_panel.rs  (outcome → styled text)
//! └── input_box/
//! ```

use ratatui::style::Color;

/// Border and highlight colour shared by every component.
pub(crate) const ACCENT: Color = Color::Rgb(0x86, 0x74, 0xC9);

mod title_bar;
pub use title_bar::TitleBar;

pub mod document;
pub mod input_box;
pub mod result_panel;
pub mod topic_menu;
pub use document::{Document, DocumentState};
pub use input_box::{InputBox, InputEvent};
pub use result_panel::ResultPanel;
pub use topic_menu::{MenuEvent, TopicMenu, TopicMenuState};

//! # Actions
//!
//! Everything that can happen in Numera becomes an `Action`.
//! User picks a topic? That's `Action::Navigate(NavAction::SelectTopic(t))`.
//! User presses Enter on the execute page? That's `Action::Submit(text)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` telling the adapter what to do next.
//! No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::engine;
use crate::core::nav::{self, NavAction, Page};
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(NavAction),
    /// Raw input text from the execute page.
    Submit(String),
    ToggleOperation,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Page changed; the adapter should reset its per-page state.
    PageChanged,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Navigate(nav_action) => {
            let next = nav::transition(app.nav, nav_action);
            if next == app.nav {
                return Effect::None;
            }
            // Results belong to one visit of the execute page.
            if app.nav.page() == Page::Execute {
                app.result = None;
            }
            app.nav = next;
            app.status_message = match next.selected_topic() {
                Some(topic) => topic.label().to_string(),
                None => String::from("Pick a topic"),
            };
            Effect::PageChanged
        }
        Action::Submit(raw) => {
            let Some(topic) = app.nav.selected_topic() else {
                return Effect::None;
            };
            if app.nav.page() != Page::Execute {
                return Effect::None;
            }
            let result = engine::evaluate(topic, &raw, app.operation, &app.limits);
            match &result {
                Ok(_) => {
                    info!("{:?} evaluated {:?}", topic, raw.trim());
                    app.status_message = String::from("Done");
                }
                Err(e) => {
                    info!("{:?} rejected {:?}: {}", topic, raw.trim(), e);
                    app.status_message = String::from("Input rejected");
                }
            }
            app.result = Some(result);
            Effect::None
        }
        Action::ToggleOperation => {
            app.operation = app.operation.toggle();
            app.status_message = format!("Operation: {}", app.operation.label());
            Effect::None
        }
        Action::Quit => {
            info!("Quit requested");
            Effect::Quit
        }
    }
}

//! # TitleBar Component
//!
//! Top status bar: a breadcrumb of where the user is, plus the status
//! message from `App`.
//!
//! ## Conditional Formatting
//!
//! 1. **On a topic page**: `"Numera | Primes | Execute | Done"`
//! 2. **On the menu**: `"Numera | Pick a topic"`
//! 3. **Empty status**: the trailing `| status` is dropped
//!
//! Stateless: every field is a prop, so the bar is trivial to test.

use crate::core::nav::{NavigationState, Page};
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    pub nav: NavigationState,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(nav: NavigationState, status_message: String) -> Self {
        Self {
            nav,
            status_message,
        }
    }

    fn crumbs(&self) -> Vec<String> {
        let mut crumbs = vec![String::from("Numera")];
        if let Some(topic) = self.nav.selected_topic() {
            crumbs.push(topic.label().to_string());
            crumbs.push(self.nav.page().label().to_string());
        }
        // The page label already says it; skip a status that repeats the topic.
        let repeats_topic = self
            .nav
            .selected_topic()
            .is_some_and(|t| t.label() == self.status_message);
        if !self.status_message.is_empty() && !repeats_topic {
            crumbs.push(self.status_message.clone());
        }
        crumbs
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let accent = Style::default()
            .fg(super::ACCENT)
            .add_modifier(Modifier::BOLD);
        let mut spans = Vec::new();
        for (i, crumb) in self.crumbs().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            let is_page = i == 2 && self.nav.page() != Page::Menu;
            spans.push(if i == 0 || is_page {
                Span::styled(crumb, accent)
            } else {
                Span::raw(crumb)
            });
        }
        frame.render_widget(Line::from(spans), area);
    }
}

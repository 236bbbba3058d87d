//! # Topic Menu Component
//!
//! The home page: a centered list of the five topics.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `TopicMenuState` lives in `TuiState`
//! - `TopicMenu` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Padding};

use crate::core::topic::TopicId;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Persistent state for the menu.
pub struct TopicMenuState {
    pub selected: usize,
    pub list_state: ListState,
}

impl Default for TopicMenuState {
    fn default() -> Self {
        Self::new()
    }
}

impl TopicMenuState {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected: 0,
            list_state,
        }
    }

    pub fn selected_topic(&self) -> Option<TopicId> {
        TopicId::from_index(self.selected)
    }

    pub fn select(&mut self, index: usize) {
        self.selected = index.min(TopicId::ALL.len() - 1);
        self.list_state.select(Some(self.selected));
    }
}

/// Events emitted by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Open(TopicId),
    Quit,
}

impl EventHandler for TopicMenuState {
    type Event = MenuEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<MenuEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.select(self.selected.saturating_sub(1));
                None
            }
            TuiEvent::CursorDown => {
                self.select(self.selected + 1);
                None
            }
            TuiEvent::Submit => self.selected_topic().map(MenuEvent::Open),
            // Digits jump straight to a topic
            TuiEvent::InputChar(c @ '1'..='9') => {
                let index = c.to_digit(10).map(|d| d as usize - 1)?;
                let topic = TopicId::from_index(index)?;
                self.select(index);
                Some(MenuEvent::Open(topic))
            }
            TuiEvent::InputChar('q') | TuiEvent::Escape => Some(MenuEvent::Quit),
            _ => None,
        }
    }
}

/// Transient render wrapper for the menu.
pub struct TopicMenu<'a> {
    state: &'a mut TopicMenuState,
}

impl<'a> TopicMenu<'a> {
    pub fn new(state: &'a mut TopicMenuState) -> Self {
        Self { state }
    }
}

impl Component for TopicMenu<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let height = TopicId::ALL.len() as u16 + 4; // borders + padding
        let [_, column, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(44),
            Constraint::Fill(1),
        ])
        .areas(area);
        let [_, menu_area, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .areas(column);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(super::ACCENT))
            .title(" NUMBER THEORY PROGRAMS ")
            .title_alignment(Alignment::Center)
            .padding(Padding::uniform(1));

        let items: Vec<ListItem> = TopicId::ALL
            .iter()
            .enumerate()
            .map(|(i, topic)| {
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .bg(super::ACCENT)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!(" {}  ", i + 1), style.add_modifier(Modifier::DIM)),
                    Span::styled(topic.title(), style),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, menu_area, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_arrow_keys_clamp_to_list() {
        let mut state = TopicMenuState::new();
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected, 0);
        for _ in 0..10 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(state.selected, TopicId::ALL.len() - 1);
        assert_eq!(state.selected_topic(), Some(TopicId::GcdLcm));
    }

    #[test]
    fn test_enter_opens_selected_topic() {
        let mut state = TopicMenuState::new();
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(MenuEvent::Open(TopicId::FundamentalTheorem))
        );
    }

    #[test]
    fn test_digit_shortcuts() {
        let mut state = TopicMenuState::new();
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('3')),
            Some(MenuEvent::Open(TopicId::Primes))
        );
        assert_eq!(state.selected, 2);
        assert_eq!(state.handle_event(&TuiEvent::InputChar('9')), None);
    }

    #[test]
    fn test_quit_keys() {
        let mut state = TopicMenuState::new();
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('q')),
            Some(MenuEvent::Quit)
        );
        assert_eq!(state.handle_event(&TuiEvent::Escape), Some(MenuEvent::Quit));
    }

    #[test]
    fn test_render_lists_every_topic() {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = TopicMenuState::new();
        terminal
            .draw(|f| {
                let area = f.area();
                TopicMenu::new(&mut state).render(f, area);
            })
            .unwrap();
        let text = buffer_text(&terminal);
        for topic in TopicId::ALL {
            assert!(text.contains(topic.title()), "missing {}", topic.title());
        }
    }
}

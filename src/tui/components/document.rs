//! # Document Component
//!
//! A bordered, vertically scrollable view over pre-rendered `Text`. Used for
//! topic definitions, source listings and the result panel.
//!
//! `Document` is transient (created each frame) and wraps
//! `&'a mut DocumentState`, which holds the scroll offset between frames.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::Style;
use ratatui::text::Text;
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Scroll state for a document. Must be persisted in the parent TuiState.
#[derive(Default)]
pub struct DocumentState {
    pub scroll_state: ScrollViewState,
    /// Rendered content height from the last frame.
    pub content_height: u16,
    /// Last known viewport height (for scroll clamping between frames).
    pub viewport_height: u16,
}

impl DocumentState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the top, e.g. when the page changes.
    pub fn reset(&mut self) {
        self.scroll_state.scroll_to_top();
    }

    pub fn offset(&self) -> u16 {
        self.scroll_state.offset().y
    }

    /// Keep the offset inside the content so Up responds immediately after
    /// overscrolling with PageDown.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

impl EventHandler for DocumentState {
    /// Emitted when the offset moved.
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        let before = self.offset();
        match event {
            TuiEvent::CursorUp => self.scroll_state.scroll_up(),
            TuiEvent::CursorDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            TuiEvent::CursorHome => self.scroll_state.scroll_to_top(),
            _ => return None,
        }
        self.clamp_scroll();
        (self.offset() != before).then_some(())
    }
}

pub struct Document<'a> {
    state: &'a mut DocumentState,
    title: String,
    text: Text<'a>,
    border_style: Style,
}

impl<'a> Document<'a> {
    pub fn new(state: &'a mut DocumentState, title: impl Into<String>, text: Text<'a>) -> Self {
        Self {
            state,
            title: title.into(),
            text,
            border_style: Style::default().fg(super::ACCENT),
        }
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }
}

impl Component for Document<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.border_style)
            .title(format!(" {} ", self.title));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // One column is reserved for the scrollbar.
        let content_width = inner.width.saturating_sub(1);
        let paragraph = Paragraph::new(self.text.clone()).wrap(Wrap { trim: false });
        let height = u16::try_from(paragraph.line_count(content_width)).unwrap_or(u16::MAX);

        self.state.content_height = height;
        self.state.viewport_height = inner.height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, height));
        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}

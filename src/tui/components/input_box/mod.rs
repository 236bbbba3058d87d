//! # InputBox Component
//!
//! Single-line entry for the execute page.
//!
//! ## Responsibilities
//!
//! - Capture digits, spaces and commas (anything printable, really; the
//!   engine parser decides what is valid)
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Emit `Submit` on Enter without clearing, so the user can tweak and rerun
//! - Show the prompt and, for GCD/LCM, the active operation in the title

mod editing;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::engine::gcd_lcm::Operation;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use editing::{
    BORDER_OFFSET, display_width, next_char_boundary, prev_char_boundary, visible_start,
};

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the text (Enter pressed)
    Submit(String),
    /// User asked to flip GCD/LCM (Tab)
    ToggleOperation,
    ContentChanged,
}

/// Text input component.
///
/// # Props
///
/// - `prompt`: Title shown on the border
/// - `operation`: Shown in the title when set (GCD/LCM page only)
///
/// # State
///
/// - `buffer`: Current text
/// - `cursor`: Byte offset into `buffer`
pub struct InputBox {
    pub buffer: String,
    pub prompt: String,
    pub operation: Option<Operation>,
    cursor: usize,
}

impl InputBox {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            buffer: String::new(),
            prompt: prompt.into(),
            operation: None,
            cursor: 0,
        }
    }

    /// Replace the buffer, putting the cursor at the end.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor = self.buffer.len();
    }

    fn title(&self) -> String {
        match self.operation {
            Some(op) => format!(" {} [{}] ", self.prompt, op.label()),
            None => format!(" {} ", self.prompt),
        }
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2 * BORDER_OFFSET);
        let start = visible_start(&self.buffer, self.cursor, inner_width);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(super::ACCENT))
            .title(self.title());
        let input = Paragraph::new(&self.buffer[start..])
            .block(block)
            .style(Style::default().fg(Color::Green));
        frame.render_widget(input, area);

        let cursor_x = area.x + BORDER_OFFSET + display_width(&self.buffer[start..], self.cursor - start);
        frame.set_cursor_position((cursor_x, area.y + BORDER_OFFSET));
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single line: newlines become separators
                let flat = text.replace(['\r', '\n'], " ");
                self.buffer.insert_str(self.cursor, &flat);
                self.cursor += flat.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => (self.cursor > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                InputEvent::ContentChanged
            }),
            TuiEvent::Delete => (self.cursor < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                InputEvent::ContentChanged
            }),
            TuiEvent::Submit => Some(InputEvent::Submit(self.buffer.clone())),
            TuiEvent::Tab => self.operation.map(|_| InputEvent::ToggleOperation),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_input_box_new() {
        let input = InputBox::new("Enter a number");
        assert!(input.buffer.is_empty());
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_handle_input() {
        let mut input = InputBox::new("n");

        assert_eq!(
            input.handle_event(&TuiEvent::InputChar('4')),
            Some(InputEvent::ContentChanged)
        );
        input.handle_event(&TuiEvent::InputChar('2'));
        assert_eq!(input.buffer, "42");

        input.handle_event(&TuiEvent::Backspace);
        assert_eq!(input.buffer, "4");
    }

    #[test]
    fn test_cursor_editing_in_the_middle() {
        let mut input = InputBox::new("n");
        input.set_text("1218");
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::InputChar(' '));
        assert_eq!(input.buffer, "12 18");

        input.handle_event(&TuiEvent::CursorHome);
        input.handle_event(&TuiEvent::Delete);
        assert_eq!(input.buffer, "2 18");
        assert_eq!(input.handle_event(&TuiEvent::CursorLeft), None);
    }

    #[test]
    fn test_submit_keeps_buffer() {
        let mut input = InputBox::new("n");
        input.set_text("24");
        assert_eq!(
            input.handle_event(&TuiEvent::Submit),
            Some(InputEvent::Submit("24".into()))
        );
        assert_eq!(input.buffer, "24");
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut input = InputBox::new("n");
        input.handle_event(&TuiEvent::Paste("12\n18\r\n30".into()));
        assert_eq!(input.buffer, "12 18  30");
        assert_eq!(input.cursor, input.buffer.len());
    }

    #[test]
    fn test_tab_only_toggles_with_operation() {
        let mut input = InputBox::new("n");
        assert_eq!(input.handle_event(&TuiEvent::Tab), None);
        input.operation = Some(Operation::Gcd);
        assert_eq!(
            input.handle_event(&TuiEvent::Tab),
            Some(InputEvent::ToggleOperation)
        );
    }

    #[test]
    fn test_render_shows_prompt_and_operation() {
        let backend = TestBackend::new(50, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut input = InputBox::new("Numbers");
        input.operation = Some(Operation::Lcm);
        input.set_text("12 18");

        terminal
            .draw(|f| {
                let area = f.area();
                input.render(f, area);
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Numbers [LCM]"));
        assert!(text.contains("12 18"));
    }
}

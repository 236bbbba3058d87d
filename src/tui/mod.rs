//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms in `poll` and only
//! redraws after an event (including a terminal resize).
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call.

mod component;
mod components;
mod event;
pub mod markdown;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::nav::{NavAction, NavigationState, Page};
use crate::core::state::App;
use crate::core::topic::TopicId;
use crate::tui::component::EventHandler;
use crate::tui::components::{DocumentState, InputBox, InputEvent, MenuEvent, TopicMenuState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub menu: TopicMenuState,
    /// Scroll for the definition and code pages.
    pub document: DocumentState,
    pub input_box: InputBox,
    /// Scroll for the execute page's result panel.
    pub result: DocumentState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            menu: TopicMenuState::new(),
            document: DocumentState::new(),
            input_box: InputBox::new(""),
            result: DocumentState::new(),
        }
    }

    /// Reset per-page state after navigation. Entering the execute page
    /// pre-fills the input with the configured default for the topic.
    fn on_page_changed(&mut self, app: &App) {
        self.document.reset();
        self.result.reset();
        if let NavigationState::Execute(topic) = app.nav {
            self.input_box.prompt = topic.prompt().to_string();
            self.input_box.set_text(app.default_inputs.for_topic(topic));
            self.input_box.operation = (topic == TopicId::GcdLcm).then_some(app.operation);
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Escape disambiguation makes Esc register without the usual delay.
        // Terminals without the protocol ignore the sequence.
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableBracketedPaste,
            Hide
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();
    if let Some(topic) = app.nav.selected_topic() {
        tui.menu.select(topic.index());
    }

    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new();
    if let Err(e) = &terminal_mode_guard {
        info!("Terminal modes unavailable: {}", e);
    }

    let result = event_loop(&mut terminal, &mut app, &mut tui);

    drop(terminal_mode_guard);
    ratatui::restore();
    info!("Terminal restored");
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(500));
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(app, tui, event) {
                return Ok(());
            }
        }
    }
}

/// Dispatch one terminal event. Returns `true` when the app should quit.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> bool {
    // Resize just needs a redraw
    if matches!(event, TuiEvent::Resize) {
        return false;
    }

    // Ctrl+C always quits regardless of page
    if matches!(event, TuiEvent::ForceQuit) {
        return update(app, Action::Quit) == Effect::Quit;
    }

    let action = match app.nav.page() {
        Page::Menu => match tui.menu.handle_event(&event) {
            Some(MenuEvent::Open(topic)) => Some(Action::Navigate(NavAction::SelectTopic(topic))),
            Some(MenuEvent::Quit) => Some(Action::Quit),
            None => None,
        },
        Page::Definition => match event {
            TuiEvent::InputChar('e') => Some(Action::Navigate(NavAction::Execute)),
            TuiEvent::InputChar('c') => Some(Action::Navigate(NavAction::ViewCode)),
            TuiEvent::InputChar('h') | TuiEvent::Escape => Some(Action::Navigate(NavAction::Home)),
            other => {
                tui.document.handle_event(&other);
                None
            }
        },
        Page::Code => match event {
            TuiEvent::InputChar('h') | TuiEvent::Escape => Some(Action::Navigate(NavAction::Home)),
            other => {
                tui.document.handle_event(&other);
                None
            }
        },
        Page::Execute => match event {
            TuiEvent::Escape => Some(Action::Navigate(NavAction::Home)),
            TuiEvent::CursorUp
            | TuiEvent::CursorDown
            | TuiEvent::ScrollPageUp
            | TuiEvent::ScrollPageDown => {
                tui.result.handle_event(&event);
                None
            }
            other => match tui.input_box.handle_event(&other) {
                Some(InputEvent::Submit(text)) => Some(Action::Submit(text)),
                Some(InputEvent::ToggleOperation) => Some(Action::ToggleOperation),
                Some(InputEvent::ContentChanged) | None => None,
            },
        },
    };

    let Some(action) = action else {
        return false;
    };
    let submitted = matches!(action, Action::Submit(_));
    let effect = update(app, action);
    match effect {
        Effect::Quit => return true,
        Effect::PageChanged => tui.on_page_changed(app),
        Effect::None => {}
    }

    // Keep the input box title in step with the toggle
    if tui.input_box.operation.is_some() {
        tui.input_box.operation = Some(app.operation);
    }
    if submitted {
        tui.result.reset();
    }
    debug!("Now on {:?}", app.nav);
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::Outcome;

    fn press(app: &mut App, tui: &mut TuiState, events: &[TuiEvent]) -> bool {
        events
            .iter()
            .any(|e| handle_event(app, tui, e.clone()))
    }

    #[test]
    fn test_menu_to_execute_prefills_default_input() {
        let mut app = App::new();
        let mut tui = TuiState::new();
        press(
            &mut app,
            &mut tui,
            &[TuiEvent::InputChar('3'), TuiEvent::InputChar('e')],
        );
        assert_eq!(app.nav, NavigationState::Execute(TopicId::Primes));
        assert_eq!(tui.input_box.buffer, "50");
        assert_eq!(tui.input_box.prompt, TopicId::Primes.prompt());
        assert_eq!(tui.input_box.operation, None);
    }

    #[test]
    fn test_submit_runs_engine() {
        let mut app = App::new();
        let mut tui = TuiState::new();
        press(
            &mut app,
            &mut tui,
            &[TuiEvent::InputChar('4'), TuiEvent::InputChar('e'), TuiEvent::Submit],
        );
        assert_eq!(
            app.result,
            Some(Ok(Outcome::Factorial { n: 5, value: 120 }))
        );
    }

    #[test]
    fn test_tab_toggles_operation_on_gcd_lcm_page() {
        let mut app = App::new();
        let mut tui = TuiState::new();
        press(
            &mut app,
            &mut tui,
            &[TuiEvent::InputChar('5'), TuiEvent::InputChar('e')],
        );
        assert_eq!(tui.input_box.buffer, "12 18");
        press(&mut app, &mut tui, &[TuiEvent::Tab, TuiEvent::Submit]);
        assert_eq!(tui.input_box.operation, Some(app.operation));
        let shown = app.result.as_ref().and_then(|r| r.as_ref().ok()).map(|o| o.to_string());
        assert_eq!(shown.as_deref(), Some("LCM(12, 18) = 36"));
    }

    #[test]
    fn test_typing_e_on_execute_page_is_input_not_navigation() {
        let mut app = App::new();
        let mut tui = TuiState::new();
        press(
            &mut app,
            &mut tui,
            &[TuiEvent::InputChar('1'), TuiEvent::InputChar('e'), TuiEvent::InputChar('e')],
        );
        assert_eq!(app.nav.page(), Page::Execute);
        assert_eq!(tui.input_box.buffer, "12e");
    }

    #[test]
    fn test_escape_returns_home_and_clears_result() {
        let mut app = App::new();
        let mut tui = TuiState::new();
        press(
            &mut app,
            &mut tui,
            &[TuiEvent::InputChar('2'), TuiEvent::InputChar('e'), TuiEvent::Submit, TuiEvent::Escape],
        );
        assert_eq!(app.nav, NavigationState::Menu);
        assert!(app.result.is_none());
    }

    #[test]
    fn test_code_page_and_back() {
        let mut app = App::new();
        let mut tui = TuiState::new();
        press(
            &mut app,
            &mut tui,
            &[TuiEvent::Submit, TuiEvent::InputChar('c')],
        );
        assert_eq!(app.nav, NavigationState::Code(TopicId::Divisibility));
        press(&mut app, &mut tui, &[TuiEvent::InputChar('h')]);
        assert_eq!(app.nav, NavigationState::Menu);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new();
        let mut tui = TuiState::new();
        assert!(!handle_event(&mut app, &mut tui, TuiEvent::InputChar('x')));
        assert!(handle_event(&mut app, &mut tui, TuiEvent::InputChar('q')));

        // 'q' is just a letter on a topic page, Ctrl+C still quits
        press(&mut app, &mut tui, &[TuiEvent::InputChar('1')]);
        assert!(!handle_event(&mut app, &mut tui, TuiEvent::InputChar('q')));
        assert!(handle_event(&mut app, &mut tui, TuiEvent::ForceQuit));
    }
}

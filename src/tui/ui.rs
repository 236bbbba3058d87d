//! Frame layout: title bar, the current page, and a key-hint footer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::core::nav::{NavigationState, Page};
use crate::core::state::App;
use crate::core::topic::TopicId;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Document, ResultPanel, TitleBar, TopicMenu};
use crate::tui::markdown;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, footer_area] = layout.areas(frame.area());

    TitleBar::new(app.nav, app.status_message.clone()).render(frame, title_area);

    match app.nav {
        NavigationState::Menu => TopicMenu::new(&mut tui.menu).render(frame, main_area),
        NavigationState::Definition(topic) => {
            let text = markdown::render(topic.definition(), Color::White);
            Document::new(&mut tui.document, topic.title(), text).render(frame, main_area);
        }
        NavigationState::Code(topic) => {
            let text = markdown::render_listing(topic.source_listing(), "rust");
            let title = format!("{} source", topic.label());
            Document::new(&mut tui.document, title, text).render(frame, main_area);
        }
        NavigationState::Execute(_) => {
            let [input_area, result_area] = Layout::vertical([Length(3), Min(0)]).areas(main_area);
            tui.input_box.render(frame, input_area);
            ResultPanel::new(&mut tui.result, app.result.as_ref()).render(frame, result_area);
        }
    }

    frame.render_widget(footer(app.nav), footer_area);
}

fn footer(nav: NavigationState) -> Line<'static> {
    let hints: &[(&str, &str)] = match nav.page() {
        Page::Menu => &[("↑/↓", "select"), ("Enter", "open"), ("1-5", "jump"), ("q", "quit")],
        Page::Definition => &[("e", "execute"), ("c", "code"), ("↑/↓", "scroll"), ("h/Esc", "home")],
        Page::Code => &[("↑/↓ PgUp/PgDn", "scroll"), ("h/Esc", "home")],
        Page::Execute if nav.selected_topic() == Some(TopicId::GcdLcm) => &[
            ("Enter", "run"),
            ("Tab", "GCD/LCM"),
            ("PgUp/PgDn", "scroll"),
            ("Esc", "home"),
        ],
        Page::Execute => &[("Enter", "run"), ("PgUp/PgDn", "scroll"), ("Esc", "home")],
    };

    let key = Style::default().fg(super::components::ACCENT);
    let dim = Style::default().fg(Color::DarkGray);
    let mut spans = Vec::new();
    for (k, what) in hints.iter().chain(&[("Ctrl+C", "quit")]) {
        if !spans.is_empty() {
            spans.push(Span::styled("  ", dim));
        }
        spans.push(Span::styled(*k, key));
        spans.push(Span::styled(format!(" {what}"), dim));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::nav::NavAction;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn test_menu_page() {
        let app = App::new();
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(text.contains("Numera | Pick a topic"));
        assert!(text.contains("GCD and LCM"));
        assert!(text.contains("q quit"));
    }

    #[test]
    fn test_definition_page() {
        let mut app = App::new();
        update(&mut app, Action::Navigate(NavAction::SelectTopic(TopicId::Primes)));
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(text.contains("Numera | Primes | Definition"));
        assert!(text.contains("e execute"));
    }

    #[test]
    fn test_code_page() {
        let mut app = App::new();
        update(&mut app, Action::Navigate(NavAction::SelectTopic(TopicId::Recursion)));
        update(&mut app, Action::Navigate(NavAction::ViewCode));
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(text.contains("Recursion source"));
        assert!(text.contains("fn factorial"));
    }

    #[test]
    fn test_execute_page_shows_result() {
        let mut app = App::new();
        update(&mut app, Action::Navigate(NavAction::SelectTopic(TopicId::GcdLcm)));
        update(&mut app, Action::Navigate(NavAction::Execute));
        update(&mut app, Action::Submit("12 18".into()));
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(text.contains("GCD(12, 18) = 6"));
        assert!(text.contains("Tab GCD/LCM"));
    }
}

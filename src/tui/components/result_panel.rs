//! # ResultPanel Component
//!
//! Renders the last execution outcome (or error) below the input box.
//! Scrolling is delegated to `Document`; this module only decides how each
//! outcome looks.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

use crate::core::engine::{EngineError, Outcome};
use crate::core::engine::divisibility::DivisibilityReport;
use crate::core::engine::primes::PrimeListing;
use crate::tui::component::Component;
use crate::tui::components::document::{Document, DocumentState};

pub struct ResultPanel<'a> {
    state: &'a mut DocumentState,
    result: Option<&'a Result<Outcome, EngineError>>,
}

impl<'a> ResultPanel<'a> {
    pub fn new(
        state: &'a mut DocumentState,
        result: Option<&'a Result<Outcome, EngineError>>,
    ) -> Self {
        Self { state, result }
    }
}

impl Component for ResultPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (text, border) = match self.result {
            None => (
                Text::from(Line::styled(
                    "Press Enter to run.",
                    Style::default().fg(Color::DarkGray),
                )),
                Style::default().fg(super::ACCENT),
            ),
            Some(Ok(outcome)) => (outcome_text(outcome), Style::default().fg(super::ACCENT)),
            Some(Err(error)) => (error_text(error), Style::default().fg(Color::Red)),
        };
        Document::new(self.state, "Result", text)
            .border_style(border)
            .render(frame, area);
    }
}

fn error_text(error: &EngineError) -> Text<'static> {
    Text::from(Line::styled(
        format!("Error: {error}"),
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    ))
}

/// Styled rendering of a successful outcome.
pub fn outcome_text(outcome: &Outcome) -> Text<'static> {
    match outcome {
        Outcome::Divisibility(report) => divisibility_text(report),
        Outcome::Primes(listing) => primes_text(listing),
        // Single-line outcomes: their Display is already the presentation.
        other => Text::from(Line::styled(
            other.to_string(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
    }
}

fn divisibility_text(report: &DivisibilityReport) -> Text<'static> {
    let mut lines = vec![Line::styled(
        format!("Analysis of {}:", report.n),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    lines.extend(report.verdicts.iter().map(|verdict| {
        let colour = if verdict.divisible {
            Color::Green
        } else {
            Color::Red
        };
        Line::styled(verdict.to_string(), Style::default().fg(colour))
    }));
    Text::from(lines)
}

fn primes_text(listing: &PrimeListing) -> Text<'static> {
    let width = listing.values.last().map_or(1, |v| v.to_string().len());
    let mut lines = vec![Line::styled(
        format!("Primes up to {}:", listing.limit),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    for row in listing.rows() {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:>width$}")).collect();
        lines.push(Line::styled(cells.join(" "), Style::default().fg(Color::Cyan)));
    }
    lines.push(Line::from(vec![
        Span::raw("Total: "),
        Span::styled(
            listing.count().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" primes"),
    ]));
    Text::from(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::{divisibility, primes};
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn plain(text: &Text<'_>) -> Vec<String> {
        text.lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_divisibility_verdicts_are_coloured() {
        let text = outcome_text(&Outcome::Divisibility(divisibility::analyze(12)));
        let lines = &text.lines;
        assert_eq!(plain(&text)[0], "Analysis of 12:");
        // divisors: 1, 2, 3, 4, 5, ...
        assert_eq!(lines[2].style.fg, Some(Color::Green));
        assert_eq!(lines[5].style.fg, Some(Color::Red));
    }

    #[test]
    fn test_primes_grid_has_rows_of_ten_and_total() {
        let text = outcome_text(&Outcome::Primes(primes::enumerate(50)));
        let lines = plain(&text);
        assert_eq!(lines[0], "Primes up to 50:");
        assert_eq!(lines[1].split_whitespace().count(), 10);
        assert_eq!(lines.last().unwrap(), "Total: 16 primes");
    }

    #[test]
    fn test_single_line_outcome_uses_display() {
        let outcome = Outcome::Factorial { n: 5, value: 120 };
        assert_eq!(plain(&outcome_text(&outcome)), vec!["The factorial of 5 is 120"]);
    }

    #[test]
    fn test_render_error_and_placeholder() {
        let backend = TestBackend::new(60, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = DocumentState::new();

        terminal
            .draw(|f| {
                let area = f.area();
                ResultPanel::new(&mut state, None).render(f, area);
            })
            .unwrap();
        assert!(buffer_text(&terminal).contains("Press Enter to run."));

        let error: Result<Outcome, EngineError> = Err(EngineError::InvalidInput {
            input: "abc".into(),
        });
        terminal
            .draw(|f| {
                let area = f.area();
                ResultPanel::new(&mut state, Some(&error)).render(f, area);
            })
            .unwrap();
        assert!(buffer_text(&terminal).contains("Error:"));
    }
}

//! Markdown and source listings → ratatui `Text`.
//!
//! Topic definitions are short markdown documents (paragraphs, bold and
//! italic runs, inline code, bullet lists). Source listings are rendered as a
//! fenced block and highlighted with syntect.

use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, HeadingLevel, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

const THEME: &str = "base16-ocean.dark";

/// Render markdown with `base_fg` as the body colour.
pub fn render(content: &str, base_fg: Color) -> Text<'static> {
    let mut w = Writer::new(base_fg);
    for event in Parser::new(content) {
        w.handle(event);
    }
    w.text
}

/// Render a source listing as a highlighted, bordered code block.
pub fn render_listing(source: &str, lang: &str) -> Text<'static> {
    let body = source.trim_end_matches('\n');
    render(&format!("```{lang}\n{body}\n```"), Color::White)
}

// ── Writer ──────────────────────────────────────────────────────────────────

struct Writer {
    text: Text<'static>,
    base_fg: Color,
    /// Nested inline styles; each entry is patched over its parent.
    styles: Vec<Style>,
    /// Span prepended to every line while inside a code block.
    code_prefix: Option<Span<'static>>,
    /// Bullet list depth.
    list_depth: usize,
    highlighter: Option<HighlightLines<'static>>,
    in_code: bool,
    needs_newline: bool,
}

impl Writer {
    fn new(base_fg: Color) -> Self {
        Self {
            text: Text::default(),
            base_fg,
            styles: vec![],
            code_prefix: None,
            list_depth: 0,
            highlighter: None,
            in_code: false,
            needs_newline: false,
        }
    }

    fn style(&self) -> Style {
        self.styles
            .last()
            .copied()
            .unwrap_or_else(|| Style::default().fg(self.base_fg))
    }

    fn push_style(&mut self, overlay: Style) {
        self.styles.push(self.style().patch(overlay));
    }

    fn push_line(&mut self, line: Line<'static>) {
        let mut out = line;
        if let Some(prefix) = &self.code_prefix {
            out.spans.insert(0, prefix.clone());
        }
        self.text.lines.push(out);
    }

    fn push_span(&mut self, span: Span<'static>) {
        match self.text.lines.last_mut() {
            Some(line) => line.push_span(span),
            None => self.push_line(Line::from(vec![span])),
        }
    }

    fn blank_line_if_needed(&mut self) {
        if self.needs_newline {
            self.push_line(Line::default());
            self.needs_newline = false;
        }
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.open(tag),
            Event::End(tag) => self.close(tag),
            Event::Text(t) => self.text(t),
            Event::Code(c) => {
                let style = Style::default().fg(Color::White).bg(Color::DarkGray);
                self.push_span(Span::styled(c.to_string(), style));
            }
            Event::SoftBreak => self.push_span(Span::raw(" ")),
            Event::HardBreak => self.push_line(Line::default()),
            _ => {}
        }
    }

    fn open(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                self.blank_line_if_needed();
                self.push_line(Line::default());
            }
            Tag::Heading { level, .. } => {
                self.blank_line_if_needed();
                self.push_line(Line::default());
                let mut style = Style::default().fg(self.base_fg).add_modifier(Modifier::BOLD);
                if level == HeadingLevel::H1 {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }
                self.push_style(style);
            }
            Tag::CodeBlock(kind) => {
                self.blank_line_if_needed();
                let lang = match &kind {
                    CodeBlockKind::Fenced(l) => l.to_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                let border = Style::default().fg(Color::DarkGray);
                let top = if lang.is_empty() {
                    Line::from(Span::styled("╭──", border))
                } else {
                    Line::from(vec![
                        Span::styled("╭── ", border),
                        Span::styled(lang.clone(), border.add_modifier(Modifier::BOLD)),
                        Span::styled(" ──", border),
                    ])
                };
                self.push_line(top);
                self.code_prefix = Some(Span::styled("│ ", border));
                self.in_code = true;

                if let Some(syntax) = SYNTAX_SET.find_syntax_by_token(&lang)
                    && let Some(theme) = THEME_SET.themes.get(THEME)
                {
                    self.highlighter = Some(HighlightLines::new(syntax, theme));
                }
            }
            Tag::List(_) => {
                if self.list_depth == 0 {
                    self.blank_line_if_needed();
                }
                self.list_depth += 1;
            }
            Tag::Item => {
                self.push_line(Line::default());
                let indent = "  ".repeat(self.list_depth.saturating_sub(1));
                self.push_span(Span::styled(
                    format!("{indent}• "),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            Tag::Emphasis => self.push_style(Style::default().add_modifier(Modifier::ITALIC)),
            Tag::Strong => self.push_style(Style::default().add_modifier(Modifier::BOLD)),
            _ => {}
        }
    }

    fn close(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.needs_newline = true,
            TagEnd::Heading(_) => {
                self.styles.pop();
                self.needs_newline = true;
            }
            TagEnd::CodeBlock => {
                self.highlighter = None;
                self.in_code = false;
                self.code_prefix = None;
                self.push_line(Line::from(Span::styled(
                    "╰──",
                    Style::default().fg(Color::DarkGray),
                )));
                self.needs_newline = true;
            }
            TagEnd::List(_) => {
                self.list_depth = self.list_depth.saturating_sub(1);
                self.needs_newline = true;
            }
            TagEnd::Emphasis | TagEnd::Strong => {
                self.styles.pop();
            }
            _ => {}
        }
    }

    fn text(&mut self, cow: CowStr<'_>) {
        // ratatui renders \t as zero-width
        let text = cow.replace('\t', "    ");

        if !self.in_code {
            let style = self.style();
            self.push_span(Span::styled(text, style));
            return;
        }

        // Take the highlighter out so push_line can borrow self mutably.
        match self.highlighter.take() {
            Some(mut hl) => {
                for line in LinesWithEndings::from(text.as_str()) {
                    let spans: Vec<Span<'static>> = match hl.highlight_line(line, &SYNTAX_SET) {
                        Ok(ranges) => ranges
                            .into_iter()
                            .filter_map(|(hl_style, frag)| {
                                let content = frag.trim_end_matches('\n');
                                if content.is_empty() {
                                    return None;
                                }
                                let fg = Color::Rgb(
                                    hl_style.foreground.r,
                                    hl_style.foreground.g,
                                    hl_style.foreground.b,
                                );
                                Some(Span::styled(content.to_owned(), Style::default().fg(fg)))
                            })
                            .collect(),
                        Err(_) => vec![Span::raw(line.trim_end_matches('\n').to_owned())],
                    };
                    self.push_line(Line::from(spans));
                }
                self.highlighter = Some(hl);
            }
            None => {
                let code_style = Style::default().fg(Color::White);
                for line in text.lines() {
                    self.push_line(Line::from(Span::styled(line.to_owned(), code_style)));
                }
            }
        }
    }
}

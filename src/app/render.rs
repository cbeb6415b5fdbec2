//! Suggestion panel construction and drawing.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::Throbber;

use crate::engine::Hit;
use crate::types::{MAX_RESULTS, Readiness, SuggestionRow};

use super::{App, Focus};

const PROMPT: &str = "> ";

impl App {
    /// Replace the suggestion panel contents with a fresh row set.
    ///
    /// Keeps one slot short of the result cap so the input stays reachable,
    /// preserves the engine's relevance order, and tags each row with its
    /// rendered position for the focus navigation.
    pub(crate) fn apply_results(&mut self, hits: Vec<Hit>) {
        let rows: Vec<SuggestionRow> = hits
            .into_iter()
            .filter_map(|hit| hit.doc)
            .take(MAX_RESULTS - 1)
            .enumerate()
            .map(|(index, record)| SuggestionRow { index, record })
            .collect();

        self.panel_visible = !rows.is_empty();
        self.rows = rows;
    }

    /// Hide the panel without rendering an empty list.
    pub(crate) fn clear_panel(&mut self) {
        self.rows.clear();
        self.panel_visible = false;
    }

    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area().inner(Margin {
            vertical: 0,
            horizontal: 1,
        });

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(1)])
            .split(area);

        self.draw_prompt(frame, layout[0]);
        self.draw_panel(frame, layout[1]);
    }

    fn draw_prompt(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(PROMPT, self.theme.prompt)];
        if self.input.is_empty() {
            spans.push(Span::styled(
                self.readiness.placeholder(),
                self.theme.placeholder,
            ));
        } else {
            spans.push(Span::raw(self.input.text()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);

        if self.readiness == Readiness::Loading {
            let spinner = Throbber::default()
                .style(self.theme.hint)
                .throbber_style(self.theme.hint);
            let span = spinner.to_symbol_span(&self.throbber_state);
            frame.render_widget(
                Paragraph::new(Line::from(span)).alignment(Alignment::Right),
                area,
            );
        }

        if self.focus == Focus::Input {
            let x = area.x + PROMPT.len() as u16 + self.input.cursor_column();
            frame.set_cursor_position((x.min(area.right().saturating_sub(1)), area.y));
        }
    }

    fn draw_panel(&self, frame: &mut Frame, area: Rect) {
        if !self.panel_visible {
            if self.focus == Focus::Body {
                let hint = Paragraph::new("Press / or s to search").style(self.theme.hint);
                frame.render_widget(hint, area);
            }
            return;
        }

        for row in &self.rows {
            if row.index as u16 >= area.height {
                break;
            }
            let line_area = Rect {
                x: area.x,
                y: area.y + row.index as u16,
                width: area.width,
                height: 1,
            };

            let focused = self.focus == Focus::Row(row.index);
            let line = if focused {
                Line::from(Span::raw(row.record.label()))
            } else {
                Line::from(vec![
                    Span::styled(row.record.page_title.clone(), self.theme.page_title),
                    Span::styled(
                        format!(" > {}", row.record.section_title),
                        self.theme.section_title,
                    ),
                ])
            };

            let style = if focused {
                self.theme.row_focused
            } else {
                Style::default()
            };
            frame.render_widget(Paragraph::new(line).style(style), line_area);
        }
    }
}

//! Terminal event loop and key dispatch.

use std::time::Duration;

use anyhow::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::logging;
use crate::types::SearchOutcome;

use super::{App, Focus};

impl App {
    /// Pump the terminal event loop until the user exits with an outcome.
    pub fn run(&mut self) -> Result<SearchOutcome> {
        let mut terminal = ratatui::init();
        terminal.clear()?;

        // The widget opens with the input focused, which counts as the first
        // search trigger and starts the shard load.
        self.run_search();

        let outcome = loop {
            self.pump_shard_events();
            logging::pump();
            self.throbber_state.calc_next();
            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(Duration::from_millis(50))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if let Some(outcome) = self.handle_key(key) {
                            break outcome;
                        }
                    }
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        };

        ratatui::restore();
        Ok(outcome)
    }

    /// Route a key press to whichever element holds focus. Returns an
    /// outcome when the session ends.
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<SearchOutcome> {
        match self.focus {
            Focus::Body => self.handle_body_key(key),
            Focus::Input => self.handle_input_key(key),
            Focus::Row(index) => self.handle_row_key(key, index),
        }
    }

    fn handle_body_key(&mut self, key: KeyEvent) -> Option<SearchOutcome> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return Some(self.cancelled_outcome()),
            KeyCode::Char(c) => {
                if self.focus.global_shortcut(c).is_some() {
                    self.focus_input();
                }
            }
            _ => {}
        }
        None
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> Option<SearchOutcome> {
        match key.code {
            KeyCode::Esc => {
                self.focus = Focus::Body;
            }
            KeyCode::Down => {
                let (focus, moved) = self.focus.arrow_down(self.rows.len());
                if moved {
                    self.focus = focus;
                }
            }
            KeyCode::Up => {
                let (focus, moved) = self.focus.arrow_up(self.rows.len());
                if moved {
                    self.focus = focus;
                }
            }
            KeyCode::Enter => {}
            _ => {
                if self.input.handle_key(key) {
                    self.run_search();
                }
            }
        }
        None
    }

    fn handle_row_key(&mut self, key: KeyEvent, index: usize) -> Option<SearchOutcome> {
        match key.code {
            KeyCode::Enter => return self.accept_row(index),
            KeyCode::Esc => self.focus_input(),
            KeyCode::Down => {
                let (focus, _) = self.focus.arrow_down(self.rows.len());
                self.apply_row_transition(focus);
            }
            KeyCode::Up => {
                let (focus, _) = self.focus.arrow_up(self.rows.len());
                self.apply_row_transition(focus);
            }
            _ => {}
        }
        None
    }

    /// Wrapping off the row list refocuses the input, which is a focus event
    /// and therefore a search trigger.
    fn apply_row_transition(&mut self, focus: Focus) {
        if focus == Focus::Input {
            self.focus_input();
        } else {
            self.focus = focus;
        }
    }
}

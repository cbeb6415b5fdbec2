//! The interactive search widget.
//!
//! One owned [`App`] instance carries the engine handle, the index readiness
//! flag and the last executed query text, plus the UI state built around
//! them. All of it lives on the UI thread; the only concurrency is the set of
//! shard fetches pumped in from a channel.

mod loading;
mod navigation;
mod render;
mod runtime;
mod search;
#[cfg(test)]
mod tests;

pub use navigation::Focus;

use std::sync::Arc;
use std::sync::mpsc::Receiver;

use throbber_widgets_tui::ThrobberState;

use crate::engine::DocumentEngine;
use crate::input::SearchInput;
use crate::shards::{ShardEvent, ShardFetcher};
use crate::theme::Theme;
use crate::types::{Readiness, SearchOutcome, SuggestionRow};

pub struct App {
    pub(crate) engine: Box<dyn DocumentEngine>,
    pub(crate) fetcher: Arc<dyn ShardFetcher>,
    pub(crate) readiness: Readiness,
    /// Text of the most recently executed query. Searches are suppressed
    /// while the input matches this byte for byte.
    pub(crate) last_query: String,
    pub(crate) input: SearchInput,
    pub(crate) focus: Focus,
    pub(crate) rows: Vec<SuggestionRow>,
    pub(crate) panel_visible: bool,
    pub(crate) theme: Theme,
    pub(crate) throbber_state: ThrobberState,
    pub(crate) shard_events: Option<Receiver<ShardEvent>>,
    pub(crate) pending_shards: usize,
}

impl App {
    pub fn new(
        engine: Box<dyn DocumentEngine>,
        fetcher: Arc<dyn ShardFetcher>,
        initial_query: String,
    ) -> Self {
        Self {
            engine,
            fetcher,
            readiness: Readiness::Unloaded,
            last_query: String::new(),
            input: SearchInput::new(initial_query),
            focus: Focus::Input,
            rows: Vec::new(),
            panel_visible: false,
            theme: Theme::default(),
            throbber_state: ThrobberState::default(),
            shard_events: None,
            pending_shards: 0,
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Move focus to the input line. Focusing the input re-runs the search,
    /// matching the widget's behavior on a focus event.
    pub(crate) fn focus_input(&mut self) {
        self.focus = Focus::Input;
        self.run_search();
    }

    pub(crate) fn cancelled_outcome(&self) -> SearchOutcome {
        SearchOutcome {
            accepted: false,
            query: self.input.text().to_string(),
            selection: None,
        }
    }

    pub(crate) fn accept_row(&self, index: usize) -> Option<SearchOutcome> {
        let row = self.rows.get(index)?;
        Some(SearchOutcome {
            accepted: true,
            query: self.input.text().to_string(),
            selection: Some(row.record.clone()),
        })
    }
}

//! Query execution.

use crate::engine::SearchRequest;
use crate::types::{MAX_RESULTS, Readiness};

use super::App;

impl App {
    /// Run a search for the current input text.
    ///
    /// Called on every text change and whenever the input regains focus. The
    /// first call triggers the shard load; until the index is Ready (or once
    /// it has Failed) no query executes. A query whose text is byte-identical
    /// to the last executed one is suppressed, which is what absorbs the
    /// focus event that often follows a keystroke.
    pub(crate) fn run_search(&mut self) {
        match self.readiness {
            Readiness::Unloaded => {
                self.ensure_loaded();
                return;
            }
            Readiness::Loading | Readiness::Failed => return,
            Readiness::Ready => {}
        }

        let query = self.input.text();
        if query == self.last_query {
            return;
        }
        self.last_query = query.to_string();

        let request = SearchRequest {
            limit: MAX_RESULTS,
            enrich: true,
        };
        let hits = self.engine.search(&self.last_query, &request);
        log::debug!("query '{}' produced {} hits", self.last_query, hits.len());

        if hits.is_empty() {
            self.clear_panel();
        } else {
            self.apply_results(hits);
        }
    }
}

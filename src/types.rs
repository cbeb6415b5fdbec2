//! Shared data types for the search widget.

use serde::Deserialize;

/// Upper bound on results requested from the engine for a single query.
///
/// The rendered suggestion panel keeps one slot short of this so the prompt
/// line always stays reachable with the arrow keys.
pub const MAX_RESULTS: usize = 40;

/// Lifecycle of the sharded search index.
///
/// The state only ever advances `Unloaded -> Loading -> {Ready | Failed}`;
/// once Ready or Failed it stays there for the rest of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// No load has been attempted yet.
    Unloaded,
    /// Shard fetches are in flight.
    Loading,
    /// Every shard imported successfully; queries may run.
    Ready,
    /// At least one shard failed; search is disabled for the session.
    Failed,
}

impl Readiness {
    /// Placeholder text shown in the empty input line for this state.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Unloaded | Self::Ready => "Search...",
            Self::Loading => "Loading...",
            Self::Failed => "Error loading search data...",
        }
    }
}

/// One enriched document as stored in the index.
///
/// Field names mirror the stored fields of the shard payloads: `pagetitle`
/// holds the page the section lives on, `title` the section heading itself,
/// and `ref` the navigation target.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DocRecord {
    #[serde(rename = "pagetitle")]
    pub page_title: String,
    #[serde(rename = "title")]
    pub section_title: String,
    #[serde(rename = "ref")]
    pub target_ref: String,
}

impl DocRecord {
    /// Visible row label: page title followed by the section heading.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} > {}", self.page_title, self.section_title)
    }
}

/// One rendered, focus-addressable entry of the suggestion panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRow {
    /// Zero-based position among the rendered rows.
    pub index: usize,
    pub record: DocRecord,
}

/// Result of an interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Whether the user accepted a suggestion rather than cancelling.
    pub accepted: bool,
    /// The query text at the moment the session ended.
    pub query: String,
    /// The accepted suggestion, if any.
    pub selection: Option<DocRecord>,
}

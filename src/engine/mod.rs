//! The document search engine seam.
//!
//! The widget treats the engine as an opaque document index: shards are
//! handed over through [`DocumentEngine::import`] keyed by shard name, and
//! queries run through [`DocumentEngine::search`] with a result cap and
//! optional enrichment. Result order is the engine's relevance order; the
//! widget never re-sorts.

use serde_json::Value;
use thiserror::Error;

use crate::types::DocRecord;

mod fuzzy;

pub use fuzzy::FuzzyEngine;

/// Payload structurally unusable for the engine's import contract.
#[derive(Debug, Error)]
#[error("shard '{shard}' payload rejected by engine: {reason}")]
pub struct ImportError {
    pub shard: String,
    pub reason: String,
}

impl ImportError {
    pub(crate) fn new(shard: &str, reason: impl Into<String>) -> Self {
        Self {
            shard: shard.to_string(),
            reason: reason.into(),
        }
    }
}

/// Options for a single search call.
#[derive(Debug, Clone, Copy)]
pub struct SearchRequest {
    /// Maximum number of hits to return.
    pub limit: usize,
    /// Whether hits should carry the full stored document rather than just
    /// its identifier.
    pub enrich: bool,
}

/// One search hit in relevance order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub id: String,
    /// Stored fields of the matching document; present only when the request
    /// asked for enrichment.
    pub doc: Option<DocRecord>,
}

/// A document index importing named shards and answering bounded queries.
pub trait DocumentEngine {
    /// Merge one shard payload into the index, keyed by shard name.
    fn import(&mut self, shard: &str, payload: Value) -> Result<(), ImportError>;

    /// Run a relevance search over the indexed field. Returns at most
    /// `request.limit` hits, best first.
    fn search(&self, query: &str, request: &SearchRequest) -> Vec<Hit>;
}

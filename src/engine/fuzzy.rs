//! Frizbee-backed document engine.
//!
//! Stores documents from the `store` shard, records registration order from
//! the `registry` shard, and accumulates the searchable content text from the
//! `content-*` shards. Relevance scoring is delegated entirely to frizbee;
//! the content field is the only indexed field, everything else is
//! stored-but-not-searched.

use std::collections::BTreeMap;

use frizbee::{Options, match_list};
use serde_json::Value;

use crate::types::DocRecord;

use super::{DocumentEngine, Hit, ImportError, SearchRequest};

const PREFILTER_ENABLE_THRESHOLD: usize = 1_000;

/// In-memory document index over pre-built shards.
#[derive(Debug, Default)]
pub struct FuzzyEngine {
    /// Stored fields per document id, from the `store` shard.
    store: BTreeMap<String, DocRecord>,
    /// Indexed content text per document id, from the `content-*` shards.
    content: BTreeMap<String, String>,
    /// Document registration order, from the `registry` shard.
    order: Vec<String>,
}

impl FuzzyEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids in registration order, falling back to content order when no
    /// registry shard has been imported.
    fn ids(&self) -> Vec<&str> {
        if self.order.is_empty() {
            self.content.keys().map(String::as_str).collect()
        } else {
            self.order.iter().map(String::as_str).collect()
        }
    }

    fn import_store(&mut self, shard: &str, payload: Value) -> Result<(), ImportError> {
        let Value::Object(entries) = payload else {
            return Err(ImportError::new(shard, "expected an object of documents"));
        };
        for (id, doc) in entries {
            let record: DocRecord = serde_json::from_value(doc)
                .map_err(|err| ImportError::new(shard, format!("document '{id}': {err}")))?;
            self.store.insert(id, record);
        }
        Ok(())
    }

    fn import_registry(&mut self, shard: &str, payload: Value) -> Result<(), ImportError> {
        let Value::Array(ids) = payload else {
            return Err(ImportError::new(shard, "expected an array of document ids"));
        };
        for id in ids {
            let Value::String(id) = id else {
                return Err(ImportError::new(shard, "document ids must be strings"));
            };
            self.order.push(id);
        }
        Ok(())
    }

    fn import_content(&mut self, shard: &str, payload: Value) -> Result<(), ImportError> {
        let Value::Object(entries) = payload else {
            return Err(ImportError::new(shard, "expected an object of content text"));
        };
        for (id, fragment) in entries {
            let Value::String(fragment) = fragment else {
                return Err(ImportError::new(
                    shard,
                    format!("content for '{id}' must be a string"),
                ));
            };
            let text = self.content.entry(id).or_default();
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(&fragment);
        }
        Ok(())
    }
}

impl DocumentEngine for FuzzyEngine {
    fn import(&mut self, shard: &str, payload: Value) -> Result<(), ImportError> {
        match shard {
            "store" => self.import_store(shard, payload),
            "registry" => self.import_registry(shard, payload),
            name if name.starts_with("content") => self.import_content(shard, payload),
            _ => Err(ImportError::new(shard, "unrecognized shard key")),
        }
    }

    fn search(&self, query: &str, request: &SearchRequest) -> Vec<Hit> {
        let trimmed = query.trim();
        if trimmed.is_empty() || request.limit == 0 {
            return Vec::new();
        }

        let ids = self.ids();
        let haystacks: Vec<&str> = ids
            .iter()
            .map(|id| self.content.get(*id).map_or("", String::as_str))
            .collect();

        let options = options_for_query(trimmed, haystacks.len());
        let mut matches = match_list(trimmed, &haystacks, &options);
        matches.retain(|entry| entry.score > 0);
        // Stable by score so ties keep registration order.
        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches.truncate(request.limit);

        matches
            .into_iter()
            .map(|entry| {
                let id = ids[entry.index_in_haystack as usize].to_string();
                let doc = request
                    .enrich
                    .then(|| self.store.get(&id).cloned())
                    .flatten();
                Hit { id, doc }
            })
            .collect()
    }
}

/// Matching options tuned to the query length and dataset size.
fn options_for_query(query: &str, dataset_len: usize) -> Options {
    let length = query.chars().count();
    let allowed_typos: u16 = match length {
        0..=1 => 0,
        2..=4 => 1,
        5..=7 => 2,
        8..=12 => 3,
        _ => 4,
    };

    Options {
        prefilter: dataset_len >= PREFILTER_ENABLE_THRESHOLD,
        max_typos: Some(allowed_typos),
        sort: false,
        ..Options::default()
    }
}

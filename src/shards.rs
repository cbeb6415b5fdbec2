//! Retrieval of the pre-built index shards.
//!
//! A deployment ships a fixed set of named JSON shards that together make up
//! one logical search index. Each shard is fetched independently; the app
//! layer joins the outcomes with an all-must-succeed barrier.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use serde_json::Value;
use thiserror::Error;

/// Shard names that constitute the logical index. Fixed per build; every one
/// of them must load before queries may run.
pub const SHARD_SET: [&str; 5] = [
    "content-config",
    "content-context",
    "content-map",
    "registry",
    "store",
];

/// Directory under the asset root where shard files live.
pub const SHARD_DATA_DIR: &str = "search-data";

/// Errors surfaced by a single shard retrieval.
#[derive(Debug, Error)]
pub enum ShardError {
    #[error("failed to fetch shard '{name}'")]
    Fetch {
        name: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("shard '{name}' is not valid JSON")]
    Parse {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Source of shard payloads.
///
/// The widget only ever sees parsed JSON or a [`ShardError`]; everything
/// below this seam (filesystem, transport) is interchangeable, which is also
/// how tests substitute fixture data.
pub trait ShardFetcher: Send + Sync {
    fn fetch(&self, name: &'static str) -> Result<Value, ShardError>;
}

/// Fetches shards from `<root>/search-data/<name>.json` on the local
/// filesystem.
#[derive(Debug, Clone)]
pub struct FsShardFetcher {
    root: PathBuf,
}

impl FsShardFetcher {
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn shard_path(&self, name: &str) -> PathBuf {
        self.root.join(SHARD_DATA_DIR).join(format!("{name}.json"))
    }
}

impl ShardFetcher for FsShardFetcher {
    fn fetch(&self, name: &'static str) -> Result<Value, ShardError> {
        let path = self.shard_path(name);
        let bytes = fs::read(&path).map_err(|source| ShardError::Fetch { name, source })?;
        serde_json::from_slice(&bytes).map_err(|source| ShardError::Parse { name, source })
    }
}

/// Outcome of one shard retrieval, delivered to the UI thread.
#[derive(Debug)]
pub struct ShardEvent {
    pub name: &'static str,
    pub payload: Result<Value, ShardError>,
}

/// Issue one retrieval per shard in [`SHARD_SET`], none waiting on another.
///
/// Events arrive on the returned channel in completion order. Fetches are
/// never cancelled; once the receiving side has recorded a failure it simply
/// ignores whatever the remaining threads deliver.
pub fn spawn_shard_fetches(fetcher: Arc<dyn ShardFetcher>) -> Receiver<ShardEvent> {
    let (tx, rx) = mpsc::channel();

    for name in SHARD_SET {
        let tx = tx.clone();
        let fetcher = Arc::clone(&fetcher);
        thread::spawn(move || {
            let payload = fetcher.fetch(name);
            let _ = tx.send(ShardEvent { name, payload });
        });
    }

    rx
}

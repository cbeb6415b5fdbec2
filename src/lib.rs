//! Search-as-you-type over pre-built documentation index shards.
//!
//! The widget loads a fixed set of JSON index shards, feeds them into a
//! document search engine, and presents an interactive prompt with a
//! keyboard-navigable suggestion panel. The root module re-exports the types
//! embedders need to wire up an engine and run the app.

pub mod app;
pub mod app_dirs;
pub mod engine;
pub mod input;
pub mod logging;
pub mod shards;
pub mod theme;
pub mod types;

pub use app::{App, Focus};
pub use engine::{DocumentEngine, FuzzyEngine, Hit, ImportError, SearchRequest};
pub use shards::{FsShardFetcher, SHARD_SET, ShardError, ShardFetcher};
pub use theme::Theme;
pub use types::{DocRecord, MAX_RESULTS, Readiness, SearchOutcome, SuggestionRow};

//! Shard loading and the readiness state machine.
//!
//! Loading starts lazily from the first search attempt. All shards are
//! fetched concurrently and joined with an all-must-succeed barrier: the
//! first failure makes the load terminally Failed, and whatever the sibling
//! fetches still deliver is drained and ignored. There is no retry.

use std::sync::Arc;
use std::sync::mpsc::TryRecvError;

use crate::shards::{SHARD_SET, ShardEvent, spawn_shard_fetches};
use crate::types::Readiness;

use super::App;

impl App {
    /// Kick off the shard fetches. A no-op unless readiness is exactly
    /// Unloaded, which is what keeps repeated search attempts from starting
    /// a second load while one is in flight.
    pub(crate) fn ensure_loaded(&mut self) {
        if self.readiness != Readiness::Unloaded {
            return;
        }

        self.readiness = Readiness::Loading;
        self.pending_shards = SHARD_SET.len();
        log::info!("loading {} index shards", SHARD_SET.len());
        self.shard_events = Some(spawn_shard_fetches(Arc::clone(&self.fetcher)));
    }

    /// Drain any shard outcomes waiting on the receiver channel.
    pub(crate) fn pump_shard_events(&mut self) {
        let Some(rx) = self.shard_events.take() else {
            return;
        };

        let mut keep_receiver = true;
        loop {
            match rx.try_recv() {
                Ok(event) => self.apply_shard_event(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    keep_receiver = false;
                    break;
                }
            }
        }

        if keep_receiver {
            self.shard_events = Some(rx);
        }
    }

    fn apply_shard_event(&mut self, event: ShardEvent) {
        if self.readiness != Readiness::Loading {
            // A sibling already failed the load; this result is ignored.
            return;
        }

        match event.payload {
            Ok(payload) => match self.engine.import(event.name, payload) {
                Ok(()) => {
                    log::debug!("imported shard '{}'", event.name);
                    self.pending_shards -= 1;
                    if self.pending_shards == 0 {
                        self.finish_load();
                    }
                }
                Err(err) => {
                    log::warn!("{err}");
                    self.fail_load();
                }
            },
            Err(err) => {
                log::warn!("{err}");
                self.fail_load();
            }
        }
    }

    fn finish_load(&mut self) {
        self.readiness = Readiness::Ready;
        log::info!("search index ready");
        // The input still holds focus; rerun the search it asked for while
        // the index was loading.
        self.run_search();
    }

    fn fail_load(&mut self) {
        self.readiness = Readiness::Failed;
        log::warn!("search disabled: index failed to load");
    }
}

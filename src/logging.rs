//! Log capture for the interactive session.
//!
//! Records emitted through the `log` facade are collected by `tui_logger` so
//! they survive the alternate screen instead of corrupting it. The runtime
//! pumps captured events once per render tick.

use anyhow::{Context, Result};
use log::LevelFilter;

/// Install the collector. Call once before entering the UI.
pub fn initialize() -> Result<()> {
    tui_logger::init_logger(LevelFilter::Debug).context("failed to install logger")?;
    tui_logger::set_default_level(LevelFilter::Trace);
    Ok(())
}

/// Move buffered log events into the collector. Cheap; called every tick.
pub fn pump() {
    tui_logger::move_events();
}

mod cli;
mod settings;

use std::sync::Arc;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use docfind::app::App;
use docfind::engine::FuzzyEngine;
use docfind::shards::FsShardFetcher;
use docfind::{logging, theme};
use settings::ResolvedConfig;

fn main() -> Result<()> {
    let cli = parse_cli();

    if cli.list_themes {
        for name in theme::names() {
            println!("{name}");
        }
        return Ok(());
    }

    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
    }

    run_widget(cli.output, resolved)
}

/// Run the interactive widget and print the outcome in the chosen format.
fn run_widget(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
    logging::initialize()?;

    let theme = theme::by_name(settings.theme.as_deref())?;
    let fetcher = Arc::new(FsShardFetcher::new(settings.root.clone()));
    let mut app = App::new(Box::new(FuzzyEngine::new()), fetcher, settings.initial_query);
    app.set_theme(theme);

    let outcome = app.run()?;

    match format {
        OutputFormat::Plain => print_plain(&outcome),
        OutputFormat::Json => print_json(&outcome)?,
    }

    Ok(())
}

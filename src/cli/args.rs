use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

/// Command-line arguments accepted by the `docfind` binary.
#[derive(Parser, Debug)]
#[command(
    name = "docfind",
    version,
    about = "Search-as-you-type over pre-built documentation index shards"
)]
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "DOCFIND_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'r',
        long,
        value_name = "PATH",
        help = "Root path the index shards are served under (default: /)"
    )]
    pub(crate) root: Option<PathBuf>,
    #[arg(
        short = 'q',
        long,
        value_name = "QUERY",
        help = "Provide an initial search query (default: empty)"
    )]
    pub(crate) initial_query: Option<String>,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a theme by name (default: slate)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        short = 'o',
        long,
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Output format for the accepted suggestion (default: plain)"
    )]
    pub(crate) output: OutputFormat,
    #[arg(
        long = "print-config",
        help = "Print the resolved configuration before starting (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        long = "list-themes",
        help = "List available themes and exit (default: disabled)"
    )]
    pub(crate) list_themes: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Plain,
    Json,
}

pub(crate) fn parse_cli() -> CliArgs {
    CliArgs::parse()
}

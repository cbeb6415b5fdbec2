use std::path::PathBuf;

/// Final configuration used to start the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedConfig {
    /// Root path the index shards are served under.
    pub(crate) root: PathBuf,
    pub(crate) initial_query: String,
    pub(crate) theme: Option<String>,
}

impl ResolvedConfig {
    /// Print a human-readable summary, used by `--print-config`.
    pub(crate) fn print_summary(&self) {
        println!("root: {}", self.root.display());
        println!("initial query: '{}'", self.initial_query);
        println!("theme: {}", self.theme.as_deref().unwrap_or("slate"));
    }
}

use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::ResolvedConfig;

/// Mirror of the configuration file representation before CLI overrides are
/// applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    assets: AssetsSection,
    ui: UiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct AssetsSection {
    /// Root path the shard files are served under.
    root: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
    initial_query: Option<String>,
    theme: Option<String>,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if cli.root.is_some() {
            self.assets.root = cli.root.clone();
        }
        if cli.initial_query.is_some() {
            self.ui.initial_query = cli.initial_query.clone();
        }
        if cli.theme.is_some() {
            self.ui.theme = cli.theme.clone();
        }
    }

    /// Fill defaults and produce the final configuration. The asset root is
    /// read exactly once here; it defaults to `/`.
    pub(super) fn resolve(self) -> ResolvedConfig {
        ResolvedConfig {
            root: self.assets.root.unwrap_or_else(|| PathBuf::from("/")),
            initial_query: self.ui.initial_query.unwrap_or_default(),
            theme: self.ui.theme,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn cli_overrides_take_precedence() {
        let cli = CliArgs::parse_from([
            "docfind",
            "-r",
            "/srv/docs",
            "-q",
            "graph",
            "--theme",
            "light",
        ]);

        let mut raw = RawConfig::default();
        raw.assets.root = Some(PathBuf::from("/etc/elsewhere"));
        raw.apply_cli_overrides(&cli);

        let resolved = raw.resolve();
        assert_eq!(resolved.root, PathBuf::from("/srv/docs"));
        assert_eq!(resolved.initial_query, "graph");
        assert_eq!(resolved.theme.as_deref(), Some("light"));
    }

    #[test]
    fn missing_values_fall_back_to_defaults() {
        let resolved = RawConfig::default().resolve();
        assert_eq!(resolved.root, PathBuf::from("/"));
        assert!(resolved.initial_query.is_empty());
        assert!(resolved.theme.is_none());
    }
}

//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

const PROJECT_CONFIG_FILES: [&str; 2] = ["claude-cli.toml", ".claude-cli.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./claude-cli.toml` or `./.claude-cli.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/claude-cli/config.toml`
    /// 4. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut sources = Vec::new();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                sources.push(global_path);
            }
        }

        if let Some(project_path) = Self::project_config_path() {
            sources.push(project_path);
        }

        // An explicit path is always merged so a typo surfaces as an error
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
            sources.push(path.clone());
        }

        Self::load_files(&sources)
    }

    /// Merge the given TOML files over the defaults; later files win.
    pub fn load_files(paths: &[PathBuf]) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in paths {
            debug!("Merging config file {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/claude-cli/config.toml if set,
    /// otherwise the platform config directory equivalent.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("claude-cli").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        Self::project_config_in(Path::new("."))
    }

    fn project_config_in(dir: &Path) -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for --show-config)
    pub fn print_config_sources(explicit: Option<&Path>) {
        for line in Self::config_sources(explicit) {
            println!("{}", line);
        }
    }

    /// Config source lines, highest priority first.
    pub fn config_sources(explicit: Option<&Path>) -> Vec<String> {
        let mut lines = vec!["Configuration sources (in priority order):".to_string()];

        if let Some(path) = explicit {
            lines.push(format!("  [{}] Explicit: {}", Self::marker(path), path.display()));
        }

        if let Some(path) = Self::project_config_path() {
            lines.push(format!("  [FOUND] Project: {}", path.display()));
        } else {
            lines.push("  [     ] Project: ./claude-cli.toml or ./.claude-cli.toml".to_string());
        }

        if let Some(path) = Self::global_config_path() {
            lines.push(format!("  [{}] Global:  {}", Self::marker(&path), path.display()));
        }

        lines.push("  [     ] Default: built-in defaults".to_string());
        lines
    }

    fn marker(path: &Path) -> &'static str {
        if path.exists() { "FOUND" } else { "     " }
    }
}

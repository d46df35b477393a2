//! Locates and loads the lintframe configuration.
//!
//! Lookup order:
//!
//! 1. `--config` flag
//! 2. `lintframe.toml` or `.lintframe.toml` in the project directory
//! 3. `config.toml` in the global directory (`$LINTFRAME_CONFIG_DIR`, else `~/.lintframe/`)
//! 4. built-in defaults

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lintframe_core::Config;
use tracing::{debug, info};

/// Where the configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `--config`.
    Explicit(PathBuf),
    /// Found in the project directory.
    Project(PathBuf),
    /// Found in the global config directory.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// The config file, if one was found.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Reads the config file, or returns defaults.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed.
    pub fn load(&self) -> Result<Config> {
        match self.path() {
            Some(path) => {
                info!("Using config {}", path.display());
                Config::from_file(path)
                    .with_context(|| format!("Failed to load config from {}", path.display()))
            }
            None => Ok(Config::default()),
        }
    }
}

const PROJECT_CONFIG_NAMES: &[&str] = &["lintframe.toml", ".lintframe.toml"];

const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Environment variable overriding the global config directory.
pub const CONFIG_DIR_ENV: &str = "LINTFRAME_CONFIG_DIR";

/// Resolves the config file for `project_dir`.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_in(project_dir, explicit, global_config_dir())
}

fn resolve_in(
    project_dir: &Path,
    explicit: Option<&Path>,
    global_dir: Option<PathBuf>,
) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    if let Some(found) = PROJECT_CONFIG_NAMES
        .iter()
        .map(|name| project_dir.join(name))
        .find(|candidate| candidate.is_file())
    {
        debug!("Found project config: {}", found.display());
        return ConfigSource::Project(found);
    }

    match global_dir.map(|dir| dir.join(GLOBAL_CONFIG_NAME)) {
        Some(candidate) if candidate.is_file() => {
            debug!("Found global config: {}", candidate.display());
            ConfigSource::Global(candidate)
        }
        _ => ConfigSource::Default,
    }
}

/// Global config directory: `$LINTFRAME_CONFIG_DIR`, else `~/.lintframe/`.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".lintframe"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_wins_without_existence_check() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("lintframe.toml"), "").unwrap();

        let result = resolve_in(tmp.path(), Some(Path::new("/nonexistent.toml")), None);
        assert_eq!(result, ConfigSource::Explicit(PathBuf::from("/nonexistent.toml")));
    }

    #[test]
    fn plain_name_preferred_over_dotfile() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".lintframe.toml"), "").unwrap();
        assert_eq!(
            resolve_in(tmp.path(), None, None),
            ConfigSource::Project(tmp.path().join(".lintframe.toml"))
        );

        fs::write(tmp.path().join("lintframe.toml"), "").unwrap();
        assert_eq!(
            resolve_in(tmp.path(), None, None),
            ConfigSource::Project(tmp.path().join("lintframe.toml"))
        );
    }

    #[test]
    fn global_used_only_without_project_config() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        fs::write(global.path().join("config.toml"), "").unwrap();

        let result = resolve_in(project.path(), None, Some(global.path().to_path_buf()));
        assert_eq!(result, ConfigSource::Global(global.path().join("config.toml")));

        fs::write(project.path().join("lintframe.toml"), "").unwrap();
        let result = resolve_in(project.path(), None, Some(global.path().to_path_buf()));
        assert!(matches!(result, ConfigSource::Project(_)));
    }

    #[test]
    fn empty_global_dir_means_defaults() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        let result = resolve_in(project.path(), None, Some(global.path().to_path_buf()));
        assert_eq!(result, ConfigSource::Default);
        assert!(result.path().is_none());
    }

    #[test]
    fn load_parses_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("lintframe.toml");
        fs::write(&path, "include_experimental = true\n").unwrap();

        let config = ConfigSource::Project(path).load().unwrap();
        assert!(config.include_experimental);
        assert!(!ConfigSource::Default.load().unwrap().include_experimental);
    }

    #[test]
    fn load_reports_bad_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("lintframe.toml");
        fs::write(&path, "include_experimental = \"maybe\"\n").unwrap();

        let err = ConfigSource::Explicit(path).load().unwrap_err();
        assert!(err.to_string().starts_with("Failed to load config"));
    }
}

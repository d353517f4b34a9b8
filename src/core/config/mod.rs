//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! commitflow has two configuration scopes:
//! - **Global**: User-level settings
//! - **Repo**: Repository-level overrides
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Repo config file
//! 4. CLI flags (not handled here)
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$COMMITFLOW_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/commitflow/config.toml`
//! 3. `~/.commitflow/config.toml`
//!
//! # Repo Config Location
//!
//! `<git dir>/commitflow/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use commitflow::core::config::Config;
//! use std::path::Path;
//!
//! let result = Config::load(Some(Path::new("/path/to/repo/.git"))).unwrap();
//! let config = result.config;
//!
//! println!("Strict: {}", config.strict());
//! println!("Git: {}", config.git_program());
//! ```

pub mod schema;

pub use schema::{GlobalConfig, RepoConfig};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an explicit global config file.
pub const CONFIG_ENV_VAR: &str = "COMMITFLOW_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Where to look for the global config file.
///
/// Captured once from the environment so loading itself is a pure function
/// of its inputs.
#[derive(Debug, Clone, Default)]
pub struct GlobalSearch {
    /// Value of `$COMMITFLOW_CONFIG`
    pub explicit: Option<PathBuf>,
    /// Value of `$XDG_CONFIG_HOME`
    pub xdg_config_home: Option<PathBuf>,
    /// The user's home directory
    pub home: Option<PathBuf>,
}

impl GlobalSearch {
    /// Capture the search locations from the process environment.
    pub fn from_env() -> Self {
        Self {
            explicit: std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from),
            xdg_config_home: std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
            home: dirs::home_dir(),
        }
    }
}

/// Merged configuration from all sources.
///
/// This struct provides accessor methods that apply precedence rules
/// automatically. Repo config overrides global config.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Repository configuration (if in a repo)
    pub repo: Option<RepoConfig>,
    /// Path to the global config file (if loaded)
    global_path: Option<PathBuf>,
    /// Path to the repo config file (if loaded)
    repo_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// If `git_dir` is provided, also loads repo-specific config.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be parsed.
    /// Missing config files are not an error (defaults are used).
    pub fn load(git_dir: Option<&Path>) -> Result<ConfigLoadResult, ConfigError> {
        Self::load_with(&GlobalSearch::from_env(), git_dir)
    }

    /// Load configuration using explicit global search locations.
    pub fn load_with(
        search: &GlobalSearch,
        git_dir: Option<&Path>,
    ) -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();

        let (global, global_path) = Self::load_global(search, &mut warnings)?;

        let (repo, repo_path) = match git_dir {
            Some(dir) => Self::load_repo(dir)?,
            None => (None, None),
        };

        global.validate()?;
        if let Some(ref r) = repo {
            r.validate()?;
        }

        Ok(ConfigLoadResult {
            config: Config {
                global,
                repo,
                global_path,
                repo_path,
            },
            warnings,
        })
    }

    /// Load global configuration from the search locations.
    fn load_global(
        search: &GlobalSearch,
        warnings: &mut Vec<ConfigWarning>,
    ) -> Result<(GlobalConfig, Option<PathBuf>), ConfigError> {
        // 1. $COMMITFLOW_CONFIG
        if let Some(path) = &search.explicit {
            if path.exists() {
                let config = read_config(path)?;
                return Ok((config, Some(path.clone())));
            }
            warnings.push(ConfigWarning {
                message: format!("{} points at a missing file, ignoring it", CONFIG_ENV_VAR),
                path: path.clone(),
            });
        }

        // 2. $XDG_CONFIG_HOME/commitflow/config.toml
        if let Some(xdg_home) = &search.xdg_config_home {
            let path = xdg_home.join("commitflow/config.toml");
            if path.exists() {
                let config = read_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        // 3. ~/.commitflow/config.toml
        if let Some(home) = &search.home {
            let path = home.join(".commitflow/config.toml");
            if path.exists() {
                let config = read_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        Ok((GlobalConfig::default(), None))
    }

    /// Load repository configuration from the git directory.
    fn load_repo(git_dir: &Path) -> Result<(Option<RepoConfig>, Option<PathBuf>), ConfigError> {
        let path = Self::repo_config_path(git_dir);
        if !path.exists() {
            return Ok((None, None));
        }
        let config = read_config(&path)?;
        Ok((Some(config), Some(path)))
    }

    /// Get the path for repo config inside a git directory.
    pub fn repo_config_path(git_dir: &Path) -> PathBuf {
        git_dir.join("commitflow/config.toml")
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Check if the flow should stop at the first failed step.
    ///
    /// Defaults to `false` (every step runs regardless).
    pub fn strict(&self) -> bool {
        self.repo
            .as_ref()
            .and_then(|r| r.strict)
            .or(self.global.strict)
            .unwrap_or(false)
    }

    /// Get the git executable to invoke.
    ///
    /// Defaults to `"git"`, resolved through `PATH`.
    pub fn git_program(&self) -> &str {
        self.repo
            .as_ref()
            .and_then(|r| r.git_program.as_deref())
            .or(self.global.git_program.as_deref())
            .unwrap_or("git")
    }

    /// Check if commit hooks should run.
    ///
    /// Defaults to `true` if not configured.
    pub fn verify_hooks(&self) -> bool {
        self.global.verify_hooks.unwrap_or(true)
    }

    /// Get the path to the loaded global config file.
    pub fn global_config_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Get the path to the loaded repo config file.
    pub fn repo_config_loaded_from(&self) -> Option<&Path> {
        self.repo_path.as_deref()
    }
}

/// Read and parse a TOML config file.
fn read_config<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn empty_search() -> GlobalSearch {
        GlobalSearch::default()
    }

    #[test]
    fn load_empty_defaults() {
        let result = Config::load_with(&empty_search(), None).unwrap();
        let config = result.config;

        assert!(!config.strict());
        assert_eq!(config.git_program(), "git");
        assert!(config.verify_hooks());
        assert!(config.global_config_loaded_from().is_none());
        assert!(config.repo_config_loaded_from().is_none());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn load_global_from_explicit_path() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.toml");
        fs::write(&config_path, "strict = true\nverify_hooks = false\n").unwrap();

        let search = GlobalSearch {
            explicit: Some(config_path.clone()),
            ..Default::default()
        };
        let result = Config::load_with(&search, None).unwrap();

        assert!(result.config.strict());
        assert!(!result.config.verify_hooks());
        assert_eq!(
            result.config.global_config_loaded_from(),
            Some(config_path.as_path())
        );
    }

    #[test]
    fn missing_explicit_path_warns_and_falls_through() {
        let temp = TempDir::new().unwrap();
        let xdg = temp.path().join("xdg");
        fs::create_dir_all(xdg.join("commitflow")).unwrap();
        fs::write(xdg.join("commitflow/config.toml"), "git_program = \"hub\"").unwrap();

        let search = GlobalSearch {
            explicit: Some(temp.path().join("nope.toml")),
            xdg_config_home: Some(xdg),
            home: None,
        };
        let result = Config::load_with(&search, None).unwrap();

        assert_eq!(result.config.git_program(), "hub");
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].message.contains(CONFIG_ENV_VAR));
    }

    #[test]
    fn xdg_wins_over_home() {
        let temp = TempDir::new().unwrap();
        let xdg = temp.path().join("xdg");
        let home = temp.path().join("home");
        fs::create_dir_all(xdg.join("commitflow")).unwrap();
        fs::create_dir_all(home.join(".commitflow")).unwrap();
        fs::write(xdg.join("commitflow/config.toml"), "strict = true").unwrap();
        fs::write(home.join(".commitflow/config.toml"), "strict = false").unwrap();

        let search = GlobalSearch {
            explicit: None,
            xdg_config_home: Some(xdg),
            home: Some(home),
        };
        let result = Config::load_with(&search, None).unwrap();
        assert!(result.config.strict());
    }

    #[test]
    fn home_fallback() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".commitflow")).unwrap();
        fs::write(
            temp.path().join(".commitflow/config.toml"),
            "verify_hooks = false",
        )
        .unwrap();

        let search = GlobalSearch {
            home: Some(temp.path().to_path_buf()),
            ..Default::default()
        };
        let result = Config::load_with(&search, None).unwrap();
        assert!(!result.config.verify_hooks());
    }

    #[test]
    fn load_repo_config() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("commitflow");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), "strict = true").unwrap();

        let result = Config::load_with(&empty_search(), Some(temp.path())).unwrap();

        assert!(result.config.strict());
        assert_eq!(
            result.config.repo_config_loaded_from(),
            Some(Config::repo_config_path(temp.path()).as_path())
        );
    }

    #[test]
    fn malformed_file_is_error() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.toml");
        fs::write(&config_path, "strict = = true").unwrap();

        let search = GlobalSearch {
            explicit: Some(config_path),
            ..Default::default()
        };
        let err = Config::load_with(&search, None).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn unknown_fields_rejected() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("commitflow");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), "strict = true\nremote = \"origin\"").unwrap();

        let result = Config::load_with(&empty_search(), Some(temp.path()));
        assert!(result.is_err());
    }

    #[test]
    fn invalid_value_rejected() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("commitflow");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), "git_program = \"\"").unwrap();

        let err = Config::load_with(&empty_search(), Some(temp.path())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn precedence_repo_overrides_global() {
        let config = Config {
            global: GlobalConfig {
                strict: Some(true),
                git_program: Some("/opt/git".to_string()),
                verify_hooks: None,
            },
            repo: Some(RepoConfig {
                strict: Some(false),
                git_program: None,
            }),
            global_path: None,
            repo_path: None,
        };

        assert!(!config.strict());
        // Unset repo values fall back to global
        assert_eq!(config.git_program(), "/opt/git");
    }
}

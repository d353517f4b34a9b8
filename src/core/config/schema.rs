//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$COMMITFLOW_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/commitflow/config.toml`
//! 3. `~/.commitflow/config.toml`
//!
//! # Repo Config
//!
//! Located at `.git/commitflow/config.toml`.
//!
//! # Validation
//!
//! Config values are validated after parsing; an empty `git_program` is
//! rejected because it can never be spawned.

use serde::Deserialize;

use super::ConfigError;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// strict = false
/// git_program = "git"
/// verify_hooks = true
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Abort the flow on the first failed git step
    pub strict: Option<bool>,

    /// Git executable to invoke
    pub git_program: Option<String>,

    /// Run commit hooks (false adds `--no-verify`)
    pub verify_hooks: Option<bool>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_git_program(self.git_program.as_deref())
    }
}

/// Repository configuration.
///
/// # Example
///
/// ```toml
/// strict = true
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RepoConfig {
    /// Abort the flow on the first failed git step
    pub strict: Option<bool>,

    /// Git executable to invoke
    pub git_program: Option<String>,
}

impl RepoConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_git_program(self.git_program.as_deref())
    }
}

fn validate_git_program(program: Option<&str>) -> Result<(), ConfigError> {
    if let Some(program) = program {
        if program.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "git_program cannot be empty".to_string(),
            ));
        }
    }
    Ok(())
}

//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/interact/interact.toml`
//! 3. Explicit config file (`--config <path>`)
//! 4. Environment variables: `INTERACT_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Default message printed once a session has ended.
pub const DEFAULT_EXIT_MESSAGE: &str = "The interaction has finished.";

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub exit_message: Option<String>,
    pub validate: Option<bool>,
    pub color: Option<bool>,
}

/// Unified configuration for interact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Printed after a session has ended
    pub exit_message: String,
    /// Check the whole tree for missing bodies before running it
    pub validate: bool,
    /// Colored status output (NO_COLOR still wins)
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            exit_message: DEFAULT_EXIT_MESSAGE.to_string(),
            validate: false,
            color: true,
        }
    }
}

/// Get the XDG config directory for interact.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "interact").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("interact.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            exit_message: overlay
                .exit_message
                .clone()
                .unwrap_or_else(|| self.exit_message.clone()),
            validate: overlay.validate.unwrap_or(self.validate),
            color: overlay.color.unwrap_or(self.color),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; must exist when given
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(path) = config_file {
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        Self::apply_env_overrides(current)
    }

    /// Apply INTERACT_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("INTERACT")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("exit_message") {
            settings.exit_message = val;
        }
        if let Ok(val) = config.get_bool("validate") {
            settings.validate = val;
        }
        if let Ok(val) = config.get_bool("color") {
            settings.color = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# interact configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/interact/interact.toml
#   Explicit: interact --config <path>
#   Env:      INTERACT_* environment variables (e.g. INTERACT_VALIDATE=true)

# Printed after a session has ended
# exit_message = "The interaction has finished."

# Check the whole interaction tree for menus or prompts without choices
# before the session starts
# validate = false

# Colored status output (NO_COLOR is honored regardless)
# color = true
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. Built-in defaults
//! 2. User config: `~/.config/categories/config.toml` (XDG) or platform config dir
//! 3. Project config: `.categories.toml`
//! 4. Environment variables: `CATEGORIES_*`
//!
//! ```toml
//! [output]
//! format = "json"
//!
//! [display]
//! icons = false
//! ```
//!
//! Nested keys map to env vars with `_` separators, e.g.
//! `CATEGORIES_OUTPUT_FORMAT=json`.

use std::ops::Deref;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Project config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".categories.toml";

/// Boxed wrapper for figment::Error to reduce Result size on the stack.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl Deref for ConfigError {
    type Target = figment::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// How command output is encoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per category.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Show category icons in text output.
    #[serde(default = "default_icons")]
    pub icons: bool,
}

fn default_icons() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            icons: default_icons(),
        }
    }
}

impl Config {
    /// Load config with layered resolution (defaults → user → project → env).
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment(&Self::user_config_path())
            .extract()
            .map_err(ConfigError::from)
    }

    /// The provider stack, with an explicit user config location.
    pub fn figment(user_config: &Path) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(user_config))
            .merge(Toml::file(PROJECT_CONFIG_FILE))
            .merge(Env::prefixed("CATEGORIES_").split("_"))
    }

    /// User config path: ~/.config/categories/config.toml (XDG) or platform config dir.
    fn user_config_path() -> PathBuf {
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home.join(".config").join("categories").join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }
        dirs::config_dir()
            .map(|p| p.join("categories").join("config.toml"))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use serial_test::serial;

    fn extract(jail: &Jail) -> Result<Config, figment::Error> {
        Config::figment(&jail.directory().join("user.toml")).extract()
    }

    #[test]
    #[serial]
    fn test_defaults_without_files() {
        Jail::expect_with(|jail| {
            let config = extract(jail)?;
            assert_eq!(config, Config::default());
            assert_eq!(config.output.format, OutputFormat::Text);
            assert!(config.display.icons);
            Ok(())
        });
    }

    #[test]
    #[serial]
    fn test_project_overrides_user() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "user.toml",
                r#"
                [output]
                format = "json"

                [display]
                icons = false
                "#,
            )?;
            jail.create_file(
                PROJECT_CONFIG_FILE,
                r#"
                [display]
                icons = true
                "#,
            )?;

            let config = extract(jail)?;
            assert_eq!(config.output.format, OutputFormat::Json);
            assert!(config.display.icons);
            Ok(())
        });
    }

    #[test]
    #[serial]
    fn test_env_overrides_files() {
        Jail::expect_with(|jail| {
            jail.create_file(
                PROJECT_CONFIG_FILE,
                r#"
                [output]
                format = "text"
                "#,
            )?;
            jail.set_env("CATEGORIES_OUTPUT_FORMAT", "json");

            let config = extract(jail)?;
            assert_eq!(config.output.format, OutputFormat::Json);
            Ok(())
        });
    }

    #[test]
    #[serial]
    fn test_invalid_format_is_error() {
        Jail::expect_with(|jail| {
            jail.set_env("CATEGORIES_OUTPUT_FORMAT", "yaml");
            assert!(extract(jail).is_err());
            Ok(())
        });
    }
}

//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the lanedrag application.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::feedback::FeedbackConfig;
use crate::persistence::{find_config_file, parse_config, read_config_file, write_config_file};

/// The main configuration struct for the lanedrag application.
///
/// # Examples
///
/// ```
/// use lanedrag_config::{Config, FeedbackConfig};
///
/// // Create a default config
/// let config = Config::default();
/// assert!(config.board_file.is_none());
/// assert!(config.mouse_capture);
///
/// // Create a custom config
/// let config = Config {
///     board_file: Some("board.json".into()),
///     feedback: FeedbackConfig::none(),
///     mouse_capture: false,
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where the board is stored.
    ///
    /// When unset, the application starts from the sample board and changes
    /// are not persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_file: Option<PathBuf>,

    /// Visual feedback for dragged cards.
    #[serde(default)]
    pub feedback: FeedbackConfig,

    /// Whether to capture mouse events from the terminal.
    ///
    /// Pointer dragging needs this. Turning it off leaves only the keyboard
    /// grab-and-move path, but restores the terminal's own text selection.
    #[serde(default = "default_mouse_capture")]
    pub mouse_capture: bool,
}

fn default_mouse_capture() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_file: None,
            feedback: FeedbackConfig::default(),
            mouse_capture: default_mouse_capture(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    ///
    /// This is equivalent to `Config::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./lanedrag.json5` or `./lanedrag.json`
    /// 2. User: `~/.config/lanedrag/config.json5` or `~/.config/lanedrag/config.json`
    ///
    /// If no configuration file is found, returns a default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use lanedrag_config::Config;
    ///
    /// # async fn example() -> lanedrag_config::Result<()> {
    /// let config = Config::load().await?;
    /// println!("Mouse capture: {}", config.mouse_capture);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load() -> Result<Self> {
        let Some(path) = find_config_file() else {
            debug!("no config file found, using defaults");
            return Ok(Self::default());
        };

        debug!(path = %path.display(), "loading config");
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| ConfigError::ReadFile {
                path: path.clone(),
                source,
            })?;

        let config: Config = parse_config(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use lanedrag_config::Config;
    ///
    /// # fn example() -> lanedrag_config::Result<()> {
    /// let config = Config::load_from("custom-config.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the drag feedback values are out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanedrag_config::{Config, FeedbackConfig};
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.feedback = FeedbackConfig { scale: 3.0, ..Default::default() };
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.feedback.validate()
    }
}

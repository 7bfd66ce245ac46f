//! Drag feedback configuration.
//!
//! While a card is being dragged it is drawn lifted off the board: dimmed,
//! slightly enlarged and with a drop shadow. This module holds the tunable
//! parts of that effect.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default opacity of a lifted card.
pub const DEFAULT_OPACITY: f32 = 0.8;

/// Default scale factor of a lifted card.
pub const DEFAULT_SCALE: f32 = 1.05;

/// Largest accepted scale factor.
pub const MAX_SCALE: f32 = 2.0;

/// Visual feedback applied to a card while it is dragged.
///
/// # Examples
///
/// ```
/// use lanedrag_config::FeedbackConfig;
///
/// let feedback = FeedbackConfig::default();
/// assert_eq!(feedback.opacity, 0.8);
/// assert_eq!(feedback.scale, 1.05);
/// assert!(feedback.shadow);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeedbackConfig {
    /// Opacity of the lifted card, in `(0, 1]`.
    #[serde(default = "default_opacity")]
    pub opacity: f32,

    /// Uniform scale of the lifted card, in `[1, 2]`.
    #[serde(default = "default_scale")]
    pub scale: f32,

    /// Whether the lifted card casts a shadow.
    #[serde(default = "default_shadow")]
    pub shadow: bool,
}

fn default_opacity() -> f32 {
    DEFAULT_OPACITY
}

fn default_scale() -> f32 {
    DEFAULT_SCALE
}

fn default_shadow() -> bool {
    true
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            opacity: DEFAULT_OPACITY,
            scale: DEFAULT_SCALE,
            shadow: true,
        }
    }
}

impl FeedbackConfig {
    /// Feedback that leaves the card looking exactly as it does at rest.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanedrag_config::FeedbackConfig;
    ///
    /// let flat = FeedbackConfig::none();
    /// assert!(flat.validate().is_ok());
    /// assert!(!flat.shadow);
    /// ```
    #[must_use]
    pub fn none() -> Self {
        Self {
            opacity: 1.0,
            scale: 1.0,
            shadow: false,
        }
    }

    /// Validates the feedback values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidFeedback`] if the opacity is outside
    /// `(0, 1]` or the scale is outside `[1, MAX_SCALE]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanedrag_config::FeedbackConfig;
    ///
    /// let feedback = FeedbackConfig { opacity: 0.0, ..Default::default() };
    /// assert!(feedback.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if !(self.opacity > 0.0 && self.opacity <= 1.0) {
            return Err(ConfigError::InvalidFeedback {
                reason: format!("opacity must be in (0, 1], got {}", self.opacity),
            });
        }

        if !(1.0..=MAX_SCALE).contains(&self.scale) {
            return Err(ConfigError::InvalidFeedback {
                reason: format!("scale must be in [1, {MAX_SCALE}], got {}", self.scale),
            });
        }

        Ok(())
    }
}

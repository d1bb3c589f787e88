//! Game configuration.
//!
//! The seat count is fixed; what a game can tune is how big the balloon is
//! and how large a single pump may be.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};

/// Pump limit used when no difficulty is chosen.
pub const DEFAULT_THRESHOLD: u32 = 10;

/// Complete game configuration.
///
/// ```
/// use balloon_pop::core::GameConfig;
///
/// let config = GameConfig::new().with_threshold(12).with_max_magnitude(3);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.threshold, 12);
/// assert_eq!(config.max_magnitude(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Accumulator value at which the acting slot is knocked out.
    pub threshold: u32,

    /// Largest magnitude a single action may carry. `None` follows the
    /// threshold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_magnitude: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            max_magnitude: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Pin the largest magnitude. Unset, it follows the threshold.
    #[must_use]
    pub fn with_max_magnitude(mut self, max: u32) -> Self {
        self.max_magnitude = Some(max);
        self
    }

    #[must_use]
    pub fn max_magnitude(&self) -> u32 {
        self.max_magnitude.unwrap_or(self.threshold)
    }

    /// Check the configuration can drive a game.
    pub fn validate(&self) -> Result<()> {
        if self.threshold == 0 {
            return Err(EngineError::InvalidConfig(
                "threshold must be positive".to_string(),
            ));
        }
        if self.max_magnitude() == 0 {
            return Err(EngineError::InvalidConfig(
                "max_magnitude must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Reject magnitudes outside `0..=max_magnitude`.
    pub fn check_magnitude(&self, magnitude: u32) -> Result<()> {
        let max = self.max_magnitude();
        if magnitude > max {
            return Err(EngineError::InvalidMagnitude {
                magnitude,
                max,
            });
        }
        Ok(())
    }
}

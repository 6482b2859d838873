//! Carousel configuration, read from the `carousel` section of the site
//! content document.

use serde::{Deserialize, Serialize};

use crate::carousel::ScrollBehavior;
use crate::error::{FolioError, FolioResult};

/// Default pixel step for the prev/next controls.
pub const DEFAULT_STEP_PX: f64 = 300.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Fixed pixel distance moved by one prev/next press
    pub step_px: f64,
    /// Animate navigation scrolls
    pub smooth: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            step_px: DEFAULT_STEP_PX,
            smooth: true,
        }
    }
}

impl CarouselConfig {
    pub fn behavior(&self) -> ScrollBehavior {
        if self.smooth {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Instant
        }
    }

    pub fn validate(&self) -> FolioResult<()> {
        if !self.step_px.is_finite() || self.step_px <= 0.0 {
            return Err(FolioError::InvalidContent(format!(
                "carousel step_px must be a positive number, got {}",
                self.step_px
            )));
        }
        Ok(())
    }
}

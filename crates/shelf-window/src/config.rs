#![forbid(unsafe_code)]

//! Window geometry configuration.
//!
//! [`WindowConfig`] groups the three knobs a list view is set up with. Behind
//! the `window-config` feature it can be loaded from TOML or JSON:
//!
//! ```toml
//! # listings.toml
//! item_height = 72.0
//! container_height = 640.0
//! overscan = 8
//! ```
//!
//! ```rust,ignore
//! let config = WindowConfig::from_toml_file("listings.toml")?;
//! ```
//!
//! Missing keys fall back to [`WindowConfig::default`]. Loaded values are
//! validated before they are returned.

#[cfg(feature = "window-config")]
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, ensure_positive};
use crate::window::{DEFAULT_OVERSCAN, VisibleRange, compute_visible_range, max_scroll_top};

/// Geometry of a virtualized list view.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WindowConfig {
    /// Height of every item, in any unit consistent with the other fields.
    pub item_height: f64,
    /// Height of the scrollable viewport.
    pub container_height: f64,
    /// Items materialized beyond each edge of the viewport.
    pub overscan: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            item_height: 48.0,
            container_height: 480.0,
            overscan: DEFAULT_OVERSCAN,
        }
    }
}

impl WindowConfig {
    /// Build a validated config.
    pub fn new(item_height: f64, container_height: f64, overscan: usize) -> Result<Self> {
        let config = Self {
            item_height,
            container_height,
            overscan,
        };
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Check both heights are finite and positive.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("item_height", self.item_height)?;
        ensure_positive("container_height", self.container_height)?;
        Ok(())
    }

    /// Window for `length` items at `scroll_top`.
    pub fn compute(&self, length: usize, scroll_top: f64) -> Result<VisibleRange> {
        compute_visible_range(
            length,
            self.item_height,
            self.container_height,
            scroll_top,
            self.overscan,
        )
    }

    #[must_use]
    pub fn max_scroll_top(&self, length: usize) -> f64 {
        max_scroll_top(length, self.item_height, self.container_height)
    }

    /// Items that fit fully or partially in an unscrolled viewport.
    #[must_use]
    pub fn items_per_viewport(&self) -> usize {
        (self.container_height / self.item_height).ceil() as usize
    }

    /// Parse and validate a TOML document.
    #[cfg(feature = "window-config")]
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    #[cfg(feature = "window-config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a JSON document.
    #[cfg(feature = "window-config")]
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty TOML.
    #[cfg(feature = "window-config")]
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

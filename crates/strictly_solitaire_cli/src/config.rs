//! Front-end configuration: deal seed and table geometry.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_solitaire::{FOUNDATION_PILES, TABLEAU_PILES};
use tracing::{debug, info, instrument};

/// Configuration for the solitaire front end.
#[derive(Debug, Clone, Default, Getters, Serialize, Deserialize)]
pub struct SolitaireConfig {
    /// Seed for the deal. A random seed is chosen when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Table geometry used for hit-testing.
    #[serde(default)]
    layout: LayoutConfig,
}

impl SolitaireConfig {
    /// Creates a configuration with default geometry.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            seed,
            layout: LayoutConfig::default(),
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.layout.validate()?;
        info!(seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Returns a copy with `seed` replaced when one is given.
    pub fn with_seed_override(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

/// Table geometry in logical units. Defaults match a 900×700 window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Table width. Every pile must fit inside it.
    width: i32,
    /// Table height. Every pile's first card must fit inside it.
    height: i32,
    /// Card width.
    card_width: i32,
    /// Card height.
    card_height: i32,
    /// Horizontal distance between neighbouring piles.
    pile_spacing: i32,
    /// Top edge of the stock, waste and foundation row.
    top_row_y: i32,
    /// Left edge of the stock.
    stock_x: i32,
    /// Left edge of the waste.
    waste_x: i32,
    /// Left edge of the first foundation.
    foundation_x: i32,
    /// Left edge of the first tableau pile.
    tableau_x: i32,
    /// Top edge of the tableau piles.
    tableau_y: i32,
    /// Vertical step between fanned tableau cards.
    fan_offset: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 700,
            card_width: 80,
            card_height: 120,
            pile_spacing: 100,
            top_row_y: 60,
            stock_x: 30,
            waste_x: 130,
            foundation_x: 500,
            tableau_x: 30,
            tableau_y: 230,
            fan_offset: 30,
        }
    }
}

/// Largest table width or height accepted.
pub const MAX_EXTENT: i32 = 100_000;

impl LayoutConfig {
    /// Rejects geometry that cannot be hit-tested.
    ///
    /// Every pile must fit inside the `width` x `height` table, which keeps
    /// all layout arithmetic well inside `i32`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !(1..=MAX_EXTENT).contains(&value) {
                return Err(ConfigError::new(format!(
                    "Table {} must be between 1 and {}, got {}",
                    name, MAX_EXTENT, value
                )));
            }
        }
        if self.card_width <= 0 || self.card_height <= 0 {
            return Err(ConfigError::new(format!(
                "Card size must be positive, got {}x{}",
                self.card_width, self.card_height
            )));
        }
        if self.fan_offset <= 0 || self.pile_spacing < self.card_width {
            return Err(ConfigError::new(format!(
                "Piles overlap: fan offset {} and pile spacing {} for card width {}",
                self.fan_offset, self.pile_spacing, self.card_width
            )));
        }
        if self.fan_offset > self.height {
            return Err(ConfigError::new(format!(
                "Fan offset {} exceeds table height {}",
                self.fan_offset, self.height
            )));
        }

        let rows = [
            ("stock", self.stock_x, 0),
            ("waste", self.waste_x, 0),
            ("foundation", self.foundation_x, FOUNDATION_PILES - 1),
            ("tableau", self.tableau_x, TABLEAU_PILES - 1),
        ];
        for (name, x, steps) in rows {
            let right = i64::from(x) + steps as i64 * i64::from(self.pile_spacing) + i64::from(self.card_width);
            if x < 0 || right > i64::from(self.width) {
                return Err(ConfigError::new(format!(
                    "{} piles span x {}..{}, outside table width {}",
                    name, x, right, self.width
                )));
            }
        }

        for (name, y) in [("top row", self.top_row_y), ("tableau", self.tableau_y)] {
            let bottom = i64::from(y) + i64::from(self.card_height);
            if y < 0 || bottom > i64::from(self.height) {
                return Err(ConfigError::new(format!(
                    "{} spans y {}..{}, outside table height {}",
                    name, y, bottom, self.height
                )));
            }
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

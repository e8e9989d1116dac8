//! YAML configuration for a run.
//!
//! Every field is optional; missing fields take the classic lesson values.
//!
//! ```yaml
//! pacing:
//!   speed_multiplier: 4.0
//! color: false
//! addition:
//!   eggs_have: 9
//!   eggs_new: 3
//! shopping:
//!   people: 4
//! ```

use crate::error::ConfigError;
use kidcalc_arith::{AdditionConfig, MultiplicationConfig, ShoppingConfig, SubtractionConfig};
use kidcalc_common::PacingConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest count (eggs, toys, bags, items, people) a lesson accepts.
pub const MAX_COUNT: i64 = 1000;

/// Largest price or discount, in baht.
pub const MAX_PRICE: f64 = 1_000_000.0;

/// Configuration for a run of the demos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunnerConfig {
    pub pacing: PacingConfig,
    /// Colour console lines by level.
    pub color: bool,
    pub addition: AdditionConfig,
    pub subtraction: SubtractionConfig,
    pub multiplication: MultiplicationConfig,
    pub shopping: ShoppingConfig,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        RunnerConfig {
            pacing: PacingConfig::default(),
            color: true,
            addition: AdditionConfig::default(),
            subtraction: SubtractionConfig::default(),
            multiplication: MultiplicationConfig::default(),
            shopping: ShoppingConfig::default(),
        }
    }
}

/// Command-line settings that take precedence over the file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub speed: Option<f64>,
    /// Skip wall-clock pauses.
    pub fast: bool,
    pub no_color: bool,
}

impl RunnerConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: RunnerConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&yaml)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Check pacing, and that every count is in `0..=MAX_COUNT` and every
    /// price in `0.0..=MAX_PRICE`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pacing.validate()?;

        let a = &self.addition;
        check_count("addition.eggs_have", a.eggs_have)?;
        check_count("addition.eggs_new", a.eggs_new)?;
        for (i, (x, y)) in a.examples.iter().enumerate() {
            check_count(&format!("addition.examples[{i}].0"), *x)?;
            check_count(&format!("addition.examples[{i}].1"), *y)?;
        }

        let s = &self.subtraction;
        check_count("subtraction.toys_at_home", s.toys_at_home)?;
        check_count("subtraction.toys_to_give", s.toys_to_give)?;
        check_count("subtraction.dolls", s.dolls)?;
        check_count("subtraction.robots", s.robots)?;
        check_count("subtraction.friends", s.friends)?;
        check_count("subtraction.toys_per_friend", s.toys_per_friend)?;
        check_count("subtraction.toys_available", s.toys_available)?;

        let m = &self.multiplication;
        check_count("multiplication.candies_per_bag", m.candies_per_bag)?;
        check_count("multiplication.strawberry_bags", m.strawberry_bags)?;
        check_count("multiplication.orange_bags", m.orange_bags)?;
        check_count("multiplication.grape_bags", m.grape_bags)?;
        check_count("multiplication.friends", m.friends)?;

        let sh = &self.shopping;
        for (i, product) in sh.products.iter().enumerate() {
            check_count(&format!("shopping.products[{i}].quantity"), product.quantity)?;
            check_price(&format!("shopping.products[{i}].unit_price"), product.unit_price)?;
        }
        check_price("shopping.discount", sh.discount)?;
        if !(0.0..=100.0).contains(&sh.vat_percent) {
            return Err(invalid("shopping.vat_percent", sh.vat_percent));
        }
        check_count("shopping.people", i64::from(sh.people))?;

        Ok(())
    }

    /// Apply command-line overrides and re-validate.
    pub fn apply(&mut self, overrides: &Overrides) -> Result<(), ConfigError> {
        if let Some(speed) = overrides.speed {
            self.pacing.speed_multiplier = speed;
        }
        if overrides.fast {
            self.pacing.enabled = false;
        }
        if overrides.no_color {
            self.color = false;
        }
        self.validate()
    }
}

fn invalid(field: &str, value: impl std::fmt::Display) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    }
}

fn check_count(field: &str, value: i64) -> Result<(), ConfigError> {
    if (0..=MAX_COUNT).contains(&value) {
        Ok(())
    } else {
        Err(invalid(field, value))
    }
}

// NaN fails the range check too.
fn check_price(field: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=MAX_PRICE).contains(&value) {
        Ok(())
    } else {
        Err(invalid(field, value))
    }
}

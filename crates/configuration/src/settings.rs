use crate::error::ConfigError;
use crate::messages::{Language, Messages};
use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub language: Language,
    pub inputs: InputDefaults,
    pub sampling: Sampling,
    pub advisory: AdvisoryParams,
    pub export: ExportSettings,
    pub logging: LoggingSettings,
    pub messages: Messages,
}

/// Starter values offered to the user before they type anything.
#[derive(Debug, Clone, Deserialize)]
pub struct InputDefaults {
    /// Selling price per item.
    pub price: f64,
    /// Cost incurred per item produced and sold.
    pub unit_cost: f64,
    /// Cost incurred regardless of quantity.
    pub fixed_cost: f64,
    /// Upper bound of the charted quantity range.
    pub max_quantity: f64,
    pub quantity_slider: QuantitySlider,
}

/// Range and granularity allowed for the maximum quantity input.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct QuantitySlider {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl QuantitySlider {
    /// True when `value` lies inside the slider range on one of its steps.
    pub fn accepts(&self, value: f64) -> bool {
        if !value.is_finite() || value < self.min || value > self.max {
            return false;
        }
        let steps = (value - self.min) / self.step;
        (steps - steps.round()).abs() < 1e-9
    }
}

/// Contains parameters for curve sampling.
#[derive(Debug, Clone, Deserialize)]
pub struct Sampling {
    pub num_points: usize,
}

/// Contains parameters for margin classification.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AdvisoryParams {
    /// Margin-to-price ratio below which a positive margin counts as thin (e.g., 0.15 for 15%).
    pub thin_margin_ratio: f64,
}

impl Default for AdvisoryParams {
    fn default() -> Self {
        Self {
            thin_margin_ratio: 0.15,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportSettings {
    /// Directory the CSV is written into.
    pub output_dir: PathBuf,
    /// Destination file name for the exported table.
    pub file_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is not set.
    pub level: String,
    /// When set, logs are also written to a file in this directory.
    #[serde(default)]
    pub directory: Option<PathBuf>,
    pub file_prefix: String,
}

impl Config {
    /// Checks the cross-field rules serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let inputs = &self.inputs;
        for (name, value) in [
            ("inputs.price", inputs.price),
            ("inputs.unit_cost", inputs.unit_cost),
            ("inputs.fixed_cost", inputs.fixed_cost),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        let slider = &inputs.quantity_slider;
        if !(slider.min > 0.0 && slider.min <= slider.max && slider.step > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "inputs.quantity_slider must satisfy 0 < min <= max and step > 0, got {:?}",
                slider
            )));
        }
        if !slider.accepts(inputs.max_quantity) {
            return Err(ConfigError::ValidationError(format!(
                "inputs.max_quantity {} is outside the quantity slider {:?}",
                inputs.max_quantity, slider
            )));
        }

        if self.sampling.num_points < 2 {
            return Err(ConfigError::ValidationError(
                "sampling.num_points must be at least 2".to_string(),
            ));
        }

        let ratio = self.advisory.thin_margin_ratio;
        if !(ratio > 0.0 && ratio < 1.0) {
            return Err(ConfigError::ValidationError(
                "advisory.thin_margin_ratio must be between 0 and 1".to_string(),
            ));
        }

        if self.export.file_name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "export.file_name must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLIDER: QuantitySlider = QuantitySlider {
        min: 100.0,
        max: 10_000.0,
        step: 100.0,
    };

    #[test]
    fn slider_accepts_steps_inside_range() {
        assert!(SLIDER.accepts(100.0));
        assert!(SLIDER.accepts(1000.0));
        assert!(SLIDER.accepts(10_000.0));
    }

    #[test]
    fn slider_rejects_off_step_and_out_of_range() {
        assert!(!SLIDER.accepts(150.0));
        assert!(!SLIDER.accepts(0.0));
        assert!(!SLIDER.accepts(10_100.0));
        assert!(!SLIDER.accepts(f64::NAN));
    }
}

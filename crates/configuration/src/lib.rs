use crate::error::ConfigError;
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat, Map};
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod messages;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use messages::{Language, MessageSet, Messages, TipMessages};
pub use settings::{
    AdvisoryParams, Config, ExportSettings, InputDefaults, LoggingSettings, QuantitySlider,
    Sampling,
};

/// Base name of the optional user configuration file (`businessgraph.toml`).
pub const DEFAULT_CONFIG_NAME: &str = "businessgraph";

/// Prefix of environment overrides, e.g. `BUSINESSGRAPH__SAMPLING__NUM_POINTS=200`.
pub const ENV_PREFIX: &str = "BUSINESSGRAPH";

const DEFAULTS: &str = include_str!("../defaults.toml");

/// Loads the application configuration.
///
/// Layers, lowest precedence first: the built-in defaults, an optional
/// `businessgraph.toml` in the working directory, then environment variables.
pub fn load_config() -> Result<Config, ConfigError> {
    let builder = defaults_builder()
        .add_source(File::with_name(DEFAULT_CONFIG_NAME).required(false))
        .add_source(environment(None));
    finish(builder)
}

/// Like [`load_config`], but the user file at `path` must exist.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let builder = defaults_builder()
        .add_source(File::from(path).required(true))
        .add_source(environment(None));
    finish(builder)
}

/// The built-in defaults alone, without any file or environment override.
pub fn load_defaults() -> Result<Config, ConfigError> {
    finish(defaults_builder())
}

fn defaults_builder() -> ConfigBuilder<DefaultState> {
    config::Config::builder().add_source(File::from_str(DEFAULTS, FileFormat::Toml))
}

/// Environment overrides; `source` replaces the process environment when given.
fn environment(source: Option<Map<String, String>>) -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
        .source(source)
}

fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Config, ConfigError> {
    // Attempt to deserialize the merged layers into our `Config` struct
    let config = builder.build()?.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!(language = %config.language, "Configuration loaded.");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::MarginTip;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_match_the_starter_values() {
        let config = load_defaults().unwrap();
        assert_eq!(config.language, Language::Kk);
        assert_eq!(config.inputs.price, 2000.0);
        assert_eq!(config.inputs.unit_cost, 1200.0);
        assert_eq!(config.inputs.fixed_cost, 400_000.0);
        assert_eq!(config.inputs.max_quantity, 1000.0);
        assert_eq!(config.sampling.num_points, 500);
        assert_eq!(config.advisory, AdvisoryParams::default());
        assert_eq!(config.export.file_name, "businessgraph_data.csv");
        assert!(config.logging.directory.is_none());
    }

    #[test]
    fn every_language_has_a_tip_for_every_category() {
        let config = load_defaults().unwrap();
        for language in [Language::Kk, Language::Ru] {
            let messages = config.messages.for_language(language);
            for tip in MarginTip::ALL {
                assert!(!messages.tip(tip).is_empty());
                assert!(!messages.render_advice(tip).contains("{tip}"));
            }
        }
    }

    #[test]
    fn break_even_template_renders_two_decimals() {
        let config = load_defaults().unwrap();
        let line = config.messages.for_language(Language::Ru).render_break_even(500.0);
        assert!(line.contains("500.00"));
        assert!(!line.contains("{x0}"));
    }

    #[test]
    fn user_file_overrides_defaults() {
        let file = write_config(
            "language = \"ru\"\n[advisory]\nthin_margin_ratio = 0.2\n[messages.ru.tips]\nthin_margin = \"custom\"\n",
        );
        let config = load_config_from(file.path()).unwrap();
        assert_eq!(config.language, Language::Ru);
        assert_eq!(config.advisory.thin_margin_ratio, 0.2);
        assert_eq!(config.messages.ru.tips.thin_margin, "custom");
        // Untouched keys keep their defaults.
        assert_eq!(config.inputs.price, 2000.0);
        assert!(!config.messages.ru.tips.healthy_margin.is_empty());
    }

    #[test]
    fn environment_variables_override_file_and_defaults() {
        let file = write_config("language = \"kk\"\n[advisory]\nthin_margin_ratio = 0.2\n");
        let mut vars = Map::new();
        vars.insert("BUSINESSGRAPH__LANGUAGE".to_string(), "ru".to_string());
        vars.insert(
            "BUSINESSGRAPH__ADVISORY__THIN_MARGIN_RATIO".to_string(),
            "0.25".to_string(),
        );
        vars.insert("BUSINESSGRAPH__SAMPLING__NUM_POINTS".to_string(), "200".to_string());
        vars.insert("OTHER_APP__SAMPLING__NUM_POINTS".to_string(), "7".to_string());

        let builder = defaults_builder()
            .add_source(File::from(file.path()).required(true))
            .add_source(environment(Some(vars)));
        let config = finish(builder).unwrap();

        assert_eq!(config.language, Language::Ru);
        assert_eq!(config.advisory.thin_margin_ratio, 0.25);
        assert_eq!(config.sampling.num_points, 200);
        assert_eq!(config.inputs.price, 2000.0);
    }

    #[test]
    fn invalid_environment_value_fails_validation() {
        let mut vars = Map::new();
        vars.insert("BUSINESSGRAPH__SAMPLING__NUM_POINTS".to_string(), "1".to_string());
        let builder = defaults_builder().add_source(environment(Some(vars)));
        assert!(matches!(finish(builder), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn invalid_values_fail_validation() {
        let file = write_config("[sampling]\nnum_points = 1\n");
        assert!(matches!(
            load_config_from(file.path()),
            Err(ConfigError::ValidationError(_))
        ));

        let file = write_config("[advisory]\nthin_margin_ratio = 1.5\n");
        assert!(matches!(
            load_config_from(file.path()),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn missing_required_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config_from(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
        let message = result.unwrap_err().to_string();
        assert!(message.starts_with("Failed to read BusinessGraph settings"), "{message}");
    }

    #[test]
    fn validation_errors_name_the_setting() {
        let mut vars = Map::new();
        vars.insert("BUSINESSGRAPH__SAMPLING__NUM_POINTS".to_string(), "1".to_string());
        let builder = defaults_builder().add_source(environment(Some(vars)));
        let message = finish(builder).unwrap_err().to_string();
        assert!(message.starts_with("Invalid BusinessGraph setting:"), "{message}");
        assert!(message.contains("num_points"), "{message}");
    }
}

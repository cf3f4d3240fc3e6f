use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// The only output format the hidden field supports.
pub const CANONICAL_FORMAT: &str = "hh:mm:ss";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub widget: WidgetConfig,
}

/// Settings handed to every field binding when it is created.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct WidgetConfig {
    /// Inputs carrying this class get a binding
    pub selector_class: String,
    pub output_format: String,
    /// Shown as the native validation message when parsing fails
    pub invalid_message: String,
    pub suggestion_class: String,
    pub dropdown_menu_class: String,
    pub dropdown_container_class: String,
    /// Parse and normalize the field's initial value on load
    pub auto_parse_on_load: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            selector_class: "duration-input".to_string(),
            output_format: CANONICAL_FORMAT.to_string(),
            invalid_message: "Please enter a valid duration".to_string(),
            suggestion_class: "duration-suggestion".to_string(),
            dropdown_menu_class: "duration-dropdown-menu".to_string(),
            dropdown_container_class: "duration-dropdown".to_string(),
            auto_parse_on_load: true,
        }
    }
}

impl WidgetConfig {
    /// Validate widget configuration
    pub fn validate(&self) -> Result<()> {
        if !self.output_format.eq_ignore_ascii_case(CANONICAL_FORMAT) {
            anyhow::bail!(
                "Unsupported output format '{}', expected '{}'",
                self.output_format,
                CANONICAL_FORMAT
            );
        }

        if self.invalid_message.trim().is_empty() {
            anyhow::bail!("Invalid message must not be empty");
        }

        let classes = [
            ("selector_class", &self.selector_class),
            ("suggestion_class", &self.suggestion_class),
            ("dropdown_menu_class", &self.dropdown_menu_class),
            ("dropdown_container_class", &self.dropdown_container_class),
        ];
        for (key, class) in classes {
            if class.trim().is_empty() || class.contains(char::is_whitespace) {
                anyhow::bail!("Invalid class name for {}: '{}'", key, class);
            }
        }

        Ok(())
    }
}

impl Config {
    /// Validate all configuration
    pub fn validate(&self) -> Result<()> {
        self.widget.validate()?;
        Ok(())
    }
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let loader = ConfigBuilder::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .build()
        .context("Failed to build config loader")?;

    loader
        .try_deserialize()
        .context("Failed to parse config file")
}

/// Load configuration from an explicit path, or from the first config file
/// found in the usual locations. Defaults apply when no file exists.
pub fn load(override_path: Option<&Path>) -> Result<Config> {
    let config = match override_path {
        Some(path) => load_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => match crate::platform::find_config_file() {
            Some(path) => {
                debug!(path = %path.display(), "loading config");
                load_from_path(&path)
                    .with_context(|| format!("Failed to load config from {}", path.display()))?
            }
            None => {
                warn!("no config file found, using defaults");
                Config::default()
            }
        },
    };

    config.validate()?;

    Ok(config)
}

pub fn save_to_path<P: AsRef<Path>>(config: &Config, path: P) -> Result<()> {
    let toml_string = toml::to_string_pretty(config).context("Failed to serialize config")?;

    std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

    Ok(())
}

use crate::config::{Config, save_to_path};
use crate::platform::{APP_DIR, CONFIG_FILE};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub fn list(config: &Config) -> Result<()> {
    let toml_str = toml::to_string_pretty(config).context("Failed to serialize config")?;
    println!("{}", toml_str);
    Ok(())
}

pub fn get(key: &str, config: &Config) -> Result<()> {
    println!("{}", lookup(key, config)?);
    Ok(())
}

/// Resolve a dotted key such as `widget.invalid_message`.
pub fn lookup(key: &str, config: &Config) -> Result<String> {
    let value = serde_json::to_value(config).context("Failed to serialize config")?;

    let mut current = &value;
    for part in key.split('.') {
        current = current
            .get(part)
            .with_context(|| format!("Key not found: {}", part))?;
    }

    Ok(match current {
        serde_json::Value::String(s) => s.clone(),
        v => v.to_string(),
    })
}

/// Write the default configuration, refusing to overwrite an existing file.
pub fn init(path: Option<&Path>) -> Result<PathBuf> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => home::home_dir()
            .context("Could not find home directory")?
            .join(APP_DIR)
            .join(CONFIG_FILE),
    };

    if path.exists() {
        anyhow::bail!("Config file already exists: {}", path.display());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    save_to_path(&Config::default(), &path)?;
    println!("Wrote default config to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_lookup_nested_key() {
        let config = Config::default();
        assert_eq!(
            lookup("widget.selector_class", &config).unwrap(),
            "duration-input"
        );
        assert_eq!(lookup("widget.auto_parse_on_load", &config).unwrap(), "true");
    }

    #[test]
    fn test_lookup_missing_key() {
        let err = lookup("widget.nope", &Config::default()).unwrap_err();
        assert!(err.to_string().contains("Key not found: nope"));
    }

    #[test]
    fn test_init_writes_once() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        assert_eq!(init(Some(&path)).unwrap(), path);
        assert!(path.exists());
        assert!(init(Some(&path)).is_err());
    }
}

use std::io::ErrorKind;
use std::path::PathBuf;

use eyre::Result;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub default_lang: Option<String>,
    pub default_model: Option<String>,
}

impl Config {
    /// Read ~/.config/ytsum/config.toml; a missing file means built-in
    /// defaults, any other read failure is an error
    pub fn load() -> Result<Self> {
        let path = config_path();
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                debug!("Config file: {}", path.display());
                Self::parse(&content)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No config file at {}, using built-in defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        match (&config.default_lang, &config.default_model) {
            (None, None) => debug!("Config file sets no defaults"),
            (lang, model) => debug!("Config defaults: lang={lang:?} model={model:?}"),
        }
        Ok(config)
    }
}

pub fn config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from(".config"));
    base.join("ytsum").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let config = Config::parse(
            "default_lang = \"es\"\ndefault_model = \"gemini-2.5-pro\"\n",
        )
        .unwrap();
        assert_eq!(config.default_lang.as_deref(), Some("es"));
        assert_eq!(config.default_model.as_deref(), Some("gemini-2.5-pro"));
    }

    #[test]
    fn test_empty_config_sets_nothing() {
        let config = Config::parse("").unwrap();
        assert!(config.default_lang.is_none());
        assert!(config.default_model.is_none());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::parse(r#"default_lang = "fr""#).unwrap();
        assert_eq!(config.default_lang.as_deref(), Some("fr"));
        assert!(config.default_model.is_none());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config = Config::parse(r#"default_format = "json""#).unwrap();
        assert!(config.default_lang.is_none());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(Config::parse("default_lang = [").is_err());
    }
}

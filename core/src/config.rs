use crate::errors::GeminiResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration struct for the Gemini-backed readings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model_name: Option<String>,
    pub system_prompt: Option<String>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model_name: Some("gemini-2.0-flash".to_string()),
            system_prompt: Some(
                "You are AstroMaestro AI, a wise and compassionate guide to astrology, \
                 numerology, tarot and related mystical knowledge. Answer follow-up \
                 questions about the user's readings with warmth and insight, and format \
                 longer answers with Markdown."
                    .to_string(),
            ),
        }
    }
}

impl GeminiConfig {
    /// Loads configuration from a file if it exists, otherwise returns the default config
    pub fn load_from_file(path: &Path) -> GeminiResult<Self> {
        if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| {
                crate::errors::GeminiError::ConfigError(format!(
                    "Failed to read config file: {}",
                    e
                ))
            })?;

            let config: Self = toml::from_str(&content).map_err(|e| {
                crate::errors::GeminiError::ConfigError(format!(
                    "Failed to parse config file: {}",
                    e
                ))
            })?;

            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves configuration to a file
    pub fn save_to_file(&self, path: &Path) -> GeminiResult<()> {
        let content = toml::to_string(self).map_err(|e| {
            crate::errors::GeminiError::ConfigError(format!("Failed to serialize config: {}", e))
        })?;

        // Ensure the directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                crate::errors::GeminiError::ConfigError(format!(
                    "Failed to create config directory: {}",
                    e
                ))
            })?;
        }

        fs::write(path, content).map_err(|e| {
            crate::errors::GeminiError::ConfigError(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Merges this config with another config, preferring values from the other config if present
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            api_key: other.api_key.clone().or_else(|| self.api_key.clone()),
            model_name: other.model_name.clone().or_else(|| self.model_name.clone()),
            system_prompt: other
                .system_prompt
                .clone()
                .or_else(|| self.system_prompt.clone()),
        }
    }
}

/// Helper function to get default config directory
pub fn get_default_config_dir(app_name: &str) -> GeminiResult<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        crate::errors::GeminiError::ConfigError("Could not determine home directory".to_string())
    })?;

    let config_dir = home_dir.join(".config").join(app_name);

    Ok(config_dir)
}

/// Helper function to get default config file path
pub fn get_default_config_file(app_name: &str) -> GeminiResult<PathBuf> {
    let config_dir = get_default_config_dir(app_name)?;
    Ok(config_dir.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let config = GeminiConfig::load_from_file(&path).unwrap();
        assert!(config.api_key.is_none());
        assert_eq!(config.model_name.as_deref(), Some("gemini-2.0-flash"));
        assert!(config.system_prompt.is_some());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = GeminiConfig {
            api_key: Some("test-key".to_string()),
            model_name: Some("gemini-2.0-flash".to_string()),
            system_prompt: Some("Be mystical.".to_string()),
        };
        config.save_to_file(&path).unwrap();

        let loaded = GeminiConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.api_key.as_deref(), Some("test-key"));
        assert_eq!(loaded.system_prompt.as_deref(), Some("Be mystical."));
    }

    #[test]
    fn merge_prefers_other_values() {
        let base = GeminiConfig {
            api_key: Some("base-key".to_string()),
            model_name: Some("gemini-2.0-flash".to_string()),
            system_prompt: Some("base".to_string()),
        };
        let other = GeminiConfig {
            api_key: Some("other-key".to_string()),
            model_name: None,
            system_prompt: None,
        };

        let merged = base.merge(&other);
        assert_eq!(merged.api_key.as_deref(), Some("other-key"));
        assert_eq!(merged.model_name.as_deref(), Some("gemini-2.0-flash"));
        assert_eq!(merged.system_prompt.as_deref(), Some("base"));
    }
}

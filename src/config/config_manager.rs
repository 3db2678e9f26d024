use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_SERVER_PORT_RANGE_END, SAMPLE_CONFIG};
use crate::errors::{CodeGuardError, CodeGuardResult};
use crate::structs::config::config::Config;

const SUPPORTED_PROVIDERS: &[&str] = &["anthropic", "openai", "gemini", "googleai"];

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_config_path() -> CodeGuardResult<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| CodeGuardError::system_error("locating config", "home directory is not available"))
    }

    /// Load from `path`, or from the default location. A missing file means defaults.
    pub fn load(path: Option<&Path>) -> CodeGuardResult<Config> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> CodeGuardResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| CodeGuardError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| CodeGuardError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.message().to_string(),
        })
    }

    pub fn create_sample_config(path: &Path) -> CodeGuardResult<()> {
        if path.exists() {
            return Err(CodeGuardError::config_error(
                &format!("Config already exists at {}", path.display()),
                None,
                Some("Edit the existing file or remove it first"),
            ));
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, SAMPLE_CONFIG)?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        let provider = config.ai.provider.trim().to_ascii_lowercase();
        if !SUPPORTED_PROVIDERS.contains(&provider.as_str()) {
            errors.push(format!(
                "Unknown AI provider '{}' (expected one of: anthropic, openai, gemini)",
                config.ai.provider
            ));
        }

        if config.ai.max_tokens == 0 {
            errors.push("ai.max_tokens must be greater than zero".to_string());
        }

        if !(0.0..=2.0).contains(&config.ai.temperature) {
            errors.push(format!("ai.temperature must be between 0.0 and 2.0, got {}", config.ai.temperature));
        }

        if let Some(model) = &config.ai.model {
            if model.trim().is_empty() {
                errors.push("ai.model must not be empty when set".to_string());
            }
        }

        if config.server.host.trim().is_empty() {
            errors.push("server.host must not be empty".to_string());
        }

        if config.server.port == Some(0) {
            errors.push(format!(
                "server.port must be a real port; leave it unset to pick one up to {}",
                DEFAULT_SERVER_PORT_RANGE_END
            ));
        }

        if config.ai.api_key_env.as_deref().is_some_and(|env| env.trim().is_empty()) {
            errors.push("ai.api_key_env must name an environment variable".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ConfigManager::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.ai.provider, "anthropic");
        assert_eq!(config.server.port, None);
    }

    #[test]
    fn sample_config_round_trips_and_validates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("codeguard").join("config.toml");

        ConfigManager::create_sample_config(&path).unwrap();
        let config = ConfigManager::load_from(&path).unwrap();

        assert_eq!(config.ai.api_key_env.as_deref(), Some("ANTHROPIC_API_KEY"));
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(ConfigManager::validate_config(&config).is_ok());
    }

    #[test]
    fn refuses_to_overwrite_existing_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ai]\n").unwrap();

        assert!(ConfigManager::create_sample_config(&path).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "[ai]\n");
    }

    #[test]
    fn partial_sections_fall_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ai]\nprovider = \"openai\"\n\n[server]\nport = 9000\n").unwrap();

        let config = ConfigManager::load_from(&path).unwrap();
        assert_eq!(config.ai.provider, "openai");
        assert_eq!(config.ai.max_tokens, 4096);
        assert_eq!(config.server.port, Some(9000));
    }

    #[test]
    fn invalid_toml_is_a_file_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ai\nprovider =").unwrap();

        let error = ConfigManager::load_from(&path).unwrap_err();
        assert!(matches!(error, CodeGuardError::ConfigurationFileError { .. }));
    }

    #[test]
    fn validation_collects_every_problem() {
        let mut config = Config::default();
        config.ai.provider = "llama".to_string();
        config.ai.temperature = 5.0;
        config.server.port = Some(0);

        let errors = ConfigManager::validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("llama"));
    }
}

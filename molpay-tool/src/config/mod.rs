//! Configuration module for molpay-tool.
//!
//! Handles loading configuration from a TOML file and applying CLI and
//! environment variable overrides before handing the result to the builder.

pub mod file;

use crate::config::file::FileConfig;
use molpay_sdk::{
    ClientKey, ConfigurationBuilder, ConfigurationError, Environment, HostContext, Locale,
    MolpayConfiguration, MolpayConfigurationBuilder,
};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),
}

/// Values given on the command line, taking precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub shopper_locale: Option<Locale>,
    pub environment: Option<Environment>,
    pub client_key: Option<String>,
}

/// Configuration loader that handles the complete loading process.
pub struct ConfigLoader {
    config_path: std::path::PathBuf,
    overrides: Overrides,
}

impl ConfigLoader {
    /// Create a new config loader.
    pub fn new(config_path: impl AsRef<Path>, overrides: Overrides) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
            overrides,
        }
    }

    /// Read the TOML file and apply overrides.
    ///
    /// A missing file is not an error when the overrides alone can supply
    /// the required fields; the builder reports what is still absent.
    pub fn load(&self) -> Result<FileConfig, ConfigError> {
        let mut file_config = match std::fs::read_to_string(&self.config_path) {
            Ok(content) => toml::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("{:?} not found, using overrides only", self.config_path);
                FileConfig::default()
            }
            Err(e) => return Err(e.into()),
        };

        let molpay = &mut file_config.molpay;
        if let Some(locale) = self.overrides.shopper_locale.clone() {
            molpay.shopper_locale = Some(locale);
        }
        if let Some(environment) = self.overrides.environment {
            molpay.environment = Some(environment);
        }
        if let Some(client_key) = self.overrides.client_key.clone() {
            molpay.client_key = Some(client_key);
        }

        Ok(file_config)
    }

    /// Load the file and turn it into a configuration builder.
    pub fn builder(&self, context: &impl HostContext) -> Result<MolpayConfigurationBuilder, ConfigError> {
        let molpay = self.load()?.molpay;
        Ok(MolpayConfigurationBuilder::from_parts(
            molpay.shopper_locale,
            molpay.environment,
            molpay.client_key.map(ClientKey::from),
            context,
        ))
    }

    /// Load the file and build the configuration.
    ///
    /// With `strict`, the client key must also match the environment.
    pub fn build(
        &self,
        context: &impl HostContext,
        strict: bool,
    ) -> Result<MolpayConfiguration, ConfigError> {
        let builder = self.builder(context)?;
        let configuration = if strict {
            builder.build_checked()?
        } else {
            builder.build()?
        };
        Ok(configuration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use molpay_sdk::{ClientKeyError, Configuration, FixedContext};

    fn write_config(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "molpay-tool-{}-{name}.toml",
            std::process::id()
        ));
        std::fs::write(&path, content).unwrap();
        path
    }

    fn context() -> FixedContext {
        FixedContext(Locale::parse("ms-MY").unwrap())
    }

    #[test]
    fn test_overrides_win() {
        let path = write_config(
            "overrides",
            "[molpay]\nenvironment = \"test\"\nclient_key = \"abc123\"\n",
        );
        let loader = ConfigLoader::new(
            &path,
            Overrides {
                environment: Some(Environment::India),
                ..Overrides::default()
            },
        );
        let configuration = loader.build(&context(), false).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(configuration.environment(), Environment::India);
        assert_eq!(configuration.client_key().as_str(), "abc123");
        assert_eq!(configuration.shopper_locale().as_str(), "ms-MY");
    }

    #[test]
    fn test_missing_file_uses_overrides() {
        let loader = ConfigLoader::new(
            std::env::temp_dir().join("molpay-tool-does-not-exist.toml"),
            Overrides {
                shopper_locale: Some(Locale::parse("vi-VN").unwrap()),
                environment: Some(Environment::Test),
                client_key: Some("abc123".to_string()),
            },
        );
        let configuration = loader.build(&context(), false).unwrap();
        assert_eq!(configuration.shopper_locale().as_str(), "vi-VN");
    }

    #[test]
    fn test_missing_client_key_fails_at_build() {
        let path = write_config("no-key", "[molpay]\nenvironment = \"test\"\n");
        let loader = ConfigLoader::new(&path, Overrides::default());
        let result = loader.build(&context(), false);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(
            result,
            Err(ConfigError::Configuration(ConfigurationError::MissingClientKey))
        ));
    }

    #[test]
    fn test_strict_build_rejects_mismatched_key() {
        let path = write_config(
            "strict",
            "[molpay]\nenvironment = \"apse\"\nclient_key = \"test_qwertyuiopasdfghjklzxcvbnmqwerty\"\n",
        );
        let loader = ConfigLoader::new(&path, Overrides::default());
        let strict = loader.build(&context(), true);
        let lenient = loader.build(&context(), false);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(
            strict,
            Err(ConfigError::Configuration(ConfigurationError::InvalidClientKey(
                ClientKeyError::EnvironmentMismatch {
                    environment: Environment::Apse
                }
            )))
        ));
        assert!(lenient.is_ok());
    }

    #[test]
    fn test_parse_error() {
        let path = write_config("broken", "[molpay\n");
        let loader = ConfigLoader::new(&path, Overrides::default());
        let result = loader.load();
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}

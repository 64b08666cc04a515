use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;
use validator::{Validate, ValidationError};

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("Parse error for {field}: {value} - {source}")]
    Parse {
        field: String,
        value: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Rendering configuration carried by every `Environment`
#[derive(Clone, Debug, PartialEq, Validate, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Stem of generated parameter placeholders (`param` gives `$param0`)
    #[validate(
        length(min = 1, message = "Parameter prefix cannot be empty"),
        custom(function = "validate_prefix")
    )]
    pub param_prefix: String,

    /// Prepended to every generated placeholder, used to keep parameters of
    /// separately built sub-statements apart (`update_` gives `$update_param0`)
    #[validate(custom(function = "validate_prefix"))]
    pub global_prefix: String,

    /// Indentation of padded blocks (SET items, CALL bodies, CASE branches)
    #[validate(range(max = 16, message = "Indent width must be between 0 and 16"))]
    pub indent_width: usize,

    /// Render integers beyond ±(2^53 - 1) as `toInteger("...")`
    pub big_int_literals: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            param_prefix: "param".to_string(),
            global_prefix: String::new(),
            indent_width: 4,
            big_int_literals: true,
        }
    }
}

impl BuildConfig {
    /// Create configuration from environment variables with validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            param_prefix: env::var("CYPHERGEN_PARAM_PREFIX").unwrap_or_else(|_| "param".to_string()),
            global_prefix: env::var("CYPHERGEN_GLOBAL_PREFIX").unwrap_or_default(),
            indent_width: parse_env_var("CYPHERGEN_INDENT_WIDTH", "4")?,
            big_int_literals: parse_env_var("CYPHERGEN_BIG_INT_LITERALS", "true")?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Create configuration from YAML file
    pub fn from_yaml_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Parse {
            field: "yaml_file".to_string(),
            value: "file read failed".to_string(),
            source: Box::new(e),
        })?;

        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
            field: "yaml_content".to_string(),
            value: content,
            source: Box::new(e),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Same configuration with a different global placeholder prefix
    pub fn with_global_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.global_prefix = prefix.into();
        self
    }
}

/// Prefixes end up inside placeholder names, so they must stay plain identifier text
fn validate_prefix(value: &str) -> Result<(), ValidationError> {
    if value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(())
    } else {
        let mut err = ValidationError::new("invalid_prefix");
        err.message = Some("Prefixes may only contain ASCII letters, digits and '_'".into());
        Err(err)
    }
}

/// Parse an environment variable with a default value
fn parse_env_var<T: std::str::FromStr>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = env::var(key).unwrap_or_else(|_| default.to_string());
    value.parse().map_err(|e| ConfigError::Parse {
        field: key.to_string(),
        value,
        source: Box::new(e),
    })
}

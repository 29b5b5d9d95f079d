//! CLI configuration management
//!
//! Resolves the output settings and the API credential once per invocation.
//! The resolved [`CliConfig`] is handed to the command layer, so command
//! bodies never read the environment themselves.

use my_package_core::{Credential, ItemError, API_KEY_VAR, DEFAULT_LIMIT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CliError, CliResult};
use crate::format::OutputFormat;

/// Environment variable overriding the output format
pub const ENV_FORMAT: &str = "MY_PACKAGE_FORMAT";
/// Environment variable overriding the verbose flag
pub const ENV_VERBOSE: &str = "MY_PACKAGE_VERBOSE";
/// Environment variable overriding the default `list` limit
pub const ENV_LIMIT: &str = "MY_PACKAGE_LIMIT";

/// CLI configuration
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CliConfig {
    /// Output format
    pub output_format: OutputFormat,

    /// Enable debug logging
    pub verbose: bool,

    /// Default `list` limit when `--limit` is not given
    pub limit: usize,

    /// Config file that was consulted, if any
    pub config_path: Option<PathBuf>,

    /// API credential from `API_KEY`
    #[serde(skip)]
    pub api_key: Option<Credential>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Json,
            verbose: false,
            limit: DEFAULT_LIMIT,
            config_path: None,
            api_key: None,
        }
    }
}

/// On-disk representation; every key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub output_format: Option<OutputFormat>,
    pub verbose: Option<bool>,
    pub limit: Option<usize>,
}

impl ConfigFile {
    /// Load a config file. `Ok(None)` when the file does not exist.
    pub fn load(path: &Path) -> CliResult<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content)
            .map(Some)
            .map_err(|e| CliError::Config(format!("failed to parse {}: {}", path.display(), e)))
    }
}

impl CliConfig {
    /// Create a new builder for constructing configuration
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Default config file location: `$XDG_CONFIG_HOME/my-package/config.toml`.
    ///
    /// `None` when the platform has no config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("my-package").join("config.toml"))
    }

    /// The resolved credential, or `ENV_MISSING`
    pub fn credential(&self) -> Result<&Credential, ItemError> {
        self.api_key.as_ref().ok_or_else(ItemError::missing_api_key)
    }
}

/// Builder for CLI configuration
///
/// Sources are applied in priority order (lowest first), each one
/// overriding what the previous set:
/// 1. Defaults
/// 2. Config file
/// 3. Environment variables
/// 4. CLI arguments
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    output_format: Option<OutputFormat>,
    verbose: Option<bool>,
    limit: Option<usize>,
    config_path: Option<PathBuf>,
    api_key: Option<Credential>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    /// Set verbose flag
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    /// Set the default `list` limit
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the credential directly
    pub fn with_credential(mut self, credential: Credential) -> Self {
        self.api_key = Some(credential);
        self
    }

    /// Load values from a config file.
    ///
    /// A missing file is skipped unless `required` is set; a file that
    /// exists but cannot be parsed is always an error.
    pub fn with_config_file(mut self, path: &Path, required: bool) -> CliResult<Self> {
        let file = match ConfigFile::load(path)? {
            Some(file) => file,
            None if required => {
                return Err(CliError::Config(format!(
                    "config file {} does not exist",
                    path.display()
                )));
            }
            None => return Ok(self),
        };

        self.config_path = Some(path.to_path_buf());
        if let Some(format) = file.output_format {
            self.output_format = Some(format);
        }
        if let Some(verbose) = file.verbose {
            self.verbose = Some(verbose);
        }
        if let Some(limit) = file.limit {
            self.limit = Some(limit);
        }

        Ok(self)
    }

    /// Load the config file from an explicit path, or else from the default
    /// location. An explicit path must exist; the default one may be absent,
    /// and no default location at all means no file.
    pub fn with_config_location(
        self,
        explicit: Option<&Path>,
        default: Option<&Path>,
    ) -> CliResult<Self> {
        match (explicit, default) {
            (Some(path), _) => self.with_config_file(path, true),
            (None, Some(path)) => self.with_config_file(path, false),
            (None, None) => Ok(self),
        }
    }

    /// Apply environment variable overrides, including `API_KEY`.
    ///
    /// Values that fail to parse are ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(format) = std::env::var(ENV_FORMAT) {
            if let Ok(format) = format.parse() {
                self.output_format = Some(format);
            }
        }

        if let Ok(verbose) = std::env::var(ENV_VERBOSE) {
            match verbose.trim().to_lowercase().as_str() {
                "true" | "1" => self.verbose = Some(true),
                "false" | "0" => self.verbose = Some(false),
                _ => {}
            }
        }

        if let Ok(limit) = std::env::var(ENV_LIMIT) {
            if let Ok(limit) = limit.trim().parse() {
                self.limit = Some(limit);
            }
        }

        if let Ok(key) = std::env::var(API_KEY_VAR) {
            if let Some(credential) = Credential::new(key) {
                self.api_key = Some(credential);
            }
        }

        self
    }

    /// Build the final configuration
    pub fn build(self) -> CliConfig {
        let defaults = CliConfig::default();

        CliConfig {
            output_format: self.output_format.unwrap_or(defaults.output_format),
            verbose: self.verbose.unwrap_or(defaults.verbose),
            limit: self.limit.unwrap_or(defaults.limit),
            config_path: self.config_path,
            api_key: self.api_key,
        }
    }
}

//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Values stay as plain strings and numbers until [`FileConfig::validate`]
//! and the conversion helpers turn them into domain types.

use council_application::{DEFAULT_DISPATCH_TIMEOUT, EngineParams};
use council_domain::{ProfileRef, ValidatorId};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("committee_size cannot be 0")]
    InvalidCommitteeSize,

    #[error("dispatch_timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("feedback_delimiter cannot be empty")]
    EmptyDelimiter,

    #[error("council.admin is not configured")]
    MissingAdmin,

    #[error("invalid address {address:?}: {reason}")]
    InvalidAddress { address: String, reason: String },
}

/// Raw council configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCouncilConfig {
    /// Identity allowed to run administrative operations
    pub admin: Option<String>,
    /// Default committee size
    pub committee_size: usize,
    /// Separator between member feedback texts
    pub feedback_delimiter: String,
    /// Bound on each external store call
    pub dispatch_timeout_seconds: u64,
}

impl Default for FileCouncilConfig {
    fn default() -> Self {
        Self {
            admin: None,
            committee_size: 3,
            feedback_delimiter: "|".to_string(),
            dispatch_timeout_seconds: DEFAULT_DISPATCH_TIMEOUT.as_secs(),
        }
    }
}

/// Raw sortition configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSortitionConfig {
    /// Fixed seed for reproducible draws; OS entropy when unset
    pub seed: Option<u64>,
}

/// Raw journal configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileJournalConfig {
    /// JSONL file receiving lifecycle events; disabled when unset
    pub path: Option<PathBuf>,
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// One `[[validators]]` entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileValidatorEntry {
    pub address: String,
    #[serde(default)]
    pub profile: String,
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Council settings
    pub council: FileCouncilConfig,
    /// Sortition settings
    pub sortition: FileSortitionConfig,
    /// Journal settings
    pub journal: FileJournalConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Validators registered at startup
    pub validators: Vec<FileValidatorEntry>,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.council.committee_size == 0 {
            return Err(ConfigValidationError::InvalidCommitteeSize);
        }

        if self.council.dispatch_timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.council.feedback_delimiter.is_empty() {
            return Err(ConfigValidationError::EmptyDelimiter);
        }

        if self.council.admin.is_some() {
            self.admin()?;
        }
        self.validators()?;

        Ok(())
    }

    /// The configured administrator; there is no built-in default
    pub fn admin(&self) -> Result<ValidatorId, ConfigValidationError> {
        match &self.council.admin {
            Some(raw) => parse_address(raw),
            None => Err(ConfigValidationError::MissingAdmin),
        }
    }

    /// Startup validators as typed identities
    pub fn validators(&self) -> Result<Vec<(ValidatorId, ProfileRef)>, ConfigValidationError> {
        self.validators
            .iter()
            .map(|entry| {
                Ok((
                    parse_address(&entry.address)?,
                    ProfileRef::new(entry.profile.clone()),
                ))
            })
            .collect()
    }

    /// Convert into application engine parameters
    pub fn to_engine_params(&self) -> Result<EngineParams, ConfigValidationError> {
        self.validate()?;
        Ok(EngineParams::default()
            .with_committee_size(self.council.committee_size)
            .with_feedback_delimiter(self.council.feedback_delimiter.clone())
            .with_dispatch_timeout(Duration::from_secs(
                self.council.dispatch_timeout_seconds,
            )))
    }
}

fn parse_address(raw: &str) -> Result<ValidatorId, ConfigValidationError> {
    ValidatorId::new(raw).map_err(|e| ConfigValidationError::InvalidAddress {
        address: raw.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[council]
admin = "0xAdmin"
committee_size = 5
feedback_delimiter = " / "
dispatch_timeout_seconds = 10

[sortition]
seed = 42

[journal]
path = "council-journal.jsonl"

[output]
color = false

[[validators]]
address = "0x13dc"
profile = "bafy-one"

[[validators]]
address = "0x99ef"
profile = "bafy-two"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.council.committee_size, 5);
        assert_eq!(config.sortition.seed, Some(42));
        assert_eq!(
            config.journal.path,
            Some(PathBuf::from("council-journal.jsonl"))
        );
        assert!(!config.output.color);
        assert_eq!(config.validators.len(), 2);
        assert_eq!(config.admin().unwrap().as_str(), "0xadmin");

        let params = config.to_engine_params().unwrap();
        assert_eq!(params.committee_size, 5);
        assert_eq!(params.feedback_delimiter, " / ");
        assert_eq!(params.dispatch_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[council]
committee_size = 7
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.council.committee_size, 7);
        // Defaults should apply
        assert_eq!(config.council.feedback_delimiter, "|");
        assert_eq!(config.council.dispatch_timeout_seconds, 5);
        assert!(config.sortition.seed.is_none());
        assert!(config.validators.is_empty());
        assert!(config.output.color);
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
        let params = config.to_engine_params().unwrap();
        assert_eq!(params.committee_size, 3);
        assert_eq!(params.dispatch_timeout, DEFAULT_DISPATCH_TIMEOUT);
    }

    #[test]
    fn test_admin_must_be_configured() {
        let config = FileConfig::default();
        assert_eq!(config.admin(), Err(ConfigValidationError::MissingAdmin));

        let config: FileConfig = toml::from_str("[council]\nadmin = \" 0xBoard \"").unwrap();
        assert_eq!(config.admin().unwrap().as_str(), "0xboard");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let cases = [
            ("[council]\ncommittee_size = 0", ConfigValidationError::InvalidCommitteeSize),
            ("[council]\ndispatch_timeout_seconds = 0", ConfigValidationError::InvalidTimeout),
            ("[council]\nfeedback_delimiter = \"\"", ConfigValidationError::EmptyDelimiter),
        ];

        for (toml_str, expected) in cases {
            let config: FileConfig = toml::from_str(toml_str).unwrap();
            assert_eq!(config.validate(), Err(expected));
        }
    }

    #[test]
    fn test_validate_addresses() {
        let config: FileConfig = toml::from_str("[council]\nadmin = \"\"").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidAddress { .. })
        ));

        let config: FileConfig = toml::from_str("[[validators]]\naddress = \"  \"").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidAddress { .. })
        ));
    }
}

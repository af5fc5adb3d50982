use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WordTagError {
    #[error("Invalid category label: '{label}' - must not be empty")]
    InvalidCategory { label: String },

    #[error("Category not found: {label}")]
    CategoryNotFound { label: String },

    #[error("Self-test failed: {scenario} (expected {expected:?}, got {actual:?})")]
    SelfTestFailed {
        scenario: String,
        expected: String,
        actual: String,
    },

    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Unknown config key: {key}")]
    ConfigKeyNotFound { key: String },

    #[error("Invalid value for {key}: '{value}'")]
    InvalidConfigValue { key: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WordTagError>;

impl WordTagError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::SelfTestFailed { .. } => 2,
            Self::CategoryNotFound { .. } => 3,
            Self::ConfigParse { .. }
            | Self::ConfigKeyNotFound { .. }
            | Self::InvalidConfigValue { .. } => 4,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let err = WordTagError::SelfTestFailed {
            scenario: "x".to_string(),
            expected: "a".to_string(),
            actual: "b".to_string(),
        };
        assert_eq!(err.exit_code(), 2);

        let err = WordTagError::CategoryNotFound {
            label: "NAME".to_string(),
        };
        assert_eq!(err.exit_code(), 3);

        let err = WordTagError::ConfigKeyNotFound {
            key: "nope".to_string(),
        };
        assert_eq!(err.exit_code(), 4);

        let err = WordTagError::InvalidCategory {
            label: String::new(),
        };
        assert_eq!(err.exit_code(), 1);

        let err = WordTagError::Io(std::io::Error::other("boom"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_self_test_failure_message() {
        let err = WordTagError::SelfTestFailed {
            scenario: "tagged view".to_string(),
            expected: "jill ".to_string(),
            actual: "".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("tagged view"));
        assert!(msg.contains("\"jill \""));
    }
}

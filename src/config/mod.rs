//! Configuration loading and management

use serde::{Deserialize, Serialize};

use crate::core::error::{DomainError, DomainResult};

/// Bounds applied by the list-parameter normalizer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Page size used when the caller supplies none
    pub default_per_page: u32,

    /// Hard ceiling on the page size, keeps result sets bounded
    pub max_per_page: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_per_page: 10,
            max_per_page: 100,
        }
    }
}

/// Complete runtime configuration for the backend core
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Pagination bounds
    pub pagination: PaginationConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> DomainResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| DomainError::Internal(format!("failed to read config '{}': {}", path, e)))?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(content: &str) -> DomainResult<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| DomainError::Internal(format!("failed to parse config: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_applied_when_fields_are_missing() {
        let config = AppConfig::from_yaml_str("pagination:\n  default_per_page: 25\n").unwrap();
        assert_eq!(config.pagination.default_per_page, 25);
        assert_eq!(config.pagination.max_per_page, 100);
    }

    #[test]
    fn empty_document_yields_full_defaults() {
        let config = AppConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config.pagination.default_per_page, 10);
        assert_eq!(config.pagination.max_per_page, 100);
    }

    #[test]
    fn malformed_yaml_is_an_internal_error() {
        let err = AppConfig::from_yaml_str("pagination: [").unwrap_err();
        assert!(matches!(err, DomainError::Internal(_)));
    }
}

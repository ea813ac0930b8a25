//! Fragment parser configuration
//!
//! # Examples
//!
//! ```rust,ignore
//! use codegraph_fragment::config::{DocumentationLinePolicy, FragmentConfig};
//!
//! // Defaults
//! let config = FragmentConfig::default();
//!
//! // Builder
//! let config = FragmentConfig::default()
//!     .with_documentation_line_policy(DocumentationLinePolicy::ExactlyOne)
//!     .with_max_fragment_bytes(64 * 1024);
//!
//! // YAML
//! let config = FragmentConfig::from_yaml_file("fragments.yaml")?;
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};

/// Supported YAML schema versions
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// Upper bound for `max_fragment_bytes`
pub const MAX_FRAGMENT_BYTES_LIMIT: usize = 64 * 1024 * 1024;

/// Which documentation block `parse_documentation_line` reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentationLinePolicy {
    /// First block in source order; later blocks are ignored
    #[default]
    First,
    /// Same rule as `parse_documentation`: anything but one block is an error
    ExactlyOne,
}

/// Fragment parser configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct FragmentConfig {
    pub documentation_line_policy: DocumentationLinePolicy,

    /// Reject fragments longer than this many bytes (`None` = unlimited)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_fragment_bytes: Option<usize>,
}

impl Default for FragmentConfig {
    fn default() -> Self {
        Self {
            documentation_line_policy: DocumentationLinePolicy::First,
            max_fragment_bytes: None,
        }
    }
}

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FragmentConfigFileV1 {
    /// Schema version (always 1 for v1)
    pub version: Option<u32>,

    #[serde(default)]
    pub fragments: FragmentConfig,
}

impl FragmentConfig {
    pub fn with_documentation_line_policy(mut self, policy: DocumentationLinePolicy) -> Self {
        self.documentation_line_policy = policy;
        self
    }

    pub fn with_max_fragment_bytes(mut self, limit: usize) -> Self {
        self.max_fragment_bytes = Some(limit);
        self
    }

    /// Range checks
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(limit) = self.max_fragment_bytes {
            if limit == 0 || limit > MAX_FRAGMENT_BYTES_LIMIT {
                return Err(ConfigError::Range {
                    field: "max_fragment_bytes".to_string(),
                    value: limit.to_string(),
                    min: "1".to_string(),
                    max: MAX_FRAGMENT_BYTES_LIMIT.to_string(),
                    hint: "Omit the field to disable the size guard.".to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let file: FragmentConfigFileV1 = serde_yaml::from_str(yaml)?;
        let version = file.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }
        file.fragments.validate()?;
        Ok(file.fragments)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = FragmentConfigFileV1 {
            version: Some(1),
            fragments: *self,
        };
        Ok(serde_yaml::to_string(&file)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_are_valid() {
        let config = FragmentConfig::default();
        assert_eq!(config.documentation_line_policy, DocumentationLinePolicy::First);
        assert_eq!(config.max_fragment_bytes, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = FragmentConfig::default()
            .with_documentation_line_policy(DocumentationLinePolicy::ExactlyOne)
            .with_max_fragment_bytes(4096);

        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("version: 1"));
        assert!(yaml.contains("documentation_line_policy: exactly_one"));
        assert!(yaml.contains("max_fragment_bytes: 4096"));
        assert_eq!(FragmentConfig::from_yaml_str(&yaml).unwrap(), config);
    }

    #[test]
    fn test_yaml_partial_uses_defaults() {
        let config = FragmentConfig::from_yaml_str("version: 1\n").unwrap();
        assert_eq!(config, FragmentConfig::default());
    }

    #[test]
    fn test_yaml_missing_version() {
        let result = FragmentConfig::from_yaml_str("fragments:\n  max_fragment_bytes: 10\n");
        assert!(matches!(result, Err(ConfigError::MissingVersion)));
    }

    #[test]
    fn test_yaml_unsupported_version() {
        let result = FragmentConfig::from_yaml_str("version: 2\n");
        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedVersion { found: 2, .. })
        ));
    }

    #[test]
    fn test_yaml_unknown_field_rejected() {
        let result = FragmentConfig::from_yaml_str("version: 1\nfragments:\n  trim: true\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_zero_limit_rejected() {
        let result =
            FragmentConfig::from_yaml_str("version: 1\nfragments:\n  max_fragment_bytes: 0\n");
        assert!(matches!(result, Err(ConfigError::Range { .. })));
    }

    #[test]
    fn test_yaml_loading_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "version: 1\nfragments:\n  documentation_line_policy: exactly_one"
        )
        .unwrap();

        let config = FragmentConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(
            config.documentation_line_policy,
            DocumentationLinePolicy::ExactlyOne
        );
    }
}

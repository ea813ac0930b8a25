//! Fragment parser configuration
//!
//! Defaults need no setup; a YAML file (schema v1) can override them:
//!
//! ```yaml
//! version: 1
//! fragments:
//!   documentation_line_policy: exactly_one
//!   max_fragment_bytes: 65536
//! ```

pub mod error;
pub mod fragment_config;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use fragment_config::{DocumentationLinePolicy, FragmentConfig, FragmentConfigFileV1};

use crate::error::{ConfigError, ValidationErrors};

/// Result of building a component from untyped configuration
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result of validating a component's options
pub type ValidationResult = Result<(), ValidationErrors>;

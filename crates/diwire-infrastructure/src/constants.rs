//! Infrastructure layer constants
//!
//! Generator-level constants (keywords, builtin types, reserved names) live
//! in `diwire_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "diwire.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "diwire";

/// Environment variable prefix for configuration (`DIWIRE__WIRE__HOIST=true`)
pub const CONFIG_ENV_PREFIX: &str = "DIWIRE";

/// Separator between the prefix and nested configuration keys
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV_VAR: &str = "DIWIRE_LOG";

/// File stem used when the log file path has none
pub const LOG_FILE_STEM: &str = "diwire";

// ============================================================================
// WIRE CONSTANTS
// ============================================================================

/// Name of the generated function when none is configured
pub const DEFAULT_FUNCTION_NAME: &str = "Initialize";

// ============================================================================
// INDEX CONSTANTS
// ============================================================================

/// Manifest extensions understood by the index loader
pub const INDEX_EXTENSIONS: &[&str] = &["toml", "json"];

//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{LoggingConfig, WireConfig};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Defaults for the `wire` command
    #[serde(default)]
    pub wire: WireConfig,
}

//! Wire command defaults

use crate::constants::DEFAULT_FUNCTION_NAME;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Defaults applied to `wire` when the command line leaves them out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WireConfig {
    /// Name of the generated function
    pub function_name: String,

    /// Import path of the package the function is generated into
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Hoist nodes that depend only on parameters
    pub hoist: bool,

    /// Source index manifest (file or directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<PathBuf>,
}

impl Default for WireConfig {
    fn default() -> Self {
        Self {
            function_name: DEFAULT_FUNCTION_NAME.to_string(),
            target: None,
            hoist: false,
            index: None,
        }
    }
}

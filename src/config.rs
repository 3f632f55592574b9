//! Default selections and the optional YAML file that overrides them.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::errors::MatrixError;

/// Providers used when no selection is given.
pub const DEFAULT_PROVIDERS: &str = "aws,gcp,azure";
/// Environments used when no selection is given.
pub const DEFAULT_ENVIRONMENTS: &str = "dev,prod";

/// Fallback selection strings, in the same comma-separated form as user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatrixDefaults {
    pub providers: String,
    pub environments: String,
}

impl Default for MatrixDefaults {
    fn default() -> Self {
        Self {
            providers: DEFAULT_PROVIDERS.to_string(),
            environments: DEFAULT_ENVIRONMENTS.to_string(),
        }
    }
}

impl MatrixDefaults {
    /// Reads defaults from a YAML file. Fields missing from the file keep
    /// their built-in values.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, MatrixError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| MatrixError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&content, &path.display().to_string())
    }

    /// Parses defaults from YAML text. `origin` names the source in errors.
    pub fn from_yaml(content: &str, origin: &str) -> Result<Self, MatrixError> {
        // an empty document deserializes as unit, not as an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|source| MatrixError::Config {
            path: origin.to_string(),
            source,
        })
    }
}

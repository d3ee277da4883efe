use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::{PrereqError, PrereqResult};

/// Limits applied by [`PrereqEngine`](crate::engine::PrereqEngine) before
/// an input reaches the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Longest accepted input, in bytes.
    #[serde(default = "default_max_input_length")]
    pub max_input_length: usize,

    /// Deepest accepted parenthesis nesting.
    #[serde(default = "default_max_nesting_depth")]
    pub max_nesting_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_input_length: default_max_input_length(),
            max_nesting_depth: default_max_nesting_depth(),
        }
    }
}

impl EngineConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> PrereqResult<Self> {
        from_file(path)
    }
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> PrereqResult<T> {
    let file = File::open(path)
        .map_err(|e| PrereqError::config(format!("Failed to open config file: {}", e)))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .map_err(|e| PrereqError::config(format!("Failed to parse config file: {}", e)))?;
    Ok(config)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> PrereqResult<T> {
    let config = serde_json::from_str(s)
        .map_err(|e| PrereqError::config(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

fn default_max_input_length() -> usize {
    4096
}

fn default_max_nesting_depth() -> usize {
    32
}

//! Load configuration.

use serde::{Deserialize, Serialize};

use sessionizer_core::FieldSchema;

/// Configuration for the load step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    /// Field delimiter within a record line
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Expected field layout of every source
    #[serde(default)]
    pub schema: FieldSchema,
}

fn default_delimiter() -> char {
    ','
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            schema: FieldSchema::default(),
        }
    }
}

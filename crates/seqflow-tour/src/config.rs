use std::path::Path;

use serde::{Deserialize, Serialize};

use seqflow_stream::sequence::Sequence;

use crate::error::{Result, TourError};

/// Input data for the tour. Every field is optional in YAML and falls back
/// to the built-in demo data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TourConfig {
    /// Names sorted in the comparator section.
    pub names: Vec<String>,

    /// The collection every stream example runs over.
    pub collection: Sequence<String>,

    /// Prefix used by the filter examples.
    pub filter_prefix: String,

    /// Prefix whose matches are counted.
    pub count_prefix: String,

    /// Prefix expected to match nothing.
    pub missing_prefix: String,

    /// Number of keys inserted in the map section.
    pub map_size: usize,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            names: ["peter", "anna", "mike", "xenia"]
                .into_iter()
                .map(String::from)
                .collect(),
            collection: [
                "ddd2", "aaa2", "bbb1", "aaa1", "bbb3", "ccc", "bbb2", "ddd1",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            filter_prefix: "a".into(),
            count_prefix: "b".into(),
            missing_prefix: "z".into(),
            map_size: 10,
        }
    }
}

impl TourConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| TourError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded tour config");
        Self::from_yaml(&yaml)
    }

    pub fn validate(&self) -> Result<()> {
        if self.collection.is_empty() {
            return Err(TourError::Config("collection must not be empty".into()));
        }
        if self.names.is_empty() {
            return Err(TourError::Config("names must not be empty".into()));
        }
        Ok(())
    }
}

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Configuration carried by a pipeline and reported with every terminal evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Human-readable name shown in trace output.
    #[serde(default)]
    pub label: Option<String>,

    /// Tags for filtering and categorization.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Arbitrary metadata key-value pairs.
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,

    /// Unique identifier for this pipeline.
    pub run_id: Uuid,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            label: None,
            tags: Vec::new(),
            metadata: HashMap::new(),
            run_id: Uuid::new_v4(),
        }
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    pub fn with_run_id(mut self, run_id: Uuid) -> Self {
        self.run_id = run_id;
        self
    }

    /// Label used in log output; falls back to `"pipeline"`.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or("pipeline")
    }
}

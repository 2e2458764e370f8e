pub mod config;
pub mod error;
pub mod optional;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::PipelineConfig;
    pub use crate::error::{ConversionError, PipelineError, Result, SeqflowError, ValueError};
    pub use crate::optional::OptionalValue;
}

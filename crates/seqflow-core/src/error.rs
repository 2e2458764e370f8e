use thiserror::Error;

/// Top-level error type for the seqflow library.
#[derive(Debug, Error)]
pub enum SeqflowError {
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    #[error("Value error: {0}")]
    Value(#[from] ValueError),

    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    #[error("{0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum PipelineError {
    /// The requested operation is not defined for the element type or its values,
    /// e.g. natural-order sorting over values that are not mutually comparable.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Stage '{stage}' failed: {message}")]
    Stage { stage: String, message: String },
}

#[derive(Debug, Error)]
pub enum ValueError {
    #[error("No value present")]
    Empty,
}

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("cannot parse {input:?} as {target}")]
    Parse { input: String, target: &'static str },
}

pub type Result<T> = std::result::Result<T, SeqflowError>;

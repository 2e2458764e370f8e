use seqflow_core::error::{ConversionError, Result};

/// Converts a value of type `F` into a `T`.
///
/// Implemented for every `Fn(F) -> T`, so closures, function items and
/// methods referenced by path all work as converters.
pub trait Converter<F, T> {
    fn convert(&self, from: F) -> T;
}

impl<F, T, C> Converter<F, T> for C
where
    C: Fn(F) -> T,
{
    fn convert(&self, from: F) -> T {
        self(from)
    }
}

/// Parse a decimal `i32`, surrounding whitespace allowed.
pub fn parse_i32(input: &str) -> Result<i32> {
    input.trim().parse().map_err(|_| {
        ConversionError::Parse {
            input: input.to_string(),
            target: "i32",
        }
        .into()
    })
}

/// Holder for a method that is handed around as a converter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Something;

impl Something {
    /// The first character of `s`, or an empty string.
    pub fn starts_with(&self, s: &str) -> String {
        s.chars().next().map(String::from).unwrap_or_default()
    }
}

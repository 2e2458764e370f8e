/// A calculation over an integer with a shared square-root helper.
///
/// Implementors only provide [`Formula::calculate`]; [`Formula::sqrt`] comes
/// for free and can be overridden.
pub trait Formula {
    fn calculate(&self, a: i32) -> f64;

    fn sqrt(&self, a: i32) -> f64 {
        sqrt(a)
    }
}

/// Square root of `a`, shared by every [`Formula`].
pub fn sqrt(a: i32) -> f64 {
    f64::from(a).sqrt()
}

/// `sqrt(a * 100)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquareRootFormula;

impl Formula for SquareRootFormula {
    fn calculate(&self, a: i32) -> f64 {
        self.sqrt(a.saturating_mul(100))
    }
}

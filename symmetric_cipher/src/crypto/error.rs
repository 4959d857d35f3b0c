use thiserror::Error;

/// Errors produced by the cipher core. Every error is fatal to the single
/// call that raised it; a shared context is never left half-modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Malformed table or key material, detected once at construction time.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A block or IV does not match the width the context was built for.
    #[error("length mismatch: expected {expected} bytes, got {actual}")]
    Length { expected: usize, actual: usize },

    /// An internal consistency check failed. Correct code never produces
    /// this; it exists so the test suite can detect algebraic asymmetry.
    #[error("algebraic invariant violated: {0}")]
    InvariantViolation(&'static str),
}

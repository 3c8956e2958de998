use thiserror::Error;

/// Recoverable failures of the checked math operations.
///
/// The plain operators treat these conditions as broken preconditions and
/// panic; the `checked_*` / `Result`-returning variants report them instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("vector has zero length")]
    DegenerateVector,
    #[error("matrix is not invertible")]
    SingularMatrix,
}

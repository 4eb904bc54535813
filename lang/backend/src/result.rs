use miette::Diagnostic;
use thiserror::Error;

pub type BackendResult<T> = Result<T, BackendError>;

#[derive(Error, Diagnostic, Debug, Clone)]
pub enum BackendError {
    #[error("Cannot emit an unchecked module: {message}")]
    #[diagnostic(code("B-001"))]
    Unchecked { message: String },
    #[error("An unexpected internal error occurred: {message}")]
    #[diagnostic(code("B-XXX"))]
    /// This error should not occur.
    /// Some internal invariant has been violated.
    Impossible { message: String },
}

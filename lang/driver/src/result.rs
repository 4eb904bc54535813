use std::path::PathBuf;
use std::sync::Arc;

use miette::Diagnostic;
use thiserror::Error;
use url::Url;

use variant_lang_backend::BackendError;
use variant_lang_elaborator::CheckError;
use variant_lang_lowering::LoweringError;
use variant_lang_parser::ParseError;

#[derive(Error, Diagnostic, Debug, Clone)]
#[error(transparent)]
#[diagnostic(transparent)]
pub enum Error {
    Parser(#[from] ParseError),
    Lowering(#[from] Box<LoweringError>),
    Check(#[from] Box<CheckError>),
    Backend(#[from] BackendError),
    Driver(#[from] DriverError),
}

#[derive(Error, Diagnostic, Debug, Clone)]
pub enum DriverError {
    #[error("File not found: {0}")]
    FileNotFound(Url),
    #[error("Invalid file path: {0}")]
    InvalidPath(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] Arc<std::io::Error>),
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// The result type specialized to check errors.
pub type CheckResult<T = ()> = Result<T, Box<CheckError>>;

pub fn comma_separated<I: IntoIterator<Item = String>>(iter: I) -> String {
    let vec: Vec<_> = iter.into_iter().collect();
    vec.join(", ")
}

fn nested_suffix(nested: &bool) -> &'static str {
    if *nested { " in _" } else { "" }
}

/// Errors emitted while checking match blocks and constructor calls against
/// the union models. All of them abort the compilation unit.
#[derive(Error, Diagnostic, Debug, Clone)]
pub enum CheckError {
    /// An unknown `(tag, arity)` pair, either in a match clause or in a
    /// statically resolvable constructor call. The message is suffixed with
    /// `" in _"` when the tag sat in the tag position of a multi-slot
    /// pattern rather than standing alone.
    #[error("undefined union case: {tag}{}", nested_suffix(.nested))]
    #[diagnostic(code("C-001"))]
    UndefinedUnionCase {
        tag: String,
        nested: bool,
        #[label]
        span: SourceSpan,
    },
    #[error("Match on union {union} does not cover: {missing}")]
    #[diagnostic(
        code("C-002"),
        help("Add a clause for every listed case, or a wildcard clause under #[allow_underscore].")
    )]
    MissingUnionCase {
        union: String,
        missing: String,
        #[label]
        span: SourceSpan,
    },
    #[error("A wildcard clause is only allowed under #[allow_underscore]")]
    #[diagnostic(code("C-003"))]
    UnderscoreNotAllowed {
        #[label]
        span: SourceSpan,
    },
    #[error("Union {union} has no operation named {name}")]
    #[diagnostic(code("C-004"))]
    UnknownOperation {
        union: String,
        name: String,
        #[label]
        span: SourceSpan,
    },
    #[error("Wrong number of arguments to {name} provided: got {actual}, expected {expected}")]
    #[diagnostic(code("C-005"))]
    ArgLenMismatch {
        name: String,
        expected: usize,
        actual: usize,
        #[label]
        span: SourceSpan,
    },
    #[error("An unexpected internal error occurred: {message}")]
    #[diagnostic(code("C-XXX"))]
    /// This error should not occur.
    /// Some internal invariant has been violated.
    Impossible {
        message: String,
        #[label]
        span: Option<SourceSpan>,
    },
}

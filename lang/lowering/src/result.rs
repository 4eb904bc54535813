use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// The result type specialized to declaration errors.
pub type LoweringResult<T = ()> = Result<T, Box<LoweringError>>;

/// Errors that can be emitted while canonicalizing and validating a module.
/// All of them are fatal to the declaration that triggered them.
#[derive(Error, Diagnostic, Debug, Clone)]
pub enum LoweringError {
    #[error("Duplicate definition of {name}")]
    #[diagnostic(code("D-001"))]
    AlreadyDefined {
        name: String,
        #[label]
        span: Option<SourceSpan>,
    },
    #[error("Union case is not a symbolic tag: found {got}")]
    #[diagnostic(
        code("D-002"),
        help("Case tags are capitalized identifiers, e.g. `Circle` or `Circle in Float`.")
    )]
    NotSymbolic {
        got: String,
        #[label]
        span: SourceSpan,
    },
    #[error("Duplicate union case {tag}")]
    #[diagnostic(code("D-003"), help("A tag may appear only once per union, regardless of arity."))]
    DuplicateCase {
        tag: String,
        #[label]
        span: SourceSpan,
    },
    #[error("The constructors for cases {fst} and {snd} would both be named {name}")]
    #[diagnostic(code("D-004"))]
    ConstructorNameClash {
        fst: String,
        snd: String,
        name: String,
        #[label]
        span: SourceSpan,
    },
    #[error("The wildcard _ cannot be declared as a union case")]
    #[diagnostic(code("D-005"))]
    ReservedWildcard {
        #[label]
        span: SourceSpan,
    },
    #[error("Undefined union {name}")]
    #[diagnostic(code("D-006"))]
    UndefinedUnion {
        name: String,
        #[label]
        span: SourceSpan,
    },
    #[error("Unknown attribute {name}")]
    #[diagnostic(code("D-007"))]
    UnknownAttribute {
        name: String,
        #[label]
        span: SourceSpan,
    },
    #[error("Pattern arguments must be binders, i.e. lowercase identifiers or _")]
    #[diagnostic(code("D-008"))]
    InvalidBinder {
        #[label]
        span: SourceSpan,
    },
    #[error("The operator {op} can only be used in case declarations and patterns")]
    #[diagnostic(code("D-009"))]
    UnexpectedOperator {
        op: String,
        #[label]
        span: SourceSpan,
    },
    #[error("The wildcard _ can only be used in match patterns")]
    #[diagnostic(code("D-010"))]
    UnexpectedUnderscore {
        #[label]
        span: SourceSpan,
    },
    #[error("An unexpected internal error occurred: {message}")]
    #[diagnostic(code("D-XXX"))]
    /// This error should not occur.
    /// Some internal invariant has been violated.
    Impossible {
        message: String,
        #[label]
        span: Option<SourceSpan>,
    },
}

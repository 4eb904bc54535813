use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::lexer::{LexicalError, Token};

#[derive(Error, Diagnostic, Debug, Clone)]
pub enum ParseError {
    #[error("Unexpected character")]
    #[diagnostic(code("P-001"))]
    InvalidToken {
        #[label]
        span: SourceSpan,
    },
    #[error("Unexpected end of file, expected one of: {expected}")]
    #[diagnostic(code("P-002"))]
    UnexpectedEof {
        #[label]
        span: SourceSpan,
        expected: String,
    },
    #[error("Unexpected token {token}, expected one of: {expected}")]
    #[diagnostic(code("P-003"))]
    UnexpectedToken {
        token: String,
        expected: String,
        #[label]
        span: SourceSpan,
    },
    #[error("Unexpected token {token} after the end of the module")]
    #[diagnostic(code("P-004"))]
    ExtraToken {
        token: String,
        #[label]
        span: SourceSpan,
    },
}

fn source_span(start: usize, end: usize) -> SourceSpan {
    SourceSpan::new(start.into(), end - start)
}

impl From<lalrpop_util::ParseError<usize, Token, LexicalError>> for ParseError {
    fn from(err: lalrpop_util::ParseError<usize, Token, LexicalError>) -> Self {
        use lalrpop_util::ParseError::*;
        match err {
            InvalidToken { location } => {
                ParseError::InvalidToken { span: source_span(location, location) }
            }
            UnrecognizedEof { location, expected } => ParseError::UnexpectedEof {
                span: source_span(location, location),
                expected: expected.join(", "),
            },
            UnrecognizedToken { token: (start, token, end), expected } => {
                ParseError::UnexpectedToken {
                    token: token.to_string(),
                    expected: expected.join(", "),
                    span: source_span(start, end),
                }
            }
            ExtraToken { token: (start, token, end) } => ParseError::ExtraToken {
                token: token.to_string(),
                span: source_span(start, end),
            },
            User { error } => match error {
                LexicalError::InvalidToken => {
                    ParseError::InvalidToken { span: source_span(0, 0) }
                }
                LexicalError::InvalidTokenAt { start, end } => {
                    ParseError::InvalidToken { span: source_span(start, end) }
                }
            },
        }
    }
}

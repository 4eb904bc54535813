use std::fmt;

use logos::{Logos, SpannedIter};
use num_bigint::BigUint;

#[derive(Default, Debug, Clone, PartialEq)]
pub enum LexicalError {
    #[default]
    InvalidToken,
    InvalidTokenAt {
        start: usize,
        end: usize,
    },
}

impl fmt::Display for LexicalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid token")
    }
}

#[derive(Logos, Clone, Debug, PartialEq)]
#[logos(skip r"\s+", skip r"//[^\n\r]*[\n\r]*", error = LexicalError)]
pub enum Token {
    // Keywords
    //
    //
    #[token("union")]
    Union,
    #[token("def")]
    Def,
    #[token("match")]
    Match,
    #[token("as")]
    As,
    #[token("in")]
    In,
    #[token("if")]
    If,

    // Parens, Braces and Brackets
    //
    //
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,

    // Symbols
    //
    //
    #[token(":=")]
    ColonEq,
    #[token("=>")]
    DoubleRightArrow,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("|")]
    Pipe,
    #[token("*")]
    Star,
    #[token("#")]
    Hash,
    #[token("_")]
    Underscore,

    // Identifiers
    //
    // We use the following unicode categories:
    // Ll = lowercase letter
    // Lu = uppercase letter
    #[regex(r"[\p{Ll}\p{Lu}][\p{Ll}\p{Lu}0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),

    // Operation names ending in "!", e.g. `from!` and `c!`.
    // Only lowercase names can denote operations.
    #[regex(r"[\p{Ll}][\p{Ll}\p{Lu}0-9_]*!", |lex| lex.slice().to_string())]
    BangIdent(String),

    // Literals
    //
    //
    #[regex(r"0|[1-9][0-9]*", |lex| BigUint::parse_bytes(lex.slice().as_ref(), 10).unwrap())]
    NumLit(BigUint),
    /// We do not allow multi line strings.
    #[regex(r###""([^"\\]|\\.)*""###, |lex| {
        let slice = lex.slice();
        // Remove the surrounding quotation marks
        let inner = &slice[1..slice.len()-1];
        inner.to_string()
    })]
    StringLit(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Union => write!(f, "union"),
            Token::Def => write!(f, "def"),
            Token::Match => write!(f, "match"),
            Token::As => write!(f, "as"),
            Token::In => write!(f, "in"),
            Token::If => write!(f, "if"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::LBrace => write!(f, "{{"),
            Token::RBrace => write!(f, "}}"),
            Token::LBracket => write!(f, "["),
            Token::RBracket => write!(f, "]"),
            Token::ColonEq => write!(f, ":="),
            Token::DoubleRightArrow => write!(f, "=>"),
            Token::Comma => write!(f, ","),
            Token::Dot => write!(f, "."),
            Token::Pipe => write!(f, "|"),
            Token::Star => write!(f, "*"),
            Token::Hash => write!(f, "#"),
            Token::Underscore => write!(f, "_"),
            Token::Ident(id) => write!(f, "{id}"),
            Token::BangIdent(id) => write!(f, "{id}"),
            Token::NumLit(n) => write!(f, "{n}"),
            Token::StringLit(s) => write!(f, "\"{s}\""),
        }
    }
}

pub type Spanned<Tok, Loc, Error> = Result<(Loc, Tok, Loc), Error>;

pub struct Lexer<'input> {
    // instead of an iterator over characters, we have a token iterator
    token_stream: SpannedIter<'input, Token>,
}

impl<'input> Lexer<'input> {
    pub fn new(input: &'input str) -> Self {
        // the Token::lexer() method is provided by the Logos trait
        Self { token_stream: Token::lexer(input).spanned() }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Spanned<Token, usize, LexicalError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.token_stream.next().map(|(token, span)| match token {
            Ok(token) => Ok((span.start, token, span.end)),
            Err(_) => Err(LexicalError::InvalidTokenAt { start: span.start, end: span.end }),
        })
    }
}

#[cfg(test)]
mod lexer_tests {
    use super::{Lexer, Token};

    fn tokens(input: &str) -> Vec<Token> {
        Lexer::new(input).map(|t| t.unwrap().1).collect()
    }

    #[test]
    fn bang_ident_beats_ident() {
        assert_eq!(tokens("from!"), vec![Token::BangIdent("from!".to_string())]);
        assert_eq!(tokens("from"), vec![Token::Ident("from".to_string())]);
        assert_eq!(tokens("c!"), vec![Token::BangIdent("c!".to_string())]);
    }

    #[test]
    fn keywords_beat_idents() {
        assert_eq!(tokens("union unions"), vec![
            Token::Union,
            Token::Ident("unions".to_string())
        ]);
    }

    #[test]
    fn comments_are_skipped() {
        assert_eq!(tokens("// a comment\nA"), vec![Token::Ident("A".to_string())]);
    }

    #[test]
    fn string_lit_escaped_quote() {
        let mut lexer = Lexer::new(r###""h\"i""###);
        assert_eq!(lexer.next().unwrap().unwrap().1, Token::StringLit("h\\\"i".to_string()));
    }

    #[test]
    fn invalid_character_has_a_span() {
        let mut lexer = Lexer::new("§");
        assert!(lexer.next().unwrap().is_err());
    }
}

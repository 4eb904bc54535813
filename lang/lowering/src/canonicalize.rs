//! The canonicalizer: the single place that decides what counts as a union
//! case and what its identity is.
//!
//! [canonical_form_of] is used both for declared cases and for match clause
//! heads, which is what guarantees that constructor synthesis and match
//! compilation agree on case identity.

use std::rc::Rc;

use codespan::Span;
use variant_lang_miette_util::ToMiette;
use variant_lang_parser::cst::exp::{BinOp, BinOpKind, Exp};
use variant_lang_parser::cst::ident::Ident;

use crate::result::{LoweringError, LoweringResult};

/// The canonical form of one raw case node or clause head.
#[derive(Debug)]
pub enum CanonicalForm<'a> {
    /// A case: tag plus positional argument nodes. For declarations the
    /// arguments are type descriptors; for patterns they are binders.
    Case { span: Span, tag: &'a Ident, args: Vec<&'a Exp> },
    /// The reserved wildcard sentinel. Never a member of a union model; it
    /// only arises transiently while compiling match blocks.
    Wildcard { span: Span },
}

impl CanonicalForm<'_> {
    pub fn span(&self) -> Span {
        match self {
            CanonicalForm::Case { span, .. } => *span,
            CanonicalForm::Wildcard { span } => *span,
        }
    }
}

/// Split an alternation chain `A | B | C` into its operands, preserving
/// declaration order.
pub fn split_alternation(exp: &Exp) -> Vec<&Exp> {
    let mut out = Vec::new();
    fn go<'a>(exp: &'a Exp, out: &mut Vec<&'a Exp>) {
        match exp {
            Exp::BinOp(BinOp { op: BinOpKind::Alt, lhs, rhs, .. }) => {
                go(lhs, out);
                go(rhs, out);
            }
            other => out.push(other),
        }
    }
    go(exp, &mut out);
    out
}

/// Split a product chain `T * U * V` into its operands.
fn split_product(exp: &Exp) -> Vec<&Exp> {
    let mut out = Vec::new();
    fn go<'a>(exp: &'a Exp, out: &mut Vec<&'a Exp>) {
        match exp {
            Exp::BinOp(BinOp { op: BinOpKind::Prod, lhs, rhs, .. }) => {
                go(lhs, out);
                go(rhs, out);
            }
            other => out.push(other),
        }
    }
    go(exp, &mut out);
    out
}

/// Map a raw node into its canonical form. Accepted shapes:
///
/// - `Tag` (bare tag, arity 0)
/// - `Tag in T`, `Tag in T * U * ...` (infix form)
/// - `Tag(T, U, ...)` (call form)
/// - `{Tag, T, U, ...}` (tuple form, the canonical container)
/// - `_` (the wildcard sentinel)
pub fn canonical_form_of(exp: &Exp) -> LoweringResult<CanonicalForm<'_>> {
    match exp {
        Exp::Name(name) => Ok(CanonicalForm::Case { span: name.span, tag: name, args: vec![] }),
        Exp::Underscore(underscore) => Ok(CanonicalForm::Wildcard { span: underscore.span }),
        Exp::BinOp(BinOp { op: BinOpKind::In, span, lhs, rhs }) => match lhs.as_ref() {
            Exp::Name(tag) => {
                Ok(CanonicalForm::Case { span: *span, tag, args: split_product(rhs) })
            }
            other => Err(not_symbolic(other)),
        },
        Exp::Call(call) => Ok(CanonicalForm::Case {
            span: call.span,
            tag: &call.name,
            args: call.args.iter().map(Rc::as_ref).collect(),
        }),
        Exp::Tuple(tuple) => {
            let Some(head) = tuple.elems.first() else {
                return Err(not_symbolic(exp));
            };
            match head.as_ref() {
                Exp::Name(tag) => Ok(CanonicalForm::Case {
                    span: tuple.span,
                    tag,
                    args: tuple.elems[1..].iter().map(Rc::as_ref).collect(),
                }),
                other => Err(not_symbolic(other)),
            }
        }
        other => Err(not_symbolic(other)),
    }
}

fn not_symbolic(exp: &Exp) -> Box<LoweringError> {
    let got = match exp {
        Exp::NumLit(_) => "a number literal",
        Exp::StringLit(_) => "a string literal",
        Exp::Tuple(_) => "a tuple without a tag",
        Exp::BinOp(BinOp { op: BinOpKind::Alt, .. }) => "a nested alternation",
        Exp::BinOp(BinOp { op: BinOpKind::Prod, .. }) => "a product without a tag",
        Exp::BinOp(BinOp { op: BinOpKind::In, .. }) => "a nested case declaration",
        Exp::Call(_) | Exp::UnionCall(_) => "a computed expression",
        Exp::Match(_) => "a match expression",
        Exp::Name(_) | Exp::Underscore(_) => "an expression",
    };
    Box::new(LoweringError::NotSymbolic { got: got.to_owned(), span: exp.span().to_miette() })
}

/// Whether an identifier may serve as a case tag.
pub fn is_tag_ident(ident: &Ident) -> bool {
    ident.id.chars().next().is_some_and(|c| c.is_uppercase())
}

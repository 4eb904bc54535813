use std::rc::Rc;

use codespan::Span;
use num_bigint::BigUint;

use super::decls::Attribute;
use super::ident::*;

#[derive(Debug, Clone)]
pub enum BindingSite {
    Var { span: Span, name: Ident },
    Wildcard { span: Span },
}

impl BindingSite {
    pub fn span(&self) -> Span {
        match self {
            BindingSite::Var { span, .. } => *span,
            BindingSite::Wildcard { span } => *span,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Exp {
    Name(Ident),
    Call(Call),
    UnionCall(UnionCall),
    BinOp(BinOp),
    Tuple(Tuple),
    Underscore(Underscore),
    NumLit(NumLit),
    StringLit(StringLit),
    Match(Match),
}

impl Exp {
    pub fn span(&self) -> Span {
        match self {
            Exp::Name(name) => name.span,
            Exp::Call(call) => call.span,
            Exp::UnionCall(call) => call.span,
            Exp::BinOp(binop) => binop.span,
            Exp::Tuple(tuple) => tuple.span,
            Exp::Underscore(underscore) => underscore.span,
            Exp::NumLit(lit) => lit.span,
            Exp::StringLit(lit) => lit.span,
            Exp::Match(m) => m.span,
        }
    }
}

/// An ordinary call `f(e, ...)`
#[derive(Debug, Clone)]
pub struct Call {
    pub span: Span,
    pub name: Ident,
    pub args: Vec<Rc<Exp>>,
}

/// A union operation call `U.op(e, ...)`
#[derive(Debug, Clone)]
pub struct UnionCall {
    pub span: Span,
    pub union: Ident,
    pub op: OpName,
    pub args: Vec<Rc<Exp>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOpKind {
    /// The alternation combinator `|`
    Alt,
    /// The case membership relation `in`
    In,
    /// The product combinator `*`
    Prod,
}

/// Binary operator, e.g. `C in T` or `T * T` or `A | B`.
#[derive(Debug, Clone)]
pub struct BinOp {
    pub span: Span,
    pub op: BinOpKind,
    pub lhs: Box<Exp>,
    pub rhs: Box<Exp>,
}

/// A tuple `{e, ...}`; the canonical container form writes a case as a tuple
/// with the tag in the first slot.
#[derive(Debug, Clone)]
pub struct Tuple {
    pub span: Span,
    pub elems: Vec<Rc<Exp>>,
}

/// The anonymous wildcard placeholder `_`
#[derive(Debug, Clone)]
pub struct Underscore {
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct NumLit {
    pub span: Span,
    pub val: BigUint,
}

#[derive(Debug, Clone)]
pub struct StringLit {
    pub span: Span,
    pub val: String,
}

/// Match expression, e.g. `match s as Shape { Circle(r) => e, ... }`
#[derive(Debug, Clone)]
pub struct Match {
    pub span: Span,
    pub attr: Attribute,
    pub on_exp: Box<Exp>,
    pub union: Ident,
    pub clauses: Vec<Clause>,
}

/// One match clause. The pattern is a raw expression; lowering rewrites it
/// into the canonical container form.
#[derive(Debug, Clone)]
pub struct Clause {
    pub span: Span,
    pub pattern: Rc<Exp>,
    pub guard: Option<Rc<Exp>>,
    pub body: Rc<Exp>,
}

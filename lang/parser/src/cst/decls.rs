use std::rc::Rc;

use codespan::Span;
use url::Url;

use super::exp;
use super::ident::*;

/// An attribute can be attached to union declarations and match expressions.
/// We use the same syntax for attributes as Rust, that is `#[attr1, attr2]`.
/// An attribute may carry a single argument: `#[dyn_constructors(false)]`.
#[derive(Debug, Clone, Default)]
pub struct Attribute {
    pub attrs: Vec<Attr>,
}

#[derive(Debug, Clone)]
pub struct Attr {
    pub span: Span,
    pub name: Ident,
    pub arg: Option<Ident>,
}

#[derive(Debug, Clone)]
pub struct Module {
    /// The location of the module on disk
    pub uri: Url,
    pub items: Vec<Decl>,
}

#[derive(Debug, Clone)]
pub enum Decl {
    Union(UnionDecl),
    Def(Def),
}

/// Union declaration
///
/// ```text
/// union Shape := Circle in Float | Empty
///       ^^^^^    ^^^^^^^^^^^^^^^^^^^^^^^
///         |                \-------------- cases
///         \------------------------------- name
/// ```
///
/// The case list is kept as the raw alternation expression; lowering splits
/// and canonicalizes it.
#[derive(Debug, Clone)]
pub struct UnionDecl {
    pub span: Span,
    pub attr: Attribute,
    pub name: Ident,
    pub cases: Rc<exp::Exp>,
}

/// Toplevel definition
///
/// ```text
/// def area(s) := e
///     ^^^^ ^     ^
///       |  |     \----- body
///       |  \----------- params
///       \-------------- name
/// ```
#[derive(Debug, Clone)]
pub struct Def {
    pub span: Span,
    pub name: Ident,
    pub params: Vec<exp::BindingSite>,
    pub body: Rc<exp::Exp>,
}

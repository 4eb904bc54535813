use std::fmt;
use std::rc::Rc;

use codespan::Span;
use num_bigint::BigUint;
use pretty::DocAllocator;
use variant_lang_printer::theme::ThemeExt;
use variant_lang_printer::tokens::*;
use variant_lang_printer::{Alloc, Builder, Print, PrintCfg};

use crate::ident::Ident;
use crate::model::CaseKey;

#[derive(Debug, Clone)]
pub enum Exp {
    /// A bare identifier: a variable, a host name, or (capitalized) a tag.
    Name(Ident),
    Call(Call),
    UnionOp(UnionOpCall),
    Tuple(Tuple),
    NumLit(NumLit),
    StringLit(StringLit),
    Dispatch(Dispatch),
}

impl Exp {
    pub fn span(&self) -> Span {
        match self {
            Exp::Name(name) => name.span,
            Exp::Call(call) => call.span,
            Exp::UnionOp(op) => op.span,
            Exp::Tuple(tuple) => tuple.span,
            Exp::NumLit(lit) => lit.span,
            Exp::StringLit(lit) => lit.span,
            Exp::Dispatch(dispatch) => dispatch.span,
        }
    }
}

/// An ordinary host call `f(e_1, ..., e_n)`; opaque to the compiler.
#[derive(Debug, Clone)]
pub struct Call {
    pub span: Span,
    pub name: Ident,
    pub args: Vec<Rc<Exp>>,
}

/// A call of one of the operations generated for a union:
///
/// ```text
/// Shape.from({Rect, x, y})
/// ^^^^^ ^^^^ ^^^^^^^^^^^^
///   |    |        \------------ args
///   |    \--------------------- op
///   \-------------------------- union
/// ```
#[derive(Debug, Clone)]
pub struct UnionOpCall {
    pub span: Span,
    pub union: Ident,
    pub op: UnionOp,
    pub args: Vec<Rc<Exp>>,
    /// Filled in by the elaborator: whether the case membership was resolved
    /// at build time or is deferred to the run-time constructor.
    pub check: Option<ConstructorCheck>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnionOp {
    /// `from(value)`: checked at build time when the tag is statically known.
    From,
    /// `from!(value)` / `from!(value, fallback)`: checked at run time.
    FromBang,
    /// `c(Tag, e_1, ..., e_n)`: direct positional construction.
    C,
    /// `c!(tag, e_1, ..., e_n)`: direct positional construction, checked at
    /// run time.
    CBang,
    /// A per-case named constructor, e.g. `circle(e)`.
    Named(Ident),
}

impl fmt::Display for UnionOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UnionOp::From => write!(f, "from"),
            UnionOp::FromBang => write!(f, "from!"),
            UnionOp::C => write!(f, "c"),
            UnionOp::CBang => write!(f, "c!"),
            UnionOp::Named(name) => name.fmt(f),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructorCheck {
    /// Membership was established at build time for this case.
    Static(CaseKey),
    /// The tag is only known at run time; the emitted code calls the
    /// run-time constructor.
    Dynamic,
}

#[derive(Debug, Clone)]
pub struct Tuple {
    pub span: Span,
    pub elems: Vec<Rc<Exp>>,
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

/// A match block after clause normalization:
///
/// ```text
/// match s as Shape { Circle(r) => e, ... }
///       ^    ^^^^^   ^^^^^^^^^^^^^^^^^^^
///       |      |              \------------ clauses
///       |      \--------------------------- union
///       \---------------------------------- on_exp
/// ```
#[derive(Debug, Clone)]
pub struct Dispatch {
    pub span: Span,
    pub union: Ident,
    pub on_exp: Rc<Exp>,
    /// Whether a wildcard clause may satisfy exhaustiveness for this block.
    pub allow_underscore: bool,
    pub clauses: Vec<Clause>,
}

#[derive(Debug, Clone)]
pub struct Clause {
    pub span: Span,
    pub pattern: Pattern,
    /// Guards are carried through compilation untouched.
    pub guard: Option<Rc<Exp>>,
    pub body: Rc<Exp>,
}

#[derive(Debug, Clone)]
pub enum Pattern {
    Case(CasePattern),
    Wildcard(WildcardPattern),
}

impl Pattern {
    pub fn span(&self) -> Span {
        match self {
            Pattern::Case(case) => case.span,
            Pattern::Wildcard(wildcard) => wildcard.span,
        }
    }
}

/// A clause head in canonical container form: tag plus positional binders.
#[derive(Debug, Clone)]
pub struct CasePattern {
    pub span: Span,
    pub tag: Ident,
    pub params: Vec<BindingSite>,
}

impl CasePattern {
    pub fn key(&self) -> CaseKey {
        CaseKey { tag: self.tag.id.clone(), arity: self.params.len() }
    }
}

#[derive(Debug, Clone)]
pub struct WildcardPattern {
    pub span: Span,
}

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

// Prettyprinting
//
//

impl Print for Exp {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        match self {
            Exp::Name(name) => name.print(cfg, alloc),
            Exp::Call(call) => call.print(cfg, alloc),
            Exp::UnionOp(op) => op.print(cfg, alloc),
            Exp::Tuple(tuple) => tuple.print(cfg, alloc),
            Exp::NumLit(lit) => lit.print(cfg, alloc),
            Exp::StringLit(lit) => lit.print(cfg, alloc),
            Exp::Dispatch(dispatch) => dispatch.print(cfg, alloc),
        }
    }
}

impl Print for Ident {
    fn print<'a>(&'a self, _cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        if self.is_tag() { alloc.tag(&self.id) } else { alloc.text(&self.id) }
    }
}

fn print_args<'a>(args: &'a [Rc<Exp>], cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
    alloc
        .intersperse(
            args.iter().map(|arg| arg.print(cfg, alloc)),
            alloc.text(COMMA).append(alloc.space()),
        )
        .parens()
}

impl Print for Call {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let Call { name, args, .. } = self;
        name.print(cfg, alloc).append(print_args(args, cfg, alloc))
    }
}

impl Print for UnionOpCall {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let UnionOpCall { union, op, args, .. } = self;
        alloc
            .typ(&union.id)
            .append(DOT)
            .append(alloc.text(op.to_string()))
            .append(print_args(args, cfg, alloc))
    }
}

impl Print for Tuple {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let Tuple { elems, .. } = self;
        alloc
            .intersperse(
                elems.iter().map(|e| e.print(cfg, alloc)),
                alloc.text(COMMA).append(alloc.space()),
            )
            .braces()
    }
}

impl Print for NumLit {
    fn print<'a>(&'a self, _cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        alloc.text(self.val.to_string())
    }
}

impl Print for StringLit {
    fn print<'a>(&'a self, _cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        alloc.text(format!("\"{}\"", self.val))
    }
}

impl Print for Dispatch {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let Dispatch { union, on_exp, allow_underscore, clauses, .. } = self;
        let attr = if *allow_underscore {
            alloc
                .text(HASH)
                .append(alloc.text(ATTR_ALLOW_UNDERSCORE).brackets())
                .append(alloc.space())
        } else {
            alloc.nil()
        };
        let head = attr
            .append(alloc.keyword(MATCH))
            .append(alloc.space())
            .append(on_exp.print(cfg, alloc))
            .append(alloc.space())
            .append(alloc.keyword(AS))
            .append(alloc.space())
            .append(alloc.typ(&union.id));
        let body = if clauses.is_empty() {
            alloc.nil()
        } else {
            let sep = alloc.text(COMMA).append(alloc.hardline());
            alloc
                .hardline()
                .append(alloc.intersperse(clauses.iter().map(|c| c.print(cfg, alloc)), sep))
                .append(alloc.text(COMMA))
                .nest(cfg.indent)
                .append(alloc.hardline())
        };
        head.append(alloc.space()).append(body.braces())
    }
}

impl Print for Clause {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let Clause { pattern, guard, body, .. } = self;
        let guard = match guard {
            Some(guard) => alloc
                .space()
                .append(alloc.keyword(IF))
                .append(alloc.space())
                .append(guard.print(cfg, alloc)),
            None => alloc.nil(),
        };
        pattern
            .print(cfg, alloc)
            .append(guard)
            .append(alloc.space())
            .append(FAT_ARROW)
            .append(alloc.space())
            .append(body.print(cfg, alloc))
    }
}

impl Print for Pattern {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        match self {
            Pattern::Case(case) => case.print(cfg, alloc),
            Pattern::Wildcard(_) => alloc.text(UNDERSCORE),
        }
    }
}

impl Print for CasePattern {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let CasePattern { tag, params, .. } = self;
        if params.is_empty() {
            alloc.tag(&tag.id)
        } else {
            alloc.tag(&tag.id).append(
                alloc
                    .intersperse(
                        params.iter().map(|p| p.print(cfg, alloc)),
                        alloc.text(COMMA).append(alloc.space()),
                    )
                    .parens(),
            )
        }
    }
}

impl Print for BindingSite {
    fn print<'a>(&'a self, _cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        match self {
            BindingSite::Var { name, .. } => alloc.text(&name.id),
            BindingSite::Wildcard { .. } => alloc.text(UNDERSCORE),
        }
    }
}

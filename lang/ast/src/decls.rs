use std::rc::Rc;

use codespan::Span;
use pretty::DocAllocator;
use url::Url;
use variant_lang_printer::theme::ThemeExt;
use variant_lang_printer::tokens::*;
use variant_lang_printer::{Alloc, Builder, Print, PrintCfg};

use crate::ctor::{CaseConstructor, ConstructorSet};
use crate::exp::{BindingSite, Exp};
use crate::ident::Ident;
use crate::model::UnionModel;

#[derive(Debug, Clone)]
pub struct Module {
    /// The location of the module on disk
    pub uri: Url,
    pub decls: Vec<Decl>,
}

impl Module {
    pub fn unions(&self) -> impl Iterator<Item = &Union> {
        self.decls.iter().filter_map(|decl| match decl {
            Decl::Union(union) => Some(union),
            Decl::Def(_) => None,
        })
    }

    pub fn defs(&self) -> impl Iterator<Item = &Def> {
        self.decls.iter().filter_map(|decl| match decl {
            Decl::Def(def) => Some(def),
            Decl::Union(_) => None,
        })
    }
}

#[derive(Debug, Clone)]
pub enum Decl {
    Union(Union),
    Def(Def),
}

/// A lowered union declaration. The model is built exactly once, here, and
/// the constructor set is synthesized from it right afterwards.
#[derive(Debug, Clone)]
pub struct Union {
    pub span: Span,
    pub name: Ident,
    /// Whether per-case named constructors are generated for this union.
    pub dyn_constructors: bool,
    pub model: UnionModel,
    pub ctors: ConstructorSet,
}

impl Union {
    /// Resolve a named constructor. Returns `None` when no case normalizes
    /// to this name or when `dyn_constructors` is disabled; either way the
    /// operation does not exist.
    pub fn constructor(&self, name: &str) -> Option<CaseConstructor<'_>> {
        self.ctors.get(name)
    }
}

/// Toplevel definition: a named host function whose body is opaque except
/// for match blocks and union operation calls.
///
/// ```text
/// def area(s) := match s as Shape { ... }
///     ^^^^ ^     ^^^^^^^^^^^^^^^^^^^^^^^
///       |  |             \----------------- body
///       |  \------------------------------- params
///       \---------------------------------- name
/// ```
#[derive(Debug, Clone)]
pub struct Def {
    pub span: Span,
    pub name: Ident,
    pub params: Vec<BindingSite>,
    pub body: Rc<Exp>,
}

// Prettyprinting
//
//

impl Print for Module {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let Module { decls, .. } = self;
        let sep = alloc.hardline().append(alloc.hardline());
        alloc
            .intersperse(decls.iter().map(|decl| decl.print(cfg, alloc)), sep)
            .append(alloc.hardline())
    }
}

impl Print for Decl {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        match self {
            Decl::Union(union) => union.print(cfg, alloc),
            Decl::Def(def) => def.print(cfg, alloc),
        }
    }
}

impl Print for Union {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let Union { name, dyn_constructors, model, .. } = self;
        let attr = if *dyn_constructors {
            alloc.nil()
        } else {
            alloc
                .text(HASH)
                .append(
                    alloc
                        .text(ATTR_DYN_CONSTRUCTORS)
                        .append(alloc.text("false").parens())
                        .brackets(),
                )
                .append(alloc.hardline())
        };
        let cases = alloc.intersperse(
            model.cases().iter().map(|case| case.print(cfg, alloc)),
            alloc.line().append(PIPE).append(alloc.space()),
        );
        attr.append(alloc.keyword(UNION))
            .append(alloc.space())
            .append(alloc.typ(&name.id))
            .append(alloc.space())
            .append(COLON_EQ)
            .append(alloc.line().append(cases).nest(cfg.indent).group())
    }
}

impl Print for Def {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let Def { name, params, body, .. } = self;
        let params = alloc
            .intersperse(
                params.iter().map(|p| p.print(cfg, alloc)),
                alloc.text(COMMA).append(alloc.space()),
            )
            .parens();
        alloc
            .keyword(DEF)
            .append(alloc.space())
            .append(alloc.text(&name.id))
            .append(params)
            .append(alloc.space())
            .append(COLON_EQ)
            .append(alloc.space())
            .append(body.print(cfg, alloc))
    }
}

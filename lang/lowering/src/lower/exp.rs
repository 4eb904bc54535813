use variant_lang_ast as ast;
use variant_lang_miette_util::ToMiette;
use variant_lang_parser::cst;
use variant_lang_parser::cst::decls::Attribute;
use variant_lang_parser::cst::exp::{BinOpKind, Exp};
use variant_lang_printer::tokens::ATTR_ALLOW_UNDERSCORE;

use crate::canonicalize::{CanonicalForm, canonical_form_of, is_tag_ident};
use crate::ctx::Ctx;
use crate::lower::{Lower, lower_ident};
use crate::result::{LoweringError, LoweringResult};

impl Lower for Exp {
    type Target = ast::Exp;

    fn lower(&self, ctx: &mut Ctx) -> LoweringResult<Self::Target> {
        match self {
            Exp::Name(name) => Ok(ast::Exp::Name(lower_ident(name))),
            Exp::Call(call) => Ok(ast::Exp::Call(ast::Call {
                span: call.span,
                name: lower_ident(&call.name),
                args: call.args.lower(ctx)?,
            })),
            Exp::UnionCall(call) => call.lower(ctx).map(ast::Exp::UnionOp),
            Exp::BinOp(binop) => {
                let op = match binop.op {
                    BinOpKind::Alt => "|",
                    BinOpKind::In => "in",
                    BinOpKind::Prod => "*",
                };
                Err(Box::new(LoweringError::UnexpectedOperator {
                    op: op.to_owned(),
                    span: binop.span.to_miette(),
                }))
            }
            Exp::Tuple(tuple) => Ok(ast::Exp::Tuple(ast::Tuple {
                span: tuple.span,
                elems: tuple.elems.lower(ctx)?,
            })),
            Exp::Underscore(underscore) => Err(Box::new(LoweringError::UnexpectedUnderscore {
                span: underscore.span.to_miette(),
            })),
            Exp::NumLit(lit) => {
                Ok(ast::Exp::NumLit(ast::NumLit { span: lit.span, val: lit.val.clone() }))
            }
            Exp::StringLit(lit) => {
                Ok(ast::Exp::StringLit(ast::StringLit { span: lit.span, val: lit.val.clone() }))
            }
            Exp::Match(m) => m.lower(ctx).map(ast::Exp::Dispatch),
        }
    }
}

impl Lower for cst::exp::UnionCall {
    type Target = ast::UnionOpCall;

    fn lower(&self, ctx: &mut Ctx) -> LoweringResult<Self::Target> {
        let cst::exp::UnionCall { span, union, op, args } = self;
        ctx.expect_union(union)?;

        let op = match op.id.as_str() {
            "from" => ast::UnionOp::From,
            "from!" => ast::UnionOp::FromBang,
            "c" => ast::UnionOp::C,
            "c!" => ast::UnionOp::CBang,
            _ => ast::UnionOp::Named(ast::Ident { span: op.span, id: op.id.clone() }),
        };

        Ok(ast::UnionOpCall {
            span: *span,
            union: lower_ident(union),
            op,
            args: args.lower(ctx)?,
            check: None,
        })
    }
}

impl Lower for cst::exp::Match {
    type Target = ast::Dispatch;

    fn lower(&self, ctx: &mut Ctx) -> LoweringResult<Self::Target> {
        let cst::exp::Match { span, attr, on_exp, union, clauses } = self;
        ctx.expect_union(union)?;

        Ok(ast::Dispatch {
            span: *span,
            union: lower_ident(union),
            on_exp: (**on_exp).lower(ctx).map(std::rc::Rc::new)?,
            allow_underscore: allow_underscore_of(attr)?,
            clauses: clauses.lower(ctx)?,
        })
    }
}

impl Lower for cst::exp::Clause {
    type Target = ast::Clause;

    fn lower(&self, ctx: &mut Ctx) -> LoweringResult<Self::Target> {
        let cst::exp::Clause { span, pattern, guard, body } = self;
        Ok(ast::Clause {
            span: *span,
            pattern: lower_pattern(pattern)?,
            guard: guard.lower(ctx)?,
            body: body.lower(ctx)?,
        })
    }
}

/// Rewrite a clause head into the canonical container form, whatever surface
/// variant it was written in. Binders must be lowercase identifiers or `_`;
/// nested patterns do not exist in this language.
fn lower_pattern(pattern: &Exp) -> LoweringResult<ast::Pattern> {
    match canonical_form_of(pattern)? {
        CanonicalForm::Wildcard { span } => {
            Ok(ast::Pattern::Wildcard(ast::WildcardPattern { span }))
        }
        CanonicalForm::Case { span, tag, args } => {
            let params = args
                .into_iter()
                .map(lower_binder)
                .collect::<LoweringResult<Vec<_>>>()?;
            Ok(ast::Pattern::Case(ast::CasePattern { span, tag: lower_ident(tag), params }))
        }
    }
}

fn lower_binder(exp: &Exp) -> LoweringResult<ast::BindingSite> {
    match exp {
        Exp::Name(name) if !is_tag_ident(name) => {
            Ok(ast::BindingSite::Var { span: name.span, name: lower_ident(name) })
        }
        Exp::Underscore(underscore) => Ok(ast::BindingSite::Wildcard { span: underscore.span }),
        other => {
            Err(Box::new(LoweringError::InvalidBinder { span: other.span().to_miette() }))
        }
    }
}

impl Lower for cst::exp::BindingSite {
    type Target = ast::BindingSite;

    fn lower(&self, _ctx: &mut Ctx) -> LoweringResult<Self::Target> {
        match self {
            cst::exp::BindingSite::Var { span, name } => {
                Ok(ast::BindingSite::Var { span: *span, name: lower_ident(name) })
            }
            cst::exp::BindingSite::Wildcard { span } => {
                Ok(ast::BindingSite::Wildcard { span: *span })
            }
        }
    }
}

/// Read the `allow_underscore` option off a match expression.
fn allow_underscore_of(attr: &Attribute) -> LoweringResult<bool> {
    let mut allow_underscore = false;
    for attr in &attr.attrs {
        match (attr.name.id.as_str(), &attr.arg) {
            (ATTR_ALLOW_UNDERSCORE, None) => allow_underscore = true,
            _ => {
                return Err(Box::new(LoweringError::UnknownAttribute {
                    name: attr.name.id.clone(),
                    span: attr.span.to_miette(),
                }));
            }
        }
    }
    Ok(allow_underscore)
}

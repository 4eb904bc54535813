//! Build-time checking of constructor calls.
//!
//! Calls of `from`/`c` whose tag is statically known resolve their case
//! membership here and fail compilation on an unknown case; calls whose tag
//! is a run-time value are marked as deferred to the run-time constructor.
//! Named constructor calls only resolve if the union actually synthesized
//! the operation.

use std::rc::Rc;

use variant_lang_ast::*;
use variant_lang_miette_util::ToMiette;

use crate::dispatch;
use crate::result::{CheckError, CheckResult};
use crate::table::UnionTable;

pub struct Ctx {
    pub table: UnionTable,
}

pub trait Check: Sized {
    fn check(&self, ctx: &Ctx) -> CheckResult<Self>;
}

impl<T: Check> Check for Option<T> {
    fn check(&self, ctx: &Ctx) -> CheckResult<Self> {
        self.as_ref().map(|x| x.check(ctx)).transpose()
    }
}

impl<T: Check> Check for Vec<T> {
    fn check(&self, ctx: &Ctx) -> CheckResult<Self> {
        self.iter().map(|x| x.check(ctx)).collect()
    }
}

impl<T: Check> Check for Rc<T> {
    fn check(&self, ctx: &Ctx) -> CheckResult<Self> {
        (**self).check(ctx).map(Rc::new)
    }
}

impl Check for Module {
    fn check(&self, ctx: &Ctx) -> CheckResult<Self> {
        let Module { uri, decls } = self;
        Ok(Module { uri: uri.clone(), decls: decls.check(ctx)? })
    }
}

impl Check for Decl {
    fn check(&self, ctx: &Ctx) -> CheckResult<Self> {
        match self {
            // The model was validated when it was built; nothing to re-check.
            Decl::Union(union) => Ok(Decl::Union(union.clone())),
            Decl::Def(def) => def.check(ctx).map(Decl::Def),
        }
    }
}

impl Check for Def {
    fn check(&self, ctx: &Ctx) -> CheckResult<Self> {
        let Def { span, name, params, body } = self;
        log::trace!("Checking definition: {}", name.id);
        Ok(Def {
            span: *span,
            name: name.clone(),
            params: params.clone(),
            body: body.check(ctx)?,
        })
    }
}

impl Check for Exp {
    fn check(&self, ctx: &Ctx) -> CheckResult<Self> {
        match self {
            Exp::Name(_) | Exp::NumLit(_) | Exp::StringLit(_) => Ok(self.clone()),
            Exp::Call(call) => Ok(Exp::Call(Call {
                span: call.span,
                name: call.name.clone(),
                args: call.args.check(ctx)?,
            })),
            Exp::Tuple(tuple) => Ok(Exp::Tuple(Tuple {
                span: tuple.span,
                elems: tuple.elems.check(ctx)?,
            })),
            Exp::UnionOp(call) => call.check(ctx).map(Exp::UnionOp),
            Exp::Dispatch(d) => dispatch::compile(d, ctx).map(Exp::Dispatch),
        }
    }
}

impl Check for UnionOpCall {
    fn check(&self, ctx: &Ctx) -> CheckResult<Self> {
        let UnionOpCall { span, union, op, args, .. } = self;
        let decl = ctx.table.lookup(union)?;
        let args = args.check(ctx)?;

        let check = match op {
            UnionOp::From => {
                expect_args(op, args.len(), 1..=1, *span)?;
                resolve_value(decl, &args[0])?
            }
            UnionOp::FromBang => {
                expect_args(op, args.len(), 1..=2, *span)?;
                ConstructorCheck::Dynamic
            }
            UnionOp::C => {
                expect_args(op, args.len(), 1..=usize::MAX, *span)?;
                resolve_tag_args(decl, &args)?
            }
            UnionOp::CBang => {
                expect_args(op, args.len(), 1..=usize::MAX, *span)?;
                ConstructorCheck::Dynamic
            }
            UnionOp::Named(name) => {
                let Some(ctor) = decl.constructor(&name.id) else {
                    return Err(Box::new(CheckError::UnknownOperation {
                        union: union.id.clone(),
                        name: name.id.clone(),
                        span: name.span.to_miette(),
                    }));
                };
                if args.len() != ctor.case().arity {
                    return Err(Box::new(CheckError::ArgLenMismatch {
                        name: name.id.clone(),
                        expected: ctor.case().arity,
                        actual: args.len(),
                        span: span.to_miette(),
                    }));
                }
                ConstructorCheck::Static(ctor.case().clone())
            }
        };

        Ok(UnionOpCall {
            span: *span,
            union: union.clone(),
            op: op.clone(),
            args,
            check: Some(check),
        })
    }
}

fn expect_args(
    op: &UnionOp,
    actual: usize,
    expected: std::ops::RangeInclusive<usize>,
    span: codespan::Span,
) -> CheckResult<()> {
    if expected.contains(&actual) {
        return Ok(());
    }
    let expected = if actual < *expected.start() { *expected.start() } else { *expected.end() };
    Err(Box::new(CheckError::ArgLenMismatch {
        name: op.to_string(),
        expected,
        actual,
        span: span.to_miette(),
    }))
}

/// Statically resolve a `from` argument. A capitalized bare name or a tuple
/// with a capitalized head is a statically known case; everything else only
/// reveals its tag at run time.
fn resolve_value(decl: &Union, value: &Rc<Exp>) -> CheckResult<ConstructorCheck> {
    match value.as_ref() {
        Exp::Name(name) if name.is_tag() => {
            resolve_case(decl, CaseKey::new(&name.id, 0), false, name.span)
        }
        Exp::Tuple(tuple) => match tuple.elems.first().map(Rc::as_ref) {
            Some(Exp::Name(name)) if name.is_tag() => resolve_case(
                decl,
                CaseKey::new(&name.id, tuple.elems.len() - 1),
                tuple.elems.len() > 1,
                name.span,
            ),
            _ => Ok(ConstructorCheck::Dynamic),
        },
        _ => Ok(ConstructorCheck::Dynamic),
    }
}

/// Statically resolve a `c(tag, args...)` call from its tag argument.
fn resolve_tag_args(decl: &Union, args: &[Rc<Exp>]) -> CheckResult<ConstructorCheck> {
    match args[0].as_ref() {
        Exp::Name(name) if name.is_tag() => resolve_case(
            decl,
            CaseKey::new(&name.id, args.len() - 1),
            args.len() > 1,
            name.span,
        ),
        _ => Ok(ConstructorCheck::Dynamic),
    }
}

fn resolve_case(
    decl: &Union,
    key: CaseKey,
    nested: bool,
    span: codespan::Span,
) -> CheckResult<ConstructorCheck> {
    if !decl.model.contains(&key) {
        return Err(Box::new(CheckError::UndefinedUnionCase {
            tag: key.tag,
            nested,
            span: span.to_miette(),
        }));
    }
    Ok(ConstructorCheck::Static(key))
}

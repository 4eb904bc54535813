//! Compilation of one match block against its union model.
//!
//! The stages run strictly in order and the first failure aborts: every
//! clause is validated against the model, coverage is accumulated, and the
//! block is checked for exhaustiveness. Emission of the verified dispatch is
//! the backend's job and performs no further checking.

use variant_lang_ast::{Clause, Dispatch, Pattern};
use variant_lang_miette_util::ToMiette;

use crate::check::{Check, Ctx};
use crate::coverage::CoverageSet;
use crate::result::{CheckError, CheckResult, comma_separated};

pub fn compile(dispatch: &Dispatch, ctx: &Ctx) -> CheckResult<Dispatch> {
    let Dispatch { span, union, on_exp, allow_underscore, clauses } = dispatch;
    let decl = ctx.table.lookup(union)?;
    log::trace!("Compiling match on union: {}", union.id);

    let on_exp = on_exp.check(ctx)?;
    let mut coverage = CoverageSet::new();
    let mut clauses_out = Vec::new();

    for clause in clauses {
        // Validate the clause head, then record its coverage.
        match &clause.pattern {
            Pattern::Wildcard(wildcard) => {
                if !allow_underscore {
                    return Err(Box::new(CheckError::UnderscoreNotAllowed {
                        span: wildcard.span.to_miette(),
                    }));
                }
                coverage.add_wildcard();
            }
            Pattern::Case(pattern) => {
                let key = pattern.key();
                if !decl.model.contains(&key) {
                    return Err(Box::new(CheckError::UndefinedUnionCase {
                        nested: key.arity > 0,
                        tag: key.tag,
                        span: pattern.tag.span.to_miette(),
                    }));
                }
                coverage.add(key);
            }
        }

        let Clause { span, pattern, guard, body } = clause;
        clauses_out.push(Clause {
            span: *span,
            pattern: pattern.clone(),
            guard: guard.check(ctx)?,
            body: body.check(ctx)?,
        });
    }

    let missing = coverage.missing(&decl.model);
    if !missing.is_empty() && !coverage.has_wildcard() {
        return Err(Box::new(CheckError::MissingUnionCase {
            union: union.id.clone(),
            missing: comma_separated(missing.iter().map(ToString::to_string)),
            span: span.to_miette(),
        }));
    }

    Ok(Dispatch {
        span: *span,
        union: union.clone(),
        on_exp,
        allow_underscore: *allow_underscore,
        clauses: clauses_out,
    })
}

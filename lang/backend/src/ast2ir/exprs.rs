use variant_lang_ast as ast;
use variant_lang_ast::{ConstructorCheck, UnionOp};

use crate::ir;
use crate::ir::Ident;
use crate::result::{BackendError, BackendResult};

use super::traits::ToIR;

impl ToIR for ast::Exp {
    type Target = ir::Exp;

    fn to_ir(&self) -> BackendResult<Self::Target> {
        match self {
            // A capitalized bare name is a tag literal; tags are strings in
            // the generated code.
            ast::Exp::Name(name) if name.is_tag() => Ok(ir::Exp::TagLit(name.id.clone())),
            ast::Exp::Name(name) => Ok(ir::Exp::Var(Ident::sanitize(&name.id))),
            ast::Exp::Call(call) => Ok(ir::Exp::Call(ir::Call {
                callee: Ident::sanitize(&call.name.id),
                args: call.args.to_ir()?,
            })),
            ast::Exp::Tuple(tuple) => Ok(ir::Exp::Array(tuple.elems.to_ir()?)),
            ast::Exp::NumLit(lit) => Ok(ir::Exp::Num(lit.val.clone())),
            ast::Exp::StringLit(lit) => Ok(ir::Exp::Str(lit.val.clone())),
            ast::Exp::UnionOp(call) => call.to_ir(),
            ast::Exp::Dispatch(dispatch) => dispatch.to_ir().map(ir::Exp::Dispatch),
        }
    }
}

impl ToIR for ast::UnionOpCall {
    type Target = ir::Exp;

    fn to_ir(&self) -> BackendResult<Self::Target> {
        let ast::UnionOpCall { union, op, args, check, .. } = self;
        let Some(check) = check else {
            return Err(BackendError::Unchecked {
                message: format!("constructor call {}.{} was never resolved", union.id, op),
            });
        };

        match check {
            // Membership is already established: construct directly.
            ConstructorCheck::Static(key) => {
                let args = match op {
                    UnionOp::From => match args[0].as_ref() {
                        ast::Exp::Tuple(tuple) => tuple.elems[1..].to_vec().to_ir()?,
                        _ => Vec::new(),
                    },
                    UnionOp::C => args[1..].to_vec().to_ir()?,
                    UnionOp::Named(_) => args.to_ir()?,
                    UnionOp::FromBang | UnionOp::CBang => {
                        return Err(BackendError::Impossible {
                            message: format!("{op} resolved statically"),
                        });
                    }
                };
                Ok(ir::Exp::NewTagged(ir::NewTagged {
                    union: union.id.clone(),
                    tag: key.tag.clone(),
                    args,
                }))
            }
            // The tag is a run-time value: defer to the generated run-time
            // constructor.
            ConstructorCheck::Dynamic => {
                let method = match op {
                    UnionOp::From | UnionOp::FromBang if args.len() == 1 => "from",
                    UnionOp::FromBang => "fromOr",
                    UnionOp::C | UnionOp::CBang => "c",
                    UnionOp::From | UnionOp::Named(_) => {
                        return Err(BackendError::Impossible {
                            message: format!("{op} deferred with {} arguments", args.len()),
                        });
                    }
                };
                Ok(ir::Exp::MethodCall(ir::MethodCall {
                    object: Ident::sanitize(&union.id),
                    method: method.to_owned(),
                    args: args.to_ir()?,
                }))
            }
        }
    }
}

impl ToIR for ast::Dispatch {
    type Target = ir::DispatchExp;

    fn to_ir(&self) -> BackendResult<Self::Target> {
        let ast::Dispatch { union, on_exp, clauses, .. } = self;
        let arms = clauses.iter().map(|c| c.to_ir()).collect::<BackendResult<_>>()?;
        Ok(ir::DispatchExp {
            union: union.id.clone(),
            scrutinee: Box::new(on_exp.to_ir()?),
            arms,
        })
    }
}

impl ToIR for ast::Clause {
    type Target = ir::Arm;

    fn to_ir(&self) -> BackendResult<Self::Target> {
        let ast::Clause { pattern, guard, body, .. } = self;
        let pattern = match pattern {
            ast::Pattern::Wildcard(_) => None,
            ast::Pattern::Case(case) => Some(ir::ArmPattern {
                tag: case.tag.id.clone(),
                binders: case
                    .params
                    .iter()
                    .map(|binder| match binder {
                        ast::BindingSite::Var { name, .. } => Some(Ident::sanitize(&name.id)),
                        ast::BindingSite::Wildcard { .. } => None,
                    })
                    .collect(),
            }),
        };
        Ok(ir::Arm { pattern, guard: guard.to_ir()?, body: body.to_ir()? })
    }
}

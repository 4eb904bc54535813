use std::rc::Rc;

use variant_lang_ast as ast;
use variant_lang_ast::ConstructorSet;
use variant_lang_miette_util::ToMiette;
use variant_lang_parser::cst;
use variant_lang_parser::cst::decls::Attribute;
use variant_lang_printer::tokens::ATTR_DYN_CONSTRUCTORS;

use crate::canonicalize::{CanonicalForm, canonical_form_of, is_tag_ident, split_alternation};
use crate::ctx::Ctx;
use crate::lower::{Lower, lower_ident};
use crate::result::{LoweringError, LoweringResult};
use crate::validate::{validate_cases, validate_constructor_names};

impl Lower for cst::decls::Decl {
    type Target = ast::Decl;

    fn lower(&self, ctx: &mut Ctx) -> LoweringResult<Self::Target> {
        match self {
            cst::decls::Decl::Union(union) => union.lower(ctx).map(ast::Decl::Union),
            cst::decls::Decl::Def(def) => def.lower(ctx).map(ast::Decl::Def),
        }
    }
}

impl Lower for cst::decls::UnionDecl {
    type Target = ast::Union;

    fn lower(&self, ctx: &mut Ctx) -> LoweringResult<Self::Target> {
        let cst::decls::UnionDecl { span, attr, name, cases } = self;
        log::trace!("Lowering union declaration: {}", name.id);

        let dyn_constructors = dyn_constructors_of(attr)?;

        let mut canonical = Vec::new();
        for raw in split_alternation(cases) {
            match canonical_form_of(raw)? {
                CanonicalForm::Wildcard { span } => {
                    return Err(Box::new(LoweringError::ReservedWildcard {
                        span: span.to_miette(),
                    }));
                }
                CanonicalForm::Case { span, tag, args } => {
                    if !is_tag_ident(tag) {
                        return Err(Box::new(LoweringError::NotSymbolic {
                            got: "a lowercase identifier".to_owned(),
                            span: tag.span.to_miette(),
                        }));
                    }
                    let descriptor = args
                        .iter()
                        .map(|arg| arg.lower(ctx).map(Rc::new))
                        .collect::<LoweringResult<Vec<_>>>()?;
                    canonical.push(ast::CanonicalCase {
                        span,
                        tag: lower_ident(tag),
                        arity: args.len(),
                        descriptor,
                    });
                }
            }
        }

        validate_cases(&canonical)?;
        let model = ast::UnionModel::new(lower_ident(name), canonical);
        if dyn_constructors {
            validate_constructor_names(&model)?;
        }
        let ctors = ConstructorSet::synthesize(&model, dyn_constructors);

        Ok(ast::Union { span: *span, name: lower_ident(name), dyn_constructors, model, ctors })
    }
}

impl Lower for cst::decls::Def {
    type Target = ast::Def;

    fn lower(&self, ctx: &mut Ctx) -> LoweringResult<Self::Target> {
        let cst::decls::Def { span, name, params, body } = self;
        log::trace!("Lowering definition: {}", name.id);

        Ok(ast::Def {
            span: *span,
            name: lower_ident(name),
            params: params.lower(ctx)?,
            body: body.lower(ctx)?,
        })
    }
}

/// Read the `dyn_constructors` configuration off a union declaration.
/// Per-case constructors are generated unless `#[dyn_constructors(false)]`
/// says otherwise.
pub fn dyn_constructors_of(attr: &Attribute) -> LoweringResult<bool> {
    let mut dyn_constructors = true;
    for attr in &attr.attrs {
        let arg = attr.arg.as_ref().map(|arg| arg.id.as_str());
        match (attr.name.id.as_str(), arg) {
            (ATTR_DYN_CONSTRUCTORS, Some("true")) => dyn_constructors = true,
            (ATTR_DYN_CONSTRUCTORS, Some("false")) => dyn_constructors = false,
            _ => {
                return Err(Box::new(LoweringError::UnknownAttribute {
                    name: attr.name.id.clone(),
                    span: attr.span.to_miette(),
                }));
            }
        }
    }
    Ok(dyn_constructors)
}

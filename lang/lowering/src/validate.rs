//! The model validator: rejects a canonicalized case list that would violate
//! the union model invariants. Failure aborts the whole union definition.

use variant_lang_ast as ast;
use variant_lang_ast::ctor::constructor_name_clash;
use variant_lang_miette_util::ToMiette;

use crate::result::{LoweringError, LoweringResult};

/// Tags must be unique within one union. Uniqueness is keyed on the tag
/// alone: the same tag with two different arities is still a duplicate,
/// since coverage reporting and case lookup are tag-keyed.
pub fn validate_cases(cases: &[ast::CanonicalCase]) -> LoweringResult<()> {
    for (i, case) in cases.iter().enumerate() {
        if cases[..i].iter().any(|prev| prev.tag.id == case.tag.id) {
            return Err(Box::new(LoweringError::DuplicateCase {
                tag: case.tag.id.clone(),
                span: case.tag.span.to_miette(),
            }));
        }
    }
    Ok(())
}

/// With `dyn_constructors` enabled, the tag normalization must be collision
/// free, otherwise two cases would synthesize the same operation.
pub fn validate_constructor_names(model: &ast::UnionModel) -> LoweringResult<()> {
    if let Some((fst, snd, name)) = constructor_name_clash(model) {
        return Err(Box::new(LoweringError::ConstructorNameClash {
            fst: fst.id,
            name,
            span: snd.span.to_miette(),
            snd: snd.id,
        }));
    }
    Ok(())
}

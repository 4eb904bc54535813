pub mod canonicalize;
mod ctx;
mod lower;
mod result;
mod symbol_table;
mod validate;

use variant_lang_parser::cst;

use crate::lower::Lower;

pub use ctx::*;
pub use result::*;
pub use symbol_table::DeclMeta;
pub use symbol_table::ModuleSymbolTable;
pub use symbol_table::build_symbol_table;

/// Lower a module: canonicalize and validate every union declaration into its
/// union model, and rewrite every match block into the canonical dispatch
/// form. Membership and exhaustiveness checking happen later, in the
/// elaborator.
pub fn lower_module(prg: &cst::decls::Module) -> LoweringResult<variant_lang_ast::Module> {
    log::debug!("Lowering module: {}", prg.uri);
    let symbol_table = build_symbol_table(prg)?;
    let mut ctx = Ctx::new(symbol_table);

    let decls = prg.items.lower(&mut ctx)?;

    Ok(variant_lang_ast::Module { uri: prg.uri.clone(), decls })
}

#[cfg(test)]
mod lowering_tests {
    use url::Url;
    use variant_lang_ast as ast;
    use variant_lang_parser::parse_module;

    use super::*;

    fn lower(src: &str) -> LoweringResult<ast::Module> {
        let uri = Url::parse("inmemory:///scratch.vt").unwrap();
        lower_module(&parse_module(uri, src).unwrap())
    }

    fn lowered(src: &str) -> ast::Module {
        lower(src).unwrap()
    }

    #[test]
    fn union_model_is_built_in_declaration_order() {
        let module = lowered("union Shape := Circle in Float | Rect in Float * Float | Empty");
        let union = module.unions().next().unwrap();
        let keys: Vec<_> = union.model.keys().collect();
        assert_eq!(keys, vec![
            ast::CaseKey::new("Circle", 1),
            ast::CaseKey::new("Rect", 2),
            ast::CaseKey::new("Empty", 0),
        ]);
        assert!(union.dyn_constructors);
    }

    #[test]
    fn all_case_surface_variants_canonicalize() {
        let module = lowered("union Mixed := A | B in T | C in T * U | D(T, U) | {E, T}");
        let union = module.unions().next().unwrap();
        let keys: Vec<_> = union.model.keys().collect();
        assert_eq!(keys, vec![
            ast::CaseKey::new("A", 0),
            ast::CaseKey::new("B", 1),
            ast::CaseKey::new("C", 2),
            ast::CaseKey::new("D", 2),
            ast::CaseKey::new("E", 1),
        ]);
    }

    #[test]
    fn dyn_constructors_attribute_disables_synthesis() {
        let module = lowered("#[dyn_constructors(false)]\nunion Flag := On | Off");
        let union = module.unions().next().unwrap();
        assert!(!union.dyn_constructors);
        assert!(union.constructor("on").is_none());
    }

    #[test]
    fn duplicate_tag_is_rejected_regardless_of_arity() {
        let err = lower("union S := A | A in T").unwrap_err();
        assert!(matches!(*err, LoweringError::DuplicateCase { .. }));
    }

    #[test]
    fn literal_case_is_not_symbolic() {
        let err = lower("union S := A | 1 in T").unwrap_err();
        assert!(matches!(*err, LoweringError::NotSymbolic { .. }));
    }

    #[test]
    fn lowercase_case_is_not_symbolic() {
        let err = lower("union S := A | b in T").unwrap_err();
        assert!(matches!(*err, LoweringError::NotSymbolic { .. }));
    }

    #[test]
    fn wildcard_cannot_be_declared() {
        let err = lower("union S := A | _").unwrap_err();
        assert!(matches!(*err, LoweringError::ReservedWildcard { .. }));
    }

    #[test]
    fn clashing_constructor_names_are_rejected() {
        let err = lower("union S := FooBar | Foo_bar").unwrap_err();
        assert!(matches!(*err, LoweringError::ConstructorNameClash { .. }));
    }

    #[test]
    fn clashing_constructor_names_are_fine_without_dyn_constructors() {
        let module = lowered("#[dyn_constructors(false)]\nunion S := FooBar | Foo_bar");
        assert_eq!(module.unions().next().unwrap().model.len(), 2);
    }

    #[test]
    fn duplicate_toplevel_names_are_rejected() {
        let err = lower("union S := A\nunion S := B").unwrap_err();
        assert!(matches!(*err, LoweringError::AlreadyDefined { .. }));
    }

    #[test]
    fn match_on_undefined_union_is_rejected() {
        let err = lower("def f(s) := match s as Shape { A => s }").unwrap_err();
        assert!(matches!(*err, LoweringError::UndefinedUnion { .. }));
    }

    #[test]
    fn patterns_are_normalized_to_the_canonical_form() {
        let module = lowered(
            r#"
            union Shape := Circle in Float | Rect in Float * Float | Empty

            def area(s) := match s as Shape {
                Circle(r) => r,
                Rect in w * h => mul(w, h),
                {Empty} => zero(),
            }
            "#,
        );
        let def = module.defs().next().unwrap();
        let ast::Exp::Dispatch(dispatch) = def.body.as_ref() else {
            panic!("expected dispatch body");
        };
        let keys: Vec<_> = dispatch
            .clauses
            .iter()
            .map(|c| match &c.pattern {
                ast::Pattern::Case(p) => p.key(),
                ast::Pattern::Wildcard(_) => panic!("unexpected wildcard"),
            })
            .collect();
        assert_eq!(keys, vec![
            ast::CaseKey::new("Circle", 1),
            ast::CaseKey::new("Rect", 2),
            ast::CaseKey::new("Empty", 0),
        ]);
    }

    #[test]
    fn guards_are_carried_through_unchanged() {
        let module = lowered(
            r#"
            union Flag := On | Off
            def f(x) := #[allow_underscore] match x as Flag {
                On if ready(x) => x,
                _ => x,
            }
            "#,
        );
        let def = module.defs().next().unwrap();
        let ast::Exp::Dispatch(dispatch) = def.body.as_ref() else {
            panic!("expected dispatch body");
        };
        assert!(dispatch.allow_underscore);
        assert!(dispatch.clauses[0].guard.is_some());
        assert!(matches!(dispatch.clauses[1].pattern, ast::Pattern::Wildcard(_)));
    }

    #[test]
    fn capitalized_binders_are_rejected() {
        let err = lower(
            "union S := A in T\ndef f(s) := match s as S { A(Qqq) => s }",
        )
        .unwrap_err();
        assert!(matches!(*err, LoweringError::InvalidBinder { .. }));
    }

    #[test]
    fn unknown_attributes_are_rejected() {
        let err = lower("#[frobnicate]\nunion S := A").unwrap_err();
        assert!(matches!(*err, LoweringError::UnknownAttribute { .. }));
    }

    #[test]
    fn union_operations_resolve_their_union() {
        let module = lowered("union S := A\ndef f() := S.from(A)");
        let def = module.defs().next().unwrap();
        let ast::Exp::UnionOp(call) = def.body.as_ref() else {
            panic!("expected union operation");
        };
        assert_eq!(call.op, ast::UnionOp::From);
        assert!(call.check.is_none());
    }

    #[test]
    fn union_operations_on_unknown_unions_are_rejected() {
        let err = lower("def f() := S.from(A)").unwrap_err();
        assert!(matches!(*err, LoweringError::UndefinedUnion { .. }));
    }
}

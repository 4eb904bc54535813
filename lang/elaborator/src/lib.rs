mod check;
mod coverage;
mod dispatch;
mod result;
mod table;

use variant_lang_ast::Module;

use crate::check::Check;

pub use check::Ctx;
pub use coverage::CoverageSet;
pub use result::*;
pub use table::{UnionTable, build_union_table};

/// Check a lowered module: compile every match block against its union model
/// and resolve every statically resolvable constructor call. On success the
/// returned module is ready for emission.
pub fn check_module(module: &Module) -> CheckResult<Module> {
    log::debug!("Checking module: {}", module.uri);
    let ctx = Ctx { table: build_union_table(module) };
    module.check(&ctx)
}

#[cfg(test)]
mod elaborator_tests {
    use url::Url;
    use variant_lang_ast as ast;
    use variant_lang_lowering::lower_module;
    use variant_lang_parser::parse_module;

    use super::*;

    fn check(src: &str) -> CheckResult<ast::Module> {
        let uri = Url::parse("inmemory:///scratch.vt").unwrap();
        let module = lower_module(&parse_module(uri, src).unwrap()).unwrap();
        check_module(&module)
    }

    const DEMO: &str = "union Demo := Asd | Rty in Int * String\n";

    #[test]
    fn exhaustive_match_compiles() {
        let src = format!(
            "{DEMO}
            def f(v) := match v as Demo {{
                Asd => zero(),
                Rty(a, b) => a,
            }}"
        );
        assert!(check(&src).is_ok());
    }

    #[test]
    fn missing_case_is_reported_by_name() {
        let src = format!(
            "{DEMO}
            def f(v) := match v as Demo {{
                Asd => zero(),
            }}"
        );
        let err = check(&src).unwrap_err();
        let CheckError::MissingUnionCase { missing, .. } = &*err else {
            panic!("expected MissingUnionCase, got {err:?}");
        };
        assert_eq!(missing, "Rty/2");
    }

    #[test]
    fn wildcard_requires_the_allow_underscore_option() {
        let src = format!(
            "{DEMO}
            def f(v) := match v as Demo {{
                Asd => zero(),
                _ => one(),
            }}"
        );
        let err = check(&src).unwrap_err();
        assert!(matches!(*err, CheckError::UnderscoreNotAllowed { .. }));
    }

    #[test]
    fn wildcard_with_allow_underscore_satisfies_exhaustiveness() {
        let src = format!(
            "{DEMO}
            def f(v) := #[allow_underscore] match v as Demo {{
                Asd => zero(),
                _ => one(),
            }}"
        );
        assert!(check(&src).is_ok());
    }

    #[test]
    fn allow_underscore_alone_does_not_waive_exhaustiveness() {
        let src = format!(
            "{DEMO}
            def f(v) := #[allow_underscore] match v as Demo {{
                Asd => zero(),
            }}"
        );
        let err = check(&src).unwrap_err();
        assert!(matches!(*err, CheckError::MissingUnionCase { .. }));
    }

    #[test]
    fn undeclared_clause_tag_fails_with_exact_message() {
        let src = format!(
            "{DEMO}
            def f(v) := match v as Demo {{
                Asd => zero(),
                Rty(a, b) => a,
                Qqq => one(),
            }}"
        );
        let err = check(&src).unwrap_err();
        assert_eq!(err.to_string(), "undefined union case: Qqq");
    }

    #[test]
    fn nested_unknown_tag_gets_the_container_suffix() {
        let src = format!(
            "{DEMO}
            def f(v) := match v as Demo {{
                Asd => zero(),
                Rty(a, b) => a,
                Qqq(x) => x,
            }}"
        );
        let err = check(&src).unwrap_err();
        assert_eq!(err.to_string(), "undefined union case: Qqq in _");
    }

    #[test]
    fn wrong_clause_arity_is_an_unknown_case() {
        let src = format!(
            "{DEMO}
            def f(v) := match v as Demo {{
                Asd => zero(),
                Rty(a) => a,
            }}"
        );
        let err = check(&src).unwrap_err();
        assert_eq!(err.to_string(), "undefined union case: Rty in _");
    }

    #[test]
    fn duplicate_clauses_are_legal() {
        let src = format!(
            "{DEMO}
            def f(v) := match v as Demo {{
                Asd => zero(),
                Asd => one(),
                Rty(a, b) => a,
            }}"
        );
        assert!(check(&src).is_ok());
    }

    #[test]
    fn guarded_clauses_count_toward_coverage() {
        let src = format!(
            "{DEMO}
            def f(v) := match v as Demo {{
                Asd if ready(v) => zero(),
                Rty(a, b) => a,
            }}"
        );
        assert!(check(&src).is_ok());
    }

    fn first_op(module: &ast::Module) -> &ast::UnionOpCall {
        let def = module.defs().next().unwrap();
        let ast::Exp::UnionOp(call) = def.body.as_ref() else {
            panic!("expected a union operation body");
        };
        call
    }

    #[test]
    fn static_from_resolves_membership_at_build_time() {
        let module = check(&format!("{DEMO}def f() := Demo.from(Asd)")).unwrap();
        assert_eq!(
            first_op(&module).check,
            Some(ast::ConstructorCheck::Static(ast::CaseKey::new("Asd", 0)))
        );

        let module =
            check(&format!("{DEMO}def f(x) := Demo.from({{Rty, x, \"ok\"}})")).unwrap();
        assert_eq!(
            first_op(&module).check,
            Some(ast::ConstructorCheck::Static(ast::CaseKey::new("Rty", 2)))
        );
    }

    #[test]
    fn static_from_fails_on_unknown_case() {
        let err = check(&format!("{DEMO}def f() := Demo.from(Qqq)")).unwrap_err();
        assert_eq!(err.to_string(), "undefined union case: Qqq");

        let err = check(&format!("{DEMO}def f(x) := Demo.from({{Qqq, x}})")).unwrap_err();
        assert_eq!(err.to_string(), "undefined union case: Qqq in _");
    }

    #[test]
    fn dynamic_from_defers_to_the_runtime_constructor() {
        let module = check(&format!("{DEMO}def f(t) := Demo.from(t)")).unwrap();
        assert_eq!(first_op(&module).check, Some(ast::ConstructorCheck::Dynamic));
    }

    #[test]
    fn from_bang_is_always_deferred() {
        let module = check(&format!("{DEMO}def f() := Demo.from!(Qqq)")).unwrap();
        assert_eq!(first_op(&module).check, Some(ast::ConstructorCheck::Dynamic));

        // The two-argument form supplies a fallback.
        let module =
            check(&format!("{DEMO}def f(d) := Demo.from!(Qqq, d)")).unwrap();
        assert_eq!(first_op(&module).check, Some(ast::ConstructorCheck::Dynamic));

        let err = check(&format!("{DEMO}def f(d, e) := Demo.from!(Qqq, d, e)")).unwrap_err();
        assert!(matches!(*err, CheckError::ArgLenMismatch { .. }));
    }

    #[test]
    fn static_c_checks_tag_and_arity() {
        let module =
            check(&format!("{DEMO}def f(x) := Demo.c(Rty, x, \"ok\")")).unwrap();
        assert_eq!(
            first_op(&module).check,
            Some(ast::ConstructorCheck::Static(ast::CaseKey::new("Rty", 2)))
        );

        let err = check(&format!("{DEMO}def f(x) := Demo.c(Rty, x)")).unwrap_err();
        assert_eq!(err.to_string(), "undefined union case: Rty in _");

        let err = check(&format!("{DEMO}def f() := Demo.c(Qqq)")).unwrap_err();
        assert_eq!(err.to_string(), "undefined union case: Qqq");
    }

    #[test]
    fn named_constructors_resolve_when_synthesized() {
        let module = check(&format!("{DEMO}def f(x) := Demo.rty(x, \"ok\")")).unwrap();
        assert_eq!(
            first_op(&module).check,
            Some(ast::ConstructorCheck::Static(ast::CaseKey::new("Rty", 2)))
        );
    }

    #[test]
    fn named_constructor_arity_is_checked() {
        let err = check(&format!("{DEMO}def f(x) := Demo.rty(x)")).unwrap_err();
        assert!(matches!(
            *err,
            CheckError::ArgLenMismatch { expected: 2, actual: 1, .. }
        ));
    }

    #[test]
    fn unknown_named_operations_are_unresolved() {
        let err = check(&format!("{DEMO}def f() := Demo.qqq()")).unwrap_err();
        assert!(matches!(*err, CheckError::UnknownOperation { .. }));
    }

    #[test]
    fn named_constructors_do_not_exist_without_dyn_constructors() {
        let src = "#[dyn_constructors(false)]\nunion Flag := On | Off\ndef f() := Flag.on()";
        let err = check(src).unwrap_err();
        // An unresolved operation, not an undefined-case error.
        assert!(matches!(*err, CheckError::UnknownOperation { .. }));
    }

    #[test]
    fn nested_dispatches_in_bodies_are_checked_too() {
        let src = format!(
            "{DEMO}
            def f(v, w) := match v as Demo {{
                Asd => match w as Demo {{ Asd => zero() }},
                Rty(a, b) => a,
            }}"
        );
        let err = check(&src).unwrap_err();
        assert!(matches!(*err, CheckError::MissingUnionCase { .. }));
    }
}

pub mod cst;
mod grammar;
pub mod lexer;
mod result;

use url::Url;

use grammar::cst::{ExpParser, ModuleParser};
use lexer::Lexer;
pub use result::*;

pub fn parse_exp(s: &str) -> Result<cst::exp::Exp, ParseError> {
    ExpParser::new().parse(Lexer::new(s)).map_err(From::from)
}

pub fn parse_module(uri: Url, s: &str) -> Result<cst::decls::Module, ParseError> {
    let items = ModuleParser::new().parse(Lexer::new(s))?;
    Ok(cst::decls::Module { uri, items })
}

#[cfg(test)]
mod parser_tests {
    use super::*;
    use crate::cst::exp::Exp;

    fn uri() -> Url {
        Url::parse("inmemory:///scratch.vt").unwrap()
    }

    #[test]
    fn parse_union_and_def() {
        let src = r#"
            union Shape := Circle in Float | Rect in Float * Float | Empty

            def area(s) := match s as Shape {
                Circle(r) => mul(r, r),
                Rect in w * h => mul(w, h),
                Empty => zero(),
            }
        "#;
        let module = parse_module(uri(), src).unwrap();
        assert_eq!(module.items.len(), 2);
    }

    #[test]
    fn parse_attributes() {
        let src = r#"
            #[dyn_constructors(false)]
            union Flag := On | Off

            def pick(f, d) := #[allow_underscore] match f as Flag {
                On => d,
                _ => d,
            }
        "#;
        let module = parse_module(uri(), src).unwrap();
        assert_eq!(module.items.len(), 2);
    }

    #[test]
    fn parse_union_operations() {
        let exp = parse_exp(r#"Shape.from!({Rty, 1, "ok"}, fallback)"#).unwrap();
        match exp {
            Exp::UnionCall(call) => {
                assert_eq!(call.union.id, "Shape");
                assert_eq!(call.op.id, "from!");
                assert_eq!(call.args.len(), 2);
            }
            other => panic!("expected union call, got {other:?}"),
        }
    }

    #[test]
    fn alternation_is_left_associative() {
        let exp = parse_exp("A | B | C").unwrap();
        match exp {
            Exp::BinOp(op) => {
                assert_eq!(op.op, crate::cst::exp::BinOpKind::Alt);
                assert!(matches!(*op.lhs, Exp::BinOp(_)));
                assert!(matches!(*op.rhs, Exp::Name(_)));
            }
            other => panic!("expected alternation, got {other:?}"),
        }
    }

    #[test]
    fn product_binds_tighter_than_in() {
        let exp = parse_exp("Rect in Float * Float").unwrap();
        match exp {
            Exp::BinOp(op) => {
                assert_eq!(op.op, crate::cst::exp::BinOpKind::In);
                assert!(matches!(*op.rhs, Exp::BinOp(_)));
            }
            other => panic!("expected in-expression, got {other:?}"),
        }
    }

    #[test]
    fn reject_unclosed_match() {
        let src = "def f(s) := match s as Shape { Empty => zero(),";
        assert!(parse_module(uri(), src).is_err());
    }
}

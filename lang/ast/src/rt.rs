//! The run-time side of a union: tagged values, the fallible conversion and
//! construction operations, and clause selection for compiled dispatches.
//!
//! Everything here is an ordinary synchronous operation on a single value.
//! Errors are plain recoverable errors; the `*_or` forms return a
//! caller-supplied fallback instead of failing.

use std::fmt;

use num_bigint::BigUint;
use thiserror::Error;

use crate::exp::{BindingSite, Clause, Dispatch, Pattern};
use crate::model::UnionModel;

/// A loosely structured host value, as handed to the run-time constructors.
///
/// A value denotes a union case either as a bare tag or as a tuple whose
/// first slot is the tag and whose remaining slots are the case arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Tag(String),
    Int(BigUint),
    Str(String),
    Tuple(Vec<Value>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Tag(tag) => write!(f, "{tag}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "\"{s}\""),
            Value::Tuple(elems) => {
                write!(f, "{{")?;
                for (i, elem) in elems.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{elem}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// A concrete instance of a union: the active tag plus its positional
/// arguments, tied to the union it was built for.
///
/// Tagged values are only produced through the constructors in this module,
/// which is what guarantees that the `(tag, arity)` pair is a declared case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedValue {
    pub union: String,
    pub tag: String,
    pub args: Vec<Value>,
}

fn nested_suffix(nested: &bool) -> &'static str {
    if *nested { " in _" } else { "" }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("undefined union case: {tag}{}", nested_suffix(.nested))]
    UndefinedUnionCase { tag: String, nested: bool },
    #[error("expected a tagged value of union {expected}")]
    StructuralMismatch { expected: String },
    #[error("constructor {name} takes {expected} arguments, got {actual}")]
    ArityMismatch { name: String, expected: usize, actual: usize },
    #[error("no clause matches case {tag}")]
    UnhandledCase { tag: String },
}

/// The case a raw value denotes: its tag rendering, its arguments, and
/// whether the tag sat inside a multi-slot container (which decides the
/// `" in _"` suffix of the error message).
fn probe(value: &Value) -> (String, Vec<Value>, bool) {
    match value {
        Value::Tag(tag) => (tag.clone(), Vec::new(), false),
        Value::Tuple(elems) if !elems.is_empty() => {
            (elems[0].to_string(), elems[1..].to_vec(), elems.len() > 1)
        }
        other => (other.to_string(), Vec::new(), false),
    }
}

impl UnionModel {
    /// Convert a raw value into a tagged value of this union, failing when
    /// its `(tag, arity)` pair is not a declared case.
    pub fn from_value(&self, value: &Value) -> Result<TaggedValue, RuntimeError> {
        let (tag, args, nested) = probe(value);
        if self.lookup(&tag, args.len()).is_none() {
            return Err(RuntimeError::UndefinedUnionCase { tag, nested });
        }
        Ok(TaggedValue { union: self.name().id.clone(), tag, args })
    }

    /// Like [UnionModel::from_value], but returns `fallback` instead of
    /// failing on an unknown case.
    pub fn from_value_or(&self, value: &Value, fallback: TaggedValue) -> TaggedValue {
        self.from_value(value).unwrap_or(fallback)
    }

    /// Direct positional construction from a tag and its arguments.
    pub fn construct(&self, tag: &str, args: Vec<Value>) -> Result<TaggedValue, RuntimeError> {
        if self.lookup(tag, args.len()).is_none() {
            return Err(RuntimeError::UndefinedUnionCase {
                tag: tag.to_owned(),
                nested: !args.is_empty(),
            });
        }
        Ok(TaggedValue { union: self.name().id.clone(), tag: tag.to_owned(), args })
    }
}

/// The clause a dispatch selected for a value, with the argument bindings
/// the pattern established.
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    pub index: usize,
    pub clause: &'a Clause,
    pub bindings: Vec<(String, Value)>,
}

impl Dispatch {
    /// Select the first clause matching the value, in clause order.
    ///
    /// Guards are opaque to the compiler and are not evaluated here; the
    /// selected clause carries its guard for the host to decide.
    pub fn select<'a>(&'a self, value: &TaggedValue) -> Result<Selection<'a>, RuntimeError> {
        if value.union != self.union.id {
            return Err(RuntimeError::StructuralMismatch { expected: self.union.id.clone() });
        }
        for (index, clause) in self.clauses.iter().enumerate() {
            match &clause.pattern {
                Pattern::Wildcard(_) => {
                    return Ok(Selection { index, clause, bindings: Vec::new() });
                }
                Pattern::Case(pattern)
                    if pattern.tag.id == value.tag && pattern.params.len() == value.args.len() =>
                {
                    let bindings = pattern
                        .params
                        .iter()
                        .zip(&value.args)
                        .filter_map(|(binder, arg)| match binder {
                            BindingSite::Var { name, .. } => {
                                Some((name.id.clone(), arg.clone()))
                            }
                            BindingSite::Wildcard { .. } => None,
                        })
                        .collect();
                    return Ok(Selection { index, clause, bindings });
                }
                Pattern::Case(_) => {}
            }
        }
        Err(RuntimeError::UnhandledCase { tag: value.tag.clone() })
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use codespan::Span;

    use super::*;
    use crate::ctor::ConstructorSet;
    use crate::exp::{CasePattern, Exp, WildcardPattern};
    use crate::ident::Ident;
    use crate::model::CanonicalCase;

    fn ident(id: &str) -> Ident {
        Ident { span: Span::default(), id: id.to_owned() }
    }

    fn case(tag: &str, arity: usize) -> CanonicalCase {
        CanonicalCase { span: Span::default(), tag: ident(tag), arity, descriptor: Vec::new() }
    }

    fn model() -> UnionModel {
        UnionModel::new(ident("Demo"), vec![case("Asd", 0), case("Rty", 2)])
    }

    fn int(n: u32) -> Value {
        Value::Int(n.into())
    }

    #[test]
    fn construction_paths_agree() {
        let model = model();
        let ctors = ConstructorSet::synthesize(&model, true);

        let via_from = model.from_value(&Value::Tag("Asd".to_owned())).unwrap();
        let via_c = model.construct("Asd", vec![]).unwrap();
        let via_named = ctors.get("asd").unwrap().build(vec![]).unwrap();
        assert_eq!(via_from, via_c);
        assert_eq!(via_c, via_named);

        let tuple = Value::Tuple(vec![
            Value::Tag("Rty".to_owned()),
            int(1),
            Value::Str("ok".to_owned()),
        ]);
        let via_from = model.from_value(&tuple).unwrap();
        let via_c = model
            .construct("Rty", vec![int(1), Value::Str("ok".to_owned())])
            .unwrap();
        let via_named = ctors
            .get("rty")
            .unwrap()
            .build(vec![int(1), Value::Str("ok".to_owned())])
            .unwrap();
        assert_eq!(via_from, via_c);
        assert_eq!(via_c, via_named);
    }

    #[test]
    fn unknown_case_fails_with_exact_message() {
        let model = model();
        let err = model.from_value(&Value::Tag("Qqq".to_owned())).unwrap_err();
        assert_eq!(err.to_string(), "undefined union case: Qqq");

        let err = model
            .from_value(&Value::Tuple(vec![Value::Tag("Qqq".to_owned()), int(1)]))
            .unwrap_err();
        assert_eq!(err.to_string(), "undefined union case: Qqq in _");

        // Arity decides identity: a known tag with the wrong argument count
        // is an unknown case.
        let err = model.construct("Rty", vec![int(1)]).unwrap_err();
        assert_eq!(err.to_string(), "undefined union case: Rty in _");
    }

    #[test]
    fn fallback_form_never_fails() {
        let model = model();
        let fallback = model.construct("Asd", vec![]).unwrap();
        let out = model.from_value_or(&Value::Tag("Qqq".to_owned()), fallback.clone());
        assert_eq!(out, fallback);
    }

    #[test]
    fn disabled_dyn_constructors_resolve_to_nothing() {
        let model = model();
        let ctors = ConstructorSet::synthesize(&model, false);
        assert!(ctors.get("asd").is_none());
        assert!(ctors.is_empty());
    }

    #[test]
    fn constructor_arity_is_enforced() {
        let model = model();
        let ctors = ConstructorSet::synthesize(&model, true);
        let err = ctors.get("rty").unwrap().build(vec![int(1)]).unwrap_err();
        assert!(matches!(err, RuntimeError::ArityMismatch { expected: 2, actual: 1, .. }));
    }

    fn demo_dispatch() -> Dispatch {
        let span = Span::default();
        Dispatch {
            span,
            union: ident("Demo"),
            on_exp: Rc::new(Exp::Name(ident("s"))),
            allow_underscore: false,
            clauses: vec![
                Clause {
                    span,
                    pattern: Pattern::Case(CasePattern {
                        span,
                        tag: ident("Rty"),
                        params: vec![
                            BindingSite::Var { span, name: ident("a") },
                            BindingSite::Var { span, name: ident("b") },
                        ],
                    }),
                    guard: None,
                    body: Rc::new(Exp::Name(ident("a"))),
                },
                Clause {
                    span,
                    pattern: Pattern::Wildcard(WildcardPattern { span }),
                    guard: None,
                    body: Rc::new(Exp::Name(ident("d"))),
                },
            ],
        }
    }

    #[test]
    fn selection_recovers_arguments_unchanged() {
        let model = model();
        let value = model
            .construct("Rty", vec![int(1), Value::Str("ok".to_owned())])
            .unwrap();
        let dispatch = demo_dispatch();
        let selection = dispatch.select(&value).unwrap();
        assert_eq!(selection.index, 0);
        assert_eq!(
            selection.bindings,
            vec![
                ("a".to_owned(), int(1)),
                ("b".to_owned(), Value::Str("ok".to_owned())),
            ]
        );
    }

    #[test]
    fn wildcard_catches_remaining_cases() {
        let model = model();
        let value = model.construct("Asd", vec![]).unwrap();
        let dispatch = demo_dispatch();
        let selection = dispatch.select(&value).unwrap();
        assert_eq!(selection.index, 1);
        assert!(selection.bindings.is_empty());
    }

    #[test]
    fn foreign_values_are_a_structural_mismatch() {
        let foreign = TaggedValue {
            union: "Other".to_owned(),
            tag: "Asd".to_owned(),
            args: vec![],
        };
        let err = demo_dispatch().select(&foreign).unwrap_err();
        assert!(matches!(err, RuntimeError::StructuralMismatch { .. }));
    }
}

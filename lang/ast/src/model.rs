//! The union model: the immutable, ordered table of canonical cases owned by
//! one union declaration. It is built exactly once, when the declaration is
//! lowered, and every later query (constructor synthesis, match compilation,
//! runtime conversion) reads from it.

use std::fmt;
use std::rc::Rc;

use codespan::Span;
use pretty::DocAllocator;
use variant_lang_printer::theme::ThemeExt;
use variant_lang_printer::tokens::{IN, STAR};
use variant_lang_printer::{Alloc, Builder, Print, PrintCfg};

use crate::exp::Exp;
use crate::ident::Ident;

/// The identity of a union case.
///
/// Two cases are the same case if and only if their tag and arity agree; the
/// type descriptor never participates in comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CaseKey {
    pub tag: String,
    pub arity: usize,
}

impl CaseKey {
    pub fn new(tag: impl Into<String>, arity: usize) -> Self {
        CaseKey { tag: tag.into(), arity }
    }
}

impl fmt::Display for CaseKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.tag, self.arity)
    }
}

/// The canonical triple `(tag, arity, type descriptor)` of one declared case.
///
/// The descriptor is carried verbatim for display purposes only; it is never
/// checked against anything.
#[derive(Debug, Clone)]
pub struct CanonicalCase {
    pub span: Span,
    pub tag: Ident,
    pub arity: usize,
    pub descriptor: Vec<Rc<Exp>>,
}

impl CanonicalCase {
    pub fn key(&self) -> CaseKey {
        CaseKey { tag: self.tag.id.clone(), arity: self.arity }
    }
}

impl Print for CanonicalCase {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let CanonicalCase { tag, descriptor, .. } = self;
        if descriptor.is_empty() {
            alloc.tag(&tag.id)
        } else {
            let types = alloc.intersperse(
                descriptor.iter().map(|t| t.print(cfg, alloc)),
                alloc.space().append(STAR).append(alloc.space()),
            );
            alloc
                .tag(&tag.id)
                .append(alloc.space())
                .append(alloc.keyword(IN))
                .append(alloc.space())
                .append(types)
        }
    }
}

/// The ordered case table of one union declaration.
///
/// Fields are private so the table cannot be mutated after construction.
#[derive(Debug, Clone)]
pub struct UnionModel {
    name: Ident,
    cases: Vec<CanonicalCase>,
}

impl UnionModel {
    /// Build the model from the validated case list. Callers must have
    /// established the model invariants beforehand: all tags are symbolic and
    /// no tag occurs twice.
    pub fn new(name: Ident, cases: Vec<CanonicalCase>) -> Self {
        UnionModel { name, cases }
    }

    pub fn name(&self) -> &Ident {
        &self.name
    }

    /// The full case enumeration, in declaration order.
    pub fn cases(&self) -> &[CanonicalCase] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = CaseKey> + '_ {
        self.cases.iter().map(CanonicalCase::key)
    }

    pub fn contains(&self, key: &CaseKey) -> bool {
        self.lookup(&key.tag, key.arity).is_some()
    }

    pub fn lookup(&self, tag: &str, arity: usize) -> Option<&CanonicalCase> {
        self.cases.iter().find(|c| c.tag.id == tag && c.arity == arity)
    }

    /// Look up a case by tag alone. Unambiguous because tags are unique
    /// within one union regardless of arity.
    pub fn lookup_tag(&self, tag: &str) -> Option<&CanonicalCase> {
        self.cases.iter().find(|c| c.tag.id == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> UnionModel {
        let span = Span::default();
        UnionModel::new(
            Ident { span, id: "Shape".to_owned() },
            vec![
                CanonicalCase {
                    span,
                    tag: Ident { span, id: "Circle".to_owned() },
                    arity: 1,
                    descriptor: vec![],
                },
                CanonicalCase {
                    span,
                    tag: Ident { span, id: "Empty".to_owned() },
                    arity: 0,
                    descriptor: vec![],
                },
            ],
        )
    }

    #[test]
    fn lookup_keys_on_tag_and_arity() {
        let model = model();
        assert!(model.contains(&CaseKey::new("Circle", 1)));
        assert!(!model.contains(&CaseKey::new("Circle", 2)));
        assert!(model.contains(&CaseKey::new("Empty", 0)));
        assert!(!model.contains(&CaseKey::new("Square", 0)));
    }

    #[test]
    fn lookup_tag_ignores_arity() {
        let model = model();
        assert_eq!(model.lookup_tag("Circle").unwrap().arity, 1);
        assert!(model.lookup_tag("Square").is_none());
    }

    #[test]
    fn declaration_order_is_preserved() {
        let tags: Vec<_> = model().keys().map(|k| k.tag).collect();
        assert_eq!(tags, vec!["Circle", "Empty"]);
    }
}

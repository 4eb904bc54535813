//! Constructor synthesis.
//!
//! For a finalized union model we synthesize one named constructor per case,
//! under a deterministic normalization of the tag name. The synthesized table
//! is consulted by the elaborator (to resolve named constructor calls), by
//! the backend (to emit the constructor operations) and by the runtime.

use crate::ident::Ident;
use crate::model::{CaseKey, UnionModel};
use crate::rt::{RuntimeError, TaggedValue, Value};

/// The normalized operation name for a tag: `snake_case` of the tag.
///
/// The normalization must be collision free within one union; the validator
/// rejects declarations where two tags normalize to the same name.
pub fn constructor_name(tag: &str) -> String {
    let mut out = String::with_capacity(tag.len() + 2);
    let chars: Vec<char> = tag.chars().collect();
    for (i, c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev = if i > 0 { Some(chars[i - 1]) } else { None };
            let prev_lower = prev.is_some_and(|p| !p.is_uppercase() && p != '_');
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_some_and(|p| p != '_') && (prev_lower || next_lower) {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(*c);
        }
    }
    out
}

/// One synthesized per-case constructor.
#[derive(Debug, Clone)]
pub struct NamedConstructor {
    pub name: String,
    pub case: CaseKey,
}

/// The synthesized constructor table of one union.
///
/// When `dyn_constructors` is disabled for the union, the table is empty:
/// the per-case operations do not exist at all, and calling one is an
/// unresolved-operation error rather than a thrown exception.
#[derive(Debug, Clone)]
pub struct ConstructorSet {
    union: String,
    ctors: Vec<NamedConstructor>,
}

impl ConstructorSet {
    pub fn synthesize(model: &UnionModel, enabled: bool) -> ConstructorSet {
        let ctors = if enabled {
            model
                .cases()
                .iter()
                .map(|c| NamedConstructor { name: constructor_name(&c.tag.id), case: c.key() })
                .collect()
        } else {
            Vec::new()
        };
        ConstructorSet { union: model.name().id.clone(), ctors }
    }

    pub fn get(&self, name: &str) -> Option<CaseConstructor<'_>> {
        self.ctors
            .iter()
            .find(|c| c.name == name)
            .map(|ctor| CaseConstructor { union: &self.union, ctor })
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedConstructor> {
        self.ctors.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.ctors.is_empty()
    }
}

/// A resolved named constructor, ready to build tagged values.
///
/// The operation only exists for declared cases, so the produced value is
/// valid by construction; the only possible failure is an argument count
/// mismatch.
#[derive(Debug, Clone, Copy)]
pub struct CaseConstructor<'a> {
    union: &'a str,
    ctor: &'a NamedConstructor,
}

impl CaseConstructor<'_> {
    pub fn case(&self) -> &CaseKey {
        &self.ctor.case
    }

    pub fn build(&self, args: Vec<Value>) -> Result<TaggedValue, RuntimeError> {
        if args.len() != self.ctor.case.arity {
            return Err(RuntimeError::ArityMismatch {
                name: self.ctor.name.clone(),
                expected: self.ctor.case.arity,
                actual: args.len(),
            });
        }
        Ok(TaggedValue {
            union: self.union.to_owned(),
            tag: self.ctor.case.tag.clone(),
            args,
        })
    }
}

/// Check the collision freedom of the normalization for one union: returns
/// the two tags that clash, if any.
pub fn constructor_name_clash(model: &UnionModel) -> Option<(Ident, Ident, String)> {
    for (i, fst) in model.cases().iter().enumerate() {
        let name = constructor_name(&fst.tag.id);
        for snd in &model.cases()[i + 1..] {
            if constructor_name(&snd.tag.id) == name {
                return Some((fst.tag.clone(), snd.tag.clone(), name));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization() {
        assert_eq!(constructor_name("Asd"), "asd");
        assert_eq!(constructor_name("Rty"), "rty");
        assert_eq!(constructor_name("HttpError"), "http_error");
        assert_eq!(constructor_name("HTTPError"), "http_error");
        assert_eq!(constructor_name("A"), "a");
    }

    #[test]
    fn normalization_collisions() {
        assert_eq!(constructor_name("FooBar"), constructor_name("Foo_bar"));
        assert_eq!(constructor_name("FooBar"), constructor_name("Foo_Bar"));
    }
}

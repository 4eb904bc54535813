use std::fmt;

use codespan::Span;
use derivative::Derivative;

/// A resolved identifier in the abstract syntax tree.
///
/// The span is ignored for comparisons and hashing, so that two occurrences of
/// the same name are the same identifier no matter where they appear.
#[derive(Debug, Clone, Derivative)]
#[derivative(Eq, PartialEq, Hash)]
pub struct Ident {
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    pub span: Span,
    pub id: String,
}

impl Ident {
    /// Whether this identifier follows the case convention for union tags.
    ///
    /// Tags are capitalized; everything lowercase is a binder, a definition
    /// name or an operation name. This convention is what makes a tag in
    /// argument position of `from`/`c` statically recognizable.
    pub fn is_tag(&self) -> bool {
        self.id.chars().next().is_some_and(|c| c.is_uppercase())
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.id.fmt(f)
    }
}

use codespan::Span;
use derivative::Derivative;

#[derive(Debug, Clone, Derivative)]
#[derivative(Eq, PartialEq, Hash)]
pub struct Ident {
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    pub span: Span,
    pub id: String,
}

/// The name of a union operation after the dot, e.g. `from` or `from!`.
#[derive(Debug, Clone)]
pub struct OpName {
    pub span: Span,
    pub id: String,
}

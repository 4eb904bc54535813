use codespan::Span;

/// Build a span from the byte offsets lalrpop hands us.
pub fn span(l: usize, r: usize) -> Span {
    Span::new(l as u32, r as u32)
}

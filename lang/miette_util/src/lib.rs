//! Diagnostics are rendered with [miette], but the compiler pipeline tracks
//! source locations with [codespan] spans. This crate provides the conversion
//! between the two.

pub trait ToMiette {
    type Target;

    fn to_miette(self) -> Self::Target;
}

impl ToMiette for codespan::ByteIndex {
    type Target = miette::SourceOffset;

    fn to_miette(self) -> Self::Target {
        self.to_usize().into()
    }
}

impl ToMiette for codespan::Span {
    type Target = miette::SourceSpan;

    fn to_miette(self) -> Self::Target {
        let length = self.end().to_usize() - self.start().to_usize();
        miette::SourceSpan::new(self.start().to_miette(), length)
    }
}

impl<T: ToMiette> ToMiette for Option<T> {
    type Target = Option<T::Target>;

    fn to_miette(self) -> Self::Target {
        self.map(ToMiette::to_miette)
    }
}

#[cfg(test)]
mod tests {
    use super::ToMiette;
    use codespan::Span;

    #[test]
    fn span_to_source_span() {
        let span = Span::new(3, 10);
        let source_span = span.to_miette();
        assert_eq!(source_span.offset(), 3);
        assert_eq!(source_span.len(), 7);
    }
}

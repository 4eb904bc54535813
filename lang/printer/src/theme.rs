use pretty::{
    DocAllocator,
    termcolor::{Color, ColorSpec},
};

use super::types::*;

const KEYWORD: Color = Color::Magenta;
const TAG: Color = Color::Blue;
const TYPE: Color = Color::Red;
const COMMENT: Color = Color::Cyan;

pub trait ThemeExt<'a> {
    fn keyword(&'a self, text: &'a str) -> Builder<'a>;
    fn tag(&'a self, text: impl Into<String>) -> Builder<'a>;
    fn typ(&'a self, text: impl Into<String>) -> Builder<'a>;
    fn comment(&'a self, text: &'a str) -> Builder<'a>;
}

impl<'a> ThemeExt<'a> for Alloc<'a> {
    fn keyword(&'a self, text: &'a str) -> Builder<'a> {
        self.text(text).annotate(KEYWORD.spec())
    }

    fn tag(&'a self, text: impl Into<String>) -> Builder<'a> {
        self.text(text.into()).annotate(TAG.spec())
    }

    fn typ(&'a self, text: impl Into<String>) -> Builder<'a> {
        self.text(text.into()).annotate(TYPE.spec())
    }

    fn comment(&'a self, text: &'a str) -> Builder<'a> {
        self.text(text).annotate(COMMENT.spec())
    }
}

pub trait ColorExt {
    fn spec(self) -> ColorSpec;
}

impl ColorExt for Color {
    fn spec(self) -> ColorSpec {
        ColorSpec::new().set_fg(Some(self)).clone()
    }
}

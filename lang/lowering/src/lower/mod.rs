pub mod decls;
pub mod exp;

use std::rc::Rc;

use variant_lang_ast as ast;
use variant_lang_parser::cst;

use crate::ctx::Ctx;
use crate::result::LoweringResult;

pub trait Lower {
    type Target;

    fn lower(&self, ctx: &mut Ctx) -> LoweringResult<Self::Target>;
}

impl<T: Lower> Lower for Option<T> {
    type Target = Option<T::Target>;

    fn lower(&self, ctx: &mut Ctx) -> LoweringResult<Self::Target> {
        self.as_ref().map(|x| x.lower(ctx)).transpose()
    }
}

impl<T: Lower> Lower for Vec<T> {
    type Target = Vec<T::Target>;

    fn lower(&self, ctx: &mut Ctx) -> LoweringResult<Self::Target> {
        self.iter().map(|x| x.lower(ctx)).collect()
    }
}

impl<T: Lower> Lower for Rc<T> {
    type Target = Rc<T::Target>;

    fn lower(&self, ctx: &mut Ctx) -> LoweringResult<Self::Target> {
        (**self).lower(ctx).map(Rc::new)
    }
}

impl<T: Lower> Lower for Box<T> {
    type Target = Box<T::Target>;

    fn lower(&self, ctx: &mut Ctx) -> LoweringResult<Self::Target> {
        (**self).lower(ctx).map(Box::new)
    }
}

pub fn lower_ident(ident: &cst::Ident) -> ast::Ident {
    ast::Ident { span: ident.span, id: ident.id.clone() }
}

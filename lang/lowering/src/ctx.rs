use variant_lang_miette_util::ToMiette;
use variant_lang_parser::cst;

use crate::result::{LoweringError, LoweringResult};
use crate::symbol_table::{DeclMeta, ModuleSymbolTable};

pub struct Ctx {
    pub symbol_table: ModuleSymbolTable,
}

impl Ctx {
    pub fn new(symbol_table: ModuleSymbolTable) -> Self {
        Ctx { symbol_table }
    }

    /// Resolve a name that must denote a union declared in this module.
    pub fn expect_union(&self, name: &cst::Ident) -> LoweringResult<()> {
        match self.symbol_table.get(&name.id) {
            Some(DeclMeta::Union { .. }) => Ok(()),
            _ => Err(Box::new(LoweringError::UndefinedUnion {
                name: name.id.clone(),
                span: name.span.to_miette(),
            })),
        }
    }
}

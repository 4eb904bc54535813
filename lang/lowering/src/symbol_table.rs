use variant_lang_ast::HashMap;
use variant_lang_miette_util::ToMiette;
use variant_lang_parser::cst;
use variant_lang_parser::cst::decls::*;

use crate::result::{LoweringError, LoweringResult};

/// What a toplevel name refers to.
#[derive(Debug, Clone)]
pub enum DeclMeta {
    Union { dyn_constructors: bool },
    Def { arity: usize },
}

/// The table of toplevel names of one module. Tags are not toplevel names:
/// they are scoped to their union.
pub type ModuleSymbolTable = HashMap<String, DeclMeta>;

pub fn build_symbol_table(module: &Module) -> LoweringResult<ModuleSymbolTable> {
    let mut symbol_table = ModuleSymbolTable::default();

    for item in &module.items {
        match item {
            Decl::Union(union) => {
                let dyn_constructors = crate::lower::decls::dyn_constructors_of(&union.attr)?;
                insert(&mut symbol_table, &union.name, DeclMeta::Union { dyn_constructors })?;
            }
            Decl::Def(def) => {
                insert(&mut symbol_table, &def.name, DeclMeta::Def { arity: def.params.len() })?;
            }
        }
    }

    Ok(symbol_table)
}

fn insert(
    symbol_table: &mut ModuleSymbolTable,
    name: &cst::Ident,
    meta: DeclMeta,
) -> LoweringResult<()> {
    if symbol_table.contains_key(&name.id) {
        return Err(Box::new(LoweringError::AlreadyDefined {
            name: name.id.clone(),
            span: Some(name.span.to_miette()),
        }));
    }
    symbol_table.insert(name.id.clone(), meta);
    Ok(())
}

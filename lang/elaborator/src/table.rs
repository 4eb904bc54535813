use variant_lang_ast::{Decl, HashMap, Ident, Module, Union};
use variant_lang_miette_util::ToMiette;

use crate::result::{CheckError, CheckResult};

/// Read-only view of all union declarations of a module, for looking up the
/// model a match block or constructor call refers to.
pub struct UnionTable {
    map: HashMap<String, Union>,
}

pub fn build_union_table(module: &Module) -> UnionTable {
    let mut map = HashMap::default();
    for decl in &module.decls {
        if let Decl::Union(union) = decl {
            map.insert(union.name.id.clone(), union.clone());
        }
    }
    UnionTable { map }
}

impl UnionTable {
    pub fn lookup(&self, name: &Ident) -> CheckResult<&Union> {
        self.map.get(&name.id).ok_or_else(|| {
            // Lowering has already resolved every union name.
            Box::new(CheckError::Impossible {
                message: format!("union {} disappeared between lowering and checking", name.id),
                span: Some(name.span.to_miette()),
            })
        })
    }
}

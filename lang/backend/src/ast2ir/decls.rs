use variant_lang_ast as ast;
use variant_lang_printer::PrintToString;

use crate::ir;
use crate::ir::Ident;
use crate::result::BackendResult;

use super::traits::ToIR;

impl ToIR for ast::Module {
    type Target = ir::Module;

    fn to_ir(&self) -> BackendResult<Self::Target> {
        let unions = self.unions().map(ToIR::to_ir).collect::<BackendResult<_>>()?;
        let defs = self.defs().map(ToIR::to_ir).collect::<BackendResult<_>>()?;
        Ok(ir::Module { unions, defs })
    }
}

impl ToIR for ast::Union {
    type Target = ir::UnionDef;

    fn to_ir(&self) -> BackendResult<Self::Target> {
        log::trace!("Generating union object: {}", self.name.id);

        let cases = self
            .model
            .cases()
            .iter()
            .map(|case| ir::CaseDef {
                tag: case.tag.id.clone(),
                arity: case.arity,
                types: case.descriptor.iter().map(|t| t.print_to_string(None)).collect(),
            })
            .collect();

        let ctors = self
            .ctors
            .iter()
            .map(|ctor| ir::CtorDef {
                name: Ident::sanitize(&ctor.name),
                tag: ctor.case.tag.clone(),
                params: (0..ctor.case.arity).map(|i| Ident::raw(format!("x{i}"))).collect(),
            })
            .collect();

        Ok(ir::UnionDef {
            name: Ident::sanitize(&self.name.id),
            union: self.name.id.clone(),
            cases,
            ctors,
        })
    }
}

impl ToIR for ast::Def {
    type Target = ir::FnDef;

    fn to_ir(&self) -> BackendResult<Self::Target> {
        let params = self
            .params
            .iter()
            .enumerate()
            .map(|(i, param)| match param {
                ast::BindingSite::Var { name, .. } => Ident::sanitize(&name.id),
                ast::BindingSite::Wildcard { .. } => Ident::raw(format!("_x{i}")),
            })
            .collect();
        Ok(ir::FnDef {
            name: Ident::sanitize(&self.name.id),
            params,
            body: self.body.to_ir()?,
        })
    }
}

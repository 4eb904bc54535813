pub mod ast2ir;
pub mod ir;
pub mod ir2js;
pub mod result;

pub use ast2ir::ToIR;
pub use ir2js::emit_module;
pub use result::*;

/// Generate the JavaScript module for a checked AST module.
pub fn compile_module(module: &variant_lang_ast::Module) -> BackendResult<String> {
    log::debug!("Emitting module: {}", module.uri);
    let ir = module.to_ir()?;
    Ok(emit_module(&ir))
}

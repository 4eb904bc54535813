//! Code generation IR: the generated union objects, constructors and
//! dispatches, free of surface syntax concerns. Kept separate from the AST so
//! the emitter only ever sees shapes it can print directly.

pub mod decls;
pub mod exprs;
pub mod ident;

pub use decls::*;
pub use exprs::*;
pub use ident::Ident;

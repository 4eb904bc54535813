//! The concrete syntax tree produced by the parser.
//!
//! The CST is deliberately loose: union case lists and match clause heads are
//! plain expressions here. Lowering canonicalizes them and rejects the shapes
//! that do not denote cases.

pub mod decls;
pub mod exp;
pub mod ident;

pub use ident::Ident;

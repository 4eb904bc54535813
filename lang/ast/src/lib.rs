pub mod ctor;
pub mod decls;
pub mod exp;
pub mod ident;
pub mod model;
pub mod rt;

pub use ctor::*;
pub use decls::*;
pub use exp::*;
pub use ident::*;
pub use model::*;

pub type HashMap<K, V> = fxhash::FxHashMap<K, V>;
pub type HashSet<V> = fxhash::FxHashSet<V>;

mod cache;
mod database;
mod fs;
mod result;

pub use database::Database;
pub use fs::*;
pub use result::*;

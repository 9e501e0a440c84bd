pub mod collection;
pub mod release;
pub mod row;

pub use collection::*;
pub use release::*;
pub use row::*;

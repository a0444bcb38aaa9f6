pub mod chain;
pub mod fields;
pub mod insert;

pub use chain::Chain;
pub use fields::{Field, FieldError, FieldSpec};

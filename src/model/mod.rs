pub mod category;
pub mod config;
pub mod item;
pub mod node;

pub use category::*;
pub use config::*;
pub use item::*;
pub use node::*;

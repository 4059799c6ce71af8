pub mod error;
pub mod inventory;
pub mod matcher;

pub use error::*;
pub use inventory::*;
pub use matcher::*;

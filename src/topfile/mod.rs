pub mod error;
pub mod loader;
pub mod resolver;

pub use error::*;
pub use loader::*;
pub use resolver::*;

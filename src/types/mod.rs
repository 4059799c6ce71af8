pub mod topfile;

pub use topfile::*;

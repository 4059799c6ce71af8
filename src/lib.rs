//! Topfile Util - SaltStack topfile queries
//!
//! This crate answers two questions about a SaltStack topfile: which targets
//! carry a given set of roles, and which nodes from an inventory those
//! targets select, grouped by role and target.

pub mod cli;
pub mod nodes;
pub mod topfile;
pub mod types;

pub use nodes::{group_nodes, NodeInventory, NodeListError, PatternError, TargetMatcher};
pub use topfile::{resolve_targets, Topfile, TopfileError};
pub use types::*;

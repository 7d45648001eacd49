//! Strategy search: bounded depth-first enumeration of spell
//! sequences, minimizing total mana spent across all winning branches.
//!
//! ## Key Types
//!
//! - `SearchConfig`: cast limit bounding the traversal
//! - `MinManaSearch`: the depth-first search itself

pub mod config;
pub mod dfs;

pub use config::SearchConfig;
pub use dfs::MinManaSearch;

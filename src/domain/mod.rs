//! Domain logic - pure versioning rules independent of git and the filesystem

pub mod branch;
pub mod version;

pub use branch::{classify, BranchCategory, BranchRules};
pub use version::{bump_version, Version};

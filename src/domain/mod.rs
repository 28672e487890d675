//! Domain logic - pure version values independent of any I/O

pub mod pair;
pub mod version;

pub use pair::ChangePair;
pub use version::{SemanticVersion, VersionBump};

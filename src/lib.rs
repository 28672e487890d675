pub mod domain;
pub mod error;
pub mod rollup;
pub mod ui;

pub use error::{Result, RollupError, VersionRole};
pub use rollup::compute_parent_version;

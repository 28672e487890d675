use std::fmt;
use thiserror::Error;

/// Which input a version string was supplied as.
///
/// Carried inside [`RollupError::InvalidVersion`] so callers can tell the
/// parent apart from either half of a child pair in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionRole {
    Parent,
    ChildOld,
    ChildNew,
}

impl fmt::Display for VersionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionRole::Parent => write!(f, "parent version"),
            VersionRole::ChildOld => write!(f, "child old version"),
            VersionRole::ChildNew => write!(f, "child new version"),
        }
    }
}

/// Unified error type for semver-rollup operations
#[derive(Error, Debug)]
pub enum RollupError {
    #[error("Invalid {role}: '{value}' is not a valid SemVer2 string")]
    InvalidVersion { role: VersionRole, value: String },

    #[error("Malformed child pair: expected exactly two versions (old, new), got {found}")]
    MalformedPair { found: usize },

    #[error("Version component overflow: cannot increment {component} component")]
    Overflow { component: &'static str },
}

/// Convenience type alias for Results in semver-rollup
pub type Result<T> = std::result::Result<T, RollupError>;

impl RollupError {
    /// Create an invalid-version error for the given role
    pub fn invalid_version(role: VersionRole, value: impl Into<String>) -> Self {
        RollupError::InvalidVersion {
            role,
            value: value.into(),
        }
    }

    /// Create a malformed-pair error from the observed entry length
    pub fn malformed_pair(found: usize) -> Self {
        RollupError::MalformedPair { found }
    }

    /// Create an overflow error for the named version component
    pub fn overflow(component: &'static str) -> Self {
        RollupError::Overflow { component }
    }
}

use crate::domain::version::{SemanticVersion, VersionBump};
use crate::error::{Result, RollupError, VersionRole};

/// One child product's version transition (old -> new).
///
/// Built fresh per call from caller-supplied strings; never retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangePair {
    pub old: SemanticVersion,
    pub new: SemanticVersion,
}

impl ChangePair {
    pub fn new(old: SemanticVersion, new: SemanticVersion) -> Self {
        ChangePair { old, new }
    }

    /// Build a pair from a raw child entry.
    ///
    /// The entry must hold exactly two strings (old, new); the shape check
    /// runs before either element is grammar-checked.
    pub fn from_entry<S: AsRef<str>>(entry: &[S]) -> Result<Self> {
        if entry.len() != 2 {
            return Err(RollupError::malformed_pair(entry.len()));
        }

        let old = SemanticVersion::parse(entry[0].as_ref(), VersionRole::ChildOld)?;
        let new = SemanticVersion::parse(entry[1].as_ref(), VersionRole::ChildNew)?;
        Ok(ChangePair { old, new })
    }

    /// Severity of this transition: the highest numeric component that
    /// changed, or `None` when major/minor/patch are all equal.
    ///
    /// Prerelease and build metadata are ignored entirely, so versions
    /// differing only in those fields classify as no change.
    pub fn severity(&self) -> Option<VersionBump> {
        if self.old.major != self.new.major {
            Some(VersionBump::Major)
        } else if self.old.minor != self.new.minor {
            Some(VersionBump::Minor)
        } else if self.old.patch != self.new.patch {
            Some(VersionBump::Patch)
        } else {
            None
        }
    }
}

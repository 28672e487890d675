use crate::error::{Result, RollupError, VersionRole};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// SemVer2 standard regular expression, as published at https://semver.org/
const SEMVER2_PATTERN: &str = r"^(?P<major>0|[1-9]\d*)\.(?P<minor>0|[1-9]\d*)\.(?P<patch>0|[1-9]\d*)(?:-(?P<prerelease>(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+(?P<buildmetadata>[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$";

fn semver2_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SEMVER2_PATTERN).expect("SemVer2 pattern compiles"))
}

/// Semantic version representation
///
/// Prerelease and build metadata are validated during parsing but take no
/// part in comparison or bump decisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Option<String>,
    pub buildmetadata: Option<String>,
}

impl SemanticVersion {
    /// Create a bare version with no prerelease or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
            prerelease: None,
            buildmetadata: None,
        }
    }

    /// Parse a version string against the anchored SemVer2 grammar.
    ///
    /// The match is full-string, not a substring search; anything the
    /// grammar rejects (leading zeros, empty identifiers, stray suffixes)
    /// fails with an invalid-version error carrying `role`.
    pub fn parse(value: &str, role: VersionRole) -> Result<Self> {
        let captures = semver2_regex()
            .captures(value)
            .ok_or_else(|| RollupError::invalid_version(role, value))?;

        // Numeric components wider than u64 are rejected rather than wrapped.
        let component = |name: &str| -> Result<u64> {
            captures[name]
                .parse::<u64>()
                .map_err(|_| RollupError::invalid_version(role, value))
        };

        Ok(SemanticVersion {
            major: component("major")?,
            minor: component("minor")?,
            patch: component("patch")?,
            prerelease: captures.name("prerelease").map(|m| m.as_str().to_string()),
            buildmetadata: captures
                .name("buildmetadata")
                .map(|m| m.as_str().to_string()),
        })
    }

    /// Bump version according to bump type.
    ///
    /// Lower components reset to zero and any prerelease/build suffix is
    /// dropped from the result. A component already at `u64::MAX` cannot
    /// be incremented and fails with an overflow error.
    pub fn bump(&self, bump_type: &VersionBump) -> Result<Self> {
        let bumped = match bump_type {
            VersionBump::Major => SemanticVersion::new(
                self.major
                    .checked_add(1)
                    .ok_or_else(|| RollupError::overflow("major"))?,
                0,
                0,
            ),
            VersionBump::Minor => SemanticVersion::new(
                self.major,
                self.minor
                    .checked_add(1)
                    .ok_or_else(|| RollupError::overflow("minor"))?,
                0,
            ),
            VersionBump::Patch => SemanticVersion::new(
                self.major,
                self.minor,
                self.patch
                    .checked_add(1)
                    .ok_or_else(|| RollupError::overflow("patch"))?,
            ),
        };
        Ok(bumped)
    }

    /// The version with prerelease/build stripped and numerics unchanged
    pub fn release(&self) -> Self {
        SemanticVersion::new(self.major, self.minor, self.patch)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.prerelease {
            write!(f, "-{}", pre)?;
        }
        if let Some(build) = &self.buildmetadata {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

/// Version bump type decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VersionBump {
    Patch,
    Minor,
    Major,
}

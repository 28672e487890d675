//! Parent version aggregation
//!
//! Rolls the version deltas of multiple child products up into a single
//! bump of their parent version.

use crate::domain::{ChangePair, SemanticVersion, VersionBump};
use crate::error::{Result, VersionRole};

/// Compute the parent version after aggregating all child transitions.
///
/// `child_entries` holds one raw entry per child; each must contain exactly
/// two SemVer2 strings (old, new). The parent is validated first, then every
/// entry (shape before grammar, in the order given) before any
/// classification runs. The result is always a bare `major.minor.patch`
/// string; any prerelease/build suffix on the parent is dropped.
///
/// # Example
/// ```
/// use semver_rollup::rollup::compute_parent_version;
///
/// let children = vec![
///     vec!["1.2.3".to_string(), "1.3.0".to_string()],
///     vec!["2.1.0".to_string(), "2.1.2".to_string()],
/// ];
/// assert_eq!(compute_parent_version("3.3.3", &children).unwrap(), "3.4.0");
/// ```
pub fn compute_parent_version<S: AsRef<str>>(
    parent_version: &str,
    child_entries: &[Vec<S>],
) -> Result<String> {
    let parent = SemanticVersion::parse(parent_version, VersionRole::Parent)?;

    // Validate everything up front; no partial computation on bad input.
    let mut pairs = Vec::with_capacity(child_entries.len());
    for entry in child_entries {
        pairs.push(ChangePair::from_entry(entry)?);
    }

    let updated = match aggregate_severity(&pairs) {
        Some(bump) => parent.bump(&bump)?,
        None => parent.release(),
    };

    Ok(updated.to_string())
}

/// Fold the per-pair severities left to right into the aggregate.
///
/// Each pair classifies at its highest differing component, and the
/// aggregate only ever moves up the patch < minor < major order: a minor
/// pair after a major pair leaves the aggregate at major. With no pairs, or
/// only suffix-level changes, the aggregate stays `None`.
pub fn aggregate_severity(pairs: &[ChangePair]) -> Option<VersionBump> {
    pairs
        .iter()
        .fold(None, |aggregate, pair| aggregate.max(pair.severity()))
}

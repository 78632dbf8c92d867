//! Dotted Version Handling
//!
//! Parses `build-tools` / `cmdline-tools` style directory names ("25.0.3")
//! into ordered numeric components for comparison.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A dotted numeric version such as "25.0.3".
///
/// Ordering is component-wise numeric, left to right; shorter sequences
/// compare as if zero-padded, so `25` equals `25.0.0` and `9.0` sorts below
/// `10.0` (which plain string comparison would get wrong).
#[derive(Debug, Clone)]
pub struct Version {
    components: Vec<u64>,
    raw: String,
}

/// A directory name that is not a dotted numeric version.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unparsable version: {0:?}")]
pub struct InvalidVersion(
    /// The rejected directory name.
    pub String,
);

impl Version {
    /// Numeric components, most significant first.
    pub fn components(&self) -> &[u64] {
        &self.components
    }

    /// The original string this version was parsed from.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for Version {
    type Err = InvalidVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(InvalidVersion(s.to_string()));
        }

        let components = s
            .split('.')
            .map(|part| part.parse::<u64>())
            .collect::<Result<Vec<u64>, _>>()
            .map_err(|_| InvalidVersion(s.to_string()))?;

        Ok(Self {
            components,
            raw: s.to_string(),
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        for i in 0..len {
            let lhs = self.components.get(i).copied().unwrap_or(0);
            let rhs = other.components.get(i).copied().unwrap_or(0);
            match lhs.cmp(&rhs) {
                Ordering::Equal => continue,
                ordering => return ordering,
            }
        }
        Ordering::Equal
    }
}

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Application version number, as stored in the `mse_version` block at
/// the top of every document. Ordering is lexicographic on
/// (major, minor, patch), so `Version::new(0, 3, 8) < Version::new(2, 0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid version number")]
pub struct ParseVersionError;

impl FromStr for Version {
    type Err = ParseVersionError;

    /// Parses `major[.minor[.patch]]`; omitted components are zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('.');
        let mut components = [0u32; 3];
        for slot in components.iter_mut() {
            match parts.next() {
                Some(part) => {
                    *slot = part.trim().parse().map_err(|_| ParseVersionError)?;
                }
                None => break,
            }
        }
        if parts.next().is_some() {
            return Err(ParseVersionError);
        }
        Ok(Version::new(components[0], components[1], components[2]))
    }
}

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Two-dimensional vector, stored in document text as `(x,y)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid (x,y) vector")]
pub struct ParseVectorError;

impl FromStr for Vector2 {
    type Err = ParseVectorError;

    /// Parses exactly `(x,y)` with floating-point components. The whole
    /// value must be consumed; there is no safe default to fall back to,
    /// so partial matches are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or(ParseVectorError)?;
        let (x, y) = inner.split_once(',').ok_or(ParseVectorError)?;
        Ok(Vector2 {
            x: x.trim().parse().map_err(|_| ParseVectorError)?,
            y: y.trim().parse().map_err(|_| ParseVectorError)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    fn test_parse() {
        assert_eq!("(1,2)".parse::<Vector2>(), Ok(Vector2::new(1.0, 2.0)));
        assert_eq!(
            "(0.5, -2.25)".parse::<Vector2>(),
            Ok(Vector2::new(0.5, -2.25))
        );
        assert_eq!(" (3,4) ".parse::<Vector2>(), Ok(Vector2::new(3.0, 4.0)));
    }

    #[rstest::rstest]
    fn test_parse_rejects_partial_matches() {
        assert!("(1)".parse::<Vector2>().is_err());
        assert!("(1,2".parse::<Vector2>().is_err());
        assert!("1,2".parse::<Vector2>().is_err());
        assert!("(1,2,3)".parse::<Vector2>().is_err());
        assert!("(a,b)".parse::<Vector2>().is_err());
    }

    #[rstest::rstest]
    fn test_display_round_trips() {
        let vec = Vector2::new(1.5, -0.25);
        assert_eq!(vec.to_string().parse::<Vector2>(), Ok(vec));
    }
}

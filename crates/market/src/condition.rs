//! Ordinal vehicle condition scale.

use std::fmt;
use std::str::FromStr;

/// Vehicle condition, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Condition {
    Poor,
    Fair,
    Good,
    Excellent,
    LikeNew,
    New,
}

impl Condition {
    /// All conditions in ascending order.
    pub const ALL: [Condition; 6] = [
        Condition::Poor,
        Condition::Fair,
        Condition::Good,
        Condition::Excellent,
        Condition::LikeNew,
        Condition::New,
    ];

    /// Highest ordinal on the scale.
    pub const MAX_ORDINAL: u8 = 5;

    /// Ordinal used when a condition is missing or unrecognized.
    pub const DEFAULT_ORDINAL: u8 = 2;

    /// Position on the scale: `poor = 0` through `new = 5`.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Canonical snake_case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Condition::Poor => "poor",
            Condition::Fair => "fair",
            Condition::Good => "good",
            Condition::Excellent => "excellent",
            Condition::LikeNew => "like_new",
            Condition::New => "new",
        }
    }

    /// Parses a condition name, ignoring case and surrounding whitespace.
    ///
    /// `like_new`, `like-new` and `like new` are all accepted. Returns `None`
    /// for anything else.
    pub fn parse(s: &str) -> Option<Condition> {
        match s.trim().to_lowercase().as_str() {
            "poor" => Some(Condition::Poor),
            "fair" => Some(Condition::Fair),
            "good" => Some(Condition::Good),
            "excellent" => Some(Condition::Excellent),
            "like_new" | "like-new" | "like new" | "likenew" => Some(Condition::LikeNew),
            "new" => Some(Condition::New),
            _ => None,
        }
    }

    /// Ordinal of an optional condition name, [`DEFAULT_ORDINAL`](Self::DEFAULT_ORDINAL)
    /// if absent or unrecognized.
    pub fn ordinal_or_default(s: Option<&str>) -> u8 {
        s.and_then(Condition::parse)
            .map_or(Self::DEFAULT_ORDINAL, Condition::ordinal)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by [`Condition::from_str`] for unknown names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown condition: {0:?}")]
pub struct UnknownCondition(pub String);

impl FromStr for Condition {
    type Err = UnknownCondition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::parse(s).ok_or_else(|| UnknownCondition(s.to_string()))
    }
}

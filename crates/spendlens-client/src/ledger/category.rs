use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Closed set of spending classifications. Stored data using any other label
/// is rejected when records are converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Transport,
    Housing,
    Entertainment,
    Subscriptions,
    Health,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Self::Food,
        Self::Transport,
        Self::Housing,
        Self::Entertainment,
        Self::Subscriptions,
        Self::Health,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Housing => "Housing",
            Self::Entertainment => "Entertainment",
            Self::Subscriptions => "Subscriptions",
            Self::Health => "Health",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category `{}`", self.0)
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Food" => Ok(Self::Food),
            "Transport" => Ok(Self::Transport),
            "Housing" => Ok(Self::Housing),
            "Entertainment" => Ok(Self::Entertainment),
            "Subscriptions" => Ok(Self::Subscriptions),
            "Health" => Ok(Self::Health),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

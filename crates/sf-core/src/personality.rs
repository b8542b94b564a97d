//! Personality tags shared by the profile table and the output writers.
//!
//! The set is closed.  A new personality is a new variant plus a new preset
//! in `sf-agent`; every personality runs through the same force pipeline.

use std::str::FromStr;

use crate::SfError;

/// The kind of agent a `PersonalityProfile` describes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PersonalityType {
    #[default]
    Standard,
    /// Walks fast and keeps little personal space.
    Aggressive,
    /// Walks slowly and keeps a wide berth from everything.
    Cautious,
    /// Strongly drawn to attractors.
    Distracted,
    /// Fast, with weak wall and obstacle avoidance.
    Reckless,
}

impl PersonalityType {
    /// Every variant, in declaration order.
    pub const ALL: [PersonalityType; 5] = [
        PersonalityType::Standard,
        PersonalityType::Aggressive,
        PersonalityType::Cautious,
        PersonalityType::Distracted,
        PersonalityType::Reckless,
    ];

    /// Stable small-integer index, used when reporting arrivals.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lower-case label, used for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            PersonalityType::Standard   => "standard",
            PersonalityType::Aggressive => "aggressive",
            PersonalityType::Cautious   => "cautious",
            PersonalityType::Distracted => "distracted",
            PersonalityType::Reckless   => "reckless",
        }
    }
}

impl std::fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for PersonalityType {
    type Err = SfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        PersonalityType::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| SfError::Config(format!("unknown personality {label:?}")))
    }
}

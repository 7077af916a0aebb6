use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the five top-level panes of the learning window.
///
/// The identifiers returned by [`NavSection::as_str`] double as the default
/// keys of a [`ProgressRecord`](crate::model::ProgressRecord).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavSection {
    Overview,
    Visual,
    Interactive,
    Exercises,
    Reference,
}

impl NavSection {
    /// All sections in navigation (and shortcut) order.
    pub const ALL: [NavSection; 5] = [
        NavSection::Overview,
        NavSection::Visual,
        NavSection::Interactive,
        NavSection::Exercises,
        NavSection::Reference,
    ];

    pub const TOOLTIP: &'static str = "Use Ctrl+1-5 for quick navigation";

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            NavSection::Overview => "overview",
            NavSection::Visual => "visual",
            NavSection::Interactive => "interactive",
            NavSection::Exercises => "exercises",
            NavSection::Reference => "reference",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            NavSection::Overview => "Overview",
            NavSection::Visual => "Visual Learning",
            NavSection::Interactive => "Interactive Code",
            NavSection::Exercises => "Exercises",
            NavSection::Reference => "Reference",
        }
    }

    /// Maps the digit of a Ctrl/Cmd + digit chord to its section.
    #[must_use]
    pub fn from_shortcut_digit(digit: char) -> Option<Self> {
        let index = digit.to_digit(10)?.checked_sub(1)?;
        Self::ALL.get(usize::try_from(index).ok()?).copied()
    }

    #[must_use]
    pub fn shortcut_digit(self) -> char {
        match self {
            NavSection::Overview => '1',
            NavSection::Visual => '2',
            NavSection::Interactive => '3',
            NavSection::Exercises => '4',
            NavSection::Reference => '5',
        }
    }
}

impl fmt::Display for NavSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown navigation section: {}", self.0)
    }
}

impl std::error::Error for UnknownSection {}

impl FromStr for NavSection {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

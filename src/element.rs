//! The value types a playground session can hold.
//!
//! A [`Tree`][crate::tree::Tree] only needs `Ord`. A session additionally parses values out of
//! command lines and prints them back, which is what [`Element`] collects.

use std::cmp::Ordering;
use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;

use serde::Deserialize;

/// Everything a session needs from its values.
pub trait Element: Ord + Clone + fmt::Debug + fmt::Display + FromStr {}

impl<T> Element for T where T: Ord + Clone + fmt::Debug + fmt::Display + FromStr {}

/// An `f64` ordered by [`f64::total_cmp`], so doubles can live in a tree. `NaN` sorts after
/// positive infinity and `-0.0` before `0.0`.
#[derive(Clone, Copy, Debug)]
pub struct Real(pub f64);

impl PartialEq for Real {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Real {}

impl PartialOrd for Real {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Real {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Real {
    type Err = ParseFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// The element types offered when a session starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Signed 64-bit integers.
    Int,
    /// Floating point numbers, see [`Real`].
    Double,
    /// Whitespace-free words.
    String,
    /// Single characters.
    Char,
}

impl ElementKind {
    /// Every kind, in menu order.
    pub const ALL: [Self; 4] = [Self::Int, Self::Double, Self::String, Self::Char];

    /// Maps a start-up menu answer (`1` to `4`) to its kind.
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Int),
            "2" => Some(Self::Double),
            "3" => Some(Self::String),
            "4" => Some(Self::Char),
            _ => None,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Int => "int",
            Self::Double => "double",
            Self::String => "string",
            Self::Char => "char",
        };
        f.write_str(name)
    }
}

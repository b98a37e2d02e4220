//! Triage categories and their colors

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity category, 1 (most urgent) to 5 (least urgent)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Category(u8);

impl Category {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Create a category, rejecting values outside 1-5
    pub fn new(value: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Category(value))
        } else {
            Err(CoreError::InvalidCategory(value))
        }
    }

    /// Parse a single-digit category marker ("1" to "5")
    ///
    /// Anything other than exactly one digit in range returns `None`.
    pub fn from_marker(text: &str) -> Option<Self> {
        let mut chars = text.chars();
        let digit = chars.next()?.to_digit(10)?;
        if chars.next().is_some() {
            return None;
        }
        Self::new(digit as u8).ok()
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn color(self) -> TriageColor {
        TriageColor::from_category(self)
    }
}

impl TryFrom<u8> for Category {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self> {
        Category::new(value)
    }
}

impl From<Category> for u8 {
    fn from(category: Category) -> u8 {
        category.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Triage color, one per category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TriageColor {
    Red,
    Orange,
    Yellow,
    Green,
    #[default]
    Blue,
}

impl TriageColor {
    pub const ALL: [TriageColor; 5] = [
        TriageColor::Red,
        TriageColor::Orange,
        TriageColor::Yellow,
        TriageColor::Green,
        TriageColor::Blue,
    ];

    pub fn from_category(category: Category) -> Self {
        match category.value() {
            1 => TriageColor::Red,
            2 => TriageColor::Orange,
            3 => TriageColor::Yellow,
            4 => TriageColor::Green,
            _ => TriageColor::Blue,
        }
    }

    /// Look up a color by name, case-insensitively
    ///
    /// Unrecognized names fall back to Blue.
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|color| color.as_str().eq_ignore_ascii_case(name.trim()))
            .unwrap_or(TriageColor::Blue)
    }

    /// Priority number, 1 for Red through 5 for Blue
    pub fn priority(self) -> u8 {
        match self {
            TriageColor::Red => 1,
            TriageColor::Orange => 2,
            TriageColor::Yellow => 3,
            TriageColor::Green => 4,
            TriageColor::Blue => 5,
        }
    }

    pub fn category(self) -> Category {
        Category(self.priority())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TriageColor::Red => "Red",
            TriageColor::Orange => "Orange",
            TriageColor::Yellow => "Yellow",
            TriageColor::Green => "Green",
            TriageColor::Blue => "Blue",
        }
    }
}

impl fmt::Display for TriageColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Triage outcome

use super::category::{Category, TriageColor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Outcome of classifying a patient
///
/// Priority is always derived from the color and never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct TriageResult {
    pub color: TriageColor,
}

impl TriageResult {
    pub fn new(color: TriageColor) -> Self {
        Self { color }
    }

    /// Build a result from a color name, defaulting to Blue when unknown
    pub fn from_color_name(name: &str) -> Self {
        Self::new(TriageColor::from_name(name))
    }

    pub fn from_category(category: Category) -> Self {
        Self::new(category.color())
    }

    pub fn priority(&self) -> u8 {
        self.color.priority()
    }
}

impl Serialize for TriageResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TriageResult", 2)?;
        state.serialize_field("color", &self.color)?;
        state.serialize_field("priority", &self.priority())?;
        state.end()
    }
}

impl fmt::Display for TriageResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Triage Result: {} (Priority {})",
            self.color,
            self.priority()
        )
    }
}

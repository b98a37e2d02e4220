//! Positioned text tokens

use serde::{Deserialize, Serialize};

/// A run of text with the page coordinates of its first glyph
///
/// Coordinates follow the guideline document's page space: `x` grows to the
/// right and `y` grows downward from the top of the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedToken {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

impl PositionedToken {
    pub fn new(text: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
        }
    }
}

impl<S: Into<String>> From<(S, f32, f32)> for PositionedToken {
    fn from((text, x, y): (S, f32, f32)) -> Self {
        PositionedToken::new(text, x, y)
    }
}

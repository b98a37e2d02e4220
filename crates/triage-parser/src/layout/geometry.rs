//! Page geometry of the guideline document
//!
//! The thresholds encode where titles, symptom bullets, category markers and
//! "No" branches sit on an ICTS flowchart page. They are tunable, but the
//! defaults must stay in step with the printed layout.

use serde::{Deserialize, Serialize};

/// Symbol-font bullet as extracted from the guideline PDF
pub const SYMBOL_BULLET: char = '\u{F0B7}';

/// Standard bullet
pub const BULLET: char = '\u{2022}';

/// Thresholds used to classify tokens by position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutGeometry {
    /// Tokens above this line are header noise
    pub min_y: f32,
    /// Tokens below this line are footer noise
    pub max_y: f32,

    pub title_max_x: f32,
    pub title_max_y: f32,
    /// Titles must be strictly longer than this many characters
    pub title_min_len: usize,
    /// Prefixes that disqualify a token from being a title (legends, page numbers)
    pub title_excluded_prefixes: Vec<String>,

    pub symptom_min_x: f32,
    pub symptom_max_x: f32,
    /// Unbulleted symptoms must be strictly longer than this many characters
    pub symptom_min_len: usize,
    pub bullets: Vec<char>,

    /// Category markers sit to the right of this column
    pub category_min_x: f32,

    pub terminator_min_x: f32,
    pub terminator_max_x: f32,
    /// Compared case-insensitively
    pub terminator_text: String,
}

impl Default for LayoutGeometry {
    fn default() -> Self {
        Self {
            min_y: 50.0,
            max_y: 750.0,
            title_max_x: 60.0,
            title_max_y: 100.0,
            title_min_len: 5,
            title_excluded_prefixes: vec!["A =".to_string(), "Page".to_string()],
            symptom_min_x: 50.0,
            symptom_max_x: 100.0,
            symptom_min_len: 2,
            bullets: vec![BULLET, SYMBOL_BULLET],
            category_min_x: 490.0,
            terminator_min_x: 180.0,
            terminator_max_x: 250.0,
            terminator_text: "No".to_string(),
        }
    }
}

impl LayoutGeometry {
    /// Header or footer noise
    pub fn is_noise(&self, y: f32) -> bool {
        y > self.max_y || y < self.min_y
    }

    pub fn is_title(&self, text: &str, x: f32, y: f32) -> bool {
        x < self.title_max_x
            && y < self.title_max_y
            && text.chars().count() > self.title_min_len
            && !self
                .title_excluded_prefixes
                .iter()
                .any(|prefix| text.starts_with(prefix.as_str()))
    }

    pub fn is_symptom(&self, text: &str, x: f32) -> bool {
        self.starts_with_bullet(text)
            || (x > self.symptom_min_x
                && x < self.symptom_max_x
                && text.chars().count() > self.symptom_min_len)
    }

    pub fn is_category_column(&self, x: f32) -> bool {
        x > self.category_min_x
    }

    pub fn is_terminator(&self, text: &str, x: f32) -> bool {
        text.eq_ignore_ascii_case(&self.terminator_text)
            && x > self.terminator_min_x
            && x < self.terminator_max_x
    }

    pub fn starts_with_bullet(&self, text: &str) -> bool {
        text.chars()
            .next()
            .is_some_and(|first| self.bullets.contains(&first))
    }

    /// Remove leading bullet glyphs and surrounding whitespace
    pub fn strip_bullet<'a>(&self, text: &'a str) -> &'a str {
        text.trim_start_matches(|c| self.bullets.contains(&c)).trim()
    }
}

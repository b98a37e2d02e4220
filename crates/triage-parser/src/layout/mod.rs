//! Layout parser
//!
//! Streams positioned tokens in document order (top to bottom, then left to
//! right) and emits triage rules whenever a block is closed. There is no
//! backtracking: each token is looked at once.
//!
//! A token is handled as follows:
//! 1. Header/footer noise is dropped.
//! 2. A title closes the current block and opens a new flowchart. Nothing
//!    else is checked for a title.
//! 3. Otherwise the symptom, category and "No" checks run in that order,
//!    each independently of the others.
//!
//! The end of the stream flushes whatever block is still open.

mod geometry;
mod state;

pub use geometry::{LayoutGeometry, BULLET, SYMBOL_BULLET};
pub use state::ParseState;

use triage_core::{Category, PositionedToken, RuleSet, TriageRule};

/// Streaming parser over positioned tokens
#[derive(Debug, Clone, Default)]
pub struct LayoutParser {
    geometry: LayoutGeometry,
    state: ParseState,
}

impl LayoutParser {
    /// Create a parser with the default guideline geometry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom thresholds
    pub fn with_geometry(geometry: LayoutGeometry) -> Self {
        Self {
            geometry,
            state: ParseState::new(),
        }
    }

    pub fn geometry(&self) -> &LayoutGeometry {
        &self.geometry
    }

    pub fn state(&self) -> &ParseState {
        &self.state
    }

    /// Feed one token; returns the rules emitted by any flush it caused
    pub fn process_token(&mut self, text: &str, x: f32, y: f32) -> Vec<TriageRule> {
        let text = text.trim();
        let geometry = &self.geometry;

        if geometry.is_noise(y) {
            return Vec::new();
        }

        if geometry.is_title(text, x, y) {
            tracing::debug!(flowchart = text, "Flowchart found");
            return self.state.begin_flowchart(text);
        }

        if geometry.is_symptom(text, x) {
            let symptom = geometry.strip_bullet(text);
            self.state.push_symptom(symptom);
        }

        if geometry.is_category_column(x) {
            if let Some(category) = Category::from_marker(text) {
                self.state.set_category(category);
            }
        }

        if geometry.is_terminator(text, x) {
            return self.state.end_block();
        }

        Vec::new()
    }

    /// Feed one token by reference
    pub fn process(&mut self, token: &PositionedToken) -> Vec<TriageRule> {
        self.process_token(&token.text, token.x, token.y)
    }

    /// End of stream: flush the trailing block
    pub fn finish(self) -> Vec<TriageRule> {
        self.state.flush()
    }

    /// Run a fresh parser over a whole token stream
    pub fn parse_all<'a, I>(geometry: LayoutGeometry, tokens: I) -> RuleSet
    where
        I: IntoIterator<Item = &'a PositionedToken>,
    {
        let mut parser = LayoutParser::with_geometry(geometry);
        let mut rules = RuleSet::new();

        for token in tokens {
            rules.extend(parser.process(token));
        }
        rules.extend(parser.finish());

        rules
    }
}

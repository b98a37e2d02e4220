//! Block accumulation state
//!
//! One block is a flowchart title, the symptoms listed under it and the
//! category marker beside them. Every transition is an explicit method so
//! flush conditions can be tested without feeding tokens.

use triage_core::{Category, TriageRule};

/// In-progress block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseState {
    flowchart: Option<String>,
    symptoms: Vec<String>,
    category: Option<Category>,
}

impl ParseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flowchart(&self) -> Option<&str> {
        self.flowchart.as_deref()
    }

    pub fn symptoms(&self) -> &[String] {
        &self.symptoms
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    /// Whether a flush would emit anything
    pub fn is_complete(&self) -> bool {
        self.flowchart.is_some() && self.category.is_some() && !self.symptoms.is_empty()
    }

    /// Rules for the current block: one per symptom, all with the block's category
    ///
    /// An incomplete block yields nothing. State is left untouched.
    pub fn flush(&self) -> Vec<TriageRule> {
        let (Some(flowchart), Some(category)) = (&self.flowchart, self.category) else {
            return Vec::new();
        };

        self.symptoms
            .iter()
            .filter_map(|symptom| TriageRule::new(flowchart.as_str(), symptom.as_str(), category).ok())
            .collect()
    }

    /// A new title: flush, then start an empty block under the new flowchart
    pub fn begin_flowchart(&mut self, title: impl Into<String>) -> Vec<TriageRule> {
        let emitted = self.flush();
        self.flowchart = Some(title.into());
        self.symptoms.clear();
        self.category = None;
        emitted
    }

    /// Append a symptom; blank names are ignored, duplicates are kept
    pub fn push_symptom(&mut self, symptom: &str) {
        let symptom = symptom.trim();
        if !symptom.is_empty() {
            self.symptoms.push(symptom.to_string());
        }
    }

    /// Set the block's category. A later marker replaces an earlier one.
    pub fn set_category(&mut self, category: Category) {
        self.category = Some(category);
    }

    /// A "No" branch: flush, then clear symptoms and category but keep the flowchart
    pub fn end_block(&mut self) -> Vec<TriageRule> {
        let emitted = self.flush();
        self.symptoms.clear();
        self.category = None;
        emitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(value: u8) -> Category {
        Category::new(value).unwrap()
    }

    #[test]
    fn test_flush_requires_flowchart() {
        let mut state = ParseState::new();
        state.push_symptom("Shock");
        state.set_category(cat(1));
        assert!(!state.is_complete());
        assert!(state.flush().is_empty());
    }

    #[test]
    fn test_flush_requires_category() {
        let mut state = ParseState::new();
        state.begin_flowchart("Flowchart");
        state.push_symptom("Shock");
        assert!(state.flush().is_empty());
    }

    #[test]
    fn test_flush_requires_symptoms() {
        let mut state = ParseState::new();
        state.begin_flowchart("Flowchart");
        state.set_category(cat(2));
        assert!(state.flush().is_empty());
    }

    #[test]
    fn test_flush_cross_product() {
        let mut state = ParseState::new();
        state.begin_flowchart("Flowchart");
        state.push_symptom("Stridor");
        state.push_symptom("Shock");
        state.set_category(cat(1));

        let rules = state.flush();
        assert_eq!(rules.len(), 2);
        assert!(rules.iter().all(|r| r.flowchart == "Flowchart" && r.category == cat(1)));
        assert_eq!(rules[0].symptom, "Stridor");
        assert_eq!(rules[1].symptom, "Shock");
    }

    #[test]
    fn test_last_category_wins() {
        let mut state = ParseState::new();
        state.begin_flowchart("Flowchart");
        state.set_category(cat(2));
        state.push_symptom("Pain");
        state.set_category(cat(4));

        let rules = state.flush();
        assert_eq!(rules[0].category, cat(4));
    }

    #[test]
    fn test_duplicates_kept_and_blanks_dropped() {
        let mut state = ParseState::new();
        state.push_symptom("Pain");
        state.push_symptom("   ");
        state.push_symptom("Pain");
        assert_eq!(state.symptoms(), ["Pain".to_string(), "Pain".to_string()]);
    }

    #[test]
    fn test_end_block_keeps_flowchart() {
        let mut state = ParseState::new();
        state.begin_flowchart("Flowchart");
        state.push_symptom("Pain");
        state.set_category(cat(3));

        assert_eq!(state.end_block().len(), 1);
        assert_eq!(state.flowchart(), Some("Flowchart"));
        assert!(state.symptoms().is_empty());
        assert_eq!(state.category(), None);
    }

    #[test]
    fn test_begin_flowchart_flushes_previous_block() {
        let mut state = ParseState::new();
        state.begin_flowchart("First Flowchart");
        state.push_symptom("Pain");
        state.set_category(cat(3));

        let emitted = state.begin_flowchart("Second Flowchart");
        assert_eq!(emitted.len(), 1);
        assert_eq!(emitted[0].flowchart, "First Flowchart");
        assert_eq!(state.flowchart(), Some("Second Flowchart"));
        assert!(state.symptoms().is_empty());
        assert_eq!(state.category(), None);
    }

    #[test]
    fn test_stray_category_survives_until_flush() {
        let mut state = ParseState::new();
        state.begin_flowchart("Flowchart");
        state.set_category(cat(2));
        state.push_symptom("Rash");
        assert_eq!(state.flush()[0].category, cat(2));
    }
}

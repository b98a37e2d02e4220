//! Patient and symptom records

use serde::{Deserialize, Serialize};
use std::fmt;

/// A reported clinical finding
///
/// Only `name` takes part in matching; the values are carried for display.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Symptom {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric_value: Option<f64>,
}

impl Symptom {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            string_value: None,
            numeric_value: None,
        }
    }

    pub fn with_string_value(mut self, value: impl Into<String>) -> Self {
        self.string_value = Some(value.into());
        self
    }

    pub fn with_numeric_value(mut self, value: f64) -> Self {
        self.numeric_value = Some(value);
        self
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(value) = self.numeric_value {
            write!(f, "{}: {}", self.name, value)
        } else if let Some(value) = &self.string_value {
            write!(f, "{}: {}", self.name, value)
        } else {
            f.write_str(&self.name)
        }
    }
}

/// Patient presented for triage
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,

    /// Age in years. Accepted but not yet used to filter rules.
    pub age: u8,

    #[serde(default)]
    pub symptoms: Vec<Symptom>,
}

impl Patient {
    pub fn new(id: impl Into<String>, age: u8) -> Self {
        Self {
            id: id.into(),
            age,
            symptoms: Vec::new(),
        }
    }

    pub fn add_symptom(&mut self, symptom: Symptom) {
        self.symptoms.push(symptom);
    }

    pub fn with_symptom(mut self, symptom: Symptom) -> Self {
        self.symptoms.push(symptom);
        self
    }

    /// Add several symptoms by name
    pub fn with_symptoms<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symptoms.extend(names.into_iter().map(Symptom::new));
        self
    }
}

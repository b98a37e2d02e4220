//! Boundary input parsing
//!
//! Raw text from presentation layers is validated here, before it reaches
//! the engine.

use crate::error::{Result, SdkError};
use triage_core::Patient;

/// Parse an age in years, bounded by `max_age`
pub fn parse_age(raw: &str, max_age: u8) -> Result<u8> {
    let raw = raw.trim();
    let age: u8 = raw
        .parse()
        .map_err(|_| SdkError::MalformedInput(format!("age '{}' is not a whole number", raw)))?;

    if age > max_age {
        return Err(SdkError::MalformedInput(format!(
            "age {} is outside the pediatric range 0-{}",
            age, max_age
        )));
    }
    Ok(age)
}

/// Split a comma-separated symptom list, trimming names and dropping empties
pub fn parse_symptoms(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build a patient from raw boundary text
pub fn patient_from_input(
    id: impl Into<String>,
    age: &str,
    symptoms: &str,
    max_age: u8,
) -> Result<Patient> {
    let age = parse_age(age, max_age)?;
    Ok(Patient::new(id, age).with_symptoms(parse_symptoms(symptoms)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_age() {
        assert_eq!(parse_age(" 7 ", 15).unwrap(), 7);
        assert_eq!(parse_age("0", 15).unwrap(), 0);
        assert_eq!(parse_age("15", 15).unwrap(), 15);
    }

    #[test]
    fn test_parse_age_rejects_garbage() {
        for raw in ["abc", "", "-1", "4.5", "300"] {
            assert!(
                matches!(parse_age(raw, 15), Err(SdkError::MalformedInput(_))),
                "accepted {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_parse_age_rejects_adults() {
        assert!(matches!(parse_age("16", 15), Err(SdkError::MalformedInput(_))));
    }

    #[test]
    fn test_parse_symptoms() {
        assert_eq!(
            parse_symptoms(" Cough , ,Fever,  "),
            vec!["Cough".to_string(), "Fever".to_string()]
        );
        assert!(parse_symptoms("").is_empty());
    }

    #[test]
    fn test_patient_from_input() {
        let patient = patient_from_input("p1", "4", "Cough, Stridor", 15).unwrap();
        assert_eq!(patient.age, 4);
        assert_eq!(patient.symptoms.len(), 2);
        assert_eq!(patient.symptoms[1].name, "Stridor");
    }
}

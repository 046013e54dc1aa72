use std::fmt;

/// Biological sex as recorded in the dataset. Selects which coefficient
/// table row the engine uses; no other values are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    /// Parse a dataset cell into a `Sex`. Matching is trimmed and
    /// case-insensitive; anything else is a typed error rather than a
    /// silent default.
    pub fn parse(token: &str) -> Result<Self, ParseSexError> {
        match token.trim().to_ascii_lowercase().as_str() {
            "female" => Ok(Sex::Female),
            "male" => Ok(Sex::Male),
            _ => Err(ParseSexError(token.trim().to_string())),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Female => write!(f, "female"),
            Sex::Male => write!(f, "male"),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseSexError(pub String);

impl fmt::Display for ParseSexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unsupported sex value: '{}'", self.0)
    }
}

impl std::error::Error for ParseSexError {}

/// One person's risk factors, as consumed by the scoring engine.
///
/// The engine accepts all numeric values without range validation except for
/// the age bucket check; the adapter is responsible for its own parse rules.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskRecord {
    pub sex: Sex,
    /// Age in years. Bucketed into nine five-year bands starting at 30.
    pub age: i32,
    /// Total cholesterol, mg/dL.
    pub cholesterol: i32,
    /// HDL cholesterol, mg/dL.
    pub hdl: i32,
    /// Systolic blood pressure, mmHg.
    pub systolic: i32,
    /// Diastolic blood pressure, mmHg.
    pub diastolic: i32,
    pub has_diabetes: bool,
    pub is_smoker: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_parse_accepts_both_values() {
        assert_eq!(Sex::parse("female"), Ok(Sex::Female));
        assert_eq!(Sex::parse("male"), Ok(Sex::Male));
    }

    #[test]
    fn test_sex_parse_trims_and_ignores_case() {
        assert_eq!(Sex::parse("  Female "), Ok(Sex::Female));
        assert_eq!(Sex::parse("MALE"), Ok(Sex::Male));
    }

    #[test]
    fn test_sex_parse_rejects_other_tokens() {
        let err = Sex::parse("unknown").unwrap_err();
        assert_eq!(err, ParseSexError("unknown".to_string()));
        assert!(Sex::parse("").is_err());
        assert!(Sex::parse("f").is_err());
    }
}

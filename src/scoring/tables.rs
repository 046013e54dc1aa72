use serde::Serialize;

use super::record::Sex;

/// Coefficient tables for one sex.
///
/// Array positions correspond to the bucket indices computed by the engine:
/// 9 five-year age buckets starting at 30, and 5 threshold buckets each for
/// cholesterol, HDL, and blood pressure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SexTables {
    /// Age points, indexed by `(age - 30) / 5`.
    pub age: [i32; 9],
    /// Population baseline estimate points, same indexing as `age` but an
    /// independent stratification.
    pub estimate: [i32; 9],
    /// Total cholesterol points: <160, 160-199, 200-239, 240-279, >=280.
    pub cholesterol: [i32; 5],
    /// HDL points: <35, 35-44, 45-49, 50-59, >=60.
    pub hdl: [i32; 5],
    /// Blood pressure points, bucket chosen by the ordered systolic/diastolic
    /// rules in the engine.
    pub blood_pressure: [i32; 5],
    /// Flat offset added when the record is diabetic.
    pub diabetes: i32,
}

/// Full coefficient set for the risk model, one table row per sex plus the
/// sex-independent smoking offset. Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskTables {
    pub female: SexTables,
    pub male: SexTables,
    /// Flat offset added when the record is a smoker.
    pub smoking: i32,
}

impl RiskTables {
    pub fn for_sex(&self, sex: Sex) -> &SexTables {
        match sex {
            Sex::Female => &self.female,
            Sex::Male => &self.male,
        }
    }
}

impl Default for RiskTables {
    /// The published point tables of the model.
    fn default() -> Self {
        Self {
            female: SexTables {
                age: [-9, -4, 0, 3, 6, 7, 8, 8, 8],
                estimate: [0, 1, 2, 3, 5, 7, 8, 8, 8],
                cholesterol: [-2, 0, 1, 1, 3],
                hdl: [5, 2, 1, 0, -3],
                blood_pressure: [-3, 0, 0, 2, 3],
                diabetes: 4,
            },
            male: SexTables {
                age: [-1, 0, 1, 2, 3, 4, 5, 6, 7],
                estimate: [2, 3, 4, 4, 6, 7, 9, 11, 14],
                cholesterol: [-3, 0, 1, 2, 3],
                hdl: [2, 1, 0, 0, -3],
                blood_pressure: [0, 0, 1, 2, 3],
                diabetes: 2,
            },
            smoking: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables_spot_values() {
        let tables = RiskTables::default();
        assert_eq!(tables.female.age[6], 8);
        assert_eq!(tables.male.age[3], 2);
        assert_eq!(tables.female.estimate[6], 8);
        assert_eq!(tables.male.estimate[8], 14);
        assert_eq!(tables.female.diabetes, 4);
        assert_eq!(tables.male.diabetes, 2);
        assert_eq!(tables.smoking, 2);
    }

    #[test]
    fn test_for_sex_selects_matching_row() {
        let tables = RiskTables::default();
        assert_eq!(tables.for_sex(Sex::Female), &tables.female);
        assert_eq!(tables.for_sex(Sex::Male), &tables.male);
    }
}

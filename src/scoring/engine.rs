use std::fmt;

use super::record::RiskRecord;
use super::tables::RiskTables;

/// The six component subscores that make up a total. Kept separate so the
/// total is always checkable against its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub age: i32,
    pub cholesterol: i32,
    pub hdl: i32,
    pub blood_pressure: i32,
    pub diabetes: i32,
    pub smoking: i32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> i32 {
        self.age + self.cholesterol + self.hdl + self.blood_pressure + self.diabetes + self.smoking
    }
}

/// Result of scoring one record.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskScore {
    /// Sum of the six subscores in `breakdown`.
    pub total_points: i32,
    /// `total_points * 0.01`. The linear conversion is part of the model;
    /// values below 0 or above 1 are possible and passed through un-clamped.
    pub ten_year_risk: f64,
    /// Age/sex-only baseline, `estimate points * 0.01`, same caveats.
    pub population_estimate: f64,
    pub breakdown: ScoreBreakdown,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ScoreError {
    /// The age falls outside the nine supported five-year buckets.
    AgeOutOfRange { age: i32 },
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::AgeOutOfRange { age } => {
                write!(f, "Age {} outside supported range for risk calculation", age)
            }
        }
    }
}

impl std::error::Error for ScoreError {}

/// Score a single record against the coefficient tables.
///
/// Pure function: no I/O, no shared state. Each subscore is an independent
/// table lookup; the total is their exact integer sum.
pub fn score(record: &RiskRecord, tables: &RiskTables) -> Result<RiskScore, ScoreError> {
    let sex_tables = tables.for_sex(record.sex);

    let age_points = sex_tables.age[age_index(record.age)?];
    // The estimate table uses the identical bucketing but is a distinct
    // stratification; the duplicated lookup is deliberate.
    let estimate_points = sex_tables.estimate[age_index(record.age)?];

    let cholesterol_points = sex_tables.cholesterol[cholesterol_bucket(record.cholesterol)];
    let hdl_points = sex_tables.hdl[hdl_bucket(record.hdl)];
    let bp_points = sex_tables.blood_pressure[bp_bucket(record.systolic, record.diastolic)];

    let diabetes_points = if record.has_diabetes {
        sex_tables.diabetes
    } else {
        0
    };
    let smoking_points = if record.is_smoker { tables.smoking } else { 0 };

    let breakdown = ScoreBreakdown {
        age: age_points,
        cholesterol: cholesterol_points,
        hdl: hdl_points,
        blood_pressure: bp_points,
        diabetes: diabetes_points,
        smoking: smoking_points,
    };
    let total_points = breakdown.total();

    Ok(RiskScore {
        total_points,
        ten_year_risk: f64::from(total_points) * 0.01,
        population_estimate: f64::from(estimate_points) * 0.01,
        breakdown,
    })
}

/// Five-year age bucket starting at 30. Integer division truncates toward
/// zero, so ages 26-29 also land in bucket 0; only an index outside [0, 8]
/// is an error.
fn age_index(age: i32) -> Result<usize, ScoreError> {
    let idx = (age - 30) / 5;
    if !(0..=8).contains(&idx) {
        return Err(ScoreError::AgeOutOfRange { age });
    }
    Ok(idx as usize)
}

fn cholesterol_bucket(cholesterol: i32) -> usize {
    if (160..200).contains(&cholesterol) {
        1
    } else if (200..240).contains(&cholesterol) {
        2
    } else if (240..280).contains(&cholesterol) {
        3
    } else if cholesterol >= 280 {
        4
    } else {
        0
    }
}

fn hdl_bucket(hdl: i32) -> usize {
    if (35..45).contains(&hdl) {
        1
    } else if (45..50).contains(&hdl) {
        2
    } else if (50..60).contains(&hdl) {
        3
    } else if hdl >= 60 {
        4
    } else {
        0
    }
}

/// Blood-pressure bucket. Each clause matches on EITHER reading and the
/// FIRST matching clause wins, so mixed readings (systolic in a low band,
/// diastolic in a high one) take the lower bucket. This replicates the
/// model's original evaluation order, not a max-of-both rule.
fn bp_bucket(systolic: i32, diastolic: i32) -> usize {
    if (120..130).contains(&systolic) || (80..85).contains(&diastolic) {
        1
    } else if (130..140).contains(&systolic) || (85..90).contains(&diastolic) {
        2
    } else if (140..160).contains(&systolic) || (90..100).contains(&diastolic) {
        3
    } else if systolic >= 160 || diastolic >= 100 {
        4
    } else {
        0
    }
}

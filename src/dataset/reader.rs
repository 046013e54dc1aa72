use std::fmt;
use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use csv::StringRecord;

use crate::scoring::{ParseSexError, RiskRecord, Sex};

// 0-based column positions, fixed by the source dataset layout.
pub const COL_SEX: usize = 2;
pub const COL_AGE: usize = 3;
pub const COL_CHOLESTEROL: usize = 4;
pub const COL_HDL: usize = 5;
pub const COL_SYSTOLIC: usize = 6;
pub const COL_DIASTOLIC: usize = 7;
pub const COL_DIABETES: usize = 8;
pub const COL_SMOKING: usize = 9;

/// Rows with fewer columns than this are skipped with a warning.
pub const MIN_COLUMNS: usize = 10;

/// Marker the source locale uses for an affirmative diabetes/smoking flag.
/// Any other value is treated as false. Overridable via config.
pub const DEFAULT_YES_TOKEN: &str = "是";

/// Read every row of the input file as-is, header included. Rows may have
/// uneven widths; width checks happen per row at parse time.
pub fn read_rows(path: &Path) -> Result<Vec<StringRecord>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file at {}", path.display()))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut rows = Vec::new();
    for result in reader.records() {
        let row = result
            .with_context(|| format!("Failed to read row from {}", path.display()))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Why a data row could not be turned into a `RiskRecord`. These skip the
/// row with a warning; the batch continues.
#[derive(Debug, PartialEq)]
pub enum RowError {
    TooFewColumns { found: usize },
    BadAge(String),
    BadSex(ParseSexError),
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowError::TooFewColumns { found } => {
                write!(f, "row has {} columns, expected at least {}", found, MIN_COLUMNS)
            }
            RowError::BadAge(raw) => write!(f, "cannot parse age '{}'", raw),
            RowError::BadSex(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for RowError {}

/// Map a raw row onto a typed record.
///
/// Age and sex must parse; cholesterol, HDL, and both blood pressure
/// readings silently default to 0 when unparseable, matching the source
/// data's permissiveness. Flags are an exact match against `yes_token`.
pub fn parse_record(row: &StringRecord, yes_token: &str) -> Result<RiskRecord, RowError> {
    if row.len() < MIN_COLUMNS {
        return Err(RowError::TooFewColumns { found: row.len() });
    }

    let age_raw = field(row, COL_AGE);
    let age = age_raw
        .trim()
        .parse()
        .map_err(|_| RowError::BadAge(age_raw.to_string()))?;
    let sex = Sex::parse(field(row, COL_SEX)).map_err(RowError::BadSex)?;

    Ok(RiskRecord {
        sex,
        age,
        cholesterol: int_or_zero(row, COL_CHOLESTEROL),
        hdl: int_or_zero(row, COL_HDL),
        systolic: int_or_zero(row, COL_SYSTOLIC),
        diastolic: int_or_zero(row, COL_DIASTOLIC),
        has_diabetes: field(row, COL_DIABETES).trim() == yes_token,
        is_smoker: field(row, COL_SMOKING).trim() == yes_token,
    })
}

fn field(row: &StringRecord, index: usize) -> &str {
    row.get(index).unwrap_or("")
}

fn int_or_zero(row: &StringRecord, index: usize) -> i32 {
    row.get(index)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0)
}

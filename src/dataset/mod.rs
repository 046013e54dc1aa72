pub mod reader;
pub mod writer;

pub use reader::{parse_record, read_rows, RowError, DEFAULT_YES_TOKEN, MIN_COLUMNS};
pub use writer::{
    build_output_rows, ensure_csv_extension, write_rows, OutputLabels, COL_ESTIMATE, COL_RISK,
};

use csv::StringRecord;

use crate::scoring::{score, RiskRecord, RiskScore, RiskTables};

/// One data row after the scoring pass. `result` is `None` when the row was
/// skipped; the raw row is kept either way so the output preserves every
/// input row in order.
#[derive(Debug, Clone)]
pub struct ScoredRow {
    pub row: StringRecord,
    pub result: Option<(RiskRecord, RiskScore)>,
}

/// Everything the scoring pass produced for one dataset.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    /// Row 0 of the input, if any.
    pub header: Option<StringRecord>,
    /// Data rows in input order.
    pub rows: Vec<ScoredRow>,
    /// Per-row warnings, collected rather than printed so the caller
    /// decides where they go.
    pub warnings: Vec<String>,
    pub scored: usize,
    pub skipped: usize,
}

/// Score every data row of a dataset. Row 0 is the header and passes
/// through untouched. Rows that fail to parse or to score are kept
/// unmodified and logged as warnings; the batch always runs to completion.
pub fn score_rows(rows: Vec<StringRecord>, tables: &RiskTables, yes_token: &str) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();
    let mut iter = rows.into_iter();
    outcome.header = iter.next();

    for (i, row) in iter.enumerate() {
        // 1-based spreadsheet row number; the header is row 1.
        let row_number = i + 2;
        let result = match parse_record(&row, yes_token) {
            Ok(record) => match score(&record, tables) {
                Ok(risk) => Some((record, risk)),
                Err(err) => {
                    outcome.warnings.push(format!("Row {}: {}", row_number, err));
                    None
                }
            },
            Err(err) => {
                outcome.warnings.push(format!("Row {}: {}", row_number, err));
                None
            }
        };

        if result.is_some() {
            outcome.scored += 1;
        } else {
            outcome.skipped += 1;
        }
        outcome.rows.push(ScoredRow { row, result });
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_row(sex: &str, age: &str) -> StringRecord {
        StringRecord::from(vec!["1", "x", sex, age, "213", "50", "140", "80", "", ""])
    }

    fn header() -> StringRecord {
        StringRecord::from(vec!["id", "name", "sex", "age", "tc", "hdl", "sbp", "dbp", "dm", "smoke"])
    }

    #[test]
    fn test_score_rows_scores_valid_rows() {
        let rows = vec![header(), data_row("female", "61"), data_row("male", "45")];
        let outcome = score_rows(rows, &RiskTables::default(), DEFAULT_YES_TOKEN);
        assert_eq!(outcome.scored, 2);
        assert_eq!(outcome.skipped, 0);
        assert!(outcome.warnings.is_empty());
        let (_, risk) = outcome.rows[0].result.as_ref().unwrap();
        assert_eq!(risk.total_points, 9);
    }

    #[test]
    fn test_score_rows_skips_bad_rows_and_continues() {
        let rows = vec![
            header(),
            StringRecord::from(vec!["1", "x", "female"]), // too short
            data_row("female", "abc"),                    // bad age
            data_row("female", "90"),                     // out of bucket range
            data_row("male", "45"),
        ];
        let outcome = score_rows(rows, &RiskTables::default(), DEFAULT_YES_TOKEN);
        assert_eq!(outcome.scored, 1);
        assert_eq!(outcome.skipped, 3);
        assert_eq!(outcome.warnings.len(), 3);
        assert!(outcome.warnings[0].starts_with("Row 2:"));
        assert!(outcome.warnings[2].contains("Age 90"));
        // Skipped rows are still present, unmodified and in order.
        assert_eq!(outcome.rows.len(), 4);
        assert!(outcome.rows[0].result.is_none());
        assert!(outcome.rows[3].result.is_some());
    }

    #[test]
    fn test_score_rows_empty_input() {
        let outcome = score_rows(Vec::new(), &RiskTables::default(), DEFAULT_YES_TOKEN);
        assert!(outcome.header.is_none());
        assert!(outcome.rows.is_empty());
    }

    #[test]
    fn test_score_rows_header_only() {
        let outcome = score_rows(vec![header()], &RiskTables::default(), DEFAULT_YES_TOKEN);
        assert_eq!(outcome.header.unwrap(), header());
        assert!(outcome.rows.is_empty());
        assert_eq!(outcome.scored, 0);
    }
}

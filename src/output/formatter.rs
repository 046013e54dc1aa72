use std::io::IsTerminal;

use owo_colors::OwoColorize;

use crate::dataset::BatchOutcome;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Two-decimal display form shared with the output file.
pub fn format_risk(value: f64) -> String {
    format!("{:.2}", value)
}

/// Format scored rows as a preview table.
/// Columns: row number, points, risk, estimate, sex/age.
/// Skipped rows are listed with a dash so gaps in the output are visible.
pub fn format_preview_table(outcome: &BatchOutcome, use_colors: bool) -> String {
    if outcome.rows.is_empty() {
        return "No data rows found.".to_string();
    }

    outcome
        .rows
        .iter()
        .enumerate()
        .map(|(i, scored)| {
            // Spreadsheet row number; the header is row 1.
            let row_str = format!("{:>4}.", i + 2);
            match &scored.result {
                Some((record, risk)) => {
                    let points = format!("{:>4}", risk.total_points);
                    let risk_str = format!("{:>6}", format_risk(risk.ten_year_risk));
                    let estimate_str = format!("{:>6}", format_risk(risk.population_estimate));
                    let who = format!("{}/{}", record.sex, record.age);
                    if use_colors {
                        format!(
                            "{} {}  {}  {}  {}",
                            row_str.dimmed(),
                            points.bold(),
                            colorize_risk(&risk_str, risk.ten_year_risk),
                            estimate_str,
                            who.cyan()
                        )
                    } else {
                        format!(
                            "{} {}  {}  {}  {}",
                            row_str, points, risk_str, estimate_str, who
                        )
                    }
                }
                None => {
                    let line = format!("{} {:>4}  {:>6}  {:>6}  skipped", row_str, "-", "-", "-");
                    if use_colors {
                        line.dimmed().to_string()
                    } else {
                        line
                    }
                }
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn colorize_risk(text: &str, risk: f64) -> String {
    if risk >= 0.10 {
        text.red().to_string()
    } else if risk >= 0.05 {
        text.yellow().to_string()
    } else {
        text.green().to_string()
    }
}

/// Format scored rows as tab-separated values for scripting.
/// Columns: row number, points, risk, estimate (no headers, no colors,
/// skipped rows omitted).
pub fn format_tsv(outcome: &BatchOutcome) -> String {
    outcome
        .rows
        .iter()
        .enumerate()
        .filter_map(|(i, scored)| {
            scored.result.as_ref().map(|(_, risk)| {
                format!(
                    "{}\t{}\t{}\t{}",
                    i + 2,
                    risk.total_points,
                    format_risk(risk.ten_year_risk),
                    format_risk(risk.population_estimate)
                )
            })
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Per-row write log lines for verbose mode, one per scored row in batch
/// order. Skipped rows produce no line; their warnings already did.
pub fn format_write_log(outcome: &BatchOutcome) -> Vec<String> {
    outcome
        .rows
        .iter()
        .enumerate()
        .filter_map(|(i, scored)| {
            scored.result.as_ref().map(|(_, risk)| {
                format!(
                    "Writing row {}: risk={}, estimate={}",
                    i + 2,
                    format_risk(risk.ten_year_risk),
                    format_risk(risk.population_estimate)
                )
            })
        })
        .collect()
}

/// One-line batch summary printed after every run.
pub fn format_summary(outcome: &BatchOutcome) -> String {
    let rows = if outcome.scored == 1 { "row" } else { "rows" };
    if outcome.skipped == 0 {
        format!("Calculation complete. {} {} scored.", outcome.scored, rows)
    } else {
        format!(
            "Calculation complete. {} {} scored, {} skipped.",
            outcome.scored, rows, outcome.skipped
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{score_rows, DEFAULT_YES_TOKEN};
    use crate::scoring::RiskTables;
    use csv::StringRecord;

    fn sample_outcome() -> BatchOutcome {
        let rows = vec![
            StringRecord::from(vec!["h"; 10]),
            StringRecord::from(vec![
                "1", "x", "female", "61", "213", "50", "140", "80", "", "",
            ]),
            StringRecord::from(vec!["2", "x", "female"]),
        ];
        score_rows(rows, &RiskTables::default(), DEFAULT_YES_TOKEN)
    }

    #[test]
    fn test_format_risk_two_decimals() {
        assert_eq!(format_risk(0.11), "0.11");
        assert_eq!(format_risk(0.0), "0.00");
        assert_eq!(format_risk(-0.07), "-0.07");
        assert_eq!(format_risk(1.25), "1.25");
    }

    #[test]
    fn test_preview_table_plain() {
        let table = format_preview_table(&sample_outcome(), false);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("0.09"));
        assert!(lines[0].contains("female/61"));
        assert!(lines[0].starts_with("   2."));
        assert!(lines[1].contains("skipped"));
    }

    #[test]
    fn test_preview_table_empty() {
        let outcome = BatchOutcome::default();
        assert_eq!(format_preview_table(&outcome, false), "No data rows found.");
    }

    #[test]
    fn test_tsv_omits_skipped_rows() {
        let tsv = format_tsv(&sample_outcome());
        let lines: Vec<&str> = tsv.lines().collect();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], "2\t9\t0.09\t0.08");
    }

    #[test]
    fn test_write_log_lists_scored_rows_only() {
        let log = format_write_log(&sample_outcome());
        assert_eq!(log.len(), 1);
        assert_eq!(log[0], "Writing row 2: risk=0.09, estimate=0.08");
    }

    #[test]
    fn test_summary_mentions_skips_only_when_present() {
        let outcome = sample_outcome();
        assert_eq!(
            format_summary(&outcome),
            "Calculation complete. 1 row scored, 1 skipped."
        );

        let clean = score_rows(
            vec![
                StringRecord::from(vec!["h"; 10]),
                StringRecord::from(vec![
                    "1", "x", "male", "45", "150", "65", "125", "78", "", "",
                ]),
            ],
            &RiskTables::default(),
            DEFAULT_YES_TOKEN,
        );
        assert_eq!(format_summary(&clean), "Calculation complete. 1 row scored.");
    }

    #[test]
    fn test_summary_pluralizes_row_count() {
        let two = score_rows(
            vec![
                StringRecord::from(vec!["h"; 10]),
                StringRecord::from(vec![
                    "1", "x", "male", "45", "150", "65", "125", "78", "", "",
                ]),
                StringRecord::from(vec![
                    "2", "x", "female", "61", "213", "50", "140", "80", "", "",
                ]),
            ],
            &RiskTables::default(),
            DEFAULT_YES_TOKEN,
        );
        assert_eq!(format_summary(&two), "Calculation complete. 2 rows scored.");

        let none = score_rows(
            vec![StringRecord::from(vec!["h"; 10])],
            &RiskTables::default(),
            DEFAULT_YES_TOKEN,
        );
        assert_eq!(format_summary(&none), "Calculation complete. 0 rows scored.");
    }
}

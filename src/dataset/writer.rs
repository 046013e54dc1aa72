use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use csv::StringRecord;

use super::BatchOutcome;

/// Output column positions (the original sheet's K and L).
pub const COL_RISK: usize = 10;
pub const COL_ESTIMATE: usize = 11;

/// Header labels for the two appended columns.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputLabels {
    pub risk: String,
    pub estimate: String,
}

impl Default for OutputLabels {
    fn default() -> Self {
        Self {
            risk: "十年內發生缺血性心臟病的機率".to_string(),
            estimate: "估計發生率".to_string(),
        }
    }
}

/// Assemble the full output dataset: header with labels appended, scored
/// rows with both values formatted to two decimals, skipped rows passed
/// through unmodified.
pub fn build_output_rows(outcome: &BatchOutcome, labels: &OutputLabels) -> Vec<StringRecord> {
    let mut rows = Vec::with_capacity(outcome.rows.len() + 1);

    if let Some(header) = &outcome.header {
        rows.push(with_result_columns(header, &labels.risk, &labels.estimate));
    }

    for scored in &outcome.rows {
        match &scored.result {
            Some((_, risk)) => rows.push(with_result_columns(
                &scored.row,
                &format!("{:.2}", risk.ten_year_risk),
                &format!("{:.2}", risk.population_estimate),
            )),
            None => rows.push(scored.row.clone()),
        }
    }

    rows
}

/// Place the two result values at their fixed columns, padding shorter rows
/// with empty cells and overwriting those columns if the row already has
/// them.
fn with_result_columns(row: &StringRecord, risk: &str, estimate: &str) -> StringRecord {
    let mut fields: Vec<String> = row.iter().map(str::to_string).collect();
    while fields.len() <= COL_ESTIMATE {
        fields.push(String::new());
    }
    fields[COL_RISK] = risk.to_string();
    fields[COL_ESTIMATE] = estimate.to_string();
    StringRecord::from(fields)
}

/// Write the output rows atomically so a failed run never leaves a
/// half-written file behind.
pub fn write_rows(path: &Path, rows: &[StringRecord]) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open output file at {}", path.display()))?;

    {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(&mut file);
        for row in rows {
            writer
                .write_record(row)
                .context("Failed to write row to output file")?;
        }
        writer.flush().context("Failed to flush output file")?;
    }

    file.commit()
        .with_context(|| format!("Failed to save output file at {}", path.display()))?;
    Ok(())
}

/// Append a `.csv` extension when the user-supplied save path has none.
pub fn ensure_csv_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_none() {
        path.with_extension("csv")
    } else {
        path
    }
}

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Prompts for the dataset file to score when no path was given on the
/// command line.
pub fn prompt_for_input_path() -> Result<PathBuf> {
    println!("No input file given.");
    read_path("Path to input CSV: ")
}

/// Prompts for where to save the scored dataset.
pub fn prompt_for_output_path() -> Result<PathBuf> {
    read_path("Path to save results: ")
}

fn read_path(label: &str) -> Result<PathBuf> {
    print!("{}", label);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("Failed to read path from stdin")?;

    let path = line.trim();
    if path.is_empty() {
        anyhow::bail!("Path cannot be empty");
    }

    Ok(PathBuf::from(path))
}

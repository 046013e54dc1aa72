use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

const EXIT_SUCCESS: i32 = 0;
const EXIT_IO: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a dataset and write the results (default if no subcommand)
    Score {
        /// Input CSV file (prompted for interactively when omitted)
        input: Option<PathBuf>,

        /// Where to save the scored dataset (prompted for when omitted;
        /// gets a .csv extension when the path has none)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print a scored preview table to stdout
        #[arg(short, long)]
        preview: bool,

        /// Print scored rows as tab-separated values for scripting
        #[arg(long, conflicts_with = "preview")]
        tsv: bool,
    },
    /// Show the active coefficient tables (after config overrides)
    Tables {
        /// Print the tables as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "framcalc")]
#[command(about = "Framingham 10-year cardiovascular risk scoring for CSV datasets", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/framcalc/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Score {
        input: None,
        output: None,
        preview: false,
        tsv: false,
    });
    let start_time = Instant::now();

    // Load config
    let config = match framcalc::config::load_config(cli.config.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = config.validate() {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    // Resolve coefficient tables at startup so a broken override never
    // reaches the engine
    let tables_config = config.tables.clone().unwrap_or_default();
    let tables = match framcalc::scoring::resolve_tables(&tables_config) {
        Ok(t) => t,
        Err(errors) => {
            eprintln!("Coefficient table errors:");
            for error in errors {
                eprintln!("  - {}", error);
            }
            std::process::exit(EXIT_CONFIG);
        }
    };

    if cli.verbose {
        let source = if config.tables.is_some() {
            "config overrides applied"
        } else {
            "built-in defaults"
        };
        eprintln!("Coefficient tables: {}", source);
    }

    match command {
        Commands::Score {
            input,
            output,
            preview,
            tsv,
        } => {
            // Resolve the input path, prompting like the original's file
            // dialog when it was not given
            let input_path = match input {
                Some(p) => p,
                None => match framcalc::prompt::prompt_for_input_path() {
                    Ok(p) => p,
                    Err(e) => {
                        eprintln!("{}", e);
                        std::process::exit(EXIT_IO);
                    }
                },
            };

            let rows = match framcalc::dataset::read_rows(&input_path) {
                Ok(rows) => rows,
                Err(e) => {
                    eprintln!("{:#}", e);
                    std::process::exit(EXIT_IO);
                }
            };

            if cli.verbose {
                eprintln!("Read {} rows from {}", rows.len(), input_path.display());
            }

            let outcome = framcalc::dataset::score_rows(rows, &tables, config.yes_token());
            for warning in &outcome.warnings {
                eprintln!("{}", warning);
            }

            let output_path = match output {
                Some(p) => p,
                None => match framcalc::prompt::prompt_for_output_path() {
                    Ok(p) => p,
                    Err(e) => {
                        eprintln!("{}", e);
                        std::process::exit(EXIT_IO);
                    }
                },
            };
            let output_path = framcalc::dataset::ensure_csv_extension(output_path);

            if cli.verbose {
                for line in framcalc::output::format_write_log(&outcome) {
                    eprintln!("{}", line);
                }
            }

            let output_rows =
                framcalc::dataset::build_output_rows(&outcome, &config.output_labels());
            if let Err(e) = framcalc::dataset::write_rows(&output_path, &output_rows) {
                eprintln!("{:#}", e);
                std::process::exit(EXIT_IO);
            }

            if cli.verbose {
                eprintln!("Saved results to {}", output_path.display());
            }

            if preview {
                let use_colors = framcalc::output::should_use_colors();
                println!("{}", framcalc::output::format_preview_table(&outcome, use_colors));
            } else if tsv {
                let table = framcalc::output::format_tsv(&outcome);
                if !table.is_empty() {
                    println!("{}", table);
                }
            }

            println!("{}", framcalc::output::format_summary(&outcome));

            if cli.verbose {
                eprintln!("Done in {:?}", start_time.elapsed());
            }
        }
        Commands::Tables { json } => {
            if json {
                match serde_json::to_string_pretty(&tables) {
                    Ok(text) => println!("{}", text),
                    Err(e) => {
                        eprintln!("Failed to serialize tables: {}", e);
                        std::process::exit(EXIT_IO);
                    }
                }
            } else {
                print_tables(&tables);
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

fn print_tables(tables: &framcalc::scoring::RiskTables) {
    for (name, sex) in [("female", &tables.female), ("male", &tables.male)] {
        println!("{}:", name);
        println!("  age:            {:?}", sex.age);
        println!("  estimate:       {:?}", sex.estimate);
        println!("  cholesterol:    {:?}", sex.cholesterol);
        println!("  hdl:            {:?}", sex.hdl);
        println!("  blood_pressure: {:?}", sex.blood_pressure);
        println!("  diabetes:       {:+}", sex.diabetes);
    }
    println!("smoking:          {:+}", tables.smoking);
}

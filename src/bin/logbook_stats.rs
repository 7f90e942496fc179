use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use climbstats::{AnalysisResult, GradeScale, analyze, read_logbook_path};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(version, about = "Summary statistics for a climbing logbook")]
struct Cli {
    /// Logbook CSV: route name, grade, attempts
    #[arg(default_value = "data/logbook.csv")]
    logbook: PathBuf,

    /// Grade table CSV: label, rank
    #[arg(short, long, default_value = "data/grade_table.csv")]
    grades: PathBuf,

    /// Separator between furthest-from-average routes
    #[arg(short, long, default_value = ", ")]
    separator: String,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn print_text(result: &AnalysisResult, separator: &str) {
    let furthest: Vec<_> = result
        .furthest_routes
        .iter()
        .map(|route| route.to_string())
        .collect();

    println!("{}", result.unique_route_count);
    println!("{}", result.failed_attempts);
    println!("{}", result.mean_grade);
    println!("{}", result.hardest_grade);
    println!("{}", furthest.join(separator));
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let scale = GradeScale::from_path(&cli.grades)
        .with_context(|| format!("could not load grade table {}", cli.grades.display()))?;
    let entries = read_logbook_path(&cli.logbook)
        .with_context(|| format!("could not read logbook {}", cli.logbook.display()))?;

    let result = analyze(&entries, &scale)
        .with_context(|| format!("could not analyze {}", cli.logbook.display()))?;

    match cli.format {
        Format::Text => print_text(&result, &cli.separator),
        Format::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    Ok(())
}

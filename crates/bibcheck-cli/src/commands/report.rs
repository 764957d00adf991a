//! Report command - print the correction report for a saved run.

use std::path::PathBuf;

use bibcheck::RunReport;
use colored::Colorize;

pub fn run(file: PathBuf, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let report = RunReport::load(&file)?;

    if verbose {
        eprintln!(
            "{} {} ({} references, {} format, finished {})",
            "Loaded".cyan().bold(),
            file.display(),
            report.summary.total,
            report.format,
            report.finished_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }

    match report.correction_report() {
        Some(text) => {
            println!("{}", text);
            Ok(())
        }
        None => Err("Report contains no verified references".into()),
    }
}

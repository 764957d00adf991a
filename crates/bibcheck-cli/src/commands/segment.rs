//! Segment command - show how input is split into references.

use std::path::PathBuf;

use bibcheck::segment_with_format;
use colored::Colorize;

use super::{headline, input_label, read_input};

pub fn run(
    file: Option<PathBuf>,
    json: bool,
    sample: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(file.as_deref(), sample)?;
    let segmentation = segment_with_format(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(&segmentation)?);
        return Ok(());
    }

    println!(
        "{} {} {} references ({} format)",
        "Segmented".cyan().bold(),
        input_label(file.as_ref(), sample).white(),
        segmentation.entries.len().to_string().white().bold(),
        segmentation.format
    );
    println!();

    for (index, entry) in segmentation.entries.iter().enumerate() {
        if verbose {
            println!("{}", format!("[{}]", index + 1).yellow().bold());
            println!("{}", entry);
            println!();
        } else {
            println!("{:>4}. {}", index + 1, headline(entry, 100));
        }
    }

    if segmentation.entries.is_empty() {
        println!("{}", "No valid references found in input.".yellow());
    }

    Ok(())
}

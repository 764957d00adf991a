//! Sample command - print the built-in sample bibliography.

use bibcheck::SAMPLE_REFERENCES;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", SAMPLE_REFERENCES.trim());
    Ok(())
}

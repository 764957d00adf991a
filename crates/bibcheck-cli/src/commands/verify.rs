//! Verify command - check every reference in a bibliography.

use std::path::PathBuf;
use std::sync::Arc;

use bibcheck::{
    AnthropicProvider, Bibcheck, BibcheckConfig, GeminiProvider, LlmConfig, LlmProvider,
    MockProvider, OllamaProvider, OpenAIProvider, ReferenceResult, RunReport, ValidationStatus,
};
use colored::{ColoredString, Colorize};

use crate::cli::LlmProviderChoice;

use super::{headline, input_label, read_input};

/// Options for the verify command.
pub struct VerifyOptions {
    pub file: Option<PathBuf>,
    pub llm: LlmProviderChoice,
    pub model: Option<String>,
    pub no_search: bool,
    pub output: Option<PathBuf>,
    pub report: bool,
    pub max: Option<u64>,
    pub sample: bool,
    pub verbose: bool,
}

pub fn run(options: VerifyOptions) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(options.file.as_deref(), options.sample)?;
    let provider = build_provider(&options.llm, options.model.clone(), !options.no_search)?;

    println!(
        "{} {} with {} ({})",
        "Verifying".cyan().bold(),
        input_label(options.file.as_ref(), options.sample).white(),
        provider.name().white().bold(),
        provider.config().model
    );
    if options.no_search {
        println!("{}", "Web search disabled; verdicts rely on model memory.".yellow());
    }
    println!();

    let config = BibcheckConfig {
        max_references: options
            .max
            .map(|max| usize::try_from(max).unwrap_or(usize::MAX)),
    };
    let bibcheck = Bibcheck::from_shared(provider, config);

    let verbose = options.verbose;
    let report = bibcheck.check_with_progress(&text, |state, results| {
        if !state.is_processing || state.progress.current == 0 {
            return;
        }
        // Each reference is published once in flight and once resolved.
        if let Some(result) = results.get(state.progress.current - 1) {
            if !result.is_pending() {
                print_result(state.progress.current, state.progress.total, result, verbose);
            }
        }
    })?;

    print_summary(&report);

    if let Some(path) = options.output {
        report.save(&path)?;
        println!();
        println!(
            "{} {}",
            "Saved to".green().bold(),
            path.display().to_string().white()
        );
    }

    if options.report {
        if let Some(text) = report.correction_report() {
            println!();
            println!("{}", text);
        }
    } else if report.summary.invalid + report.summary.with_corrections > 0 {
        println!();
        println!(
            "Run with {} to get a correction report for a chat assistant",
            "--report".cyan().bold()
        );
    }

    Ok(())
}

/// Construct the chosen provider, reading credentials from the environment.
fn build_provider(
    choice: &LlmProviderChoice,
    model: Option<String>,
    grounded_search: bool,
) -> Result<Arc<dyn LlmProvider>, Box<dyn std::error::Error>> {
    let default_model = match choice {
        LlmProviderChoice::Gemini => GeminiProvider::DEFAULT_MODEL,
        LlmProviderChoice::Anthropic => AnthropicProvider::DEFAULT_MODEL,
        LlmProviderChoice::OpenAI => OpenAIProvider::DEFAULT_MODEL,
        LlmProviderChoice::Ollama => OllamaProvider::DEFAULT_MODEL,
        LlmProviderChoice::Mock => "mock",
    };

    let config = LlmConfig {
        grounded_search,
        ..LlmConfig::with_model(model.unwrap_or_else(|| default_model.to_string()))
    };

    tracing::debug!(provider = %choice, model = %config.model, grounded_search, "building provider");

    let provider: Arc<dyn LlmProvider> = match choice {
        LlmProviderChoice::Gemini => Arc::new(GeminiProvider::from_env_with_config(config)?),
        LlmProviderChoice::Anthropic => Arc::new(AnthropicProvider::from_env_with_config(config)?),
        LlmProviderChoice::OpenAI => Arc::new(OpenAIProvider::from_env_with_config(config)?),
        LlmProviderChoice::Ollama => Arc::new(OllamaProvider::with_config(config)?),
        LlmProviderChoice::Mock => Arc::new(MockProvider::with_config(config)),
    };

    Ok(provider)
}

fn status_label(status: ValidationStatus) -> ColoredString {
    let label = format!("{:<9}", status.as_str());
    match status {
        ValidationStatus::Valid => label.green().bold(),
        ValidationStatus::Invalid => label.red().bold(),
        ValidationStatus::Uncertain => label.yellow().bold(),
        ValidationStatus::Pending => label.dimmed(),
    }
}

fn print_result(index: usize, total: usize, result: &ReferenceResult, verbose: bool) {
    println!(
        "[{}/{}] {} {}",
        index,
        total,
        status_label(result.status),
        headline(&result.original_text, 80)
    );

    if verbose || result.status != ValidationStatus::Valid {
        println!("        {}", result.details.dimmed());
    }
    if let Some(ref citation) = result.corrected_citation {
        println!("        {} {}", "Corrected:".cyan(), citation);
    }
    for alternative in &result.alternatives {
        println!("        {} {}", "Alternative:".cyan(), alternative);
    }
    if verbose {
        if let Some(ref url) = result.source_url {
            println!("        {} {}", "Source:".cyan(), url);
        }
    }
}

fn print_summary(report: &RunReport) {
    let summary = &report.summary;
    let elapsed = report.finished_at - report.started_at;

    println!();
    println!(
        "Checked {} references in {:.1}s ({} format): {} valid, {} invalid, {} uncertain",
        summary.total.to_string().white().bold(),
        elapsed.num_milliseconds() as f64 / 1000.0,
        report.format,
        summary.valid.to_string().green(),
        summary.invalid.to_string().red(),
        summary.uncertain.to_string().yellow()
    );
    if summary.with_corrections > 0 {
        println!(
            "{} valid references have a corrected citation",
            summary.with_corrections.to_string().cyan()
        );
    }
}

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// bibcheck: verify academic references with a search-grounded LLM
#[derive(Parser)]
#[command(name = "bibcheck")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Verify every reference in a bibliography
    Verify {
        /// Bibliography file (BibTeX, \bibitem list or plain text); "-" or omitted reads stdin
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// LLM provider to verify with
        #[arg(long, default_value = "gemini")]
        llm: LlmProviderChoice,

        /// Model to use (provider-specific, e.g., "gemini-2.5-pro", "llama3.2")
        #[arg(long)]
        model: Option<String>,

        /// Don't ask the model to ground its verdict in a web search
        #[arg(long)]
        no_search: bool,

        /// Save the run report as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print a correction report to paste into a chat assistant
        #[arg(long)]
        report: bool,

        /// Verify at most this many references
        #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
        max: Option<u64>,

        /// Verify the built-in sample bibliography instead of FILE
        #[arg(long, conflicts_with = "file")]
        sample: bool,
    },

    /// Show how input is split into references, without calling a model
    Segment {
        /// Bibliography file; "-" or omitted reads stdin
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Segment the built-in sample bibliography instead of FILE
        #[arg(long, conflicts_with = "file")]
        sample: bool,
    },

    /// Print the correction report for a saved run
    Report {
        /// Run report written by `verify --output`
        #[arg(value_name = "REPORT_FILE")]
        file: PathBuf,
    },

    /// Print the built-in sample bibliography
    Sample,
}

/// LLM provider choice for verification
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LlmProviderChoice {
    /// Google Gemini with Google Search grounding (requires GEMINI_API_KEY)
    #[default]
    Gemini,
    /// Anthropic Claude API (requires ANTHROPIC_API_KEY)
    Anthropic,
    /// OpenAI GPT API (requires OPENAI_API_KEY)
    OpenAI,
    /// Ollama local models (requires Ollama running)
    Ollama,
    /// Mock provider for testing
    Mock,
}

impl std::str::FromStr for LlmProviderChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gemini" | "google" => Ok(LlmProviderChoice::Gemini),
            "anthropic" | "claude" => Ok(LlmProviderChoice::Anthropic),
            "openai" | "gpt" => Ok(LlmProviderChoice::OpenAI),
            "ollama" | "local" => Ok(LlmProviderChoice::Ollama),
            "mock" | "test" => Ok(LlmProviderChoice::Mock),
            _ => Err(format!(
                "Unknown provider: {}. Use: gemini, anthropic, openai, ollama, or mock.",
                s
            )),
        }
    }
}

impl std::fmt::Display for LlmProviderChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LlmProviderChoice::Gemini => write!(f, "gemini"),
            LlmProviderChoice::Anthropic => write!(f, "anthropic"),
            LlmProviderChoice::OpenAI => write!(f, "openai"),
            LlmProviderChoice::Ollama => write!(f, "ollama"),
            LlmProviderChoice::Mock => write!(f, "mock"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_provider_choice_aliases() {
        assert_eq!("Claude".parse::<LlmProviderChoice>(), Ok(LlmProviderChoice::Anthropic));
        assert_eq!("google".parse::<LlmProviderChoice>(), Ok(LlmProviderChoice::Gemini));
        assert!("bard".parse::<LlmProviderChoice>().is_err());
        assert_eq!(LlmProviderChoice::default().to_string(), "gemini");
    }

    #[test]
    fn test_verify_args() {
        let cli = Cli::try_parse_from([
            "bibcheck", "verify", "refs.bib", "--llm", "mock", "--no-search", "--max", "3",
        ])
        .unwrap();

        match cli.command {
            Commands::Verify {
                file,
                llm,
                no_search,
                max,
                sample,
                ..
            } => {
                assert_eq!(file, Some(PathBuf::from("refs.bib")));
                assert_eq!(llm, LlmProviderChoice::Mock);
                assert!(no_search);
                assert_eq!(max, Some(3));
                assert!(!sample);
            }
            _ => panic!("expected verify"),
        }
    }

    #[test]
    fn test_max_must_be_positive() {
        assert!(Cli::try_parse_from(["bibcheck", "verify", "--sample", "--max", "0"]).is_err());
        assert!(Cli::try_parse_from(["bibcheck", "verify", "--sample", "--max", "1"]).is_ok());
    }

    #[test]
    fn test_sample_conflicts_with_file() {
        assert!(Cli::try_parse_from(["bibcheck", "verify", "refs.bib", "--sample"]).is_err());
    }
}

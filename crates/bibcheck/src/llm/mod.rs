//! LLM provider integration for reference verification.
//!
//! Verification truth comes entirely from the model: bibcheck keeps no
//! citation index of its own. Providers that support it are asked to
//! ground their verdict in a live web search.
//!
//! # Supported Providers
//!
//! - **Gemini** - Google models with Google Search grounding (requires `GEMINI_API_KEY`)
//! - **Anthropic** - Claude models with the web search tool (requires `ANTHROPIC_API_KEY`)
//! - **OpenAI** - GPT search-preview models (requires `OPENAI_API_KEY`)
//! - **Ollama** - Local models, no API key and no web search (requires Ollama installed)
//!
//! # Example
//!
//! ```no_run
//! use bibcheck::{Bibcheck, GeminiProvider};
//!
//! let checker = Bibcheck::new(GeminiProvider::from_env().unwrap());
//! ```

mod anthropic;
mod gemini;
mod mock;
mod ollama;
mod openai;
mod prompts;
mod provider;

pub use anthropic::AnthropicProvider;
pub use gemini::GeminiProvider;
pub use mock::MockProvider;
pub use ollama::OllamaProvider;
pub use openai::OpenAIProvider;
pub use prompts::{verification_prompt, SYSTEM_INSTRUCTION};
pub use provider::{GenerationRequest, LlmConfig, LlmProvider};

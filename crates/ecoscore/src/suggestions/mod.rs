//! Improvement suggestions sourced from an external text-generation service.
//!
//! The provider never fails: any error from the generator, or a response with
//! no usable bullet lines, is replaced by a fixed fallback list.

pub mod anthropic;
pub mod generator;
pub mod parser;
pub mod prompt;
pub mod provider;

pub use anthropic::AnthropicClient;
pub use generator::{GenerationError, SuggestionBackend, TextGenerator};
pub use parser::parse_bullets;
pub use prompt::build_prompt;
pub use provider::{
    fallback_suggestions, SuggestionFailure, SuggestionProvider, SuggestionSet, SuggestionSource,
    FALLBACK_SUGGESTIONS, MAX_SUGGESTIONS,
};

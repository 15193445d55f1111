use tracing::warn;

use super::generator::{GenerationError, TextGenerator};
use super::parser::parse_bullets;
use super::prompt::build_prompt;
use crate::config::DEFAULT_SUGGESTION_MAX_TOKENS;
use crate::scoring::Rating;
use crate::submissions::ProductInput;

pub const MAX_SUGGESTIONS: usize = 5;

pub const FALLBACK_SUGGESTIONS: [&str; 3] = [
    "Consider using more sustainable materials",
    "Optimize transport method to reduce emissions",
    "Improve packaging recyclability",
];

pub fn fallback_suggestions() -> Vec<String> {
    FALLBACK_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionSource {
    Generated,
    Fallback,
}

/// Suggestions for one product and where they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionSet {
    pub items: Vec<String>,
    pub source: SuggestionSource,
}

/// Why a provider attempt fell back: either the generator failed, or its
/// reply carried no bullet lines.
#[derive(Debug, thiserror::Error)]
pub enum SuggestionFailure {
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error("generated text contained no bullet suggestions")]
    NoBulletLines,
}

/// Queries the generator once per product and absorbs every failure.
pub struct SuggestionProvider<G> {
    generator: G,
    max_tokens: u32,
}

impl<G: TextGenerator> SuggestionProvider<G> {
    pub fn new(generator: G, max_tokens: u32) -> Self {
        Self {
            generator,
            max_tokens,
        }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub async fn suggest(&self, product: &ProductInput, score: f64, rating: Rating) -> SuggestionSet {
        match self.request(product, score, rating).await {
            Ok(items) => SuggestionSet {
                items,
                source: SuggestionSource::Generated,
            },
            Err(reason) => {
                warn!(
                    product = %product.product_name,
                    %reason,
                    "using fallback suggestions"
                );
                SuggestionSet {
                    items: fallback_suggestions(),
                    source: SuggestionSource::Fallback,
                }
            }
        }
    }

    async fn request(
        &self,
        product: &ProductInput,
        score: f64,
        rating: Rating,
    ) -> Result<Vec<String>, SuggestionFailure> {
        let prompt = build_prompt(product, score, rating);
        let text = self.generator.generate(&prompt, self.max_tokens).await?;
        let items = parse_bullets(&text, MAX_SUGGESTIONS);
        if items.is_empty() {
            return Err(SuggestionFailure::NoBulletLines);
        }
        Ok(items)
    }
}

impl<G: TextGenerator> From<G> for SuggestionProvider<G> {
    fn from(generator: G) -> Self {
        Self::new(generator, DEFAULT_SUGGESTION_MAX_TOKENS)
    }
}

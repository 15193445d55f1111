use serde::Deserialize;
use serde_json::Value;

use super::coerce;
use super::domain::ProductInput;
use crate::scoring::{ScoringError, WeightTriple};

/// Fields `POST /score` must carry, in the order they are reported when missing.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "product_name",
    "materials",
    "transport",
    "packaging",
    "gwp",
    "cost",
    "circularity",
];

/// Caller-facing validation failures, surfaced as HTTP 400.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("request body must be valid JSON: {0}")]
    MalformedBody(String),
    #[error("request body must be a JSON object")]
    NotAnObject,
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("invalid field value: {0}")]
    InvalidField(String),
    #[error(transparent)]
    Weights(#[from] ScoringError),
}

/// A validated scoring request: product attributes plus optional custom weights.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScoreRequest {
    pub product_name: String,
    pub materials: Vec<String>,
    pub transport: String,
    pub packaging: String,
    #[serde(deserialize_with = "coerce::number")]
    pub gwp: f64,
    #[serde(deserialize_with = "coerce::number")]
    pub cost: f64,
    #[serde(deserialize_with = "coerce::number")]
    pub circularity: f64,
    #[serde(default, deserialize_with = "coerce::optional_number")]
    pub weight_grams: Option<f64>,
    #[serde(default)]
    pub weights: Option<WeightTriple>,
}

impl ScoreRequest {
    /// Checks field presence first so callers get the full list of missing
    /// fields, then deserializes and coerces the values.
    pub fn from_json(body: Value) -> Result<Self, ValidationError> {
        let object = body.as_object().ok_or(ValidationError::NotAnObject)?;

        let missing: Vec<&'static str> = REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|field| !object.contains_key(*field))
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        serde_json::from_value(body).map_err(|err| ValidationError::InvalidField(err.to_string()))
    }

    pub fn new(product: ProductInput, weights: Option<WeightTriple>) -> Self {
        Self {
            product_name: product.product_name,
            materials: product.materials,
            transport: product.transport,
            packaging: product.packaging,
            gwp: product.gwp,
            cost: product.cost,
            circularity: product.circularity,
            weight_grams: product.weight_grams,
            weights,
        }
    }

    pub fn into_parts(self) -> (ProductInput, Option<WeightTriple>) {
        let product = ProductInput {
            product_name: self.product_name,
            materials: self.materials,
            transport: self.transport,
            packaging: self.packaging,
            gwp: self.gwp,
            cost: self.cost,
            circularity: self.circularity,
            weight_grams: self.weight_grams,
        };
        (product, self.weights)
    }
}

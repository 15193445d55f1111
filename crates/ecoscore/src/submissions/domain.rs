use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::coerce;
use crate::scoring::{Rating, ScoreInputs, WeightTriple};

/// Product attributes supplied by the caller. Uniqueness is not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
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
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "coerce::optional_number"
    )]
    pub weight_grams: Option<f64>,
}

impl ProductInput {
    pub fn score_inputs(&self) -> ScoreInputs {
        ScoreInputs {
            gwp: self.gwp,
            circularity: self.circularity,
            cost: self.cost,
        }
    }
}

/// Composite result returned to the caller of `POST /score`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub product_name: String,
    pub sustainability_score: f64,
    pub rating: Rating,
    pub suggestions: Vec<String>,
    pub issues: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

/// Stored form of a scored product: the caller's input, the derived result, and
/// the weights that were actually applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionRecord {
    #[serde(flatten)]
    pub product: ProductInput,
    pub score: f64,
    pub rating: Rating,
    pub suggestions: Vec<String>,
    pub issues: Vec<String>,
    pub timestamp: DateTime<Utc>,
    pub weights_used: WeightTriple,
}

impl SubmissionRecord {
    pub fn result(&self) -> ScoreResult {
        ScoreResult {
            product_name: self.product.product_name.clone(),
            sustainability_score: self.score,
            rating: self.rating,
            suggestions: self.suggestions.clone(),
            issues: self.issues.clone(),
            timestamp: self.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn product() -> ProductInput {
        ProductInput {
            product_name: "Trail Bottle".to_string(),
            materials: vec!["Aluminium".to_string(), "Silicone".to_string()],
            transport: "rail".to_string(),
            packaging: "cardboard".to_string(),
            gwp: 8.0,
            cost: 24.0,
            circularity: 72.0,
            weight_grams: None,
        }
    }

    #[test]
    fn submission_record_serializes_product_fields_inline() {
        let record = SubmissionRecord {
            product: product(),
            score: 81.3,
            rating: Rating::B,
            suggestions: vec!["Ship in bulk".to_string()],
            issues: Vec::new(),
            timestamp: Utc.with_ymd_and_hms(2025, 10, 1, 12, 0, 0).unwrap(),
            weights_used: WeightTriple::default(),
        };

        let value = serde_json::to_value(&record).expect("record serializes");
        assert_eq!(value["product_name"], json!("Trail Bottle"));
        assert_eq!(value["materials"], json!(["Aluminium", "Silicone"]));
        assert_eq!(value["rating"], json!("B"));
        assert_eq!(value["weights_used"]["circularity"], json!(0.35));
        assert_eq!(value["timestamp"], json!("2025-10-01T12:00:00Z"));
        assert!(value.get("weight_grams").is_none());
    }

    #[test]
    fn result_mirrors_record_fields() {
        let record = SubmissionRecord {
            product: product(),
            score: 55.0,
            rating: Rating::C,
            suggestions: Vec::new(),
            issues: vec!["Non-recyclable packaging".to_string()],
            timestamp: Utc::now(),
            weights_used: WeightTriple::default(),
        };

        let result = record.result();
        assert_eq!(result.product_name, "Trail Bottle");
        assert_eq!(result.sustainability_score, 55.0);
        assert_eq!(result.rating, Rating::C);
        assert_eq!(result.issues, record.issues);
        assert_eq!(result.timestamp, record.timestamp);
    }
}

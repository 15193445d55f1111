use crate::scoring::Rating;
use crate::submissions::ProductInput;

const MISSING_WEIGHT: &str = "N/A";

/// Renders the request sent to the text-generation service.
pub fn build_prompt(product: &ProductInput, score: f64, rating: Rating) -> String {
    let weight = product
        .weight_grams
        .map(|grams| grams.to_string())
        .unwrap_or_else(|| MISSING_WEIGHT.to_string());

    format!(
        "Analyze this product's sustainability and provide 3-5 specific, actionable suggestions to improve its environmental impact:

Product: {name}
Materials: {materials}
Weight: {weight} grams
Transport: {transport}
Packaging: {packaging}
GWP: {gwp} kg CO2e
Cost: ${cost}
Circularity Score: {circularity}/100
Current Sustainability Score: {score}/100 (Rating: {rating})

Provide ONLY a bulleted list of 3-5 practical suggestions. Be concise and specific. Format as:
- Suggestion 1
- Suggestion 2
etc.",
        name = product.product_name,
        materials = product.materials.join(", "),
        transport = product.transport,
        packaging = product.packaging,
        gwp = product.gwp,
        cost = product.cost,
        circularity = product.circularity,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(weight_grams: Option<f64>) -> ProductInput {
        ProductInput {
            product_name: "Canvas Tote".to_string(),
            materials: vec!["Cotton".to_string(), "Polyester thread".to_string()],
            transport: "sea freight".to_string(),
            packaging: "paper sleeve".to_string(),
            gwp: 4.5,
            cost: 18.0,
            circularity: 65.0,
            weight_grams,
        }
    }

    #[test]
    fn embeds_every_product_attribute() {
        let prompt = build_prompt(&product(Some(320.0)), 78.25, Rating::B);
        assert!(prompt.contains("Product: Canvas Tote"));
        assert!(prompt.contains("Materials: Cotton, Polyester thread"));
        assert!(prompt.contains("Weight: 320 grams"));
        assert!(prompt.contains("Transport: sea freight"));
        assert!(prompt.contains("Packaging: paper sleeve"));
        assert!(prompt.contains("GWP: 4.5 kg CO2e"));
        assert!(prompt.contains("Cost: $18"));
        assert!(prompt.contains("Circularity Score: 65/100"));
        assert!(prompt.contains("Current Sustainability Score: 78.25/100 (Rating: B)"));
        assert!(prompt.contains("bulleted list of 3-5"));
    }

    #[test]
    fn uses_placeholder_when_weight_missing() {
        let prompt = build_prompt(&product(None), 40.0, Rating::D);
        assert!(prompt.contains("Weight: N/A grams"));
    }
}

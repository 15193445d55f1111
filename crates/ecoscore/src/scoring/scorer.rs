use super::{ScoringError, WeightTriple};

pub const MAX_GWP: f64 = 100.0;
pub const MAX_CIRCULARITY: f64 = 100.0;
pub const MAX_COST: f64 = 1000.0;

/// Raw product measurements fed to the scorer.
///
/// Values outside their expected ranges are clamped rather than rejected:
/// gwp and circularity into `[0, 100]`, cost into `[0, 1000]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreInputs {
    pub gwp: f64,
    pub circularity: f64,
    pub cost: f64,
}

/// Computes the 0-100 sustainability score, rounded to two decimals.
///
/// Emissions and cost are inverted so that lower values score higher;
/// circularity contributes directly.
pub fn sustainability_score(
    inputs: ScoreInputs,
    weights: &WeightTriple,
) -> Result<f64, ScoringError> {
    weights.validate()?;

    let gwp_score = 100.0 - inputs.gwp.clamp(0.0, MAX_GWP);
    let circularity_score = inputs.circularity.clamp(0.0, MAX_CIRCULARITY);
    let cost_score = 100.0 - inputs.cost.clamp(0.0, MAX_COST) / MAX_COST * 100.0;

    let weighted = gwp_score * weights.gwp
        + circularity_score * weights.circularity
        + cost_score * weights.cost;

    // Weights may sum to as much as 1.01.
    Ok(round_to_cents(weighted.clamp(0.0, 100.0)))
}

pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(gwp: f64, circularity: f64, cost: f64) -> ScoreInputs {
        ScoreInputs {
            gwp,
            circularity,
            cost,
        }
    }

    #[test]
    fn best_case_scores_one_hundred() {
        let score = sustainability_score(inputs(0.0, 100.0, 0.0), &WeightTriple::default())
            .expect("valid weights");
        assert_eq!(score, 100.0);
    }

    #[test]
    fn worst_case_scores_zero() {
        let score = sustainability_score(inputs(100.0, 0.0, 1000.0), &WeightTriple::default())
            .expect("valid weights");
        assert_eq!(score, 0.0);
    }

    #[test]
    fn mixed_inputs_follow_weighted_sum() {
        // (100 - 20) * 0.4 + 60 * 0.35 + (100 - 25) * 0.25 = 32 + 21 + 18.75
        let score = sustainability_score(inputs(20.0, 60.0, 250.0), &WeightTriple::default())
            .expect("valid weights");
        assert_eq!(score, 71.75);
    }

    #[test]
    fn out_of_range_inputs_are_clamped() {
        let clamped = sustainability_score(inputs(-50.0, 180.0, -10.0), &WeightTriple::default())
            .expect("valid weights");
        assert_eq!(clamped, 100.0);

        let clamped = sustainability_score(inputs(450.0, -3.0, 9000.0), &WeightTriple::default())
            .expect("valid weights");
        assert_eq!(clamped, 0.0);
    }

    #[test]
    fn custom_weights_shift_the_result() {
        let weights = WeightTriple::new(0.0, 1.0, 0.0);
        let score = sustainability_score(inputs(90.0, 42.5, 900.0), &weights)
            .expect("valid weights");
        assert_eq!(score, 42.5);
    }

    #[test]
    fn invalid_weights_fail_before_scoring() {
        let weights = WeightTriple::new(0.25, 0.15, 0.1);
        let err = sustainability_score(inputs(10.0, 10.0, 10.0), &weights)
            .expect_err("weights sum to 0.5");
        assert_eq!(err.to_string(), "Weights must sum to 1.0");
    }

    #[test]
    fn scores_stay_within_bounds_across_the_input_grid() {
        let weight_sets = [
            WeightTriple::default(),
            WeightTriple::new(0.334, 0.333, 0.333),
            WeightTriple::new(0.5, 0.5, 0.005),
            WeightTriple::new(1.0, 0.0, 0.0),
        ];
        for weights in weight_sets {
            for gwp in [0.0, 12.5, 50.0, 99.9, 100.0] {
                for circularity in [0.0, 33.3, 100.0] {
                    for cost in [0.0, 1.0, 500.0, 1000.0] {
                        let score = sustainability_score(inputs(gwp, circularity, cost), &weights)
                            .expect("valid weights");
                        assert!((0.0..=100.0).contains(&score), "score {score} out of range");
                    }
                }
            }
        }

        let unusable = [
            WeightTriple::new(1e308, -1e308, 1.0),
            WeightTriple::new(1.5, -0.5, 0.0),
            WeightTriple::new(0.0, 0.0, -1.0),
            WeightTriple::new(f64::MAX, 0.0, 0.0),
        ];
        for weights in unusable {
            for gwp in [0.0, 50.0, 100.0] {
                let result = sustainability_score(inputs(gwp, 50.0, 500.0), &weights);
                assert!(
                    matches!(result, Err(ScoringError::WeightOutOfRange { .. })),
                    "{weights:?} produced {result:?}"
                );
            }
        }
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round_to_cents(12.3456), 12.35);
        assert_eq!(round_to_cents(12.344), 12.34);
    }
}

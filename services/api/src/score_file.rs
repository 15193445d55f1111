use crate::infra::build_service;
use clap::Args;
use ecoscore::config::AppConfig;
use ecoscore::error::AppError;
use ecoscore::scoring::WeightTriple;
use ecoscore::submissions::ScoreRequest;
use ecoscore::suggestions::SuggestionBackend;
use ecoscore::ScoringServiceError;
use serde_json::Value;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreFileArgs {
    /// JSON document with the same fields accepted by `POST /score`
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Emissions weight (requires the other two weights)
    #[arg(long, requires_all = ["weight_circularity", "weight_cost"])]
    pub(crate) weight_gwp: Option<f64>,
    /// Circularity weight (requires the other two weights)
    #[arg(long, requires_all = ["weight_gwp", "weight_cost"])]
    pub(crate) weight_circularity: Option<f64>,
    /// Cost weight (requires the other two weights)
    #[arg(long, requires_all = ["weight_gwp", "weight_circularity"])]
    pub(crate) weight_cost: Option<f64>,
    /// Skip the external suggestion service and use the fallback suggestions
    #[arg(long)]
    pub(crate) offline: bool,
}

impl ScoreFileArgs {
    fn weights(&self) -> Option<WeightTriple> {
        match (self.weight_gwp, self.weight_circularity, self.weight_cost) {
            (Some(gwp), Some(circularity), Some(cost)) => {
                Some(WeightTriple::new(gwp, circularity, cost))
            }
            _ => None,
        }
    }
}

pub(crate) async fn run_score_file(args: ScoreFileArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;

    let raw = std::fs::read_to_string(&args.input)?;
    let body: Value = serde_json::from_str(&raw)?;
    let mut request = ScoreRequest::from_json(body).map_err(ScoringServiceError::from)?;
    if let Some(weights) = args.weights() {
        request.weights = Some(weights);
    }

    let backend = if args.offline {
        SuggestionBackend::Disabled
    } else {
        SuggestionBackend::from_config(&config.suggestions)?
    };

    let service = build_service(&config, backend);
    let result = service.score(request).await?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

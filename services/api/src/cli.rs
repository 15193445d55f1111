use crate::score_file::{run_score_file, ScoreFileArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use ecoscore::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Product Sustainability Scorer",
    about = "Score consumer products on emissions, circularity, and cost",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a single product described in a JSON file
    Score(ScoreFileArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score_file(args).await,
    }
}

mod cli;
mod infra;
mod routes;
mod score_file;
mod server;

use ecoscore::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}

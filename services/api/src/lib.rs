mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use finquiz::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}

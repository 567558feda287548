use std::sync::Arc;

use classicbot::{bot, config::Config, error::AppError, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Arc::new(Config::from_env()?);

    let db = startup::connect_to_database(&config).await?;

    let client = bot::start::init_bot(config, db).await?;

    bot::start::start_bot(client).await
}

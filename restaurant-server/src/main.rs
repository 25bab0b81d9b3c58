use anyhow::Context;
use restaurant_server::{Config, Server, init_logger_with_file};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(&config.log_level, config.log_dir.as_deref());

    tracing::info!(
        port = config.http_port,
        store = %config.store_url,
        environment = %config.environment,
        "Starting restaurant server"
    );

    Server::new(config)
        .run()
        .await
        .context("restaurant server terminated")?;

    Ok(())
}

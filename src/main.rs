use color_eyre::eyre::Result;
use dotenv::dotenv;
use meetingroom_api::config::ApiConfig;
use meetingroom_db::create_pool;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Create database connection pool; the schema is owned by the database
    let db_pool = create_pool(&config.database_url, config.db_max_connections).await?;

    // Start API server
    meetingroom_api::start_server(config, db_pool).await?;

    Ok(())
}

use scorebook::server::{config::Config, logging, model::app::AppState, router, startup};
use tracing::info;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), scorebook::server::error::Error> {
    logging::init(&config)?;

    let db = startup::connect_to_database(&config).await?;
    let settings = config.ingest_settings();

    let app = router::routes(settings.max_upload_bytes).with_state(AppState::new(db, settings));

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}

use axum::serve;
use qualityboard_nav::api::handlers::AppState;
use qualityboard_nav::api::routes::create_router;
use qualityboard_nav::config::AppConfig;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    use env_logger::Builder;
    use log::LevelFilter;

    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter_module("hyper", LevelFilter::Warn) // Suppress hyper Debug logs
        .init();

    println!("Qualityboard Navigation Service");

    // Load configuration
    let config = AppConfig::load()?;
    println!(
        "Configuration loaded: server={}:{}",
        config.server.host, config.server.port
    );

    let base_url = config.base_url()?;
    if base_url.is_empty() {
        println!("Building same-origin relative links");
    } else {
        println!("Building absolute links under {}", base_url);
    }

    let state = Arc::new(AppState { base_url });

    run_server(create_router().with_state(state), &config).await?;

    Ok(())
}

async fn run_server(app: axum::Router, config: &AppConfig) -> anyhow::Result<()> {
    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    println!("Navigation service running on http://{}", bind_address);

    serve(listener, app).await?;

    Ok(())
}

use gamestats::{
    config::Config,
    model::{app::AppState, token::TokenRegistry},
    router, startup,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let gateway = match startup::build_gateway_client(&config) {
        Ok(gateway) => gateway,
        Err(e) => {
            eprintln!("Gateway client error: {}", e);
            std::process::exit(1);
        }
    };

    let state = AppState {
        storage: Default::default(),
        tokens: TokenRegistry::default(),
        gateway,
    };

    let router = router::routes()
        .with_state(state)
        .layer(startup::session_layer());

    let address = format!("{}:{}", config.host, config.port);
    let listener = match tokio::net::TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind {}: {}", address, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting server on {}", address);

    if let Err(e) = axum::serve(listener, router).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}

use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, MemoryStore, SessionManagerLayer};

use crate::{config::Config, error::Error, gateway::GatewayClient};

/// Build and configure the game gateway client from the provided config
pub fn build_gateway_client(config: &Config) -> Result<GatewayClient, Error> {
    GatewayClient::new(&config.gateway_url, &config.gateway_client_id)
}

/// Configure cookie sessions over the in-process memory store
pub fn session_layer() -> SessionManagerLayer<MemoryStore> {
    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    SessionManagerLayer::new(MemoryStore::default())
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
}

use crate::{data::Storage, gateway::GatewayClient, model::token::TokenRegistry};

#[derive(Clone)]
pub struct AppState {
    pub storage: Storage,
    pub tokens: TokenRegistry,
    pub gateway: GatewayClient,
}

use super::{
    auth_config::AuthConfig, cart_config::CartConfig, cors_config, server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub auth: AuthConfig,
    pub cart: CartConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            cors: cors_config::init_cors(),
            auth: AuthConfig::from_env()?,
            cart: CartConfig::from_env()?,
        })
    }
}

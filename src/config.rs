//! Runtime configuration from environment variables.

/// Server settings. From env `SERVER_ADDR`, default `0.0.0.0:3000`.
pub struct ServerConfig {
    pub bind_addr: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        ServerConfig {
            bind_addr: std::env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into()),
        }
    }
}

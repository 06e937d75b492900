use super::{cors_config, server_config::ServerConfig};
use poem::middleware::Cors;

/// Configuration assembled once at startup: the HTTP listener settings and
/// the CORS policy applied to the whole route tree. The database URL is
/// read separately by `database_config`, since the pool outlives this
/// struct.
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
        }
    }
}

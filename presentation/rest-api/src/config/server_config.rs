use std::env;

/// HTTP listener settings for the catalog service
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: String,
}

impl ServerConfig {
    /// Read the listener settings from the environment.
    ///
    /// Environment variables:
    /// - SERVICE_IP: address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: port to bind (default: "3001")
    pub fn from_env() -> Self {
        let ip = env::var("SERVICE_IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("SERVICE_PORT").unwrap_or_else(|_| "3001".to_string());

        Self { ip, port }
    }

    /// Address in "ip:port" form, as the TCP listener expects it
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_join_ip_and_port_into_bind_address() {
        // Arrange
        let config = ServerConfig {
            ip: "0.0.0.0".to_string(),
            port: "3001".to_string(),
        };

        // Act
        let address = config.bind_address();

        // Assert
        assert_eq!(address, "0.0.0.0:3001");
    }
}

//! Web server configuration

use crate::env::{web, ConfigError, ConfigResult, EnvVar};

/// Web server settings
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Bind address
    pub bind_addr: String,
    /// Port
    pub port: u16,
    /// Static frontend directory, served at `/`
    pub static_dir: Option<String>,
}

impl WebConfig {
    /// Reads the configuration from the environment
    pub fn from_env() -> ConfigResult<Self> {
        let static_dir = web::StaticDir::get()?;

        Ok(Self {
            bind_addr: web::BindAddress::get()?,
            port: web::Port::get()?,
            static_dir: if static_dir.is_empty() {
                None
            } else {
                Some(static_dir)
            },
        })
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.bind_addr.is_empty() {
            return Err(ConfigError::new(
                web::BindAddress::NAME,
                "Bind address cannot be empty",
            ));
        }

        if self.port == 0 {
            return Err(ConfigError::new(web::Port::NAME, "Port cannot be 0"));
        }

        if let Some(ref static_dir) = self.static_dir {
            if !std::path::Path::new(static_dir).exists() {
                tracing::warn!("Static directory '{}' does not exist", static_dir);
            }
        }

        Ok(())
    }

    /// Full listen address
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".to_string(),
            port: 8080,
            static_dir: Some("frontend/dist".to_string()),
        }
    }
}

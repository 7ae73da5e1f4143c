use std::io::ErrorKind;
use std::net::{IpAddr, SocketAddr};

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "server_config.yaml";
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
    /// Seeds every request's randomness when set, so easy and medium moves repeat.
    pub rng_seed: Option<u64>,
    pub verbose_logging: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            rng_seed: None,
            verbose_logging: false,
        }
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        self.bind_address
            .parse::<IpAddr>()
            .map_err(|e| format!("Invalid bind address '{}': {}", self.bind_address, e))?;
        if self.port == 0 {
            return Err("Port must be between 1 and 65535".to_string());
        }
        Ok(())
    }
}

impl ServerConfig {
    pub fn from_yaml(content: &str) -> Result<Self, String> {
        let config: ServerConfig = serde_yaml_ng::from_str(content)
            .map_err(|e| format!("Failed to deserialize config: {}", e))?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;
        Ok(config)
    }

    /// Defaults when the file does not exist; any other read or parse failure is an error.
    pub fn load(file_path: &str) -> Result<Self, String> {
        match std::fs::read_to_string(file_path) {
            Ok(content) => Self::from_yaml(&content),
            Err(err) => match err.kind() {
                ErrorKind::NotFound => Ok(Self::default()),
                _ => Err(format!("Failed to read config file: {}", err)),
            },
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        let ip = self
            .bind_address
            .parse::<IpAddr>()
            .map_err(|e| format!("Invalid bind address '{}': {}", self.bind_address, e))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

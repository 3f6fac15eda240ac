use std::sync::Arc;

use config_endpoint::ConfigStore;

/// Main ConfigService server state
#[derive(Clone)]
pub struct ConfigServer {
    /// Server configuration
    pub config: ServerConfig,
    /// Store backing the pricing-engine document
    pub store: Arc<ConfigStore>,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server name
    pub name: String,
    /// Serve the document read-only (GET only, writes rejected with 405)
    pub read_only: bool,
}

impl ConfigServer {
    /// Create a new ConfigService server instance
    pub fn new(config: ServerConfig, store: ConfigStore) -> Self {
        Self {
            config,
            store: Arc::new(store),
        }
    }

    /// Get server configuration
    pub fn get_config(&self) -> &ServerConfig {
        &self.config
    }

    /// Check if the document is served read-only
    pub fn is_read_only(&self) -> bool {
        self.config.read_only
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "ConfigService".to_string(),
            read_only: false,
        }
    }
}

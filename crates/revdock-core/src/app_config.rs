use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Shop domain the Admin API client targets, e.g. `my-shop.myshopify.com`.
    pub shop_domain: String,
    pub admin_token: String,
    pub admin_api_version: String,
    pub admin_request_timeout_secs: u64,
    /// Handle groups committed concurrently during an import; 1 keeps the
    /// original strictly sequential behavior.
    pub upload_max_concurrent: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("shop_domain", &self.shop_domain)
            .field("admin_token", &"[redacted]")
            .field("admin_api_version", &self.admin_api_version)
            .field(
                "admin_request_timeout_secs",
                &self.admin_request_timeout_secs,
            )
            .field("upload_max_concurrent", &self.upload_max_concurrent)
            .finish()
    }
}

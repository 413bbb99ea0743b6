/// Process-level settings read from the environment
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | SOCK_LOG_LEVEL | info | log level for this workspace's crates |
/// | SOCK_LOG_DIR | unset | directory for daily rolling log files |
///
/// Feed and webhook URLs live in [`sock_client::ClientConfig`].
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub log_level: Option<String>,
    pub log_dir: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("SOCK_LOG_LEVEL").ok(),
            log_dir: std::env::var("SOCK_LOG_DIR").ok(),
        }
    }
}

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid server address {}:{}: {}", self.host, self.port, e))?;
        Ok(addr)
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// JSON-файл с турами; если не задан, используется встроенный каталог
    pub seed_file: Option<String>,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[catalog]
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Some(exe_dir) = exe_dir() {
        let config_path = exe_dir.join("config.toml");

        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            return parse_config(&contents);
        } else {
            tracing::warn!("config.toml not found at: {}", config_path.display());
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Get the catalog seed file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_seed_path(config: &Config) -> Option<PathBuf> {
    let seed = config.catalog.seed_file.as_deref()?.trim();
    if seed.is_empty() {
        return None;
    }
    let path = Path::new(seed);

    if path.is_absolute() {
        return Some(path.to_path_buf());
    }

    match exe_dir() {
        Some(dir) => Some(dir.join(path)),
        None => Some(PathBuf::from(seed)),
    }
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.catalog.seed_file.is_none());
        assert!(get_seed_path(&config).is_none());
        assert_eq!(
            config.server.socket_addr().unwrap(),
            SocketAddr::from(([0, 0, 0, 0], 3000))
        );
    }

    #[test]
    fn test_catalog_section_is_optional() {
        let config = parse_config("[server]\nhost = \"127.0.0.1\"\nport = 8080\n").unwrap();
        assert!(config.catalog.seed_file.is_none());
        assert_eq!(config.server.socket_addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_absolute_seed_path_is_kept() {
        let config = parse_config(
            "[server]\nhost = \"0.0.0.0\"\nport = 3000\n[catalog]\nseed_file = \"/srv/tours.json\"\n",
        )
        .unwrap();
        assert_eq!(get_seed_path(&config), Some(PathBuf::from("/srv/tours.json")));
    }

    #[test]
    fn test_bad_host_is_an_error() {
        let config = parse_config("[server]\nhost = \"not a host\"\nport = 1\n").unwrap();
        assert!(config.server.socket_addr().is_err());
    }
}

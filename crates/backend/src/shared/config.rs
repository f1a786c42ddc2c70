use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory with the built frontend bundle (index.html, wasm, css)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "dist".to_string()
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"
"#;

impl Config {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip: IpAddr = self
            .server
            .host
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid server.host '{}': {}", self.server.host, e))?;
        Ok(SocketAddr::new(ip, self.server.port))
    }

    /// Resolves `static_dir`: absolute paths as is, relative ones against
    /// the working directory first, then next to the executable.
    pub fn static_dir_path(&self) -> PathBuf {
        let dir = Path::new(&self.server.static_dir);
        if dir.is_absolute() || dir.exists() {
            return dir.to_path_buf();
        }

        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                return exe_dir.join(dir);
            }
        }

        dir.to_path_buf()
    }
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(contents)?)
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (copied there by build.rs)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(config.socket_addr().unwrap(), SocketAddr::from(([0, 0, 0, 0], 3000)));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = parse_config("[server]\nport = 8081\n").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.server.static_dir, "dist");
    }

    #[test]
    fn test_invalid_host_is_rejected() {
        let config = parse_config("[server]\nhost = \"localhost:3000\"\n").unwrap();
        let err = config.socket_addr().unwrap_err();
        assert!(err.to_string().contains("invalid server.host"));
    }

    #[test]
    fn test_absolute_static_dir_is_kept() {
        let config = parse_config("[server]\nstatic_dir = \"/srv/pawcare/dist\"\n").unwrap();
        assert_eq!(config.static_dir_path(), PathBuf::from("/srv/pawcare/dist"));
    }

    #[test]
    fn test_malformed_toml_fails() {
        assert!(parse_config("[server\nport = ").is_err());
    }
}

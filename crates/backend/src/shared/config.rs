use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub remote_api: RemoteApiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Каталог со сборкой frontend (trunk dist)
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RemoteApiConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl RemoteApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_timeout_secs() -> u64 {
    10
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
static_dir = "dist"

[remote_api]
base_url = "https://hallowed-jagged-collision.glitch.me"
timeout_secs = 10
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

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    // Без завершающего слэша пути склеиваются проще
    let base_url = config.remote_api.base_url.trim_end_matches('/').to_string();
    if base_url.is_empty() {
        anyhow::bail!("remote_api.base_url must not be empty");
    }
    Ok(Config {
        remote_api: RemoteApiConfig {
            base_url,
            ..config.remote_api
        },
        ..config
    })
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
}

/// Путь к статике frontend.
/// Относительный путь ищется рядом с исполняемым файлом, затем в текущем каталоге.
pub fn get_static_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.server.static_dir);

    if dir.is_absolute() {
        return dir.to_path_buf();
    }

    if let Some(exe_dir) = exe_dir() {
        let resolved = exe_dir.join(dir);
        if resolved.exists() {
            return resolved;
        }
    }

    dir.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(
            config.remote_api.base_url,
            "https://hallowed-jagged-collision.glitch.me"
        );
        assert_eq!(config.remote_api.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_trailing_slash_and_default_timeout() {
        let config = parse_config(
            r#"
            [server]
            port = 8080
            static_dir = "/srv/dist"

            [remote_api]
            base_url = "http://localhost:5001/"
            "#,
        )
        .unwrap();
        assert_eq!(config.remote_api.base_url, "http://localhost:5001");
        assert_eq!(config.remote_api.timeout_secs, 10);
        assert_eq!(get_static_dir(&config), PathBuf::from("/srv/dist"));
    }

    #[test]
    fn test_empty_base_url_is_rejected() {
        let result = parse_config(
            r#"
            [server]
            port = 8080
            static_dir = "dist"

            [remote_api]
            base_url = "/"
            "#,
        );
        assert!(result.is_err());
    }
}

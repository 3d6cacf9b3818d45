use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// Built-in settings used when no config.toml is present.
const DEFAULT_CONFIG: &str = r#"
[database]
path = "target/db/logsentinel.db"

[server]
port = 8000
"#;

fn config_file_location() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    Some(exe.parent()?.join("config.toml"))
}

/// Reads config.toml from the executable's directory, falling back to
/// the embedded defaults when the file is missing.
pub fn load_config() -> anyhow::Result<Config> {
    if let Some(path) = config_file_location() {
        if path.exists() {
            tracing::info!("Loading config from: {}", path.display());
            let raw = std::fs::read_to_string(&path)?;
            return Ok(toml::from_str(&raw)?);
        }
        tracing::warn!("config.toml not found at: {}", path.display());
    }

    tracing::info!("Using embedded default configuration");
    Ok(toml::from_str(DEFAULT_CONFIG)?)
}

/// Database file location. Relative paths are anchored at the
/// executable's directory so the binary can run from anywhere.
pub fn get_database_path(config: &Config) -> anyhow::Result<PathBuf> {
    let configured = Path::new(&config.database.path);
    if configured.is_absolute() {
        return Ok(configured.to_path_buf());
    }

    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            return Ok(dir.join(configured));
        }
    }

    Ok(configured.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.database.path, "target/db/logsentinel.db");
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_absolute_database_path_is_kept() {
        let config = Config {
            database: DatabaseConfig {
                path: if cfg!(windows) {
                    r"C:\data\logs.db".to_string()
                } else {
                    "/data/logs.db".to_string()
                },
            },
            server: ServerConfig { port: 8000 },
        };
        let resolved = get_database_path(&config).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("logs.db"));
    }
}

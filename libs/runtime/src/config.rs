use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Main application configuration with strongly-typed sections.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// HTTP server configuration.
    pub server: ServerConfig,
    /// Database configuration (optional; some commands run without it).
    pub database: Option<DatabaseConfig>,
    /// Session token configuration.
    pub auth: AuthConfig,
    /// Registration-forms integration (optional; disabled when absent).
    #[serde(default)]
    pub forms: Option<FormsConfig>,
    /// Logging configuration (defaults when None).
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Public base URL used to build shareable event links.
    pub public_base_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Connection URL, e.g. "sqlite://branch.db?mode=rwc" or "sqlite::memory:".
    pub url: String,
    /// Maximum number of pooled connections (optional).
    pub max_conns: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    /// HMAC secret for session tokens.
    pub token_secret: String,
    /// Token lifetime, e.g. "12h".
    #[serde(with = "humantime_serde", default = "default_token_ttl")]
    pub token_ttl: Duration,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FormsConfig {
    /// Base URL of the registration-forms API.
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Console level: "trace" | "debug" | "info" | "warn" | "error" | "off".
    pub console_level: String,
    /// Log file path (optional; console-only when absent).
    #[serde(default)]
    pub file: Option<String>,
    /// Level for the file output.
    #[serde(default = "default_file_level")]
    pub file_level: String,
    /// How many rotated files to keep.
    #[serde(default)]
    pub max_backups: Option<usize>,
    /// Max size of a log file in MB before rotation.
    #[serde(default)]
    pub max_size_mb: Option<u64>,
}

fn default_token_ttl() -> Duration {
    Duration::from_secs(12 * 60 * 60)
}

fn default_file_level() -> String {
    "debug".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8090,
            public_base_url: "http://127.0.0.1:8090".to_string(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: "change-me".to_string(),
            token_ttl: default_token_ttl(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            console_level: "info".to_string(),
            file: None,
            file_level: default_file_level(),
            max_backups: Some(3),
            max_size_mb: Some(50),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: Some(DatabaseConfig {
                url: "sqlite://branch.db?mode=rwc".to_string(),
                max_conns: Some(10),
            }),
            auth: AuthConfig::default(),
            forms: None,
            logging: Some(LoggingConfig::default()),
        }
    }
}

impl AppConfig {
    /// Layered loading: struct defaults → YAML file → environment variables.
    /// Example: `BRANCH__SERVER__PORT=9000` maps to `server.port`.
    pub fn load_layered<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        use figment::{
            providers::{Env, Format, Serialized, Yaml},
            Figment,
        };

        let path = config_path.as_ref();
        if !path.exists() {
            anyhow::bail!("config file not found: {}", path.display());
        }

        // Start from a base where optional sections are None so they stay
        // None unless YAML/ENV provides them.
        let base = AppConfig {
            server: ServerConfig::default(),
            database: None,
            auth: AuthConfig::default(),
            forms: None,
            logging: None,
        };

        let figment = Figment::new()
            .merge(Serialized::defaults(base))
            .merge(Yaml::file(path))
            .merge(Env::prefixed("BRANCH__").split("__"));

        figment
            .extract()
            .context("Failed to extract config from figment")
    }

    /// Load from file when a path is given, defaults otherwise.
    pub fn load_or_default<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_layered(path),
            None => Ok(Self::default()),
        }
    }

    /// Serialize configuration to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize config to YAML")
    }

    /// Apply overrides from command line arguments.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(port) = args.port {
            self.server.port = port;
        }

        let logging = self.logging.get_or_insert_with(LoggingConfig::default);
        logging.console_level = match args.verbose {
            0 => logging.console_level.clone(),
            1 => "debug".to_string(),
            _ => "trace".to_string(),
        };
    }
}

/// Command line arguments passed down from the binary.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub config: Option<String>,
    pub port: Option<u16>,
    pub print_config: bool,
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn defaults_have_database_and_logging() {
        let c = AppConfig::default();
        assert!(c.database.is_some());
        assert!(c.logging.is_some());
        assert_eq!(c.server.port, 8090);
    }

    #[test]
    fn yaml_file_overrides_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(
            &path,
            r#"
server:
  host: 0.0.0.0
  port: 9100
  public_base_url: https://branch.example.org
auth:
  token_secret: s3cret
  token_ttl: 2h
database:
  url: "sqlite::memory:"
"#,
        )
        .unwrap();

        let c = AppConfig::load_layered(&path).unwrap();
        assert_eq!(c.server.host, "0.0.0.0");
        assert_eq!(c.server.port, 9100);
        assert_eq!(c.auth.token_secret, "s3cret");
        assert_eq!(c.auth.token_ttl, Duration::from_secs(7200));
        assert_eq!(c.database.unwrap().url, "sqlite::memory:");
        // not provided => stays None
        assert!(c.forms.is_none());
    }

    #[test]
    fn cli_overrides_port_and_verbosity() {
        let mut c = AppConfig::default();
        c.apply_cli_overrides(&CliArgs {
            port: Some(7777),
            verbose: 2,
            ..Default::default()
        });
        assert_eq!(c.server.port, 7777);
        assert_eq!(c.logging.unwrap().console_level, "trace");
    }
}

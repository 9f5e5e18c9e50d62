use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret and database credentials have defaults
/// suitable for local development. In production, override via environment
/// variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Emit JSON log lines instead of human-readable output.
    pub json_logs: bool,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `LOG_FORMAT`           | `pretty` (`json` enables JSON logs) |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let json_logs = std::env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            json_logs,
            jwt,
        }
    }
}

/// Error raised while assembling [`DatabaseConfig`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Database credentials are missing: {0} is not set")]
    MissingVar(&'static str),

    #[error("{name} has an invalid value: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Database connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Full `postgres://` connection URL.
    pub url: String,
    /// Pool size (default: `20`).
    pub max_connections: u32,
    /// Create the database on startup when it does not exist (default: `false`).
    pub auto_create: bool,
}

impl DatabaseConfig {
    /// Load database settings from the process environment.
    ///
    /// | Env Var              | Default                      |
    /// |----------------------|------------------------------|
    /// | `DATABASE_URL`       | built from the `DB_*` parts  |
    /// | `DB_USER` .. `DB_NAME` | required without `DATABASE_URL` |
    /// | `DB_MAX_CONNECTIONS` | `20`                         |
    /// | `DB_AUTO_CREATE`     | `false`                      |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let part = |name: &'static str| get(name).ok_or(ConfigError::MissingVar(name));

        let url = match get("DATABASE_URL") {
            Some(url) => url,
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                part("DB_USER")?,
                part("DB_PASS")?,
                part("DB_HOST")?,
                part("DB_PORT")?,
                part("DB_NAME")?,
            ),
        };

        let max_connections: u32 = match get("DB_MAX_CONNECTIONS") {
            Some(v) => v.parse().map_err(|_| ConfigError::InvalidValue {
                name: "DB_MAX_CONNECTIONS",
                value: v,
            })?,
            None => 20,
        };

        let auto_create = match get("DB_AUTO_CREATE") {
            Some(v) => parse_bool(&v).ok_or_else(|| ConfigError::InvalidValue {
                name: "DB_AUTO_CREATE",
                value: v.clone(),
            })?,
            None => false,
        };

        Ok(Self {
            url,
            max_connections,
            auto_create,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

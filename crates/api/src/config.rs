use std::str::FromStr;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be set")]
    Missing { var: &'static str },

    #[error("{var} has invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Deployment environment. Controls log format and the default bind host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl FromStr for AppEnv {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" | "dev" => Ok(AppEnv::Development),
            "production" | "prod" => Ok(AppEnv::Production),
            other => Err(format!("expected 'development' or 'production', got '{other}'")),
        }
    }
}

/// Which [`kennel_core::store::DogStore`] backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "postgres" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(format!("expected 'postgres' or 'memory', got '{other}'")),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields except `DATABASE_URL` have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub env: AppEnv,
    /// Bind address (default: `127.0.0.1`, or `0.0.0.0` in production).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Project id attached to every service log line.
    pub project_id: String,
    pub store_backend: StoreBackend,
    /// Required when `store_backend` is [`StoreBackend::Postgres`].
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on connection draining after a shutdown signal (default: `9`).
    pub shutdown_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                    |
    /// |----------------------------|----------------------------|
    /// | `APP_ENV`                  | `development`              |
    /// | `HOST`                     | `127.0.0.1` / `0.0.0.0`    |
    /// | `PORT`                     | `8080`                     |
    /// | `PROJECT_ID`               | `kennel-local`             |
    /// | `STORE_BACKEND`            | `postgres`                 |
    /// | `DATABASE_URL`             | required for `postgres`    |
    /// | `DATABASE_MAX_CONNECTIONS` | `20`                       |
    /// | `CORS_ORIGINS`             | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`    | `9`                        |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] but reading from an arbitrary
    /// source, so tests need not touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env: AppEnv = parse_or(&lookup, "APP_ENV", AppEnv::Development)?;

        let default_host = match env {
            AppEnv::Development => "127.0.0.1",
            AppEnv::Production => "0.0.0.0",
        };
        let host = lookup("HOST").unwrap_or_else(|| default_host.into());

        let port = parse_or(&lookup, "PORT", 8080u16)?;
        let project_id = lookup("PROJECT_ID").unwrap_or_else(|| "kennel-local".into());

        let store_backend = parse_or(&lookup, "STORE_BACKEND", StoreBackend::Postgres)?;
        let database_url = lookup("DATABASE_URL").filter(|url| !url.is_empty());
        if store_backend == StoreBackend::Postgres && database_url.is_none() {
            return Err(ConfigError::Missing {
                var: "DATABASE_URL",
            });
        }
        let database_max_connections = parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 20u32)?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30u64)?;
        let shutdown_timeout_secs = parse_or(&lookup, "SHUTDOWN_TIMEOUT_SECS", 9u64)?;

        Ok(Self {
            env,
            host,
            port,
            project_id,
            store_backend,
            database_url,
            database_max_connections,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
        })
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => {
            let parsed = value.trim().parse::<T>();
            parsed.map_err(|e| ConfigError::Invalid {
                var,
                reason: e.to_string(),
                value,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_for_memory_backend() {
        let config = load(&[("STORE_BACKEND", "memory")]).unwrap();
        assert_eq!(config.env, AppEnv::Development);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.project_id, "kennel-local");
        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert_eq!(config.database_url, None);
        assert_eq!(config.cors_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.shutdown_timeout_secs, 9);
    }

    #[test]
    fn production_binds_all_interfaces() {
        let config = load(&[("APP_ENV", "production"), ("STORE_BACKEND", "memory")]).unwrap();
        assert_eq!(config.env, AppEnv::Production);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn explicit_host_wins_over_env_default() {
        let config = load(&[
            ("APP_ENV", "production"),
            ("HOST", "10.0.0.5"),
            ("STORE_BACKEND", "memory"),
        ])
        .unwrap();
        assert_eq!(config.host, "10.0.0.5");
    }

    #[test]
    fn postgres_requires_database_url() {
        let err = load(&[]).unwrap_err();
        assert_matches!(err, ConfigError::Missing { var: "DATABASE_URL" });

        let config = load(&[("DATABASE_URL", "postgres://localhost/kennel")]).unwrap();
        assert_eq!(config.store_backend, StoreBackend::Postgres);
        assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/kennel"));
    }

    #[test]
    fn invalid_port_is_reported() {
        let err = load(&[("STORE_BACKEND", "memory"), ("PORT", "eighty")]).unwrap_err();
        assert_matches!(
            err,
            ConfigError::Invalid { var: "PORT", ref value, .. } if value == "eighty"
        );
    }

    #[test]
    fn unknown_backend_is_reported() {
        let err = load(&[("STORE_BACKEND", "firestore")]).unwrap_err();
        assert_matches!(err, ConfigError::Invalid { var: "STORE_BACKEND", .. });
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let config = load(&[
            ("STORE_BACKEND", "memory"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,,"),
        ])
        .unwrap();
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
    }
}

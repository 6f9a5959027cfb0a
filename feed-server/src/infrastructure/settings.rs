use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub database_max_connections: u32,
    pub jwt_secret: String,
    pub http_addr: String,
    pub cors_origins: Vec<String>,
    pub log_level: String,
    pub http_request_body_limit_bytes: usize,
    pub http_concurrency_limit: usize,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup. There is deliberately no
    /// fallback signing secret: startup fails without `JWT_SECRET`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            get_required(&lookup, "DATABASE_URL").context("DATABASE_URL is required")?;
        let jwt_secret = get_required(&lookup, "JWT_SECRET").context("JWT_SECRET is required")?;

        if jwt_secret.chars().count() < 32 {
            return Err(anyhow!("JWT_SECRET must be at least 32 characters"));
        }

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_env::<u16, _>(&lookup, "PORT", 8090)?;
        let database_max_connections = parse_env::<u32, _>(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?;
        let cors_origins =
            parse_cors_origins(lookup("CORS_ORIGINS").unwrap_or_else(|| "*".to_string()));
        let log_level = lookup("LOG_LEVEL")
            .or_else(|| lookup("RUST_LOG"))
            .unwrap_or_else(|| "info".to_string());
        let http_request_body_limit_bytes =
            parse_env::<usize, _>(&lookup, "HTTP_REQUEST_BODY_LIMIT_BYTES", 1024 * 1024)?;
        let http_concurrency_limit = parse_env::<usize, _>(&lookup, "HTTP_CONCURRENCY_LIMIT", 256)?;

        Ok(Self {
            database_url,
            database_max_connections,
            jwt_secret,
            http_addr: format!("{host}:{port}"),
            cors_origins,
            log_level,
            http_request_body_limit_bytes,
            http_concurrency_limit,
        })
    }
}

fn get_required<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key).ok_or_else(|| anyhow!("{key} is not set"))?;
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(anyhow!("{key} must not be empty"));
    }
    Ok(value)
}

fn parse_cors_origins(raw: String) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_env<T, F>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + PartialEq + Default + ToString,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = lookup(key)
        .unwrap_or_else(|| default.to_string())
        .trim()
        .parse::<T>()
        .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

    if value == T::default() {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::Settings;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn settings_from(pairs: &[(&str, &str)]) -> anyhow::Result<Settings> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_are_applied() {
        let settings = settings_from(&[("DATABASE_URL", "postgres://db"), ("JWT_SECRET", SECRET)])
            .expect("settings must load");

        assert_eq!(settings.http_addr, "0.0.0.0:8090");
        assert_eq!(settings.database_max_connections, 5);
        assert_eq!(settings.cors_origins, vec!["*".to_string()]);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn missing_secret_fails_startup() {
        let err = settings_from(&[("DATABASE_URL", "postgres://db")])
            .expect_err("secret is mandatory");
        assert!(err.to_string().contains("JWT_SECRET"));
    }

    #[test]
    fn short_secret_is_rejected() {
        assert!(settings_from(&[("DATABASE_URL", "postgres://db"), ("JWT_SECRET", "short")]).is_err());
    }

    #[test]
    fn port_and_origins_are_parsed() {
        let settings = settings_from(&[
            ("DATABASE_URL", "postgres://db"),
            ("JWT_SECRET", SECRET),
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("CORS_ORIGINS", "http://a.test, ,http://b.test"),
        ])
        .expect("settings must load");

        assert_eq!(settings.http_addr, "127.0.0.1:9000");
        assert_eq!(settings.cors_origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn numeric_limits_are_parsed() {
        let settings = settings_from(&[
            ("DATABASE_URL", "postgres://db"),
            ("JWT_SECRET", SECRET),
            ("DATABASE_MAX_CONNECTIONS", "12"),
            ("HTTP_REQUEST_BODY_LIMIT_BYTES", " 2048 "),
            ("HTTP_CONCURRENCY_LIMIT", "32"),
        ])
        .expect("settings must load");

        assert_eq!(settings.database_max_connections, 12);
        assert_eq!(settings.http_request_body_limit_bytes, 2048);
        assert_eq!(settings.http_concurrency_limit, 32);
    }

    #[test]
    fn zero_and_garbage_numbers_are_rejected() {
        assert!(settings_from(&[
            ("DATABASE_URL", "postgres://db"),
            ("JWT_SECRET", SECRET),
            ("PORT", "0"),
        ])
        .is_err());
        assert!(settings_from(&[
            ("DATABASE_URL", "postgres://db"),
            ("JWT_SECRET", SECRET),
            ("HTTP_CONCURRENCY_LIMIT", "lots"),
        ])
        .is_err());
    }
}

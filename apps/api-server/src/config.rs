//! Application configuration loaded from environment variables.

use std::env;

use blog_infra::DatabaseConfig;

/// Which database URL the server should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
}

impl Environment {
    /// Read `APP_ENV`; anything other than `test` is development.
    pub fn from_env() -> Self {
        match env::var("APP_ENV") {
            Ok(v) if v.eq_ignore_ascii_case("test") => Environment::Test,
            _ => Environment::Development,
        }
    }

    /// Name of the variable holding this environment's connection string.
    pub fn database_url_var(self) -> &'static str {
        match self {
            Environment::Development => "DATABASE_URL",
            Environment::Test => "TEST_DATABASE_URL",
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    /// `None` runs the server over the in-memory store.
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::for_environment(Environment::from_env())
    }

    /// Load configuration, taking the database URL for `environment`.
    pub fn for_environment(environment: Environment) -> Self {
        let database = env::var(environment.database_url_var())
            .ok()
            .filter(|url| !url.trim().is_empty())
            .map(|url| {
                let mut config = DatabaseConfig::new(url);
                if let Some(max) = parse_var("DB_MAX_CONNECTIONS") {
                    config.max_connections = max;
                }
                if let Some(min) = parse_var("DB_MIN_CONNECTIONS") {
                    config.min_connections = min;
                }
                config
            });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(8080),
            environment,
            database,
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_picks_url_variable() {
        assert_eq!(Environment::Development.database_url_var(), "DATABASE_URL");
        assert_eq!(Environment::Test.database_url_var(), "TEST_DATABASE_URL");
    }
}

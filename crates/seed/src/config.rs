//! Loader configuration from environment variables.

/// Default password given to every seeded account.
pub const DEFAULT_DEMO_PASSWORD: &str = "password123";

/// Default connection pool size.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has invalid value '{value}': expected {expected}")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Settings for one loader run.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Fixed seed for the sampling RNG. `None` seeds from the OS.
    pub rng_seed: Option<u64>,
    /// Apply pending migrations before seeding (default: `true`).
    pub run_migrations: bool,
    /// Plaintext password hashed for every seeded account.
    pub demo_password: String,
    /// Connection pool size (default: `5`).
    pub max_connections: u32,
}

impl SeedConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var               | Default       |
    /// |-----------------------|---------------|
    /// | `DATABASE_URL`        | (required)    |
    /// | `SEED_RNG_SEED`       | unset         |
    /// | `SEED_RUN_MIGRATIONS` | `true`        |
    /// | `SEED_DEMO_PASSWORD`  | `password123` |
    /// | `DB_MAX_CONNECTIONS`  | `5`           |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let rng_seed = match lookup("SEED_RNG_SEED") {
            Some(raw) => Some(raw.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "SEED_RNG_SEED",
                value: raw.clone(),
                expected: "an unsigned 64-bit integer",
            })?),
            None => None,
        };

        let run_migrations = match lookup("SEED_RUN_MIGRATIONS") {
            Some(raw) => parse_bool("SEED_RUN_MIGRATIONS", &raw)?,
            None => true,
        };

        let demo_password =
            lookup("SEED_DEMO_PASSWORD").unwrap_or_else(|| DEFAULT_DEMO_PASSWORD.into());

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse()
                .ok()
                .filter(|n: &u32| *n > 0)
                .ok_or_else(|| ConfigError::Invalid {
                    var: "DB_MAX_CONNECTIONS",
                    value: raw.clone(),
                    expected: "a positive integer",
                })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url,
            rng_seed,
            run_migrations,
            demo_password,
            max_connections,
        })
    }
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            var,
            value: raw.to_string(),
            expected: "a boolean",
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<SeedConfig, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SeedConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_apply() {
        let config = config_from(&[("DATABASE_URL", "postgres://localhost/workbridge")]).unwrap();
        assert_eq!(config.database_url, "postgres://localhost/workbridge");
        assert_eq!(config.rng_seed, None);
        assert!(config.run_migrations);
        assert_eq!(config.demo_password, DEFAULT_DEMO_PASSWORD);
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn database_url_is_required() {
        assert_eq!(
            config_from(&[]).unwrap_err(),
            ConfigError::Missing("DATABASE_URL")
        );
        assert_eq!(
            config_from(&[("DATABASE_URL", "  ")]).unwrap_err(),
            ConfigError::Missing("DATABASE_URL")
        );
    }

    #[test]
    fn overrides_are_parsed() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://db/test"),
            ("SEED_RNG_SEED", "42"),
            ("SEED_RUN_MIGRATIONS", "false"),
            ("SEED_DEMO_PASSWORD", "hunter2"),
            ("DB_MAX_CONNECTIONS", "2"),
        ])
        .unwrap();
        assert_eq!(config.rng_seed, Some(42));
        assert!(!config.run_migrations);
        assert_eq!(config.demo_password, "hunter2");
        assert_eq!(config.max_connections, 2);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = config_from(&[("DATABASE_URL", "x"), ("SEED_RNG_SEED", "abc")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "SEED_RNG_SEED", .. }));

        let err = config_from(&[("DATABASE_URL", "x"), ("DB_MAX_CONNECTIONS", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "DB_MAX_CONNECTIONS", .. }));

        let err =
            config_from(&[("DATABASE_URL", "x"), ("SEED_RUN_MIGRATIONS", "maybe")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "SEED_RUN_MIGRATIONS", .. }));
    }
}

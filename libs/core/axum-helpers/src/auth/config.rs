use core_config::{ConfigError, FromEnv, env_parse, env_required};

const MIN_SECRET_LEN: usize = 32;

/// JWT signing configuration.
///
/// Environment variables:
/// - `JWT_SECRET` (required, at least 32 characters)
/// - `JWT_TTL_SECS` (default: 86400)
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Lifetime of issued tokens in seconds.
    pub ttl_secs: i64,
}

impl JwtConfig {
    pub const DEFAULT_TTL_SECS: i64 = 86_400;

    pub fn new(secret: impl Into<String>, ttl_secs: i64) -> Result<Self, ConfigError> {
        let secret = secret.into();
        check_secret(&secret)?;

        if ttl_secs <= 0 {
            return Err(ConfigError::ParseError {
                key: "JWT_TTL_SECS".to_string(),
                details: format!("must be positive (got {ttl_secs})"),
            });
        }

        Ok(Self { secret, ttl_secs })
    }
}

fn check_secret(secret: &str) -> Result<(), ConfigError> {
    if secret.len() < MIN_SECRET_LEN {
        return Err(ConfigError::ParseError {
            key: "JWT_SECRET".to_string(),
            details: format!(
                "must be at least {MIN_SECRET_LEN} characters (got {}). Generate one with: openssl rand -base64 32",
                secret.len()
            ),
        });
    }
    Ok(())
}

impl FromEnv for JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret = env_required("JWT_SECRET")?;
        let ttl_secs = env_parse("JWT_TTL_SECS", "86400")?;
        Self::new(secret, ttl_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "this-is-a-valid-secret-with-32-chars!";

    #[test]
    fn test_jwt_config_new_valid() {
        let config = JwtConfig::new(SECRET, 60).unwrap();
        assert_eq!(config.secret, SECRET);
        assert_eq!(config.ttl_secs, 60);
    }

    #[test]
    fn test_jwt_config_new_rejects_short_secret() {
        let err = JwtConfig::new("short", 60).unwrap_err();
        assert!(err.to_string().contains("32 characters"));
    }

    #[test]
    fn test_jwt_config_new_rejects_non_positive_ttl() {
        let err = JwtConfig::new(SECRET, 0).unwrap_err();
        assert!(err.to_string().contains("JWT_TTL_SECS"));
    }

    #[test]
    fn test_jwt_config_from_env_defaults_ttl() {
        temp_env::with_vars(
            [("JWT_SECRET", Some(SECRET)), ("JWT_TTL_SECS", None)],
            || {
                let config = JwtConfig::from_env().unwrap();
                assert_eq!(config.ttl_secs, JwtConfig::DEFAULT_TTL_SECS);
            },
        );
    }

    #[test]
    fn test_jwt_config_from_env_custom_ttl() {
        temp_env::with_vars(
            [("JWT_SECRET", Some(SECRET)), ("JWT_TTL_SECS", Some("900"))],
            || {
                assert_eq!(JwtConfig::from_env().unwrap().ttl_secs, 900);
            },
        );
    }

    #[test]
    fn test_jwt_config_from_env_missing() {
        temp_env::with_var_unset("JWT_SECRET", || {
            let err = JwtConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("JWT_SECRET"));
        });
    }
}

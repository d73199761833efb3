use crate::config::types::{CheckerConfig, Config, CrawlerConfig, HttpConfig};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_checker_config(&config.checker)?;
    validate_http_config(&config.http)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.max_depth < 1 {
        return Err(ConfigError::Validation(format!(
            "max-depth must be >= 1, got {}",
            config.max_depth
        )));
    }

    Ok(())
}

/// Validates checker configuration
fn validate_checker_config(config: &CheckerConfig) -> Result<(), ConfigError> {
    if config.workers < 1 || config.workers > 100 {
        return Err(ConfigError::Validation(format!(
            "workers must be between 1 and 100, got {}",
            config.workers
        )));
    }

    Ok(())
}

/// Validates HTTP configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_reject_zero_depth() {
        let mut config = Config::default();
        config.crawler.max_depth = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_reject_zero_workers() {
        let mut config = Config::default();
        config.checker.workers = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_reject_excessive_workers() {
        let mut config = Config::default();
        config.checker.workers = 500;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_accept_worker_bounds() {
        let mut config = Config::default();
        config.checker.workers = 1;
        assert!(validate(&config).is_ok());
        config.checker.workers = 100;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_reject_zero_timeout() {
        let mut config = Config::default();
        config.http.timeout_secs = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_reject_empty_user_agent() {
        let mut config = Config::default();
        config.http.user_agent = String::new();
        assert!(validate(&config).is_err());
    }
}

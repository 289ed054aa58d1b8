use std::env;

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub environment: String,
    pub colors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "warn".to_string(),
            environment: "development".to_string(),
            colors: true,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        let config = Config {
            log_level: env::var("LOG_LEVEL")
                .unwrap_or("warn".to_string())
                .to_lowercase(),
            environment: env::var("APP_ENV").unwrap_or("development".to_string()),
            colors: env::var_os("NO_COLOR").is_none(),
        };

        config.validate()?;
        tracing::debug!("Config: successfully loaded for {} environment", config.environment);
        Ok(config)
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(anyhow::anyhow!(
                "LOG_LEVEL must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.log_level
            ));
        }

        if self.environment.is_empty() {
            return Err(anyhow::anyhow!("APP_ENV must not be empty"));
        }

        Ok(())
    }
}

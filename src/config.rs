use anyhow::Result;

/// Transport-layer configuration, loaded from the environment.
///
/// The engine itself takes no configuration; everything here belongs to the
/// HTTP surface around it.
#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,

    // Server
    pub port: u16,

    /// Artificial delay applied by the transport before invoking the
    /// engine, in milliseconds. Off by default; never part of the engine's
    /// contract.
    pub simulated_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),

            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3001),

            simulated_delay_ms: std::env::var("SIMULATED_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in ["ENVIRONMENT", "PORT", "SIMULATED_DELAY_MS"] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_when_env_is_empty() {
        clear_env();
        let config = Config::from_env().expect("defaults should load");
        assert_eq!(config.environment, "development");
        assert_eq!(config.port, 3001);
        assert_eq!(config.simulated_delay_ms, 0);
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        std::env::set_var("ENVIRONMENT", "production");
        std::env::set_var("PORT", "8080");
        std::env::set_var("SIMULATED_DELAY_MS", "1500");

        let config = Config::from_env().expect("should load");
        assert_eq!(config.environment, "production");
        assert_eq!(config.port, 8080);
        assert_eq!(config.simulated_delay_ms, 1500);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_unparseable_values_fall_back_to_defaults() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");
        std::env::set_var("SIMULATED_DELAY_MS", "-3");

        let config = Config::from_env().expect("should load");
        assert_eq!(config.port, 3001);
        assert_eq!(config.simulated_delay_ms, 0);

        clear_env();
    }
}

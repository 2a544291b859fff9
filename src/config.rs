use tracing::Level;

/// Client settings, baked in at build time.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Prefix for `/api/...` paths. Empty means same origin.
    pub api_base: String,
    /// Send cookies to a cross-origin `api_base`.
    pub include_credentials: bool,
    /// Fetch the state once more after every move or reset has settled.
    pub resync_after_settle: bool,
    pub log_level: Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_base: String::new(),
            include_credentials: false,
            resync_after_settle: true,
            log_level: Level::INFO,
        }
    }
}

/// A build-time setting that could not be parsed and was left at its default.
#[derive(Clone, Debug, PartialEq)]
pub struct Rejected {
    pub name: &'static str,
    pub value: String,
}

impl ClientConfig {
    /// Also returns the settings that were ignored, to be logged once a
    /// subscriber is installed.
    pub fn from_build_env() -> (Self, Vec<Rejected>) {
        Self::from_vars(|name| match name {
            "CONNECT_FOUR_API_BASE" => option_env!("CONNECT_FOUR_API_BASE"),
            "CONNECT_FOUR_CREDENTIALS" => option_env!("CONNECT_FOUR_CREDENTIALS"),
            "CONNECT_FOUR_RESYNC" => option_env!("CONNECT_FOUR_RESYNC"),
            "CONNECT_FOUR_LOG" => option_env!("CONNECT_FOUR_LOG"),
            _ => None,
        })
    }

    fn from_vars<'a>(var: impl Fn(&str) -> Option<&'a str>) -> (Self, Vec<Rejected>) {
        let mut config = ClientConfig::default();
        let mut rejected = Vec::new();

        if let Some(base) = var("CONNECT_FOUR_API_BASE") {
            config.api_base = base.trim().trim_end_matches('/').to_string();
        }

        let mut flag = |name: &'static str| {
            let value = var(name)?;
            let parsed = parse_flag(value);
            if parsed.is_none() {
                rejected.push(Rejected {
                    name,
                    value: value.to_string(),
                });
            }
            parsed
        };
        if let Some(flag) = flag("CONNECT_FOUR_CREDENTIALS") {
            config.include_credentials = flag;
        }
        if let Some(flag) = flag("CONNECT_FOUR_RESYNC") {
            config.resync_after_settle = flag;
        }

        if let Some(level) = var("CONNECT_FOUR_LOG") {
            match level.trim().parse() {
                Ok(level) => config.log_level = level,
                Err(_) => rejected.push(Rejected {
                    name: "CONNECT_FOUR_LOG",
                    value: level.to_string(),
                }),
            }
        }

        (config, rejected)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&'static str, &'static str)]) -> (ClientConfig, Vec<Rejected>) {
        let vars: HashMap<_, _> = vars.iter().copied().collect();
        ClientConfig::from_vars(|name| vars.get(name).copied())
    }

    #[test]
    fn test_defaults() {
        let (config, rejected) = config_from(&[]);
        assert_eq!(config, ClientConfig::default());
        assert!(rejected.is_empty());
        assert!(config.resync_after_settle);
        assert_eq!(config.url("/api/state"), "/api/state");
    }

    #[test]
    fn test_overrides() {
        let (config, rejected) = config_from(&[
            ("CONNECT_FOUR_API_BASE", " http://localhost:5000/ "),
            ("CONNECT_FOUR_CREDENTIALS", "yes"),
            ("CONNECT_FOUR_RESYNC", "off"),
            ("CONNECT_FOUR_LOG", "debug"),
        ]);
        assert_eq!(config.url("/api/move"), "http://localhost:5000/api/move");
        assert!(config.include_credentials);
        assert!(!config.resync_after_settle);
        assert_eq!(config.log_level, Level::DEBUG);
        assert!(rejected.is_empty());
    }

    #[test]
    fn test_bad_values_fall_back() {
        let (config, rejected) = config_from(&[
            ("CONNECT_FOUR_CREDENTIALS", "true"),
            ("CONNECT_FOUR_RESYNC", "sometimes"),
            ("CONNECT_FOUR_LOG", "loud"),
        ]);
        assert!(config.include_credentials);
        assert!(config.resync_after_settle);
        assert_eq!(config.log_level, Level::INFO);
        // Kept for the caller to report once logging is up.
        assert_eq!(
            rejected,
            vec![
                Rejected {
                    name: "CONNECT_FOUR_RESYNC",
                    value: "sometimes".to_string(),
                },
                Rejected {
                    name: "CONNECT_FOUR_LOG",
                    value: "loud".to_string(),
                },
            ]
        );
    }
}

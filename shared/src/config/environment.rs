//! Deployment environment and per-environment logging defaults

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Variables consulted, in order, to pick the environment
const ENVIRONMENT_VARS: [&str; 3] = ["ENVIRONMENT", "ENV", "RUST_ENV"];

/// Where the service is deployed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn name(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    pub fn is_development(self) -> bool {
        self == Environment::Development
    }

    pub fn is_production(self) -> bool {
        self == Environment::Production
    }

    /// First of `ENVIRONMENT`, `ENV`, `RUST_ENV` that is set; unknown names mean development
    pub fn from_env() -> Self {
        ENVIRONMENT_VARS
            .iter()
            .find_map(|key| env::var(key).ok())
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    /// Environment-specific dotenv file, e.g. `.env.staging`
    pub fn env_file(self) -> String {
        format!(".env.{}", self.name())
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" | "local" => Ok(Environment::Development),
            "staging" | "stage" | "test" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!("unknown environment '{}'", other)),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default log filter (trace, debug, info, warn, error); `RUST_LOG` overrides it
    pub level: String,

    /// Include timestamp in logs
    #[serde(default = "default_timestamp")]
    pub timestamp: bool,

    /// Include the module path of the emitting target
    #[serde(default)]
    pub module_path: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            timestamp: default_timestamp(),
            module_path: false,
        }
    }
}

impl LoggingConfig {
    /// Create logging config for environment
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => Self {
                level: String::from("debug"),
                timestamp: true,
                module_path: true,
            },
            Environment::Staging => Self {
                level: String::from("info"),
                timestamp: true,
                module_path: false,
            },
            Environment::Production => Self {
                level: String::from("warn"),
                timestamp: true,
                module_path: false,
            },
        }
    }
}

fn default_timestamp() -> bool {
    true
}

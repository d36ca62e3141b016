// Environment configuration for the service binary.
//
// Variables
// - WORKLOAD_HOST, WORKLOAD_PORT: listen address.
// - WORKLOAD_DEFAULT_DAILY_CAPACITY: daily hours for users without a profile. "none" disables it.
// - WORKLOAD_COUNT_WEEKENDS: whether the default profile counts Saturday and Sunday.
// - WORKLOAD_SEED_PATH: optional JSON seed loaded at startup.

use crate::modules::workload::core::capacity::CapacityProfile;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DAILY_CAPACITY: f64 = 8.0;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub default_profile: Option<CapacityProfile>,
    pub seed_path: Option<PathBuf>,
}

impl AppConfig {
    /// Reads `.env` when present, then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let host = parse_or("WORKLOAD_HOST", read("WORKLOAD_HOST"), || {
            IpAddr::from([0, 0, 0, 0])
        })?;
        let port = parse_or("WORKLOAD_PORT", read("WORKLOAD_PORT"), || DEFAULT_PORT)?;
        let count_weekends = match read("WORKLOAD_COUNT_WEEKENDS") {
            None => false,
            Some(value) => parse_flag("WORKLOAD_COUNT_WEEKENDS", &value)?,
        };
        let default_profile = match read("WORKLOAD_DEFAULT_DAILY_CAPACITY") {
            Some(value) if value.eq_ignore_ascii_case("none") => None,
            value => {
                let daily_hours = parse_or("WORKLOAD_DEFAULT_DAILY_CAPACITY", value, || {
                    DEFAULT_DAILY_CAPACITY
                })?;
                if !daily_hours.is_finite() || !(0.0..=24.0).contains(&daily_hours) {
                    return Err(ConfigError::Invalid {
                        name: "WORKLOAD_DEFAULT_DAILY_CAPACITY",
                        value: daily_hours.to_string(),
                    });
                }
                Some(CapacityProfile::new(daily_hours, count_weekends))
            }
        };

        Ok(Self {
            host,
            port,
            default_profile,
            seed_path: read("WORKLOAD_SEED_PATH").map(PathBuf::from),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: impl FnOnce() -> T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default()),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            name,
            value: value.to_string(),
        }),
    }
}

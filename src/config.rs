use anyhow::Result;
use figment::{providers::{Env, Format, Toml}, Figment};
use serde::Deserialize;
use std::net::SocketAddr;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, Default)]
#[serde(default)]
pub struct Config {
    #[validate(nested)]
    pub server: ServerConfig,
    #[validate(nested)]
    pub simulation: SimulationConfig,
    #[validate(nested)]
    pub scenarios: ScenariosConfig,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 3000,
            enable_cors: true,
            request_timeout_secs: 10,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct SimulationConfig {
    #[validate(range(min = 1))]
    pub tick_seconds: u64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub perturb_probability: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub sample_probability: f64,
    pub random_seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_seconds: 1,
            perturb_probability: 0.15,
            sample_probability: 0.12,
            random_seed: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct ScenariosConfig {
    pub cooldown_seconds: u64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub wrong_tag_probability: f64,
    pub random_seed: Option<u64>,
}

impl Default for ScenariosConfig {
    fn default() -> Self {
        Self {
            cooldown_seconds: 60,
            wrong_tag_probability: 0.08,
            random_seed: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let figment = Figment::new()
            .merge(Toml::file("config/default.toml"))
            .merge(Env::prefixed("FARM__").split("__"));
        let cfg: Self = figment.extract()?;
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = Config::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.simulation.tick_seconds, 1);
        assert_eq!(cfg.scenarios.cooldown_seconds, 60);
    }

    #[test]
    fn probability_out_of_range_is_rejected() {
        let mut cfg = Config::default();
        cfg.simulation.perturb_probability = 1.5;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn socket_addr_parses() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.socket_addr().unwrap().port(), 3000);
    }
}

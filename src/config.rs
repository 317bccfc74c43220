use std::env;

use thiserror::Error;

use crate::constants::{env as env_key, header, method};
use crate::policy::OriginPolicy;

/// Port the server binds when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 5000;

/// Runtime flavor controlling how much error detail leaves the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_development(self) -> bool {
        matches!(self, Environment::Development)
    }

    fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("production") || value.eq_ignore_ascii_case("prod") {
            Environment::Production
        } else {
            Environment::Development
        }
    }
}

/// What the surrounding server does with a denied origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DenyBehavior {
    /// Forward the request with no CORS headers attached and let the browser
    /// enforce the block. The canonical contract.
    #[default]
    OmitHeaders,
    /// Fail the request before any route handler runs. Defense-in-depth for
    /// servers that want denials visible on their side too.
    Reject,
}

/// Gate configuration. Assembled once at startup, validated by
/// [`crate::OriginGate::new`], and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct GateConfig {
    pub policy: OriginPolicy,
    pub credentials: bool,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    /// Status answered on preflight short-circuit. Must be a success status.
    pub preflight_status: u16,
    pub deny_behavior: DenyBehavior,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            policy: OriginPolicy::default(),
            credentials: true,
            allowed_methods: vec![
                method::GET.into(),
                method::POST.into(),
                method::PUT.into(),
                method::DELETE.into(),
                method::OPTIONS.into(),
            ],
            allowed_headers: vec![header::CONTENT_TYPE.into(), header::AUTHORIZATION.into()],
            preflight_status: 200,
            deny_behavior: DenyBehavior::default(),
        }
    }
}

impl GateConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.policy {
            OriginPolicy::AllowAll => {}
            OriginPolicy::AllowList(origins) => {
                for origin in origins {
                    Self::validate_origin(origin)?;
                }
            }
            OriginPolicy::SinglePinned(origin) => Self::validate_origin(origin)?,
        }

        if !(200..=299).contains(&self.preflight_status) {
            return Err(ConfigError::InvalidPreflightStatus(self.preflight_status));
        }

        Ok(())
    }

    fn validate_origin(origin: &str) -> Result<(), ConfigError> {
        if origin.trim().is_empty() {
            return Err(ConfigError::EmptyOrigin);
        }
        if origin == "*" {
            return Err(ConfigError::WildcardOrigin);
        }
        Ok(())
    }
}

/// Process-level configuration, read once at startup and handed by reference
/// to whatever owns the server loop.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub environment: Environment,
    pub gate: GateConfig,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with the variable source injected, so
    /// tests never have to mutate the process environment.
    ///
    /// `ALLOWED_ORIGINS` wins over `FRONTEND_URL`: `*` selects
    /// [`OriginPolicy::AllowAll`], anything else is a comma-separated
    /// allow-list. With only `FRONTEND_URL` set, that single origin is
    /// pinned. With neither, every origin is admitted.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup(env_key::PORT) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value: raw })?,
            None => DEFAULT_PORT,
        };

        let environment = lookup(env_key::APP_ENV)
            .map(|raw| Environment::parse(&raw))
            .unwrap_or_default();

        let policy = match lookup(env_key::ALLOWED_ORIGINS) {
            Some(raw) if raw.trim() == "*" => OriginPolicy::AllowAll,
            Some(raw) => OriginPolicy::allow_list(
                raw.split(',').map(str::trim).filter(|entry| !entry.is_empty()),
            ),
            None => match lookup(env_key::FRONTEND_URL) {
                Some(raw) if !raw.trim().is_empty() => OriginPolicy::pinned(raw),
                _ => OriginPolicy::AllowAll,
            },
        };

        let gate = GateConfig {
            policy,
            ..GateConfig::default()
        };
        gate.validate()?;

        Ok(Self {
            port,
            environment,
            gate,
        })
    }
}

/// Startup-time configuration failures. None of these can occur per-request;
/// the gate refuses to construct instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("configured origin must not be empty")]
    EmptyOrigin,
    #[error("\"*\" is not a concrete origin; use OriginPolicy::AllowAll")]
    WildcardOrigin,
    #[error("preflight status {0} is not a success status")]
    InvalidPreflightStatus(u16),
    #[error("invalid PORT value {value:?}")]
    InvalidPort { value: String },
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

//! # Run Configuration
//!
//! Everything a single poll needs, assembled from process arguments at startup
//! and passed down by reference. Nothing in here is mutated after construction.

use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 161;
pub const DEFAULT_COMMUNITY: &str = "public";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{metric} warning threshold ({warning}) is above its critical threshold ({critical})")]
    InvertedThreshold {
        metric: &'static str,
        warning: f64,
        critical: f64,
    },
    #[error("unsupported SNMP version '{0}' (expected 1 or 2c)")]
    UnsupportedVersion(String),
}

/// Protocol version spoken to the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnmpVersion {
    #[default]
    V1,
    V2c,
}

impl std::str::FromStr for SnmpVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "1" | "v1" => Ok(SnmpVersion::V1),
            "2" | "2c" | "v2c" => Ok(SnmpVersion::V2c),
            _ => Err(ConfigError::UnsupportedVersion(s.to_string())),
        }
    }
}

/// Where and how to open the device session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub hostname: String,
    pub port: u16,
    pub community: String,
    pub version: SnmpVersion,
    /// Applied to every walk step and every point-query.
    pub timeout: Duration,
}

impl SessionConfig {
    /// `host:port`, bracketing bare IPv6 literals.
    pub fn agent_address(&self) -> String {
        if self.hostname.contains(':') && !self.hostname.starts_with('[') {
            format!("[{}]:{}", self.hostname, self.port)
        } else {
            format!("{}:{}", self.hostname, self.port)
        }
    }
}

/// A pair of inclusive lower bounds. Reaching `critical` wins over reaching `warning`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub warning: f64,
    pub critical: f64,
}

impl Threshold {
    pub fn new(metric: &'static str, warning: f64, critical: f64) -> Result<Self, ConfigError> {
        if warning > critical {
            return Err(ConfigError::InvertedThreshold {
                metric,
                warning,
                critical,
            });
        }
        Ok(Self { warning, critical })
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self {
            warning: 80.0,
            critical: 95.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Thresholds {
    pub cpu: Threshold,
    /// Compared against `mem_usage`, which holds the percentage of **free** memory.
    pub memory: Threshold,
    pub radio_usage: Threshold,
}

pub struct Config {
    pub session: SessionConfig,
    /// Name looked up in the profile registry before any device I/O.
    pub profile: String,
    pub thresholds: Thresholds,
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

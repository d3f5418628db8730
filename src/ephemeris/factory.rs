//! Ephemeris factory for dependency injection.
//!
//! This module provides utilities for creating and configuring ephemeris
//! backends based on runtime configuration.

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use super::error::{EphemerisError, EphemerisResult};
#[cfg(feature = "local-ephe")]
use super::local::LocalEphemeris;
#[cfg(feature = "swiss-ephe")]
use super::swiss::SwissEphemeris;
use super::Ephemeris;

/// Ephemeris backend configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EphemerisType {
    /// Swiss Ephemeris via native libswe bindings
    Swiss,
    /// Deterministic in-process backend
    Local,
}

impl FromStr for EphemerisType {
    type Err = String;

    /// Parse ephemeris backend type from string.
    ///
    /// # Arguments
    /// * `s` - String representation ("swiss", "local")
    ///
    /// # Returns
    /// * `Ok(EphemerisType)` if valid
    /// * `Err` if invalid
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "swiss" | "swisseph" | "swe" => Ok(Self::Swiss),
            "local" => Ok(Self::Local),
            _ => Err(format!("Unknown ephemeris backend: {}", s)),
        }
    }
}

impl EphemerisType {
    /// Get ephemeris backend type from environment variables.
    ///
    /// Reads `EPHEMERIS_BACKEND`. Defaults to Swiss if an ephemeris data path
    /// is present, otherwise Local.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var("EPHEMERIS_BACKEND") {
            return val.parse().unwrap_or(Self::Local);
        }

        if std::env::var("SE_EPHE_PATH").is_ok() {
            Self::Swiss
        } else {
            Self::Local
        }
    }
}

/// Runtime configuration for ephemeris backends.
#[derive(Debug, Clone, Default)]
pub struct EphemerisConfig {
    /// Directory holding the Swiss Ephemeris data files. `None` lets the
    /// library fall back to its built-in search path.
    pub ephe_path: Option<PathBuf>,
}

impl EphemerisConfig {
    /// Read the configuration from environment variables (`SE_EPHE_PATH`).
    pub fn from_env() -> Self {
        Self {
            ephe_path: std::env::var("SE_EPHE_PATH").ok().map(PathBuf::from),
        }
    }
}

/// Factory for creating ephemeris backend instances.
///
/// Backend selection happens here, once, at startup; the resulting
/// `Arc<dyn Ephemeris>` is injected into the chart service rather than
/// accessed through ambient global state.
pub struct EphemerisFactory;

impl EphemerisFactory {
    /// Create an ephemeris backend of the given type.
    ///
    /// # Arguments
    /// * `kind` - Backend to create
    /// * `config` - Backend configuration (data path for Swiss)
    ///
    /// # Returns
    /// * `Ok(Arc<dyn Ephemeris>)` - Boxed backend instance
    /// * `Err(EphemerisError)` - If creation fails or the backend was
    ///   compiled out
    pub fn create(
        kind: EphemerisType,
        config: &EphemerisConfig,
    ) -> EphemerisResult<Arc<dyn Ephemeris>> {
        match kind {
            EphemerisType::Swiss => {
                #[cfg(feature = "swiss-ephe")]
                {
                    let swiss = SwissEphemeris::new(config)?;
                    Ok(Arc::new(swiss) as Arc<dyn Ephemeris>)
                }
                #[cfg(not(feature = "swiss-ephe"))]
                {
                    let _ = config;
                    Err(EphemerisError::NotAvailable(
                        "swiss-ephe feature not enabled",
                    ))
                }
            }
            EphemerisType::Local => {
                #[cfg(feature = "local-ephe")]
                {
                    let _ = config;
                    Ok(Arc::new(LocalEphemeris::new()) as Arc<dyn Ephemeris>)
                }
                #[cfg(not(feature = "local-ephe"))]
                {
                    let _ = config;
                    Err(EphemerisError::NotAvailable(
                        "local-ephe feature not enabled",
                    ))
                }
            }
        }
    }

    /// Create a backend from environment configuration.
    pub fn from_env() -> EphemerisResult<Arc<dyn Ephemeris>> {
        Self::create(EphemerisType::from_env(), &EphemerisConfig::from_env())
    }
}

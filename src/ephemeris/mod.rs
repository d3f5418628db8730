//! Ephemeris backends for astronomical computation.
//!
//! This module provides the abstraction over the ephemeris engine via a port
//! trait, allowing the computation backend to be swapped easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Service Layer (services/chart.rs) - Orchestration      │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Ephemeris Trait (this module) - Abstract Interface     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴──────────────────────────────┐
//!     │  SwissEphemeris        LocalEphemeris        │
//!     │  (libswe FFI)          (deterministic, dev)  │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! The Swiss backend wraps the native Swiss Ephemeris library through the
//! `swe-sys` bindings; its data directory is configured exactly once per
//! process when the backend is constructed. The local backend is an
//! in-process stand-in for unit testing and local development, in the same
//! spirit as an in-memory repository: deterministic, dependency-free, and
//! explicitly not precision astronomy.

#[cfg(not(any(feature = "swiss-ephe", feature = "local-ephe")))]
compile_error!("Enable at least one ephemeris backend feature.");

pub mod error;
pub mod factory;

#[cfg(feature = "local-ephe")]
pub mod local;

#[cfg(feature = "swiss-ephe")]
pub mod swiss;

pub use error::{EphemerisError, EphemerisResult};
pub use factory::{EphemerisConfig, EphemerisFactory, EphemerisType};

#[cfg(feature = "local-ephe")]
pub use local::LocalEphemeris;
#[cfg(feature = "swiss-ephe")]
pub use swiss::SwissEphemeris;

use async_trait::async_trait;

use crate::models::{Body, HouseCusp, HouseSystem, JulianDay, PlanetPosition};

/// Abstract interface to an ephemeris engine.
///
/// Implementations model the underlying computation (native library call or
/// local approximation) as awaitable single-shot operations with a typed
/// error channel.
#[async_trait]
pub trait Ephemeris: Send + Sync {
    /// Ecliptic position of `body` at the UT instant `jd`.
    async fn body_position(&self, jd: JulianDay, body: Body)
        -> EphemerisResult<PlanetPosition>;

    /// The twelve house cusps at the UT instant `jd` for an observer at
    /// `latitude`/`longitude` (decimal degrees), under `system`.
    ///
    /// Cusps are returned in ascending house order; the house number equals
    /// the 1-based position in the returned sequence.
    async fn house_cusps(
        &self,
        jd: JulianDay,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> EphemerisResult<Vec<HouseCusp>>;

    /// Short backend identifier for health reporting.
    fn backend_name(&self) -> &'static str;
}

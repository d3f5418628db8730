//! # Natal Chart Rust Backend
//!
//! Web-service backend that turns birth data into a natal chart.
//!
//! This crate accepts a birth date, time and place, resolves the place to
//! coordinates through a geocoding service, and delegates the astronomical
//! computation (planetary ecliptic longitudes, Placidus house cusps) to an
//! ephemeris backend. The backend exposes a REST API via Axum for the
//! frontend.
//!
//! ## Features
//!
//! - **Chart Orchestration**: geocode, Julian-day conversion, ten body
//!   positions, twelve house cusps, uniform error mapping
//! - **Ephemeris Backends**: Swiss Ephemeris FFI bindings (`swiss-ephe`) or
//!   a deterministic in-process backend for development (`local-ephe`)
//! - **Geocoding**: Nominatim place-search adapter behind a port trait
//! - **Time Handling**: Gregorian calendar to Julian-day conversion
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Domain types (bodies, chart, Julian day)
//! - [`ephemeris`]: Ephemeris port, backends, and factory
//! - [`geocode`]: Geocoder port and Nominatim adapter
//! - [`services`]: Chart request orchestration
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod ephemeris;
pub mod geocode;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

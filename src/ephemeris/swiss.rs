//! Swiss Ephemeris backend over the `swe-sys` raw bindings.
//!
//! The native library keeps process-global state: the ephemeris data path is
//! set once per process, and every call runs on a blocking thread under a
//! static mutex because libswe is not safe to call concurrently. C error
//! strings are surfaced through [`EphemerisError`].

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::sync::{Mutex, Once};

use async_trait::async_trait;

use super::error::{EphemerisError, EphemerisResult};
use super::factory::EphemerisConfig;
use super::Ephemeris;
use crate::models::{normalize_degrees, Body, HouseCusp, HouseSystem, JulianDay, PlanetPosition};

/// One-time ephemeris data-path configuration.
static EPHE_PATH_INIT: Once = Once::new();

/// Serializes all calls into the native library.
static NATIVE_LOCK: Mutex<()> = Mutex::new(());

/// Ephemeris backend backed by the native Swiss Ephemeris library.
pub struct SwissEphemeris;

impl SwissEphemeris {
    /// Create the backend, configuring the ephemeris data directory on first
    /// construction. Without a configured path the library falls back to its
    /// built-in search locations.
    pub fn new(config: &EphemerisConfig) -> EphemerisResult<Self> {
        if let Some(path) = &config.ephe_path {
            if !path.is_dir() {
                return Err(EphemerisError::configuration(format!(
                    "ephemeris data path is not a directory: {}",
                    path.display()
                )));
            }

            let raw = path.to_str().ok_or_else(|| {
                EphemerisError::configuration("ephemeris data path is not valid UTF-8")
            })?;
            let c_path = CString::new(raw).map_err(|e| {
                EphemerisError::configuration(format!("ephemeris data path: {}", e))
            })?;

            EPHE_PATH_INIT.call_once(|| unsafe {
                swe_sys::swe_set_ephe_path(c_path.as_ptr());
            });
        }

        Ok(Self)
    }

    /// Read the NUL-terminated C error message out of a `serr` buffer.
    fn error_message(serr: &[c_char]) -> String {
        let msg = unsafe { CStr::from_ptr(serr.as_ptr()) };
        let msg = msg.to_string_lossy();
        if msg.is_empty() {
            "unspecified ephemeris error".to_string()
        } else {
            msg.into_owned()
        }
    }

    fn native_guard() -> std::sync::MutexGuard<'static, ()> {
        NATIVE_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl Ephemeris for SwissEphemeris {
    async fn body_position(
        &self,
        jd: JulianDay,
        body: Body,
    ) -> EphemerisResult<PlanetPosition> {
        let result = tokio::task::spawn_blocking(move || {
            let _guard = Self::native_guard();

            let mut xx = [0.0f64; 6];
            let mut serr = [0 as c_char; swe_sys::AS_MAXCH];

            let ret = unsafe {
                swe_sys::swe_calc_ut(
                    jd.value(),
                    body.se_number(),
                    swe_sys::SEFLG_SWIEPH,
                    xx.as_mut_ptr(),
                    serr.as_mut_ptr(),
                )
            };

            if ret < 0 {
                return Err(EphemerisError::computation(
                    body.display_name(),
                    Self::error_message(&serr),
                ));
            }

            let mut name_buf = [0 as c_char; swe_sys::AS_MAXCH];
            unsafe {
                swe_sys::swe_get_planet_name(body.se_number(), name_buf.as_mut_ptr());
            }
            let name = unsafe { CStr::from_ptr(name_buf.as_ptr()) }
                .to_string_lossy()
                .into_owned();

            Ok(PlanetPosition {
                name,
                longitude: normalize_degrees(xx[0]),
            })
        })
        .await;

        result.map_err(|e| {
            EphemerisError::computation(body.display_name(), format!("task join error: {}", e))
        })?
    }

    async fn house_cusps(
        &self,
        jd: JulianDay,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> EphemerisResult<Vec<HouseCusp>> {
        let result = tokio::task::spawn_blocking(move || {
            let _guard = Self::native_guard();

            let mut cusps = [0.0f64; 13];
            let mut ascmc = [0.0f64; 10];

            let ret = unsafe {
                swe_sys::swe_houses(
                    jd.value(),
                    latitude,
                    longitude,
                    system.se_code(),
                    cusps.as_mut_ptr(),
                    ascmc.as_mut_ptr(),
                )
            };

            if ret == swe_sys::SE_ERR {
                return Err(EphemerisError::computation(
                    "houses",
                    format!(
                        "house computation failed at lat {} lon {}",
                        latitude, longitude
                    ),
                ));
            }

            // cusps[0] is unused in the C API; houses are 1-indexed
            let cusps = (1..=12usize)
                .map(|house| HouseCusp {
                    house: house as u8,
                    longitude: normalize_degrees(cusps[house]),
                })
                .collect();

            Ok(cusps)
        })
        .await;

        result.map_err(|e| {
            EphemerisError::computation("houses", format!("task join error: {}", e))
        })?
    }

    fn backend_name(&self) -> &'static str {
        "swiss"
    }
}

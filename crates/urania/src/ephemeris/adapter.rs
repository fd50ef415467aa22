//! Swiss Ephemeris backed implementation of [`EphemerisSource`].

use std::env;
use std::path::PathBuf;

use swisseph::swe::{calc_ut, houses_ex};
use swisseph::Cusp;

use crate::bodies::CelestialBody;
use crate::ephemeris::provider::{EphemerisError, EphemerisSource};
use crate::ephemeris::types::{BodyState, EphemerisSettings, GeoLocation, ZodiacType};
use crate::zodiac::normalize_degrees;

// FLG_SWIEPH | FLG_SPEED: read positions from the ephemeris files and
// compute daily motion alongside them.
const BASE_FLAGS: i32 = 2 | 256;
// FLG_SIDEREAL
const SIDEREAL_FLAG: i32 = 64;

pub struct SwissEphemerisAdapter {
    _ephemeris_path: PathBuf,
    _sidereal_mode: Option<i32>,
    flags: i32,
    house_system: u8,
}

impl SwissEphemerisAdapter {
    /// Creates an adapter for the given settings. The ephemeris data path
    /// falls back to `SWISS_EPHEMERIS_PATH`, then to the conventional
    /// install location.
    pub fn new(
        ephemeris_path: Option<PathBuf>,
        settings: &EphemerisSettings,
    ) -> Result<Self, EphemerisError> {
        let path = ephemeris_path.unwrap_or_else(|| {
            env::var("SWISS_EPHEMERIS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("/usr/local/share/swisseph"))
        });

        if !path.exists() {
            return Err(EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "ephemeris data files are not installed there".to_string(),
            });
        }

        let mut flags = BASE_FLAGS;
        let mut sidereal_mode = None;
        if settings.zodiac_type == ZodiacType::Sidereal {
            // set_sid_mode is not exposed by this crate version; the
            // sidereal flag covers the calculation and the mode is kept for
            // when it becomes available.
            flags |= SIDEREAL_FLAG;
            sidereal_mode = Some(settings.ayanamsa.mode());
        }

        log::debug!(
            "ephemeris adapter ready: path {}, flags {}, house system {}",
            path.display(),
            flags,
            settings.house_system.code() as char
        );

        Ok(Self {
            _ephemeris_path: path,
            _sidereal_mode: sidereal_mode,
            flags,
            house_system: settings.house_system.code(),
        })
    }
}

impl EphemerisSource for SwissEphemerisAdapter {
    fn body_state(
        &self,
        julian_day: f64,
        body: CelestialBody,
    ) -> Result<BodyState, EphemerisError> {
        let result = calc_ut(julian_day, body.ephemeris_id() as u32, self.flags as u32).map_err(
            |e| EphemerisError::CalculationFailed {
                body,
                julian_day,
                message: format!("Swiss Ephemeris error: {}", e),
            },
        )?;

        let out = result.out;
        Ok(BodyState {
            longitude: normalize_degrees(out[0]),
            speed: out[3],
        })
    }

    fn house_cusps(
        &self,
        julian_day: f64,
        location: &GeoLocation,
    ) -> Result<[f64; 12], EphemerisError> {
        let (c, _ascmc) = houses_ex(
            julian_day,
            self.flags,
            location.lat,
            location.lon,
            self.house_system as i32,
        );
        let cusps = Cusp::from_array(c);

        Ok([
            normalize_degrees(cusps.first),
            normalize_degrees(cusps.second),
            normalize_degrees(cusps.third),
            normalize_degrees(cusps.fourth),
            normalize_degrees(cusps.fifth),
            normalize_degrees(cusps.sixth),
            normalize_degrees(cusps.seventh),
            normalize_degrees(cusps.eighth),
            normalize_degrees(cusps.ninth),
            normalize_degrees(cusps.tenth),
            normalize_degrees(cusps.eleventh),
            normalize_degrees(cusps.twelfth),
        ])
    }
}

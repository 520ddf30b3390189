//! Troposphere approximation of the International Standard Atmosphere.
//!
//! - `T = 288.15 K − 0.00198 K/ft · h`
//! - `p = 101325 Pa · (T / 288.15 K)^5.256`
//!
//! The linear lapse rate reaches absolute zero near 145500 ft. Above that the
//! state is reported with zero pressure and flagged as non-physical instead of
//! producing `NaN`.

use tracing::warn;
use uom::si::{
    f64::{Length, Pressure, ThermodynamicTemperature},
    length::foot,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

const SEA_LEVEL_TEMPERATURE: f64 = 288.15;
const SEA_LEVEL_PRESSURE: f64 = 101_325.0;
const LAPSE_RATE_KELVIN_PER_FOOT: f64 = 0.00198;
const BAROMETRIC_EXPONENT: f64 = 5.256;

/// Ambient static conditions at an altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtmosphericState {
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
}

impl AtmosphericState {
    /// Returns the standard-day state at `altitude`.
    ///
    /// Never fails; check [`is_physical`](Self::is_physical) when the altitude
    /// is not already known to be inside the troposphere model's range.
    #[must_use]
    pub fn at_altitude(altitude: Length) -> Self {
        let altitude_ft = altitude.get::<foot>();
        let t = SEA_LEVEL_TEMPERATURE - LAPSE_RATE_KELVIN_PER_FOOT * altitude_ft;

        let p = if t > 0.0 {
            SEA_LEVEL_PRESSURE * (t / SEA_LEVEL_TEMPERATURE).powf(BAROMETRIC_EXPONENT)
        } else {
            warn!(
                altitude_ft,
                temperature_k = t,
                "ambient temperature is non-physical at this altitude"
            );
            0.0
        };

        Self {
            temperature: ThermodynamicTemperature::new::<kelvin>(t),
            pressure: Pressure::new::<pascal>(p),
        }
    }

    /// Returns the sea-level standard state.
    #[must_use]
    pub fn sea_level() -> Self {
        Self {
            temperature: ThermodynamicTemperature::new::<kelvin>(SEA_LEVEL_TEMPERATURE),
            pressure: Pressure::new::<pascal>(SEA_LEVEL_PRESSURE),
        }
    }

    /// Returns whether the ambient temperature is above absolute zero.
    #[must_use]
    pub fn is_physical(&self) -> bool {
        self.temperature.get::<kelvin>() > 0.0
    }

    /// Ambient pressure relative to sea level, used as the density ratio for flow scaling.
    #[must_use]
    pub fn pressure_ratio_to_sea_level(&self) -> f64 {
        self.pressure.get::<pascal>() / SEA_LEVEL_PRESSURE
    }
}

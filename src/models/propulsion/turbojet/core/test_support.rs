use uom::si::{
    f64::{Pressure, Ratio, ThermodynamicTemperature},
    pressure::pascal,
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use crate::support::constraint::UnitIntervalLowerOpen;

use super::{StationState, input::Efficiency};

/// Builds a station state from kelvin and pascal.
pub(super) fn state(temperature_k: f64, pressure_pa: f64) -> StationState {
    StationState {
        temperature: ThermodynamicTemperature::new::<kelvin>(temperature_k),
        pressure: Pressure::new::<pascal>(pressure_pa),
    }
}

pub(super) fn temperature(kelvin_value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<kelvin>(kelvin_value)
}

pub(super) fn eta(value: f64) -> Efficiency {
    UnitIntervalLowerOpen::new(Ratio::new::<ratio>(value)).unwrap()
}

/// Inlet exit at 35000 ft and Mach 0.85.
pub(super) fn cruise_inlet_exit() -> StationState {
    state(250.473_825, 38_276.012_384_519)
}

/// Compressor exit at the cruise point with PR 30 and `η_c` 0.88.
pub(super) fn cruise_compressor_exit() -> StationState {
    state(718.011_555_332_563, 1_148_280.371_535_559)
}

/// Fuel-air ratio at the cruise point with TIT throttled to 1400 K.
pub(super) const CRUISE_FUEL_AIR_RATIO: f64 = 0.021_919_525_953_387;

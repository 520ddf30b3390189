//! Inlet ram compression.

use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use crate::support::thermo::PerfectGas;

use super::{AtmosphericState, InletFidelity, StationState};

/// Recovers freestream stagnation conditions at the inlet exit (station 2).
///
/// `T2 = T_amb·(1 + ½(γ−1)M²)` and `p2 = p_amb·(T2/T_amb)^k`, where `k` is
/// `γ/(γ−1)` or the fixed 3.5 depending on `fidelity`.
pub(super) fn ram_compression(
    ambient: &AtmosphericState,
    mach: f64,
    air: &PerfectGas,
    fidelity: InletFidelity,
) -> StationState {
    let temperature_ratio = air.stagnation_temperature_ratio(mach);
    let exponent = match fidelity {
        InletFidelity::Simple => InletFidelity::SIMPLE_PRESSURE_EXPONENT,
        InletFidelity::FullIsentropic => air.pressure_exponent(),
    };

    let t_amb = ambient.temperature.get::<kelvin>();

    StationState {
        temperature: ThermodynamicTemperature::new::<kelvin>(t_amb * temperature_ratio),
        pressure: ambient.pressure * temperature_ratio.powf(exponent),
    }
}

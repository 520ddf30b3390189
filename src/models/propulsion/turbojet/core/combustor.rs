//! Combustor energy balance.

use uom::si::{
    available_energy::joule_per_kilogram,
    f64::ThermodynamicTemperature,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::thermo::PerfectGas;

use super::{DomainError, Fuel, input::Efficiency};

/// Solves the fuel-air ratio that heats compressor exit air to the turbine inlet temperature.
///
/// `f = (cp_gas·TIT − cp_air·T3) / (η_b·LHV − cp_gas·TIT)`
///
/// # Errors
///
/// - [`DomainError::NonPositiveCombustorDenominator`] if `η_b·LHV ≤ cp_gas·TIT`.
/// - [`DomainError::NegativeFuelAirRatio`] if `T3` is already above what TIT needs.
pub(super) fn fuel_air_ratio(
    compressor_exit: ThermodynamicTemperature,
    turbine_inlet: ThermodynamicTemperature,
    burner_efficiency: Efficiency,
    fuel: &Fuel,
    air: &PerfectGas,
    gas: &PerfectGas,
) -> Result<f64, DomainError> {
    let cp_air = air.cp().get::<joule_per_kilogram_kelvin>();
    let cp_gas = gas.cp().get::<joule_per_kilogram_kelvin>();
    let t3 = compressor_exit.get::<kelvin>();
    let tit = turbine_inlet.get::<kelvin>();

    let heat_release = burner_efficiency.get().get::<ratio>()
        * fuel.lower_heating_value.get::<joule_per_kilogram>();
    let denominator = heat_release - cp_gas * tit;
    if denominator.is_nan() || denominator <= 0.0 {
        return Err(DomainError::NonPositiveCombustorDenominator { denominator });
    }

    let fuel_air_ratio = (cp_gas * tit - cp_air * t3) / denominator;
    if fuel_air_ratio < 0.0 {
        return Err(DomainError::NegativeFuelAirRatio { fuel_air_ratio });
    }

    Ok(fuel_air_ratio)
}

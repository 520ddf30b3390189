//! Constants and limits for a turbojet evaluation.

use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{AvailableEnergy, Ratio},
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
};

use crate::support::{thermo::PerfectGas, units::SpecificGasConstant};

use super::{InputRange, MaterialTable};

/// Configuration shared by every evaluation of a [`Turbojet`](super::super::Turbojet).
///
/// The default is a kerosene-fuelled engine with constant-property air
/// (`cp` 1005 J/kg·K, `γ` 1.4) and combustion gas (`cp` 1150 J/kg·K, `γ` 1.33).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurbojetConfig {
    /// Gas properties upstream of the combustor.
    pub air: PerfectGas,

    /// Gas properties downstream of the combustor.
    pub combustion_gas: PerfectGas,

    /// Specific gas constant of air, used for the flight speed of sound.
    pub air_gas_constant: SpecificGasConstant,

    pub fuel: Fuel,

    /// Blade material limits and yield curves.
    pub materials: MaterialTable,

    /// Allowed input envelope.
    pub limits: InputLimits,
}

impl Default for TurbojetConfig {
    fn default() -> Self {
        Self {
            air: PerfectGas::air(),
            combustion_gas: PerfectGas::combustion_products(),
            air_gas_constant: SpecificGasConstant::new::<joule_per_kilogram_kelvin>(287.0),
            fuel: Fuel::default(),
            materials: MaterialTable::default(),
            limits: InputLimits::default(),
        }
    }
}

/// Fuel properties.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fuel {
    /// Lower heating value.
    pub lower_heating_value: AvailableEnergy,

    /// Mass of CO₂ emitted per unit mass of fuel burned.
    pub co2_emission_index: Ratio,
}

impl Default for Fuel {
    /// Jet-A.
    fn default() -> Self {
        Self {
            lower_heating_value: AvailableEnergy::new::<joule_per_kilogram>(43.0e6),
            co2_emission_index: Ratio::new::<ratio>(3.15),
        }
    }
}

/// Allowed input envelope, in display units.
///
/// Mass flow has no range; it only needs to be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputLimits {
    /// Altitude, ft.
    pub altitude: InputRange,
    pub mach: InputRange,
    pub pressure_ratio: InputRange,
    /// Requested turbine inlet temperature, K.
    pub turbine_inlet_temperature: InputRange,
    pub compressor_efficiency: InputRange,
    pub turbine_efficiency: InputRange,
    pub burner_efficiency: InputRange,
    /// Shaft speed, rpm.
    pub speed: InputRange,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            altitude: InputRange::new(0.0, 50_000.0),
            mach: InputRange::new(0.0, 2.5),
            pressure_ratio: InputRange::new(5.0, 50.0),
            turbine_inlet_temperature: InputRange::new(1000.0, 2500.0),
            compressor_efficiency: InputRange::new(0.7, 0.98),
            turbine_efficiency: InputRange::new(0.7, 0.98),
            burner_efficiency: InputRange::new(0.9, 1.0),
            speed: InputRange::new(5000.0, 18_000.0),
        }
    }
}

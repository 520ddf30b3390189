//! Calorically perfect gas model.
//!
//! `PerfectGas` is the standard engineering approximation used in ideal
//! Brayton-cycle analysis: an ideal gas with constant `cp` and a constant
//! ratio of specific heats `γ`.
//!
//! # Assumptions
//!
//! - Ideal gas equation of state: `p = ρ·R·T`
//! - Calorically perfect: `cp` and `γ` do not vary with temperature
//!
//! Storing `γ` directly, rather than deriving it from `cp` and `R`, keeps the
//! isentropic exponents exact (for air, `γ/(γ−1)` is exactly the 3.5 that
//! appears in textbook ram-compression relations).

use thiserror::Error;
use uom::si::{
    f64::{Ratio, SpecificHeatCapacity, ThermodynamicTemperature, Velocity},
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    thermo::fluid::{Air, CombustionProducts},
    units::SpecificGasConstant,
};

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum PerfectGasParametersError {
    #[error("invalid cp: {cp:?}")]
    Cp { cp: SpecificHeatCapacity },
    #[error("ratio of specific heats must be finite and greater than one: gamma={gamma}")]
    Gamma { gamma: f64 },
}

/// Constant parameters for the [`PerfectGas`] model.
///
/// These values are typically provided by a fluid's [`PerfectGasFluid`] implementation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerfectGasParameters {
    pub cp: SpecificHeatCapacity,
    pub gamma: Ratio,
}

/// Fluid constants required by the [`PerfectGas`] model.
pub trait PerfectGasFluid {
    /// Returns the constant parameters for use with [`PerfectGas`].
    fn parameters() -> PerfectGasParameters;
}

/// Perfect gas model with constant `cp` and `γ`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerfectGas {
    cp: SpecificHeatCapacity,
    gamma: f64,
}

impl PerfectGas {
    /// Creates a perfect gas model from explicit parameters.
    ///
    /// # Errors
    ///
    /// Returns [`PerfectGasParametersError`] if `cp` is not strictly positive
    /// or if `γ` is not a finite value greater than one.
    pub fn new(parameters: PerfectGasParameters) -> Result<Self, PerfectGasParametersError> {
        let cp = parameters.cp;
        let cp_value = cp.get::<joule_per_kilogram_kelvin>();
        if StrictlyPositive::check(&cp_value).is_err() || !cp_value.is_finite() {
            return Err(PerfectGasParametersError::Cp { cp });
        }

        let gamma = parameters.gamma.get::<ratio>();
        if !(gamma.is_finite() && gamma > 1.0) {
            return Err(PerfectGasParametersError::Gamma { gamma });
        }

        Ok(Self { cp, gamma })
    }

    /// Creates a perfect gas model using constants defined by `Fluid`.
    ///
    /// # Errors
    ///
    /// Returns [`PerfectGasParametersError`] if the fluid's constants are non-physical.
    pub fn from_fluid<Fluid: PerfectGasFluid>() -> Result<Self, PerfectGasParametersError> {
        Self::new(Fluid::parameters())
    }

    /// Creates a perfect gas model without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure `cp > 0` and `γ > 1`.
    /// Violating this invariant produces non-finite cycle results.
    #[must_use]
    pub fn new_unchecked(parameters: PerfectGasParameters) -> Self {
        Self {
            cp: parameters.cp,
            gamma: parameters.gamma.get::<ratio>(),
        }
    }

    /// Dry air with the constants of [`Air`].
    #[must_use]
    pub fn air() -> Self {
        Self::new_unchecked(Air::parameters())
    }

    /// Combustion products with the constants of [`CombustionProducts`].
    #[must_use]
    pub fn combustion_products() -> Self {
        Self::new_unchecked(CombustionProducts::parameters())
    }

    /// Returns the constant-pressure specific heat.
    #[must_use]
    pub fn cp(&self) -> SpecificHeatCapacity {
        self.cp
    }

    /// Returns the ratio of specific heats `γ`.
    #[must_use]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Returns `γ/(γ−1)`, the exponent mapping a temperature ratio to a pressure ratio.
    #[must_use]
    pub fn pressure_exponent(&self) -> f64 {
        self.gamma / (self.gamma - 1.0)
    }

    /// Returns `(γ−1)/γ`, the exponent mapping a pressure ratio to a temperature ratio.
    #[must_use]
    pub fn temperature_exponent(&self) -> f64 {
        (self.gamma - 1.0) / self.gamma
    }

    /// Computes the stagnation-to-static temperature ratio `1 + ½(γ−1)·M²`.
    #[must_use]
    pub fn stagnation_temperature_ratio(&self, mach: f64) -> f64 {
        1.0 + 0.5 * (self.gamma - 1.0) * mach * mach
    }

    /// Computes the isentropic temperature ratio `PR^((γ−1)/γ)` for a pressure ratio.
    #[must_use]
    pub fn isentropic_temperature_ratio(&self, pressure_ratio: f64) -> f64 {
        pressure_ratio.powf(self.temperature_exponent())
    }

    /// Computes the speed of sound `√(γ·R·T)`.
    ///
    /// Returns zero for non-positive temperatures instead of `NaN`.
    #[must_use]
    pub fn speed_of_sound(
        &self,
        temperature: ThermodynamicTemperature,
        gas_constant: SpecificGasConstant,
    ) -> Velocity {
        let t = temperature.get::<kelvin>();
        let r = gas_constant.get::<joule_per_kilogram_kelvin>();
        let a_squared = (self.gamma * r * t).max(0.0);

        Velocity::new::<meter_per_second>(a_squared.sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn air_exponents_match_textbook_values() {
        let air = PerfectGas::from_fluid::<Air>().unwrap();

        assert_relative_eq!(air.pressure_exponent(), 3.5, epsilon = 1e-12);
        assert_relative_eq!(air.temperature_exponent(), 1.0 / 3.5, epsilon = 1e-12);
    }

    #[test]
    fn combustion_products_are_valid() {
        let gas = PerfectGas::from_fluid::<CombustionProducts>().unwrap();

        assert_eq!(gas, PerfectGas::combustion_products());
        assert_relative_eq!(gas.cp().get::<joule_per_kilogram_kelvin>(), 1150.0);
        assert_relative_eq!(gas.gamma(), 1.33);
    }

    #[test]
    fn stagnation_temperature_ratio_at_cruise() {
        let air = PerfectGas::air();

        assert_relative_eq!(air.stagnation_temperature_ratio(0.0), 1.0);
        assert_relative_eq!(
            air.stagnation_temperature_ratio(0.85),
            1.1445,
            epsilon = 1e-12
        );
    }

    #[test]
    fn speed_of_sound_at_sea_level() {
        let air = PerfectGas::air();
        let r = SpecificGasConstant::new::<joule_per_kilogram_kelvin>(287.0);
        let t = ThermodynamicTemperature::new::<kelvin>(288.15);

        let a = air.speed_of_sound(t, r);
        assert_relative_eq!(a.get::<meter_per_second>(), 340.26, epsilon = 0.01);
    }

    #[test]
    fn speed_of_sound_is_zero_below_absolute_zero() {
        let air = PerfectGas::air();
        let r = SpecificGasConstant::new::<joule_per_kilogram_kelvin>(287.0);
        let t = ThermodynamicTemperature::new::<kelvin>(-5.0);

        assert_eq!(air.speed_of_sound(t, r).get::<meter_per_second>(), 0.0);
    }

    #[test]
    fn rejects_non_physical_parameters() {
        let zero_cp = PerfectGasParameters {
            cp: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(0.0),
            gamma: Ratio::new::<ratio>(1.4),
        };
        assert!(matches!(
            PerfectGas::new(zero_cp),
            Err(PerfectGasParametersError::Cp { .. })
        ));

        let unit_gamma = PerfectGasParameters {
            cp: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1005.0),
            gamma: Ratio::new::<ratio>(1.0),
        };
        assert!(matches!(
            PerfectGas::new(unit_gamma),
            Err(PerfectGasParametersError::Gamma { .. })
        ));
    }
}

use thiserror::Error;
use uom::si::f64::{ThermodynamicTemperature, Velocity};

use super::InputError;

/// Errors that make an operating point physically invalid or numerically degenerate.
///
/// Every stage checks its own preconditions and returns the first violation;
/// no partial results are produced.
///
/// A structural failure (stress above yield) and an active thermal throttle are
/// valid computed states and are reported on the output, not as errors.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    /// The engine inputs are non-finite or outside their allowed domain.
    #[error("invalid engine inputs")]
    InvalidInputs(#[from] InputError),

    /// The combustor energy balance denominator `η_b·LHV − cp_gas·TIT` is not positive.
    ///
    /// The fuel cannot supply enough heat to reach the requested turbine inlet
    /// temperature at any fuel-air ratio.
    #[error("combustor energy balance denominator is non-positive: {denominator} J/kg")]
    NonPositiveCombustorDenominator {
        /// Value of `η_b·LHV − cp_gas·TIT`, J/kg.
        denominator: f64,
    },

    /// The solved fuel-air ratio is negative.
    ///
    /// The compressor exit is already hotter than the turbine inlet target.
    #[error("fuel-air ratio is negative: f={fuel_air_ratio}")]
    NegativeFuelAirRatio { fuel_air_ratio: f64 },

    /// The turbine exit temperature is not below the turbine inlet temperature.
    #[error(
        "turbine exit temperature {turbine_exit:?} is not below turbine inlet temperature {turbine_inlet:?}"
    )]
    TurbineEnergyInversion {
        turbine_inlet: ThermodynamicTemperature,
        turbine_exit: ThermodynamicTemperature,
    },

    /// Specific thrust is zero or negative, so SFC is undefined.
    #[error("non-positive net thrust: specific thrust={specific_thrust:?}")]
    NonPositiveNetThrust { specific_thrust: Velocity },
}

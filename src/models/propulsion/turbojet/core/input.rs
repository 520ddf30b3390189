//! Engine inputs and their validation.

use thiserror::Error;
use uom::si::{
    angular_velocity::revolution_per_minute,
    f64::{AngularVelocity, Length, MassRate, Ratio, ThermodynamicTemperature},
    length::foot,
    mass_rate::kilogram_per_second,
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use crate::support::constraint::{
    Constrained, Constraint, ConstraintError, NonNegative, StrictlyPositive, UnitIntervalLowerOpen,
};

use super::{InputLimits, Material};

/// Scalar inputs defining a single steady-state operating point.
///
/// In [`CouplingMode::RpmCoupled`](super::CouplingMode::RpmCoupled) the
/// pressure ratio and mass flow are reference values reached at the coupling's
/// reference speed; otherwise they are used as given.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineInputs {
    pub altitude: Length,
    pub mach: f64,
    pub pressure_ratio: f64,

    /// Requested turbine inlet temperature, before the material limit applies.
    pub turbine_inlet_temperature: ThermodynamicTemperature,

    pub compressor_efficiency: Ratio,
    pub turbine_efficiency: Ratio,
    pub burner_efficiency: Ratio,
    pub mass_flow: MassRate,
    pub speed: AngularVelocity,
    pub material: Material,
}

impl Default for EngineInputs {
    /// Cruise at 35000 ft and Mach 0.85 with an Inconel 718 turbine.
    fn default() -> Self {
        Self {
            altitude: Length::new::<foot>(35_000.0),
            mach: 0.85,
            pressure_ratio: 30.0,
            turbine_inlet_temperature: ThermodynamicTemperature::new::<kelvin>(1650.0),
            compressor_efficiency: Ratio::new::<ratio>(0.88),
            turbine_efficiency: Ratio::new::<ratio>(0.92),
            burner_efficiency: Ratio::new::<ratio>(0.98),
            mass_flow: MassRate::new::<kilogram_per_second>(100.0),
            speed: AngularVelocity::new::<revolution_per_minute>(12_000.0),
            material: Material::Inconel718,
        }
    }
}

impl EngineInputs {
    /// Checks that every input is finite, physical, and inside `limits`.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, checking fields in declaration order.
    pub fn validate(&self, limits: &InputLimits) -> Result<(), InputError> {
        self.checked_efficiencies(limits).map(|_| ())
    }

    /// Validates like [`validate`](Self::validate) and returns the component
    /// efficiencies with their `(0, 1]` invariant attached.
    pub(super) fn checked_efficiencies(
        &self,
        limits: &InputLimits,
    ) -> Result<Efficiencies, InputError> {
        let altitude = self.altitude.get::<foot>();
        check::<NonNegative>("altitude", altitude)?;
        limits.altitude.check("altitude", altitude)?;

        check::<NonNegative>("mach", self.mach)?;
        limits.mach.check("mach", self.mach)?;

        check::<StrictlyPositive>("pressure_ratio", self.pressure_ratio)?;
        limits.pressure_ratio.check("pressure_ratio", self.pressure_ratio)?;

        let tit = self.turbine_inlet_temperature.get::<kelvin>();
        check::<StrictlyPositive>("turbine_inlet_temperature", tit)?;
        limits
            .turbine_inlet_temperature
            .check("turbine_inlet_temperature", tit)?;

        let efficiencies = Efficiencies {
            compressor: efficiency(
                "compressor_efficiency",
                self.compressor_efficiency,
                limits.compressor_efficiency,
            )?,
            turbine: efficiency(
                "turbine_efficiency",
                self.turbine_efficiency,
                limits.turbine_efficiency,
            )?,
            burner: efficiency(
                "burner_efficiency",
                self.burner_efficiency,
                limits.burner_efficiency,
            )?,
        };

        check::<StrictlyPositive>("mass_flow", self.mass_flow.get::<kilogram_per_second>())?;

        let rpm = self.speed.get::<revolution_per_minute>();
        check::<StrictlyPositive>("speed", rpm)?;
        limits.speed.check("speed", rpm)?;

        Ok(efficiencies)
    }
}

/// A component efficiency known to lie in `(0, 1]`.
pub(super) type Efficiency = Constrained<Ratio, UnitIntervalLowerOpen>;

/// Component efficiencies that passed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Efficiencies {
    pub(super) compressor: Efficiency,
    pub(super) turbine: Efficiency,
    pub(super) burner: Efficiency,
}

/// Checks finiteness, then the physical constraint `C`.
fn check<C: Constraint<f64>>(field: &'static str, value: f64) -> Result<(), InputError> {
    if !value.is_finite() {
        return Err(InputError::NotFinite { field });
    }
    C::check(&value).map_err(|source| InputError::Constraint {
        field,
        requirement: C::REQUIREMENT,
        source,
    })
}

/// Checks finiteness, wraps `eta` in its `(0, 1]` invariant, then checks `range`.
fn efficiency(
    field: &'static str,
    eta: Ratio,
    range: InputRange,
) -> Result<Efficiency, InputError> {
    let value = eta.get::<ratio>();
    if !value.is_finite() {
        return Err(InputError::NotFinite { field });
    }
    let eta = UnitIntervalLowerOpen::new(eta).map_err(|source| InputError::Constraint {
        field,
        requirement: <UnitIntervalLowerOpen as Constraint<Ratio>>::REQUIREMENT,
        source,
    })?;
    range.check(field, value)?;
    Ok(eta)
}

const ENDPOINT_TOLERANCE: f64 = 1e-9;

/// Closed range `[min, max]` for one input, in display units.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputRange {
    pub min: f64,
    pub max: f64,
}

impl InputRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns whether `value` lies inside the range, endpoints included.
    ///
    /// Endpoints are widened by a relative `1e-9` so a value that went through
    /// a unit conversion (e.g., rpm to rad/s and back) still matches its endpoint.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        let tol = ENDPOINT_TOLERANCE * self.min.abs().max(self.max.abs()).max(1.0);
        value >= self.min - tol && value <= self.max + tol
    }

    fn check(&self, field: &'static str, value: f64) -> Result<(), InputError> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(InputError::OutOfRange {
                field,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Errors found while validating [`EngineInputs`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InputError {
    #[error("{field} is not finite")]
    NotFinite { field: &'static str },

    #[error("{field} must be {requirement}")]
    Constraint {
        field: &'static str,
        requirement: &'static str,
        #[source]
        source: ConstraintError,
    },

    #[error("{field}={value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(inputs: &EngineInputs) -> Result<(), InputError> {
        inputs.validate(&InputLimits::default())
    }

    #[test]
    fn default_inputs_are_valid() {
        assert_eq!(validate(&EngineInputs::default()), Ok(()));
    }

    #[test]
    fn envelope_corners_are_valid() {
        let sea_level_static = EngineInputs {
            altitude: Length::new::<foot>(0.0),
            mach: 0.0,
            ..EngineInputs::default()
        };
        assert_eq!(validate(&sea_level_static), Ok(()));

        let ceiling = EngineInputs {
            altitude: Length::new::<foot>(50_000.0),
            mach: 2.5,
            speed: AngularVelocity::new::<revolution_per_minute>(18_000.0),
            ..EngineInputs::default()
        };
        assert_eq!(validate(&ceiling), Ok(()));
    }

    #[test]
    fn negative_altitude_is_not_physical() {
        let inputs = EngineInputs {
            altitude: Length::new::<foot>(-100.0),
            ..EngineInputs::default()
        };

        assert_eq!(
            validate(&inputs),
            Err(InputError::Constraint {
                field: "altitude",
                requirement: "zero or greater",
                source: ConstraintError::Negative,
            })
        );
    }

    #[test]
    fn nan_mach_is_not_finite() {
        let inputs = EngineInputs {
            mach: f64::NAN,
            ..EngineInputs::default()
        };

        assert_eq!(
            validate(&inputs),
            Err(InputError::NotFinite { field: "mach" })
        );
    }

    #[test]
    fn zero_efficiency_is_not_physical() {
        let inputs = EngineInputs {
            turbine_efficiency: Ratio::new::<ratio>(0.0),
            ..EngineInputs::default()
        };

        assert!(matches!(
            validate(&inputs),
            Err(InputError::Constraint {
                field: "turbine_efficiency",
                source: ConstraintError::BelowMinimum,
                ..
            })
        ));
    }

    #[test]
    fn overspeed_is_out_of_range() {
        let inputs = EngineInputs {
            speed: AngularVelocity::new::<revolution_per_minute>(20_000.0),
            ..EngineInputs::default()
        };

        assert!(matches!(
            validate(&inputs),
            Err(InputError::OutOfRange { field: "speed", .. })
        ));
    }

    #[test]
    fn zero_mass_flow_is_not_physical() {
        let inputs = EngineInputs {
            mass_flow: MassRate::new::<kilogram_per_second>(0.0),
            ..EngineInputs::default()
        };

        assert!(matches!(
            validate(&inputs),
            Err(InputError::Constraint {
                field: "mass_flow",
                source: ConstraintError::Zero,
                ..
            })
        ));
    }

    #[test]
    fn custom_limits_widen_the_envelope() {
        let inputs = EngineInputs {
            pressure_ratio: 60.0,
            ..EngineInputs::default()
        };
        assert!(validate(&inputs).is_err());

        let limits = InputLimits {
            pressure_ratio: InputRange::new(1.0, 80.0),
            ..InputLimits::default()
        };
        assert_eq!(inputs.validate(&limits), Ok(()));
    }

    #[test]
    fn constraint_errors_name_the_requirement() {
        let inputs = EngineInputs {
            burner_efficiency: Ratio::new::<ratio>(1.2),
            ..EngineInputs::default()
        };
        let error = validate(&inputs).unwrap_err();

        assert_eq!(error.to_string(), "burner_efficiency must be in (0, 1]");
    }

    #[test]
    fn checked_efficiencies_carry_the_inputs() {
        let inputs = EngineInputs::default();
        let checked = inputs.checked_efficiencies(&InputLimits::default()).unwrap();

        assert_eq!(checked.compressor.get(), inputs.compressor_efficiency);
        assert_eq!(checked.turbine.get(), inputs.turbine_efficiency);
        assert_eq!(checked.burner.get(), inputs.burner_efficiency);
    }

    #[test]
    fn nan_efficiency_is_not_finite() {
        let inputs = EngineInputs {
            compressor_efficiency: Ratio::new::<ratio>(f64::NAN),
            ..EngineInputs::default()
        };

        assert_eq!(
            validate(&inputs),
            Err(InputError::NotFinite { field: "compressor_efficiency" })
        );
    }
}

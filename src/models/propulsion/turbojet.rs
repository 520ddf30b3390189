//! Single-spool turbojet performance at a steady operating point.
//!
//! The engine is an ideal Brayton cycle with component efficiencies:
//! standard-atmosphere ambient, isentropic inlet, compressor, combustor,
//! turbine driving the compressor, and a nozzle fully expanded to ambient.
//! A material-limited thermal throttle caps the turbine inlet temperature,
//! and a centrifugal stress check reports the blade margin.
//!
//! Two entry points share the same computation:
//!
//! - [`evaluate`]: one call with the default [`TurbojetConfig`].
//! - [`Turbojet`]: a configured evaluator implementing [`twine_core::Model`].
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_turbojet::models::propulsion::turbojet::{EngineInputs, Turbojet};
//!
//! let engine = Turbojet::default();
//! let out = engine.call(&EngineInputs::default()).unwrap();
//!
//! assert!(out.throttle_active);
//! assert!(out.structural.passes);
//! ```

mod core;

pub use self::core::{
    AtmosphericState, CouplingMode, CycleStations, DomainError, EngineInputs, EvaluationOutput,
    Fuel, InletFidelity, InputError, InputLimits, InputRange, Material, MaterialProperties,
    MaterialTable, PerformanceResult, RpmCoupling, Station, StationState, StructuralResult,
    TurbojetConfig, YieldCurve,
};

use twine_core::Model;

/// Evaluates one operating point with the default [`TurbojetConfig`].
///
/// # Errors
///
/// Returns a [`DomainError`] if the inputs are invalid or the operating point
/// is physically degenerate.
pub fn evaluate(
    inputs: EngineInputs,
    inlet_fidelity: InletFidelity,
    coupling_mode: CouplingMode,
) -> Result<EvaluationOutput, DomainError> {
    self::core::evaluate(
        &inputs,
        inlet_fidelity,
        coupling_mode,
        &TurbojetConfig::default(),
    )
}

/// A turbojet with fixed configuration and model modes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turbojet {
    pub config: TurbojetConfig,
    pub inlet_fidelity: InletFidelity,
    pub coupling_mode: CouplingMode,
}

impl Turbojet {
    /// Creates a turbojet with the default configuration.
    #[must_use]
    pub fn new(inlet_fidelity: InletFidelity, coupling_mode: CouplingMode) -> Self {
        Self {
            config: TurbojetConfig::default(),
            inlet_fidelity,
            coupling_mode,
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(self, config: TurbojetConfig) -> Self {
        Self { config, ..self }
    }

    /// Evaluates one operating point.
    ///
    /// # Errors
    ///
    /// See [`evaluate`].
    pub fn evaluate(&self, inputs: &EngineInputs) -> Result<EvaluationOutput, DomainError> {
        self::core::evaluate(inputs, self.inlet_fidelity, self.coupling_mode, &self.config)
    }
}

impl Model for Turbojet {
    type Input = EngineInputs;
    type Output = EvaluationOutput;
    type Error = DomainError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.evaluate(input)
    }
}

//! Operating-point scheduling and the material thermal throttle.

use uom::si::{
    angular_velocity::revolution_per_minute,
    f64::{MassRate, ThermodynamicTemperature},
};

use super::{AtmosphericState, CouplingMode, EngineInputs, MaterialProperties};

/// Compressor pressure ratio and air mass flow after coupling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Schedule {
    pub(super) pressure_ratio: f64,
    pub(super) mass_flow: MassRate,
}

/// Resolves the pressure ratio and mass flow for `mode`.
pub(super) fn schedule(
    inputs: &EngineInputs,
    ambient: &AtmosphericState,
    mode: CouplingMode,
) -> Schedule {
    match mode {
        CouplingMode::Independent => Schedule {
            pressure_ratio: inputs.pressure_ratio,
            mass_flow: inputs.mass_flow,
        },
        CouplingMode::RpmCoupled(coupling) => {
            let n = inputs.speed.get::<revolution_per_minute>()
                / coupling.reference_speed.get::<revolution_per_minute>();

            let idle = coupling.idle_pressure_ratio;
            let pressure_ratio = idle + n * n * (inputs.pressure_ratio - idle);

            let sigma = if coupling.density_scaling {
                ambient.pressure_ratio_to_sea_level()
            } else {
                1.0
            };

            Schedule {
                pressure_ratio,
                mass_flow: inputs.mass_flow * (n * sigma),
            }
        }
    }
}

/// Turbine inlet temperature after the material limit is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct ThermalThrottle {
    pub(super) requested: ThermodynamicTemperature,
    pub(super) actual: ThermodynamicTemperature,

    /// Set only when the limit is strictly below the request.
    pub(super) active: bool,
}

impl ThermalThrottle {
    /// Clamps `requested` to the material's maximum turbine inlet temperature.
    pub(super) fn apply(requested: ThermodynamicTemperature, material: &MaterialProperties) -> Self {
        let limit = material.max_turbine_inlet_temperature;
        let active = limit < requested;

        Self {
            requested,
            actual: if active { limit } else { requested },
            active,
        }
    }
}

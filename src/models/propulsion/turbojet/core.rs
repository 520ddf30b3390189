//! Single-pass Brayton-cycle evaluation of a turbojet.
//!
//! The stages run in a fixed order, each consuming the previous stage's
//! result:
//!
//! 1. Atmosphere
//! 2. Inlet ram compression
//! 3. Speed coupling and thermal throttle
//! 4. Compressor
//! 5. Combustor
//! 6. Turbine
//! 7. Nozzle and thrust
//! 8. Structural margin
//! 9. Emissions
//!
//! Every stage checks its own preconditions. The first failure ends the
//! evaluation with a [`DomainError`]; no partial output is returned.

mod atmosphere;
mod combustor;
mod compressor;
mod config;
mod coupling;
mod emissions;
mod error;
mod inlet;
mod input;
mod material;
mod modes;
mod nozzle;
mod results;
mod structural;
mod turbine;

#[cfg(test)]
mod test_support;

pub use atmosphere::AtmosphericState;
pub use config::{Fuel, InputLimits, TurbojetConfig};
pub use error::DomainError;
pub use input::{EngineInputs, InputError, InputRange};
pub use material::{Material, MaterialProperties, MaterialTable, YieldCurve};
pub use modes::{CouplingMode, InletFidelity, RpmCoupling};
pub use results::{
    CycleStations, EvaluationOutput, PerformanceResult, Station, StationState, StructuralResult,
};

use tracing::{debug, debug_span, info};
use uom::si::{
    angular_velocity::revolution_per_minute,
    available_energy::joule_per_kilogram,
    mass_rate::kilogram_per_second,
    pressure::{megapascal, pascal},
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::support::units::milligrams_per_newton_second;

use coupling::{ThermalThrottle, schedule};

/// Evaluates one operating point.
///
/// Inputs are validated against `config.limits` before any stage runs.
///
/// # Errors
///
/// Returns a [`DomainError`] if the inputs are invalid or any stage reaches a
/// physically invalid or numerically degenerate state.
pub fn evaluate(
    inputs: &EngineInputs,
    inlet_fidelity: InletFidelity,
    coupling_mode: CouplingMode,
    config: &TurbojetConfig,
) -> Result<EvaluationOutput, DomainError> {
    let span = debug_span!(
        "turbojet_evaluate",
        ?inlet_fidelity,
        ?coupling_mode,
        material = ?inputs.material
    );
    let _guard = span.enter();

    run(inputs, inlet_fidelity, coupling_mode, config)
        .inspect_err(|error| debug!(%error, "evaluation failed"))
}

fn run(
    inputs: &EngineInputs,
    inlet_fidelity: InletFidelity,
    coupling_mode: CouplingMode,
    config: &TurbojetConfig,
) -> Result<EvaluationOutput, DomainError> {
    let efficiencies = inputs.checked_efficiencies(&config.limits)?;

    let atmosphere = AtmosphericState::at_altitude(inputs.altitude);
    debug!(
        t_amb_k = atmosphere.temperature.get::<kelvin>(),
        p_amb_pa = atmosphere.pressure.get::<pascal>(),
        "atmosphere"
    );

    let inlet_exit = inlet::ram_compression(&atmosphere, inputs.mach, &config.air, inlet_fidelity);
    debug!(
        t2_k = inlet_exit.temperature.get::<kelvin>(),
        p2_pa = inlet_exit.pressure.get::<pascal>(),
        "inlet"
    );

    let operating = schedule(inputs, &atmosphere, coupling_mode);
    let throttle = ThermalThrottle::apply(
        inputs.turbine_inlet_temperature,
        config.materials.get(inputs.material),
    );
    debug!(
        pressure_ratio = operating.pressure_ratio,
        mass_flow_kg_s = operating.mass_flow.get::<kilogram_per_second>(),
        "coupling"
    );
    if throttle.active {
        info!(
            material = ?inputs.material,
            requested_tit_k = throttle.requested.get::<kelvin>(),
            actual_tit_k = throttle.actual.get::<kelvin>(),
            "thermal throttle active"
        );
    }

    let compression = compressor::compress(
        &inlet_exit,
        operating.pressure_ratio,
        efficiencies.compressor,
        &config.air,
    );
    debug!(
        t3_k = compression.exit.temperature.get::<kelvin>(),
        p3_pa = compression.exit.pressure.get::<pascal>(),
        work_j_kg = compression.work.get::<joule_per_kilogram>(),
        "compressor"
    );

    let fuel_air_ratio = combustor::fuel_air_ratio(
        compression.exit.temperature,
        throttle.actual,
        efficiencies.burner,
        &config.fuel,
        &config.air,
        &config.combustion_gas,
    )?;
    let combustor_exit = StationState {
        temperature: throttle.actual,
        pressure: compression.exit.pressure,
    };
    debug!(fuel_air_ratio, "combustor");

    let expansion = turbine::expand(
        &combustor_exit,
        compression.work,
        fuel_air_ratio,
        efficiencies.turbine,
        &config.combustion_gas,
    )?;
    debug!(
        t5_k = expansion.exit.temperature.get::<kelvin>(),
        p5_pa = expansion.exit.pressure.get::<pascal>(),
        "turbine"
    );

    let flight_velocity =
        nozzle::flight_velocity(&atmosphere, inputs.mach, &config.air, config.air_gas_constant);
    let exhaust_velocity =
        nozzle::exhaust_velocity(&expansion.exit, atmosphere.pressure, &config.combustion_gas);
    let thrust = nozzle::thrust(
        fuel_air_ratio,
        exhaust_velocity,
        flight_velocity,
        operating.mass_flow,
    )?;
    debug!(
        v_flight_m_s = flight_velocity.get::<meter_per_second>(),
        v_exit_m_s = exhaust_velocity.get::<meter_per_second>(),
        specific_thrust_m_s = thrust.specific_thrust.get::<meter_per_second>(),
        sfc_mg_n_s = milligrams_per_newton_second(thrust.sfc),
        "nozzle"
    );

    let yield_strength = config
        .materials
        .get(inputs.material)
        .yield_curve
        .yield_strength(throttle.actual);
    let structural = structural::assess(structural::centrifugal_stress(inputs.speed), yield_strength);
    debug!(
        stress_mpa = structural.stress.get::<megapascal>(),
        yield_mpa = structural.yield_strength.get::<megapascal>(),
        safety_factor = structural.safety_factor,
        "structural"
    );
    if !structural.passes {
        info!(
            material = ?inputs.material,
            speed_rpm = inputs.speed.get::<revolution_per_minute>(),
            safety_factor = structural.safety_factor,
            "blade stress exceeds yield strength"
        );
    }

    let emissions = emissions::emissions(operating.mass_flow, fuel_air_ratio, &config.fuel);

    Ok(EvaluationOutput {
        atmosphere,
        stations: CycleStations {
            ambient: StationState {
                temperature: atmosphere.temperature,
                pressure: atmosphere.pressure,
            },
            inlet_exit,
            compressor_exit: compression.exit,
            combustor_exit,
            turbine_exit: expansion.exit,
        },
        pressure_ratio: operating.pressure_ratio,
        mass_flow: operating.mass_flow,
        requested_turbine_inlet_temperature: throttle.requested,
        throttle_active: throttle.active,
        fuel_air_ratio,
        compressor_work: compression.work,
        turbine_work: expansion.work,
        performance: PerformanceResult {
            flight_velocity,
            exhaust_velocity,
            specific_thrust: thrust.specific_thrust,
            net_thrust: thrust.net_thrust,
            sfc: thrust.sfc,
            fuel_flow: emissions.fuel_flow,
            co2_rate: emissions.co2_rate,
        },
        structural,
    })
}

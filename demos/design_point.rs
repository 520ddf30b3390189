//! Evaluates the reference cruise point for every blade material in both
//! coupling modes and prints a summary for each.
//!
//! Run with `RUST_LOG=debug` to see every stage.

use twine_core::Model;
use twine_turbojet::models::propulsion::turbojet::{
    CouplingMode, EngineInputs, EvaluationOutput, InletFidelity, Material, RpmCoupling, Turbojet,
};
use uom::si::{
    force::kilonewton, mass_rate::kilogram_per_second, pressure::kilopascal,
    pressure::megapascal, thermodynamic_temperature::kelvin, velocity::meter_per_second,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let modes = [
        ("independent", CouplingMode::Independent),
        ("rpm-coupled", CouplingMode::RpmCoupled(RpmCoupling::default())),
    ];

    for (mode_name, coupling_mode) in modes {
        let engine = Turbojet::new(InletFidelity::FullIsentropic, coupling_mode);

        for material in Material::ALL {
            let inputs = EngineInputs {
                material,
                ..EngineInputs::default()
            };

            println!("=== {material:?}, {mode_name} ===");
            match engine.call(&inputs) {
                Ok(out) => print_output(&out),
                Err(error) => println!("evaluation failed: {error}"),
            }
            println!();
        }
    }
}

fn print_output(out: &EvaluationOutput) {
    if out.throttle_active {
        println!(
            "THROTTLE ACTIVE: TIT limited from {:.0} K to {:.0} K",
            out.requested_turbine_inlet_temperature.get::<kelvin>(),
            out.turbine_inlet_temperature().get::<kelvin>(),
        );
    }
    if !out.structural.passes {
        println!(
            "STRUCTURAL FAIL: stress {:.0} MPa exceeds yield {:.0} MPa",
            out.structural.stress.get::<megapascal>(),
            out.structural.yield_strength.get::<megapascal>(),
        );
    }

    let p = &out.performance;
    println!(
        "net thrust      {:>10.2} kN",
        p.net_thrust.get::<kilonewton>()
    );
    println!(
        "specific thrust {:>10.1} N·s/kg",
        p.specific_thrust.get::<meter_per_second>()
    );
    println!("SFC             {:>10.2} mg/(N·s)", p.sfc_mg_per_newton_second());
    println!("fuel-air ratio  {:>10.4}", out.fuel_air_ratio);
    println!(
        "exhaust speed   {:>10.1} m/s",
        p.exhaust_velocity.get::<meter_per_second>()
    );
    println!("fuel flow       {:>10.0} kg/h", p.fuel_flow_kg_per_hour());
    println!("CO2             {:>10.0} kg/h", p.co2_kg_per_hour());
    println!(
        "air mass flow   {:>10.1} kg/s (PR {:.1})",
        out.mass_flow.get::<kilogram_per_second>(),
        out.pressure_ratio
    );
    println!("safety factor   {:>10.2}", out.structural.safety_factor);

    println!("station      T (K)     p (kPa)");
    for (station, state) in out.stations.iter() {
        println!(
            "{:>7} {:>10.1} {:>11.2}",
            station.label(),
            state.temperature.get::<kelvin>(),
            state.pressure.get::<kilopascal>(),
        );
    }
}

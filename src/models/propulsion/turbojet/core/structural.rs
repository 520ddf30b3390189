//! Centrifugal stress margin of the turbine blades.

use uom::si::{
    angular_velocity::revolution_per_minute,
    f64::{AngularVelocity, Pressure},
    pressure::megapascal,
};

use super::StructuralResult;

/// Blade root stress at 1000 rpm; stress scales with the square of speed.
const STRESS_AT_1000_RPM_MPA: f64 = 2.5;

/// Returns the blade stress `(rpm/1000)²·2.5 MPa`.
pub(super) fn centrifugal_stress(speed: AngularVelocity) -> Pressure {
    let krpm = speed.get::<revolution_per_minute>() / 1000.0;
    Pressure::new::<megapascal>(krpm * krpm * STRESS_AT_1000_RPM_MPA)
}

/// Compares `stress` against `yield_strength`.
///
/// A blade loaded exactly to yield passes.
pub(super) fn assess(stress: Pressure, yield_strength: Pressure) -> StructuralResult {
    StructuralResult {
        stress,
        yield_strength,
        safety_factor: yield_strength.get::<megapascal>() / stress.get::<megapascal>(),
        passes: stress <= yield_strength,
    }
}

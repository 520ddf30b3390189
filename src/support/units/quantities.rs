use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P1, P2, Z0},
};

/// Specific gas constant, J/kg·K in SI.
pub type SpecificGasConstant = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Specific enthalpy, J/kg in SI.
///
/// Also used for specific shaft work across the compressor and turbine.
pub type SpecificEnthalpy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Thrust-specific fuel consumption, kg/(N·s) (equivalently s/m) in SI.
pub type ThrustSpecificFuelConsumption = Quantity<ISQ<N1, Z0, P1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Returns a thrust-specific fuel consumption in mg/(N·s).
#[must_use]
pub fn milligrams_per_newton_second(sfc: ThrustSpecificFuelConsumption) -> f64 {
    sfc.value * 1.0e6
}

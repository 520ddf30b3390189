use uom::si::{
    f64::{Ratio, SpecificHeatCapacity},
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
};

use crate::support::thermo::{PerfectGasFluid, PerfectGasParameters};

/// Canonical identifier for kerosene combustion products downstream of the burner.
///
/// The higher `cp` and lower `γ` relative to [`Air`](super::Air) account for
/// the hot, water- and CO₂-laden gas driving the turbine and nozzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CombustionProducts;

impl PerfectGasFluid for CombustionProducts {
    fn parameters() -> PerfectGasParameters {
        PerfectGasParameters {
            cp: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1150.0),
            gamma: Ratio::new::<ratio>(1.33),
        }
    }
}

use uom::si::{
    f64::{Ratio, SpecificHeatCapacity},
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
};

use crate::support::thermo::{PerfectGasFluid, PerfectGasParameters};

/// Canonical identifier for dry air upstream of the combustor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Air;

impl PerfectGasFluid for Air {
    fn parameters() -> PerfectGasParameters {
        PerfectGasParameters {
            cp: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1005.0),
            gamma: Ratio::new::<ratio>(1.4),
        }
    }
}

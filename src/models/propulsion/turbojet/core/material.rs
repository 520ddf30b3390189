//! Turbine blade materials and their thermal and strength limits.

use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::megapascal,
    thermodynamic_temperature::kelvin,
};

/// Turbine blade material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Material {
    StainlessSteel = 0,
    Inconel718 = 1,
    Cmsx4Superalloy = 2,
}

impl Material {
    /// All materials, ordered from least to most temperature capable.
    pub const ALL: [Self; 3] = [Self::StainlessSteel, Self::Inconel718, Self::Cmsx4Superalloy];

    fn index(self) -> usize {
        self as usize
    }
}

/// Temperature de-rating curve for a material's yield strength.
///
/// The curve is flat at `base` up to `reference_temperature`, then falls
/// linearly at `slope_mpa_per_kelvin` and is floored at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YieldCurve {
    pub base: Pressure,
    pub reference_temperature: ThermodynamicTemperature,
    pub slope_mpa_per_kelvin: f64,
}

impl YieldCurve {
    /// Returns the yield strength at the given metal temperature.
    #[must_use]
    pub fn yield_strength(&self, temperature: ThermodynamicTemperature) -> Pressure {
        let excess = temperature.get::<kelvin>() - self.reference_temperature.get::<kelvin>();
        if excess <= 0.0 {
            return self.base;
        }

        let derated = self.base.get::<megapascal>() - self.slope_mpa_per_kelvin * excess;
        Pressure::new::<megapascal>(derated.max(0.0))
    }
}

/// Fixed limits for one blade material.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaterialProperties {
    /// Highest turbine inlet temperature the material tolerates.
    pub max_turbine_inlet_temperature: ThermodynamicTemperature,
    pub yield_curve: YieldCurve,
}

/// Lookup from [`Material`] to its [`MaterialProperties`].
///
/// Entries are stored in [`Material::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaterialTable {
    entries: [MaterialProperties; 3],
}

impl MaterialTable {
    /// Creates a table from properties given in [`Material::ALL`] order.
    #[must_use]
    pub fn new(entries: [MaterialProperties; 3]) -> Self {
        Self { entries }
    }

    /// Returns the properties of `material`.
    #[must_use]
    pub fn get(&self, material: Material) -> &MaterialProperties {
        &self.entries[material.index()]
    }
}

impl Default for MaterialTable {
    fn default() -> Self {
        Self::new([
            properties(1100.0, 500.0, 300.0, 0.8),
            properties(1400.0, 1000.0, 400.0, 0.5),
            properties(1700.0, 1200.0, 600.0, 0.3),
        ])
    }
}

fn properties(
    max_tit_kelvin: f64,
    base_mpa: f64,
    reference_kelvin: f64,
    slope_mpa_per_kelvin: f64,
) -> MaterialProperties {
    MaterialProperties {
        max_turbine_inlet_temperature: ThermodynamicTemperature::new::<kelvin>(max_tit_kelvin),
        yield_curve: YieldCurve {
            base: Pressure::new::<megapascal>(base_mpa),
            reference_temperature: ThermodynamicTemperature::new::<kelvin>(reference_kelvin),
            slope_mpa_per_kelvin,
        },
    }
}

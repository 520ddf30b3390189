//! Fuel burn and CO₂ emissions.

use uom::si::{f64::MassRate, ratio::ratio};

use super::Fuel;

/// Fuel and CO₂ mass flow rates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Emissions {
    pub(super) fuel_flow: MassRate,
    pub(super) co2_rate: MassRate,
}

/// Returns `m_fuel = f·m_air` and `m_CO₂ = EI·m_fuel`.
pub(super) fn emissions(mass_flow: MassRate, fuel_air_ratio: f64, fuel: &Fuel) -> Emissions {
    let fuel_flow = mass_flow * fuel_air_ratio;

    Emissions {
        fuel_flow,
        co2_rate: fuel_flow * fuel.co2_emission_index.get::<ratio>(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::mass_rate::kilogram_per_second;

    use crate::models::propulsion::turbojet::core::test_support::CRUISE_FUEL_AIR_RATIO;

    #[test]
    fn cruise_emissions() {
        let e = emissions(
            MassRate::new::<kilogram_per_second>(100.0),
            CRUISE_FUEL_AIR_RATIO,
            &Fuel::default(),
        );

        let per_hour = |rate: MassRate| rate.get::<kilogram_per_second>() * 3600.0;
        assert_relative_eq!(per_hour(e.fuel_flow), 7891.029_343, epsilon = 1e-5);
        assert_relative_eq!(per_hour(e.co2_rate), 24_856.742_431, epsilon = 1e-5);
    }

    #[test]
    fn no_fuel_no_co2() {
        let e = emissions(
            MassRate::new::<kilogram_per_second>(100.0),
            0.0,
            &Fuel::default(),
        );

        assert_eq!(e.co2_rate.get::<kilogram_per_second>(), 0.0);
    }
}

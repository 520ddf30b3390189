//! Turbine stage.
//!
//! The turbine drives the compressor and nothing else, so its specific work
//! per unit air mass flow equals the compressor's.

use uom::si::{
    available_energy::joule_per_kilogram,
    f64::ThermodynamicTemperature,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    thermo::PerfectGas,
    units::{SpecificEnthalpy, TemperatureDifference},
};

use super::{DomainError, StationState, input::Efficiency};

/// Turbine exit state and the specific work extracted per unit air mass flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Expansion {
    pub(super) exit: StationState,
    pub(super) work: SpecificEnthalpy,
}

/// Expands the combustor exit gas until it has supplied `compressor_work`.
///
/// - `T5 = TIT − w_c / ((1+f)·cp_gas)`
/// - `p5 = p4·(T5/TIT)^(γ/((γ−1)·η_t))`
///
/// # Errors
///
/// Returns [`DomainError::TurbineEnergyInversion`] if `T5 ≥ TIT`.
pub(super) fn expand(
    inlet: &StationState,
    compressor_work: SpecificEnthalpy,
    fuel_air_ratio: f64,
    efficiency: Efficiency,
    gas: &PerfectGas,
) -> Result<Expansion, DomainError> {
    let tit = inlet.temperature.get::<kelvin>();
    let cp_gas = gas.cp().get::<joule_per_kilogram_kelvin>();
    let gas_flow_per_air_flow = 1.0 + fuel_air_ratio;

    let t5 = tit - compressor_work.get::<joule_per_kilogram>() / (gas_flow_per_air_flow * cp_gas);
    let turbine_exit = ThermodynamicTemperature::new::<kelvin>(t5);

    if t5.is_nan() || t5 >= tit {
        return Err(DomainError::TurbineEnergyInversion {
            turbine_inlet: inlet.temperature,
            turbine_exit,
        });
    }

    let exponent = gas.pressure_exponent() / efficiency.get().get::<ratio>();
    let exit = StationState {
        temperature: turbine_exit,
        pressure: inlet.pressure * (t5 / tit).powf(exponent),
    };

    Ok(Expansion {
        exit,
        work: gas.cp() * inlet.temperature.minus(turbine_exit) * gas_flow_per_air_flow,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::pressure::pascal;

    use crate::models::propulsion::turbojet::core::test_support::{
        CRUISE_FUEL_AIR_RATIO, cruise_compressor_exit, eta, state,
    };

    fn cruise_combustor_exit() -> StationState {
        state(1400.0, cruise_compressor_exit().pressure.get::<pascal>())
    }

    fn work(joules_per_kg: f64) -> SpecificEnthalpy {
        SpecificEnthalpy::new::<joule_per_kilogram>(joules_per_kg)
    }

    #[test]
    fn cruise_expansion() {
        let e = expand(
            &cruise_combustor_exit(),
            work(469_875.418_984_226),
            CRUISE_FUEL_AIR_RATIO,
            eta(0.92),
            &PerfectGas::combustion_products(),
        )
        .unwrap();

        assert_relative_eq!(e.exit.temperature.get::<kelvin>(), 1000.176_618, epsilon = 1e-5);
        assert_relative_eq!(e.exit.pressure.get::<pascal>(), 263_167.03, epsilon = 0.01);
    }

    #[test]
    fn turbine_work_balances_compressor_work() {
        let w_c = work(469_875.418_984_226);
        let e = expand(
            &cruise_combustor_exit(),
            w_c,
            CRUISE_FUEL_AIR_RATIO,
            eta(0.92),
            &PerfectGas::combustion_products(),
        )
        .unwrap();

        assert_relative_eq!(
            e.work.get::<joule_per_kilogram>(),
            w_c.get::<joule_per_kilogram>(),
            max_relative = 1e-9
        );
    }

    #[test]
    fn lower_efficiency_needs_more_pressure_drop() {
        let gas = PerfectGas::combustion_products();
        let w_c = work(469_875.418_984_226);
        let inlet = cruise_combustor_exit();

        let good = expand(&inlet, w_c, CRUISE_FUEL_AIR_RATIO, eta(0.95), &gas).unwrap();
        let poor = expand(&inlet, w_c, CRUISE_FUEL_AIR_RATIO, eta(0.75), &gas).unwrap();

        assert_eq!(good.exit.temperature, poor.exit.temperature);
        assert!(poor.exit.pressure < good.exit.pressure);
    }

    #[test]
    fn zero_work_is_an_energy_inversion() {
        let result = expand(
            &cruise_combustor_exit(),
            work(0.0),
            0.02,
            eta(0.9),
            &PerfectGas::combustion_products(),
        );

        assert!(matches!(
            result,
            Err(DomainError::TurbineEnergyInversion { .. })
        ));
    }

    #[test]
    fn negative_work_is_an_energy_inversion() {
        let result = expand(
            &cruise_combustor_exit(),
            work(-10_000.0),
            0.02,
            eta(0.9),
            &PerfectGas::combustion_products(),
        );

        match result {
            Err(DomainError::TurbineEnergyInversion {
                turbine_inlet,
                turbine_exit,
            }) => assert!(turbine_exit > turbine_inlet),
            other => panic!("expected TurbineEnergyInversion, got {other:?}"),
        }
    }

    #[test]
    fn undefined_work_is_an_energy_inversion() {
        let result = expand(
            &cruise_combustor_exit(),
            work(f64::NAN),
            0.02,
            eta(0.9),
            &PerfectGas::combustion_products(),
        );

        match result {
            Err(DomainError::TurbineEnergyInversion { turbine_exit, .. }) => {
                assert!(turbine_exit.get::<kelvin>().is_nan());
            }
            other => panic!("expected TurbineEnergyInversion, got {other:?}"),
        }
    }
}

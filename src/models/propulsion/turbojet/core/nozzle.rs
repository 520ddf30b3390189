//! Nozzle expansion and thrust.

use uom::si::{
    f64::{Force, MassRate, Pressure, Ratio, Velocity},
    pressure::pascal,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::support::{
    thermo::PerfectGas,
    units::{SpecificGasConstant, ThrustSpecificFuelConsumption},
};

use super::{AtmosphericState, DomainError, StationState};

/// Returns the flight velocity `M·√(γ·R·T_amb)`.
pub(super) fn flight_velocity(
    ambient: &AtmosphericState,
    mach: f64,
    air: &PerfectGas,
    gas_constant: SpecificGasConstant,
) -> Velocity {
    air.speed_of_sound(ambient.temperature, gas_constant) * mach
}

/// Returns the exit velocity of a nozzle fully expanding `turbine_exit` to `ambient_pressure`.
///
/// `v_e = √(2·cp·T5·(1 − (p_amb/p5)^((γ−1)/γ)))`
///
/// The radicand is clamped at zero, so a nozzle whose back pressure is at or
/// above the turbine exit pressure produces no jet rather than `NaN`.
pub(super) fn exhaust_velocity(
    turbine_exit: &StationState,
    ambient_pressure: Pressure,
    gas: &PerfectGas,
) -> Velocity {
    let cp = gas.cp().get::<joule_per_kilogram_kelvin>();
    let t5 = turbine_exit.temperature.get::<kelvin>();
    let back_pressure_ratio = ambient_pressure.get::<pascal>() / turbine_exit.pressure.get::<pascal>();

    let expansion = 1.0 - back_pressure_ratio.powf(gas.temperature_exponent());
    let radicand = (2.0 * cp * t5 * expansion).max(0.0);

    Velocity::new::<meter_per_second>(radicand.sqrt())
}

/// Thrust produced per unit and total air mass flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Thrust {
    pub(super) specific_thrust: Velocity,
    pub(super) net_thrust: Force,
    pub(super) sfc: ThrustSpecificFuelConsumption,
}

/// Computes thrust and SFC from the jet and flight velocities.
///
/// - `F/m_dot = (1+f)·v_e − v_flight`
/// - `SFC = f / (F/m_dot)`
///
/// # Errors
///
/// Returns [`DomainError::NonPositiveNetThrust`] if the specific thrust is not
/// positive, since SFC is then undefined.
pub(super) fn thrust(
    fuel_air_ratio: f64,
    exhaust_velocity: Velocity,
    flight_velocity: Velocity,
    mass_flow: MassRate,
) -> Result<Thrust, DomainError> {
    let specific_thrust = exhaust_velocity * (1.0 + fuel_air_ratio) - flight_velocity;
    let per_unit_flow = specific_thrust.get::<meter_per_second>();
    if per_unit_flow.is_nan() || per_unit_flow <= 0.0 {
        return Err(DomainError::NonPositiveNetThrust { specific_thrust });
    }

    let sfc: ThrustSpecificFuelConsumption = Ratio::new::<ratio>(fuel_air_ratio) / specific_thrust;
    let net_thrust: Force = mass_flow * specific_thrust;

    Ok(Thrust {
        specific_thrust,
        net_thrust,
        sfc,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::Length, force::newton, length::foot, mass_rate::kilogram_per_second,
    };

    use crate::{
        models::propulsion::turbojet::core::test_support::{CRUISE_FUEL_AIR_RATIO, state},
        support::units::milligrams_per_newton_second,
    };

    fn r_air() -> SpecificGasConstant {
        SpecificGasConstant::new::<joule_per_kilogram_kelvin>(287.0)
    }

    fn cruise_turbine_exit() -> StationState {
        state(1000.176_618_139_612, 263_167.026_165_129)
    }

    fn cruise_ambient() -> AtmosphericState {
        AtmosphericState::at_altitude(Length::new::<foot>(35_000.0))
    }

    fn mps(value: f64) -> Velocity {
        Velocity::new::<meter_per_second>(value)
    }

    #[test]
    fn cruise_flight_velocity() {
        let v = flight_velocity(&cruise_ambient(), 0.85, &PerfectGas::air(), r_air());

        assert_relative_eq!(v.get::<meter_per_second>(), 252.056_074, epsilon = 1e-5);
    }

    #[test]
    fn static_flight_velocity_is_zero() {
        let v = flight_velocity(&cruise_ambient(), 0.0, &PerfectGas::air(), r_air());

        assert_eq!(v.get::<meter_per_second>(), 0.0);
    }

    #[test]
    fn cruise_exhaust_velocity() {
        let v = exhaust_velocity(
            &cruise_turbine_exit(),
            cruise_ambient().pressure,
            &PerfectGas::combustion_products(),
        );

        assert_relative_eq!(v.get::<meter_per_second>(), 1016.031_148, epsilon = 1e-4);
    }

    #[test]
    fn back_pressure_at_or_above_exit_pressure_gives_zero_velocity() {
        let gas = PerfectGas::combustion_products();
        let exit = state(900.0, 20_000.0);

        for p_amb in [20_000.0, 25_000.0, 1.0e6] {
            let v = exhaust_velocity(&exit, Pressure::new::<pascal>(p_amb), &gas);
            assert_eq!(v.get::<meter_per_second>(), 0.0);
        }
    }

    #[test]
    fn cruise_thrust_and_sfc() {
        let t = thrust(
            CRUISE_FUEL_AIR_RATIO,
            mps(1016.031_147_609_336),
            mps(252.056_073_969_663),
            MassRate::new::<kilogram_per_second>(100.0),
        )
        .unwrap();

        assert_relative_eq!(t.specific_thrust.get::<meter_per_second>(), 786.246, epsilon = 1e-3);
        assert_relative_eq!(t.net_thrust.get::<newton>(), 78_624.6, epsilon = 0.1);
        assert_relative_eq!(milligrams_per_newton_second(t.sfc), 27.878_712, epsilon = 1e-5);
    }

    #[test]
    fn zero_jet_in_flight_is_negative_thrust() {
        let result = thrust(
            0.02,
            mps(0.0),
            mps(250.0),
            MassRate::new::<kilogram_per_second>(100.0),
        );

        assert!(matches!(
            result,
            Err(DomainError::NonPositiveNetThrust { specific_thrust })
                if specific_thrust.get::<meter_per_second>() < 0.0
        ));
    }

    #[test]
    fn zero_jet_at_rest_is_zero_thrust() {
        let result = thrust(
            0.0,
            mps(0.0),
            mps(0.0),
            MassRate::new::<kilogram_per_second>(100.0),
        );

        assert!(matches!(result, Err(DomainError::NonPositiveNetThrust { .. })));
    }

    #[test]
    fn undefined_jet_is_not_thrust() {
        let result = thrust(
            0.02,
            mps(f64::NAN),
            mps(250.0),
            MassRate::new::<kilogram_per_second>(100.0),
        );

        assert!(matches!(
            result,
            Err(DomainError::NonPositiveNetThrust { specific_thrust })
                if specific_thrust.get::<meter_per_second>().is_nan()
        ));
    }
}

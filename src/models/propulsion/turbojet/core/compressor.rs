//! Compressor stage.

use uom::si::{
    f64::ThermodynamicTemperature,
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    thermo::PerfectGas,
    units::{SpecificEnthalpy, TemperatureDifference},
};

use super::{StationState, input::Efficiency};

/// Compressor exit state and the specific work absorbed to reach it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Compression {
    pub(super) exit: StationState,
    pub(super) work: SpecificEnthalpy,
}

/// Compresses `inlet` through `pressure_ratio` with isentropic efficiency `efficiency`.
///
/// - `T3s = T2·PR^((γ−1)/γ)`
/// - `T3 = T2 + (T3s − T2)/η_c`
/// - `p3 = p2·PR`
///
/// A pressure ratio below one is not an error; the stage then expands.
pub(super) fn compress(
    inlet: &StationState,
    pressure_ratio: f64,
    efficiency: Efficiency,
    air: &PerfectGas,
) -> Compression {
    let t2 = inlet.temperature.get::<kelvin>();
    let t3_ideal = t2 * air.isentropic_temperature_ratio(pressure_ratio);
    let t3 = t2 + (t3_ideal - t2) / efficiency.get().get::<ratio>();

    let exit = StationState {
        temperature: ThermodynamicTemperature::new::<kelvin>(t3),
        pressure: inlet.pressure * pressure_ratio,
    };

    Compression {
        exit,
        work: air.cp() * exit.temperature.minus(inlet.temperature),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{available_energy::joule_per_kilogram, pressure::pascal};

    use crate::models::propulsion::turbojet::core::test_support::{
        cruise_compressor_exit, cruise_inlet_exit, eta,
    };

    #[test]
    fn cruise_compression() {
        let c = compress(&cruise_inlet_exit(), 30.0, eta(0.88), &PerfectGas::air());
        let expected = cruise_compressor_exit();

        assert_relative_eq!(
            c.exit.temperature.get::<kelvin>(),
            expected.temperature.get::<kelvin>(),
            epsilon = 1e-9
        );
        assert_relative_eq!(
            c.exit.pressure.get::<pascal>(),
            expected.pressure.get::<pascal>(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            c.work.get::<joule_per_kilogram>(),
            469_875.418_984,
            epsilon = 1e-3
        );
    }

    #[test]
    fn losses_raise_exit_temperature() {
        let air = PerfectGas::air();
        let ideal = compress(&cruise_inlet_exit(), 30.0, eta(1.0), &air);
        let lossy = compress(&cruise_inlet_exit(), 30.0, eta(0.8), &air);

        assert!(lossy.exit.temperature > ideal.exit.temperature);
        assert_eq!(lossy.exit.pressure, ideal.exit.pressure);
        assert!(lossy.work > ideal.work);
    }

    #[test]
    fn unit_pressure_ratio_does_no_work() {
        let inlet = cruise_inlet_exit();
        let c = compress(&inlet, 1.0, eta(0.88), &PerfectGas::air());

        assert_eq!(c.exit, inlet);
        assert_eq!(c.work.get::<joule_per_kilogram>(), 0.0);
    }

    #[test]
    fn pressure_ratio_below_one_expands() {
        let inlet = cruise_inlet_exit();
        let c = compress(&inlet, 0.5, eta(0.88), &PerfectGas::air());

        assert!(c.exit.temperature < inlet.temperature);
        assert!(c.work.get::<joule_per_kilogram>() < 0.0);
    }
}

use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// [`uom`] does not allow subtracting two [`ThermodynamicTemperature`] values
/// directly; see [#380](https://github.com/iliekturtles/uom/issues/380).
/// This trait provides [`minus`](Self::minus), which returns the difference
/// as a [`TemperatureInterval`].
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn compressor_temperature_rise() {
        let t2 = ThermodynamicTemperature::new::<abs_kelvin>(250.0);
        let t3 = ThermodynamicTemperature::new::<abs_kelvin>(718.0);

        assert_relative_eq!(t3.minus(t2).get::<delta_kelvin>(), 468.0);
        assert_relative_eq!(t2.minus(t3).get::<delta_kelvin>(), -468.0);
    }
}

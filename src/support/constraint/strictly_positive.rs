use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError, ConstraintResult};

/// Greater than zero.
///
/// For quantities that lose meaning at zero: mass flow, shaft speed, pressure
/// ratio, absolute temperature.
///
/// ```
/// use twine_turbojet::support::constraint::StrictlyPositive;
///
/// assert!(StrictlyPositive::new(12_000.0).is_ok());
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Wraps `value` if it is greater than zero.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::Zero`], [`ConstraintError::Negative`], or
    /// [`ConstraintError::NotANumber`].
    pub fn new<T: PartialOrd + Zero>(value: T) -> ConstraintResult<Constrained<T, Self>> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    const REQUIREMENT: &'static str = "greater than zero";

    fn check(value: &T) -> ConstraintResult<()> {
        let zero = T::zero();
        if *value > zero {
            Ok(())
        } else if *value == zero {
            Err(ConstraintError::Zero)
        } else if *value < zero {
            Err(ConstraintError::Negative)
        } else {
            Err(ConstraintError::NotANumber)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{MassRate, Pressure},
        mass_rate::kilogram_per_second,
        pressure::pascal,
    };

    #[test]
    fn pressure_ratios() {
        assert!(StrictlyPositive::new(30.0).is_ok());
        assert_eq!(StrictlyPositive::new(0.0).err(), Some(ConstraintError::Zero));
        assert_eq!(
            StrictlyPositive::new(-5.0).err(),
            Some(ConstraintError::Negative)
        );
        assert_eq!(
            StrictlyPositive::new(f64::NAN).err(),
            Some(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn mass_flows() {
        assert!(StrictlyPositive::new(MassRate::new::<kilogram_per_second>(100.0)).is_ok());
        assert!(StrictlyPositive::new(MassRate::new::<kilogram_per_second>(0.0)).is_err());
    }

    #[test]
    fn ambient_pressure() {
        let p = Constrained::<Pressure, StrictlyPositive>::new(Pressure::new::<pascal>(23_865.5))
            .unwrap();
        assert_eq!(p.get().get::<pascal>(), 23_865.5);
    }
}

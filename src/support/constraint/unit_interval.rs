use uom::si::{f64::Ratio, ratio::ratio};

use super::{Constrained, Constraint, ConstraintError, ConstraintResult};

/// Types with a natural `0` and `1`, so they can be checked against the unit interval.
pub trait UnitBounds: PartialOrd + Sized {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }
}

impl UnitBounds for Ratio {
    fn zero() -> Self {
        Ratio::new::<ratio>(0.0)
    }

    fn one() -> Self {
        Ratio::new::<ratio>(1.0)
    }
}

/// Lower-open unit interval, `0 < x ≤ 1`.
///
/// The domain of an isentropic or burner efficiency: a perfect component is
/// allowed, a component with zero efficiency is not.
///
/// ```
/// use twine_turbojet::support::constraint::UnitIntervalLowerOpen;
/// use uom::si::{f64::Ratio, ratio::ratio};
///
/// let eta_c = UnitIntervalLowerOpen::new(Ratio::new::<ratio>(0.88)).unwrap();
/// assert_eq!(eta_c.get().get::<ratio>(), 0.88);
///
/// assert!(UnitIntervalLowerOpen::new(1.0).is_ok());
/// assert!(UnitIntervalLowerOpen::new(0.0).is_err());
/// assert!(UnitIntervalLowerOpen::new(1.2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitIntervalLowerOpen;

impl UnitIntervalLowerOpen {
    /// Wraps `value` if `0 < value ≤ 1`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::BelowMinimum`], [`ConstraintError::AboveMaximum`],
    /// or [`ConstraintError::NotANumber`].
    pub fn new<T: UnitBounds>(value: T) -> ConstraintResult<Constrained<T, Self>> {
        Constrained::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for UnitIntervalLowerOpen {
    const REQUIREMENT: &'static str = "in (0, 1]";

    fn check(value: &T) -> ConstraintResult<()> {
        if value.partial_cmp(&T::zero()).is_none() {
            Err(ConstraintError::NotANumber)
        } else if *value <= T::zero() {
            Err(ConstraintError::BelowMinimum)
        } else if *value > T::one() {
            Err(ConstraintError::AboveMaximum)
        } else {
            Ok(())
        }
    }
}

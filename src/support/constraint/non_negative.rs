use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError, ConstraintResult};

/// Zero or greater.
///
/// Sea level and a static engine are valid operating points, so altitude and
/// flight Mach use this rather than [`StrictlyPositive`](super::StrictlyPositive).
///
/// ```
/// use twine_turbojet::support::constraint::NonNegative;
///
/// assert!(NonNegative::new(0.0).is_ok());
/// assert!(NonNegative::new(0.85).is_ok());
/// assert!(NonNegative::new(-0.1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Wraps `value` if it is zero or greater.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::Negative`] or [`ConstraintError::NotANumber`].
    pub fn new<T: PartialOrd + Zero>(value: T) -> ConstraintResult<Constrained<T, Self>> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    const REQUIREMENT: &'static str = "zero or greater";

    fn check(value: &T) -> ConstraintResult<()> {
        let zero = T::zero();
        if *value >= zero {
            Ok(())
        } else if *value < zero {
            Err(ConstraintError::Negative)
        } else {
            Err(ConstraintError::NotANumber)
        }
    }
}

//! Physical invariants checked once, at the model boundary.
//!
//! A few properties of engine inputs hold regardless of the operating
//! envelope: altitude and Mach are never negative, mass flow and shaft speed
//! are always positive, and a component efficiency lies in `(0, 1]`.
//! Each property is a zero-sized marker implementing [`Constraint<T>`]:
//!
//! - [`NonNegative`]: `x ≥ 0`
//! - [`StrictlyPositive`]: `x > 0`
//! - [`UnitIntervalLowerOpen`]: `0 < x ≤ 1`
//!
//! Markers work with plain `f64` and with [`uom`] quantities. A checked
//! value can be carried in [`Constrained<T, C>`] so the invariant travels
//! with its type.

mod non_negative;
mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitIntervalLowerOpen};

/// A numeric invariant.
pub trait Constraint<T> {
    /// The invariant in words, completing "value must be ...".
    const REQUIREMENT: &'static str;

    /// Checks that `value` satisfies the invariant.
    ///
    /// # Errors
    ///
    /// Returns the way in which `value` violates the invariant.
    fn check(value: &T) -> ConstraintResult<()>;
}

/// How a value violates a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value is negative")]
    Negative,
    #[error("value is zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the lower bound")]
    BelowMinimum,
    #[error("value is above the upper bound")]
    AboveMaximum,
}

pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value known to satisfy the constraint `C`.
///
/// ```
/// use twine_turbojet::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::MassRate, mass_rate::kilogram_per_second};
///
/// let m_dot = MassRate::new::<kilogram_per_second>(100.0);
/// let m_dot = Constrained::<_, StrictlyPositive>::new(m_dot).unwrap();
/// assert_eq!(m_dot.get().get::<kilogram_per_second>(), 100.0);
///
/// let stalled = MassRate::new::<kilogram_per_second>(0.0);
/// assert!(Constrained::<_, StrictlyPositive>::new(stalled).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _constraint: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] reported by `C`.
    pub fn new(value: T) -> ConstraintResult<Self> {
        C::check(&value).map(|()| Self {
            value,
            _constraint: PhantomData,
        })
    }
}

impl<T: Copy, C: Constraint<T>> Constrained<T, C> {
    /// Returns a copy of the wrapped value.
    pub fn get(&self) -> T {
        self.value
    }
}

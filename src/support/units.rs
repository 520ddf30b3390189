//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units crossing its API.
//! This module provides the few quantities and helpers a propulsion cycle
//! needs that [`uom`] does not ship.
//!
//! ## Temperature differences
//!
//! [`TemperatureDifference::minus`] subtracts one absolute temperature from
//! another to get a temperature interval, which is what a specific-work
//! calculation (`w = cp·ΔT`) needs:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::kelvin;
//! use twine_turbojet::support::units::TemperatureDifference;
//!
//! let t3 = ThermodynamicTemperature::new::<kelvin>(718.0);
//! let t2 = ThermodynamicTemperature::new::<kelvin>(250.5);
//! let rise = t3.minus(t2);
//! ```
//!
//! ## Thrust-specific fuel consumption
//!
//! [`ThrustSpecificFuelConsumption`] is fuel mass per unit impulse, kg/(N·s),
//! which reduces to s/m in SI base units. Engine data is conventionally quoted
//! in mg/(N·s); use [`milligrams_per_newton_second`] to report it that way.

mod quantities;
mod temperature_difference;

pub use quantities::{
    SpecificEnthalpy, SpecificGasConstant, ThrustSpecificFuelConsumption,
    milligrams_per_newton_second,
};
pub use temperature_difference::TemperatureDifference;

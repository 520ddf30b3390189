//! Thermodynamic property modeling for gas-turbine cycle calculations.
//!
//! The cycle is evaluated with constant specific heats in two regions:
//! air upstream of the combustor and combustion products downstream of it.
//! Each region is described by a [`PerfectGas`], and the canonical fluids
//! provide default constants through [`PerfectGasFluid`].

pub mod fluid;

mod perfect_gas;

pub use perfect_gas::{PerfectGas, PerfectGasFluid, PerfectGasParameters, PerfectGasParametersError};

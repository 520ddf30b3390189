//! Canonical fluid identifiers.
//!
//! A fluid type names a substance and supplies its [`PerfectGas`] constants
//! through [`PerfectGasFluid`](super::PerfectGasFluid).
//!
//! [`PerfectGas`]: super::PerfectGas

mod air;
mod combustion_products;

pub use air::Air;
pub use combustion_products::CombustionProducts;

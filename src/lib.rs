//! # Twine Turbojet
//!
//! Steady-state performance of a single-spool turbojet as a
//! [Twine](https://github.com/isentropic-dev/twine) model.
//!
//! Given flight conditions, a compressor pressure ratio, a turbine inlet
//! temperature, component efficiencies, a mass flow, a shaft speed, and a
//! turbine blade material, the model runs one pass through the Brayton cycle
//! and reports station states, thrust, fuel consumption, CO₂ emissions, and
//! the blade stress margin.
//!
//! ## Crate layout
//!
//! - [`models`]: The turbojet [`twine_core::Model`] and its entry points.
//! - [`support`]: Numeric constraints, [`uom`] extensions, and perfect-gas
//!   thermodynamics used by the model.
//!
//! Modules in [`support`] are public because they are useful on their own,
//! but their APIs are not stable.
//!
//! ## Logging
//!
//! Evaluations emit [`tracing`] events: `debug` for stage results, `info`
//! when the thermal throttle engages or a blade fails its stress check, and
//! `warn` for non-physical ambient conditions. No subscriber is installed.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for inputs, configuration, and outputs.

pub mod models;
pub mod support;

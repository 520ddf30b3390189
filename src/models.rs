//! Public models.
//!
//! Models are grouped by engineering domain. Each one keeps its computation
//! in a private `core` module and exposes it through a thin
//! [`twine_core::Model`] adapter plus any convenience functions that make
//! sense for that domain.

pub mod propulsion;

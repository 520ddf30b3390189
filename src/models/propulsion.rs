//! Propulsion models.

pub mod turbojet;

//! Model-fidelity and coupling selectors.

use uom::si::{angular_velocity::revolution_per_minute, f64::AngularVelocity};

/// Inlet ram-compression formulation.
///
/// Both modes use the exact stagnation temperature `T2 = T·(1 + ½(γ−1)M²)`.
/// They differ only in the pressure exponent: `Simple` uses the constant 3.5,
/// which equals `γ/(γ−1)` for `γ = 1.4`, so it is a special case of
/// `FullIsentropic` rather than a separate model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InletFidelity {
    /// Pressure recovery with the fixed exponent 3.5.
    Simple,

    /// Pressure recovery with the exponent `γ/(γ−1)` of the configured air.
    #[default]
    FullIsentropic,
}

impl InletFidelity {
    pub(super) const SIMPLE_PRESSURE_EXPONENT: f64 = 3.5;
}

/// How pressure ratio and mass flow are obtained.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CouplingMode {
    /// Pressure ratio and mass flow are taken directly from the inputs.
    #[default]
    Independent,

    /// Pressure ratio and mass flow are scheduled from shaft speed.
    ///
    /// The input pressure ratio and mass flow are then reference values,
    /// reached at [`RpmCoupling::reference_speed`].
    RpmCoupled(RpmCoupling),
}

/// Speed schedule for [`CouplingMode::RpmCoupled`].
///
/// With `N = speed / reference_speed`:
///
/// - `PR = PR_idle + N²·(PR_ref − PR_idle)`
/// - `m_dot = m_dot_ref · N · σ`, where `σ = p_amb / 101325 Pa` when
///   `density_scaling` is set and `σ = 1` otherwise
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RpmCoupling {
    pub reference_speed: AngularVelocity,

    /// Pressure ratio approached as speed goes to zero.
    pub idle_pressure_ratio: f64,

    /// Whether mass flow also scales with ambient pressure.
    pub density_scaling: bool,
}

impl Default for RpmCoupling {
    /// 12000 rpm reference, `PR = 1 + (PR_ref − 1)·N²`, density-scaled flow.
    fn default() -> Self {
        Self {
            reference_speed: AngularVelocity::new::<revolution_per_minute>(12_000.0),
            idle_pressure_ratio: 1.0,
            density_scaling: true,
        }
    }
}

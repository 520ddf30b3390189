//! Results of a turbojet evaluation.

use uom::si::{
    f64::{Force, MassRate, Pressure, ThermodynamicTemperature, Velocity},
    mass_rate::kilogram_per_second,
};

use crate::support::units::{
    SpecificEnthalpy, ThrustSpecificFuelConsumption, milligrams_per_newton_second,
};

use super::AtmosphericState;

/// Temperature and pressure at one gas-path station.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StationState {
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
}

/// Named stations along the gas path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Station {
    Ambient,
    /// Inlet exit, station 2.
    InletExit,
    /// Compressor exit, station 3.
    CompressorExit,
    /// Combustor exit and turbine inlet, station 4.
    CombustorExit,
    /// Turbine exit, station 5.
    TurbineExit,
}

impl Station {
    /// All stations in gas-path order.
    pub const ALL: [Self; 5] = [
        Self::Ambient,
        Self::InletExit,
        Self::CompressorExit,
        Self::CombustorExit,
        Self::TurbineExit,
    ];

    /// Short label used on station plots.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ambient => "Amb",
            Self::InletExit => "2",
            Self::CompressorExit => "3",
            Self::CombustorExit => "4",
            Self::TurbineExit => "5",
        }
    }
}

/// States at the five gas-path stations.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CycleStations {
    pub ambient: StationState,
    pub inlet_exit: StationState,
    pub compressor_exit: StationState,
    pub combustor_exit: StationState,
    pub turbine_exit: StationState,
}

impl CycleStations {
    /// Returns the state at `station`.
    #[must_use]
    pub fn get(&self, station: Station) -> StationState {
        match station {
            Station::Ambient => self.ambient,
            Station::InletExit => self.inlet_exit,
            Station::CompressorExit => self.compressor_exit,
            Station::CombustorExit => self.combustor_exit,
            Station::TurbineExit => self.turbine_exit,
        }
    }

    /// Iterates over the stations in gas-path order.
    pub fn iter(&self) -> impl Iterator<Item = (Station, StationState)> + '_ {
        Station::ALL
            .into_iter()
            .map(move |station| (station, self.get(station)))
    }
}

/// Thrust, fuel consumption, and emissions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerformanceResult {
    pub flight_velocity: Velocity,

    /// Fully expanded nozzle exit velocity.
    pub exhaust_velocity: Velocity,

    /// Net thrust per unit air mass flow, N/(kg/s).
    pub specific_thrust: Velocity,

    pub net_thrust: Force,
    pub sfc: ThrustSpecificFuelConsumption,
    pub fuel_flow: MassRate,
    pub co2_rate: MassRate,
}

impl PerformanceResult {
    /// Returns SFC in mg/(N·s).
    #[must_use]
    pub fn sfc_mg_per_newton_second(&self) -> f64 {
        milligrams_per_newton_second(self.sfc)
    }

    #[must_use]
    pub fn fuel_flow_kg_per_hour(&self) -> f64 {
        self.fuel_flow.get::<kilogram_per_second>() * SECONDS_PER_HOUR
    }

    #[must_use]
    pub fn co2_kg_per_hour(&self) -> f64 {
        self.co2_rate.get::<kilogram_per_second>() * SECONDS_PER_HOUR
    }
}

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Centrifugal stress margin of the turbine blades.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StructuralResult {
    pub stress: Pressure,

    /// Yield strength at the actual turbine inlet temperature.
    pub yield_strength: Pressure,

    /// `yield_strength / stress`.
    pub safety_factor: f64,

    /// Whether `stress ≤ yield_strength`.
    pub passes: bool,
}

/// Everything computed for one operating point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaluationOutput {
    pub atmosphere: AtmosphericState,

    /// Gas-path states; the combustor exit temperature is the actual TIT.
    pub stations: CycleStations,

    /// Compressor pressure ratio after coupling.
    pub pressure_ratio: f64,

    /// Air mass flow after coupling.
    pub mass_flow: MassRate,

    pub requested_turbine_inlet_temperature: ThermodynamicTemperature,

    /// Whether the material limit lowered the turbine inlet temperature.
    pub throttle_active: bool,

    pub fuel_air_ratio: f64,

    /// Specific work absorbed by the compressor.
    pub compressor_work: SpecificEnthalpy,

    /// Specific work extracted by the turbine, per unit air mass flow.
    pub turbine_work: SpecificEnthalpy,

    pub performance: PerformanceResult,
    pub structural: StructuralResult,
}

impl EvaluationOutput {
    /// Returns the turbine inlet temperature actually used by the cycle.
    #[must_use]
    pub fn turbine_inlet_temperature(&self) -> ThermodynamicTemperature {
        self.stations.combustor_exit.temperature
    }
}

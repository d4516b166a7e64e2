//! Typed vocabulary of the engine's scripting interface.
//!
//! The engine addresses everything by name: component kinds, parameter keys,
//! and a handful of enumerated string constants. Keeping the vocabulary as
//! enums means a typo is a compile error here instead of a runtime rejection
//! from the engine.

use serde::{Deserialize, Serialize};

/// Component kinds a model is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    Well,
    Tubing,
    Casing,
    BlackOilFluid,
    Completion,
    Esp,
}

impl ComponentKind {
    pub fn name(self) -> &'static str {
        match self {
            ComponentKind::Well => "Well",
            ComponentKind::Tubing => "Tubing",
            ComponentKind::Casing => "Casing",
            ComponentKind::BlackOilFluid => "BlackOilFluid",
            ComponentKind::Completion => "Completion",
            ComponentKind::Esp => "Esp",
        }
    }
}

/// Parameter keys understood by the engine, with their canonical names.
///
/// The engine namespaces keys per component kind; a flat enum is enough here
/// because the canonical spellings do not collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamKey {
    // Well
    SurveyType,
    // Tubular segments
    TopMeasuredDepth,
    Length,
    InnerDiameter,
    Roughness,
    WallThickness,
    // Black-oil fluid
    Gor,
    WaterCut,
    UseDeadOilDensity,
    DeadOilDensity,
    WaterSpecificGravity,
    GasSpecificGravity,
    BelowBbpOfvf,
    BelowBbpOfvfPressure,
    BelowBbpOfvfTemperature,
    BubblePointSatGas,
    BubblePointSatGasPressure,
    BubblePointSatGasTemperature,
    BelowBbpLiveOilViscosity,
    BelowBbpLiveOilViscosityPressure,
    BelowBbpLiveOilViscosityTemperature,
    LiveOilViscCorrelation,
    LiveOilViscosityCorr,
    SolutionGasCorrelation,
    // Completion
    FluidEntryType,
    GeometryProfileType,
    IprModel,
    ReservoirPressure,
    ReservoirTemperature,
    LiquidPi,
    AssociatedBlackOilFluid,
    UseVogelBelowBubblePoint,
    // ESP
    OperatingFrequency,
    Manufacturer,
    Model,
    NumberStages,
}

impl ParamKey {
    pub fn key(self) -> &'static str {
        match self {
            ParamKey::SurveyType => "SurveyType",
            ParamKey::TopMeasuredDepth => "TopMeasuredDepth",
            ParamKey::Length => "Length",
            ParamKey::InnerDiameter => "InnerDiameter",
            ParamKey::Roughness => "Roughness",
            ParamKey::WallThickness => "WallThickness",
            ParamKey::Gor => "GOR",
            ParamKey::WaterCut => "WaterCut",
            ParamKey::UseDeadOilDensity => "UseDeadOilDensity",
            ParamKey::DeadOilDensity => "DeadOilDensity",
            ParamKey::WaterSpecificGravity => "WaterSpecificGravity",
            ParamKey::GasSpecificGravity => "GasSpecificGravity",
            ParamKey::BelowBbpOfvf => "BelowBBPOFVF",
            ParamKey::BelowBbpOfvfPressure => "BelowBBPOFVFPressure",
            ParamKey::BelowBbpOfvfTemperature => "BelowBBPOFVFTemperature",
            ParamKey::BubblePointSatGas => "BubblePointSatGas",
            ParamKey::BubblePointSatGasPressure => "BubblePointSatGasPressure",
            ParamKey::BubblePointSatGasTemperature => "BubblePointSatGasTemperature",
            ParamKey::BelowBbpLiveOilViscosity => "BelowBBPLiveOilViscosity",
            ParamKey::BelowBbpLiveOilViscosityPressure => "BelowBBPLiveOilViscosityPressure",
            ParamKey::BelowBbpLiveOilViscosityTemperature => "BelowBBPLiveOilViscosityTemperature",
            ParamKey::LiveOilViscCorrelation => "LiveOilViscCorrelation",
            ParamKey::LiveOilViscosityCorr => "LiveOilViscosityCorr",
            ParamKey::SolutionGasCorrelation => "SolutionGas",
            ParamKey::FluidEntryType => "FluidEntryType",
            ParamKey::GeometryProfileType => "GeometryProfileType",
            ParamKey::IprModel => "IPRModel",
            ParamKey::ReservoirPressure => "ReservoirPressure",
            ParamKey::ReservoirTemperature => "ReservoirTemperature",
            ParamKey::LiquidPi => "LiquidPI",
            ParamKey::AssociatedBlackOilFluid => "AssociatedBlackOilFluid",
            ParamKey::UseVogelBelowBubblePoint => "UseVogelBelowBubblePoint",
            ParamKey::OperatingFrequency => "OperatingFrequency",
            ParamKey::Manufacturer => "Manufacturer",
            ParamKey::Model => "Model",
            ParamKey::NumberStages => "NumberStages",
        }
    }
}

/// A parameter value as the engine accepts it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Number(f64),
    Text(String),
    Flag(bool),
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Number(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Text(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Flag(v)
    }
}

/// Keys of the pressure/temperature profile task's parameter set.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum ProfileParam {
    OutletPressure,
    InletPressure,
    LiquidFlowRate,
    FlowRateType,
    CalculatedVariable,
}

impl ProfileParam {
    pub fn key(self) -> &'static str {
        match self {
            ProfileParam::OutletPressure => "OutletPressure",
            ProfileParam::InletPressure => "InletPressure",
            ProfileParam::LiquidFlowRate => "LiquidFlowRate",
            ProfileParam::FlowRateType => "FlowRateType",
            ProfileParam::CalculatedVariable => "CalculatedVariable",
        }
    }
}

/// Enumerated string constants the engine expects as parameter values.
pub mod constants {
    /// Two-dimensional deviation survey.
    pub const SURVEY_TWO_DIMENSIONAL: &str = "TwoDimensional";
    /// Single-point completion fluid entry.
    pub const FLUID_ENTRY_SINGLE_POINT: &str = "SinglePoint";
    /// Vertical completion geometry profile.
    pub const ORIENTATION_VERTICAL: &str = "Vertical";
    /// Productivity-index IPR model.
    pub const IPR_PI_MODEL: &str = "IPRPIModel";
    /// Live-oil viscosity correlation.
    pub const VISCOSITY_BEGGS_ROBINSON: &str = "BeggsAndRobinson";
    /// Solution-gas correlation.
    pub const SOLUTION_GAS_STANDING: &str = "Standing";
    /// Flow-rate type for profile runs.
    pub const FLOW_RATE_LIQUID: &str = "LiquidFlowRate";
    /// Calculated variable for profile runs.
    pub const CALCULATED_INLET_PRESSURE: &str = "InletPressure";
}

//! Well model construction.

use std::path::Path;

use pf_catalog::{EspCatalog, select_pump};
use pf_core::{atm_to_bar, sg_to_kg_m3};
use pf_engine::{ComponentKind, ParamKey, SimulationEngine, UnitSystem, constants};
use pf_report::WellRecord;

use crate::{ModelError, ModelResult};

/// Artificial-lift marker that selects the ESP branch, spelled the way the
/// report spells it.
pub const ESP_LIFT_MARKER: &str = "ЭЦН";

/// Tubing wall thickness, mm.
const TUBING_WALL_MM: f64 = 5.5;
/// Casing wall thickness, mm.
const CASING_WALL_MM: f64 = 8.5;
/// Absolute roughness for tubing and casing.
const ROUGHNESS: f64 = 0.001;
/// Gas specific gravity used for every fluid.
const GAS_SG: f64 = 0.7;
/// Pump vendor label under which catalog models are registered engine-side.
const ESP_MANUFACTURER: &str = "Unifloc";

const FLUID_NAME: &str = "Black Oil";
const COMPLETION_NAME: &str = "Vert Comp 1";
const TUBING_NAME: &str = "Tubing";
const CASING_NAME: &str = "Casing";
const ESP_NAME: &str = "Esp";

/// Build and persist one well's simulation model at `output_path`.
///
/// The parent directory must already exist. Component creation order is part
/// of the engine contract: later components reference earlier ones by name.
/// Any engine failure aborts the build as-is; a half-built model file may be
/// left behind at `output_path`.
pub fn build_model(
    engine: &dyn SimulationEngine,
    record: &WellRecord,
    output_path: &Path,
    catalog: &EspCatalog,
) -> ModelResult<()> {
    let well = record.well_name.as_str();
    if well.trim().is_empty() {
        return Err(ModelError::MissingField {
            well: String::from("?"),
            field: "well_name",
        });
    }

    let h_tub = require(record.h_tub, well, "h_tub")?;
    let ext_h_tub = require(record.ext_h_tub, well, "ext_h_tub")?;
    let h_perf = require(record.h_perf, well, "h_perf")?;
    let ext_h_perf = require(record.ext_h_perf, well, "ext_h_perf")?;
    let d_tub = require(record.d_tub, well, "d_tub")?;
    let d_cas = require(record.d_cas, well, "d_cas")?;
    let rp = require(record.rp, well, "rp")?;
    let wct = require(record.wct, well, "wct")?;
    let gamma_oil = require(record.gamma_oil, well, "gamma_oil")?;
    let gamma_wat = require(record.gamma_wat, well, "gamma_wat")?;
    let bob = require(record.bob, well, "bob")?;
    let pb = require(record.pb, well, "pb")?;
    let rsb = require(record.rsb, well, "rsb")?;
    let muob = require(record.muob, well, "muob")?;
    let t_res = require(record.t_res, well, "t_res")?;
    let p_res = require(record.p_res, well, "p_res")?;
    let pi = require(record.pi, well, "pi")?;

    // The engine does not reliably latch the unit system on first creation;
    // a save/close/reopen cycle makes it stick.
    let mut session = engine.create(output_path, UnitSystem::Metric, true)?;
    session.save()?;
    session.close()?;
    let mut session = engine.open(output_path, UnitSystem::Metric)?;

    session.add_component(
        ComponentKind::Well,
        well,
        None,
        &[(
            ParamKey::SurveyType,
            constants::SURVEY_TWO_DIMENSIONAL.into(),
        )],
    )?;

    session.add_component(
        ComponentKind::Tubing,
        TUBING_NAME,
        Some(well),
        &[
            (ParamKey::TopMeasuredDepth, 0.0.into()),
            (ParamKey::Length, h_tub.into()),
            (
                ParamKey::InnerDiameter,
                (d_tub - 2.0 * TUBING_WALL_MM).into(),
            ),
            (ParamKey::Roughness, ROUGHNESS.into()),
            (ParamKey::WallThickness, TUBING_WALL_MM.into()),
        ],
    )?;

    session.add_component(
        ComponentKind::Casing,
        CASING_NAME,
        Some(well),
        &[
            (ParamKey::TopMeasuredDepth, 0.0.into()),
            (ParamKey::Length, h_perf.into()),
            (ParamKey::InnerDiameter, d_cas.into()),
            (ParamKey::Roughness, ROUGHNESS.into()),
            (ParamKey::WallThickness, CASING_WALL_MM.into()),
        ],
    )?;

    // Three-point deviation survey: wellhead, tubing shoe, perforations.
    session.set_trajectory(
        well,
        &[0.0, h_tub - ext_h_tub, h_perf - ext_h_perf],
        &[0.0, h_tub, h_perf],
    )?;

    session.add_component(
        ComponentKind::BlackOilFluid,
        FLUID_NAME,
        None,
        &[
            (ParamKey::Gor, rp.into()),
            (ParamKey::WaterCut, wct.into()),
            (ParamKey::UseDeadOilDensity, true.into()),
            (ParamKey::DeadOilDensity, sg_to_kg_m3(gamma_oil).into()),
            (ParamKey::WaterSpecificGravity, gamma_wat.into()),
            (ParamKey::GasSpecificGravity, GAS_SG.into()),
            (ParamKey::BelowBbpOfvf, bob.into()),
            (ParamKey::BelowBbpOfvfPressure, atm_to_bar(pb).into()),
            (ParamKey::BelowBbpOfvfTemperature, t_res.into()),
            (ParamKey::BubblePointSatGas, rsb.into()),
            (ParamKey::BubblePointSatGasPressure, atm_to_bar(pb).into()),
            (ParamKey::BubblePointSatGasTemperature, t_res.into()),
            (ParamKey::BelowBbpLiveOilViscosity, muob.into()),
            // The viscosity calibration pressure goes to the engine as
            // reported, in atm, while every other calibration pressure is
            // converted to bar. Downstream matching was tuned against this
            // exact behavior; keep the asymmetry.
            (ParamKey::BelowBbpLiveOilViscosityPressure, pb.into()),
            (ParamKey::BelowBbpLiveOilViscosityTemperature, t_res.into()),
            (
                ParamKey::LiveOilViscCorrelation,
                constants::VISCOSITY_BEGGS_ROBINSON.into(),
            ),
            (
                ParamKey::LiveOilViscosityCorr,
                constants::VISCOSITY_BEGGS_ROBINSON.into(),
            ),
            (
                ParamKey::SolutionGasCorrelation,
                constants::SOLUTION_GAS_STANDING.into(),
            ),
        ],
    )?;

    session.add_component(
        ComponentKind::Completion,
        COMPLETION_NAME,
        Some(well),
        &[
            (ParamKey::TopMeasuredDepth, h_perf.into()),
            (
                ParamKey::FluidEntryType,
                constants::FLUID_ENTRY_SINGLE_POINT.into(),
            ),
            (
                ParamKey::GeometryProfileType,
                constants::ORIENTATION_VERTICAL.into(),
            ),
            (ParamKey::IprModel, constants::IPR_PI_MODEL.into()),
            (ParamKey::ReservoirPressure, atm_to_bar(p_res).into()),
            (ParamKey::LiquidPi, pi.into()),
            (ParamKey::ReservoirTemperature, t_res.into()),
            (ParamKey::AssociatedBlackOilFluid, FLUID_NAME.into()),
            (ParamKey::UseVogelBelowBubblePoint, true.into()),
        ],
    )?;

    if record.al_type.as_deref() == Some(ESP_LIFT_MARKER) {
        let rate_nom = require(record.rate_nom, well, "rate_nom")?;
        let head_nom = require(record.head_nom, well, "head_nom")?;
        let freq = require(record.freq, well, "freq")?;

        let selection = select_pump(catalog, rate_nom, head_nom)?;

        session.add_component(
            ComponentKind::Esp,
            ESP_NAME,
            Some(well),
            &[
                (ParamKey::TopMeasuredDepth, h_tub.into()),
                (ParamKey::OperatingFrequency, freq.into()),
                (ParamKey::Manufacturer, ESP_MANUFACTURER.into()),
                (ParamKey::Model, selection.esp_id.clone().into()),
            ],
        )?;
        // The engine only accepts a stage count once the pump exists.
        session.set_parameter(
            well,
            ParamKey::NumberStages,
            f64::from(selection.stages).into(),
        )?;
    }

    session.save()?;
    session.close()?;
    Ok(())
}

fn require(value: Option<f64>, well: &str, field: &'static str) -> ModelResult<f64> {
    value.ok_or_else(|| ModelError::MissingField {
        well: well.to_string(),
        field,
    })
}

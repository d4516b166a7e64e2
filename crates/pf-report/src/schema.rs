//! Well record schema.

use serde::{Deserialize, Serialize};

use pf_core::{PfError, ensure_non_negative};

/// One well as described by a single report row.
///
/// Field units follow the report: diameters in mm, depths in m, pressures in
/// atm, rates in m3/day, temperature in the report's own scale. Numeric cells
/// may be blank in the source, so every numeric field is optional; presence is
/// checked where a value is actually consumed.
///
/// Records are immutable once parsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WellRecord {
    /// Unique well identifier, the model file is named after it.
    pub well_name: String,
    pub field: Option<String>,

    // Geometry
    pub d_cas: Option<f64>,
    pub d_tub: Option<f64>,
    pub d_ch: Option<f64>,
    pub h_perf: Option<f64>,
    pub ext_h_perf: Option<f64>,
    pub h_tub: Option<f64>,
    pub ext_h_tub: Option<f64>,

    // Artificial lift
    pub al_type: Option<String>,
    pub esp_type: Option<String>,
    pub rate_nom: Option<f64>,
    pub head_nom: Option<f64>,
    pub freq: Option<f64>,
    pub k_sep: Option<f64>,

    // Pressures
    pub p_wh: Option<f64>,
    pub p_fl: Option<f64>,
    pub p_res: Option<f64>,
    pub p_in: Option<f64>,
    pub p_wf: Option<f64>,

    // Production and PVT
    pub q_liq: Option<f64>,
    pub wct: Option<f64>,
    pub rp: Option<f64>,
    pub pb: Option<f64>,
    pub rsb: Option<f64>,
    pub t_res: Option<f64>,
    pub muob: Option<f64>,
    pub bob: Option<f64>,
    pub gamma_oil: Option<f64>,
    pub gamma_wat: Option<f64>,
    pub pi: Option<f64>,

    // Status
    pub regime: Option<String>,
    pub work_type: Option<String>,
}

impl WellRecord {
    /// Check the sign invariants on geometry and pressure fields.
    ///
    /// Absent values pass; the consumer decides whether absence is fatal.
    pub fn check_magnitudes(&self) -> Result<(), PfError> {
        let checks: [(&'static str, Option<f64>); 12] = [
            ("d_cas", self.d_cas),
            ("d_tub", self.d_tub),
            ("d_ch", self.d_ch),
            ("h_perf", self.h_perf),
            ("ext_h_perf", self.ext_h_perf),
            ("h_tub", self.h_tub),
            ("ext_h_tub", self.ext_h_tub),
            ("p_wh", self.p_wh),
            ("p_fl", self.p_fl),
            ("p_res", self.p_res),
            ("p_in", self.p_in),
            ("p_wf", self.p_wf),
        ];
        for (what, value) in checks {
            if let Some(v) = value {
                ensure_non_negative(v, what)?;
            }
        }
        Ok(())
    }
}

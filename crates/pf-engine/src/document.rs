//! Document engine: persists models as declarative YAML documents.
//!
//! No solver lives in this repo, so a "model" here is the ordered component
//! graph plus per-well trajectories, exactly what a bridge to the real
//! engine's scripting interface would replay. Profile simulation is therefore
//! not supported by this implementation.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::param::{ComponentKind, ParamKey, ParamValue};
use crate::session::{
    ModelSession, ProfileParameters, RawSimulationResults, SimulationEngine, UnitSystem,
};
use crate::{EngineError, EngineResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDoc {
    pub kind: ComponentKind,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default)]
    pub params: BTreeMap<String, ParamValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryDoc {
    pub tvd: Vec<f64>,
    pub md: Vec<f64>,
}

/// A persisted model: unit system, components in creation order, and
/// trajectories keyed by well name. Creation order is kept because the real
/// engine's interface is order-sensitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDocument {
    pub units: UnitSystem,
    #[serde(default)]
    pub components: Vec<ComponentDoc>,
    #[serde(default)]
    pub trajectories: BTreeMap<String, TrajectoryDoc>,
}

impl ModelDocument {
    fn new(units: UnitSystem) -> Self {
        Self {
            units,
            components: Vec::new(),
            trajectories: BTreeMap::new(),
        }
    }

    /// Read a persisted model document back, e.g. for inspection.
    pub fn load(path: &Path) -> EngineResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    fn has_component_named(&self, name: &str) -> bool {
        self.components.iter().any(|c| c.name == name)
    }
}

/// Engine implementation backed by YAML model documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentEngine;

const ENGINE_NAME: &str = "document";

impl SimulationEngine for DocumentEngine {
    fn name(&self) -> &str {
        ENGINE_NAME
    }

    fn create(
        &self,
        path: &Path,
        units: UnitSystem,
        overwrite: bool,
    ) -> EngineResult<Box<dyn ModelSession>> {
        if !overwrite && path.exists() {
            return Err(EngineError::Io(std::io::Error::new(
                ErrorKind::AlreadyExists,
                format!("model already exists: {}", path.display()),
            )));
        }
        debug!(path = %path.display(), ?units, "creating model document");
        Ok(Box::new(DocumentSession {
            path: path.to_path_buf(),
            doc: ModelDocument::new(units),
        }))
    }

    fn open(&self, path: &Path, units: UnitSystem) -> EngineResult<Box<dyn ModelSession>> {
        let mut doc = ModelDocument::load(path)?;
        // The requested unit system wins over whatever the file recorded.
        doc.units = units;
        debug!(path = %path.display(), ?units, "opened model document");
        Ok(Box::new(DocumentSession {
            path: path.to_path_buf(),
            doc,
        }))
    }
}

struct DocumentSession {
    path: PathBuf,
    doc: ModelDocument,
}

impl ModelSession for DocumentSession {
    fn add_component(
        &mut self,
        kind: ComponentKind,
        name: &str,
        context: Option<&str>,
        params: &[(ParamKey, ParamValue)],
    ) -> EngineResult<()> {
        if self.doc.has_component_named(name) {
            return Err(EngineError::InvalidParameter {
                component: name.to_string(),
                key: "Name".to_string(),
                reason: "component with this name already exists".to_string(),
            });
        }
        if let Some(ctx) = context {
            if !self.doc.has_component_named(ctx) {
                return Err(EngineError::MissingComponent {
                    name: ctx.to_string(),
                });
            }
        }
        debug!(kind = kind.name(), name, ?context, "adding component");
        self.doc.components.push(ComponentDoc {
            kind,
            name: name.to_string(),
            context: context.map(str::to_string),
            params: params
                .iter()
                .map(|(k, v)| (k.key().to_string(), v.clone()))
                .collect(),
        });
        Ok(())
    }

    fn set_parameter(&mut self, well: &str, key: ParamKey, value: ParamValue) -> EngineResult<()> {
        // Post-creation parameters land on the component most recently added
        // under the well, falling back to the well itself.
        let target = self
            .doc
            .components
            .iter()
            .rposition(|c| c.context.as_deref() == Some(well))
            .or_else(|| self.doc.components.iter().position(|c| c.name == well))
            .ok_or_else(|| EngineError::MissingComponent {
                name: well.to_string(),
            })?;
        debug!(well, key = key.key(), "setting parameter");
        self.doc.components[target]
            .params
            .insert(key.key().to_string(), value);
        Ok(())
    }

    fn set_trajectory(&mut self, context: &str, tvd: &[f64], md: &[f64]) -> EngineResult<()> {
        if !self.doc.has_component_named(context) {
            return Err(EngineError::MissingComponent {
                name: context.to_string(),
            });
        }
        if tvd.len() != md.len() {
            return Err(EngineError::InvalidParameter {
                component: context.to_string(),
                key: "Trajectory".to_string(),
                reason: format!("{} TVD points vs {} MD points", tvd.len(), md.len()),
            });
        }
        self.doc.trajectories.insert(
            context.to_string(),
            TrajectoryDoc {
                tvd: tvd.to_vec(),
                md: md.to_vec(),
            },
        );
        Ok(())
    }

    fn run_pt_profile(
        &mut self,
        _producer: &str,
        _parameters: &ProfileParameters,
    ) -> EngineResult<RawSimulationResults> {
        Err(EngineError::NotSupported {
            engine: ENGINE_NAME,
            what: "pressure/temperature profile simulation needs a solver backend",
        })
    }

    fn save(&mut self) -> EngineResult<()> {
        let content = serde_yaml::to_string(&self.doc)?;
        fs::write(&self.path, content)?;
        debug!(path = %self.path.display(), components = self.doc.components.len(), "saved model document");
        Ok(())
    }

    fn close(self: Box<Self>) -> EngineResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::param::constants;

    fn temp_model_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("pf-engine-{name}-{}", std::process::id()));
        path
    }

    #[test]
    fn save_and_reopen_round_trips_components() {
        let path = temp_model_path("roundtrip");
        let engine = DocumentEngine;

        let mut session = engine.create(&path, UnitSystem::Metric, true).unwrap();
        session
            .add_component(
                ComponentKind::Well,
                "101",
                None,
                &[(
                    ParamKey::SurveyType,
                    constants::SURVEY_TWO_DIMENSIONAL.into(),
                )],
            )
            .unwrap();
        session
            .set_trajectory("101", &[0.0, 2100.0], &[0.0, 2400.0])
            .unwrap();
        session.save().unwrap();
        session.close().unwrap();

        let doc = ModelDocument::load(&path).unwrap();
        assert_eq!(doc.units, UnitSystem::Metric);
        assert_eq!(doc.components.len(), 1);
        assert_eq!(doc.components[0].name, "101");
        assert_eq!(doc.trajectories["101"].md, vec![0.0, 2400.0]);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn open_latches_the_requested_unit_system() {
        let path = temp_model_path("units");
        let engine = DocumentEngine;

        let mut session = engine.create(&path, UnitSystem::Field, true).unwrap();
        session.save().unwrap();
        session.close().unwrap();

        let mut session = engine.open(&path, UnitSystem::Metric).unwrap();
        session.save().unwrap();
        session.close().unwrap();

        let doc = ModelDocument::load(&path).unwrap();
        assert_eq!(doc.units, UnitSystem::Metric);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn context_must_exist() {
        let path = temp_model_path("context");
        let engine = DocumentEngine;

        let mut session = engine.create(&path, UnitSystem::Metric, true).unwrap();
        let err = session
            .add_component(ComponentKind::Tubing, "Tubing", Some("missing"), &[])
            .unwrap_err();
        assert!(matches!(err, EngineError::MissingComponent { .. }));
    }

    #[test]
    fn ragged_trajectory_is_rejected() {
        let path = temp_model_path("ragged");
        let engine = DocumentEngine;

        let mut session = engine.create(&path, UnitSystem::Metric, true).unwrap();
        session
            .add_component(ComponentKind::Well, "101", None, &[])
            .unwrap();
        let err = session
            .set_trajectory("101", &[0.0, 1.0], &[0.0])
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidParameter { .. }));
    }

    #[test]
    fn profile_simulation_is_not_supported() {
        let path = temp_model_path("profile");
        let engine = DocumentEngine;

        let mut session = engine.create(&path, UnitSystem::Metric, true).unwrap();
        let err = session
            .run_pt_profile("101", &ProfileParameters::new())
            .unwrap_err();
        assert!(matches!(err, EngineError::NotSupported { .. }));
    }
}

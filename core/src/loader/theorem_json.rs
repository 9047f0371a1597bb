//! JSON theorem file format
//!
//! The hand-off format the ingestion collaborator produces: the constructed
//! objects in construction order, the auxiliary typed views, the recorded
//! construction steps, and the statement commands to convert.

use super::{LoadError, LoadResult, LoadedTheorem};
use crate::model::{
    AuxiliaryObjects, ConstructionProtocol, ConstructionStep, GeoObject, StatementCommand,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

/// On-disk theorem file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TheoremFile {
    /// Theorem name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theorem: Option<String>,

    /// Constructed objects, in construction order
    pub objects: Vec<GeoObject>,

    /// Auxiliary typed views (segments, angles) keyed by the same names
    #[serde(default)]
    pub auxiliary: Vec<GeoObject>,

    /// Construction step descriptors, for reporting
    #[serde(default)]
    pub steps: Vec<ConstructionStep>,

    /// Statement commands to convert
    #[serde(default)]
    pub statements: Vec<StatementCommand>,
}

impl TheoremFile {
    /// Build the protocol, auxiliary table, and command list
    ///
    /// Fails if any namespace binds the same name twice; the primary and
    /// auxiliary namespaces may deliberately share names.
    pub fn into_parts(self) -> LoadResult<LoadedTheorem> {
        let mut protocol = ConstructionProtocol::new();
        if let Some(name) = self.theorem {
            protocol.set_theorem_name(name);
        }
        for step in self.steps {
            protocol.add_step(step);
        }
        for object in self.objects {
            let name = object.name().to_string();
            if !protocol.add_object(object) {
                return Err(LoadError::DuplicateObject(name));
            }
        }

        let mut auxiliaries = AuxiliaryObjects::new();
        for object in self.auxiliary {
            let name = object.name().to_string();
            if !auxiliaries.insert(object) {
                return Err(LoadError::DuplicateObject(name));
            }
        }

        Ok(LoadedTheorem {
            protocol,
            auxiliaries,
            commands: self.statements,
        })
    }
}

/// Load a single theorem from a JSON file
pub fn load_theorem<P: AsRef<Path>>(path: P) -> LoadResult<LoadedTheorem> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path)
        .map_err(|e| LoadError::FileNotFound(format!("{}: {}", path.display(), e)))?;

    let file: TheoremFile =
        serde_json::from_str(&contents).map_err(|e| LoadError::Parse(e.to_string()))?;

    file.into_parts()
}

/// Load every theorem file from a directory
///
/// Files that fail to load are skipped with a warning.
pub fn load_theorems<P: AsRef<Path>>(dir: P) -> LoadResult<Vec<LoadedTheorem>> {
    let dir = dir.as_ref();

    if !dir.is_dir() {
        return Err(LoadError::FileNotFound(format!(
            "{} is not a directory",
            dir.display()
        )));
    }

    let mut theorems = Vec::new();

    for entry in fs::read_dir(dir)
        .map_err(|e| LoadError::FileNotFound(format!("{}: {}", dir.display(), e)))?
    {
        let entry = entry.map_err(|e| LoadError::FileNotFound(e.to_string()))?;
        let path = entry.path();

        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            match load_theorem(&path) {
                Ok(theorem) => theorems.push(theorem),
                Err(e) => {
                    warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(theorems)
}

//! Versioned JSON handoff for external viewers.
//!
//! The envelope wraps the scene with a format version so a viewer can
//! refuse files it does not understand. Colors travel as `#rrggbb` strings.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SceneError};
use crate::scene::Scene;

pub const CURRENT_VERSION: &str = "0.1";

#[derive(Serialize, Deserialize)]
struct SceneExport {
    version: String,
    scene: Scene,
}

/// Serialize a scene into the versioned envelope.
pub fn export_json(scene: &Scene) -> Result<String> {
    let envelope = SceneExport {
        version: CURRENT_VERSION.to_string(),
        scene: scene.clone(),
    };
    serde_json::to_string_pretty(&envelope)
        .map_err(|e| SceneError::InvalidData(format!("JSON export failed: {e}")))
}

/// Parse a versioned envelope back into a scene.
/// Unknown versions are rejected rather than guessed at.
pub fn import_json(json: &str) -> Result<Scene> {
    let envelope: SceneExport =
        serde_json::from_str(json).map_err(|e| SceneError::InvalidData(format!("invalid JSON: {e}")))?;
    if envelope.version != CURRENT_VERSION {
        return Err(SceneError::InvalidData(format!(
            "unsupported scene version {:?} (expected {CURRENT_VERSION:?})",
            envelope.version
        )));
    }
    Ok(envelope.scene)
}

/// Write a scene envelope to a file.
pub fn export_json_file(scene: &Scene, path: &Path) -> Result<()> {
    let json = export_json(scene)?;
    fs::write(path, json)?;
    Ok(())
}

/// Read a scene envelope from a file.
pub fn import_json_file(path: &Path) -> Result<Scene> {
    let json = fs::read_to_string(path)?;
    import_json(&json)
}

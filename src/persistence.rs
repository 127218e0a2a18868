//! Whole-document scene persistence.
//!
//! Scenes persist as one JSON document, upserted last-write-wins by primary
//! id — there is no incremental sync and no conflict resolution. The derived
//! walls layout is never stored; it is rebuilt from room geometry and segment
//! states on load.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PersistenceError;
use crate::scene::Scene;
use crate::walls;

/// Version number for the scene document format (increment when the shape
/// changes).
pub const SCENE_FORMAT_VERSION: u32 = 1;

/// The record shape sent to the backend datastore.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDocument {
    pub version: u32,
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub scene: Scene,
}

impl SceneDocument {
    /// Wraps a scene for persistence under the current format version.
    #[must_use]
    pub fn new(id: String, user_id: String, name: String, scene: Scene) -> Self {
        Self {
            version: SCENE_FORMAT_VERSION,
            id,
            user_id,
            name,
            scene,
        }
    }
}

/// Encodes a scene document to its JSON wire form.
///
/// # Errors
///
/// Returns an error if the user id is blank (validated locally before any
/// backend call would be attempted) or if serialization fails.
pub fn encode_scene(document: &SceneDocument) -> Result<String, PersistenceError> {
    if document.user_id.trim().is_empty() {
        return Err(PersistenceError::MissingUserId);
    }
    let json = serde_json::to_string(document)?;
    debug!(scene = %document.id, bytes = json.len(), "encoded scene document");
    Ok(json)
}

/// Decodes a scene document from its JSON wire form and rebuilds the derived
/// walls layout.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or was written by a different
/// format version.
pub fn decode_scene(json: &str) -> Result<SceneDocument, PersistenceError> {
    let mut document: SceneDocument = serde_json::from_str(json)?;
    if document.version != SCENE_FORMAT_VERSION {
        return Err(PersistenceError::VersionMismatch {
            expected: SCENE_FORMAT_VERSION,
            found: document.version,
        });
    }
    walls::regenerate(&mut document.scene);
    Ok(document)
}

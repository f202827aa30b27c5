//! Serialization for table plan files.
//!
//! Implements save/load for `.tkplan` documents: JSON with a format
//! version, metadata, and the complete table state. The engine offers
//! no durability guarantees; callers decide when and where files are
//! written.

use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use tablekit_core::{Error, Result};

use crate::model::{FurnitureSlot, SlotSeed, TableGeometry};
use crate::session::{EditorSession, PlanSeed};
use crate::viewport::ViewportState;

/// Plan file format version. The major component gates decoding.
const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete plan file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanFile {
    pub version: String,
    pub metadata: PlanMetadata,
    pub geometry: TableGeometry,
    pub slots: Vec<FurnitureSlot>,
    #[serde(default)]
    pub label: Option<String>,
    pub viewport: ViewportState,
}

/// Plan metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanMetadata {
    pub id: Uuid,
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl PlanFile {
    /// Captures the current session state as a new document.
    pub fn from_session(session: &EditorSession, name: &str) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: PlanMetadata {
                id: Uuid::new_v4(),
                name: name.to_string(),
                created: now,
                modified: now,
            },
            geometry: *session.geometry(),
            slots: session.slots().to_vec(),
            label: session.label().map(str::to_string),
            viewport: session.viewport.state(),
        }
    }

    /// Converts the document back into a session seed.
    pub fn seed(&self) -> PlanSeed {
        PlanSeed {
            geometry: crate::model::GeometrySeed {
                shape: Some(self.geometry.shape),
                width: Some(self.geometry.width),
                height: Some(self.geometry.height),
                radius: self.geometry.radius,
                rotation: Some(self.geometry.rotation),
                corner_count: Some(self.geometry.corner_count),
            },
            slots: self.slots.iter().map(slot_seed).collect(),
            label: self.label.clone(),
            viewport: Some(self.viewport),
        }
    }

    /// Marks the document as modified now.
    pub fn touch(&mut self) {
        self.metadata.modified = Utc::now();
    }

    /// Encodes the document as pretty-printed JSON.
    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decodes a document, rejecting unknown major format versions.
    pub fn decode(text: &str) -> Result<Self> {
        let file: PlanFile = serde_json::from_str(text)?;
        let major = file.version.split('.').next().unwrap_or("");
        let supported_major = FILE_FORMAT_VERSION.split('.').next().unwrap_or("1");
        if major != supported_major {
            return Err(Error::UnsupportedVersion {
                found: file.version,
            });
        }
        Ok(file)
    }
}

fn slot_seed(slot: &FurnitureSlot) -> SlotSeed {
    SlotSeed {
        side: slot.side,
        index_on_side: Some(slot.index_on_side),
        angle_override: slot.angle_override,
        offset_from_edge: Some(slot.offset_from_edge),
        style: Some(slot.style),
        kind: Some(slot.kind),
    }
}

/// Writes a plan document to `path`.
pub fn save_plan(path: &Path, plan: &PlanFile) -> anyhow::Result<()> {
    let json = plan
        .encode()
        .with_context(|| format!("Failed to encode plan '{}'", plan.metadata.name))?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write plan file: {}", path.display()))?;
    debug!(path = %path.display(), "saved plan file");
    Ok(())
}

/// Reads a plan document from `path`.
pub fn load_plan(path: &Path) -> anyhow::Result<PlanFile> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read plan file: {}", path.display()))?;
    let plan = PlanFile::decode(&text)
        .with_context(|| format!("Failed to decode plan file: {}", path.display()))?;
    debug!(path = %path.display(), name = %plan.metadata.name, "loaded plan file");
    Ok(plan)
}

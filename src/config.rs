use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Environment variable holding an optional JSON override of [`EditorConfig`]
pub const CONFIG_ENV_VAR: &str = "INO_GRADIENT_CONFIG";

/// How `add` picks the id of a new point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IdPolicy {
    /// A counter that only moves forward; ids are never re-issued.
    #[default]
    Monotonic,
    /// `len + 1` at the time of the add. After a removal this can hand out an
    /// id that a live point already carries.
    CollectionSize,
}

/// Axis-aligned region new points are scattered in: `origin + [0, extent)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnRegion {
    pub origin: [f32; 2],
    pub extent: [f32; 2],
}

impl SpawnRegion {
    pub const fn new(origin: [f32; 2], extent: [f32; 2]) -> Self {
        Self { origin, extent }
    }
}

impl Default for SpawnRegion {
    fn default() -> Self {
        Self::new([50.0, 50.0], [300.0, 100.0])
    }
}

/// Tunables for the editor core. Every field has a default, so a partial
/// JSON override only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Side of the square surface before the first viewport measurement
    pub initial_canvas_size: u32,
    /// Vertical space reserved for window chrome around the canvas
    pub chrome_allowance: f32,
    pub point_radius: f32,
    /// Radius around each point that is painted in the solid inner color
    pub gradient_inner_radius: f32,
    pub handle_radius: f32,
    pub handle_outline_width: f32,
    pub label_size: f32,
    pub spawn_region: SpawnRegion,
    pub id_policy: IdPolicy,
    /// Start with the red/green/blue trio instead of an empty canvas
    pub seed_initial_points: bool,
    pub export_file_name: String,
    pub export_dir: PathBuf,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            initial_canvas_size: 500,
            chrome_allowance: 32.0,
            point_radius: 550.0,
            gradient_inner_radius: 5.0,
            handle_radius: 10.0,
            handle_outline_width: 2.0,
            label_size: 11.0,
            spawn_region: SpawnRegion::default(),
            id_policy: IdPolicy::default(),
            seed_initial_points: true,
            export_file_name: "ino-image-gradient.png".to_owned(),
            export_dir: PathBuf::from("."),
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Defaults, overridden by [`CONFIG_ENV_VAR`] when it is set
    pub fn from_env() -> Result<Self> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(json) if !json.trim().is_empty() => {
                log::info!("Loading editor config from {}", CONFIG_ENV_VAR);
                Self::from_json(&json)
            }
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_defaults() {
        let config =
            EditorConfig::from_json(r#"{ "point_radius": 200.0, "id_policy": "CollectionSize" }"#)
                .unwrap();
        assert_eq!(config.point_radius, 200.0);
        assert_eq!(config.id_policy, IdPolicy::CollectionSize);
        assert_eq!(config.handle_radius, 10.0);
        assert_eq!(config.export_file_name, "ino-image-gradient.png");
    }

    #[test]
    fn malformed_override_is_an_error() {
        assert!(EditorConfig::from_json("{ point_radius: }").is_err());
    }
}

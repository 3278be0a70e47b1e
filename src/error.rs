use thiserror::Error;

/// Errors surfaced by the editor core.
///
/// A missing rendering surface is deliberately not represented here: drawing
/// and exporting against an unavailable surface are silent no-ops.
#[derive(Debug, Error)]
pub enum GradientError {
    #[error("Invalid color {0:?}: expected #RRGGBB or #RGB")]
    InvalidColor(String),

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for editor operations
pub type Result<T> = std::result::Result<T, GradientError>;

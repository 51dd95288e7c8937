//! Error types for the persistence boundary.
//!
//! Interactive operations never fail: out-of-range geometry is clamped and
//! unknown ids are no-ops. Errors only arise when a serialized layout crosses
//! into the engine.

use crate::doc::ElementKind;

/// Error returned when loading or saving a layout.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// The payload is not valid layout JSON.
    #[error("invalid layout JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// An element's `content` does not fit its `type`.
    #[error("invalid {kind} content: {reason}")]
    Content { kind: ElementKind, reason: String },
    /// Reading or writing the layout file failed.
    #[error("layout I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

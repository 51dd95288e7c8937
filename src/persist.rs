//! Persistence seam: the full ordered element list leaves the engine on
//! explicit save and seeds it on load. There is no incremental protocol.

#[cfg(test)]
#[path = "persist_test.rs"]
mod persist_test;

use std::fs;
use std::path::PathBuf;

use crate::doc::{Element, ElementRecord};
use crate::error::LayoutError;

/// Receives the serialized layout on save.
pub trait PersistenceSink {
    type Error;

    /// Store `records` as the complete layout, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Implementation-defined.
    fn save(&mut self, records: &[ElementRecord]) -> Result<(), Self::Error>;
}

/// Writes the layout as pretty-printed JSON to a file.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PersistenceSink for JsonFileSink {
    type Error = LayoutError;

    fn save(&mut self, records: &[ElementRecord]) -> Result<(), LayoutError> {
        let json = to_json(records)?;
        fs::write(&self.path, json)?;
        tracing::debug!(path = %self.path.display(), count = records.len(), "layout saved");
        Ok(())
    }
}

/// Keeps the most recent save in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub saved: Option<Vec<ElementRecord>>,
}

impl PersistenceSink for MemorySink {
    type Error = LayoutError;

    fn save(&mut self, records: &[ElementRecord]) -> Result<(), LayoutError> {
        self.saved = Some(records.to_vec());
        Ok(())
    }
}

/// Serialize records as a pretty JSON array.
///
/// # Errors
///
/// Returns [`LayoutError::Json`] if serialization fails.
pub fn to_json(records: &[ElementRecord]) -> Result<String, LayoutError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Parse a JSON array of element records, validating each element's content
/// against its type.
///
/// # Errors
///
/// Returns [`LayoutError::Json`] for malformed JSON and
/// [`LayoutError::Content`] for content that does not fit its type.
pub fn load_json(json: &str) -> Result<Vec<Element>, LayoutError> {
    let records: Vec<ElementRecord> = serde_json::from_str(json)?;
    records.into_iter().map(Element::try_from).collect()
}

/// Read and parse a layout file.
///
/// # Errors
///
/// Returns [`LayoutError::Io`] when the file cannot be read, otherwise as
/// [`load_json`].
pub fn load_file(path: &std::path::Path) -> Result<Vec<Element>, LayoutError> {
    let json = fs::read_to_string(path)?;
    load_json(&json)
}

//! Document model: placed elements, their typed content, and the store that
//! owns them together with the current selection.
//!
//! This module defines what sits on the canvas (`Element`, `ElementKind`,
//! `Content`), a sparse-update type for committed edits (`PartialElement`),
//! the wire record exchanged with the persistence sink (`ElementRecord`), and
//! the runtime store (`ElementStore`).
//!
//! The store is the single source of truth. Controllers clamp geometry before
//! calling [`ElementStore::update`]; only [`ElementStore::create`] clamps on
//! its own.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::CanvasConfig;
use crate::consts::{
    BUTTON_HEIGHT, DEFAULT_BUTTON_LABEL, DEFAULT_HEIGHT, DEFAULT_TEXT, DEFAULT_WIDTH, STATS_HEIGHT, STATS_WIDTH,
};
use crate::error::LayoutError;
use crate::geometry::{Geometry, clamp_position, clamp_size};

/// Unique identifier for a placed element.
pub type ElementId = Uuid;

/// The closed set of element types offered by the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Profile card; content is rendered from the owner's profile.
    Bio,
    /// Image tile pointing at an uploaded URL.
    Image,
    /// Free text block.
    Text,
    /// Call-to-action button with a label and link.
    Button,
    /// Community statistics widget.
    Stats,
}

impl ElementKind {
    pub const ALL: [ElementKind; 5] = [Self::Bio, Self::Image, Self::Text, Self::Button, Self::Stats];

    /// Wire name of the kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bio => "bio",
            Self::Image => "image",
            Self::Text => "text",
            Self::Button => "button",
            Self::Stats => "stats",
        }
    }

    /// Width and height given to a freshly dropped element of this kind.
    #[must_use]
    pub fn default_size(self) -> (i64, i64) {
        match self {
            Self::Bio | Self::Image | Self::Text => (DEFAULT_WIDTH, DEFAULT_HEIGHT),
            Self::Button => (DEFAULT_WIDTH, BUTTON_HEIGHT),
            Self::Stats => (STATS_WIDTH, STATS_HEIGHT),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Type-specific payload of an element. The variant fixes the element's kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Bio,
    Image { url: String },
    Text { text: String },
    Button { label: String, url: String },
    Stats,
}

#[derive(Deserialize)]
struct ImageBody {
    #[serde(default)]
    url: String,
}

#[derive(Deserialize)]
struct TextBody {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct ButtonBody {
    #[serde(default)]
    label: String,
    #[serde(default)]
    url: String,
}

impl Content {
    /// Placeholder content for a freshly dropped element.
    #[must_use]
    pub fn default_for(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Bio => Self::Bio,
            ElementKind::Image => Self::Image { url: String::new() },
            ElementKind::Text => Self::Text { text: DEFAULT_TEXT.to_string() },
            ElementKind::Button => Self::Button { label: DEFAULT_BUTTON_LABEL.to_string(), url: String::new() },
            ElementKind::Stats => Self::Stats,
        }
    }

    /// The element kind this content belongs to.
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Bio => ElementKind::Bio,
            Self::Image { .. } => ElementKind::Image,
            Self::Text { .. } => ElementKind::Text,
            Self::Button { .. } => ElementKind::Button,
            Self::Stats => ElementKind::Stats,
        }
    }

    /// Wire form: an object for image/text/button, `null` for bio/stats.
    #[must_use]
    pub fn to_value(&self) -> serde_json::Value {
        match self {
            Self::Bio | Self::Stats => serde_json::Value::Null,
            Self::Image { url } => serde_json::json!({ "url": url }),
            Self::Text { text } => serde_json::json!({ "text": text }),
            Self::Button { label, url } => serde_json::json!({ "label": label, "url": url }),
        }
    }

    /// Validate a wire payload against `kind`.
    ///
    /// `null` counts as an empty object. Missing string fields default to
    /// empty. Bio and stats accept only `null` or `{}`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Content`] when the payload is not an object or a
    /// field has the wrong JSON type.
    pub fn from_value(kind: ElementKind, value: serde_json::Value) -> Result<Self, LayoutError> {
        let value = match value {
            serde_json::Value::Null => serde_json::json!({}),
            serde_json::Value::Object(_) => value,
            other => {
                return Err(LayoutError::Content { kind, reason: format!("expected an object, got {other}") });
            }
        };
        let reject = |e: serde_json::Error| LayoutError::Content { kind, reason: e.to_string() };
        match kind {
            ElementKind::Bio | ElementKind::Stats => {
                if value.as_object().is_some_and(|m| !m.is_empty()) {
                    return Err(LayoutError::Content { kind, reason: "this type carries no content".into() });
                }
                Ok(if kind == ElementKind::Bio { Self::Bio } else { Self::Stats })
            }
            ElementKind::Image => {
                let body: ImageBody = serde_json::from_value(value).map_err(reject)?;
                Ok(Self::Image { url: body.url })
            }
            ElementKind::Text => {
                let body: TextBody = serde_json::from_value(value).map_err(reject)?;
                Ok(Self::Text { text: body.text })
            }
            ElementKind::Button => {
                let body: ButtonBody = serde_json::from_value(value).map_err(reject)?;
                Ok(Self::Button { label: body.label, url: body.url })
            }
        }
    }
}

/// A placed element as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ElementRecord", into = "ElementRecord")]
pub struct Element {
    /// Assigned at creation; never changes.
    pub id: ElementId,
    /// Left edge in canvas units.
    pub x: i64,
    /// Top edge in canvas units.
    pub y: i64,
    /// Horizontal extent in canvas units.
    pub width: i64,
    /// Vertical extent in canvas units.
    pub height: i64,
    /// Typed payload; its variant is the element's kind.
    pub content: Content,
}

impl Element {
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        self.content.kind()
    }

    #[must_use]
    pub fn geometry(&self) -> Geometry {
        Geometry::new(self.x, self.y, self.width, self.height)
    }
}

/// Wire shape of an element exchanged with the persistence sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRecord {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    #[serde(default)]
    pub content: serde_json::Value,
}

impl From<Element> for ElementRecord {
    fn from(el: Element) -> Self {
        Self::from(&el)
    }
}

impl From<&Element> for ElementRecord {
    fn from(el: &Element) -> Self {
        Self {
            id: el.id,
            kind: el.kind(),
            x: el.x,
            y: el.y,
            width: el.width,
            height: el.height,
            content: el.content.to_value(),
        }
    }
}

impl TryFrom<ElementRecord> for Element {
    type Error = LayoutError;

    fn try_from(rec: ElementRecord) -> Result<Self, Self::Error> {
        let content = Content::from_value(rec.kind, rec.content)?;
        Ok(Self { id: rec.id, x: rec.x, y: rec.y, width: rec.width, height: rec.height, content })
    }
}

/// Sparse update for an element. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialElement {
    pub x: Option<i64>,
    pub y: Option<i64>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    /// Replacement content; must keep the element's kind.
    pub content: Option<Content>,
}

impl PartialElement {
    #[must_use]
    pub fn position(x: i64, y: i64) -> Self {
        Self { x: Some(x), y: Some(y), ..Default::default() }
    }

    #[must_use]
    pub fn size(width: i64, height: i64) -> Self {
        Self { width: Some(width), height: Some(height), ..Default::default() }
    }

    #[must_use]
    pub fn content(content: Content) -> Self {
        Self { content: Some(content), ..Default::default() }
    }
}

/// In-memory store of placed elements and the current selection.
///
/// Elements are kept in insertion order, which doubles as the default paint
/// order.
#[derive(Debug, Clone)]
pub struct ElementStore {
    canvas: CanvasConfig,
    elements: Vec<Element>,
    selected: Option<ElementId>,
}

impl ElementStore {
    /// Create an empty store for `canvas`.
    #[must_use]
    pub fn new(canvas: CanvasConfig) -> Self {
        Self { canvas, elements: Vec::new(), selected: None }
    }

    /// The canvas this store clamps against.
    #[must_use]
    pub fn canvas(&self) -> CanvasConfig {
        self.canvas
    }

    /// Insert a new element, clamping its size and then its position onto the
    /// canvas, and make it the sole selection.
    pub fn create(&mut self, geometry: Geometry, content: Content) -> ElementId {
        let (width, height) = clamp_size(geometry.width, geometry.height, self.canvas.min_size, self.canvas.width);
        let (x, y) = clamp_position(geometry.x, geometry.y, width, self.canvas.width);
        let id = Uuid::new_v4();
        tracing::debug!(%id, kind = %content.kind(), x, y, width, height, "element created");
        self.elements.push(Element { id, x, y, width, height, content });
        self.selected = Some(id);
        id
    }

    /// Merge `partial` into the element with `id`.
    ///
    /// Returns `false` and changes nothing when the id is unknown or the new
    /// content would change the element's kind.
    pub fn update(&mut self, id: &ElementId, partial: &PartialElement) -> bool {
        let Some(el) = self.elements.iter_mut().find(|el| el.id == *id) else {
            return false;
        };
        if let Some(content) = &partial.content {
            if content.kind() != el.kind() {
                tracing::debug!(%id, from = %el.kind(), to = %content.kind(), "content kind change rejected");
                return false;
            }
        }
        if let Some(x) = partial.x {
            el.x = x;
        }
        if let Some(y) = partial.y {
            el.y = y;
        }
        if let Some(w) = partial.width {
            el.width = w;
        }
        if let Some(h) = partial.height {
            el.height = h;
        }
        if let Some(content) = &partial.content {
            el.content = content.clone();
        }
        true
    }

    /// Remove an element, returning it if it was present. Clears the
    /// selection when the removed element was selected.
    pub fn delete(&mut self, id: &ElementId) -> Option<Element> {
        let idx = self.elements.iter().position(|el| el.id == *id)?;
        if self.selected == Some(*id) {
            self.selected = None;
        }
        Some(self.elements.remove(idx))
    }

    /// Set or clear the selection. Returns `false` and leaves the selection
    /// alone when `id` does not name a stored element.
    pub fn select(&mut self, id: Option<ElementId>) -> bool {
        match id {
            Some(id) if !self.contains(&id) => false,
            other => {
                self.selected = other;
                true
            }
        }
    }

    /// The currently selected element id, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ElementId> {
        self.selected
    }

    /// All elements in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Element] {
        &self.elements
    }

    /// Look up an element by id.
    #[must_use]
    pub fn get(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|el| el.id == *id)
    }

    #[must_use]
    pub fn contains(&self, id: &ElementId) -> bool {
        self.get(id).is_some()
    }

    /// Replace all elements with a persisted snapshot and clear the selection.
    ///
    /// Elements are trusted as-is; a repeated id keeps its first occurrence.
    pub fn load(&mut self, elements: Vec<Element>) {
        self.elements.clear();
        self.selected = None;
        for el in elements {
            if self.contains(&el.id) {
                tracing::warn!(id = %el.id, "duplicate element id in snapshot; skipped");
                continue;
            }
            self.elements.push(el);
        }
    }

    /// Serialize the full ordered element list for the persistence sink.
    #[must_use]
    pub fn save(&self) -> Vec<ElementRecord> {
        self.elements.iter().map(ElementRecord::from).collect()
    }
}

impl Default for ElementStore {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

//! Shared numeric constants for the layout engine.

// ── Canvas ──────────────────────────────────────────────────────

/// Fixed canvas width in canvas units.
pub const CANVAS_WIDTH: i64 = 1000;

/// Suggested minimum canvas height. A display hint only; never a clamp bound.
pub const CANVAS_MIN_HEIGHT: i64 = 1400;

/// Smallest width or height an element may commit to.
pub const MIN_ELEMENT_SIZE: i64 = 50;

// ── Element defaults ────────────────────────────────────────────

/// Default width for bio, image, text and button elements.
pub const DEFAULT_WIDTH: i64 = 200;

/// Default height for bio, image and text elements.
pub const DEFAULT_HEIGHT: i64 = 150;

/// Default height for button elements.
pub const BUTTON_HEIGHT: i64 = 60;

/// Default width for stats elements.
pub const STATS_WIDTH: i64 = 300;

/// Default height for stats elements.
pub const STATS_HEIGHT: i64 = 100;

/// Placeholder body for freshly dropped text elements.
pub const DEFAULT_TEXT: &str = "Edit this text...";

/// Placeholder label for freshly dropped button elements.
pub const DEFAULT_BUTTON_LABEL: &str = "Click me";

// ── Hit-testing ─────────────────────────────────────────────────

/// Half-extent of the square hit zone around each resize handle, in canvas units.
pub const HANDLE_RADIUS: i64 = 8;

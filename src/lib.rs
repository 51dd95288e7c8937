//! Freeform canvas layout engine for the visual page builder.
//!
//! Users drop typed elements (bio cards, images, text blocks, buttons, stat
//! widgets) from a palette onto a fixed-width, vertically open canvas, then
//! move, resize, select and delete them. This crate owns that editing model:
//! the element store, the drag and resize state machines, the clamping rules
//! that keep elements on the canvas, and the selection/z-order policy. Painting
//! element content and storing layouts are left to the host through the
//! [`render::Renderer`] and [`persist::PersistenceSink`] seams.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::Engine`] driven by host pointer events |
//! | [`doc`] | Elements, typed content, and the [`doc::ElementStore`] |
//! | [`geometry`] | Points, bounding boxes, and clamping |
//! | [`create`] | Palette drops with per-type defaults |
//! | [`drag`] | Move sessions |
//! | [`resize`] | Resize sessions over six handles |
//! | [`input`] | The exclusive interaction state machine |
//! | [`hit`] | Pointer targets and hit-testing |
//! | [`order`] | Paint order and render items |
//! | [`render`] | Renderer seam |
//! | [`persist`] | Persistence seam and JSON layout files |
//! | [`config`] | Canvas configuration from the environment |
//! | [`error`] | Persistence-boundary errors |
//! | [`consts`] | Shared numeric constants (canvas width, default sizes, etc.) |

pub mod config;
pub mod consts;
pub mod create;
pub mod doc;
pub mod drag;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod order;
pub mod persist;
pub mod render;
pub mod resize;

//! Timeline rendering and seek synchronization engine.
//!
//! # Architecture
//!
//! The engine is organized into submodules, leaves first:
//! - `clock/`: `PlaybackSource` capability, event normalization, seek commands
//! - `mapper`: pure time <-> pixel conversion
//! - `highlight`: immutable highlight regions and the set that holds them
//! - `render/`: drawing surface abstraction and the full-frame render pipeline
//! - `input/`: pointer hit-testing and translation into seeks
//! - `controller`: lifecycle, state ownership and render dispatch
//! - `state`: `PlaybackState`, `Dimension` and the lifecycle phase
//! - `format`: time labels for the host
//!
//! Everything runs on the caller's thread. Sources publish events into a
//! subscription channel and the controller drains them in order via
//! [`WidgetController::pump`].

pub mod clock;
pub mod controller;
pub mod format;
pub mod highlight;
pub mod input;
pub mod mapper;
pub mod render;
pub mod state;

pub use controller::{WidgetController, WidgetError};
pub use highlight::{HighlightError, HighlightRegion, HighlightSet};
pub use state::{Dimension, PlaybackState, WidgetPhase};

//! Vitra engine crate.
//!
//! This crate owns the renderer-agnostic pieces used by higher layers:
//! geometry, paint sources, the draw list and logger setup. It never talks
//! to a GPU or a window system; backends consume the [`scene::DrawList`].

pub mod logging;
pub mod coords;
pub mod paint;
pub mod scene;

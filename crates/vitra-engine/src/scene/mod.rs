//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - provide deterministic ordering (z-index + insertion order)
//! - scope color filters with a push/pop stack
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod filter;
mod key;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use filter::Filter;
pub use key::{SortKey, ZIndex};
pub use list::{DrawItem, DrawList};
pub use shapes::{Border, Outline, Shadow};

//! LumaOS windowing ABI types
//!
//! Vocabulary shared by the pointer driver and the window manager: window
//! identifiers and flags, pointer samples, button masks, geometry and the
//! error codes every window-manager operation reports. Nothing in here owns
//! state; the crates above build their state machines on these types.

#![no_std]
#![forbid(unsafe_code)]

pub mod error;
pub mod geometry;
pub mod input;
pub mod pixel;
pub mod window;

pub use error::{WmError, WmResult};
pub use geometry::Rect;
pub use input::{MouseButtons, PointerSample};
pub use pixel::{Color32, rgb, rgba};
pub use window::{ResizeEdges, WindowFlags, WindowId};

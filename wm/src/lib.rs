//! LumaOS window manager.
//!
//! Decorated windows in a z-ordered stack, driven by a PS/2 pointer:
//! title-bar dragging, edge resizing, click delivery, focus-follows-pointer
//! and per-window event sinks. Rendering goes through a [`Display`]
//! supplied by the caller. Everything hangs off one [`Desktop`] value.

#![no_std]

extern crate alloc;
#[cfg(test)]
extern crate std;

pub mod config;
pub mod desktop;
pub mod events;
pub mod hit_test;
pub mod interaction;
#[cfg(target_arch = "x86_64")]
pub mod platform;
pub mod registry;
pub mod render;
pub mod theme;
pub mod window;

#[cfg(test)]
mod render_tests;
#[cfg(test)]
mod test_support;

pub use config::WmConfig;
pub use desktop::{Desktop, InputCallback, POINTER_DRAIN_BUDGET};
pub use events::{EventKind, EventSink, WindowEvent};
pub use interaction::{DragState, Interaction, ResizeState};
pub use registry::WindowRegistry;
pub use render::Display;
pub use theme::{Theme, ThemeColor};
pub use window::{PixelBuffer, Window};

pub use lumaos_abi::{
    Color32, MouseButtons, Rect, ResizeEdges, WindowFlags, WindowId, WmError, WmResult,
};

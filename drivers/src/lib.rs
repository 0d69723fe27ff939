#![no_std]

pub mod cursor;
pub mod ps2;
#[cfg(target_arch = "x86_64")]
pub mod serial;

pub use cursor::CursorTracker;
pub use ps2::mouse;
pub use ps2::mouse::{DecoderStats, MousePacket, PacketDecoder, Ps2Mouse};

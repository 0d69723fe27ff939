//! PS/2 Controller Driver
//!
//! Shared low-level access to the PS/2 controller (historically the 8042).
//! Only the auxiliary (mouse) port is driven here. Communication happens
//! through ports 0x60 (data) and 0x64 (status/command).
//!
//! # Status Register (Port 0x64 read)
//!
//! | Bit | Name | Description |
//! |-----|------|-------------|
//! | 0   | OBF  | Output buffer full (data available to read) |
//! | 1   | IBF  | Input buffer full (controller busy) |
//! | 5   | MOBF | Mouse output buffer full |
//! | 6   | TMOE | Timeout error |
//! | 7   | PARE | Parity error |
//!
//! Every wait on the status register is bounded by [`WAIT_ITERATIONS`]
//! polls; a controller that never answers degrades to a logged warning
//! instead of a hang.

#[cfg(target_arch = "x86_64")]
mod controller;
pub mod mouse;

#[cfg(target_arch = "x86_64")]
pub use controller::*;

// =============================================================================
// Ports
// =============================================================================

pub const PS2_DATA: u16 = 0x60;
pub const PS2_STATUS: u16 = 0x64;
pub const PS2_COMMAND: u16 = 0x64;

// =============================================================================
// Status Register Bits
// =============================================================================

/// Output buffer full - data available to read from port 0x60
pub const STATUS_OUTPUT_FULL: u8 = 0x01;

/// Input buffer full - controller is processing, wait before writing
pub const STATUS_INPUT_FULL: u8 = 0x02;

/// Mouse data available (auxiliary output buffer full)
pub const STATUS_MOUSE_DATA: u8 = 0x20;

pub const STATUS_TIMEOUT: u8 = 0x40;
pub const STATUS_PARITY: u8 = 0x80;

// =============================================================================
// Controller Commands (written to port 0x64)
// =============================================================================

/// Read controller configuration byte
pub const CMD_READ_CONFIG: u8 = 0x20;

/// Write controller configuration byte
pub const CMD_WRITE_CONFIG: u8 = 0x60;

/// Enable auxiliary (mouse) interface
pub const CMD_ENABLE_AUX: u8 = 0xA8;

/// Write next byte to auxiliary (mouse) device
pub const CMD_WRITE_AUX: u8 = 0xD4;

// =============================================================================
// Configuration Byte Bits
// =============================================================================

/// Enable auxiliary (mouse) interrupt (IRQ12)
pub const CONFIG_AUX_IRQ: u8 = 0x02;

// =============================================================================
// Device Commands (written to port 0x60 after CMD_WRITE_AUX)
// =============================================================================

/// Set device defaults
pub const DEV_CMD_DEFAULTS: u8 = 0xF6;

/// Enable data reporting
pub const DEV_CMD_ENABLE: u8 = 0xF4;

/// Device acknowledge response
pub const DEV_ACK: u8 = 0xFA;

// =============================================================================
// Timing Constants
// =============================================================================

/// Maximum status polls before a wait gives up.
pub const WAIT_ITERATIONS: u32 = 100_000;

/// Poll `condition` until it holds or [`WAIT_ITERATIONS`] polls have passed.
#[inline]
pub fn wait_for(mut condition: impl FnMut() -> bool) -> bool {
    for _ in 0..WAIT_ITERATIONS {
        if condition() {
            return true;
        }
        core::hint::spin_loop();
    }
    false
}

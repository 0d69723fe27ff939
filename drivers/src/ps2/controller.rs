//! Port I/O against the 8042. Compiled for x86_64 only.

use x86_64::instructions::port::{Port, PortReadOnly, PortWriteOnly};

use super::{
    CMD_READ_CONFIG, CMD_WRITE_AUX, CMD_WRITE_CONFIG, PS2_COMMAND, PS2_DATA, PS2_STATUS,
    STATUS_INPUT_FULL, STATUS_MOUSE_DATA, STATUS_OUTPUT_FULL, wait_for,
};

/// Read the PS/2 controller status register.
#[inline(always)]
pub fn read_status() -> u8 {
    let mut port = PortReadOnly::<u8>::new(PS2_STATUS);
    unsafe { port.read() }
}

/// Check if data is available to read from the controller.
#[inline(always)]
pub fn has_data() -> bool {
    read_status() & STATUS_OUTPUT_FULL != 0
}

/// Check if the pending byte came from the auxiliary device.
#[inline(always)]
pub fn is_mouse_data() -> bool {
    read_status() & STATUS_MOUSE_DATA != 0
}

#[inline(always)]
pub fn is_busy() -> bool {
    read_status() & STATUS_INPUT_FULL != 0
}

/// Wait until the controller accepts input. `false` on timeout.
pub fn wait_ready() -> bool {
    wait_for(|| !is_busy())
}

/// Wait until a byte is available. `false` on timeout.
pub fn wait_data() -> bool {
    wait_for(has_data)
}

/// Write a command to port 0x64. `false` if the controller stayed busy.
pub fn write_command(cmd: u8) -> bool {
    if !wait_ready() {
        return false;
    }
    let mut port = PortWriteOnly::<u8>::new(PS2_COMMAND);
    unsafe { port.write(cmd) };
    true
}

/// Write a byte to port 0x60. `false` if the controller stayed busy.
pub fn write_data(data: u8) -> bool {
    if !wait_ready() {
        return false;
    }
    let mut port = Port::<u8>::new(PS2_DATA);
    unsafe { port.write(data) };
    true
}

/// Read a byte from port 0x60, or `None` if nothing arrived in time.
pub fn read_data() -> Option<u8> {
    if !wait_data() {
        return None;
    }
    Some(read_data_nowait())
}

/// Read port 0x60 without polling. Interrupt handlers only, where the
/// controller has already signalled a byte.
#[inline(always)]
pub fn read_data_nowait() -> u8 {
    let mut port = Port::<u8>::new(PS2_DATA);
    unsafe { port.read() }
}

/// Send a byte to the mouse through the controller.
pub fn write_aux(cmd: u8) -> bool {
    write_command(CMD_WRITE_AUX) && write_data(cmd)
}

pub fn read_config() -> Option<u8> {
    if !write_command(CMD_READ_CONFIG) {
        return None;
    }
    read_data()
}

pub fn write_config(config: u8) -> bool {
    write_command(CMD_WRITE_CONFIG) && write_data(config)
}

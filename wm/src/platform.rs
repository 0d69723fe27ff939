//! Hardware bring-up and the IRQ12 byte path. x86_64 only.

use lumaos_drivers::{mouse, serial};
use lumaos_lib::{klog_info, klog_warn};

use crate::desktop::Desktop;
use crate::render::Display;

/// Route klog to COM1, then enable the PS/2 mouse. Returns whether the
/// mouse acknowledged its setup commands.
pub fn init() -> bool {
    serial::init();
    klog_info!("wm: serial console ready");
    let mouse_ok = mouse::init();
    if !mouse_ok {
        klog_warn!("wm: continuing without a responsive pointer device");
    }
    mouse_ok
}

impl<D: Display> Desktop<D> {
    /// Feed the bytes the auxiliary port currently holds, up to the drain
    /// budget. Call from the main loop after IRQ12 has been signalled.
    pub fn drain_pointer_port(&mut self) -> usize {
        self.drain_pointer_bytes(mouse::read_irq_byte)
    }
}

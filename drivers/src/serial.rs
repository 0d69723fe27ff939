//! COM1 serial console and the klog backend that writes through it.

use core::fmt::{self, Write};

use lumaos_lib::klog::{self, KlogLevel};
use spin::Mutex;
use uart_16550::SerialPort;
use x86_64::instructions::interrupts;

pub const COM1: u16 = 0x3F8;

/// `None` until [`init`] has programmed the UART.
static SERIAL: Mutex<Option<SerialPort>> = Mutex::new(None);

struct SerialWriter<'a>(&'a mut SerialPort);

impl fmt::Write for SerialWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            if byte == b'\n' {
                self.0.send(b'\r');
            }
            self.0.send(byte);
        }
        Ok(())
    }
}

/// Program COM1 and route klog through it.
pub fn init() {
    let mut port = unsafe { SerialPort::new(COM1) };
    port.init();
    *SERIAL.lock() = Some(port);
    klog::klog_register_backend(serial_klog_backend);
}

/// Write raw text, bypassing klog levels. Dropped before [`init`].
pub fn write_str(s: &str) {
    interrupts::without_interrupts(|| {
        if let Some(port) = SERIAL.lock().as_mut() {
            let _ = SerialWriter(port).write_str(s);
        }
    });
}

fn serial_klog_backend(level: KlogLevel, args: fmt::Arguments<'_>) {
    // An IRQ handler that logs while we hold the lock would deadlock.
    interrupts::without_interrupts(|| {
        let mut guard = SERIAL.lock();
        let Some(port) = guard.as_mut() else {
            return;
        };
        let mut out = SerialWriter(port);
        let _ = write!(out, "[{}] ", level.label());
        let _ = out.write_fmt(args);
        let _ = out.write_str("\n");
    });
}

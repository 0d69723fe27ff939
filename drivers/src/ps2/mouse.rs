//! PS/2 mouse: packet framing, delta decoding and device bring-up.
//!
//! A standard PS/2 mouse reports movement as 3-byte packets:
//!
//! | Byte | Contents |
//! |------|----------|
//! | 0    | Y ovf, X ovf, Y sign, X sign, always 1, middle, right, left |
//! | 1    | X movement (low 8 bits of a 9-bit two's complement value) |
//! | 2    | Y movement (same encoding, positive = away from the user) |
//!
//! The decoder is pure and platform independent; only [`init`] and
//! [`read_irq_byte`] touch the controller.

use lumaos_abi::{MouseButtons, PointerSample, WmError, WmResult};
use lumaos_lib::klog_trace;

use crate::cursor::CursorTracker;

pub const PACKET_LEN: usize = 3;

/// Bit 3 of byte 0 is always set; used to find packet boundaries.
pub const PACKET_ALWAYS_ONE: u8 = 0x08;
pub const PACKET_X_SIGN: u8 = 0x10;
pub const PACKET_Y_SIGN: u8 = 0x20;
pub const PACKET_X_OVERFLOW: u8 = 0x40;
pub const PACKET_Y_OVERFLOW: u8 = 0x80;

/// One decoded packet in device orientation (`dy > 0` means up).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MousePacket {
    pub dx: i16,
    pub dy: i16,
    pub buttons: MouseButtons,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecoderStats {
    /// Complete packets decoded.
    pub packets: u64,
    /// Bytes dropped while looking for a packet start.
    pub resync_bytes: u64,
    /// Packets that had at least one overflow bit set.
    pub overflow_packets: u64,
}

/// Three-phase packet assembler.
pub struct PacketDecoder {
    index: usize,
    bytes: [u8; PACKET_LEN],
    stats: DecoderStats,
}

impl PacketDecoder {
    pub const fn new() -> Self {
        Self {
            index: 0,
            bytes: [0; PACKET_LEN],
            stats: DecoderStats {
                packets: 0,
                resync_bytes: 0,
                overflow_packets: 0,
            },
        }
    }

    /// Feed one byte from the device.
    ///
    /// Returns `Ok(Some(_))` on the third byte of a packet, `Ok(None)` while
    /// a packet is still being assembled, and `Err(MalformedPacket)` when a
    /// byte expected to start a packet lacks the always-one bit. Such a byte
    /// is dropped and the decoder stays in phase 0.
    pub fn push(&mut self, byte: u8) -> WmResult<Option<MousePacket>> {
        if self.index == 0 && byte & PACKET_ALWAYS_ONE == 0 {
            self.stats.resync_bytes += 1;
            return Err(WmError::MalformedPacket);
        }

        self.bytes[self.index] = byte;
        self.index += 1;
        if self.index < PACKET_LEN {
            return Ok(None);
        }

        self.index = 0;
        Ok(Some(self.assemble()))
    }

    fn assemble(&mut self) -> MousePacket {
        let [flags, raw_x, raw_y] = self.bytes;
        self.stats.packets += 1;
        if flags & (PACKET_X_OVERFLOW | PACKET_Y_OVERFLOW) != 0 {
            self.stats.overflow_packets += 1;
        }

        // An overflowed axis carries garbage; report no movement on it.
        let dx = if flags & PACKET_X_OVERFLOW != 0 {
            0
        } else {
            sign_extend(raw_x, flags & PACKET_X_SIGN != 0)
        };
        let dy = if flags & PACKET_Y_OVERFLOW != 0 {
            0
        } else {
            sign_extend(raw_y, flags & PACKET_Y_SIGN != 0)
        };

        MousePacket {
            dx,
            dy,
            buttons: MouseButtons::from_status(flags),
        }
    }

    /// Bytes of the current packet received so far.
    #[inline]
    pub fn pending(&self) -> usize {
        self.index
    }

    /// Drop any partially assembled packet.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    #[inline]
    pub fn stats(&self) -> DecoderStats {
        self.stats
    }
}

impl Default for PacketDecoder {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn sign_extend(raw: u8, negative: bool) -> i16 {
    let mut v = raw as i16;
    if negative {
        v -= 256;
    }
    v
}

/// Decoder plus absolute cursor: turns device bytes into screen samples.
pub struct Ps2Mouse {
    decoder: PacketDecoder,
    cursor: CursorTracker,
}

impl Ps2Mouse {
    pub const fn new(screen_width: u32, screen_height: u32) -> Self {
        Self {
            decoder: PacketDecoder::new(),
            cursor: CursorTracker::new(screen_width, screen_height),
        }
    }

    /// Process a single byte from the IRQ path. Yields a sample once per
    /// complete packet.
    pub fn handle_byte(&mut self, byte: u8) -> Option<PointerSample> {
        let packet = match self.decoder.push(byte) {
            Ok(Some(packet)) => packet,
            Ok(None) => return None,
            Err(err) => {
                klog_trace!("ps2 mouse: {} (byte {:#04x}), resyncing", err, byte);
                return None;
            }
        };

        // Device Y grows upward; screen Y grows downward.
        let (x, y) = self
            .cursor
            .integrate(packet.dx as i32, -(packet.dy as i32));
        let (prev_x, prev_y) = self.cursor.previous();

        Some(PointerSample {
            x,
            y,
            buttons: packet.buttons,
            prev_x,
            prev_y,
        })
    }

    #[inline]
    pub fn position(&self) -> (i32, i32) {
        self.cursor.position()
    }

    pub fn set_bounds(&mut self, width: u32, height: u32) {
        self.cursor.set_bounds(width, height);
    }

    /// Place the cursor at an absolute position (clamped to the screen).
    pub fn warp(&mut self, x: i32, y: i32) {
        self.cursor.warp(x, y);
    }

    #[inline]
    pub fn stats(&self) -> DecoderStats {
        self.decoder.stats()
    }

    /// Drop any partially assembled packet.
    pub fn resync(&mut self) {
        self.decoder.reset();
    }
}

/// Bring up the auxiliary port and enable streaming.
///
/// Every step is bounded; a missing or silent device is reported and the
/// function returns `false` rather than blocking boot.
#[cfg(target_arch = "x86_64")]
pub fn init() -> bool {
    use lumaos_lib::{klog_info, klog_warn};

    use super::{
        CMD_ENABLE_AUX, CONFIG_AUX_IRQ, DEV_ACK, DEV_CMD_DEFAULTS, DEV_CMD_ENABLE, read_config,
        read_data, write_aux, write_command, write_config,
    };

    klog_info!("PS/2 mouse: initialising device");

    if !write_command(CMD_ENABLE_AUX) {
        klog_warn!("PS/2 mouse: controller busy, aux port not enabled");
        return false;
    }

    match read_config() {
        Some(config) => {
            if !write_config(config | CONFIG_AUX_IRQ) {
                klog_warn!("PS/2 mouse: failed to write controller config");
            }
        }
        None => klog_warn!("PS/2 mouse: controller config read timed out"),
    }

    let mut ok = true;
    for (cmd, name) in [(DEV_CMD_DEFAULTS, "set defaults"), (DEV_CMD_ENABLE, "enable reporting")] {
        let acked = write_aux(cmd) && read_data() == Some(DEV_ACK);
        if !acked {
            klog_warn!("PS/2 mouse: no ACK for {}", name);
            ok = false;
        }
    }

    if ok {
        klog_info!("PS/2 mouse: streaming enabled");
    }
    ok
}

/// Fetch the byte that raised IRQ12, if the controller has one from the
/// auxiliary device.
#[cfg(target_arch = "x86_64")]
pub fn read_irq_byte() -> Option<u8> {
    use super::{has_data, is_mouse_data, read_data_nowait};

    if has_data() && is_mouse_data() {
        Some(read_data_nowait())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(decoder: &mut PacketDecoder, bytes: &[u8]) -> Option<MousePacket> {
        let mut last = None;
        for &b in bytes {
            if let Ok(Some(p)) = decoder.push(b) {
                last = Some(p);
            }
        }
        last
    }

    #[test]
    fn decodes_positive_and_negative_deltas() {
        let mut d = PacketDecoder::new();
        assert_eq!(d.push(0x08), Ok(None));
        assert_eq!(d.push(5), Ok(None));
        assert_eq!(
            d.push(3),
            Ok(Some(MousePacket {
                dx: 5,
                dy: 3,
                buttons: MouseButtons::empty()
            }))
        );

        let p = feed(&mut d, &[0x08 | PACKET_X_SIGN | PACKET_Y_SIGN | 0x01, 0xFB, 0xFF]).unwrap();
        assert_eq!((p.dx, p.dy), (-5, -1));
        assert_eq!(p.buttons, MouseButtons::LEFT);
    }

    #[test]
    fn one_packet_per_three_valid_bytes() {
        let mut d = PacketDecoder::new();
        let mut packets = 0;
        for i in 0..30u8 {
            let byte = if i % 3 == 0 { 0x08 } else { i };
            if let Ok(Some(_)) = d.push(byte) {
                packets += 1;
            }
        }
        assert_eq!(packets, 10);
        assert_eq!(d.stats().packets, 10);
    }

    #[test]
    fn incomplete_prefix_yields_nothing() {
        let mut d = PacketDecoder::new();
        assert_eq!(d.push(0x09), Ok(None));
        assert_eq!(d.push(0x10), Ok(None));
        assert_eq!(d.pending(), 2);
        d.reset();
        assert_eq!(d.pending(), 0);
    }

    #[test]
    fn resyncs_on_missing_always_one_bit() {
        let mut d = PacketDecoder::new();
        assert_eq!(d.push(0x00), Err(WmError::MalformedPacket));
        assert_eq!(d.push(0x07), Err(WmError::MalformedPacket));
        assert_eq!(d.pending(), 0);
        assert_eq!(d.stats().resync_bytes, 2);

        let p = feed(&mut d, &[0x0A, 1, 2]).unwrap();
        assert_eq!(p.buttons, MouseButtons::RIGHT);
        assert_eq!((p.dx, p.dy), (1, 2));
    }

    #[test]
    fn overflowed_axis_reports_zero_but_keeps_buttons() {
        let mut d = PacketDecoder::new();
        let p = feed(&mut d, &[0x08 | PACKET_X_OVERFLOW | 0x01, 0x7F, 4]).unwrap();
        assert_eq!((p.dx, p.dy), (0, 4));
        assert_eq!(p.buttons, MouseButtons::LEFT);
        assert_eq!(d.stats().overflow_packets, 1);
    }

    #[test]
    fn mouse_inverts_y_and_tracks_previous_position() {
        let mut m = Ps2Mouse::new(800, 600);
        assert_eq!(m.handle_byte(0x08), None);
        assert_eq!(m.handle_byte(10), None);
        let s = m.handle_byte(20).unwrap();
        assert_eq!((s.x, s.y), (410, 280));
        assert_eq!((s.prev_x, s.prev_y), (400, 300));
        assert!(s.moved());
        assert_eq!(m.position(), (410, 280));
    }

    #[test]
    fn mouse_clamps_at_screen_edge() {
        let mut m = Ps2Mouse::new(800, 600);
        let mut last = None;
        for _ in 0..5 {
            for b in [0x08 | PACKET_X_SIGN | 0x01, 0x80, 0x00] {
                if let Some(s) = m.handle_byte(b) {
                    last = Some(s);
                }
            }
        }
        let s = last.unwrap();
        assert_eq!(s.x, 0);
        assert_eq!(s.buttons, MouseButtons::LEFT);
    }

    #[test]
    fn resync_discards_partial_packet() {
        let mut m = Ps2Mouse::new(800, 600);
        assert_eq!(m.handle_byte(0x08), None);
        assert_eq!(m.handle_byte(5), None);
        m.resync();
        // Without the reset this byte would complete the stale packet.
        assert_eq!(m.handle_byte(0x09), None);
        assert_eq!(m.handle_byte(0), None);
        let s = m.handle_byte(0).unwrap();
        assert_eq!((s.x, s.y), (400, 300));
        assert_eq!(s.buttons, MouseButtons::LEFT);
    }
}

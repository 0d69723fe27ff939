//! Absolute pointer position.
//!
//! Relative PS/2 deltas are integrated here and clamped to the screen, so the
//! position handed to the window manager is always a visible pixel.

use lumaos_lib::klog_debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorTracker {
    x: i32,
    y: i32,
    prev_x: i32,
    prev_y: i32,
    width: i32,
    height: i32,
}

impl CursorTracker {
    /// Starts centred on a `width × height` screen. Zero dimensions are
    /// treated as one pixel.
    pub const fn new(width: u32, height: u32) -> Self {
        let width = clamp_dim(width);
        let height = clamp_dim(height);
        let (x, y) = (width / 2, height / 2);
        Self {
            x,
            y,
            prev_x: x,
            prev_y: y,
            width,
            height,
        }
    }

    #[inline]
    pub const fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    #[inline]
    pub const fn previous(&self) -> (i32, i32) {
        (self.prev_x, self.prev_y)
    }

    #[inline]
    pub const fn bounds(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Applies a screen-space delta (y grows downward) and returns the new
    /// position. The position before the move becomes `previous()`.
    pub fn integrate(&mut self, dx: i32, dy: i32) -> (i32, i32) {
        self.prev_x = self.x;
        self.prev_y = self.y;
        self.x = self.x.saturating_add(dx).clamp(0, self.width - 1);
        self.y = self.y.saturating_add(dy).clamp(0, self.height - 1);
        (self.x, self.y)
    }

    /// Moves the cursor without a delta, e.g. after a mode switch.
    pub fn warp(&mut self, x: i32, y: i32) {
        self.prev_x = self.x;
        self.prev_y = self.y;
        self.x = x.clamp(0, self.width - 1);
        self.y = y.clamp(0, self.height - 1);
    }

    /// New screen size. Zero dimensions are ignored; the current position is
    /// pulled back inside the new bounds.
    pub fn set_bounds(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            klog_debug!("cursor: ignoring empty bounds {}x{}", width, height);
            return;
        }
        self.width = clamp_dim(width);
        self.height = clamp_dim(height);
        self.x = self.x.clamp(0, self.width - 1);
        self.y = self.y.clamp(0, self.height - 1);
        self.prev_x = self.prev_x.clamp(0, self.width - 1);
        self.prev_y = self.prev_y.clamp(0, self.height - 1);
    }
}

const fn clamp_dim(v: u32) -> i32 {
    if v == 0 {
        1
    } else if v > i32::MAX as u32 {
        i32::MAX
    } else {
        v as i32
    }
}

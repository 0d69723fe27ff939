//! Window objects and their pixel storage.

use alloc::string::String;
use alloc::vec::Vec;

use lumaos_abi::{Color32, Rect, WindowFlags, WindowId, WmError, WmResult};

use crate::config::WmConfig;
use crate::events::{EventKind, EventSink, EventSinks, WindowEvent};

/// Row-major ARGB pixels, exactly `width * height` entries.
pub struct PixelBuffer {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Allocates a zeroed buffer, reporting `OutOfMemory` instead of
    /// aborting when the allocator refuses.
    pub fn allocate(width: u32, height: u32) -> WmResult<Self> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(WmError::OutOfMemory)?;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|_| WmError::OutOfMemory)?;
        pixels.resize(len, 0);
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn fill(&mut self, color: Color32) {
        self.pixels.fill(color.to_u32());
    }

    /// Fills `rect` (buffer-local) clipped to the buffer.
    pub fn fill_rect(&mut self, rect: Rect, color: Color32) {
        let bounds = Rect::new(0, 0, self.width, self.height);
        let Some(clip) = bounds.intersect(&rect) else {
            return;
        };
        let stride = self.width as usize;
        for row in clip.y..clip.y + clip.height {
            let start = row as usize * stride + clip.x as usize;
            self.pixels[start..start + clip.width as usize].fill(color.to_u32());
        }
    }
}

pub struct Window {
    id: WindowId,
    title: String,
    rect: Rect,
    flags: WindowFlags,
    min_width: u32,
    min_height: u32,
    background: Color32,
    buffer: PixelBuffer,
    sinks: EventSinks,
}

impl Window {
    /// Builds a visible window at the configured default origin. The minimum
    /// size is the configured floor, capped to the requested size.
    pub(crate) fn new(
        id: WindowId,
        title: &str,
        width: u32,
        height: u32,
        flags: WindowFlags,
        config: &WmConfig,
        background: Color32,
    ) -> WmResult<Self> {
        if width == 0 || height == 0 {
            return Err(WmError::InvalidGeometry);
        }
        let mut buffer = PixelBuffer::allocate(width, height)?;
        buffer.fill(background);

        let mut owned_title = String::new();
        owned_title
            .try_reserve_exact(title.len())
            .map_err(|_| WmError::OutOfMemory)?;
        owned_title.push_str(title);

        Ok(Self {
            id,
            title: owned_title,
            rect: Rect::new(config.default_x, config.default_y, width, height),
            flags: flags | WindowFlags::VISIBLE,
            min_width: config.min_width.min(width),
            min_height: config.min_height.min(height),
            background,
            buffer,
            sinks: EventSinks::new(),
        })
    }

    #[inline]
    pub fn id(&self) -> WindowId {
        self.id
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub fn position(&self) -> (u32, u32) {
        (self.rect.x, self.rect.y)
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.rect.width, self.rect.height)
    }

    #[inline]
    pub fn min_size(&self) -> (u32, u32) {
        (self.min_width, self.min_height)
    }

    #[inline]
    pub fn flags(&self) -> WindowFlags {
        self.flags
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.flags.contains(WindowFlags::VISIBLE)
    }

    #[inline]
    pub fn background(&self) -> Color32 {
        self.background
    }

    #[inline]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Screen point to window-local coordinates. Not clamped.
    #[inline]
    pub fn screen_to_local(&self, x: i32, y: i32) -> (i32, i32) {
        (
            (x as i64 - self.rect.left()) as i32,
            (y as i64 - self.rect.top()) as i32,
        )
    }

    #[inline]
    pub fn local_to_screen(&self, x: i32, y: i32) -> (i32, i32) {
        (
            (x as i64 + self.rect.left()) as i32,
            (y as i64 + self.rect.top()) as i32,
        )
    }

    /// Window-local area left for content once the frame is drawn.
    pub fn client_rect(&self, titlebar_height: u32) -> Rect {
        let border = if self.flags.contains(WindowFlags::BORDERED) {
            1
        } else {
            0
        };
        let titlebar = if self.flags.contains(WindowFlags::TITLED) {
            titlebar_height
        } else {
            0
        };
        Rect::new(0, 0, self.rect.width, self.rect.height).inset(
            border,
            border + titlebar,
            border,
            border,
        )
    }

    pub(crate) fn set_title(&mut self, title: &str) -> WmResult {
        let mut owned = String::new();
        owned
            .try_reserve_exact(title.len())
            .map_err(|_| WmError::OutOfMemory)?;
        owned.push_str(title);
        self.title = owned;
        Ok(())
    }

    pub(crate) fn set_position(&mut self, x: u32, y: u32) {
        self.rect.x = x;
        self.rect.y = y;
    }

    /// Replaces the pixel buffer with one of the new size, cleared to the
    /// background. Returns `Ok(false)` if the size is unchanged. On failure
    /// the previous size and pixels are kept.
    pub(crate) fn resize(&mut self, width: u32, height: u32) -> WmResult<bool> {
        if width == 0 || height == 0 {
            return Err(WmError::InvalidGeometry);
        }
        if (width, height) == self.size() {
            return Ok(false);
        }
        let mut buffer = PixelBuffer::allocate(width, height)?;
        buffer.fill(self.background);
        self.buffer = buffer;
        self.rect.width = width;
        self.rect.height = height;
        Ok(true)
    }

    /// Sets the interactive resize floor. Values above the current size are
    /// capped to it so the window never starts out below its own minimum.
    pub(crate) fn set_min_size(&mut self, width: u32, height: u32) -> WmResult {
        if width == 0 || height == 0 {
            return Err(WmError::InvalidGeometry);
        }
        self.min_width = width.min(self.rect.width);
        self.min_height = height.min(self.rect.height);
        Ok(())
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.flags.set(WindowFlags::VISIBLE, visible);
    }

    pub(crate) fn set_background(&mut self, color: Color32) {
        self.background = color;
    }

    pub(crate) fn set_sink(&mut self, sink: EventSink) {
        self.sinks.set(sink);
    }

    pub(crate) fn clear_sink(&mut self, kind: EventKind) {
        self.sinks.clear(kind);
    }

    pub fn has_sink(&self, kind: EventKind) -> bool {
        self.sinks.is_bound(kind)
    }

    pub(crate) fn notify(&mut self, event: WindowEvent) -> bool {
        self.sinks.dispatch(self.id, event, &mut self.buffer)
    }

    /// Split borrow for drawing the title into the window's own buffer.
    pub(crate) fn surface_parts(&mut self) -> (&str, &mut PixelBuffer) {
        (&self.title, &mut self.buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make(width: u32, height: u32, flags: WindowFlags) -> WmResult<Window> {
        Window::new(
            WindowId::new(1),
            "test",
            width,
            height,
            flags,
            &WmConfig::default(),
            Color32::BLACK,
        )
    }

    #[test]
    fn new_window_is_visible_at_default_origin() {
        let w = make(200, 150, WindowFlags::DECORATED).unwrap();
        assert!(w.is_visible());
        assert_eq!(w.position(), (100, 100));
        assert_eq!(w.buffer().pixels().len(), 200 * 150);
        assert_eq!(w.min_size(), (48, 32));
    }

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(
            make(0, 10, WindowFlags::empty()).err(),
            Some(WmError::InvalidGeometry)
        );
    }

    #[test]
    fn huge_buffer_reports_out_of_memory() {
        assert_eq!(
            make(u32::MAX, u32::MAX, WindowFlags::empty()).err(),
            Some(WmError::OutOfMemory)
        );
    }

    #[test]
    fn min_size_is_capped_to_small_windows() {
        let w = make(20, 10, WindowFlags::empty()).unwrap();
        assert_eq!(w.min_size(), (20, 10));
    }

    #[test]
    fn failed_resize_keeps_previous_state() {
        let mut w = make(64, 64, WindowFlags::empty()).unwrap();
        assert_eq!(w.resize(u32::MAX, u32::MAX), Err(WmError::OutOfMemory));
        assert_eq!(w.size(), (64, 64));
        assert_eq!(w.buffer().pixels().len(), 64 * 64);
        assert_eq!(w.resize(64, 64), Ok(false));
        assert_eq!(w.resize(80, 40), Ok(true));
        assert_eq!(w.buffer().pixels().len(), 80 * 40);
    }

    #[test]
    fn coordinate_conversion() {
        let mut w = make(100, 100, WindowFlags::empty()).unwrap();
        w.set_position(150, 150);
        assert_eq!(w.screen_to_local(160, 155), (10, 5));
        assert_eq!(w.screen_to_local(140, 100), (-10, -50));
        assert_eq!(w.local_to_screen(10, 5), (160, 155));
    }

    #[test]
    fn client_rect_excludes_frame() {
        let w = make(200, 100, WindowFlags::DECORATED).unwrap();
        assert_eq!(w.client_rect(24), Rect::new(1, 25, 198, 74));
        let plain = make(200, 100, WindowFlags::empty()).unwrap();
        assert_eq!(plain.client_rect(24), Rect::new(0, 0, 200, 100));
    }

    #[test]
    fn fill_rect_clips() {
        let mut b = PixelBuffer::allocate(4, 4).unwrap();
        b.fill_rect(Rect::new(2, 2, 10, 10), Color32::WHITE);
        assert_eq!(b.pixel(3, 3), Some(0xFFFF_FFFF));
        assert_eq!(b.pixel(1, 3), Some(0));
        assert_eq!(b.pixel(4, 0), None);
    }
}

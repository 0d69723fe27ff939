//! Frame composition.
//!
//! The window manager does not own a framebuffer; it drives a [`Display`]
//! through a fixed sequence per visible window, back to front:
//!
//! 1. clear the window buffer
//! 2. fill the background, title bar band and title text, then the border
//! 3. let the client paint through its draw sink
//! 4. present the buffer at the window's screen position
//!
//! The cursor is drawn last so it stays above every window.

use lumaos_abi::{Color32, Rect, WindowFlags};

use crate::config::{GLYPH_HEIGHT, GLYPH_WIDTH, TITLE_INSET_X, WmConfig};
use crate::events::WindowEvent;
use crate::registry::WindowRegistry;
use crate::theme::Theme;
use crate::window::{PixelBuffer, Window};

/// Output device the renderer composes onto.
///
/// Buffer operations act on a window's own pixels and have software
/// defaults; `present` and the cursor hooks reach the real screen.
pub trait Display {
    /// Paint the desktop behind all windows.
    fn clear_screen(&mut self, color: Color32);

    fn clear(&mut self, surface: &mut PixelBuffer) {
        surface.fill(Color32::BLACK);
    }

    fn draw_rect(&mut self, surface: &mut PixelBuffer, rect: Rect, color: Color32) {
        surface.fill_rect(rect, color);
    }

    /// Default draws one solid glyph cell per non-space character; real
    /// displays substitute a font.
    fn draw_text(&mut self, surface: &mut PixelBuffer, text: &str, x: u32, y: u32, color: Color32) {
        let mut cx = x;
        for ch in text.chars() {
            if ch != ' ' {
                let cell = Rect::new(
                    cx.saturating_add(1),
                    y.saturating_add(1),
                    GLYPH_WIDTH - 2,
                    GLYPH_HEIGHT - 2,
                );
                surface.fill_rect(cell, color);
            }
            cx = cx.saturating_add(GLYPH_WIDTH);
        }
    }

    /// Copy the finished window buffer to the screen.
    fn present(&mut self, window: &Window);

    fn draw_cursor(&mut self, x: i32, y: i32);

    fn erase_cursor(&mut self, x: i32, y: i32);
}

/// Paint the frame decorations for one window into its buffer.
pub fn draw_decorations<D: Display + ?Sized>(
    display: &mut D,
    window: &mut Window,
    focused: bool,
    theme: &Theme,
    config: &WmConfig,
) {
    let flags = window.flags();
    let (width, height) = window.size();
    let background = window.background();
    let (title, surface) = window.surface_parts();

    display.clear(surface);
    display.draw_rect(surface, Rect::new(0, 0, width, height), background);

    if flags.contains(WindowFlags::TITLED) {
        let band = config.titlebar_height.min(height);
        display.draw_rect(surface, Rect::new(0, 0, width, band), theme.titlebar_for(focused));
        display.draw_text(
            surface,
            title,
            TITLE_INSET_X,
            config.title_baseline(),
            theme.text_primary,
        );
    }

    if flags.contains(WindowFlags::BORDERED) {
        let border = theme.border;
        display.draw_rect(surface, Rect::new(0, 0, width, 1), border);
        display.draw_rect(surface, Rect::new(0, height.saturating_sub(1), width, 1), border);
        display.draw_rect(surface, Rect::new(0, 0, 1, height), border);
        display.draw_rect(surface, Rect::new(width.saturating_sub(1), 0, 1, height), border);
    }
}

/// Compose one frame: background, windows back to front, then the cursor.
pub fn render_frame<D: Display + ?Sized>(
    display: &mut D,
    registry: &mut WindowRegistry,
    theme: &Theme,
    config: &WmConfig,
    cursor: (i32, i32),
) {
    display.erase_cursor(cursor.0, cursor.1);
    display.clear_screen(theme.background);

    let focused = registry.focused();
    for window in registry.iter_mut() {
        if !window.is_visible() {
            continue;
        }
        let is_focused = focused == Some(window.id());
        draw_decorations(display, window, is_focused, theme, config);
        window.notify(WindowEvent::Draw);
        display.present(window);
    }

    display.draw_cursor(cursor.0, cursor.1);
}

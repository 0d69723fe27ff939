//! The desktop context: one value owning every piece of window-manager state.
//!
//! All entry points take `&mut self`. The owner is expected to serialise
//! pointer bytes, key presses and frame rendering onto one thread of control
//! (typically by draining an IRQ-filled queue from the main loop); nothing
//! in here locks.

use lumaos_abi::{Color32, MouseButtons, PointerSample, WindowFlags, WindowId, WmError, WmResult};
use lumaos_drivers::mouse::PACKET_LEN;
use lumaos_drivers::{DecoderStats, Ps2Mouse};
use lumaos_lib::{klog_debug, klog_info, klog_warn};

use crate::config::WmConfig;
use crate::events::{EventKind, EventSink, WindowEvent};
use crate::interaction::{Interaction, InteractionMachine};
use crate::registry::WindowRegistry;
use crate::render::{self, Display};
use crate::theme::Theme;
use crate::window::Window;

/// Raw pointer observer, called with screen coordinates before the
/// interaction machine sees the sample.
pub type InputCallback = fn(i32, i32, MouseButtons);

/// Most bytes taken from the auxiliary port in one drain.
pub const POINTER_DRAIN_BUDGET: usize = 32 * PACKET_LEN;

pub struct Desktop<D: Display> {
    config: WmConfig,
    theme: Theme,
    display: D,
    registry: WindowRegistry,
    interaction: InteractionMachine,
    mouse: Ps2Mouse,
    input_callback: Option<InputCallback>,
}

impl<D: Display> Desktop<D> {
    pub fn new(config: WmConfig, display: D) -> Self {
        Self::with_theme(config, Theme::default(), display)
    }

    pub fn with_theme(config: WmConfig, theme: Theme, display: D) -> Self {
        klog_info!(
            "wm: desktop {}x{} (titlebar {}, border {}, click threshold {})",
            config.screen_width,
            config.screen_height,
            config.titlebar_height,
            config.resize_border,
            config.click_threshold
        );
        Self {
            mouse: Ps2Mouse::new(config.screen_width, config.screen_height),
            config,
            theme,
            display,
            registry: WindowRegistry::new(),
            interaction: InteractionMachine::new(),
            input_callback: None,
        }
    }

    // ── Window lifecycle ──

    /// Creates a visible window on top of the stack and gives it focus.
    pub fn create_window(
        &mut self,
        title: &str,
        width: u32,
        height: u32,
        flags: WindowFlags,
    ) -> WmResult<WindowId> {
        let result = self.registry.create(
            title,
            width,
            height,
            flags,
            &self.config,
            self.theme.window_bg,
        );
        match result {
            Ok(_) if !self.interaction.state().is_idle() => {
                // Focus moved to the new window; the gesture loses its target.
                self.interaction.cancel();
            }
            Err(WmError::OutOfMemory) => {
                klog_warn!(
                    "wm: out of memory creating '{}' {}x{}",
                    title,
                    width,
                    height
                );
            }
            Err(err) => klog_debug!("wm: create '{}' rejected: {}", title, err),
            Ok(_) => {}
        }
        result
    }

    /// Fires the close sink, then unlinks the window and frees its buffer.
    pub fn close_window(&mut self, id: WindowId) -> WmResult {
        self.registry.require_mut(id)?.notify(WindowEvent::Close);
        self.interaction.forget(id);
        self.registry.remove(id);
        klog_debug!("wm: closed window {}", id);
        Ok(())
    }

    pub fn set_position(&mut self, id: WindowId, x: u32, y: u32) -> WmResult {
        self.registry.require_mut(id)?.set_position(x, y);
        Ok(())
    }

    /// Changes the window size, reallocating its buffer and firing the
    /// resize sink. Sizes below the window's minimum are rejected.
    pub fn set_size(&mut self, id: WindowId, width: u32, height: u32) -> WmResult {
        let window = self.registry.require_mut(id)?;
        let (min_w, min_h) = window.min_size();
        if width == 0 || height == 0 || width < min_w || height < min_h {
            klog_debug!("wm: rejecting size {}x{} for window {}", width, height, id);
            return Err(WmError::InvalidGeometry);
        }
        match window.resize(width, height) {
            Ok(true) => {
                window.notify(WindowEvent::Resize { width, height });
                Ok(())
            }
            Ok(false) => Ok(()),
            Err(err) => {
                klog_warn!(
                    "wm: resize of window {} to {}x{} failed: {}",
                    id,
                    width,
                    height,
                    err
                );
                Err(err)
            }
        }
    }

    pub fn set_min_size(&mut self, id: WindowId, width: u32, height: u32) -> WmResult {
        self.registry.require_mut(id)?.set_min_size(width, height)
    }

    pub fn set_title(&mut self, id: WindowId, title: &str) -> WmResult {
        self.registry.require_mut(id)?.set_title(title)
    }

    pub fn set_background(&mut self, id: WindowId, color: Color32) -> WmResult {
        self.registry.require_mut(id)?.set_background(color);
        Ok(())
    }

    pub fn show_window(&mut self, id: WindowId) -> WmResult {
        self.registry.require_mut(id)?.set_visible(true);
        Ok(())
    }

    /// Hidden windows are skipped by hit-testing and rendering. Hiding the
    /// focused window drops focus; any gesture on it is abandoned.
    pub fn hide_window(&mut self, id: WindowId) -> WmResult {
        self.registry.require_mut(id)?.set_visible(false);
        self.interaction.forget(id);
        if self.registry.focused() == Some(id) {
            self.registry.unfocus();
        }
        Ok(())
    }

    /// Raises and focuses `id`. A gesture on another window is abandoned.
    pub fn focus_window(&mut self, id: WindowId) -> WmResult {
        if !self.registry.contains(id) {
            klog_debug!("wm: cannot focus unknown window {}", id);
            return Err(WmError::UnknownWindow);
        }
        if let Some(active) = self.interaction.state().window() {
            if active != id {
                self.interaction.cancel();
            }
        }
        self.registry.promote_to_front(id)
    }

    // ── Event sinks ──

    pub fn set_event_sink(&mut self, id: WindowId, sink: EventSink) -> WmResult {
        self.registry.require_mut(id)?.set_sink(sink);
        Ok(())
    }

    pub fn clear_event_sink(&mut self, id: WindowId, kind: EventKind) -> WmResult {
        self.registry.require_mut(id)?.clear_sink(kind);
        Ok(())
    }

    /// Installs the raw pointer observer; a later call replaces it.
    pub fn set_input_callback(&mut self, callback: InputCallback) {
        self.input_callback = Some(callback);
    }

    pub fn clear_input_callback(&mut self) {
        self.input_callback = None;
    }

    // ── Input ──

    /// Feed one byte from the PS/2 auxiliary port.
    pub fn feed_pointer_byte(&mut self, byte: u8) {
        if let Some(sample) = self.mouse.handle_byte(byte) {
            self.handle_sample(sample);
        }
    }

    /// Feed bytes from `next` until it runs dry or [`POINTER_DRAIN_BUDGET`]
    /// bytes were taken. Returns the number of bytes consumed. A source that
    /// is still producing at the limit is treated as stuck and the decoder
    /// is resynced.
    pub fn drain_pointer_bytes(&mut self, mut next: impl FnMut() -> Option<u8>) -> usize {
        for taken in 0..POINTER_DRAIN_BUDGET {
            let Some(byte) = next() else {
                return taken;
            };
            self.feed_pointer_byte(byte);
        }
        klog_warn!(
            "wm: pointer port still busy after {} bytes, resyncing",
            POINTER_DRAIN_BUDGET
        );
        self.mouse.resync();
        POINTER_DRAIN_BUDGET
    }

    /// Inject an absolute pointer position, bypassing the packet decoder.
    pub fn handle_pointer(&mut self, x: i32, y: i32, buttons: MouseButtons) {
        let (prev_x, prev_y) = self.mouse.position();
        self.mouse.warp(x, y);
        let (x, y) = self.mouse.position();
        self.handle_sample(PointerSample {
            x,
            y,
            buttons,
            prev_x,
            prev_y,
        });
    }

    fn handle_sample(&mut self, sample: PointerSample) {
        if sample.moved() {
            self.display.erase_cursor(sample.prev_x, sample.prev_y);
            self.display.draw_cursor(sample.x, sample.y);
        }
        if let Some(callback) = self.input_callback {
            callback(sample.x, sample.y, sample.buttons);
        }
        self.interaction.step(
            &mut self.registry,
            &self.config,
            sample.x,
            sample.y,
            sample.buttons,
        );
    }

    /// Deliver a key press to the focused window, if any.
    pub fn dispatch_key(&mut self, key: u8) {
        let Some(id) = self.registry.focused() else {
            return;
        };
        if let Some(window) = self.registry.get_mut(id) {
            window.notify(WindowEvent::KeyPress { key });
        }
    }

    // ── Rendering ──

    pub fn render_frame(&mut self) {
        render::render_frame(
            &mut self.display,
            &mut self.registry,
            &self.theme,
            &self.config,
            self.mouse.position(),
        );
    }

    /// Adopt a new screen size after a mode switch. The cursor is pulled
    /// back on screen; windows are left where they are.
    pub fn set_screen_size(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            klog_debug!("wm: ignoring empty screen size {}x{}", width, height);
            return;
        }
        self.config.screen_width = width;
        self.config.screen_height = height;
        self.mouse.set_bounds(width, height);
    }

    // ── Accessors ──

    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.registry.get(id)
    }

    pub fn windows(&self) -> &WindowRegistry {
        &self.registry
    }

    pub fn focused(&self) -> Option<WindowId> {
        self.registry.focused()
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction.state()
    }

    pub fn cursor_position(&self) -> (i32, i32) {
        self.mouse.position()
    }

    pub fn decoder_stats(&self) -> DecoderStats {
        self.mouse.stats()
    }

    pub fn config(&self) -> &WmConfig {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }
}

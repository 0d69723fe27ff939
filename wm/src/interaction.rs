//! Pointer interaction state machine.
//!
//! Each decoded pointer sample advances the machine by one step:
//!
//! ```text
//!            press on focused title bar
//!   Idle ───────────────────────────────▶ Dragging ──┐
//!    │ ▲     press on focused resize edge            │ release
//!    │ └──────────────────────────────── Resizing ◀──┘ (click if never engaged)
//!    └─ press elsewhere: promote / deliver button, stay Idle
//! ```
//!
//! A press only turns into a move or resize after the pointer has travelled
//! `click_threshold` pixels (Chebyshev distance) while held. Until then the
//! gesture is a click and is delivered as one on release.

use lumaos_abi::{MouseButtons, Rect, ResizeEdges, WindowId};
use lumaos_lib::{klog_debug, klog_warn};

use crate::config::WmConfig;
use crate::events::WindowEvent;
use crate::hit_test;
use crate::registry::WindowRegistry;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragState {
    pub window: WindowId,
    /// Press point minus window origin.
    pub grab_dx: i32,
    pub grab_dy: i32,
    /// Where the button went down.
    pub origin_x: i32,
    pub origin_y: i32,
    /// Latched once the pointer leaves the click threshold.
    pub engaged: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizeState {
    pub window: WindowId,
    pub edges: ResizeEdges,
    pub origin_x: i32,
    pub origin_y: i32,
    /// Window geometry when the button went down.
    pub origin_rect: Rect,
    pub engaged: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    Dragging(DragState),
    Resizing(ResizeState),
}

impl Interaction {
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Interaction::Idle)
    }

    /// Window the gesture in progress is operating on.
    pub fn window(&self) -> Option<WindowId> {
        match self {
            Interaction::Idle => None,
            Interaction::Dragging(d) => Some(d.window),
            Interaction::Resizing(r) => Some(r.window),
        }
    }
}

pub struct InteractionMachine {
    state: Interaction,
    prev_buttons: MouseButtons,
    last_pos: Option<(i32, i32)>,
}

impl InteractionMachine {
    pub const fn new() -> Self {
        Self {
            state: Interaction::Idle,
            prev_buttons: MouseButtons::empty(),
            last_pos: None,
        }
    }

    #[inline]
    pub fn state(&self) -> Interaction {
        self.state
    }

    /// Abandon a gesture on `id`, e.g. because the window went away.
    pub fn forget(&mut self, id: WindowId) {
        if self.state.window() == Some(id) {
            klog_debug!("wm: dropping interaction on window {}", id);
            self.state = Interaction::Idle;
        }
    }

    pub fn cancel(&mut self) {
        self.state = Interaction::Idle;
    }

    /// Advance by one pointer sample at screen position `(x, y)`.
    pub fn step(
        &mut self,
        registry: &mut WindowRegistry,
        config: &WmConfig,
        x: i32,
        y: i32,
        buttons: MouseButtons,
    ) {
        let pressed = buttons.pressed_since(self.prev_buttons).contains(MouseButtons::LEFT);
        let held = buttons.contains(MouseButtons::LEFT);
        let moved = self.last_pos != Some((x, y));
        self.prev_buttons = buttons;
        self.last_pos = Some((x, y));

        match self.state {
            Interaction::Idle => {
                if pressed {
                    self.press(registry, config, x, y, buttons);
                } else if !held && moved {
                    hover(registry, x, y, buttons);
                }
            }
            Interaction::Dragging(drag) => {
                if held {
                    self.drag_to(registry, config, drag, x, y);
                } else {
                    self.release(registry, x, y);
                }
            }
            Interaction::Resizing(resize) => {
                if held {
                    self.resize_to(registry, config, resize, x, y);
                } else {
                    self.release(registry, x, y);
                }
            }
        }

        if self.state.is_idle() {
            follow_focus(registry, x, y);
        }
    }

    fn press(
        &mut self,
        registry: &mut WindowRegistry,
        config: &WmConfig,
        x: i32,
        y: i32,
        buttons: MouseButtons,
    ) {
        let focused = registry.focused();

        if let Some(window) = registry.focused_window() {
            if window.is_visible() {
                let rect = window.rect();
                if hit_test::in_titlebar(window, x, y, config.titlebar_height) {
                    self.state = Interaction::Dragging(DragState {
                        window: window.id(),
                        grab_dx: (x as i64 - rect.left()) as i32,
                        grab_dy: (y as i64 - rect.top()) as i32,
                        origin_x: x,
                        origin_y: y,
                        engaged: false,
                    });
                    return;
                }

                let edges = hit_test::resize_edge_mask(window, x, y, config.resize_border);
                if !edges.is_empty() {
                    self.state = Interaction::Resizing(ResizeState {
                        window: window.id(),
                        edges,
                        origin_x: x,
                        origin_y: y,
                        origin_rect: rect,
                        engaged: false,
                    });
                    return;
                }
            }
        }

        match registry.topmost_at(x, y) {
            Some(hit) if Some(hit) != focused => {
                let _ = registry.promote_to_front(hit);
            }
            Some(hit) => {
                if let Some(window) = registry.get_mut(hit) {
                    let (lx, ly) = window.screen_to_local(x, y);
                    window.notify(WindowEvent::MouseButton {
                        x: lx,
                        y: ly,
                        buttons,
                    });
                }
            }
            None => {}
        }
    }

    fn drag_to(
        &mut self,
        registry: &mut WindowRegistry,
        config: &WmConfig,
        mut drag: DragState,
        x: i32,
        y: i32,
    ) {
        if !drag.engaged {
            if !beyond_threshold(drag.origin_x, drag.origin_y, x, y, config.click_threshold) {
                return;
            }
            drag.engaged = true;
            self.state = Interaction::Dragging(drag);
        }

        let Some(window) = registry.get_mut(drag.window) else {
            self.state = Interaction::Idle;
            return;
        };
        let nx = (x as i64 - drag.grab_dx as i64).clamp(0, u32::MAX as i64) as u32;
        let ny = (y as i64 - drag.grab_dy as i64).clamp(0, u32::MAX as i64) as u32;
        window.set_position(nx, ny);
    }

    fn resize_to(
        &mut self,
        registry: &mut WindowRegistry,
        config: &WmConfig,
        mut resize: ResizeState,
        x: i32,
        y: i32,
    ) {
        if !resize.engaged {
            if !beyond_threshold(resize.origin_x, resize.origin_y, x, y, config.click_threshold)
            {
                return;
            }
            resize.engaged = true;
            self.state = Interaction::Resizing(resize);
        }

        let Some(window) = registry.get_mut(resize.window) else {
            self.state = Interaction::Idle;
            return;
        };

        let target = resized_rect(
            resize.origin_rect,
            resize.edges,
            x as i64 - resize.origin_x as i64,
            y as i64 - resize.origin_y as i64,
            window.min_size(),
        );

        match window.resize(target.width, target.height) {
            Ok(changed) => {
                window.set_position(target.x, target.y);
                if changed {
                    window.notify(WindowEvent::Resize {
                        width: target.width,
                        height: target.height,
                    });
                }
            }
            Err(err) => {
                klog_warn!(
                    "wm: resize of window {} to {}x{} failed: {}",
                    resize.window,
                    target.width,
                    target.height,
                    err
                );
            }
        }
    }

    fn release(&mut self, registry: &mut WindowRegistry, x: i32, y: i32) {
        let state = core::mem::replace(&mut self.state, Interaction::Idle);
        let (id, engaged, resizing) = match state {
            Interaction::Idle => return,
            Interaction::Dragging(d) => (d.window, d.engaged, false),
            Interaction::Resizing(r) => (r.window, r.engaged, true),
        };
        let Some(window) = registry.get_mut(id) else {
            return;
        };

        if !engaged {
            let (lx, ly) = window.screen_to_local(x, y);
            window.notify(WindowEvent::MouseButton {
                x: lx,
                y: ly,
                buttons: MouseButtons::LEFT,
            });
        } else if resizing {
            let (width, height) = window.size();
            window.notify(WindowEvent::Resize { width, height });
        }
    }
}

impl Default for InteractionMachine {
    fn default() -> Self {
        Self::new()
    }
}

/// Forward plain pointer motion to the focused window.
fn hover(registry: &mut WindowRegistry, x: i32, y: i32, buttons: MouseButtons) {
    let Some(id) = registry.focused() else {
        return;
    };
    if let Some(window) = registry.get_mut(id) {
        let (lx, ly) = window.screen_to_local(x, y);
        window.notify(WindowEvent::MouseMove {
            x: lx,
            y: ly,
            buttons,
        });
    }
}

/// Focus follows the pointer: the window under it is raised and focused.
fn follow_focus(registry: &mut WindowRegistry, x: i32, y: i32) {
    if let Some(hit) = registry.topmost_at(x, y) {
        if registry.focused() != Some(hit) {
            let _ = registry.promote_to_front(hit);
        }
    }
}

#[inline]
fn beyond_threshold(ox: i32, oy: i32, x: i32, y: i32, threshold: u32) -> bool {
    let dx = (x as i64 - ox as i64).abs();
    let dy = (y as i64 - oy as i64).abs();
    dx.max(dy) >= threshold as i64
}

/// Geometry after moving `edges` of `origin` by `(dx, dy)`.
///
/// Edges not in the mask stay put. A moving edge stops where the window
/// would shrink below `min` or where the left/top edge would leave the
/// screen.
pub fn resized_rect(origin: Rect, edges: ResizeEdges, dx: i64, dy: i64, min: (u32, u32)) -> Rect {
    let (min_w, min_h) = (min.0.max(1) as i64, min.1.max(1) as i64);
    let (mut left, mut top) = (origin.left(), origin.top());
    let (mut right, mut bottom) = (origin.right(), origin.bottom());

    if edges.contains(ResizeEdges::LEFT) {
        left = (left + dx).min(right - min_w).max(0);
    } else if edges.contains(ResizeEdges::RIGHT) {
        right = (right + dx).max(left + min_w);
    }

    if edges.contains(ResizeEdges::TOP) {
        top = (top + dy).min(bottom - min_h).max(0);
    } else if edges.contains(ResizeEdges::BOTTOM) {
        bottom = (bottom + dy).max(top + min_h);
    }

    let clamp = |v: i64| v.clamp(0, u32::MAX as i64) as u32;
    Rect::new(clamp(left), clamp(top), clamp(right - left), clamp(bottom - top))
}

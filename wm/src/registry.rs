//! Z-ordered window set and focus.
//!
//! Windows are kept back-to-front: index 0 is drawn first, the last entry is
//! topmost and is checked first by hit-testing. Focus always names a window
//! that is still registered.

use alloc::vec::Vec;

use lumaos_abi::{Color32, WindowFlags, WindowId, WmError, WmResult};
use lumaos_lib::klog_debug;

use crate::config::WmConfig;
use crate::window::Window;

pub struct WindowRegistry {
    windows: Vec<Window>,
    focused: Option<WindowId>,
    next_id: u32,
}

impl WindowRegistry {
    pub const fn new() -> Self {
        Self {
            windows: Vec::new(),
            focused: None,
            next_id: 1,
        }
    }

    /// Creates a window on top of the stack and focuses it.
    pub fn create(
        &mut self,
        title: &str,
        width: u32,
        height: u32,
        flags: WindowFlags,
        config: &WmConfig,
        background: Color32,
    ) -> WmResult<WindowId> {
        self.windows
            .try_reserve(1)
            .map_err(|_| WmError::OutOfMemory)?;
        let next_id = self.next_id.checked_add(1).ok_or_else(|| {
            klog_debug!("wm: window ids exhausted");
            WmError::OutOfMemory
        })?;
        let id = WindowId::new(self.next_id);
        let window = Window::new(id, title, width, height, flags, config, background)?;
        self.next_id = next_id;
        self.windows.push(window);
        self.focused = Some(id);
        klog_debug!("wm: created window {} '{}' {}x{}", id, title, width, height);
        Ok(id)
    }

    /// Unlinks a window. Focus is cleared if it pointed at it; no other
    /// window is picked automatically.
    pub fn remove(&mut self, id: WindowId) -> Option<Window> {
        let index = self.index_of(id)?;
        let window = self.windows.remove(index);
        if self.focused == Some(id) {
            self.focused = None;
        }
        Some(window)
    }

    /// Moves `id` to the top of the stack and focuses it. Calling it on the
    /// topmost window only (re)asserts focus.
    pub fn promote_to_front(&mut self, id: WindowId) -> WmResult {
        let index = self.index_of(id).ok_or(WmError::UnknownWindow)?;
        self.windows[index..].rotate_left(1);
        self.focused = Some(id);
        Ok(())
    }

    /// Drops focus without touching the stacking order.
    pub fn unfocus(&mut self) {
        self.focused = None;
    }

    /// Topmost visible window containing the point.
    pub fn topmost_at(&self, x: i32, y: i32) -> Option<WindowId> {
        self.windows
            .iter()
            .rev()
            .find(|w| w.is_visible() && w.rect().contains(x, y))
            .map(Window::id)
    }

    #[inline]
    pub fn focused(&self) -> Option<WindowId> {
        self.focused
    }

    pub fn focused_window(&self) -> Option<&Window> {
        self.focused.and_then(|id| self.get(id))
    }

    pub fn topmost(&self) -> Option<WindowId> {
        self.windows.last().map(Window::id)
    }

    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.iter().find(|w| w.id() == id)
    }

    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.id() == id)
    }

    /// Like [`get_mut`](Self::get_mut) but logs and reports unknown ids.
    pub(crate) fn require_mut(&mut self, id: WindowId) -> WmResult<&mut Window> {
        match self.windows.iter_mut().find(|w| w.id() == id) {
            Some(window) => Ok(window),
            None => {
                klog_debug!("wm: unknown window {}", id);
                Err(WmError::UnknownWindow)
            }
        }
    }

    #[inline]
    pub fn contains(&self, id: WindowId) -> bool {
        self.index_of(id).is_some()
    }

    /// Back-to-front iteration, the order windows are painted in.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Window> {
        self.windows.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut Window> {
        self.windows.iter_mut()
    }

    /// Ids from topmost to bottom.
    pub fn front_to_back(&self) -> impl Iterator<Item = WindowId> + '_ {
        self.windows.iter().rev().map(Window::id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    fn index_of(&self, id: WindowId) -> Option<usize> {
        self.windows.iter().position(|w| w.id() == id)
    }

    #[cfg(test)]
    pub(crate) fn invariants_hold(&self) -> bool {
        let unique = self
            .windows
            .iter()
            .enumerate()
            .all(|(i, a)| self.windows[i + 1..].iter().all(|b| b.id() != a.id()));
        let focus_live = self.focused.is_none_or(|id| self.contains(id));
        unique && focus_live
    }
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self::new()
    }
}

//! Per-window event sinks.
//!
//! Every window carries one slot per [`EventKind`]. A slot is either empty,
//! in which case events of that kind are dropped, or holds an [`EventSink`]
//! whose callback signature matches the kind.

use alloc::boxed::Box;

use lumaos_abi::{MouseButtons, WindowId};

use crate::window::PixelBuffer;

/// The six kinds of notification a window can receive.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Close = 0,
    Resize = 1,
    MouseMove = 2,
    MouseButton = 3,
    KeyPress = 4,
    Draw = 5,
}

impl EventKind {
    pub const COUNT: usize = 6;

    pub const ALL: [EventKind; Self::COUNT] = [
        EventKind::Close,
        EventKind::Resize,
        EventKind::MouseMove,
        EventKind::MouseButton,
        EventKind::KeyPress,
        EventKind::Draw,
    ];

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }
}

/// A notification addressed to one window. Pointer coordinates are
/// window-local and may be negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowEvent {
    Close,
    Resize {
        width: u32,
        height: u32,
    },
    MouseMove {
        x: i32,
        y: i32,
        buttons: MouseButtons,
    },
    MouseButton {
        x: i32,
        y: i32,
        buttons: MouseButtons,
    },
    KeyPress {
        key: u8,
    },
    Draw,
}

impl WindowEvent {
    pub const fn kind(&self) -> EventKind {
        match self {
            WindowEvent::Close => EventKind::Close,
            WindowEvent::Resize { .. } => EventKind::Resize,
            WindowEvent::MouseMove { .. } => EventKind::MouseMove,
            WindowEvent::MouseButton { .. } => EventKind::MouseButton,
            WindowEvent::KeyPress { .. } => EventKind::KeyPress,
            WindowEvent::Draw => EventKind::Draw,
        }
    }
}

pub type CloseFn = Box<dyn FnMut(WindowId)>;
pub type ResizeFn = Box<dyn FnMut(WindowId, u32, u32)>;
pub type PointerFn = Box<dyn FnMut(WindowId, i32, i32, MouseButtons)>;
pub type KeyFn = Box<dyn FnMut(WindowId, u8)>;
pub type DrawFn = Box<dyn FnMut(WindowId, &mut PixelBuffer)>;

/// A callback bound to one event kind.
pub enum EventSink {
    Close(CloseFn),
    Resize(ResizeFn),
    MouseMove(PointerFn),
    MouseButton(PointerFn),
    KeyPress(KeyFn),
    Draw(DrawFn),
}

impl EventSink {
    pub fn close(f: impl FnMut(WindowId) + 'static) -> Self {
        Self::Close(Box::new(f))
    }

    pub fn resize(f: impl FnMut(WindowId, u32, u32) + 'static) -> Self {
        Self::Resize(Box::new(f))
    }

    pub fn mouse_move(f: impl FnMut(WindowId, i32, i32, MouseButtons) + 'static) -> Self {
        Self::MouseMove(Box::new(f))
    }

    pub fn mouse_button(f: impl FnMut(WindowId, i32, i32, MouseButtons) + 'static) -> Self {
        Self::MouseButton(Box::new(f))
    }

    pub fn key_press(f: impl FnMut(WindowId, u8) + 'static) -> Self {
        Self::KeyPress(Box::new(f))
    }

    pub fn draw(f: impl FnMut(WindowId, &mut PixelBuffer) + 'static) -> Self {
        Self::Draw(Box::new(f))
    }

    pub const fn kind(&self) -> EventKind {
        match self {
            EventSink::Close(_) => EventKind::Close,
            EventSink::Resize(_) => EventKind::Resize,
            EventSink::MouseMove(_) => EventKind::MouseMove,
            EventSink::MouseButton(_) => EventKind::MouseButton,
            EventSink::KeyPress(_) => EventKind::KeyPress,
            EventSink::Draw(_) => EventKind::Draw,
        }
    }
}

enum Slot {
    Empty,
    Bound(EventSink),
}

/// The full set of slots owned by a window.
pub struct EventSinks {
    slots: [Slot; EventKind::COUNT],
}

impl EventSinks {
    pub const fn new() -> Self {
        Self {
            slots: [
                Slot::Empty,
                Slot::Empty,
                Slot::Empty,
                Slot::Empty,
                Slot::Empty,
                Slot::Empty,
            ],
        }
    }

    /// Install `sink` in the slot for its kind, replacing any previous one.
    pub fn set(&mut self, sink: EventSink) {
        let index = sink.kind().index();
        self.slots[index] = Slot::Bound(sink);
    }

    pub fn clear(&mut self, kind: EventKind) {
        self.slots[kind.index()] = Slot::Empty;
    }

    pub fn is_bound(&self, kind: EventKind) -> bool {
        matches!(self.slots[kind.index()], Slot::Bound(_))
    }

    /// Deliver `event` to its slot. Returns `false` if the slot was empty.
    /// Draw sinks paint into `surface`.
    pub fn dispatch(&mut self, id: WindowId, event: WindowEvent, surface: &mut PixelBuffer) -> bool {
        let Slot::Bound(sink) = &mut self.slots[event.kind().index()] else {
            return false;
        };
        match (sink, event) {
            (EventSink::Close(f), WindowEvent::Close) => f(id),
            (EventSink::Resize(f), WindowEvent::Resize { width, height }) => f(id, width, height),
            (EventSink::MouseMove(f), WindowEvent::MouseMove { x, y, buttons }) => {
                f(id, x, y, buttons)
            }
            (EventSink::MouseButton(f), WindowEvent::MouseButton { x, y, buttons }) => {
                f(id, x, y, buttons)
            }
            (EventSink::KeyPress(f), WindowEvent::KeyPress { key }) => f(id, key),
            (EventSink::Draw(f), WindowEvent::Draw) => f(id, surface),
            // Slots are indexed by kind, so a mismatch cannot be stored.
            _ => return false,
        }
        true
    }
}

impl Default for EventSinks {
    fn default() -> Self {
        Self::new()
    }
}

//! Recording fakes shared by the scenario tests.

use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::RefCell;

use lumaos_abi::{Color32, Rect, WindowFlags, WindowId};

use crate::config::WmConfig;
use crate::desktop::Desktop;
use crate::events::{EventSink, WindowEvent};
use crate::render::Display;
use crate::window::{PixelBuffer, Window};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayOp {
    ClearScreen(Color32),
    Clear,
    Rect(Rect, Color32),
    Text(String, u32, u32),
    Sink(WindowId),
    Present(WindowId),
    DrawCursor(i32, i32),
    EraseCursor(i32, i32),
}

pub type OpLog = Rc<RefCell<Vec<DisplayOp>>>;

/// Paints like the default software path and records every call.
pub struct RecordingDisplay {
    pub ops: OpLog,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self {
            ops: Rc::new(RefCell::new(Vec::new())),
        }
    }

    fn push(&self, op: DisplayOp) {
        self.ops.borrow_mut().push(op);
    }
}

impl Display for RecordingDisplay {
    fn clear_screen(&mut self, color: Color32) {
        self.push(DisplayOp::ClearScreen(color));
    }

    fn clear(&mut self, surface: &mut PixelBuffer) {
        surface.fill(Color32::BLACK);
        self.push(DisplayOp::Clear);
    }

    fn draw_rect(&mut self, surface: &mut PixelBuffer, rect: Rect, color: Color32) {
        surface.fill_rect(rect, color);
        self.push(DisplayOp::Rect(rect, color));
    }

    fn draw_text(&mut self, _surface: &mut PixelBuffer, text: &str, x: u32, y: u32, _color: Color32) {
        self.push(DisplayOp::Text(text.to_string(), x, y));
    }

    fn present(&mut self, window: &Window) {
        self.push(DisplayOp::Present(window.id()));
    }

    fn draw_cursor(&mut self, x: i32, y: i32) {
        self.push(DisplayOp::DrawCursor(x, y));
    }

    fn erase_cursor(&mut self, x: i32, y: i32) {
        self.push(DisplayOp::EraseCursor(x, y));
    }
}

pub type EventLog = Rc<RefCell<Vec<(WindowId, WindowEvent)>>>;

pub fn desktop() -> Desktop<RecordingDisplay> {
    Desktop::new(WmConfig::default(), RecordingDisplay::new())
}

pub fn desktop_with(config: WmConfig) -> Desktop<RecordingDisplay> {
    Desktop::new(config, RecordingDisplay::new())
}

/// A decorated window at `(x, y)`.
pub fn open(
    desk: &mut Desktop<RecordingDisplay>,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    flags: WindowFlags,
) -> WindowId {
    let id = desk.create_window("test", width, height, flags).unwrap();
    desk.set_position(id, x, y).unwrap();
    id
}

/// Binds every non-draw sink of `id` to `log`.
pub fn record_events(desk: &mut Desktop<RecordingDisplay>, id: WindowId, log: &EventLog) {
    let l = log.clone();
    desk.set_event_sink(id, EventSink::close(move |id| l.borrow_mut().push((id, WindowEvent::Close))))
        .unwrap();
    let l = log.clone();
    desk.set_event_sink(
        id,
        EventSink::resize(move |id, width, height| {
            l.borrow_mut().push((id, WindowEvent::Resize { width, height }))
        }),
    )
    .unwrap();
    let l = log.clone();
    desk.set_event_sink(
        id,
        EventSink::mouse_move(move |id, x, y, buttons| {
            l.borrow_mut().push((id, WindowEvent::MouseMove { x, y, buttons }))
        }),
    )
    .unwrap();
    let l = log.clone();
    desk.set_event_sink(
        id,
        EventSink::mouse_button(move |id, x, y, buttons| {
            l.borrow_mut().push((id, WindowEvent::MouseButton { x, y, buttons }))
        }),
    )
    .unwrap();
    let l = log.clone();
    desk.set_event_sink(
        id,
        EventSink::key_press(move |id, key| l.borrow_mut().push((id, WindowEvent::KeyPress { key }))),
    )
    .unwrap();
}

pub fn new_log() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Events of `log` that satisfy `pred`.
pub fn events_matching(log: &EventLog, pred: impl Fn(&WindowEvent) -> bool) -> Vec<(WindowId, WindowEvent)> {
    log.borrow().iter().filter(|(_, e)| pred(e)).copied().collect()
}

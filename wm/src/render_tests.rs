//! Frame composition order and decoration pixels.

use std::vec::Vec;

use lumaos_abi::{Color32, Rect, WindowFlags, WindowId};

use crate::config::WmConfig;
use crate::desktop::Desktop;
use crate::events::EventSink;
use crate::render::Display;
use crate::test_support::*;
use crate::window::Window;

fn bind_draw_marker(desk: &mut Desktop<RecordingDisplay>, id: WindowId) {
    let ops = desk.display().ops.clone();
    desk.set_event_sink(
        id,
        EventSink::draw(move |id, _| ops.borrow_mut().push(DisplayOp::Sink(id))),
    )
    .unwrap();
}

#[test]
fn frame_composes_back_to_front_with_cursor_last() {
    let mut desk = desktop();
    let a = open(&mut desk, 10, 10, 100, 60, WindowFlags::DECORATED);
    let hidden = open(&mut desk, 20, 20, 100, 60, WindowFlags::DECORATED);
    desk.hide_window(hidden).unwrap();
    let b = open(&mut desk, 50, 50, 100, 60, WindowFlags::DECORATED);
    bind_draw_marker(&mut desk, a);
    bind_draw_marker(&mut desk, b);
    let theme = *desk.theme();
    let log = desk.display().ops.clone();
    log.borrow_mut().clear();

    desk.render_frame();

    let ops = log.borrow();
    assert_eq!(ops.first(), Some(&DisplayOp::EraseCursor(400, 300)));
    assert_eq!(ops[1], DisplayOp::ClearScreen(theme.background));
    assert_eq!(ops.last(), Some(&DisplayOp::DrawCursor(400, 300)));

    let presented: Vec<WindowId> = ops
        .iter()
        .filter_map(|op| match op {
            DisplayOp::Present(id) => Some(*id),
            _ => None,
        })
        .collect();
    assert_eq!(presented, [a, b]);

    let border = theme.border;
    let expected = [
        DisplayOp::Clear,
        DisplayOp::Rect(Rect::new(0, 0, 100, 60), theme.window_bg),
        DisplayOp::Rect(Rect::new(0, 0, 100, 24), theme.titlebar),
        DisplayOp::Text("test".into(), 8, 8),
        DisplayOp::Rect(Rect::new(0, 0, 100, 1), border),
        DisplayOp::Rect(Rect::new(0, 59, 100, 1), border),
        DisplayOp::Rect(Rect::new(0, 0, 1, 60), border),
        DisplayOp::Rect(Rect::new(99, 0, 1, 60), border),
        DisplayOp::Sink(a),
        DisplayOp::Present(a),
    ];
    assert_eq!(&ops[2..2 + expected.len()], &expected);

    // The focused window gets the accent title bar.
    assert_eq!(
        ops[2 + expected.len() + 2],
        DisplayOp::Rect(Rect::new(0, 0, 100, 24), theme.titlebar_focused)
    );
}

#[test]
fn decorations_land_in_window_buffer() {
    let mut desk = desktop();
    let id = open(&mut desk, 10, 10, 100, 60, WindowFlags::DECORATED);
    desk.render_frame();

    let theme = *desk.theme();
    let buf = desk.window(id).unwrap().buffer();
    assert_eq!(buf.pixel(0, 0), Some(theme.border.to_u32()));
    assert_eq!(buf.pixel(99, 59), Some(theme.border.to_u32()));
    assert_eq!(buf.pixel(50, 5), Some(theme.titlebar_focused.to_u32()));
    assert_eq!(buf.pixel(50, 40), Some(theme.window_bg.to_u32()));
}

#[test]
fn draw_sink_paints_after_decorations() {
    let mut desk = desktop();
    let id = open(&mut desk, 10, 10, 100, 60, WindowFlags::DECORATED);
    desk.set_event_sink(
        id,
        EventSink::draw(|_, surface| surface.fill_rect(Rect::new(10, 30, 5, 5), Color32::WHITE)),
    )
    .unwrap();
    desk.render_frame();
    let buf = desk.window(id).unwrap().buffer();
    assert_eq!(buf.pixel(12, 32), Some(0xFFFF_FFFF));
}

#[test]
fn undecorated_window_is_plain_background() {
    let mut desk = desktop();
    let id = open(&mut desk, 10, 10, 40, 30, WindowFlags::empty());
    let log = desk.display().ops.clone();
    log.borrow_mut().clear();
    desk.render_frame();

    let theme = *desk.theme();
    let ops = log.borrow();
    assert_eq!(
        &ops[2..5],
        &[
            DisplayOp::Clear,
            DisplayOp::Rect(Rect::new(0, 0, 40, 30), theme.window_bg),
            DisplayOp::Present(id),
        ]
    );
}

/// Implements only the screen-facing hooks; buffer drawing uses the
/// software defaults.
struct ScreenOnly {
    presented: usize,
}

impl Display for ScreenOnly {
    fn clear_screen(&mut self, _color: Color32) {}

    fn present(&mut self, _window: &Window) {
        self.presented += 1;
    }

    fn draw_cursor(&mut self, _x: i32, _y: i32) {}

    fn erase_cursor(&mut self, _x: i32, _y: i32) {}
}

#[test]
fn software_defaults_render_title_cells() {
    let mut desk = Desktop::new(WmConfig::default(), ScreenOnly { presented: 0 });
    let id = desk.create_window("ab", 100, 60, WindowFlags::DECORATED).unwrap();
    desk.render_frame();

    let theme = *desk.theme();
    let buf = desk.window(id).unwrap().buffer();
    // First glyph cell starts at (8, 8); its inner 6x6 block is text colour.
    assert_eq!(buf.pixel(9, 9), Some(theme.text_primary.to_u32()));
    assert_eq!(buf.pixel(8, 8), Some(theme.titlebar_focused.to_u32()));
    assert_eq!(desk.display().presented, 1);
}

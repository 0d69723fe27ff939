//! Pure geometry queries over windows.

use lumaos_abi::{Rect, ResizeEdges, WindowFlags};

use crate::window::Window;

/// Half-open containment of a screen point in the window rectangle.
#[inline]
pub fn contains(window: &Window, x: i32, y: i32) -> bool {
    window.rect().contains(x, y)
}

/// True if the point lies on the title bar band of a titled window.
pub fn in_titlebar(window: &Window, x: i32, y: i32, titlebar_height: u32) -> bool {
    if !window.flags().contains(WindowFlags::TITLED) {
        return false;
    }
    let rect = window.rect();
    let band = Rect::new(
        rect.x,
        rect.y,
        rect.width,
        titlebar_height.min(rect.height),
    );
    band.contains(x, y)
}

/// Edges of `rect` within `border` pixels of the point.
///
/// The point must lie inside the rectangle inflated by `border` on every
/// side. When both opposite edges are in reach (very small windows) the
/// nearer one wins, ties going to right/bottom, so the mask never holds more
/// than one horizontal and one vertical edge.
pub fn resize_edges(rect: Rect, x: i32, y: i32, border: u32) -> ResizeEdges {
    let (px, py) = (x as i64, y as i64);
    let t = border as i64;
    let (left, top, right, bottom) = (rect.left(), rect.top(), rect.right(), rect.bottom());

    if px < left - t || px > right + t || py < top - t || py > bottom + t {
        return ResizeEdges::empty();
    }

    let mut edges = ResizeEdges::empty();

    let (dl, dr) = ((px - left).abs(), (px - right).abs());
    if dl <= t || dr <= t {
        edges |= if dl < dr {
            ResizeEdges::LEFT
        } else {
            ResizeEdges::RIGHT
        };
    }

    let (dt, db) = ((py - top).abs(), (py - bottom).abs());
    if dt <= t || db <= t {
        edges |= if dt < db {
            ResizeEdges::TOP
        } else {
            ResizeEdges::BOTTOM
        };
    }

    edges
}

/// [`resize_edges`] for a window, empty unless it is resizable and visible.
pub fn resize_edge_mask(window: &Window, x: i32, y: i32, border: u32) -> ResizeEdges {
    if !window.is_visible() || !window.flags().contains(WindowFlags::RESIZABLE) {
        return ResizeEdges::empty();
    }
    resize_edges(window.rect(), x, y, border)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WmConfig;
    use lumaos_abi::{Color32, WindowId};

    fn window(flags: WindowFlags) -> Window {
        let mut w = Window::new(
            WindowId::new(1),
            "t",
            100,
            100,
            flags,
            &WmConfig::default(),
            Color32::BLACK,
        )
        .unwrap();
        w.set_position(100, 100);
        w
    }

    #[test]
    fn titlebar_band_is_half_open() {
        let w = window(WindowFlags::TITLED);
        assert!(in_titlebar(&w, 100, 100, 24));
        assert!(in_titlebar(&w, 199, 123, 24));
        assert!(!in_titlebar(&w, 199, 124, 24));
        assert!(!in_titlebar(&w, 200, 110, 24));
        assert!(!in_titlebar(&w, 99, 110, 24));
    }

    #[test]
    fn untitled_window_has_no_titlebar() {
        let w = window(WindowFlags::BORDERED);
        assert!(!in_titlebar(&w, 150, 105, 24));
    }

    #[test]
    fn edges_and_corners() {
        let r = Rect::new(100, 100, 100, 100);
        assert_eq!(resize_edges(r, 150, 150, 5), ResizeEdges::empty());
        assert_eq!(resize_edges(r, 200, 150, 5), ResizeEdges::RIGHT);
        assert_eq!(resize_edges(r, 96, 150, 5), ResizeEdges::LEFT);
        assert_eq!(resize_edges(r, 150, 104, 5), ResizeEdges::TOP);
        assert_eq!(resize_edges(r, 203, 198, 5), ResizeEdges::BOTTOM_RIGHT);
        assert_eq!(resize_edges(r, 95, 95, 5), ResizeEdges::TOP_LEFT);
    }

    #[test]
    fn outside_inflated_rect_is_empty() {
        let r = Rect::new(100, 100, 100, 100);
        assert!(resize_edges(r, 94, 150, 5).is_empty());
        assert!(resize_edges(r, 206, 150, 5).is_empty());
        // Near the right edge's x but far above the window.
        assert!(resize_edges(r, 200, 50, 5).is_empty());
    }

    #[test]
    fn tiny_window_sets_at_most_one_bit_per_axis() {
        let r = Rect::new(10, 10, 4, 4);
        for x in 0..25 {
            for y in 0..25 {
                let e = resize_edges(r, x, y, 5);
                assert!(!e.contains(ResizeEdges::LEFT | ResizeEdges::RIGHT));
                assert!(!e.contains(ResizeEdges::TOP | ResizeEdges::BOTTOM));
            }
        }
        assert_eq!(resize_edges(r, 11, 12, 5), ResizeEdges::LEFT | ResizeEdges::BOTTOM);
    }

    #[test]
    fn mask_requires_resizable_flag() {
        let fixed = window(WindowFlags::DECORATED);
        assert!(resize_edge_mask(&fixed, 200, 150, 5).is_empty());
        let sizable = window(WindowFlags::DECORATED | WindowFlags::RESIZABLE);
        assert_eq!(resize_edge_mask(&sizable, 200, 150, 5), ResizeEdges::RIGHT);
    }
}

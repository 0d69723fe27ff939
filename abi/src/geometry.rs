//! Screen-space rectangles.
//!
//! Window positions and sizes are unsigned; pointer coordinates are signed so
//! that hit-testing against the inflated resize border never underflows. All
//! comparisons are carried out in `i64`.

/// An axis-aligned rectangle. `x`/`y` is the top-left corner; the right and
/// bottom edges are exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    #[inline]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub const fn left(&self) -> i64 {
        self.x as i64
    }

    #[inline]
    pub const fn top(&self) -> i64 {
        self.y as i64
    }

    /// One past the last column.
    #[inline]
    pub const fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// One past the last row.
    #[inline]
    pub const fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub const fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Half-open containment: `[x, x+width) × [y, y+height)`.
    #[inline]
    pub fn contains(&self, px: i32, py: i32) -> bool {
        let (px, py) = (px as i64, py as i64);
        px >= self.left() && px < self.right() && py >= self.top() && py < self.bottom()
    }

    /// Shrinks the rectangle by the given insets, collapsing to zero size
    /// rather than wrapping.
    pub fn inset(&self, left: u32, top: u32, right: u32, bottom: u32) -> Rect {
        Rect {
            x: self.x.saturating_add(left),
            y: self.y.saturating_add(top),
            width: self.width.saturating_sub(left.saturating_add(right)),
            height: self.height.saturating_sub(top.saturating_add(bottom)),
        }
    }

    /// Intersection with `other`, or `None` when they do not overlap.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if left >= right || top >= bottom {
            return None;
        }
        Some(Rect {
            x: left as u32,
            y: top as u32,
            width: (right - left) as u32,
            height: (bottom - top) as u32,
        })
    }
}

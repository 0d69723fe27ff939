//! Window-manager tunables.
//!
//! Everything the interaction and rendering code treats as a constant lives
//! here so a board or test can override it when building the [`Desktop`].
//!
//! [`Desktop`]: crate::Desktop

pub const DEFAULT_SCREEN_WIDTH: u32 = 800;
pub const DEFAULT_SCREEN_HEIGHT: u32 = 600;
pub const DEFAULT_TITLEBAR_HEIGHT: u32 = 24;
pub const DEFAULT_RESIZE_BORDER: u32 = 5;
pub const DEFAULT_CLICK_THRESHOLD: u32 = 3;
pub const DEFAULT_MIN_WIDTH: u32 = 48;
pub const DEFAULT_MIN_HEIGHT: u32 = 32;
pub const DEFAULT_WINDOW_X: u32 = 100;
pub const DEFAULT_WINDOW_Y: u32 = 100;

/// Width of a glyph cell used for title placement.
pub const GLYPH_WIDTH: u32 = 8;
pub const GLYPH_HEIGHT: u32 = 8;
/// Left inset of the title text inside the title bar.
pub const TITLE_INSET_X: u32 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WmConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    /// Height of the drag handle band at the top of titled windows.
    pub titlebar_height: u32,
    /// Half-width of the band around each edge that starts a resize.
    pub resize_border: u32,
    /// Chebyshev distance the pointer must travel while held before a press
    /// turns into a drag or resize.
    pub click_threshold: u32,
    pub min_width: u32,
    pub min_height: u32,
    /// Position given to newly created windows.
    pub default_x: u32,
    pub default_y: u32,
}

impl WmConfig {
    pub const fn new() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            titlebar_height: DEFAULT_TITLEBAR_HEIGHT,
            resize_border: DEFAULT_RESIZE_BORDER,
            click_threshold: DEFAULT_CLICK_THRESHOLD,
            min_width: DEFAULT_MIN_WIDTH,
            min_height: DEFAULT_MIN_HEIGHT,
            default_x: DEFAULT_WINDOW_X,
            default_y: DEFAULT_WINDOW_Y,
        }
    }

    pub const fn with_screen(mut self, width: u32, height: u32) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self
    }

    pub const fn with_titlebar_height(mut self, height: u32) -> Self {
        self.titlebar_height = height;
        self
    }

    pub const fn with_resize_border(mut self, border: u32) -> Self {
        self.resize_border = border;
        self
    }

    pub const fn with_click_threshold(mut self, threshold: u32) -> Self {
        self.click_threshold = threshold;
        self
    }

    /// Zero components are raised to 1; a window can never be empty.
    pub const fn with_min_size(mut self, width: u32, height: u32) -> Self {
        self.min_width = if width == 0 { 1 } else { width };
        self.min_height = if height == 0 { 1 } else { height };
        self
    }

    pub const fn with_default_origin(mut self, x: u32, y: u32) -> Self {
        self.default_x = x;
        self.default_y = y;
        self
    }

    /// Y offset of the title text inside the title bar.
    #[inline]
    pub const fn title_baseline(&self) -> u32 {
        self.titlebar_height.saturating_sub(GLYPH_HEIGHT) / 2
    }
}

impl Default for WmConfig {
    fn default() -> Self {
        Self::new()
    }
}

//! Colour palette.

use lumaos_abi::Color32;

pub const THEME_BG_DARKEST: u32 = 0x050510;
pub const THEME_BG_DARKER: u32 = 0x0A0A1E;
pub const THEME_BG_DESKTOP: u32 = 0x1A1A2E;
pub const THEME_ACCENT: u32 = 0x4A90E2;
pub const THEME_ACCENT_DARK: u32 = 0x2A5A8C;
pub const THEME_ACCENT_LIGHT: u32 = 0x6AA8FF;
pub const THEME_TEXT: u32 = 0xE0E0E0;
pub const THEME_TEXT_SECONDARY: u32 = 0xA0A0A0;
pub const THEME_BORDER: u32 = 0x1E1E3F;
pub const THEME_HIGHLIGHT: u32 = 0x2D2D5A;

/// Named palette slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeColor {
    Background,
    WindowBackground,
    Titlebar,
    TitlebarFocused,
    Border,
    TextPrimary,
    TextSecondary,
    Accent,
    Highlight,
    ButtonNormal,
    ButtonHover,
    ButtonPressed,
    Scrollbar,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub background: Color32,
    pub window_bg: Color32,
    pub titlebar: Color32,
    pub titlebar_focused: Color32,
    pub border: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub accent: Color32,
    pub highlight: Color32,
    pub button_normal: Color32,
    pub button_hover: Color32,
    pub button_pressed: Color32,
    pub scrollbar: Color32,
}

impl Theme {
    /// Dark blue palette the desktop ships with.
    pub const fn midnight() -> Self {
        Self {
            background: Color32::from_rgb_hex(THEME_BG_DESKTOP),
            window_bg: Color32::from_rgb_hex(THEME_BG_DARKER),
            titlebar: Color32::from_rgb_hex(THEME_ACCENT_DARK),
            titlebar_focused: Color32::from_rgb_hex(THEME_ACCENT),
            border: Color32::from_rgb_hex(THEME_BORDER),
            text_primary: Color32::from_rgb_hex(THEME_TEXT),
            text_secondary: Color32::from_rgb_hex(THEME_TEXT_SECONDARY),
            accent: Color32::from_rgb_hex(THEME_ACCENT),
            highlight: Color32::from_rgb_hex(THEME_HIGHLIGHT),
            button_normal: Color32::from_rgb_hex(THEME_ACCENT_DARK),
            button_hover: Color32::from_rgb_hex(THEME_ACCENT_LIGHT),
            button_pressed: Color32::from_rgb_hex(THEME_BG_DARKEST),
            scrollbar: Color32::from_rgb_hex(THEME_HIGHLIGHT),
        }
    }

    pub const fn color(&self, slot: ThemeColor) -> Color32 {
        match slot {
            ThemeColor::Background => self.background,
            ThemeColor::WindowBackground => self.window_bg,
            ThemeColor::Titlebar => self.titlebar,
            ThemeColor::TitlebarFocused => self.titlebar_focused,
            ThemeColor::Border => self.border,
            ThemeColor::TextPrimary => self.text_primary,
            ThemeColor::TextSecondary => self.text_secondary,
            ThemeColor::Accent => self.accent,
            ThemeColor::Highlight => self.highlight,
            ThemeColor::ButtonNormal => self.button_normal,
            ThemeColor::ButtonHover => self.button_hover,
            ThemeColor::ButtonPressed => self.button_pressed,
            ThemeColor::Scrollbar => self.scrollbar,
        }
    }

    /// Title bar fill for a window, brighter when it holds focus.
    pub const fn titlebar_for(&self, focused: bool) -> Color32 {
        if focused {
            self.titlebar_focused
        } else {
            self.titlebar
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::midnight()
    }
}

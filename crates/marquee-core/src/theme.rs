// File: crates/marquee-core/src/theme.rs
// Summary: Packed ARGB colors and light/dark presets for chart hosts.

use crate::overlay::OverlayStyle;

/// Packed ARGB color, the word layout softbuffer frames take directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn a(self) -> u8 { (self.0 >> 24) as u8 }
    pub const fn r(self) -> u8 { (self.0 >> 16) as u8 }
    pub const fn g(self) -> u8 { (self.0 >> 8) as u8 }
    pub const fn b(self) -> u8 { self.0 as u8 }
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid: Color,
    pub series_line: Color,
    pub selection: OverlayStyle,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 18, 18, 20),
            grid: Color::from_argb(255, 40, 40, 45),
            series_line: Color::from_argb(255, 64, 160, 255),
            selection: OverlayStyle {
                stroke: Color::from_argb(255, 235, 235, 245),
                fill: Color::from_argb(255, 128, 128, 128),
                stroke_width: 1.0,
                opacity: 0.5,
            },
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_argb(255, 250, 250, 252),
            grid: Color::from_argb(255, 230, 230, 235),
            series_line: Color::from_argb(255, 32, 120, 200),
            selection: OverlayStyle {
                stroke: Color::from_argb(255, 60, 60, 70),
                fill: Color::from_argb(255, 150, 150, 160),
                stroke_width: 1.0,
                opacity: 0.35,
            },
        }
    }
}

/// Built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::dark()
}

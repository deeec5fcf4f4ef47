//! Color palettes and the named themes that can override an emulator's own palette.

/// 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Rgb,
    pub fg: Rgb,
    /// Secondary text (system lines, loading indicator).
    pub dim: Rgb,
    /// Header bar and highlights.
    pub accent: Rgb,
}

#[derive(Debug, Clone, Copy)]
pub struct ColorTheme {
    pub id: &'static str,
    pub palette: Palette,
}

/// Theme id meaning "use the emulator's palette".
pub const DEFAULT_THEME: &str = "default";

pub static THEMES: &[ColorTheme] = &[
    ColorTheme {
        id: "synthwave",
        palette: Palette {
            bg: Rgb(26, 16, 51),
            fg: Rgb(255, 113, 206),
            dim: Rgb(150, 80, 160),
            accent: Rgb(1, 205, 254),
        },
    },
    ColorTheme {
        id: "miami",
        palette: Palette {
            bg: Rgb(15, 20, 40),
            fg: Rgb(255, 140, 200),
            dim: Rgb(120, 220, 220),
            accent: Rgb(0, 255, 200),
        },
    },
    ColorTheme {
        id: "amber",
        palette: Palette {
            bg: Rgb(20, 12, 0),
            fg: Rgb(255, 176, 0),
            dim: Rgb(160, 110, 0),
            accent: Rgb(255, 204, 102),
        },
    },
    ColorTheme {
        id: "green",
        palette: Palette {
            bg: Rgb(0, 10, 0),
            fg: Rgb(0, 255, 65),
            dim: Rgb(0, 140, 35),
            accent: Rgb(120, 255, 140),
        },
    },
];

/// Named theme lookup. `default` has no palette of its own and returns `None`.
pub fn find_theme(id: &str) -> Option<&'static ColorTheme> {
    THEMES.iter().find(|t| t.id == id)
}

pub fn is_known_theme(id: &str) -> bool {
    id == DEFAULT_THEME || find_theme(id).is_some()
}

//! Color themes
//!
//! Themes are stored by name. A name with no palette here (for instance one
//! saved by a newer version) renders with the default palette but is kept
//! as-is so it survives the next save.

use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub label: &'static str,
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub correct: Color,
    pub wrong: Color,
    /// Letters revealed by the latest action
    pub fresh: Color,
    pub gallows: Color,
}

pub const DARK: Palette = Palette {
    name: "dark",
    label: "Dark",
    background: Color::Reset,
    text: Color::White,
    muted: Color::DarkGray,
    accent: Color::Yellow,
    correct: Color::Green,
    wrong: Color::Red,
    fresh: Color::Cyan,
    gallows: Color::Gray,
};

pub const LIGHT: Palette = Palette {
    name: "light",
    label: "Light",
    background: Color::White,
    text: Color::Black,
    muted: Color::Gray,
    accent: Color::Blue,
    correct: Color::Rgb(0, 128, 0),
    wrong: Color::Rgb(178, 34, 34),
    fresh: Color::Magenta,
    gallows: Color::Black,
};

pub const NEON: Palette = Palette {
    name: "neon",
    label: "Neon",
    background: Color::Rgb(10, 0, 20),
    text: Color::Rgb(230, 230, 255),
    muted: Color::Rgb(110, 90, 160),
    accent: Color::Rgb(255, 0, 200),
    correct: Color::Rgb(0, 255, 140),
    wrong: Color::Rgb(255, 60, 60),
    fresh: Color::Rgb(0, 230, 255),
    gallows: Color::Rgb(255, 0, 200),
};

/// All palettes in picker order; the first is the default.
pub const THEMES: &[Palette] = &[DARK, LIGHT, NEON];

pub fn palette_for(name: &str) -> &'static Palette {
    THEMES.iter().find(|p| p.name == name).unwrap_or(&THEMES[0])
}

/// Next theme name in picker order. An unknown name steps to the first or
/// last theme.
pub fn cycle_theme(current: &str, forward: bool) -> &'static str {
    let len = THEMES.len();
    let next = match THEMES.iter().position(|p| p.name == current) {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None if forward => 0,
        None => len - 1,
    };
    THEMES[next].name
}

/// Label for the picker; unknown names are shown as stored
pub fn label_for(name: &str) -> &str {
    match THEMES.iter().find(|p| p.name == name) {
        Some(palette) => palette.label,
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(palette_for("light"), &LIGHT);
        assert_eq!(palette_for("neon"), &NEON);
        assert_eq!(palette_for("dark"), &DARK);
    }

    #[test]
    fn test_unknown_name_uses_default_palette() {
        assert_eq!(palette_for("solarized"), &DARK);
        assert_eq!(palette_for(""), &DARK);
        assert_eq!(label_for("solarized"), "solarized");
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(cycle_theme("dark", true), "light");
        assert_eq!(cycle_theme("neon", true), "dark");
        assert_eq!(cycle_theme("dark", false), "neon");
        assert_eq!(cycle_theme("solarized", true), "dark");
        assert_eq!(cycle_theme("solarized", false), "neon");
    }

    #[test]
    fn test_names_are_unique() {
        for (i, a) in THEMES.iter().enumerate() {
            for b in &THEMES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}

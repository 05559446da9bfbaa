//! Light/dark palettes applied to the document and the scene clear color.
//!
//! Values are fixed literals; toggling twice restores every styled property.

/// Active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }

    /// Label shown on the toggle button (names the theme a click switches to).
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "Light Mode",
            Theme::Light => "Dark Mode",
        }
    }
}

/// Colors for one theme. CSS strings for the DOM, floats for the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub body_background: &'static str,
    pub panel_background: &'static str,
    pub panel_foreground: &'static str,
    pub tooltip_background: &'static str,
    pub tooltip_foreground: &'static str,
    pub warning_background: &'static str,
    /// Scene clear color, linear RGB.
    pub clear_color: [f32; 3],
}

pub const DARK: Palette = Palette {
    body_background: "#000",
    panel_background: "rgba(20,20,20,0.85)",
    panel_foreground: "#fff",
    tooltip_background: "rgba(30,30,30,0.95)",
    tooltip_foreground: "#ffd700",
    warning_background: "#ff4444",
    clear_color: [0.0, 0.0, 0.0],
};

pub const LIGHT: Palette = Palette {
    body_background: "#f4f4f4",
    panel_background: "rgba(255,255,255,0.92)",
    panel_foreground: "#222",
    tooltip_background: "rgba(255,255,200,0.95)",
    tooltip_foreground: "#222",
    warning_background: "#ffb347",
    clear_color: [0.957, 0.957, 0.957],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_labels_name_the_other_theme() {
        assert_eq!(Theme::Dark.toggle_label(), "Light Mode");
        assert_eq!(Theme::Light.toggle_label(), "Dark Mode");
    }

    #[test]
    fn palettes_differ() {
        assert_ne!(DARK, LIGHT);
        assert_ne!(DARK.clear_color, LIGHT.clear_color);
    }

    #[test]
    fn default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }
}

//! Theme
//!
//! Session-lived light/dark flag with a derived color palette. Owned by the
//! app root and passed to components as a signal, never persisted.

/// Colors derived from the current theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: &'static str,
    pub background: &'static str,
    pub paper: &'static str,
    pub primary: &'static str,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        text: "#000000",
        background: "#ffffff",
        paper: "#f5f5f5",
        primary: "#1976d2",
    };

    pub const DARK: Palette = Palette {
        text: "#ffffff",
        background: "#121212",
        paper: "#1e1e1e",
        primary: "#90caf9",
    };
}

/// Light/dark mode flag; light by default at session start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Theme {
    pub dark: bool,
}

impl Theme {
    pub fn toggled(self) -> Self {
        Self { dark: !self.dark }
    }

    pub fn palette(self) -> Palette {
        if self.dark {
            Palette::DARK
        } else {
            Palette::LIGHT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        let theme = Theme::default();
        assert!(!theme.dark);
        assert_eq!(theme.palette(), Palette::LIGHT);
    }

    #[test]
    fn test_toggle_flips_mode() {
        let theme = Theme::default();
        assert_eq!(theme.toggled().palette(), Palette::DARK);
        assert_eq!(theme.toggled().toggled(), theme);
    }

    #[test]
    fn test_dark_palette_colors() {
        let palette = Theme { dark: true }.palette();
        assert_eq!(palette.background, "#121212");
        assert_eq!(palette.primary, "#90caf9");
    }
}

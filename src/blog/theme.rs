//! Colour tokens for the page.
//!
//! Each colour is a ten-step range (50..900). The theme renders them as CSS
//! custom properties plus a handful of base rules; components only reference
//! the variables.

use std::fmt::Write;

/// Shades 50, 100, 200 … 900.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRange(pub [&'static str; 10]);

impl ColorRange {
    pub const STEPS: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub brand: ColorRange,
    pub gray: ColorRange,
    pub base_shadow: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub palette: Palette,
    pub color_scheme: ColorScheme,
    pub border_radius_px: u8,
}

const BRAND: ColorRange = ColorRange([
    "hsl(210, 100%, 95%)",
    "hsl(210, 100%, 92%)",
    "hsl(210, 100%, 80%)",
    "hsl(210, 100%, 65%)",
    "hsl(210, 98%, 48%)",
    "hsl(210, 98%, 42%)",
    "hsl(210, 98%, 55%)",
    "hsl(210, 100%, 35%)",
    "hsl(210, 100%, 16%)",
    "hsl(210, 100%, 21%)",
]);

const GRAY: ColorRange = ColorRange([
    "hsl(220, 35%, 97%)",
    "hsl(220, 30%, 94%)",
    "hsl(220, 20%, 88%)",
    "hsl(220, 20%, 80%)",
    "hsl(220, 20%, 65%)",
    "hsl(220, 20%, 42%)",
    "hsl(220, 20%, 35%)",
    "hsl(220, 20%, 25%)",
    "hsl(220, 30%, 6%)",
    "hsl(220, 35%, 3%)",
]);

impl Default for Theme {
    fn default() -> Self {
        Self {
            palette: Palette {
                brand: BRAND,
                gray: GRAY,
                base_shadow: "hsla(220, 30%, 5%, 0.07) 0px 4px 16px 0px",
            },
            color_scheme: ColorScheme::Light,
            border_radius_px: 8,
        }
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            color_scheme: ColorScheme::Dark,
            ..Self::default()
        }
    }

    /// `:root` variables and the base rules that read them.
    pub fn stylesheet(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, range) in [("brand", &self.palette.brand), ("gray", &self.palette.gray)] {
            for (step, value) in ColorRange::STEPS.iter().zip(range.0) {
                let _ = writeln!(css, "  --{name}-{step}: {value};");
            }
        }
        let (background, text) = match self.color_scheme {
            ColorScheme::Light => ("var(--gray-50)", "var(--gray-800)"),
            ColorScheme::Dark => ("var(--gray-900)", "var(--gray-50)"),
        };
        let _ = writeln!(css, "  --background: {background};");
        let _ = writeln!(css, "  --text: {text};");
        let _ = writeln!(css, "  --shadow: {};", self.palette.base_shadow);
        let _ = writeln!(css, "  --radius: {}px;", self.border_radius_px);
        css.push_str("}\n");
        css.push_str(BASE_RULES);
        css
    }
}

const BASE_RULES: &str = "\
body { margin: 0; font-family: system-ui, sans-serif; background: var(--background); color: var(--text); }
main { display: flex; flex-direction: column; gap: 32px; max-width: 1200px; margin: 128px auto; padding: 0 24px; }
.app-bar { position: fixed; top: 28px; left: 0; right: 0; display: flex; justify-content: space-between; max-width: 1200px; margin: 0 auto; padding: 8px 12px; border-radius: var(--radius); box-shadow: var(--shadow); background: var(--background); }
.badge { padding: 2px 8px; border-radius: var(--radius); background: var(--gray-100); }
.badge.verified { background: var(--brand-100); color: var(--brand-700); }
.card { padding: 16px; border-radius: var(--radius); border: 1px solid var(--gray-200); }
.notice { padding: 12px; border-radius: var(--radius); background: var(--gray-100); }
footer { padding: 32px 24px; color: var(--gray-500); text-align: center; }
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_declares_every_step() {
        let css = Theme::default().stylesheet();
        for step in ColorRange::STEPS {
            assert!(css.contains(&format!("--brand-{step}:")));
            assert!(css.contains(&format!("--gray-{step}:")));
        }
        assert!(css.contains("--brand-50: hsl(210, 100%, 95%);"));
        assert!(css.contains("--gray-900: hsl(220, 35%, 3%);"));
        assert!(css.contains("--background: var(--gray-50);"));
    }

    #[test]
    fn dark_scheme_swaps_background() {
        let css = Theme::dark().stylesheet();
        assert!(css.contains("--background: var(--gray-900);"));
        assert!(css.contains("--text: var(--gray-50);"));
    }
}

//! Theme derivation for the embedding UI.
//!
//! Appearance settings are an explicit config object owned by the
//! settings service; this module turns one into the concrete style
//! values to apply, as a pure function invoked once per change. Nothing
//! here touches global state.

use crate::models::enums::ThemeMode;
use crate::models::settings::{AppearanceConfig, DEFAULT_PRIMARY_COLOR};

/// `system` resolved against the host preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedMode {
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

/// The style scope produced by applying an appearance config: the
/// resolved theme class plus the CSS custom-property values.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedTheme {
    pub mode: ResolvedMode,
    /// `--primary`, as an `H S% L%` triple.
    pub primary: String,
    /// `--primary-foreground`: black over light accents, white over dark.
    pub primary_foreground: String,
}

/// Derive the full style scope for a config. Malformed accent colors
/// fall back to the default primary rather than failing.
pub fn apply(config: &AppearanceConfig, system_prefers_dark: bool) -> AppliedTheme {
    let mode = match config.theme_mode {
        ThemeMode::Light => ResolvedMode::Light,
        ThemeMode::Dark => ResolvedMode::Dark,
        ThemeMode::System => {
            if system_prefers_dark {
                ResolvedMode::Dark
            } else {
                ResolvedMode::Light
            }
        }
    };

    let hsl = hex_to_hsl(&config.primary_color)
        .or_else(|| hex_to_hsl(DEFAULT_PRIMARY_COLOR))
        .unwrap_or(Hsl { h: 221, s: 83, l: 53 });

    let primary_foreground = if hsl.l > 50 { "0 0% 0%" } else { "0 0% 100%" };

    AppliedTheme {
        mode,
        primary: format!("{} {}% {}%", hsl.h, hsl.s, hsl.l),
        primary_foreground: primary_foreground.into(),
    }
}

/// Parse `#rrggbb` into rounded HSL components. Returns `None` for
/// anything that is not a six-digit hex color.
pub fn hex_to_hsl(hex: &str) -> Option<Hsl> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()? as f64 / 255.0;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()? as f64 / 255.0;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()? as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h / 6.0, s)
    };

    Some(Hsl {
        h: (h * 360.0).round() as u16,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_primary_converts_to_hsl() {
        let hsl = hex_to_hsl(DEFAULT_PRIMARY_COLOR).unwrap();
        assert_eq!(hsl, Hsl { h: 221, s: 83, l: 53 });
    }

    #[test]
    fn grayscale_has_no_hue_or_saturation() {
        assert_eq!(hex_to_hsl("#000000").unwrap(), Hsl { h: 0, s: 0, l: 0 });
        assert_eq!(hex_to_hsl("#ffffff").unwrap(), Hsl { h: 0, s: 0, l: 100 });
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert!(hex_to_hsl("2563eb").is_none());
        assert!(hex_to_hsl("#25e").is_none());
        assert!(hex_to_hsl("#zzzzzz").is_none());
        assert!(hex_to_hsl("#25€3eb").is_none());
    }

    #[test]
    fn apply_derives_primary_variables() {
        let config = AppearanceConfig::default();
        let theme = apply(&config, false);
        assert_eq!(theme.mode, ResolvedMode::Light);
        assert_eq!(theme.primary, "221 83% 53%");
        // Lightness above 50 takes black foreground text.
        assert_eq!(theme.primary_foreground, "0 0% 0%");
    }

    #[test]
    fn dark_accent_gets_white_foreground() {
        let config = AppearanceConfig {
            primary_color: "#1e3a5f".into(),
            ..Default::default()
        };
        let theme = apply(&config, false);
        assert_eq!(theme.primary_foreground, "0 0% 100%");
    }

    #[test]
    fn system_mode_follows_host_preference() {
        let config = AppearanceConfig {
            theme_mode: crate::models::enums::ThemeMode::System,
            ..Default::default()
        };
        assert_eq!(apply(&config, true).mode, ResolvedMode::Dark);
        assert_eq!(apply(&config, false).mode, ResolvedMode::Light);
    }

    #[test]
    fn malformed_accent_falls_back_to_default() {
        let config = AppearanceConfig {
            primary_color: "not-a-color".into(),
            ..Default::default()
        };
        assert_eq!(apply(&config, false).primary, "221 83% 53%");
    }
}

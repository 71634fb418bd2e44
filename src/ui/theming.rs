// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme selection.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors the reader chrome draws with, beyond what the Iced theme provides.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    /// Behind the page image.
    pub page_background: Color,
    pub text_secondary: Color,
    pub brand_primary: Color,
    pub error: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            page_background: palette::PAPER,
            text_secondary: palette::GRAY_700,
            brand_primary: palette::PRIMARY_500,
            error: palette::ERROR_500,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            page_background: Color::from_rgb(0.15, 0.15, 0.15),
            text_secondary: palette::GRAY_200,
            brand_primary: palette::PRIMARY_400,
            error: palette::ERROR_500,
        }
    }

    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Light when detection fails.
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }

    /// The Iced theme matching this mode.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_are_not_detected() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        assert_eq!(ThemeMode::Dark.iced_theme(), Theme::Dark);
        assert_eq!(ThemeMode::Light.iced_theme(), Theme::Light);
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn scheme_follows_mode() {
        assert_eq!(ColorScheme::for_mode(ThemeMode::Light), ColorScheme::light());
        assert_eq!(ColorScheme::for_mode(ThemeMode::Dark), ColorScheme::dark());
    }

    #[test]
    fn light_page_background_is_paper() {
        assert!(ColorScheme::light().page_background.r > 0.9);
        assert!(ColorScheme::dark().page_background.r < 0.2);
    }

    #[test]
    fn theme_mode_serializes_lowercase() {
        #[derive(Serialize)]
        struct Wrapper {
            mode: ThemeMode,
        }
        let text = toml::to_string(&Wrapper {
            mode: ThemeMode::Dark,
        })
        .expect("serialize");
        assert_eq!(text.trim(), "mode = \"dark\"");
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Bar surface for the header and the navigation bar.
///
/// Derived from the active Iced `Theme` background so it stays readable in
/// both light and dark modes.
pub fn bar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::NONE.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Area the page image is drawn on.
pub fn page_area(theme: &Theme) -> container::Style {
    let scheme = if theme.extended_palette().is_dark {
        ColorScheme::dark()
    } else {
        ColorScheme::light()
    };
    container::Style {
        background: Some(Background::Color(scheme.page_background)),
        ..Default::default()
    }
}

/// Framed box for the empty and error states.
pub fn message_box(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_area_is_paper_in_light_mode() {
        let style = page_area(&Theme::Light);
        assert_eq!(
            style.background,
            Some(Background::Color(ColorScheme::light().page_background))
        );
    }

    #[test]
    fn bar_is_slightly_transparent() {
        match bar(&Theme::Dark).background {
            Some(Background::Color(color)) => assert!(color.a < 1.0),
            other => panic!("expected color background, got {other:?}"),
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border,
    palette::{self, WHITE},
    radius,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

fn outlined(background: Color, text_color: Color, border_color: Color) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Brand-colored button for the page navigation bar.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => {
            outlined(palette::PRIMARY_500, WHITE, palette::PRIMARY_600)
        }
        button::Status::Hovered => outlined(palette::PRIMARY_400, WHITE, palette::PRIMARY_500),
        button::Status::Disabled => disabled(theme),
    }
}

/// Neutral button for the zoom controls.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = !theme.extended_palette().is_dark;
    let (background, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    match status {
        button::Status::Active | button::Status::Pressed => {
            outlined(background, text_color, palette::GRAY_400)
        }
        button::Status::Hovered => {
            let hover = if is_light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            };
            outlined(hover, text_color, palette::PRIMARY_500)
        }
        button::Status::Disabled => disabled(theme),
    }
}

/// Grayed out, used at the first/last page and at the zoom bounds.
fn disabled(theme: &Theme) -> button::Style {
    let background = if theme.extended_palette().is_dark {
        palette::GRAY_700
    } else {
        palette::GRAY_200
    };
    outlined(background, palette::GRAY_400, palette::GRAY_400)
}

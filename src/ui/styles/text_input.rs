// SPDX-License-Identifier: MPL-2.0
//! Text input styles.

use crate::ui::design_tokens::{border, palette};
use iced::widget::text_input;
use iced::Theme;

/// Page-number entry. A rejected entry keeps a red outline until edited.
pub fn jump_entry(invalid: bool) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |theme: &Theme, status: text_input::Status| {
        let mut style = text_input::default(theme, status);
        if invalid {
            style.border.color = palette::ERROR_500;
            style.border.width = border::WIDTH_MD;
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_entry_has_error_border() {
        let style = jump_entry(true)(&Theme::Light, text_input::Status::Active);
        assert_eq!(style.border.color, palette::ERROR_500);
    }

    #[test]
    fn valid_entry_uses_theme_default() {
        let style = jump_entry(false)(&Theme::Light, text_input::Status::Active);
        let default = text_input::default(&Theme::Light, text_input::Status::Active);
        assert_eq!(style.border, default.border);
    }
}

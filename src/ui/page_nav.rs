// SPDX-License-Identifier: MPL-2.0
//! Bottom navigation bar: First, Previous, Next and Last.

use crate::i18n::fluent::I18n;
use crate::page_state::Command;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Container, Row, Text},
    Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub at_first: bool,
    pub at_last: bool,
}

/// Render the navigation bar. Buttons that would not move are disabled.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Command> {
    let buttons = [
        ("nav-first", Command::FirstPage, !ctx.at_first),
        ("nav-previous", Command::PrevPage, !ctx.at_first),
        ("nav-next", Command::NextPage, !ctx.at_last),
        ("nav-last", Command::LastPage, !ctx.at_last),
    ];

    let row = buttons.into_iter().fold(
        Row::new()
            .spacing(spacing::SM)
            .padding(spacing::XS)
            .align_y(Vertical::Center),
        |row, (key, command, enabled)| {
            row.push(
                button(
                    Text::new(ctx.i18n.tr(key))
                        .size(typography::BODY)
                        .width(Length::Fill)
                        .align_x(Horizontal::Center),
                )
                .on_press_maybe(enabled.then_some(command))
                .width(Length::Fixed(sizing::NAV_BUTTON_WIDTH))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .style(styles::button::primary),
            )
        },
    );

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .style(styles::container::bar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_view_renders_at_both_edges() {
        let i18n = I18n::default();
        let _single_page = view(ViewContext {
            i18n: &i18n,
            at_first: true,
            at_last: true,
        });
        let _middle = view(ViewContext {
            i18n: &i18n,
            at_first: false,
            at_last: false,
        });
    }
}

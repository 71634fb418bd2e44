// SPDX-License-Identifier: MPL-2.0
//! About screen: program name, version, author, copyright, website and
//! license.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, rule, scrollable, text, Column, Container, Row, Text},
    Element, Length,
};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

const WEBSITE: &str = env!("CARGO_PKG_HOMEPAGE");

const LICENSE: &str = env!("CARGO_PKG_LICENSE");

const COPYRIGHT: &str = "© 2026 mobilturka";

/// Contextual data needed to render the about screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the about screen.
#[derive(Debug, Clone)]
pub enum Message {
    BackToReader,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    BackToReader,
}

/// Process an about screen message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::BackToReader => Event::BackToReader,
    }
}

/// Render the about screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let back_button = button(
        text(format!("← {}", ctx.i18n.tr("about-back-button"))).size(typography::BODY),
    )
    .on_press(Message::BackToReader)
    .padding([spacing::XS, spacing::SM])
    .style(styles::button::secondary);

    let name = Text::new(ctx.i18n.tr("about-app-name")).size(typography::TITLE_MD);
    let version = Text::new(
        ctx.i18n.tr_with_args("about-version", &[("version", APP_VERSION)]),
    )
    .size(typography::BODY)
    .color(palette::GRAY_400);
    let description = Text::new(ctx.i18n.tr("about-description")).size(typography::BODY);

    let details = Column::new()
        .spacing(spacing::XS)
        .push(detail(ctx.i18n.tr("about-author"), AUTHORS.replace(':', ", ")))
        .push(detail(ctx.i18n.tr("about-copyright"), COPYRIGHT.to_string()))
        .push(detail(ctx.i18n.tr("about-website"), WEBSITE.to_string()))
        .push(detail(ctx.i18n.tr("about-license"), LICENSE.to_string()));

    let card = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(name)
        .push(version)
        .push(description)
        .push(rule::horizontal(1))
        .push(details);

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .padding(spacing::MD)
        .push(back_button)
        .push(
            Container::new(
                Container::new(card)
                    .padding(spacing::LG)
                    .style(styles::container::message_box),
            )
            .width(Length::Fill)
            .align_x(Horizontal::Center),
        );

    Container::new(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page_area)
        .into()
}

/// One "label: value" line of the details block.
fn detail<'a>(label: String, value: String) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Text::new(format!("{label}:"))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        )
        .push(Text::new(value).size(typography::BODY))
        .into()
}

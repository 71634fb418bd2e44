// SPDX-License-Identifier: MPL-2.0
//! The page area between the header and the navigation bar.
//!
//! Shows the decoded page scaled to the [`RenderRequest`] size inside a
//! scrollable, or a loading, error or empty-catalog message in its place.

use crate::catalog::PageImage;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::page_state::{PageLabel, RenderRequest};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::wheel_gate;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{responsive, Column, Container, Id, Image, Scrollable, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length, Padding, Size,
};
use std::path::Path;

/// Id of the page scrollable, used to scroll back to the top on page change.
pub const PAGE_SCROLLABLE_ID: &str = "page-scrollable";

/// What currently occupies the page area.
#[derive(Debug, Clone)]
pub enum Content<'a> {
    Loading,
    Page {
        image: &'a PageImage,
        request: RenderRequest,
    },
    Failed(Error),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub content: Content<'a>,
    /// Withhold wheel events from the scrollable (Ctrl/Cmd held).
    pub wheel_closed: bool,
}

/// Render the page area.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    match ctx.content {
        Content::Loading => centered(
            Text::new(ctx.i18n.tr("page-loading"))
                .size(typography::BODY)
                .color(palette::GRAY_400)
                .into(),
        ),
        Content::Failed(error) => centered(error_box(ctx.i18n, &error)),
        Content::Page { image, request } => page(image, &request, ctx.wheel_closed),
    }
}

/// The localised "Page: x/y | Zoom: z%" line.
pub fn label<'a, Message: 'a>(i18n: &I18n, label: PageLabel) -> Element<'a, Message> {
    let text = i18n.tr_with_args(
        "page-label",
        &[
            ("current", &label.current.to_string()),
            ("total", &label.total.to_string()),
            ("zoom", &label.zoom_percent.to_string()),
        ],
    );
    Container::new(Text::new(text).size(typography::BODY))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::LABEL_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

/// Shown instead of the reader when the catalog directory holds no pages.
pub fn empty_state<'a, Message: 'a>(i18n: &I18n, directory: &Path) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("empty-catalog-title"))
        .size(typography::TITLE_MD)
        .color(palette::GRAY_400);
    let message = Text::new(i18n.tr_with_args(
        "empty-catalog-message",
        &[("directory", &directory.display().to_string())],
    ))
    .size(typography::BODY);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(title)
        .push(message);

    centered(
        Container::new(content)
            .padding(spacing::LG)
            .style(styles::container::message_box)
            .into(),
    )
}

/// Localised description of `error`.
#[must_use]
pub fn describe(i18n: &I18n, error: &Error) -> String {
    let key = error.i18n_key();
    match error {
        Error::Io(reason) | Error::Config(reason) => i18n.tr_with_args(key, &[("reason", reason)]),
        Error::EmptyCatalog { directory: None } => i18n.tr(key),
        Error::EmptyCatalog {
            directory: Some(directory),
        } => i18n.tr_with_args(key, &[("directory", &directory.display().to_string())]),
        Error::ImageLoadFailed { path, reason } => i18n.tr_with_args(
            key,
            &[("path", &path.display().to_string()), ("reason", reason)],
        ),
        Error::DegenerateImage {
            path,
            width,
            height,
        } => i18n.tr_with_args(
            key,
            &[
                ("path", &path.display().to_string()),
                ("width", &width.to_string()),
                ("height", &height.to_string()),
            ],
        ),
        Error::InvalidJump(text) => i18n.tr_with_args(key, &[("text", text)]),
    }
}

fn error_box<'a, Message: 'a>(i18n: &I18n, error: &Error) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(
            Text::new(i18n.tr("page-error-title"))
                .size(typography::TITLE_SM)
                .color(palette::ERROR_500),
        )
        .push(Text::new(describe(i18n, error)).size(typography::BODY));

    Container::new(content)
        .padding(spacing::LG)
        .style(styles::container::message_box)
        .into()
}

fn page<'a, Message: 'a>(
    image: &'a PageImage,
    request: &RenderRequest,
    wheel_closed: bool,
) -> Element<'a, Message> {
    #[allow(clippy::cast_precision_loss)]
    let target = Size::new(request.target_width as f32, request.target_height as f32);

    let body = responsive(move |available: Size| {
        let picture = Image::new(image.handle().clone())
            .width(Length::Fixed(target.width))
            .height(Length::Fixed(target.height))
            .content_fit(ContentFit::Fill);

        let scrollable = Scrollable::new(
            Container::new(picture).padding(centering_padding(target, available)),
        )
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Both {
            vertical: Scrollbar::default(),
            horizontal: Scrollbar::default(),
        });

        wheel_gate(scrollable).closed(wheel_closed).into()
    });

    Container::new(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page_area)
        .into()
}

/// Horizontal padding that centres a page narrower than the viewport.
fn centering_padding(page: Size, available: Size) -> Padding {
    let horizontal = ((available.width - page.width) / 2.0).max(0.0);
    Padding {
        top: 0.0,
        right: horizontal,
        bottom: 0.0,
        left: horizontal,
    }
}

fn centered<'a, Message: 'a>(content: Element<'a, Message>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::page_area)
        .into()
}

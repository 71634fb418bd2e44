// SPDX-License-Identifier: MPL-2.0
//! Header bar: the "go to page" entry, the zoom buttons and the About button.

use crate::i18n::fluent::I18n;
use crate::page_state::{Command, ZoomFactor};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, text_input, Container, Id, Row, Space, Text},
    Element, Length,
};

/// Id of the page-number entry, used to focus it from a shortcut.
pub const JUMP_INPUT_ID: &str = "jump-to-page-input";

/// Contents of the page-number entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    pub jump_text: String,
    /// Set after a rejected submit; cleared as soon as the text changes.
    pub jump_invalid: bool,
}

impl State {
    pub fn reject_jump(&mut self) {
        self.jump_invalid = true;
    }

    pub fn accept_jump(&mut self) {
        self.jump_text.clear();
        self.jump_invalid = false;
    }
}

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub zoom: ZoomFactor,
    pub page_count: usize,
}

#[derive(Debug, Clone)]
pub enum Message {
    JumpTextChanged(String),
    JumpSubmitted,
    ZoomOut,
    ResetZoom,
    ZoomIn,
    OpenAbout,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The user confirmed the entry; the text still has to be validated.
    Jump(String),
    Command(Command),
    OpenAbout,
}

/// Process a header message and return the corresponding event.
pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::JumpTextChanged(text) => {
            state.jump_text = text;
            state.jump_invalid = false;
            Event::None
        }
        Message::JumpSubmitted => Event::Jump(state.jump_text.clone()),
        Message::ZoomOut => Event::Command(Command::ZoomOut),
        Message::ResetZoom => Event::Command(Command::ResetZoom),
        Message::ZoomIn => Event::Command(Command::ZoomIn),
        Message::OpenAbout => Event::OpenAbout,
    }
}

/// Render the header bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let placeholder = ctx.i18n.tr("header-jump-placeholder");
    let jump_input = text_input(&placeholder, &ctx.state.jump_text)
        .id(Id::new(JUMP_INPUT_ID))
        .on_input(Message::JumpTextChanged)
        .on_submit(Message::JumpSubmitted)
        .padding(spacing::XS)
        .size(typography::BODY)
        .width(Length::Fixed(sizing::JUMP_INPUT_WIDTH))
        .style(styles::text_input::jump_entry(ctx.state.jump_invalid));

    let go_button = button(Text::new(ctx.i18n.tr("header-jump-button")).size(typography::BODY))
        .on_press(Message::JumpSubmitted)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::secondary);

    let mut row = Row::new()
        .spacing(spacing::XS)
        .padding(spacing::XS)
        .align_y(Vertical::Center)
        .push(jump_input)
        .push(go_button);

    if ctx.state.jump_invalid {
        let hint = ctx.i18n.tr_with_args(
            "header-jump-invalid",
            &[("total", &ctx.page_count.to_string())],
        );
        row = row.push(
            Text::new(hint)
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }

    let zoom_out = zoom_button("−", Message::ZoomOut, !ctx.zoom.is_min());
    let zoom_in = zoom_button("+", Message::ZoomIn, !ctx.zoom.is_max());
    let reset = button(Text::new(ctx.i18n.tr("header-zoom-reset")).size(typography::BODY))
        .on_press(Message::ResetZoom)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::secondary);

    let about = button(Text::new(ctx.i18n.tr("header-about-button")).size(typography::BODY))
        .on_press(Message::OpenAbout)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::secondary);

    row = row
        .push(Space::new().width(Length::Fill))
        .push(zoom_out)
        .push(reset)
        .push(zoom_in)
        .push(about);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::bar)
        .into()
}

fn zoom_button(label: &str, message: Message, enabled: bool) -> Element<'_, Message> {
    button(
        Text::new(label)
            .size(typography::TITLE_SM)
            .width(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center),
    )
    .on_press_maybe(enabled.then_some(message))
    .width(Length::Fixed(sizing::ZOOM_BUTTON_WIDTH))
    .padding([spacing::XXS, spacing::XS])
    .style(styles::button::secondary)
    .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Top-level layout: header, page label, page area and navigation bar, or
//! the About screen.

use super::{Message, PageDisplay, Screen};
use crate::i18n::fluent::I18n;
use crate::page_state::PageState;
use crate::ui::page_view::{self, Content};
use crate::ui::{about, header, page_nav};
use iced::widget::Column;
use iced::{Element, Length};
use std::path::Path;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub directory: &'a Path,
    pub page_state: Option<&'a PageState>,
    pub header: &'a header::State,
    pub display: &'a PageDisplay,
    pub viewport_height: u32,
    pub command_held: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    if ctx.screen == Screen::About {
        return about::view(about::ViewContext { i18n: ctx.i18n }).map(Message::About);
    }

    let Some(state) = ctx.page_state else {
        return page_view::empty_state(ctx.i18n, ctx.directory);
    };

    let header = header::view(header::ViewContext {
        i18n: ctx.i18n,
        state: ctx.header,
        zoom: state.zoom(),
        page_count: state.page_count(),
    })
    .map(Message::Header);

    let content = match ctx.display {
        PageDisplay::Loading => Content::Loading,
        PageDisplay::Failed(err) => Content::Failed(err.clone()),
        PageDisplay::Ready(page) => {
            match state.compute_render_request(ctx.viewport_height, page.dimensions()) {
                Ok(request) => Content::Page {
                    image: page,
                    request,
                },
                Err(err) => Content::Failed(err),
            }
        }
    };

    let page = page_view::view(page_view::ViewContext {
        i18n: ctx.i18n,
        content,
        wheel_closed: ctx.command_held,
    });

    let nav = page_nav::view(page_nav::ViewContext {
        i18n: ctx.i18n,
        at_first: state.is_first(),
        at_last: state.is_last(),
    })
    .map(Message::Navigate);

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(header)
        .push(page_view::label(ctx.i18n, state.label()))
        .push(page)
        .push(nav)
        .into()
}

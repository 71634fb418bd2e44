// SPDX-License-Identifier: MPL-2.0
//! Message handlers for [`App`].
//!
//! Every page change goes through [`App::show_current_page`], which either
//! draws a cached page at once or starts a decode task, and then queues
//! prefetching of the neighbours.

use super::shortcuts::{self, Action};
use super::{App, Message, PageDisplay, Screen};
use crate::catalog::PageImage;
use crate::error::Result;
use crate::loader::{self, LoadRequest, LoadTicket};
use crate::page_state::{Command, Outcome};
use crate::ui::about;
use crate::ui::header::{self, JUMP_INPUT_ID};
use crate::ui::page_view::PAGE_SCROLLABLE_ID;
use iced::advanced::widget::{operate, operation::focusable};
use iced::mouse::ScrollDelta;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{Size, Task};
use std::sync::Arc;

impl App {
    pub(super) fn handle_header_message(&mut self, message: header::Message) -> Task<Message> {
        match header::update(message, &mut self.header) {
            header::Event::None => Task::none(),
            header::Event::Jump(text) => self.handle_jump(&text),
            header::Event::Command(command) => self.handle_command(command),
            header::Event::OpenAbout => {
                self.screen = Screen::About;
                Task::none()
            }
        }
    }

    pub(super) fn handle_about_message(&mut self, message: &about::Message) -> Task<Message> {
        match about::update(message) {
            about::Event::BackToReader => {
                self.screen = Screen::Reader;
                Task::none()
            }
        }
    }

    fn handle_jump(&mut self, text: &str) -> Task<Message> {
        let Some(state) = self.page_state.as_mut() else {
            return Task::none();
        };
        match state.jump_to_page_number(text) {
            Ok(changed) => {
                self.header.accept_jump();
                // The focused entry captures arrow keys; hand them back to paging.
                let release_entry = operate(focusable::unfocus());
                if changed {
                    Task::batch([release_entry, self.show_current_page()])
                } else {
                    release_entry
                }
            }
            Err(err) => {
                log::debug!("{err}");
                self.header.reject_jump();
                Task::none()
            }
        }
    }

    pub(super) fn handle_command(&mut self, command: Command) -> Task<Message> {
        let Some(state) = self.page_state.as_mut() else {
            return Task::none();
        };
        match state.apply(command) {
            Outcome::PageChanged => self.show_current_page(),
            Outcome::ZoomChanged | Outcome::Unchanged => Task::none(),
        }
    }

    pub(super) fn handle_shortcut(&mut self, action: Action) -> Task<Message> {
        if self.screen == Screen::About {
            // Escape leaves the About screen; nothing else applies there.
            if action == Action::Quit {
                self.screen = Screen::Reader;
            }
            return Task::none();
        }
        match action {
            Action::Apply(command) => self.handle_command(command),
            Action::FocusJumpEntry => operation::focus(Id::new(JUMP_INPUT_ID)),
            Action::Quit => iced::exit(),
        }
    }

    pub(super) fn handle_wheel(&mut self, delta: ScrollDelta) -> Task<Message> {
        if self.screen == Screen::About {
            return Task::none();
        }
        match shortcuts::map_wheel(delta, self.command_held) {
            Some(command) => self.handle_command(command),
            None => Task::none(),
        }
    }

    pub(super) fn handle_resize(&mut self, size: Size) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let height = size.height.max(0.0) as u32;
        self.viewport_height = height;
    }

    pub(super) fn handle_page_decoded(
        &mut self,
        ticket: &LoadTicket,
        result: Result<PageImage>,
    ) -> Task<Message> {
        match self.loader.complete(ticket, result) {
            None => Task::none(),
            Some(Ok(page)) => {
                self.display = PageDisplay::Ready(page);
                self.prefetch_neighbours()
            }
            Some(Err(err)) => {
                log::warn!("Page {} failed to load: {err}", ticket.index + 1);
                self.display = PageDisplay::Failed(err);
                Task::none()
            }
        }
    }

    /// Shows the current page, from the cache or through a decode task.
    pub(super) fn show_current_page(&mut self) -> Task<Message> {
        let Some(state) = self.page_state.as_ref() else {
            return Task::none();
        };

        let scroll_to_top = operation::snap_to(
            Id::new(PAGE_SCROLLABLE_ID),
            RelativeOffset { x: 0.0, y: 0.0 },
        );

        match self.loader.request(state.index(), state.current_path()) {
            LoadRequest::Ready(page) => {
                self.display = PageDisplay::Ready(page);
                Task::batch([scroll_to_top, self.prefetch_neighbours()])
            }
            LoadRequest::Pending(ticket) => {
                self.display = PageDisplay::Loading;
                let decode = Task::perform(
                    loader::decode(self.loader.store(), ticket),
                    |(ticket, result)| Message::PageDecoded { ticket, result },
                );
                Task::batch([scroll_to_top, decode])
            }
        }
    }

    fn prefetch_neighbours(&mut self) -> Task<Message> {
        let Some(state) = self.page_state.as_ref() else {
            return Task::none();
        };
        let targets = self.loader.prefetch_targets(state);
        if targets.is_empty() {
            return Task::none();
        }

        let store = self.loader.store();
        Task::batch(targets.into_iter().map(|path| {
            Task::perform(
                loader::prefetch(Arc::clone(&store), path),
                |(path, result)| Message::PagePrefetched { path, result },
            )
        }))
    }
}

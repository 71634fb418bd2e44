// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::shortcuts::Action;
use crate::catalog::PageImage;
use crate::error::Result;
use crate::loader::LoadTicket;
use crate::page_state::Command;
use crate::ui::{about, header};
use iced::keyboard::Modifiers;
use iced::mouse::ScrollDelta;
use iced::Size;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    About(about::Message),
    /// A navigation bar button.
    Navigate(Command),
    Shortcut(Action),
    ModifiersChanged(Modifiers),
    WheelScrolled(ScrollDelta),
    WindowResized(Size),
    PageDecoded {
        ticket: LoadTicket,
        result: Result<PageImage>,
    },
    PagePrefetched {
        path: PathBuf,
        result: Result<PageImage>,
    },
}

/// Runtime flags passed in from the launcher.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `tr`).
    pub lang: Option<String>,
    /// Catalog directory given on the command line; overrides the config.
    pub directory: Option<PathBuf>,
    /// Config directory override (`--config-dir`).
    pub config_dir: Option<String>,
}

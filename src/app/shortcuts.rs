// SPDX-License-Identifier: MPL-2.0
//! Keyboard and mouse-wheel shortcuts.
//!
//! Pure mapping from input to reader actions so it can be tested without a
//! window. Arrow and Home/End keys only act when no widget captured the
//! event, which keeps them working as cursor keys inside the page entry.

use crate::page_state::Command;
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::mouse::ScrollDelta;

/// What a shortcut asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Apply(Command),
    FocusJumpEntry,
    Quit,
}

/// Maps a key press to an action.
///
/// `captured` is true when a focused widget already consumed the event.
#[must_use]
pub fn map_key(key: &Key, modifiers: Modifiers, captured: bool) -> Option<Action> {
    if let Key::Named(Named::Escape) = key {
        return Some(Action::Quit);
    }

    if modifiers.command() {
        let Key::Character(c) = key else {
            return None;
        };
        return match c.as_str() {
            "+" | "=" => Some(Action::Apply(Command::ZoomIn)),
            "-" => Some(Action::Apply(Command::ZoomOut)),
            "0" => Some(Action::Apply(Command::ResetZoom)),
            "g" | "G" => Some(Action::FocusJumpEntry),
            _ => None,
        };
    }

    if captured || modifiers.alt() {
        return None;
    }

    match key {
        Key::Named(Named::ArrowLeft) => Some(Action::Apply(Command::PrevPage)),
        Key::Named(Named::ArrowRight) => Some(Action::Apply(Command::NextPage)),
        Key::Named(Named::Home) => Some(Action::Apply(Command::FirstPage)),
        Key::Named(Named::End) => Some(Action::Apply(Command::LastPage)),
        _ => None,
    }
}

/// Maps a wheel turn to a zoom command while Ctrl/Cmd is held.
#[must_use]
pub fn map_wheel(delta: ScrollDelta, command_held: bool) -> Option<Command> {
    if !command_held {
        return None;
    }
    let y = match delta {
        ScrollDelta::Lines { y, .. } | ScrollDelta::Pixels { y, .. } => y,
    };
    if y > 0.0 {
        Some(Command::ZoomIn)
    } else if y < 0.0 {
        Some(Command::ZoomOut)
    } else {
        None
    }
}

/// Translates a raw keyboard event, if it is a key press.
#[must_use]
pub fn map_keyboard_event(event: &keyboard::Event, captured: bool) -> Option<Action> {
    match event {
        keyboard::Event::KeyPressed { key, modifiers, .. } => map_key(key, *modifiers, captured),
        _ => None,
    }
}

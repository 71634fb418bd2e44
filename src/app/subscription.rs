// SPDX-License-Identifier: MPL-2.0
//! Native event routing.
//!
//! Keyboard presses are turned into shortcut actions here. Wheel turns and
//! modifier changes are forwarded as they are because mapping them depends on
//! whether Ctrl/Cmd is held, which only the application knows.

use super::shortcuts;
use super::Message;
use iced::{event, keyboard, mouse, window, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| route(&event, status))
}

fn route(event: &event::Event, status: event::Status) -> Option<Message> {
    match event {
        event::Event::Keyboard(keyboard::Event::ModifiersChanged(modifiers)) => {
            Some(Message::ModifiersChanged(*modifiers))
        }
        event::Event::Keyboard(keyboard_event) => {
            let captured = matches!(status, event::Status::Captured);
            shortcuts::map_keyboard_event(keyboard_event, captured).map(Message::Shortcut)
        }
        event::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
            Some(Message::WheelScrolled(*delta))
        }
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(*size)),
        _ => None,
    }
}

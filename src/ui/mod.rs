// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `view` built from a `ViewContext`, and the interactive ones an
//! `update` that turns their messages into events for the application.
//!
//! - [`about`] - Program name, version, author and license
//! - [`header`] - Page-number entry, zoom buttons and the About button
//! - [`page_view`] - Scrollable page image, page label, loading/error/empty states
//! - [`page_nav`] - First/Previous/Next/Last bar
//! - [`widgets`] - Custom Iced widgets
//! - [`styles`] - Centralized styling (buttons, containers, inputs)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod about;
pub mod design_tokens;
pub mod header;
pub mod page_nav;
pub mod page_view;
pub mod styles;
pub mod theming;
pub mod widgets;

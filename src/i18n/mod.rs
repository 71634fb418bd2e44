// SPDX-License-Identifier: MPL-2.0
//! Localization of user-facing text.
//!
//! Translations are Fluent (`.ftl`) files embedded at build time from
//! `assets/i18n/`. The active locale is picked from the `--lang` flag, then
//! the config file, then the operating system, falling back to `en-US`.

pub mod fluent;

pub use fluent::I18n;

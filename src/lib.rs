// SPDX-License-Identifier: MPL-2.0
//! `kuranoku` pages through the images of a digitized Qur'an, one page at a
//! time, built with the Iced GUI framework.
//!
//! The reading state ([`page_state`]) is independent of the GUI. The
//! [`catalog`] lists and decodes page files, the [`loader`] decodes them off
//! the event loop and caches neighbours, and [`app`] ties it all to Iced.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod loader;
pub mod page_state;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;

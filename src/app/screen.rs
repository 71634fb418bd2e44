// SPDX-License-Identifier: MPL-2.0
//! Which top-level view is on screen.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Reader,
    About,
}

// SPDX-License-Identifier: MPL-2.0
//! Closed set of user commands and their single dispatcher.

use super::PageState;

/// Everything the user can ask the page view to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    /// Jump to a 1-based page number.
    JumpTo(usize),
    ZoomIn,
    ZoomOut,
    ResetZoom,
}

/// What a command changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The current page index moved; the page image must be (re)loaded.
    PageChanged,
    /// Only the zoom changed; the loaded image is rescaled.
    ZoomChanged,
    /// The command was out of bounds or already satisfied.
    Unchanged,
}

impl Outcome {
    #[must_use]
    pub fn is_changed(self) -> bool {
        self != Outcome::Unchanged
    }

    fn page(changed: bool) -> Self {
        if changed {
            Outcome::PageChanged
        } else {
            Outcome::Unchanged
        }
    }

    fn zoom(changed: bool) -> Self {
        if changed {
            Outcome::ZoomChanged
        } else {
            Outcome::Unchanged
        }
    }
}

/// Applies `command` to `state`.
///
/// Navigation saturates at the first and last page; zoom saturates at the
/// configured bounds. Out-of-range requests leave the state untouched.
pub fn apply(state: &mut PageState, command: Command) -> Outcome {
    match command {
        Command::NextPage => Outcome::page(state.change_page(1)),
        Command::PrevPage => Outcome::page(state.change_page(-1)),
        Command::FirstPage => Outcome::page(state.go_to_page(0)),
        Command::LastPage => Outcome::page(state.go_to_page(state.page_count() - 1)),
        Command::JumpTo(number) => match number.checked_sub(1) {
            Some(index) => Outcome::page(state.go_to_page(index)),
            None => Outcome::Unchanged,
        },
        Command::ZoomIn => Outcome::zoom(state.change_zoom(state.zoom_step())),
        Command::ZoomOut => Outcome::zoom(state.change_zoom(-state.zoom_step())),
        Command::ResetZoom => Outcome::zoom(state.reset_zoom()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page_state::ZoomBounds;
    use std::path::PathBuf;

    fn state(pages: usize) -> PageState {
        let list = (1..=pages)
            .map(|n| PathBuf::from(format!("image{n}.png")))
            .collect();
        PageState::new(list, ZoomBounds::default()).expect("non-empty catalog")
    }

    #[test]
    fn next_and_prev_move_one_page() {
        let mut s = state(3);
        assert_eq!(apply(&mut s, Command::NextPage), Outcome::PageChanged);
        assert_eq!(s.index(), 1);
        assert_eq!(apply(&mut s, Command::PrevPage), Outcome::PageChanged);
        assert_eq!(s.index(), 0);
    }

    #[test]
    fn edges_saturate_without_wrapping() {
        let mut s = state(2);
        assert_eq!(apply(&mut s, Command::PrevPage), Outcome::Unchanged);
        assert_eq!(s.index(), 0);
        apply(&mut s, Command::LastPage);
        assert_eq!(apply(&mut s, Command::NextPage), Outcome::Unchanged);
        assert_eq!(s.index(), 1);
    }

    #[test]
    fn first_and_last() {
        let mut s = state(5);
        assert_eq!(apply(&mut s, Command::LastPage), Outcome::PageChanged);
        assert_eq!(s.index(), 4);
        assert_eq!(apply(&mut s, Command::LastPage), Outcome::Unchanged);
        assert_eq!(apply(&mut s, Command::FirstPage), Outcome::PageChanged);
        assert_eq!(s.index(), 0);
    }

    #[test]
    fn jump_to_is_one_based() {
        let mut s = state(5);
        assert_eq!(apply(&mut s, Command::JumpTo(3)), Outcome::PageChanged);
        assert_eq!(s.index(), 2);
        assert_eq!(apply(&mut s, Command::JumpTo(0)), Outcome::Unchanged);
        assert_eq!(apply(&mut s, Command::JumpTo(6)), Outcome::Unchanged);
        assert_eq!(s.index(), 2);
    }

    #[test]
    fn zoom_commands_use_configured_step() {
        let mut s = state(1).with_zoom_step(0.25);
        assert_eq!(apply(&mut s, Command::ZoomIn), Outcome::ZoomChanged);
        assert_eq!(s.zoom().percent(), 125);
        assert_eq!(apply(&mut s, Command::ZoomOut), Outcome::ZoomChanged);
        assert_eq!(apply(&mut s, Command::ZoomOut), Outcome::ZoomChanged);
        assert_eq!(s.zoom().percent(), 75);
        assert_eq!(apply(&mut s, Command::ResetZoom), Outcome::ZoomChanged);
        assert_eq!(apply(&mut s, Command::ResetZoom), Outcome::Unchanged);
    }

    #[test]
    fn zoom_in_saturates() {
        let mut s = state(1);
        for _ in 0..100 {
            apply(&mut s, Command::ZoomIn);
        }
        assert!(s.zoom().is_max());
        assert_eq!(apply(&mut s, Command::ZoomIn), Outcome::Unchanged);
    }

    #[test]
    fn any_sequence_stays_in_bounds() {
        let commands = [
            Command::NextPage,
            Command::ZoomOut,
            Command::NextPage,
            Command::JumpTo(99),
            Command::ZoomOut,
            Command::PrevPage,
            Command::ZoomIn,
            Command::LastPage,
            Command::NextPage,
            Command::ZoomOut,
            Command::ZoomOut,
            Command::ZoomOut,
            Command::ZoomOut,
            Command::ZoomOut,
            Command::ZoomOut,
        ];
        let mut s = state(4);
        for command in commands.iter().cycle().take(200) {
            apply(&mut s, *command);
            assert!(s.index() < s.page_count());
            let zoom = s.zoom();
            assert!(zoom.value() >= zoom.bounds().min());
            assert!(zoom.value() <= zoom.bounds().max());
        }
    }
}

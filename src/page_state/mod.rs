// SPDX-License-Identifier: MPL-2.0
//! Page navigation and zoom state.
//!
//! [`PageState`] is the single source of truth for which page is shown and
//! how far it is zoomed. It knows nothing about the GUI: the presenter feeds
//! it [`Command`]s and viewport heights, and draws the [`RenderRequest`] it
//! returns.
//!
//! Every transition is total and bounds-checked. A request that would move
//! outside the catalog or the zoom bounds leaves the state unchanged.

mod command;
mod render;
mod zoom;

pub use command::{apply, Command, Outcome};
pub use render::{target_size, ImageDimensions, PageLabel, RenderRequest};
pub use zoom::{ZoomBounds, ZoomFactor};

use crate::config::{DEFAULT_VERTICAL_CHROME, DEFAULT_ZOOM_STEP};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Current page, page list and zoom of a reading session.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pages: Vec<PathBuf>,
    index: usize,
    zoom: ZoomFactor,
    zoom_step: f64,
    vertical_chrome: u32,
}

impl PageState {
    /// Starts a session at the first page with zoom `1.0`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCatalog`] if `pages` is empty.
    pub fn new(pages: Vec<PathBuf>, bounds: ZoomBounds) -> Result<Self> {
        if pages.is_empty() {
            return Err(Error::EmptyCatalog { directory: None });
        }
        Ok(Self {
            pages,
            index: 0,
            zoom: ZoomFactor::reset(bounds),
            zoom_step: DEFAULT_ZOOM_STEP,
            vertical_chrome: DEFAULT_VERTICAL_CHROME,
        })
    }

    /// Sets the zoom change applied by [`Command::ZoomIn`]/[`Command::ZoomOut`].
    #[must_use]
    pub fn with_zoom_step(mut self, step: f64) -> Self {
        if step.is_finite() && step > 0.0 {
            self.zoom_step = step;
        }
        self
    }

    /// Sets the pixels of viewport height reserved for controls.
    #[must_use]
    pub fn with_vertical_chrome(mut self, pixels: u32) -> Self {
        self.vertical_chrome = pixels;
        self
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn pages(&self) -> &[PathBuf] {
        &self.pages
    }

    #[must_use]
    pub fn current_path(&self) -> &Path {
        &self.pages[self.index]
    }

    #[must_use]
    pub fn zoom(&self) -> ZoomFactor {
        self.zoom
    }

    #[must_use]
    pub fn zoom_step(&self) -> f64 {
        self.zoom_step
    }

    #[must_use]
    pub fn vertical_chrome(&self) -> u32 {
        self.vertical_chrome
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.pages.len()
    }

    /// Moves to `index` if it is inside the catalog. Returns whether the page changed.
    pub fn go_to_page(&mut self, index: usize) -> bool {
        if index >= self.pages.len() || index == self.index {
            return false;
        }
        self.index = index;
        true
    }

    /// Moves by `delta` pages if the result stays inside the catalog.
    pub fn change_page(&mut self, delta: isize) -> bool {
        match self.index.checked_add_signed(delta) {
            Some(index) => self.go_to_page(index),
            None => false,
        }
    }

    /// Shifts the zoom by `delta`, saturating at the bounds. Returns whether it changed.
    pub fn change_zoom(&mut self, delta: f64) -> bool {
        let zoom = self.zoom.shifted(delta);
        let changed = zoom != self.zoom;
        self.zoom = zoom;
        changed
    }

    /// Sets the zoom back to `1.0`.
    pub fn reset_zoom(&mut self) -> bool {
        let zoom = ZoomFactor::reset(self.zoom.bounds());
        let changed = zoom != self.zoom;
        self.zoom = zoom;
        changed
    }

    /// Jumps to the 1-based page number typed by the user.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidJump`] for text that is not all digits or is
    /// outside `1..=page_count`. The state is left unchanged.
    pub fn jump_to_page_number(&mut self, text: &str) -> Result<bool> {
        let number = parse_page_number(text, self.page_count())?;
        Ok(self.go_to_page(number - 1))
    }

    /// Applies a [`Command`]; see [`apply`].
    pub fn apply(&mut self, command: Command) -> Outcome {
        apply(self, command)
    }

    #[must_use]
    pub fn label(&self) -> PageLabel {
        PageLabel {
            current: self.index + 1,
            total: self.pages.len(),
            zoom_percent: self.zoom.percent(),
        }
    }

    /// Derives what to draw for the current page in a viewport of
    /// `viewport_height` pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateImage`] when `source` has a zero side.
    pub fn compute_render_request(
        &self,
        viewport_height: u32,
        source: ImageDimensions,
    ) -> Result<RenderRequest> {
        if source.is_degenerate() {
            return Err(Error::DegenerateImage {
                path: self.current_path().to_path_buf(),
                width: source.width,
                height: source.height,
            });
        }
        let (target_width, target_height) = target_size(
            viewport_height,
            self.vertical_chrome,
            self.zoom.value(),
            source,
        );
        Ok(RenderRequest {
            image_path: self.current_path().to_path_buf(),
            target_width,
            target_height,
            label: self.label(),
        })
    }

    /// Indices of the pages within `distance` of the current one, nearest
    /// first, alternating forward and backward.
    #[must_use]
    pub fn neighbours(&self, distance: usize) -> Vec<usize> {
        let mut indices = Vec::with_capacity(distance * 2);
        for step in 1..=distance {
            if let Some(next) = self.index.checked_add(step) {
                if next < self.pages.len() {
                    indices.push(next);
                }
            }
            if let Some(previous) = self.index.checked_sub(step) {
                indices.push(previous);
            }
        }
        indices
    }
}

/// Parses 1-based page-number text typed by the user.
///
/// Surrounding whitespace is ignored. The rest must be ASCII digits naming a
/// page in `1..=page_count`.
pub fn parse_page_number(text: &str, page_count: usize) -> Result<usize> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidJump(text.to_string()));
    }
    match trimmed.parse::<usize>() {
        Ok(number) if (1..=page_count).contains(&number) => Ok(number),
        _ => Err(Error::InvalidJump(text.to_string())),
    }
}

// SPDX-License-Identifier: MPL-2.0
//! What the presenter should draw for the current page.

use std::fmt;
use std::path::PathBuf;

/// Pixel dimensions of a source page image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A zero side means no aspect ratio can be derived.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Width divided by height. Only meaningful when not degenerate.
    #[must_use]
    pub fn aspect_ratio(self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

/// Page position and zoom shown above the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLabel {
    /// 1-based page number.
    pub current: usize,
    pub total: usize,
    pub zoom_percent: u32,
}

impl fmt::Display for PageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Page: {}/{} | Zoom: {}%",
            self.current, self.total, self.zoom_percent
        )
    }
}

/// Derived description of the page to draw. Never stored; recomputed on every
/// state change or viewport resize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub image_path: PathBuf,
    pub target_width: u32,
    pub target_height: u32,
    pub label: PageLabel,
}

/// Scales `source` to the height left after reserving `vertical_chrome`
/// pixels, multiplied by `zoom`, keeping the aspect ratio.
///
/// Returns `(width, height)`. The height is truncated like an integer
/// conversion; the width is rounded to the nearest pixel.
#[must_use]
pub fn target_size(
    viewport_height: u32,
    vertical_chrome: u32,
    zoom: f64,
    source: ImageDimensions,
) -> (u32, u32) {
    let base_height = f64::from(viewport_height.saturating_sub(vertical_chrome));
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let target_height = (base_height * zoom).max(0.0).trunc() as u32;

    if source.is_degenerate() {
        return (0, target_height);
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let target_width = (f64::from(target_height) * source.aspect_ratio()).round() as u32;
    (target_width, target_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_relative_eq;

    #[test]
    fn label_display_matches_status_line() {
        let label = PageLabel {
            current: 3,
            total: 604,
            zoom_percent: 120,
        };
        assert_eq!(label.to_string(), "Page: 3/604 | Zoom: 120%");
    }

    #[test]
    fn unit_zoom_uses_full_base_height() {
        let (_, height) = target_size(950, 180, 1.0, ImageDimensions::new(1000, 1500));
        assert_eq!(height, 770);
    }

    #[test]
    fn zoom_scales_height() {
        let (_, height) = target_size(950, 180, 1.5, ImageDimensions::new(1000, 1500));
        assert_eq!(height, 1155);
    }

    #[test]
    fn width_follows_aspect_ratio() {
        let (width, height) = target_size(780, 180, 1.0, ImageDimensions::new(800, 1200));
        assert_eq!(height, 600);
        assert_eq!(width, 400);
    }

    #[test]
    fn aspect_ratio_preserved_within_rounding() {
        let source = ImageDimensions::new(1237, 1891);
        for viewport in [400_u32, 733, 950, 1440] {
            for zoom in [0.5, 0.9, 1.0, 1.7, 3.0] {
                let (width, height) = target_size(viewport, 180, zoom, source);
                let expected = f64::from(height) * source.aspect_ratio();
                assert!((f64::from(width) - expected).abs() <= 0.5);
            }
        }
    }

    #[test]
    fn aspect_ratio_of_square_page() {
        let (width, height) = target_size(1180, 180, 1.0, ImageDimensions::new(512, 512));
        assert_relative_eq!(f64::from(width) / f64::from(height), 1.0);
    }

    #[test]
    fn viewport_smaller_than_chrome_yields_zero() {
        assert_eq!(
            target_size(100, 180, 2.0, ImageDimensions::new(10, 20)),
            (0, 0)
        );
    }

    #[test]
    fn degenerate_source_gives_zero_width() {
        let dims = ImageDimensions::new(100, 0);
        assert!(dims.is_degenerate());
        assert_eq!(target_size(500, 180, 1.0, dims), (0, 320));
    }
}

// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the reader chrome.

## Organization

- **Palette**: Base colors
- **Opacity**: Translucent surfaces
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Control sizes
- **Typography**: Font size scale
- **Border** / **Radius**: Outline widths and corner radii

## Examples

```
use kuranoku::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let bar = Color {
    a: opacity::SURFACE,
    ..palette::WHITE
};
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand (green, after the printed mushaf covers)
    pub const PRIMARY_400: Color = Color::from_rgb(0.36, 0.66, 0.48);
    pub const PRIMARY_500: Color = Color::from_rgb(0.2, 0.55, 0.36);
    pub const PRIMARY_600: Color = Color::from_rgb(0.14, 0.44, 0.28);

    // Page paper tone shown behind the page image
    pub const PAPER: Color = Color::from_rgb(0.98, 0.96, 0.9);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Semi-transparent panels and bars.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Height of the navigation bar buttons.
    pub const BUTTON_HEIGHT: f32 = 36.0;

    /// Width of the "go to page" entry.
    pub const JUMP_INPUT_WIDTH: f32 = 140.0;

    /// Minimum width of first/previous/next/last buttons.
    pub const NAV_BUTTON_WIDTH: f32 = 110.0;

    /// Width of the square zoom buttons.
    pub const ZOOM_BUTTON_WIDTH: f32 = 44.0;

    /// Height of the page label line.
    pub const LABEL_HEIGHT: f32 = 24.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// App name on the empty state.
    pub const TITLE_MD: f32 = 20.0;

    /// Section headers.
    pub const TITLE_SM: f32 = 18.0;

    /// Standard body - labels and buttons.
    pub const BODY: f32 = 14.0;

    /// Hints and the error line under the jump entry.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border and Radius Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_VERTICAL_CHROME;

    /// Header, label and navigation bar stacked with their padding.
    fn chrome_height() -> f32 {
        let header = sizing::BUTTON_HEIGHT + 2.0 * spacing::XS;
        let label = sizing::LABEL_HEIGHT + spacing::XXS;
        let nav = sizing::BUTTON_HEIGHT + 2.0 * spacing::XS;
        header + label + nav
    }

    #[test]
    fn reserved_chrome_fits_the_controls() {
        #[allow(clippy::cast_precision_loss)]
        let reserved = DEFAULT_VERTICAL_CHROME as f32;
        assert!(chrome_height() <= reserved);
    }

    #[test]
    fn paper_is_light() {
        assert!(palette::PAPER.r > 0.9 && palette::PAPER.g > 0.9);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Catalog**: Where page images come from and which files count as pages
//! - **Zoom**: Zoom factor bounds and step
//! - **Layout**: Window size and the vertical space reserved for controls
//! - **Prefetch**: Decoded page cache limits

// ==========================================================================
// Catalog Defaults
// ==========================================================================

/// Directory the page images are installed into.
pub const DEFAULT_CATALOG_DIR: &str = "/opt/KuranOku/Diyanet";

/// File extensions accepted as page images (compared case-insensitively).
pub const DEFAULT_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Zoom factor applied when a session starts and on reset.
pub const DEFAULT_ZOOM_FACTOR: f64 = 1.0;

/// Minimum allowed zoom factor.
pub const DEFAULT_ZOOM_MIN: f64 = 0.5;

/// Maximum allowed zoom factor.
pub const DEFAULT_ZOOM_MAX: f64 = 3.0;

/// Zoom change per zoom-in/zoom-out action.
pub const DEFAULT_ZOOM_STEP: f64 = 0.1;

/// Smallest zoom bound a config file may request.
pub const ZOOM_FLOOR: f64 = 0.05;

/// Largest zoom bound a config file may request.
pub const ZOOM_CEILING: f64 = 10.0;

/// Minimum zoom step.
pub const MIN_ZOOM_STEP: f64 = 0.01;

/// Maximum zoom step.
pub const MAX_ZOOM_STEP: f64 = 1.0;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Vertical pixels reserved for header, page label and navigation bar.
/// Subtracted from the window height before zoom is applied.
pub const DEFAULT_VERTICAL_CHROME: u32 = 180;

/// Default window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: u32 = 850;

/// Default window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 950;

/// Minimum window width.
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Minimum window height. Kept above the reserved chrome so a page is always visible.
pub const MIN_WINDOW_HEIGHT: u32 = 400;

// ==========================================================================
// Prefetch Defaults
// ==========================================================================

/// Default number of pages decoded ahead in each direction.
pub const DEFAULT_PREFETCH_COUNT: usize = 2;

/// Maximum prefetch distance.
pub const MAX_PREFETCH_COUNT: usize = 8;

/// Default number of decoded pages kept in memory.
pub const DEFAULT_CACHE_MAX_IMAGES: usize = 8;

/// Minimum number of cached pages.
pub const MIN_CACHE_MAX_IMAGES: usize = 2;

/// Maximum number of cached pages.
pub const MAX_CACHE_MAX_IMAGES: usize = 32;

/// Default decoded page cache budget in bytes (96 MB).
/// A scanned page at 1200x1800 RGBA is about 8.6 MB.
pub const DEFAULT_CACHE_MAX_BYTES: usize = 96 * 1024 * 1024;

/// Minimum cache budget in bytes (16 MB).
pub const MIN_CACHE_MAX_BYTES: usize = 16 * 1024 * 1024;

/// Maximum cache budget in bytes (512 MB).
pub const MAX_CACHE_MAX_BYTES: usize = 512 * 1024 * 1024;

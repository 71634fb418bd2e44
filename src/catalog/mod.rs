// SPDX-License-Identifier: MPL-2.0
//! Page image catalog: listing, probing and decoding page files.
//!
//! [`ImageStore`] is the seam between the viewer and the filesystem. The GUI
//! and the loader only talk to the trait, so tests can swap in an in-memory
//! store.

mod natural_sort;
mod page_image;

pub use natural_sort::{natural_cmp, sort_paths};
pub use page_image::PageImage;

use crate::config::DEFAULT_EXTENSIONS;
use crate::error::{Error, Result};
use crate::page_state::ImageDimensions;
use std::fs;
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};

/// Source of page images.
pub trait ImageStore: Send + Sync {
    /// Lists the page files of `directory` in reading order.
    ///
    /// A missing or unreadable directory yields an empty list.
    fn list_pages(&self, directory: &Path) -> Vec<PathBuf>;

    /// Reads the pixel dimensions of `path` without decoding the pixels.
    fn load_dimensions(&self, path: &Path) -> Result<ImageDimensions>;

    /// Fully decodes `path` to RGBA8.
    fn load_pixels(&self, path: &Path) -> Result<PageImage>;
}

/// [`ImageStore`] reading PNG/JPEG files from the local filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsImageStore {
    extensions: Vec<String>,
    name_prefix: Option<String>,
}

impl Default for FsImageStore {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS.iter().map(|ext| (*ext).to_string()), None)
    }
}

impl FsImageStore {
    /// Accepts files whose extension is one of `extensions` (compared
    /// case-insensitively) and, if given, whose name starts with `name_prefix`.
    pub fn new<I, S>(extensions: I, name_prefix: Option<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let extensions = extensions
            .into_iter()
            .map(|ext| ext.into().trim_start_matches('.').to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        Self {
            extensions,
            name_prefix: name_prefix.filter(|prefix| !prefix.is_empty()),
        }
    }

    #[must_use]
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Whether `path` names an accepted page file. Does not touch the disk.
    #[must_use]
    pub fn accepts(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        if let Some(prefix) = &self.name_prefix {
            if !name.starts_with(prefix.as_str()) {
                return false;
            }
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|accepted| accepted.eq_ignore_ascii_case(ext))
            })
    }
}

impl ImageStore for FsImageStore {
    fn list_pages(&self, directory: &Path) -> Vec<PathBuf> {
        let entries = match fs::read_dir(directory) {
            Ok(entries) => entries,
            Err(err) => {
                log::warn!("Cannot read page directory {}: {err}", directory.display());
                return Vec::new();
            }
        };

        let mut pages: Vec<PathBuf> = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry.path()),
                Err(err) => {
                    log::warn!("Skipping unreadable entry in {}: {err}", directory.display());
                    None
                }
            })
            .filter(|path| path.is_file() && self.accepts(path))
            .collect();

        sort_paths(&mut pages);
        log::info!("Found {} pages in {}", pages.len(), directory.display());
        pages
    }

    fn load_dimensions(&self, path: &Path) -> Result<ImageDimensions> {
        let bytes = read_with_retry(path).map_err(|err| Error::image_load(path, err))?;
        let (width, height) = image_rs::ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|err| Error::image_load(path, err))?
            .into_dimensions()
            .map_err(|err| Error::image_load(path, err))?;
        Ok(ImageDimensions::new(width, height))
    }

    fn load_pixels(&self, path: &Path) -> Result<PageImage> {
        let bytes = read_with_retry(path).map_err(|err| Error::image_load(path, err))?;
        let decoded =
            image_rs::load_from_memory(&bytes).map_err(|err| Error::image_load(path, err))?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        if width == 0 || height == 0 {
            return Err(Error::DegenerateImage {
                path: path.to_path_buf(),
                width,
                height,
            });
        }
        Ok(PageImage::from_rgba(width, height, rgba.into_vec()))
    }
}

fn is_transient(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut
    )
}

/// Reads a file, retrying once if the first attempt fails transiently.
fn read_with_retry(path: &Path) -> io::Result<Vec<u8>> {
    retry_once(|| fs::read(path))
}

fn retry_once<T>(mut op: impl FnMut() -> io::Result<T>) -> io::Result<T> {
    match op() {
        Err(err) if is_transient(&err) => {
            log::debug!("Transient I/O error, retrying: {err}");
            op()
        }
        result => result,
    }
}

// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// No page images were found. `directory` is known when the error comes
    /// from scanning a catalog rather than from an empty page list.
    #[error(
        "No page images found{}",
        directory.as_ref().map(|dir| format!(" in {}", dir.display())).unwrap_or_default()
    )]
    EmptyCatalog { directory: Option<PathBuf> },

    /// A page image could not be read or decoded.
    #[error("Failed to load {}: {reason}", path.display())]
    ImageLoadFailed { path: PathBuf, reason: String },

    /// The image decoded fine but has a zero-sized side, so no aspect ratio
    /// can be derived from it.
    #[error("Image {} has degenerate dimensions {width}x{height}", path.display())]
    DegenerateImage {
        path: PathBuf,
        width: u32,
        height: u32,
    },

    /// Page-number text that is not a number or is out of range.
    #[error("Invalid page number: {0:?}")]
    InvalidJump(String),
}

impl Error {
    /// Returns the i18n message key used to show this error to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::EmptyCatalog { directory: None } => "error-empty-catalog",
            Error::EmptyCatalog { directory: Some(_) } => "error-empty-catalog-in",
            Error::ImageLoadFailed { .. } => "error-image-load-failed",
            Error::DegenerateImage { .. } => "error-degenerate-image",
            Error::InvalidJump(_) => "error-invalid-jump",
        }
    }

    /// Builds an [`Error::ImageLoadFailed`] for `path` from any displayable cause.
    pub fn image_load(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Error::ImageLoadFailed {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

// SPDX-License-Identifier: MPL-2.0
use crate::page_state::ImageDimensions;
use iced::widget::image;

/// A decoded page ready to hand to the renderer.
///
/// The pixels live only inside the image handle. Cloning is cheap: the
/// handle shares its buffer.
#[derive(Debug, Clone)]
pub struct PageImage {
    handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl PageImage {
    /// Wraps RGBA8 pixels of a `width`×`height` image.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    #[must_use]
    pub fn handle(&self) -> &image::Handle {
        &self.handle
    }

    #[must_use]
    pub fn dimensions(&self) -> ImageDimensions {
        ImageDimensions::new(self.width, self.height)
    }

    /// The RGBA buffer owned by the handle.
    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        match &self.handle {
            image::Handle::Rgba { pixels, .. } => &pixels[..],
            _ => &[],
        }
    }

    /// Bytes held by the decoded buffer, used for cache accounting.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.rgba_bytes().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_dimensions_and_size() {
        let page = PageImage::from_rgba(3, 2, vec![0; 3 * 2 * 4]);
        assert_eq!(page.dimensions(), ImageDimensions::new(3, 2));
        assert_eq!(page.size_bytes(), 24);
        assert_eq!(page.rgba_bytes().len(), 24);
    }

    #[test]
    fn pixels_are_held_once_by_the_handle() {
        let page = PageImage::from_rgba(2, 2, vec![7; 2 * 2 * 4]);
        let image::Handle::Rgba { pixels, .. } = page.handle() else {
            panic!("decoded pages use an RGBA handle");
        };
        assert!(std::ptr::eq(pixels.as_ptr(), page.rgba_bytes().as_ptr()));
        assert_eq!(page.size_bytes(), pixels.len());
    }

    #[test]
    fn clones_share_pixels() {
        let page = PageImage::from_rgba(1, 1, vec![1, 2, 3, 4]);
        let copy = page.clone();
        assert!(std::ptr::eq(
            page.rgba_bytes().as_ptr(),
            copy.rgba_bytes().as_ptr()
        ));
    }
}

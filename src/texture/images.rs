//! Module for slicing sheets out of in-memory images.

use super::*;

use std::ops::Deref;

pub use image::{DynamicImage, ImageBuffer};
use image::{imageops, GenericImageView, Pixel};

use crate::region::Region;

impl Texture for DynamicImage {
    fn width(&self) -> f32 {
        GenericImageView::width(self) as f32
    }
    fn height(&self) -> f32 {
        GenericImageView::height(self) as f32
    }
}

impl<P, C> Texture for ImageBuffer<P, C>
where
    P: Pixel,
    C: Deref<Target = [P::Subpixel]>,
{
    fn width(&self) -> f32 {
        ImageBuffer::width(self) as f32
    }
    fn height(&self) -> f32 {
        ImageBuffer::height(self) as f32
    }
}

/// Owned pixel data copied out of a region of an image of type `I`.
pub type Cropped<I> = ImageBuffer<
    <I as GenericImageView>::Pixel,
    Vec<<<I as GenericImageView>::Pixel as Pixel>::Subpixel>,
>;

impl<I> Region<I>
where
    I: GenericImageView + 'static,
{
    /// Copies the pixels under this region into a new image.
    ///
    /// Parts of the region outside the source image are clipped, so a region lying entirely
    /// outside of it produces an empty image.
    pub fn crop(&self) -> Cropped<I> {
        let (x, y) = self.origin();
        let (width, height) = self.size();
        let left = x.max(0.0);
        let top = y.max(0.0);
        let right = (x + width).max(left);
        let bottom = (y + height).max(top);
        imageops::crop_imm(
            self.texture().as_ref(),
            left as u32,
            top as u32,
            (right - left) as u32,
            (bottom - top) as u32,
        )
        .to_image()
    }
}

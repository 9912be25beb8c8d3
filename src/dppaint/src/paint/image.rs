// This file is part of Drawpile.
// Copyright (C) 2020 Calle Laakkonen
//
// Drawpile is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// As additional permission under section 7, you are allowed to distribute
// the software through an app store, even if that store has restrictive
// terms and conditions that are incompatible with the GPL, provided that
// the source is also available under the GPL with or without this permission
// through a channel without those restrictive terms and conditions.
//
// Drawpile is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Drawpile.  If not, see <https://www.gnu.org/licenses/>.

use super::color::{Color, Pixel};
use super::{PixelSurface, Rectangle, Size};

/// A flat image buffer
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Image {
    pub pixels: Vec<Pixel>,
    pub width: usize,
    pub height: usize,
}

impl Image {
    /// Create a new image filled with black
    pub fn new(width: usize, height: usize) -> Image {
        Image::filled(width, height, Color::BLACK)
    }

    pub fn filled(width: usize, height: usize, color: Color) -> Image {
        Image {
            pixels: vec![color.as_pixel(); width * height],
            width,
            height,
        }
    }

    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Pixel>) -> Option<Image> {
        if pixels.len() != width * height {
            return None;
        }
        Some(Image {
            pixels,
            width,
            height,
        })
    }

    pub fn is_null(&self) -> bool {
        assert!(self.pixels.len() == self.width * self.height);
        self.pixels.is_empty()
    }

    pub fn size(&self) -> Size {
        Size::new(self.width as i32, self.height as i32)
    }

    /// Count the pixels of the given color
    pub fn count_color(&self, color: Color) -> usize {
        let p = color.as_pixel();
        self.pixels.iter().filter(|&&px| px == p).count()
    }

    /// Return a cropped version of the image
    pub fn cropped(&self, rect: &Rectangle) -> Image {
        let rect = match rect.cropped(self.size()) {
            Some(r) => r,
            None => return Image::default(),
        };

        let mut cropped_pixels: Vec<Pixel> = Vec::with_capacity((rect.w * rect.h) as usize);
        for y in rect.y..=rect.bottom() {
            let row = y as usize * self.width;
            cropped_pixels
                .extend_from_slice(&self.pixels[row + rect.x as usize..=row + rect.right() as usize]);
        }

        Image {
            pixels: cropped_pixels,
            width: rect.w as usize,
            height: rect.h as usize,
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!((x as usize) < self.width && (y as usize) < self.height);
        y as usize * self.width + x as usize
    }
}

impl PixelSurface for Image {
    fn width(&self) -> u32 {
        self.width as u32
    }

    fn height(&self) -> u32 {
        self.height as u32
    }

    fn pixel_at(&self, x: u32, y: u32) -> Color {
        Color::from_pixel(self.pixels[self.index(x, y)])
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.pixels[i] = color.as_pixel();
    }

    fn fill_span(&mut self, y: u32, x0: u32, x1: u32, color: Color) {
        let start = self.index(x0, y);
        let end = self.index(x1, y);
        self.pixels[start..=end].fill(color.as_pixel());
    }

    fn copy_region(&self, rect: &Rectangle) -> Image {
        self.cropped(rect)
    }

    fn blit(&mut self, x: i32, y: i32, image: &Image) {
        if image.is_null() {
            return;
        }
        let target = Rectangle::new(x, y, image.width as i32, image.height as i32);
        let rect = match target.cropped(self.size()) {
            Some(r) => r,
            None => return,
        };

        let sx = (rect.x - x) as usize;
        let w = rect.w as usize;
        for ty in rect.y..=rect.bottom() {
            let src = (ty - y) as usize * image.width + sx;
            let dest = ty as usize * self.width + rect.x as usize;
            self.pixels[dest..dest + w].copy_from_slice(&image.pixels[src..src + w]);
        }
    }
}

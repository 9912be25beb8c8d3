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

use super::{Color, Image, Rectangle, Size};

/// A mutable two dimensional buffer of RGB pixels.
///
/// This is the contract the engine needs from the host graphics layer.
/// Point accessors are only ever called with coordinates inside the
/// surface bounds: the engine clips everything before calling them.
pub trait PixelSurface {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn pixel_at(&self, x: u32, y: u32) -> Color;

    fn set_pixel(&mut self, x: u32, y: u32, color: Color);

    fn size(&self) -> Size {
        Size::new(self.width() as i32, self.height() as i32)
    }

    /// The full surface area, or None if the surface has no pixels
    fn bounds(&self) -> Option<Rectangle> {
        if self.size().is_empty() {
            None
        } else {
            Some(Rectangle::new(0, 0, self.width() as i32, self.height() as i32))
        }
    }

    /// Fill the inclusive horizontal span x0..=x1 on row y
    fn fill_span(&mut self, y: u32, x0: u32, x1: u32, color: Color) {
        for x in x0..=x1 {
            self.set_pixel(x, y, color);
        }
    }

    /// Copy the given region into a new image.
    ///
    /// The region is cropped to the surface bounds. The returned image is
    /// always a full copy.
    fn copy_region(&self, rect: &Rectangle) -> Image {
        let rect = match rect.cropped(self.size()) {
            Some(r) => r,
            None => return Image::default(),
        };

        let mut img = Image::new(rect.w as usize, rect.h as usize);
        for y in 0..rect.h {
            for x in 0..rect.w {
                img.set_pixel(
                    x as u32,
                    y as u32,
                    self.pixel_at((rect.x + x) as u32, (rect.y + y) as u32),
                );
            }
        }
        img
    }

    /// Draw an image with its top-left corner at the given position.
    /// Parts falling outside the surface are clipped.
    fn blit(&mut self, x: i32, y: i32, image: &Image) {
        if image.is_null() {
            return;
        }
        let target = Rectangle::new(x, y, image.width as i32, image.height as i32);
        let rect = match target.cropped(self.size()) {
            Some(r) => r,
            None => return,
        };

        for ty in rect.y..=rect.bottom() {
            for tx in rect.x..=rect.right() {
                let c = image.pixel_at((tx - x) as u32, (ty - y) as u32);
                self.set_pixel(tx as u32, ty as u32, c);
            }
        }
    }
}

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

use super::{Color, PixelSurface, Rectangle};

use tracing::debug;

#[derive(Debug, PartialEq, Eq)]
pub struct FloodFillResult {
    /// Number of pixels that were changed
    pub filled: u32,
    /// The color that was filled over
    pub seed_color: Option<Color>,
    /// Bounding box of the changed pixels
    pub bounds: Option<Rectangle>,
}

impl FloodFillResult {
    fn empty() -> FloodFillResult {
        FloodFillResult {
            filled: 0,
            seed_color: None,
            bounds: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }
}

/// Replace the 4-connected area of same colored pixels around the seed
/// point with the fill color.
///
/// The fill never leaves the given region (which is further cropped to
/// the surface bounds.) Seeds outside the region and seeds that already
/// have the fill color are no-ops.
pub fn floodfill<S>(
    surface: &mut S,
    region: &Rectangle,
    x: i32,
    y: i32,
    fill_color: Color,
) -> FloodFillResult
where
    S: PixelSurface + ?Sized,
{
    let region = match region.cropped(surface.size()) {
        Some(r) => r,
        None => return FloodFillResult::empty(),
    };

    if !region.contains_point(x, y) {
        return FloodFillResult::empty();
    }

    let seed_color = surface.pixel_at(x as u32, y as u32);
    if seed_color == fill_color {
        return FloodFillResult::empty();
    }

    let mut fill = ScanlineFill {
        surface,
        region,
        seed_color,
        fill_color,
        filled: 0,
        bounds: None,
    };

    // Execute the flood fill algorithm
    let mut stack = vec![(x, y)];
    while let Some((x, y)) = stack.pop() {
        // Spans may have been filled since this point was pushed
        if !fill.is_seed_color_at(x, y) {
            continue;
        }

        let (west, east) = fill.fill_span(x, y);

        if y > fill.region.y {
            fill.push_runs(&mut stack, west, east, y - 1);
        }
        if y < fill.region.bottom() {
            fill.push_runs(&mut stack, west, east, y + 1);
        }
    }

    debug!(
        "Flood fill at ({}, {}): {} pixels {} -> {}",
        x, y, fill.filled, seed_color, fill_color
    );

    FloodFillResult {
        filled: fill.filled,
        seed_color: Some(seed_color),
        bounds: fill.bounds,
    }
}

struct ScanlineFill<'a, S: ?Sized> {
    surface: &'a mut S,
    /// the fill is confined to this area (already cropped to the surface)
    region: Rectangle,
    /// the color to be filled over
    seed_color: Color,
    fill_color: Color,
    filled: u32,
    bounds: Option<Rectangle>,
}

impl<'a, S> ScanlineFill<'a, S>
where
    S: PixelSurface + ?Sized,
{
    fn is_seed_color_at(&self, x: i32, y: i32) -> bool {
        self.surface.pixel_at(x as u32, y as u32) == self.seed_color
    }

    /// Extend west and east from the given point and fill the whole span.
    /// Returns the span's inclusive end points.
    fn fill_span(&mut self, x: i32, y: i32) -> (i32, i32) {
        let mut west = x;
        while west > self.region.x && self.is_seed_color_at(west - 1, y) {
            west -= 1;
        }

        let mut east = x;
        while east < self.region.right() && self.is_seed_color_at(east + 1, y) {
            east += 1;
        }

        self.surface
            .fill_span(y as u32, west as u32, east as u32, self.fill_color);
        self.filled += (east - west + 1) as u32;

        let span = Rectangle::from_corners(west, y, east, y);
        self.bounds = Some(match self.bounds {
            Some(b) => b.union(&span),
            None => span,
        });

        (west, east)
    }

    /// Push one seed point per contiguous run of seed colored pixels
    /// on the given row, between west and east.
    fn push_runs(&self, stack: &mut Vec<(i32, i32)>, west: i32, east: i32, y: i32) {
        let mut in_run = false;
        for i in west..=east {
            if self.is_seed_color_at(i, y) {
                if !in_run {
                    stack.push((i, y));
                    in_run = true;
                }
            } else {
                in_run = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Image;

    #[test]
    fn test_fill_whole_image() {
        let mut img = Image::filled(50, 50, Color::WHITE);
        let region = Rectangle::new(0, 0, 50, 50);
        let result = floodfill(&mut img, &region, 25, 25, Color::BLACK);

        assert_eq!(result.filled, 2500);
        assert_eq!(result.seed_color, Some(Color::WHITE));
        assert_eq!(result.bounds, Some(region));
        assert_eq!(img.count_color(Color::BLACK), 2500);
    }

    #[test]
    fn test_same_color_is_noop() {
        let mut img = Image::filled(8, 8, Color::WHITE);
        let before = img.clone();
        let result = floodfill(&mut img, &Rectangle::new(0, 0, 8, 8), 3, 3, Color::WHITE);
        assert!(result.is_empty());
        assert_eq!(img, before);
    }

    #[test]
    fn test_seed_outside_region() {
        let mut img = Image::filled(8, 8, Color::WHITE);
        let before = img.clone();
        let region = Rectangle::new(2, 2, 4, 4);

        assert!(floodfill(&mut img, &region, 0, 0, Color::BLACK).is_empty());
        assert!(floodfill(&mut img, &region, -5, 3, Color::BLACK).is_empty());
        assert!(floodfill(&mut img, &region, 3, 100, Color::BLACK).is_empty());
        assert_eq!(img, before);
    }

    #[test]
    fn test_fill_is_confined_to_region() {
        let mut img = Image::filled(10, 10, Color::WHITE);
        let region = Rectangle::new(2, 3, 5, 4);
        let result = floodfill(&mut img, &region, 4, 4, Color::BLACK);

        assert_eq!(result.filled, 20);
        for y in 0..10 {
            for x in 0..10 {
                let expected = if region.contains_point(x, y) {
                    Color::BLACK
                } else {
                    Color::WHITE
                };
                assert_eq!(img.pixel_at(x as u32, y as u32), expected, "at {},{}", x, y);
            }
        }
    }

    #[test]
    fn test_diagonal_is_not_connected() {
        // Two white pixels touching only at a corner
        let mut img = Image::filled(2, 2, Color::BLACK);
        img.set_pixel(0, 0, Color::WHITE);
        img.set_pixel(1, 1, Color::WHITE);

        let red = Color::rgb8(255, 0, 0);
        floodfill(&mut img, &Rectangle::new(0, 0, 2, 2), 0, 0, red);

        assert_eq!(img.pixel_at(0, 0), red);
        assert_eq!(img.pixel_at(1, 1), Color::WHITE);
    }
}

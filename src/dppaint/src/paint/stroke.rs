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

//! Stroke rendering primitives: filled round dabs and gap-free lines of dabs.

use super::{Color, PixelSurface, Rectangle};

fn merge(a: Option<Rectangle>, b: Option<Rectangle>) -> Option<Rectangle> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.union(&b)),
        (a, None) => a,
        (None, b) => b,
    }
}

// Largest h such that h*h <= v
fn isqrt(v: i64) -> i64 {
    let mut h = (v as f64).sqrt() as i64;
    while (h + 1) * (h + 1) <= v {
        h += 1;
    }
    while h * h > v {
        h -= 1;
    }
    h
}

/// Draw a filled circle. Every pixel within `radius` of the center
/// (inclusive) is painted, clipped to the given rectangle.
///
/// Returns the area that was touched, if any.
pub fn fill_circle<S>(
    surface: &mut S,
    clip: &Rectangle,
    cx: i32,
    cy: i32,
    radius: u32,
    color: Color,
) -> Option<Rectangle>
where
    S: PixelSurface + ?Sized,
{
    let clip = clip.cropped(surface.size())?;

    // r*r must fit in an i64
    let r = (radius as i64).min(i32::MAX as i64);
    let (cx, cy) = (cx as i64, cy as i64);

    let top = (cy - r).max(clip.y as i64);
    let bottom = (cy + r).min(clip.bottom() as i64);
    let left = (cx - r).max(clip.x as i64);
    let right = (cx + r).min(clip.right() as i64);
    if top > bottom || left > right {
        return None;
    }

    let mut area: Option<Rectangle> = None;
    for y in top..=bottom {
        let dy = y - cy;
        let half = isqrt(r * r - dy * dy);
        let x0 = (cx - half).max(left);
        let x1 = (cx + half).min(right);
        if x0 <= x1 {
            surface.fill_span(y as u32, x0 as u32, x1 as u32, color);
            let span = Rectangle::from_corners(x0 as i32, y as i32, x1 as i32, y as i32);
            area = merge(area, Some(span));
        }
    }

    area
}

/// Draw circles at every step along the line from `start` to `end`
/// so that fast pointer motion leaves no gaps between samples.
///
/// The line is sampled max(|dx|, |dy|) times, both end points included.
pub fn round_line<S>(
    surface: &mut S,
    clip: &Rectangle,
    start: (i32, i32),
    end: (i32, i32),
    radius: u32,
    color: Color,
) -> Option<Rectangle>
where
    S: PixelSurface + ?Sized,
{
    let dx = end.0 as i64 - start.0 as i64;
    let dy = end.1 as i64 - start.1 as i64;
    let steps = dx.abs().max(dy.abs());

    if steps == 0 {
        return fill_circle(surface, clip, start.0, start.1, radius, color);
    }

    let mut changed = None;
    for i in 0..=steps {
        let x = (start.0 as i64 + dx * i / steps) as i32;
        let y = (start.1 as i64 + dy * i / steps) as i32;
        changed = merge(changed, fill_circle(surface, clip, x, y, radius, color));
    }
    changed
}

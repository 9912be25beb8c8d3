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

use crate::paint::{Image, PixelSurface, Rectangle};

/// A frozen copy of a canvas region, used for undo and redo.
///
/// The pixels are copied when the snapshot is taken, so later changes
/// to the surface never leak into it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    rect: Rectangle,
    image: Image,
}

impl Snapshot {
    /// Copy the given region of the surface
    pub fn capture<S>(surface: &S, rect: &Rectangle) -> Snapshot
    where
        S: PixelSurface + ?Sized,
    {
        Snapshot {
            rect: *rect,
            image: surface.copy_region(rect),
        }
    }

    /// Write the snapshot back to where it was taken from
    pub fn restore<S>(&self, surface: &mut S)
    where
        S: PixelSurface + ?Sized,
    {
        // Capture crops negative coordinates away
        surface.blit(self.rect.x.max(0), self.rect.y.max(0), &self.image);
    }

    pub fn rect(&self) -> &Rectangle {
        &self.rect
    }

    pub fn image(&self) -> &Image {
        &self.image
    }
}

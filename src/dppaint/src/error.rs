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

use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum PaintError {
    /// Brush radius must be a positive number of pixels
    InvalidBrushSize(u32),
    /// An image with no pixels cannot be loaded onto the canvas
    EmptyImage,
    /// The surface does not cover the configured canvas area
    SurfaceTooSmall { width: u32, height: u32 },
    /// The configured canvas area is degenerate
    InvalidLayout(&'static str),
}

impl fmt::Display for PaintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaintError::InvalidBrushSize(s) => write!(f, "invalid brush size {}", s),
            PaintError::EmptyImage => write!(f, "image has no content"),
            PaintError::SurfaceTooSmall { width, height } => write!(
                f,
                "surface ({}x{}) does not cover the canvas area",
                width, height
            ),
            PaintError::InvalidLayout(e) => write!(f, "invalid layout: {}", e),
        }
    }
}

impl std::error::Error for PaintError {}

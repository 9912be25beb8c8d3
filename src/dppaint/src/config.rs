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

use crate::paint::{Color, Rectangle};
use crate::PaintError;

/// Window geometry and tool defaults.
///
/// The window is split into a palette strip on the left, a toolbar at the
/// bottom and the drawing canvas filling the rest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanvasConfig {
    pub window_width: u32,
    pub window_height: u32,
    /// Width of the palette strip
    pub palette_width: u32,
    /// Size of one palette cell (cells are square)
    pub palette_cell: u32,
    pub toolbar_height: u32,
    /// How many snapshots the undo stack keeps
    pub undo_depth: usize,
    pub background: Color,
    /// Brush sizes offered by the toolbar, smallest first
    pub brush_sizes: Vec<u32>,
    pub default_brush_size: u32,
}

pub const DEFAULT_UNDO_DEPTH: usize = 20;

impl Default for CanvasConfig {
    fn default() -> Self {
        CanvasConfig {
            window_width: 1280,
            window_height: 770,
            palette_width: 200,
            palette_cell: 100,
            toolbar_height: 50,
            undo_depth: DEFAULT_UNDO_DEPTH,
            background: Color::WHITE,
            brush_sizes: vec![4, 6, 8, 10],
            default_brush_size: 8,
        }
    }
}

impl CanvasConfig {
    /// The drawing area: everything but the palette strip and the toolbar
    pub fn canvas_rect(&self) -> Result<Rectangle, PaintError> {
        let w = self.window_width as i32 - self.palette_width as i32;
        let h = self.window_height as i32 - self.toolbar_height as i32;
        if w <= 0 || h <= 0 {
            return Err(PaintError::InvalidLayout("no room left for the canvas"));
        }
        Ok(Rectangle::new(self.palette_width as i32, 0, w, h))
    }

    pub fn validate(&self) -> Result<(), PaintError> {
        self.canvas_rect()?;
        if self.palette_cell == 0 {
            return Err(PaintError::InvalidLayout("palette cell size must be positive"));
        }
        if self.default_brush_size == 0 {
            return Err(PaintError::InvalidBrushSize(0));
        }
        if let Some(&s) = self.brush_sizes.iter().find(|&&s| s == 0) {
            return Err(PaintError::InvalidBrushSize(s));
        }
        Ok(())
    }
}

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

use super::rainbow::{rainbow, RAINBOW_CYCLE, RAINBOW_STEP};
use crate::paint::floodfill::floodfill;
use crate::paint::stroke::{fill_circle, round_line};
use crate::paint::{Color, PixelSurface, Rectangle};
use crate::PaintError;

use tracing::debug;

/// The active tool. Exactly one mode is active at any time.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BrushMode {
    /// Freehand drawing with the current color
    Normal,
    /// Bucket fill with the current color
    Fill,
    /// Freehand drawing with a color cycling through the hue spectrum
    Rainbow,
}

pub const DEFAULT_BRUSH_SIZE: u32 = 8;

#[derive(Clone, Debug)]
pub struct BrushState {
    mode: BrushMode,
    /// dab radius in pixels
    size: u32,
    color: Color,
    /// color to return to when rainbow mode ends
    saved_color: Option<Color>,
    rainbow_phase: u32,
    /// previous sample of the stroke in progress
    last_point: Option<(i32, i32)>,
}

impl Default for BrushState {
    fn default() -> Self {
        BrushState {
            mode: BrushMode::Normal,
            size: DEFAULT_BRUSH_SIZE,
            color: Color::BLACK,
            saved_color: None,
            rainbow_phase: 0,
            last_point: None,
        }
    }
}

impl BrushState {
    pub fn new() -> BrushState {
        BrushState::default()
    }

    pub fn with_size(size: u32) -> Result<BrushState, PaintError> {
        let mut bs = BrushState::default();
        bs.set_size(size)?;
        Ok(bs)
    }

    pub fn mode(&self) -> BrushMode {
        self.mode
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn saved_color(&self) -> Option<Color> {
        self.saved_color
    }

    pub fn rainbow_phase(&self) -> u32 {
        self.rainbow_phase
    }

    pub fn last_point(&self) -> Option<(i32, i32)> {
        self.last_point
    }

    pub fn set_size(&mut self, size: u32) -> Result<(), PaintError> {
        if size == 0 {
            return Err(PaintError::InvalidBrushSize(size));
        }
        self.size = size;
        Ok(())
    }

    /// Change the current color without touching the mode.
    ///
    /// In fill mode, this is the fill color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Pick a color from the palette.
    ///
    /// Picking a color ends rainbow mode. The saved pre-rainbow color is
    /// discarded: the picked color takes its place.
    pub fn select_color(&mut self, color: Color) {
        if self.mode == BrushMode::Rainbow {
            self.saved_color = None;
            self.rainbow_phase = 0;
            self.mode = BrushMode::Normal;
        }
        self.color = color;
    }

    pub fn toggle_fill(&mut self) {
        match self.mode {
            BrushMode::Fill => self.mode = BrushMode::Normal,
            BrushMode::Rainbow => {
                self.exit_rainbow();
                self.mode = BrushMode::Fill;
            }
            BrushMode::Normal => self.mode = BrushMode::Fill,
        }
        self.last_point = None;
        debug!("Brush mode: {:?}", self.mode);
    }

    pub fn toggle_rainbow(&mut self) {
        if self.mode == BrushMode::Rainbow {
            self.exit_rainbow();
        } else {
            // Fill mode has no saved color, so it can be left as is
            self.saved_color = Some(self.color);
            self.rainbow_phase = 0;
            self.mode = BrushMode::Rainbow;
        }
        self.last_point = None;
        debug!("Brush mode: {:?}", self.mode);
    }

    /// Return to normal mode, restoring the color that was active
    /// before rainbow mode was entered.
    fn exit_rainbow(&mut self) {
        if let Some(c) = self.saved_color.take() {
            self.color = c;
        }
        self.rainbow_phase = 0;
        self.mode = BrushMode::Normal;
    }

    /// Leave whatever special mode is active
    pub fn exit_modes(&mut self) {
        match self.mode {
            BrushMode::Normal => {}
            BrushMode::Fill => self.toggle_fill(),
            BrushMode::Rainbow => self.toggle_rainbow(),
        }
    }

    /// Would a fill at this point change anything?
    pub fn needs_fill<S>(&self, surface: &S, x: i32, y: i32) -> bool
    where
        S: PixelSurface + ?Sized,
    {
        match surface.bounds() {
            Some(b) if b.contains_point(x, y) => surface.pixel_at(x as u32, y as u32) != self.color,
            _ => false,
        }
    }

    /// Apply the brush at the given point.
    ///
    /// This is called for every pointer sample while the button is held.
    /// Samples outside the clip rectangle break the stroke.
    ///
    /// Returns the area that was changed.
    pub fn apply_at<S>(&mut self, surface: &mut S, clip: &Rectangle, x: i32, y: i32) -> Option<Rectangle>
    where
        S: PixelSurface + ?Sized,
    {
        if !clip.contains_point(x, y) {
            self.break_stroke();
            return None;
        }

        match self.mode {
            BrushMode::Fill => {
                if !self.needs_fill(surface, x, y) {
                    return None;
                }
                floodfill(surface, clip, x, y, self.color).bounds
            }
            BrushMode::Rainbow => {
                self.rainbow_phase = (self.rainbow_phase + RAINBOW_STEP) % RAINBOW_CYCLE;
                self.color = rainbow(self.rainbow_phase);
                self.dab(surface, clip, x, y)
            }
            BrushMode::Normal => self.dab(surface, clip, x, y),
        }
    }

    fn dab<S>(&mut self, surface: &mut S, clip: &Rectangle, x: i32, y: i32) -> Option<Rectangle>
    where
        S: PixelSurface + ?Sized,
    {
        match self.last_point.replace((x, y)) {
            Some(last) => round_line(surface, clip, last, (x, y), self.size, self.color),
            None => fill_circle(surface, clip, x, y, self.size, self.color),
        }
    }

    /// The pointer left the canvas: the next sample starts a new line
    pub fn break_stroke(&mut self) {
        self.last_point = None;
    }

    /// The pointer was released
    pub fn end_stroke(&mut self) {
        self.last_point = None;
        self.rainbow_phase = 0;
    }

    /// Return to the startup state
    pub fn reset(&mut self, size: u32) -> Result<(), PaintError> {
        self.set_size(size)?;
        self.mode = BrushMode::Normal;
        self.color = Color::BLACK;
        self.saved_color = None;
        self.rainbow_phase = 0;
        self.last_point = None;
        Ok(())
    }
}

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

//! Working state of the palette editor overlay.
//!
//! The picker edits a private copy of the palette. Nothing reaches the
//! committed palette until the controller saves the picker.

use super::model::{PaletteModel, Slot, Slots, DEFAULT_PALETTE};
use crate::brush::{rainbow, RAINBOW_CYCLE};
use crate::paint::{Color, Image, PixelSurface};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// Which control produced the current hover color
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColorSource {
    Grid,
    Sliders,
}

pub struct ColorPicker {
    working: Slots,
    selected: Option<Slot>,
    hover: Color,
    source: ColorSource,
    gradient: Image,
}

impl ColorPicker {
    /// Start editing a copy of the given palette.
    ///
    /// The gradient image is the grid colors are sampled from.
    pub fn open(palette: &PaletteModel, gradient: Image) -> ColorPicker {
        ColorPicker {
            working: *palette.slots(),
            selected: None,
            hover: Color::WHITE,
            source: ColorSource::Sliders,
            gradient,
        }
    }

    pub fn working(&self) -> &Slots {
        &self.working
    }

    pub fn selected(&self) -> Option<Slot> {
        self.selected
    }

    pub fn hover(&self) -> Color {
        self.hover
    }

    pub fn source(&self) -> ColorSource {
        self.source
    }

    pub fn gradient(&self) -> &Image {
        &self.gradient
    }

    /// Choose the slot to edit. The preview starts out with its current color.
    pub fn select_slot(&mut self, slot: Slot) {
        self.selected = Some(slot);
        self.hover = self.working[slot.row][slot.col];
    }

    /// Update the live preview without committing anything
    pub fn set_hover_color(&mut self, color: Color) {
        self.hover = color;
    }

    /// Sample the gradient grid at a point relative to its top-left corner.
    /// Returns false (and changes nothing) if the point is outside the grid.
    pub fn drag_grid(&mut self, x: i32, y: i32) -> bool {
        match self.gradient.bounds() {
            Some(b) if b.contains_point(x, y) => {
                self.hover = self.gradient.pixel_at(x as u32, y as u32);
                self.source = ColorSource::Grid;
                true
            }
            _ => false,
        }
    }

    /// Move one of the channel sliders. Values are clamped to 0..=255.
    pub fn drag_slider(&mut self, channel: Channel, value: i32) {
        let v = value.clamp(0, 255) as u8;
        match channel {
            Channel::Red => self.hover.r = v,
            Channel::Green => self.hover.g = v,
            Channel::Blue => self.hover.b = v,
        }
        self.source = ColorSource::Sliders;
    }

    /// Write the preview color into the selected slot.
    /// Without a selected slot, this does nothing and returns false.
    pub fn commit_slot(&mut self) -> bool {
        match self.selected {
            Some(s) => {
                self.working[s.row][s.col] = self.hover;
                true
            }
            None => false,
        }
    }

    /// Replace the working palette with the factory palette
    pub fn reset_to_default(&mut self) {
        self.working = DEFAULT_PALETTE;
        self.selected = None;
    }

    pub fn into_slots(self) -> Slots {
        self.working
    }
}

/// Slider value for a pointer position on a 256 pixel wide slider
pub fn slider_value(x: i32, slider_x: i32) -> i32 {
    (x - slider_x).clamp(0, 255)
}

fn mix(a: Color, b: Color, t: u32, total: u32) -> Color {
    let ch = |a: u8, b: u8| ((a as u32 * (total - t) + b as u32 * t) / total) as u8;
    Color::rgb8(ch(a.r, b.r), ch(a.g, b.g), ch(a.b, b.b))
}

/// Generate a hue/lightness gradient to pick colors from.
///
/// Hue runs left to right. Each column goes from white at the top through
/// the fully saturated hue in the middle to black at the bottom.
pub fn default_gradient(width: usize, height: usize) -> Image {
    let mut img = Image::new(width, height);
    if img.is_null() {
        return img;
    }

    let half = (height as u32 / 2).max(1);
    for x in 0..width {
        let hue = rainbow((x as u64 * RAINBOW_CYCLE as u64 / width as u64) as u32);
        for y in 0..height as u32 {
            let c = if y < half {
                mix(Color::WHITE, hue, y, half)
            } else {
                mix(hue, Color::BLACK, (y - half).min(half), half)
            };
            img.set_pixel(x as u32, y, c);
        }
    }
    img
}

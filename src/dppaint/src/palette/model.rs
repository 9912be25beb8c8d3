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

use crate::paint::Color;

pub const PALETTE_ROWS: usize = 2;
pub const PALETTE_COLUMNS: usize = 6;

pub type Slots = [[Color; PALETTE_COLUMNS]; PALETTE_ROWS];

/// The factory palette
pub const DEFAULT_PALETTE: Slots = [
    [
        Color::rgb8(0, 0, 0),
        Color::rgb8(255, 0, 0),
        Color::rgb8(0, 255, 0),
        Color::rgb8(0, 0, 255),
        Color::rgb8(165, 42, 42),
        Color::rgb8(255, 165, 0),
    ],
    [
        Color::rgb8(255, 255, 255),
        Color::rgb8(255, 0, 255),
        Color::rgb8(255, 255, 0),
        Color::rgb8(0, 255, 255),
        Color::rgb8(128, 0, 128),
        Color::rgb8(255, 192, 203),
    ],
];

/// Position of a color in the palette grid
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Slot {
    pub row: usize,
    pub col: usize,
}

impl Slot {
    pub fn new(row: usize, col: usize) -> Option<Slot> {
        if row < PALETTE_ROWS && col < PALETTE_COLUMNS {
            Some(Slot { row, col })
        } else {
            None
        }
    }

    pub fn all() -> impl Iterator<Item = Slot> {
        (0..PALETTE_ROWS).flat_map(|row| (0..PALETTE_COLUMNS).map(move |col| Slot { row, col }))
    }
}

pub struct PaletteModel {
    slots: Slots,
    selected: Option<Slot>,
}

impl Default for PaletteModel {
    fn default() -> Self {
        PaletteModel {
            slots: DEFAULT_PALETTE,
            selected: Some(Slot { row: 0, col: 0 }),
        }
    }
}

impl PaletteModel {
    pub fn new() -> PaletteModel {
        PaletteModel::default()
    }

    pub fn slots(&self) -> &Slots {
        &self.slots
    }

    pub fn color(&self, slot: Slot) -> Color {
        self.slots[slot.row][slot.col]
    }

    /// Mark the slot as the last clicked one and return its color
    pub fn select(&mut self, slot: Slot) -> Color {
        self.selected = Some(slot);
        self.color(slot)
    }

    pub fn selected(&self) -> Option<Slot> {
        self.selected
    }

    /// Replace all the colors at once.
    ///
    /// Returns the slots that changed, with their old and new colors.
    pub fn replace(&mut self, slots: Slots) -> Vec<(Slot, Color, Color)> {
        let changes = Slot::all()
            .filter_map(|s| {
                let old = self.color(s);
                let new = slots[s.row][s.col];
                if old != new {
                    Some((s, old, new))
                } else {
                    None
                }
            })
            .collect();
        self.slots = slots;
        changes
    }

    /// Find the slot under a point in the palette strip.
    ///
    /// The strip shows the palette transposed: each palette row is a
    /// column of square cells, so x picks the row and y the column.
    pub fn slot_at(x: i32, y: i32, cell_size: u32) -> Option<Slot> {
        if x < 0 || y < 0 || cell_size == 0 {
            return None;
        }
        Slot::new(x as usize / cell_size as usize, y as usize / cell_size as usize)
    }
}

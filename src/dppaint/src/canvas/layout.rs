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

//! Data driven hit-testing: screen areas map to actions through tables
//! instead of inline coordinate checks.

use crate::config::CanvasConfig;
use crate::paint::Rectangle;
use crate::palette::{PaletteModel, Slot, PALETTE_COLUMNS, PALETTE_ROWS};
use crate::PaintError;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Ask the host to save the canvas
    Save,
    /// Ask the host for an image to open
    Open,
    Clear,
    ToggleFill,
    ToggleRainbow,
    Undo,
    Redo,
    TogglePicker,
    SetBrushSize(u32),
    GrowBrush,
    ShrinkBrush,
    SelectSlot(Slot),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Space,
    B,
    Z,
    P,
    Plus,
    Minus,
}

/// Keyboard shortcuts: key, ctrl, shift
const SHORTCUTS: &[(Key, bool, bool, Action)] = &[
    (Key::Space, false, false, Action::ToggleRainbow),
    (Key::B, false, false, Action::ToggleFill),
    (Key::Z, true, false, Action::Undo),
    (Key::Z, true, true, Action::Redo),
    (Key::P, false, false, Action::TogglePicker),
    (Key::Plus, false, false, Action::GrowBrush),
    (Key::Minus, false, false, Action::ShrinkBrush),
];

pub fn shortcut(key: Key, ctrl: bool, shift: bool) -> Option<Action> {
    SHORTCUTS
        .iter()
        .find(|(k, c, s, _)| *k == key && *c == ctrl && *s == shift)
        .map(|(_, _, _, a)| *a)
}

const WIDE_BUTTONS: [Action; 5] = [
    Action::Save,
    Action::Open,
    Action::Clear,
    Action::ToggleFill,
    Action::ToggleRainbow,
];
const NARROW_BUTTONS: [Action; 3] = [Action::Undo, Action::Redo, Action::TogglePicker];

pub struct Layout {
    canvas: Rectangle,
    palette: Option<Rectangle>,
    palette_cell: u32,
    buttons: Vec<(Rectangle, Action)>,
}

impl Layout {
    pub fn new(config: &CanvasConfig) -> Result<Layout, PaintError> {
        config.validate()?;
        let canvas = config.canvas_rect()?;
        let toolbar_y = canvas.bottom() + 1;
        let button_y = toolbar_y + 5;
        let button_h = (config.toolbar_height as i32 - 10).max(1);

        let mut buttons = Vec::new();
        for (i, &action) in WIDE_BUTTONS.iter().enumerate() {
            let r = Rectangle::new(5 + i as i32 * 100, button_y, 90, button_h);
            buttons.push((r, action));
        }
        for (i, &action) in NARROW_BUTTONS.iter().enumerate() {
            let r = Rectangle::new(505 + i as i32 * 50, button_y, 45, button_h);
            buttons.push((r, action));
        }

        // Brush size selectors sit in the right end of the toolbar
        let center_y = toolbar_y + config.toolbar_height as i32 / 2;
        let first_x = config.window_width as i32 - 200;
        for (i, &size) in config.brush_sizes.iter().enumerate() {
            let cx = first_x + 50 * i as i32;
            buttons.push((
                Rectangle::new(cx - 20, center_y - 20, 40, 40),
                Action::SetBrushSize(size),
            ));
        }

        let cell = config.palette_cell;
        let palette = Rectangle::new(
            0,
            0,
            (cell as usize * PALETTE_ROWS) as i32,
            (cell as usize * PALETTE_COLUMNS) as i32,
        )
        .intersected(&Rectangle::new(
            0,
            0,
            config.palette_width as i32,
            canvas.h,
        ));

        Ok(Layout {
            canvas,
            palette,
            palette_cell: cell,
            buttons,
        })
    }

    /// The drawing area
    pub fn canvas(&self) -> &Rectangle {
        &self.canvas
    }

    pub fn buttons(&self) -> &[(Rectangle, Action)] {
        &self.buttons
    }

    pub fn button_rect(&self, action: Action) -> Option<Rectangle> {
        self.buttons
            .iter()
            .find(|(_, a)| *a == action)
            .map(|(r, _)| *r)
    }

    /// Find what is under the given point, if anything.
    /// The canvas itself is not an action.
    pub fn hit(&self, x: i32, y: i32) -> Option<Action> {
        if let Some(p) = self.palette {
            if p.contains_point(x, y) {
                return PaletteModel::slot_at(x, y, self.palette_cell).map(Action::SelectSlot);
            }
        }

        self.buttons
            .iter()
            .find(|(r, _)| r.contains_point(x, y))
            .map(|(_, a)| *a)
    }
}

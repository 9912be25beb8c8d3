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

use dppaint::brush::{rainbow, BrushMode, RAINBOW_STEP};
use dppaint::canvas::{Action, Controller, Key};
use dppaint::paint::{Color, PixelSurface};
use dppaint::palette::Slot;
use dppaint::CanvasConfig;

fn controller() -> Controller {
    Controller::new(CanvasConfig::default()).unwrap()
}

#[test]
fn test_line_has_no_gaps() {
    let mut c = controller();
    c.perform(Action::SetBrushSize(4));
    c.pointer_down(300, 300);
    c.pointer_moved(700, 500);
    c.pointer_up();

    // every point of the ideal line is covered
    for i in 0..=400 {
        let x = 300 + i;
        let y = 300 + i / 2;
        assert_eq!(
            c.surface().pixel_at(x as u32, y as u32),
            Color::BLACK,
            "gap at ({}, {})",
            x,
            y
        );
    }
}

#[test]
fn test_leaving_canvas_breaks_line() {
    let mut c = controller();
    c.perform(Action::SetBrushSize(4));
    c.pointer_down(300, 300);
    c.pointer_moved(100, 300); // over the palette strip
    c.pointer_moved(600, 300);
    c.pointer_up();

    assert_eq!(c.surface().pixel_at(450, 300), Color::WHITE, "no line across the gap");
    assert_eq!(c.surface().pixel_at(300, 300), Color::BLACK);
    assert_eq!(c.surface().pixel_at(600, 300), Color::BLACK);
    assert_eq!(c.surface().pixel_at(100, 300), Color::WHITE);
    assert_eq!(
        c.history().undo_stack().len(),
        2,
        "re-entering the canvas starts a new undo step"
    );
}

#[test]
fn test_rainbow_stroke_cycles_colors() {
    let mut c = controller();
    c.key_pressed(Key::Space, false, false);
    assert_eq!(c.brush().mode(), BrushMode::Rainbow);

    c.pointer_down(300, 300);
    assert_eq!(c.surface().pixel_at(300, 300), rainbow(RAINBOW_STEP));
    c.pointer_moved(301, 300);
    assert_eq!(c.surface().pixel_at(301, 300), rainbow(2 * RAINBOW_STEP));
    c.pointer_up();
    assert_eq!(c.brush().rainbow_phase(), 0, "phase restarts with each stroke");

    c.pointer_down(600, 300);
    c.pointer_up();
    assert_eq!(c.surface().pixel_at(600, 300), rainbow(RAINBOW_STEP));

    c.key_pressed(Key::Space, false, false);
    assert_eq!(c.brush().mode(), BrushMode::Normal);
    assert_eq!(c.color(), Color::BLACK, "color from before rainbow mode is restored");
}

#[test]
fn test_palette_pick_ends_rainbow() {
    let mut c = controller();
    c.perform(Action::ToggleRainbow);
    c.pointer_down(300, 300);
    c.pointer_up();

    // column 2 of the first row is green
    c.pointer_down(50, 250);
    assert_eq!(c.palette().selected(), Slot::new(0, 2));
    assert_eq!(c.brush().mode(), BrushMode::Normal);
    assert_eq!(c.color(), Color::rgb8(0, 255, 0));
    assert_eq!(c.brush().saved_color(), None);
}

#[test]
fn test_fill_and_rainbow_exclusive() {
    let mut c = controller();
    c.perform(Action::SelectSlot(Slot::new(0, 3).unwrap()));
    let blue = c.color();

    c.perform(Action::ToggleRainbow);
    c.perform(Action::ToggleFill);
    assert_eq!(c.brush().mode(), BrushMode::Fill);
    assert_eq!(c.color(), blue, "switching to fill restores the color");

    c.perform(Action::ToggleRainbow);
    assert_eq!(c.brush().mode(), BrushMode::Rainbow);
    c.perform(Action::ToggleRainbow);
    assert_eq!(c.brush().mode(), BrushMode::Normal);
    assert_eq!(c.color(), blue);
}

#[test]
fn test_toolbar_size_selectors() {
    let mut c = controller();
    for (i, size) in [4, 6, 8, 10].iter().enumerate() {
        c.pointer_down(1080 + 50 * i as i32, 745);
        c.pointer_up();
        assert_eq!(c.brush().size(), *size);
    }
    assert!(!c.can_undo(), "toolbar clicks are not edits");
}

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

use dppaint::canvas::Controller;
use dppaint::paint::{Color, PixelSurface};
use dppaint::CanvasConfig;

fn controller() -> Controller {
    Controller::new(CanvasConfig::default()).unwrap()
}

fn dab(c: &mut Controller, x: i32, y: i32) {
    c.pointer_down(x, y);
    c.pointer_up();
}

#[test]
fn test_simple_undo() {
    let mut c = controller();
    let blank = c.canvas_image();

    assert!(!c.undo(), "nothing to undo on a fresh canvas");

    c.pointer_down(300, 100);
    c.pointer_moved(300, 150);
    c.pointer_moved(300, 200);
    c.pointer_up();
    let drawn = c.canvas_image();
    assert_eq!(c.surface().pixel_at(300, 175), Color::BLACK);
    assert_eq!(
        c.history().undo_stack().len(),
        1,
        "a whole stroke should be a single undo step"
    );

    assert!(c.undo());
    assert!(
        c.canvas_image() == blank,
        "undo should have returned the canvas to blank"
    );

    assert!(c.redo());
    assert!(
        c.canvas_image() == drawn,
        "redo should have brought the stroke back"
    );
    assert!(!c.redo(), "redo stack should be empty now");
}

#[test]
fn test_undo_depth_is_bounded() {
    let mut c = controller();
    let xs: Vec<i32> = (0..25).map(|i| 250 + i * 30).collect();
    for &x in &xs {
        dab(&mut c, x, 100);
    }

    assert_eq!(c.history().undo_stack().len(), 20);

    for i in 0..20 {
        assert!(c.undo(), "undo #{} should have succeeded", i + 1);
    }
    assert!(!c.undo(), "only 20 undo steps should be kept");

    // The oldest five edits fell off the bottom of the stack
    for (i, &x) in xs.iter().enumerate() {
        let expected = if i < 5 { Color::BLACK } else { Color::WHITE };
        assert_eq!(c.surface().pixel_at(x as u32, 100), expected, "dab {}", i);
    }
}

#[test]
fn test_new_edit_invalidates_redo() {
    let mut c = controller();
    dab(&mut c, 400, 400);
    assert!(c.undo());
    assert!(c.can_redo());

    dab(&mut c, 600, 400);
    assert!(!c.can_redo(), "a new edit should have cleared the redo stack");
    assert!(!c.redo());
    assert_eq!(c.surface().pixel_at(400, 400), Color::WHITE);
    assert_eq!(c.surface().pixel_at(600, 400), Color::BLACK);
}

#[test]
fn test_clear_is_undoable() {
    let mut c = controller();
    dab(&mut c, 500, 300);
    let drawn = c.canvas_image();

    c.clear();
    assert_eq!(c.canvas_image().count_color(Color::WHITE), 1080 * 720);

    assert!(c.undo());
    assert!(c.canvas_image() == drawn, "undo should have reverted the clear");
}

#[test]
fn test_undo_interleaved_with_redo() {
    let mut c = controller();
    let blank = c.canvas_image();
    dab(&mut c, 300, 300);
    let one = c.canvas_image();
    dab(&mut c, 400, 300);
    let two = c.canvas_image();

    assert!(c.undo());
    assert!(c.canvas_image() == one);
    assert!(c.undo());
    assert!(c.canvas_image() == blank);
    assert!(c.redo());
    assert!(c.canvas_image() == one);
    assert!(c.redo());
    assert!(c.canvas_image() == two);
}

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

use dppaint::brush::BrushMode;
use dppaint::canvas::{Action, Controller};
use dppaint::paint::floodfill::floodfill;
use dppaint::paint::{Color, Image, PixelSurface, Rectangle};
use dppaint::CanvasConfig;

// 20x20 white image with a one pixel black square outline at 5..=14
fn boxed_image() -> Image {
    let mut img = Image::filled(20, 20, Color::WHITE);
    for i in 5..=14 {
        img.set_pixel(i, 5, Color::BLACK);
        img.set_pixel(i, 14, Color::BLACK);
        img.set_pixel(5, i, Color::BLACK);
        img.set_pixel(14, i, Color::BLACK);
    }
    img
}

#[test]
fn test_fill_inside_outline() {
    let mut img = boxed_image();
    let red = Color::rgb8(255, 0, 0);
    let bounds = Rectangle::new(0, 0, 20, 20);

    let result = floodfill(&mut img, &bounds, 10, 10, red);
    assert_eq!(result.filled, 64);
    assert_eq!(result.seed_color, Some(Color::WHITE));
    assert_eq!(result.bounds, Some(Rectangle::new(6, 6, 8, 8)));
    assert_eq!(img.count_color(red), 64);
    assert_eq!(img.count_color(Color::BLACK), 36, "outline must be intact");
    assert_eq!(img.pixel_at(0, 0), Color::WHITE, "fill leaked outside");
}

#[test]
fn test_fill_outside_outline() {
    let mut img = boxed_image();
    let blue = Color::rgb8(0, 0, 255);
    let result = floodfill(&mut img, &Rectangle::new(0, 0, 20, 20), 0, 0, blue);

    assert_eq!(result.filled, 400 - 100);
    assert_eq!(img.pixel_at(10, 10), Color::WHITE, "fill leaked inside");
}

#[test]
fn test_fill_the_outline_itself() {
    let mut img = boxed_image();
    let green = Color::rgb8(0, 255, 0);
    let result = floodfill(&mut img, &Rectangle::new(0, 0, 20, 20), 5, 5, green);

    assert_eq!(result.filled, 36);
    assert_eq!(img.count_color(Color::BLACK), 0);
}

#[test]
fn test_refill_is_noop() {
    let mut img = boxed_image();
    let red = Color::rgb8(255, 0, 0);
    let bounds = Rectangle::new(0, 0, 20, 20);
    floodfill(&mut img, &bounds, 10, 10, red);
    let before = img.clone();

    let result = floodfill(&mut img, &bounds, 10, 10, red);
    assert!(result.is_empty());
    assert_eq!(img, before);
}

#[test]
fn test_fill_mode_stays_on_canvas() {
    let mut c = Controller::new(CanvasConfig::default()).unwrap();
    c.perform(Action::ToggleFill);
    assert_eq!(c.brush().mode(), BrushMode::Fill);

    c.pointer_down(640, 360);
    c.pointer_up();

    assert_eq!(c.canvas_image().count_color(Color::BLACK), 1080 * 720);
    assert_eq!(
        c.surface().pixel_at(100, 100),
        Color::WHITE,
        "palette strip must not be filled"
    );
    assert_eq!(
        c.surface().pixel_at(640, 740),
        Color::WHITE,
        "toolbar must not be filled"
    );
    assert_eq!(c.history().undo_stack().len(), 1);
}

#[test]
fn test_noop_fill_records_nothing() {
    let mut c = Controller::new(CanvasConfig::default()).unwrap();
    c.perform(Action::SelectSlot(
        dppaint::palette::Slot::new(1, 0).unwrap(),
    ));
    assert_eq!(c.color(), Color::WHITE);
    c.perform(Action::ToggleFill);

    c.pointer_down(640, 360);
    c.pointer_up();
    assert!(!c.can_undo(), "filling white with white is not an edit");
}

// Teeth hanging down from the top row: each gap between teeth is its own
// run on the rows below the seed row.
#[test]
fn test_fill_comb() {
    let mut img = Image::filled(9, 5, Color::WHITE);
    for x in [1, 3, 5, 7] {
        for y in 1..5 {
            img.set_pixel(x, y, Color::BLACK);
        }
    }
    let red = Color::rgb8(255, 0, 0);

    let result = floodfill(&mut img, &Rectangle::new(0, 0, 9, 5), 4, 0, red);
    assert_eq!(result.filled, 45 - 16);
    assert_eq!(img.count_color(Color::WHITE), 0, "a gap between teeth was missed");
}

struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) as u32
    }

    fn below(&mut self, n: u32) -> u32 {
        self.next() % n
    }
}

// Plain pixel-at-a-time 4-neighbour fill
fn reference_fill(img: &mut Image, region: &Rectangle, x: i32, y: i32, color: Color) -> u32 {
    if !region.contains_point(x, y) {
        return 0;
    }
    let seed = img.pixel_at(x as u32, y as u32);
    if seed == color {
        return 0;
    }

    let mut filled = 0;
    let mut stack = vec![(x, y)];
    while let Some((x, y)) = stack.pop() {
        if !region.contains_point(x, y) || img.pixel_at(x as u32, y as u32) != seed {
            continue;
        }
        img.set_pixel(x as u32, y as u32, color);
        filled += 1;
        stack.extend_from_slice(&[(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)]);
    }
    filled
}

#[test]
fn test_fill_matches_reference_on_random_images() {
    let mut rng = Lcg(0x5eed);
    let red = Color::rgb8(255, 0, 0);

    for case in 0..300 {
        let w = 1 + rng.below(24);
        let h = 1 + rng.below(24);
        let mut img = Image::filled(w as usize, h as usize, Color::WHITE);
        for y in 0..h {
            for x in 0..w {
                if rng.below(10) < 4 {
                    img.set_pixel(x, y, Color::BLACK);
                }
            }
        }

        let x0 = rng.below(w);
        let y0 = rng.below(h);
        let x1 = x0 + rng.below(w - x0);
        let y1 = y0 + rng.below(h - y0);
        let region = Rectangle::from_corners(x0 as i32, y0 as i32, x1 as i32, y1 as i32);

        let sx = rng.below(w) as i32;
        let sy = rng.below(h) as i32;
        let color = if rng.below(8) == 0 { Color::BLACK } else { red };

        let mut expected = img.clone();
        let expected_filled = reference_fill(&mut expected, &region, sx, sy, color);

        let result = floodfill(&mut img, &region, sx, sy, color);
        assert_eq!(
            result.filled, expected_filled,
            "case {}: {}x{} region {:?} seed ({}, {})",
            case, w, h, region, sx, sy
        );
        assert!(
            img == expected,
            "case {}: fill differs from reference ({}x{} region {:?} seed ({}, {}))",
            case,
            w,
            h,
            region,
            sx,
            sy
        );
    }
}

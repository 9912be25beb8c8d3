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

/// Length of one full trip around the hue circle: 6 bands of 256 steps
pub const RAINBOW_CYCLE: u32 = 6 * 256;

/// How far the phase advances per stroke sample
pub const RAINBOW_STEP: u32 = 8;

/// Fully saturated color at the given point of the hue cycle.
///
/// The cycle goes red, yellow, green, cyan, blue, magenta and back to red,
/// ramping linearly over 256 steps between each.
pub fn rainbow(phase: u32) -> Color {
    let phase = phase % RAINBOW_CYCLE;
    let pos = (phase % 256) as u8;
    match phase / 256 {
        0 => Color::rgb8(255, pos, 0),
        1 => Color::rgb8(255 - pos, 255, 0),
        2 => Color::rgb8(0, 255, pos),
        3 => Color::rgb8(0, 255 - pos, 255),
        4 => Color::rgb8(pos, 0, 255),
        _ => Color::rgb8(255, 0, 255 - pos),
    }
}

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
use std::str::FromStr;

/// Raw storage form of a color: red, green and blue channels
pub type Pixel = [u8; 3];

pub const RED_CHANNEL: usize = 0;
pub const GREEN_CHANNEL: usize = 1;
pub const BLUE_CHANNEL: usize = 2;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const fn rgb8(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    pub fn from_rgb32(c: u32) -> Color {
        Color {
            r: ((c & 0xff0000) >> 16) as u8,
            g: ((c & 0x00ff00) >> 8) as u8,
            b: (c & 0x0000ff) as u8,
        }
    }

    pub fn as_rgb32(&self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    pub fn from_pixel(p: Pixel) -> Color {
        Color {
            r: p[RED_CHANNEL],
            g: p[GREEN_CHANNEL],
            b: p[BLUE_CHANNEL],
        }
    }

    pub fn as_pixel(&self) -> Pixel {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.as_rgb32())
    }
}

impl From<Pixel> for Color {
    fn from(p: Pixel) -> Self {
        Color::from_pixel(p)
    }
}

impl FromStr for Color {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("empty color string");
        }
        if !s.starts_with('#') || s.len() != 7 {
            return Err("doesn't look like a color string");
        }
        if !s[1..].bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err("not a valid color");
        }

        u32::from_str_radix(&s[1..], 16)
            .map(Color::from_rgb32)
            .map_err(|_| "not a valid color")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_parsing() {
        assert_eq!(Color::BLACK, Color::from_str("#000000").unwrap());
        assert_eq!(Color::rgb8(255, 0, 0), Color::from_str("#ff0000").unwrap());
        assert_eq!(
            Color::rgb8(0xa5, 0x2a, 0x2a),
            Color::from_str("#A52A2A").unwrap()
        );
        assert!(Color::from_str("").is_err());
        assert!(Color::from_str("ff0000").is_err());
        assert!(Color::from_str("#ff00001").is_err());
        assert!(Color::from_str("#gg0000").is_err());
        assert!(Color::from_str("#+fffff").is_err());
        assert!(Color::from_str("#-00001").is_err());
        assert!(Color::from_str("# fffff").is_err());
    }

    #[test]
    fn test_formatting() {
        assert_eq!(Color::rgb8(255, 192, 203).to_string(), "#ffc0cb");
        assert_eq!(Color::BLACK.to_string(), "#000000");
    }

    #[test]
    fn test_pixel_conversion() {
        let c = Color::rgb8(1, 2, 3);
        assert_eq!(c.as_pixel(), [1, 2, 3]);
        assert_eq!(Color::from(c.as_pixel()), c);
        assert_eq!(Color::from_rgb32(c.as_rgb32()), c);
    }
}

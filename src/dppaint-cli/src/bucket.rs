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

use crate::impex::{load_image, save_image};

use dppaint::paint::floodfill::floodfill;
use dppaint::paint::{Color, PixelSurface};

use anyhow::{anyhow, Context, Result};
use tracing::{info, warn};

pub struct FillOpts<'a> {
    pub input_file: &'a str,
    pub output_file: &'a str,
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

/// Bucket fill an image file
pub fn fill_image(opts: &FillOpts) -> Result<()> {
    let mut img = load_image(opts.input_file)
        .with_context(|| format!("Couldn't load {}", opts.input_file))?;

    let bounds = img
        .bounds()
        .ok_or_else(|| anyhow!("{} is empty", opts.input_file))?;

    if !bounds.contains_point(opts.x, opts.y) {
        return Err(anyhow!(
            "({}, {}) is outside the {}x{} image",
            opts.x,
            opts.y,
            img.width,
            img.height
        ));
    }

    let result = floodfill(&mut img, &bounds, opts.x, opts.y, opts.color);
    if result.is_empty() {
        warn!("Nothing to fill: the pixel is already {}", opts.color);
    } else {
        info!("Filled {} pixels", result.filled);
    }

    save_image(opts.output_file, &img)
        .with_context(|| format!("Couldn't save {}", opts.output_file))?;
    Ok(())
}

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

//! Image file import and export.

use dppaint::paint::{Image, Pixel};
use image::error::ImageError;
use image::imageops::FilterType;
use image::RgbImage;
use std::path::Path;
use std::{fmt, io};

#[derive(Debug)]
pub enum ImpexError {
    IoError(io::Error),
    CodecError(ImageError),
    UnsupportedFormat,
    NoContent,
}

impl fmt::Display for ImpexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImpexError::IoError(e) => e.fmt(f),
            ImpexError::CodecError(e) => e.fmt(f),
            ImpexError::UnsupportedFormat => write!(f, "unsupported format"),
            ImpexError::NoContent => write!(f, "no content"),
        }
    }
}

impl std::error::Error for ImpexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImpexError::IoError(e) => Some(e),
            ImpexError::CodecError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ImpexError {
    fn from(err: io::Error) -> Self {
        Self::IoError(err)
    }
}

impl From<ImageError> for ImpexError {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::IoError(e) => Self::IoError(e),
            ImageError::Unsupported(_) => Self::UnsupportedFormat,
            e => Self::CodecError(e),
        }
    }
}

pub type ImageImportResult = Result<Image, ImpexError>;
pub type ImageExportResult = Result<(), ImpexError>;

pub fn to_paint_image(img: &RgbImage) -> Result<Image, ImpexError> {
    Image::from_pixels(
        img.width() as usize,
        img.height() as usize,
        bytemuck::cast_slice::<_, Pixel>(img.as_raw()).to_vec(),
    )
    .ok_or(ImpexError::NoContent)
}

pub fn from_paint_image(img: &Image) -> Result<RgbImage, ImpexError> {
    RgbImage::from_raw(
        img.width as u32,
        img.height as u32,
        bytemuck::cast_slice::<_, u8>(&img.pixels).to_vec(),
    )
    .ok_or(ImpexError::NoContent)
}

/// Load an image file. Transparency is discarded.
pub fn load_image<P>(path: P) -> ImageImportResult
where
    P: AsRef<Path>,
{
    fn inner(path: &Path) -> ImageImportResult {
        let img = to_paint_image(&image::open(path)?.to_rgb8())?;
        if img.is_null() {
            return Err(ImpexError::NoContent);
        }
        Ok(img)
    }
    inner(path.as_ref())
}

/// Save an image. The format is picked based on the file name suffix.
pub fn save_image<P>(path: P, img: &Image) -> ImageExportResult
where
    P: AsRef<Path>,
{
    fn inner(path: &Path, img: &Image) -> ImageExportResult {
        if path.extension().is_none() {
            return Err(ImpexError::UnsupportedFormat);
        }
        from_paint_image(img)?.save(path)?;
        Ok(())
    }
    inner(path.as_ref(), img)
}

/// Scale the image to the given height, keeping the aspect ratio
pub fn scale_to_height(img: &Image, height: u32) -> Result<Image, ImpexError> {
    if img.is_null() || height == 0 {
        return Err(ImpexError::NoContent);
    }
    if img.height as u32 == height {
        return Ok(img.clone());
    }

    let width = ((img.width as u64 * height as u64) / img.height as u64).max(1) as u32;
    let scaled = image::imageops::resize(&from_paint_image(img)?, width, height, FilterType::Nearest);

    to_paint_image(&scaled)
}

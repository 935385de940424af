use std::{fs, path::Path};

use anyhow::{ensure, Context};
use log::{debug, info, warn};
use nom::{bytes::complete::tag, IResult};

use crate::{
    chunks::{idat::IDATChunk, iend::IENDChunk, ihdr::IHDRChunk, ParseableChunk},
    image_data::compress_data,
    raster::solid_raster,
    Pixel,
};

pub const SIGNATURE: &[u8; 8] = b"\x89PNG\x0d\x0a\x1a\x0a";

pub fn parse_signature(input: &[u8]) -> IResult<&[u8], &[u8]> {
    tag(&SIGNATURE[..])(input)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDescriptor {
    pub width: u32,
    pub height: u32,
}
impl ImageDescriptor {
    /// No validation: zero dimensions produce a degenerate raster.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn checked(width: u32, height: u32) -> anyhow::Result<Self> {
        ensure!(
            width > 0 && height > 0,
            "Image dimensions must be positive, got {width}x{height}"
        );
        Ok(Self::new(width, height))
    }

    /// Filter byte plus three bytes per pixel.
    pub fn scanline_size(&self) -> usize {
        1 + 3 * self.width as usize
    }

    pub fn raw_size(&self) -> usize {
        self.height as usize * self.scanline_size()
    }

    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// An 8-bit truecolor image filled with a single color.
#[derive(Debug, Clone, Copy)]
pub struct SolidImage {
    descriptor: ImageDescriptor,
    color: Pixel,
}
impl SolidImage {
    pub fn new(descriptor: ImageDescriptor) -> Self {
        Self {
            descriptor,
            color: Pixel::RED,
        }
    }

    pub fn with_color(self, color: Pixel) -> Self {
        Self { color, ..self }
    }

    /// Serializes signature, `IHDR`, a single `IDAT` and `IEND`.
    pub fn encode(&self) -> Vec<u8> {
        if self.descriptor.is_degenerate() {
            warn!(
                "Encoding degenerate {}x{} image",
                self.descriptor.width, self.descriptor.height
            );
        }
        let header = IHDRChunk::truecolor(&self.descriptor);
        let compressed = compress_data(&solid_raster(&self.descriptor, self.color));
        debug!(
            "Compressed {} raster bytes into {}",
            self.descriptor.raw_size(),
            compressed.len()
        );

        let mut bytes = SIGNATURE.to_vec();
        bytes.extend(header.to_bytes());
        bytes.extend(IDATChunk { data: &compressed }.to_bytes());
        bytes.extend(IENDChunk.to_bytes());
        bytes
    }

    pub fn write(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        fs::write(path, self.encode())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Generated {}", path.display());
        Ok(())
    }
}

/// Writes a `width` x `height` solid red PNG to `path`.
pub fn write_png(path: impl AsRef<Path>, width: u32, height: u32) -> anyhow::Result<()> {
    SolidImage::new(ImageDescriptor::new(width, height)).write(path)
}

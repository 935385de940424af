use crate::{png::ImageDescriptor, Pixel};

/// Filter type 0: scanline bytes are stored unmodified.
pub(crate) const FILTER_NONE: u8 = 0;

/// Builds the unfiltered scanlines of an image where every pixel is `color`.
pub(crate) fn solid_raster(descriptor: &ImageDescriptor, color: Pixel) -> Vec<u8> {
    let mut scanline = Vec::with_capacity(descriptor.scanline_size());
    scanline.push(FILTER_NONE);
    for _ in 0..descriptor.width {
        scanline.extend(color.to_bytes());
    }
    scanline.repeat(descriptor.height as usize)
}

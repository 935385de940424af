pub mod chunks;
mod image_data;
mod inflate;
mod pixel;
mod png;
mod raster;

pub use image_data::{compress_data, decompress_data};
pub use inflate::inflate_file;
pub use pixel::Pixel;
pub use png::{parse_signature, write_png, ImageDescriptor, SolidImage, SIGNATURE};

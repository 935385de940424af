use anyhow::Context;
use miniz_oxide::{deflate::compress_to_vec_zlib, inflate::decompress_to_vec_zlib};

/// zlib's default level.
const COMPRESSION_LEVEL: u8 = 6;

/// Deflates `data` inside a zlib stream, the framing PNG requires for `IDAT`.
pub fn compress_data(data: &[u8]) -> Vec<u8> {
    compress_to_vec_zlib(data, COMPRESSION_LEVEL)
}

pub fn decompress_data(compressed_data: &[u8]) -> anyhow::Result<Vec<u8>> {
    decompress_to_vec_zlib(compressed_data).context("Failed to decompress data.")
}

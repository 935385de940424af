use std::{fs, io::ErrorKind, path::Path};

use anyhow::{bail, Context};
use log::info;

use crate::image_data::decompress_data;

/// Decompresses the zlib blob at `input` into `output`, returning the number
/// of bytes written.
pub fn inflate_file(input: impl AsRef<Path>, output: impl AsRef<Path>) -> anyhow::Result<usize> {
    let (input, output) = (input.as_ref(), output.as_ref());
    let compressed = match fs::read(input) {
        Ok(compressed) => compressed,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            bail!("Compressed input {} does not exist", input.display())
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read {}", input.display()));
        }
    };
    let decompressed = decompress_data(&compressed)
        .with_context(|| format!("{} is not a valid zlib stream", input.display()))?;
    fs::write(output, &decompressed)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!("Wrote {} bytes to {}", decompressed.len(), output.display());
    Ok(decompressed.len())
}

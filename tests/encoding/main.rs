use std::path::PathBuf;

use solid_png::chunks::{self, calculate_crc, Chunk, ParseableChunk};
use solid_png::{decompress_data, parse_signature, write_png, SIGNATURE};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("solid-png-{}-{name}", std::process::id()))
}

/// Writes a red image and returns the file contents.
fn generate(name: &str, width: u32, height: u32) -> Vec<u8> {
    let path = temp_path(name);
    write_png(&path, width, height).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    bytes
}

fn header_and_raster(file: &[u8]) -> (chunks::ihdr::IHDRChunk, Vec<u8>) {
    let (rest, _) = parse_signature(file).unwrap();
    let mut header = None;
    let mut raster = None;
    for chunk in chunks::iter_chunks(rest) {
        match chunk.unwrap() {
            Chunk::IHDR(ihdr) => header = Some(ihdr),
            Chunk::IDAT(idat) => raster = Some(decompress_data(idat.data).unwrap()),
            Chunk::IEND => (),
            Chunk::Unknown(raw) => panic!("unexpected chunk {raw:?}"),
        }
    }
    (header.unwrap(), raster.unwrap())
}

fn assert_all_red(raster: &[u8], width: u32, height: u32) {
    let scanline_size = 1 + 3 * width as usize;
    assert_eq!(raster.len(), height as usize * scanline_size);
    for scanline in raster.chunks(scanline_size) {
        assert_eq!(scanline[0], 0);
        for pixel in scanline[1..].chunks(3) {
            assert_eq!(pixel, [0xff, 0x00, 0x00]);
        }
    }
}

#[test]
fn ten_by_ten() {
    let file = generate("ten.png", 10, 10);
    assert_eq!(&file[..8], SIGNATURE);

    let (ihdr, raster) = header_and_raster(&file);
    insta::assert_debug_snapshot!(ihdr, @r###"
    IHDRChunk {
        width: 10,
        height: 10,
        bit_depth: 8,
        color_type: Truecolor,
        compression_method: 0,
        filter_method: 0,
        interlace_method: None,
    }
    "###);
    assert_eq!(raster.len(), 310);
    assert_all_red(&raster, 10, 10);
}

#[test]
fn one_by_one() {
    let file = generate("one.png", 1, 1);
    let (ihdr, raster) = header_and_raster(&file);
    assert_eq!((ihdr.width, ihdr.height), (1, 1));
    assert_eq!(raster, [0x00, 0xff, 0x00, 0x00]);
}

#[test]
fn stored_crcs_match_recomputed_ones() {
    let file = generate("crc.png", 3, 5);
    let mut offset = SIGNATURE.len();
    let mut seen = vec![];
    while offset < file.len() {
        let length = u32::from_be_bytes(file[offset..offset + 4].try_into().unwrap()) as usize;
        let typed = &file[offset + 4..offset + 8 + length];
        let stored = u32::from_be_bytes(
            file[offset + 8 + length..offset + 12 + length]
                .try_into()
                .unwrap(),
        );
        assert_eq!(calculate_crc(typed.iter().copied()), stored);
        seen.push(typed[..4].to_vec());
        offset += 12 + length;
    }
    assert_eq!(offset, file.len());
    assert_eq!(seen, [b"IHDR".to_vec(), b"IDAT".to_vec(), b"IEND".to_vec()]);
    assert_eq!(
        &file[file.len() - 12..],
        chunks::iend::IENDChunk.to_bytes()
    );
}

#[test]
fn wide_and_tall_images_stay_red() {
    for (width, height) in [(1, 64), (300, 2), (33, 17)] {
        let file = generate(&format!("{width}x{height}.png"), width, height);
        let (ihdr, raster) = header_and_raster(&file);
        assert_eq!((ihdr.width, ihdr.height), (width, height));
        assert_all_red(&raster, width, height);
    }
}

#[test]
fn zero_height_produces_empty_raster() {
    let file = generate("zero-height.png", 4, 0);
    let (ihdr, raster) = header_and_raster(&file);
    assert_eq!((ihdr.width, ihdr.height), (4, 0));
    assert!(raster.is_empty());
}

#[test]
fn zero_width_produces_filter_bytes_only() {
    let file = generate("zero-width.png", 0, 3);
    let (ihdr, raster) = header_and_raster(&file);
    assert_eq!((ihdr.width, ihdr.height), (0, 3));
    assert_eq!(raster, [0, 0, 0]);
}

#[test]
fn missing_directory_is_reported() {
    let path = temp_path("no-such-dir").join("out.png");
    let err = write_png(&path, 2, 2).unwrap_err();
    assert!(err.to_string().starts_with("Failed to write"));
    assert!(err.downcast_ref::<std::io::Error>().is_some());
}

use anyhow::Context;
use solid_png::{ImageDescriptor, SolidImage};

fn main() -> anyhow::Result<()> {
    let mut args: Vec<_> = std::env::args().skip(1).collect();
    let verbosity = if args.first().map(String::as_str) == Some("-v") {
        args.remove(0);
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Error
    };
    pretty_env_logger::formatted_builder()
        .filter_level(verbosity)
        .init();

    let (path, width, height) = match args.as_slice() {
        [] => ("test.png".to_owned(), 10, 10),
        [path, width, height] => (
            path.clone(),
            width
                .parse::<u32>()
                .with_context(|| format!("Invalid width {width}"))?,
            height
                .parse::<u32>()
                .with_context(|| format!("Invalid height {height}"))?,
        ),
        _ => anyhow::bail!("Usage: gen-png [-v] [PATH WIDTH HEIGHT]"),
    };
    SolidImage::new(ImageDescriptor::checked(width, height)?).write(&path)?;
    println!("Generated {path}");
    Ok(())
}

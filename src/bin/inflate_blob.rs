use solid_png::inflate_file;

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

    let mut args = args.into_iter();
    let input = args.next().unwrap_or_else(|| "compressed.bin".to_owned());
    let output = args.next().unwrap_or_else(|| "output.bin".to_owned());
    if args.next().is_some() {
        anyhow::bail!("Usage: inflate-blob [-v] [INPUT [OUTPUT]]");
    }
    inflate_file(&input, &output)?;
    println!("Wrote to {output}");
    Ok(())
}

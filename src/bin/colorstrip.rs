use anyhow::Context;
use colorstrip::{derive_output_path, parse_args, remove_colors, Color};
use image::ImageReader;

fn main() -> anyhow::Result<()> {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let invocation = match parse_args(std::env::args().skip(1)) {
        Ok(invocation) => invocation,
        Err(message) => {
            println!("{message}");
            std::process::exit(1);
        }
    };

    let reader = ImageReader::open(&invocation.input)
        .with_context(|| format!("Failed to open {}", invocation.input.display()))?
        .with_guessed_format()
        .with_context(|| format!("Failed to probe {}", invocation.input.display()))?;
    log::debug!("guessed input format: {:?}", reader.format());
    let mut image = reader
        .decode()
        .with_context(|| format!("Failed to decode {}", invocation.input.display()))?
        .into_rgba8();

    remove_colors(&mut image, &[Color::WHITE]);

    let output = invocation
        .output
        .unwrap_or_else(|| derive_output_path(&invocation.input));
    image
        .save(&output)
        .with_context(|| format!("Failed to save {}", output.display()))?;
    println!("Modified image saved to: {}", output.display());

    Ok(())
}

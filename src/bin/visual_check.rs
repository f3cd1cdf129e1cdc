use anyhow::Context;
use colorstrip::{remove_colors, Color};
use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

fn main() -> anyhow::Result<()> {
    let fixture_dir = match std::env::args().nth(1) {
        Some(dir) => PathBuf::from(dir),
        None => {
            println!("Usage: visual-check <fixture_dir>");
            std::process::exit(1);
        }
    };
    let output_dir = Path::new("visual-check");
    fs::create_dir_all(output_dir).context("Failed to create visual-check folder")?;

    let fixtures = fs::read_dir(&fixture_dir)
        .context("Failed to read fixture folder")?
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            let path = entry.path();
            path.is_file() && path.extension() == Some(OsStr::new("png"))
        });

    let mut processed_images = Vec::new();
    for fixture in fixtures {
        let fixture_path = fixture.path();
        let fixture_name = fixture_path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("fixture")
            .to_owned();
        let mut image = image::open(&fixture_path)
            .with_context(|| format!("Failed to decode {}", fixture_path.display()))?
            .into_rgba8();
        let removed = remove_colors(&mut image, &[Color::WHITE]);
        image
            .save(output_dir.join(format!("{fixture_name}-stripped.png")))
            .with_context(|| format!("Failed to save result for {fixture_name}"))?;
        processed_images.push(serde_json::json!({
            "name": fixture_name,
            "removed": removed,
        }));
    }

    let now = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Iso8601::DEFAULT)?;
    let results = serde_json::json!({
        "date": now,
        "processed_images": processed_images,
    });
    fs::write(output_dir.join("check_results.json"), results.to_string())?;
    Ok(())
}

use std::path::PathBuf;

use crate::paths;

pub const USAGE: &str = "Usage: colorstrip <input_path> [output_path]";

/// A parsed command line: where to read from and, optionally, where to write.
#[derive(Debug, PartialEq, Eq)]
pub struct Invocation {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
}

/// Parses the process arguments (minus the program name). The input path is
/// required; an explicit output path must name a `.png` file. On failure
/// returns the message the binary prints before exiting with status 1.
pub fn parse_args<I>(args: I) -> Result<Invocation, &'static str>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();

    let input = match args.next() {
        Some(path) => PathBuf::from(path),
        None => return Err(USAGE),
    };

    let output = match args.next() {
        Some(path) => {
            let path = PathBuf::from(path);
            if !paths::has_png_suffix(&path) {
                return Err("Output path must be a PNG file.");
            }
            Some(path)
        }
        None => None,
    };

    Ok(Invocation { input, output })
}

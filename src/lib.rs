mod cli;
mod color;
mod paths;
mod strip;

pub use cli::{parse_args, Invocation, USAGE};
pub use color::Color;
pub use paths::{derive_output_path, has_png_suffix};
pub use strip::remove_colors;

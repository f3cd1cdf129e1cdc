use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

/// Literal, case-sensitive `.png` suffix check on the file name. `out.PNG`
/// does not pass.
pub fn has_png_suffix(path: &Path) -> bool {
    path.file_name()
        .and_then(OsStr::to_str)
        .map(|name| name.ends_with(".png"))
        .unwrap_or(false)
}

/// Default output location for an input image: same directory, base name
/// prefixed with `transparent_`, extension replaced with `png` (splitting on
/// the last `.` only).
pub fn derive_output_path(input: &Path) -> PathBuf {
    let file_name = input
        .file_name()
        .map(OsStr::to_string_lossy)
        .unwrap_or_default();
    let mut output = input.with_file_name(format!("transparent_{file_name}"));
    output.set_extension("png");
    output
}

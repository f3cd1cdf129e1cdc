use image::{Rgba, RgbaImage};

use crate::color::Color;

/// Replaces every pixel whose RGB value exactly matches a member of `targets`
/// with transparent black, in place, and returns the number of pixels
/// replaced. All other pixels pass through untouched.
///
/// Reports the image dimensions before the scan and the removal count (or a
/// zero-match warning) after it on standard output.
pub fn remove_colors(image: &mut RgbaImage, targets: &[Color]) -> usize {
    let (width, height) = image.dimensions();
    println!("Image size: {width}x{height}");
    log::debug!("scanning for {} target color(s)", targets.len());

    let mut removed = 0;
    for pixel in image.pixels_mut() {
        if targets.iter().any(|color| color.matches(pixel)) {
            *pixel = Rgba([0, 0, 0, 0]);
            removed += 1;
        }
    }

    if removed == 0 {
        println!("No pixels removed from image, something might be wrong, check your input image");
    } else {
        println!("Removed {removed} pixels from image");
    }

    removed
}

//! Responsive image variants.

/// Directory holding the source photos, relative to the site root.
pub const IMAGES_DIR: &str = "images";

/// Extension of the files picked up by default.
pub const SOURCE_EXTENSION: &str = "avif";

/// Widths of the generated variants, in order. Narrower sources are re-encoded at their own
/// size rather than upscaled.
pub const VARIANT_WIDTHS: [u32; 3] = [320, 640, 1024];

/// Output file name of one variant: `<stem>-<width>.webp`.
#[must_use]
pub fn variant_name(stem: &str, width: u32) -> String {
    format!("{stem}-{width}.webp")
}

//! # Image optimizer
//!
//! Re-encodes every source photo in a directory into WebP variants capped at
//! [`VARIANT_WIDTHS`], keeping the aspect ratio. Sources narrower than a target width are
//! re-encoded at their own size. A file that fails to decode or write is reported and
//! skipped; the rest of the batch still runs.

mod error;

pub use self::error::{OptimizeError, OptimizeErrorExt};

use aqua_domain::images::{IMAGES_DIR, SOURCE_EXTENSION, VARIANT_WIDTHS, variant_name};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Milestones of a run, reported as they happen.
#[derive(Debug)]
pub enum Progress<'a> {
    /// The directory holds no file with the source extension.
    NoSources { dir: &'a Path, extension: &'a str },
    Found { count: usize, extension: &'a str },
    Saved(&'a Path),
    Failed { source: &'a Path, error: &'a OptimizeError },
}

/// Outcome of a batch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub written: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ImageOptimizer {
    dir: PathBuf,
    extension: String,
}

impl ImageOptimizer {
    /// Optimizes `*.avif` files in `dir`, writing the variants next to them.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), extension: SOURCE_EXTENSION.to_owned() }
    }

    /// Works on `<root>/images`.
    pub fn for_site(root: impl AsRef<Path>) -> Self {
        Self::new(root.as_ref().join(IMAGES_DIR))
    }

    /// Picks up files with `extension` (without the dot) instead.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Source files in name order. A missing directory has no sources.
    ///
    /// # Errors
    /// [`OptimizeError::Io`] when the directory exists but cannot be listed.
    pub fn sources(&self) -> Result<Vec<PathBuf>, OptimizeError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e).context(format!("listing {}", self.dir.display())),
        };

        let mut sources = Vec::new();
        for entry in entries {
            let path = entry.context(format!("listing {}", self.dir.display()))?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == self.extension.as_str()) {
                sources.push(path);
            }
        }
        sources.sort();
        Ok(sources)
    }

    /// Optimizes every source, continuing past per-file failures.
    ///
    /// # Errors
    /// Only when the source directory cannot be listed; per-file failures are reported through
    /// [`Progress::Failed`] and collected in [`Summary::failed`].
    pub fn run(&self, mut report: impl FnMut(Progress<'_>)) -> Result<Summary, OptimizeError> {
        let sources = self.sources()?;
        if sources.is_empty() {
            report(Progress::NoSources { dir: &self.dir, extension: &self.extension });
            return Ok(Summary::default());
        }

        report(Progress::Found { count: sources.len(), extension: &self.extension });

        let mut summary = Summary::default();
        for source in sources {
            match optimize_file(&source, &self.dir, &mut report) {
                Ok(written) => summary.written.extend(written),
                Err(error) => {
                    debug!(source = %source.display(), %error, "Source skipped");
                    report(Progress::Failed { source: &source, error: &error });
                    summary.failed.push(source);
                },
            }
        }

        Ok(summary)
    }
}

/// Writes every width variant of `source` into `output_dir` and returns the paths in order.
///
/// # Errors
/// [`OptimizeError::Image`] when the source cannot be decoded or a variant cannot be written.
pub fn optimize_file(
    source: &Path,
    output_dir: &Path,
    report: &mut impl FnMut(Progress<'_>),
) -> Result<Vec<PathBuf>, OptimizeError> {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .ok_or_else(|| OptimizeError::from(format!("{} has no file name", source.display())))?;

    let image = normalize(image::open(source).context(format!("decoding {}", source.display()))?);
    debug!(source = %source.display(), width = image.width(), height = image.height(), "Source decoded");

    let mut written = Vec::with_capacity(VARIANT_WIDTHS.len());
    for width in VARIANT_WIDTHS {
        let path = output_dir.join(variant_name(&stem, width));
        variant(&image, width)
            .save_with_format(&path, ImageFormat::WebP)
            .context(format!("writing {}", path.display()))?;

        info!(file = %path.display(), width, "Variant written");
        report(Progress::Saved(&path));
        written.push(path);
    }

    Ok(written)
}

/// Scales `image` down to `width`, keeping the aspect ratio; narrower images are returned as is.
#[must_use]
pub fn variant(image: &DynamicImage, width: u32) -> DynamicImage {
    if image.width() <= width {
        return image.clone();
    }

    let height = u64::from(image.height()) * u64::from(width) / u64::from(image.width());
    let height = u32::try_from(height).unwrap_or(u32::MAX).max(1);
    image.resize_exact(width, height, FilterType::Lanczos3)
}

/// Brings any decoded colour layout to 8-bit RGB, or RGBA when the source has alpha.
fn normalize(image: DynamicImage) -> DynamicImage {
    match image {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => image,
        other if other.color().has_alpha() => DynamicImage::ImageRgba8(other.to_rgba8()),
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayAlphaImage, LumaA, Rgb, RgbImage};

    fn solid(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([0, 120, 200])))
    }

    #[test]
    fn wide_images_are_scaled_down_proportionally() {
        let scaled = variant(&solid(1000, 500), 320);
        assert_eq!((scaled.width(), scaled.height()), (320, 160));
    }

    #[test]
    fn heights_round_down() {
        let scaled = variant(&solid(1000, 333), 640);
        assert_eq!((scaled.width(), scaled.height()), (640, 213));
    }

    #[test]
    fn narrow_images_are_never_upscaled() {
        let kept = variant(&solid(300, 200), 1024);
        assert_eq!((kept.width(), kept.height()), (300, 200));
    }

    #[test]
    fn grey_with_alpha_becomes_rgba() {
        let grey = DynamicImage::ImageLumaA8(GrayAlphaImage::from_pixel(4, 4, LumaA([10, 128])));
        assert!(matches!(normalize(grey), DynamicImage::ImageRgba8(_)));
        assert!(matches!(normalize(solid(2, 2)), DynamicImage::ImageRgb8(_)));
    }

    #[test]
    fn missing_directory_has_no_sources() {
        let dir = tempfile::tempdir().expect("tempdir");
        let optimizer = ImageOptimizer::new(dir.path().join("absent"));
        assert!(optimizer.sources().expect("listing").is_empty());
    }
}

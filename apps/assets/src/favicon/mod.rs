//! # Favicon converter
//!
//! Parses the source SVG once and rasterizes it into every [`FAVICON_SIZES`] entry, one
//! after another. The first failure aborts the batch; files already written stay on disk.

mod error;

pub use self::error::{FaviconError, FaviconErrorExt};
use aqua_domain::favicon::{FAVICON_SIZES, FAVICON_SOURCE, FaviconSize};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Milestones of a run, reported as they happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress<'a> {
    Reading(&'a Path),
    Generating(FaviconSize),
    Created(FaviconSize),
}

#[derive(Debug, Clone)]
pub struct FaviconGenerator {
    source: PathBuf,
    output_dir: PathBuf,
}

impl FaviconGenerator {
    pub fn new(source: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self { source: source.into(), output_dir: output_dir.into() }
    }

    /// Reads `<root>/favicon.svg` and writes the PNGs next to it.
    pub fn for_site(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self::new(root.join(FAVICON_SOURCE), root)
    }

    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Generates every favicon variant and returns the written paths in order.
    ///
    /// # Errors
    /// * [`FaviconError::SourceNotFound`] before anything is written when the SVG is missing.
    /// * [`FaviconError::Io`], [`FaviconError::Svg`] or [`FaviconError::Render`] for the first
    ///   read, parse, render or write failure.
    pub fn run(&self, mut report: impl FnMut(Progress<'_>)) -> Result<Vec<PathBuf>, FaviconError> {
        if !self.source.is_file() {
            return Err(FaviconError::SourceNotFound { path: self.source.clone(), context: None });
        }

        report(Progress::Reading(&self.source));
        let tree = load_tree(&self.source)?;

        let mut written = Vec::with_capacity(FAVICON_SIZES.len());
        for size in FAVICON_SIZES {
            report(Progress::Generating(size));

            let path = self.output_dir.join(size.filename);
            let png = render_png(&tree, size)?;
            fs::write(&path, png).context(format!("writing {}", path.display()))?;

            info!(file = size.filename, width = size.width, height = size.height, "Favicon written");
            report(Progress::Created(size));
            written.push(path);
        }

        Ok(written)
    }
}

/// Parses an SVG file; relative image references resolve against its directory.
///
/// # Errors
/// [`FaviconError::Io`] when the file cannot be read, [`FaviconError::Svg`] when it does not parse.
pub fn load_tree(path: &Path) -> Result<Tree, FaviconError> {
    let data = fs::read(path).context(format!("reading {}", path.display()))?;

    let mut options = Options { resources_dir: path.parent().map(Path::to_path_buf), ..Options::default() };
    options.fontdb_mut().load_system_fonts();

    let tree = Tree::from_data(&data, &options).context(format!("parsing {}", path.display()))?;
    debug!(width = tree.size().width(), height = tree.size().height(), "SVG parsed");
    Ok(tree)
}

/// Rasterizes `tree` to exactly `size`, scaled to cover the canvas and centred, as PNG bytes.
///
/// # Errors
/// [`FaviconError::Render`] when the canvas cannot be allocated or encoded.
pub fn render_png(tree: &Tree, size: FaviconSize) -> Result<Vec<u8>, FaviconError> {
    let mut pixmap = Pixmap::new(size.width, size.height).ok_or_else(|| FaviconError::Render {
        message: format!("cannot allocate a {}x{} canvas", size.width, size.height).into(),
        context: Some(size.filename.into()),
    })?;

    let (width, height) = (size.width as f32, size.height as f32);
    let svg = tree.size();
    let scale = (width / svg.width()).max(height / svg.height());
    let transform = Transform::from_scale(scale, scale).post_translate(
        (width - svg.width() * scale) / 2.0,
        (height - svg.height() * scale) / 2.0,
    );

    resvg::render(tree, transform, &mut pixmap.as_mut());

    pixmap.encode_png().map_err(|e| FaviconError::Render {
        message: e.to_string().into(),
        context: Some(size.filename.into()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
        <rect width="100" height="100" fill="#0066cc"/>
    </svg>"##;

    fn tree(svg: &str) -> Tree {
        Tree::from_str(svg, &Options::default()).expect("valid svg")
    }

    #[test]
    fn renders_exact_dimensions() {
        let tree = tree(SQUARE);
        for size in FAVICON_SIZES {
            let png = render_png(&tree, size).expect("render");
            let pixmap = Pixmap::decode_png(&png).expect("decodable png");
            assert_eq!((pixmap.width(), pixmap.height()), (size.width, size.height));
        }
    }

    #[test]
    fn wide_sources_cover_the_canvas() {
        let wide = tree(
            r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 200 100">
                <rect width="200" height="100" fill="#00a8ff"/>
            </svg>"##,
        );
        let png = render_png(&wide, FAVICON_SIZES[0]).expect("render");
        let pixmap = Pixmap::decode_png(&png).expect("decodable png");

        let corner = pixmap.pixel(0, 0).expect("in bounds");
        assert_eq!(corner.alpha(), 255, "no transparent letterbox");
    }

    #[test]
    fn missing_source_writes_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let generator = FaviconGenerator::for_site(dir.path());

        let mut events = 0;
        let err = generator.run(|_| events += 1).expect_err("no svg");

        assert!(matches!(err, FaviconError::SourceNotFound { .. }));
        assert_eq!(events, 0);
        assert_eq!(fs::read_dir(dir.path()).expect("readable").count(), 0);
    }
}

//! Favicon raster targets.

/// Source image rasterized by the favicon generator, relative to the site root.
pub const FAVICON_SOURCE: &str = "favicon.svg";

/// One PNG output: exact pixel size and file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaviconSize {
    pub width: u32,
    pub height: u32,
    pub filename: &'static str,
}

impl FaviconSize {
    #[must_use]
    pub const fn new(width: u32, height: u32, filename: &'static str) -> Self {
        Self { width, height, filename }
    }
}

/// Generated once per run, in this order.
pub const FAVICON_SIZES: [FaviconSize; 4] = [
    FaviconSize::new(32, 32, "favicon-32.png"),
    FaviconSize::new(64, 64, "favicon-64.png"),
    FaviconSize::new(180, 180, "apple-touch-icon-180.png"),
    FaviconSize::new(192, 192, "favicon-192.png"),
];

/// `<head>` snippet printed after a successful run.
pub const USAGE_HINT: &[&str] = &[
    "Next steps:",
    "1. Add PNG links to index.html:",
    r#"   <link rel="icon" href="/favicon-32.png" sizes="32x32" type="image/png">"#,
    r#"   <link rel="icon" href="/favicon-192.png" sizes="192x192" type="image/png">"#,
    r#"   <link rel="apple-touch-icon" href="/apple-touch-icon-180.png">"#,
    "2. Commit and push: git add favicon-*.png apple-touch-icon-180.png",
];

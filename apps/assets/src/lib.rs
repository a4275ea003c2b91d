//! # Site assets
//!
//! Build-time tools for the site's static files:
//!
//! * [`favicon`]: turns `favicon.svg` into the fixed set of PNG icons the page head links to.
//! * [`images`]: re-encodes source photos into width-limited WebP variants for `srcset`.
//!
//! ```rust,no_run
//! use aqua_assets::favicon::{FaviconGenerator, Progress};
//!
//! let written = FaviconGenerator::for_site(".")
//!     .run(|progress| {
//!         if let Progress::Created(size) = progress {
//!             tracing::info!(file = size.filename, "created");
//!         }
//!     })
//!     .unwrap();
//! assert_eq!(written.len(), 4);
//! ```

pub mod cli;
pub mod favicon;
pub mod images;

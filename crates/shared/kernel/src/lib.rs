//! Interaction kernel of the Aqua site.
//! Keep this crate DOM-free; renderers translate their events into [`context::UiEvent`]s and
//! draw from the component state the context exposes.
//!
//! ## Driving the context
//! ```rust
//! use aqua_kernel::context::{SiteContext, UiEvent};
//! use std::time::Duration;
//!
//! let mut site = SiteContext::default();
//! site.dispatch(Duration::ZERO, UiEvent::AboutClicked);
//! assert_eq!(site.notifications().len(), 1);
//!
//! site.tick(Duration::from_secs(5));
//! assert!(site.notifications().is_empty());
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use aqua_kernel::config::load_config;
//! let cfg: aqua_kernel::domain::config::SiteConfig = load_config(Some("site")).unwrap();
//! ```
pub mod checklist;
pub mod config;
pub mod context;
pub mod error;
pub mod form;
pub mod navigation;
pub mod notification;
pub mod reveal;
pub mod ripple;
pub mod scheduler;
pub mod shop;
pub mod task;
pub mod validation;

pub use aqua_domain as domain;
pub use error::{KernelError, KernelErrorExt};

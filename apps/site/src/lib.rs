//! # Aqua site
//!
//! Dioxus desktop rendering of the marketing site. Components only translate DOM events into
//! [`aqua_kernel::context::UiEvent`]s and draw from the kernel state; all behaviour lives in
//! `aqua-kernel`.

pub mod components;
pub mod driver;

use crate::components::App;
use aqua_domain::config::SiteConfig;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

#[derive(Debug, Default)]
pub struct SiteApp {
    config: SiteConfig,
}

impl SiteApp {
    #[must_use]
    pub const fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    /// Opens the window and blocks until it is closed.
    pub fn launch(self) {
        let window_cfg = &self.config.window;
        let window = WindowBuilder::new()
            .with_title(&window_cfg.title)
            .with_inner_size(LogicalSize { width: window_cfg.width, height: window_cfg.height });

        let cfg = Config::default().with_window(window).with_custom_head(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#.into(),
        );

        LaunchBuilder::desktop().with_cfg(cfg).with_context(self.config).launch(App);
    }
}

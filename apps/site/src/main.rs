#![windows_subsystem = "windows"]

use aqua_domain::config::SiteConfig;
use aqua_kernel::config::load_config;
use aqua_site::SiteApp;
use tracing::warn;

fn main() {
    dioxus::logger::initialize_default();

    let config = load_config::<SiteConfig>(None::<&str>).unwrap_or_else(|e| {
        warn!(error = %e, "Falling back to the default site configuration");
        SiteConfig::default()
    });

    SiteApp::new(config).launch();
}

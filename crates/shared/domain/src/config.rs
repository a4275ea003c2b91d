use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use std::time::Duration;

/// Top-level site configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfigInner {
    pub timing: TimingConfig,
    pub layout: LayoutConfig,
    pub window: WindowConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into components.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(flatten, default)]
    inner: Arc<SiteConfigInner>,
}

impl Deref for SiteConfig {
    type Target = SiteConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SiteConfig {
    fn deref_mut(&mut self) -> &mut SiteConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Delays of every timed interaction, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub notification_ttl_ms: u64,
    pub submit_delay_ms: u64,
    pub form_reset_ms: u64,
    pub ripple_ms: u64,
    pub verify_delay_ms: u64,
    pub cart_feedback_ms: u64,
    pub locator_delay_ms: u64,
    pub countdown_refresh_ms: u64,
    pub offer_window_secs: u64,
}

/// Scroll and resize thresholds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Scroll offset (px) past which the header turns solid.
    pub header_scroll_threshold: f64,
    /// Viewport width (px) above which the mobile menu is force-closed.
    pub mobile_breakpoint: f64,
}

/// Desktop window settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

impl TimingConfig {
    #[must_use]
    pub const fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }

    #[must_use]
    pub const fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    #[must_use]
    pub const fn form_reset(&self) -> Duration {
        Duration::from_millis(self.form_reset_ms)
    }

    #[must_use]
    pub const fn ripple(&self) -> Duration {
        Duration::from_millis(self.ripple_ms)
    }

    #[must_use]
    pub const fn verify_delay(&self) -> Duration {
        Duration::from_millis(self.verify_delay_ms)
    }

    #[must_use]
    pub const fn cart_feedback(&self) -> Duration {
        Duration::from_millis(self.cart_feedback_ms)
    }

    #[must_use]
    pub const fn locator_delay(&self) -> Duration {
        Duration::from_millis(self.locator_delay_ms)
    }

    #[must_use]
    pub const fn countdown_refresh(&self) -> Duration {
        Duration::from_millis(self.countdown_refresh_ms)
    }

    #[must_use]
    pub const fn offer_window(&self) -> Duration {
        Duration::from_secs(self.offer_window_secs)
    }
}

// --- Default ---

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            notification_ttl_ms: 5_000,
            submit_delay_ms: 2_000,
            form_reset_ms: 3_000,
            ripple_ms: 600,
            verify_delay_ms: 1_500,
            cart_feedback_ms: 2_000,
            locator_delay_ms: 1_500,
            countdown_refresh_ms: 60_000,
            offer_window_secs: 2 * 60 * 60,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { header_scroll_threshold: 100.0, mobile_breakpoint: 768.0 }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { title: "AquaPure | Premium Drinking Water".to_owned(), width: 1280.0, height: 860.0 }
    }
}

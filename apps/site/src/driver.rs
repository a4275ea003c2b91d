//! Glue between Dioxus and the kernel: the page clock, the shared [`Site`] handle and the
//! task loop that fires scheduled work.

use aqua_domain::catalog::Section;
use aqua_domain::config::SiteConfig;
use aqua_kernel::context::{Effect, SiteContext, UiEvent};
use dioxus::html::{MountedData, ScrollBehavior};
use dioxus::prelude::*;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Longest sleep of the task loop; keeps the page responsive to clock drift.
const MAX_POLL: Duration = Duration::from_millis(50);

/// Time since the page was opened.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    origin: Instant,
}

impl Clock {
    #[must_use]
    pub fn start() -> Self {
        Self { origin: Instant::now() }
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Handle shared with every component through the context API.
#[derive(Clone, Copy)]
pub struct Site {
    pub ctx: Signal<SiteContext>,
    anchors: Signal<HashMap<Section, Rc<MountedData>>>,
    clock: Clock,
}

impl Site {
    /// Must be called inside a component scope; the signals belong to it.
    pub fn new(config: SiteConfig) -> Self {
        Self {
            ctx: Signal::new(SiteContext::new(config)),
            anchors: Signal::new(HashMap::new()),
            clock: Clock::start(),
        }
    }

    /// Feeds `event` to the kernel and performs the resulting effects.
    pub fn dispatch(mut self, event: UiEvent) {
        let effects = self.ctx.write().dispatch(self.clock.now(), event);
        for effect in effects {
            match effect {
                Effect::ScrollTo(section) => self.scroll_to(section),
            }
        }
    }

    /// Remembers the element a section anchor resolves to.
    pub fn register_anchor(mut self, section: Section, element: Rc<MountedData>) {
        self.anchors.write().insert(section, element);
    }

    fn scroll_to(self, section: Section) {
        let Some(element) = self.anchors.peek().get(&section).cloned() else {
            warn!(section = section.anchor(), "Scroll target not mounted");
            return;
        };

        spawn(async move {
            if let Err(e) = element.scroll_to(ScrollBehavior::Smooth).await {
                warn!(section = section.anchor(), error = ?e, "Smooth scroll failed");
            }
        });
    }

    /// Fires due tasks; writes to the context only when something is due.
    fn tick(mut self) {
        let now = self.clock.now();
        let due = self.ctx.peek().next_deadline().is_some_and(|deadline| deadline <= now);
        if due {
            let fired = self.ctx.write().tick(now);
            debug!(fired, "Scheduled tasks fired");
        }
    }

    fn next_wait(self) -> Duration {
        let now = self.clock.now();
        self.ctx
            .peek()
            .next_deadline()
            .map_or(MAX_POLL, |deadline| deadline.saturating_sub(now).min(MAX_POLL))
    }
}

impl fmt::Debug for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Site").field("clock", &self.clock).finish_non_exhaustive()
    }
}

/// Runs the task loop for the lifetime of the calling component.
pub fn use_task_loop(site: Site) {
    use_future(move || async move {
        loop {
            tokio::time::sleep(site.next_wait()).await;
            site.tick();
        }
    });
}

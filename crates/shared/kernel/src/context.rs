//! # Site context
//!
//! Owns the state of every interactive component together with the shared [`Scheduler`].
//! Renderers feed it [`UiEvent`]s through [`SiteContext::dispatch`] and read component state
//! back through the getters; the only side effects left to the renderer are the returned
//! [`Effect`]s.
//!
//! Time always comes from the caller. Every entry point first fires the tasks that are due,
//! so an event observed at `now` sees the page exactly as it looks at `now`.

use crate::checklist::Checklist;
use crate::error::KernelError;
use crate::form::{ContactForm, SubmitOutcome};
use crate::navigation::{HeaderStyle, Navigation};
use crate::notification::{Notice, NotificationCenter};
use crate::reveal::{RevealKey, RevealTracker};
use crate::ripple::{Click, RippleHost, Ripples};
use crate::scheduler::{Due, Scheduler};
use crate::shop::{self, CartButton, CartFeedback, Locator, OfferCountdown, ProductModal};
use crate::task::Task;
use aqua_domain::catalog::{Section, SOCIAL_LINKS};
use aqua_domain::config::SiteConfig;
use aqua_domain::constants::ABOUT_MESSAGE;
use aqua_domain::features::FeatureSet;
use aqua_domain::form::FieldId;
use aqua_domain::notification::NotificationId;
use std::time::Duration;
use tracing::{debug, warn};

/// Everything the page can report.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    HamburgerClicked,
    NavLinkClicked(Section),
    /// A click that hit neither the hamburger nor the menu.
    OutsideClicked,
    Resized { width: f64 },
    Scrolled { offset: f64 },
    ElementVisible { key: RevealKey, ratio: f64 },
    CtaClicked,
    AboutClicked,
    SocialClicked(usize),
    ProductClicked(usize),
    ModalClosed,
    ModalFindNearYou,
    Ripple { host: RippleHost, click: Click },
    SchoolAddToCart(usize),
    RegionalOrder(usize),
    OfferClicked(usize),
    FeatureToggled { feature: FeatureSet, checked: bool },
    CheckAll,
    UncheckAll,
    Verify,
    LocationInput(String),
    LocationSearch,
    FieldInput { field: FieldId, value: String },
    FieldBlur(FieldId),
    FormSubmitted,
    NotificationDismissed(NotificationId),
}

/// Side effects the renderer performs on behalf of the context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Smooth-scroll the page to a section.
    ScrollTo(Section),
}

#[derive(Debug)]
pub struct SiteContext {
    config: SiteConfig,
    now: Duration,
    scheduler: Scheduler<Task>,
    notifications: NotificationCenter,
    navigation: Navigation,
    header: HeaderStyle,
    reveal: RevealTracker,
    ripples: Ripples,
    checklist: Checklist,
    cart: CartFeedback,
    modal: ProductModal,
    countdown: OfferCountdown,
    locator: Locator,
    form: ContactForm,
}

impl SiteContext {
    /// Builds the page state at time zero.
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        let timing = &config.timing;
        let layout = &config.layout;

        let mut scheduler = Scheduler::new();
        scheduler.schedule(Duration::ZERO, timing.countdown_refresh(), Task::RefreshCountdown);

        Self {
            now: Duration::ZERO,
            notifications: NotificationCenter::new(timing.notification_ttl()),
            navigation: Navigation::new(layout.mobile_breakpoint),
            header: HeaderStyle::default(),
            reveal: RevealTracker::default(),
            ripples: Ripples::default(),
            checklist: Checklist::default(),
            cart: CartFeedback::default(),
            modal: ProductModal::default(),
            countdown: OfferCountdown::new(Duration::ZERO, timing.offer_window()),
            locator: Locator::default(),
            form: ContactForm::default(),
            scheduler,
            config,
        }
    }

    /// Latest time observed.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    /// Fires every task due at `now`, in deadline order. Returns how many fired.
    pub fn tick(&mut self, now: Duration) -> usize {
        self.now = self.now.max(now);

        let mut fired = 0;
        while let Some(due) = self.scheduler.pop_due(self.now) {
            self.run(due);
            fired += 1;
        }
        fired
    }

    /// Applies `event` at `now`. Invalid events are logged and dropped.
    pub fn dispatch(&mut self, now: Duration, event: UiEvent) -> Vec<Effect> {
        self.try_dispatch(now, event).unwrap_or_else(|e| {
            warn!(error = %e, "Event ignored");
            Vec::new()
        })
    }

    /// Same as [`Self::dispatch`] but reports invalid events.
    ///
    /// # Errors
    /// [`KernelError::UnknownItem`] when the event names a catalog entry that does not exist.
    pub fn try_dispatch(&mut self, now: Duration, event: UiEvent) -> Result<Vec<Effect>, KernelError> {
        self.tick(now);
        let now = self.now;
        let timing = &self.config.timing;
        let mut effects = Vec::new();

        match event {
            UiEvent::HamburgerClicked => self.navigation.toggle(),
            UiEvent::NavLinkClicked(section) => {
                effects.push(Effect::ScrollTo(self.navigation.follow(section)));
            },
            UiEvent::OutsideClicked => {
                self.navigation.close();
            },
            UiEvent::Resized { width } => {
                self.navigation.resized(width);
            },
            UiEvent::Scrolled { offset } => {
                self.header =
                    HeaderStyle::from_scroll(offset, self.config.layout.header_scroll_threshold);
            },
            UiEvent::ElementVisible { key, ratio } => {
                if self.reveal.observe(key, ratio) {
                    debug!(?key, "Element revealed");
                }
            },
            UiEvent::CtaClicked => effects.push(Effect::ScrollTo(Section::Products)),
            UiEvent::AboutClicked => self.notify(now, Notice::info(ABOUT_MESSAGE)),
            UiEvent::SocialClicked(index) => {
                let (platform, _) = SOCIAL_LINKS
                    .get(index)
                    .ok_or(KernelError::UnknownItem { kind: "social link", index, context: None })?;
                self.notify(now, Notice::info(format!("Opening {platform}...")));
            },
            UiEvent::ProductClicked(index) => {
                let product = self.modal.open(index)?;
                debug!(product = product.name, "Product details opened");
            },
            UiEvent::ModalClosed => self.modal.close(),
            UiEvent::ModalFindNearYou => effects.push(Effect::ScrollTo(self.modal.find_near_you())),
            UiEvent::Ripple { host, click } => {
                self.ripples.spawn(&mut self.scheduler, now, timing.ripple(), host, click);
            },
            UiEvent::SchoolAddToCart(index) => self.add_to_cart(now, CartButton::School(index))?,
            UiEvent::RegionalOrder(index) => {
                if !self.cart.view(CartButton::Regional(index)).disabled {
                    self.add_to_cart(now, CartButton::Regional(index))?;
                }
            },
            UiEvent::OfferClicked(index) => {
                if shop::offer(index)?.limited_time && self.countdown.is_expired() {
                    warn!(index, "Expired offer clicked");
                } else {
                    self.add_to_cart(now, CartButton::Offer(index))?;
                }
            },
            UiEvent::FeatureToggled { feature, checked } => self.checklist.toggle(feature, checked),
            UiEvent::CheckAll => {
                let notice = self.checklist.check_all();
                self.notify(now, notice);
            },
            UiEvent::UncheckAll => {
                let notice = self.checklist.uncheck_all();
                self.notify(now, notice);
            },
            UiEvent::Verify => {
                self.checklist.verify(&mut self.scheduler, now, timing.verify_delay());
            },
            UiEvent::LocationInput(value) => self.locator.input(value),
            UiEvent::LocationSearch => {
                if let Some(notice) =
                    self.locator.search(&mut self.scheduler, now, timing.locator_delay())
                {
                    self.notify(now, notice);
                }
            },
            UiEvent::FieldInput { field, value } => self.form.input(field, value),
            UiEvent::FieldBlur(field) => {
                self.form.blur(field);
            },
            UiEvent::FormSubmitted => {
                match self.form.submit(&mut self.scheduler, now, timing.submit_delay()) {
                    SubmitOutcome::Rejected(notice) => self.notify(now, notice),
                    SubmitOutcome::Started | SubmitOutcome::Busy => {},
                }
            },
            UiEvent::NotificationDismissed(id) => {
                self.notifications.dismiss(&mut self.scheduler, id);
            },
        }

        Ok(effects)
    }

    fn add_to_cart(&mut self, now: Duration, button: CartButton) -> Result<(), KernelError> {
        let feedback = self.config.timing.cart_feedback();
        let notice = self.cart.add_to_cart(&mut self.scheduler, now, feedback, button)?;
        self.notify(now, notice);
        Ok(())
    }

    fn notify(&mut self, at: Duration, notice: Notice) {
        self.notifications.push(&mut self.scheduler, at, notice);
    }

    /// Runs one task; follow-ups are scheduled from its deadline, not from the observing tick.
    fn run(&mut self, due: Due<Task>) {
        let at = due.deadline;
        let timing = &self.config.timing;

        match due.task {
            Task::ExpireNotification(id) => {
                self.notifications.expire(id);
            },
            Task::CompleteSubmission => {
                if let Some(notice) = self.form.complete(&mut self.scheduler, at, timing.form_reset())
                {
                    self.notify(at, notice);
                }
            },
            Task::ResetForm => self.form.reset(),
            Task::RemoveRipple(id) => self.ripples.remove(id),
            Task::FinishVerification => {
                if let Some(notice) = self.checklist.finish_verification() {
                    self.notify(at, notice);
                }
            },
            Task::RestoreCartButton(button) => self.cart.restore(button),
            Task::FinishLocatorSearch => {
                if let Some(notice) = self.locator.finish() {
                    self.notify(at, notice);
                }
            },
            Task::RefreshCountdown => {
                if self.countdown.refresh(at) {
                    self.scheduler.schedule(at, timing.countdown_refresh(), Task::RefreshCountdown);
                } else {
                    debug!("Limited-time offers expired");
                }
            },
        }
    }

    #[must_use]
    pub const fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub const fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    #[must_use]
    pub const fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    #[must_use]
    pub const fn header(&self) -> HeaderStyle {
        self.header
    }

    #[must_use]
    pub const fn reveal(&self) -> &RevealTracker {
        &self.reveal
    }

    #[must_use]
    pub const fn ripples(&self) -> &Ripples {
        &self.ripples
    }

    #[must_use]
    pub const fn checklist(&self) -> &Checklist {
        &self.checklist
    }

    #[must_use]
    pub const fn cart(&self) -> &CartFeedback {
        &self.cart
    }

    #[must_use]
    pub const fn modal(&self) -> &ProductModal {
        &self.modal
    }

    #[must_use]
    pub const fn countdown(&self) -> &OfferCountdown {
        &self.countdown
    }

    #[must_use]
    pub const fn locator(&self) -> &Locator {
        &self.locator
    }

    #[must_use]
    pub const fn form(&self) -> &ContactForm {
        &self.form
    }
}

impl Default for SiteContext {
    fn default() -> Self {
        Self::new(SiteConfig::default())
    }
}

//! # Shop interactions
//!
//! Cart buttons with temporary "added" feedback, the product modal, limited-time offer
//! countdowns and the simulated store locator. Nothing here talks to a backend.

use crate::error::KernelError;
use crate::notification::Notice;
use crate::scheduler::{Scheduler, TimerHandle};
use crate::task::Task;
use aqua_domain::catalog::{
    Offer, OfferAction, Product, RegionalBottle, SchoolBottle, Section, OFFERS, PRODUCTS,
    REGIONAL_BOTTLES, SCHOOL_BOTTLES,
};
use aqua_domain::constants::{
    ADDED_LABEL, EXPIRED_BADGE, LOCATION_REQUIRED, REGIONAL_ORDER_LABEL, SCHOOL_ADDED_LABEL,
    SCHOOL_CART_LABEL, SEARCHING_LABEL, SEARCH_LABEL, STORES_FOUND,
};
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

const IDLE_BACKGROUND: &str = "linear-gradient(45deg, #00cec9, #55a3ff)";

fn lookup<T: Copy>(items: &[T], kind: &'static str, index: usize) -> Result<T, KernelError> {
    items.get(index).copied().ok_or(KernelError::UnknownItem { kind, index, context: None })
}

/// Catalog lookups by card index.
///
/// # Errors
/// [`KernelError::UnknownItem`] when the index is outside the catalog.
pub fn school_bottle(index: usize) -> Result<SchoolBottle, KernelError> {
    lookup(&SCHOOL_BOTTLES, "school bottle", index)
}

/// # Errors
/// See [`school_bottle`].
pub fn regional_bottle(index: usize) -> Result<RegionalBottle, KernelError> {
    lookup(&REGIONAL_BOTTLES, "regional bottle", index)
}

/// # Errors
/// See [`school_bottle`].
pub fn offer(index: usize) -> Result<Offer, KernelError> {
    lookup(&OFFERS, "offer", index)
}

/// # Errors
/// See [`school_bottle`].
pub fn product(index: usize) -> Result<Product, KernelError> {
    lookup(&PRODUCTS, "product", index)
}

/// A button that briefly shows "added" after a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CartButton {
    School(usize),
    Regional(usize),
    Offer(usize),
}

impl CartButton {
    /// Success notice for adding the item behind this button.
    ///
    /// # Errors
    /// [`KernelError::UnknownItem`] when the index is outside the catalog.
    pub fn notice(self) -> Result<Notice, KernelError> {
        let message = match self {
            Self::School(i) => {
                let bottle = school_bottle(i)?;
                format!(
                    "🎒 {} added to cart! Student price: {}",
                    bottle.name, bottle.discounted_price
                )
            },
            Self::Regional(i) => {
                let bottle = regional_bottle(i)?;
                format!("✅ {} added to cart for {}!", bottle.name, bottle.price)
            },
            Self::Offer(i) => {
                let offer = offer(i)?;
                match offer.action {
                    OfferAction::ShopNow => format!(
                        "🛒 {} Family Pack added to cart! Limited time offer applied.",
                        offer.discount
                    ),
                    OfferAction::GetCode => format!(
                        "🎉 New customer discount code: NEW15 applied! {} off your first order!",
                        offer.discount
                    ),
                    OfferAction::ViewFlavors => {
                        "🍓 Buy 2 Get 1 Free offer activated! Choose your favorite flavors.".to_owned()
                    },
                    OfferAction::Subscribe => format!(
                        "📦 Monthly subscription activated! {} off every delivery!",
                        offer.discount
                    ),
                }
            },
        };
        Ok(Notice::success(message))
    }

    fn idle_label(self) -> &'static str {
        match self {
            Self::School(_) => SCHOOL_CART_LABEL,
            Self::Regional(_) => REGIONAL_ORDER_LABEL,
            Self::Offer(i) => match OFFERS.get(i) {
                Some(offer) => offer.action.label(),
                None => "",
            },
        }
    }

    const fn added_label(self) -> &'static str {
        match self {
            Self::School(_) => SCHOOL_ADDED_LABEL,
            Self::Regional(_) | Self::Offer(_) => ADDED_LABEL,
        }
    }

    const fn added_background(self) -> &'static str {
        match self {
            Self::School(_) => "linear-gradient(45deg, #00b894, #00a085)",
            Self::Regional(_) => "linear-gradient(45deg, #00b894, #00cec9)",
            Self::Offer(_) => "#27ae60",
        }
    }
}

/// Rendered state of a [`CartButton`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartButtonView {
    pub label: &'static str,
    pub background: Option<&'static str>,
    pub disabled: bool,
}

/// Buttons currently showing "added", each with its restore timer.
#[derive(Debug, Default)]
pub struct CartFeedback {
    added: HashMap<CartButton, TimerHandle>,
}

impl CartFeedback {
    /// Marks `button` as added for `feedback`. A repeated click restarts the timer.
    ///
    /// # Errors
    /// [`KernelError::UnknownItem`] when the button refers to no catalog entry.
    pub fn add_to_cart(
        &mut self,
        scheduler: &mut Scheduler<Task>,
        now: Duration,
        feedback: Duration,
        button: CartButton,
    ) -> Result<Notice, KernelError> {
        let notice = button.notice()?;

        if let Some(previous) = self.added.remove(&button) {
            scheduler.cancel(previous);
        }
        let handle = scheduler.schedule(now, feedback, Task::RestoreCartButton(button));
        self.added.insert(button, handle);

        debug!(?button, "Added to cart");
        Ok(notice)
    }

    /// Timer callback.
    pub fn restore(&mut self, button: CartButton) {
        self.added.remove(&button);
    }

    #[must_use]
    pub fn is_added(&self, button: CartButton) -> bool {
        self.added.contains_key(&button)
    }

    #[must_use]
    pub fn view(&self, button: CartButton) -> CartButtonView {
        let added = self.is_added(button);
        let idle_background = match button {
            CartButton::Offer(_) => None,
            CartButton::School(_) | CartButton::Regional(_) => Some(IDLE_BACKGROUND),
        };

        CartButtonView {
            label: if added { button.added_label() } else { button.idle_label() },
            background: if added { Some(button.added_background()) } else { idle_background },
            disabled: added && matches!(button, CartButton::Regional(_)),
        }
    }
}

/// Product details overlay.
#[derive(Debug, Default)]
pub struct ProductModal {
    open: Option<usize>,
}

impl ProductModal {
    /// # Errors
    /// [`KernelError::UnknownItem`] for an index outside the catalog.
    pub fn open(&mut self, index: usize) -> Result<Product, KernelError> {
        let product = product(index)?;
        self.open = Some(index);
        Ok(product)
    }

    pub const fn close(&mut self) {
        self.open = None;
    }

    /// Closes the modal; the caller scrolls to the returned section.
    pub const fn find_near_you(&mut self) -> Section {
        self.close();
        Section::Locator
    }

    #[must_use]
    pub fn current(&self) -> Option<Product> {
        self.open.and_then(|i| PRODUCTS.get(i).copied())
    }
}

/// Countdown shown on limited-time offers; refreshed on a fixed interval.
#[derive(Debug)]
pub struct OfferCountdown {
    ends_at: Duration,
    refreshed_at: Duration,
}

impl OfferCountdown {
    #[must_use]
    pub const fn new(start: Duration, window: Duration) -> Self {
        Self { ends_at: start.saturating_add(window), refreshed_at: start }
    }

    /// Records a refresh and returns `true` while another refresh is worth scheduling.
    pub fn refresh(&mut self, now: Duration) -> bool {
        self.refreshed_at = now;
        !self.is_expired()
    }

    #[must_use]
    pub const fn remaining(&self) -> Duration {
        self.ends_at.saturating_sub(self.refreshed_at)
    }

    /// Less than a minute left counts as expired.
    #[must_use]
    pub const fn is_expired(&self) -> bool {
        self.remaining().as_secs() < 60
    }

    #[must_use]
    pub fn badge(&self) -> String {
        if self.is_expired() {
            return EXPIRED_BADGE.to_owned();
        }
        let secs = self.remaining().as_secs();
        format!("Ends in {}h {}m", secs / 3600, secs % 3600 / 60)
    }

    #[must_use]
    pub const fn badge_background(&self) -> &'static str {
        if self.is_expired() { "#95a5a6" } else { "#e74c3c" }
    }

    /// Inline style of a limited-time card.
    #[must_use]
    pub const fn card_style(&self) -> &'static str {
        if self.is_expired() { "opacity: 0.6; pointer-events: none;" } else { "" }
    }
}

/// Simulated store search.
#[derive(Debug, Default)]
pub struct Locator {
    query: String,
    searching: Option<String>,
}

impl Locator {
    pub fn input(&mut self, value: impl Into<String>) {
        self.query = value.into();
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Starts a search for the trimmed query.
    ///
    /// Returns the error notice for an empty query; `None` when the search started or one is
    /// already running.
    pub fn search(
        &mut self,
        scheduler: &mut Scheduler<Task>,
        now: Duration,
        delay: Duration,
    ) -> Option<Notice> {
        if self.searching.is_some() {
            return None;
        }

        let location = self.query.trim();
        if location.is_empty() {
            return Some(Notice::error(LOCATION_REQUIRED));
        }

        debug!(location, "Store search started");
        self.searching = Some(location.to_owned());
        scheduler.schedule(now, delay, Task::FinishLocatorSearch);
        None
    }

    /// Timer callback. Clears the input.
    pub fn finish(&mut self) -> Option<Notice> {
        let location = self.searching.take()?;
        self.query.clear();
        Some(Notice::success(format!(
            "Found {STORES_FOUND} stores near \"{location}\". Check your local retailers!"
        )))
    }

    #[must_use]
    pub const fn is_searching(&self) -> bool {
        self.searching.is_some()
    }

    #[must_use]
    pub const fn button_label(&self) -> &'static str {
        if self.is_searching() { SEARCHING_LABEL } else { SEARCH_LABEL }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aqua_domain::notification::Severity;

    const fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn school_cart_feedback() {
        let mut scheduler = Scheduler::new();
        let mut cart = CartFeedback::default();
        let button = CartButton::School(0);

        let notice = cart.add_to_cart(&mut scheduler, ms(0), ms(2000), button).expect("known");
        assert_eq!(notice.severity, Severity::Success);
        assert_eq!(notice.message, "🎒 Mini Sipper 350ml added to cart! Student price: Rs 108");
        assert_eq!(cart.view(button).label, SCHOOL_ADDED_LABEL);
        assert!(!cart.view(button).disabled);

        cart.restore(button);
        assert_eq!(cart.view(button).label, SCHOOL_CART_LABEL);
    }

    #[test]
    fn repeated_clicks_restart_the_timer() {
        let mut scheduler = Scheduler::new();
        let mut cart = CartFeedback::default();
        let button = CartButton::Regional(1);

        cart.add_to_cart(&mut scheduler, ms(0), ms(2000), button).expect("known");
        cart.add_to_cart(&mut scheduler, ms(1500), ms(2000), button).expect("known");

        assert_eq!(scheduler.len(), 1);
        assert_eq!(scheduler.next_deadline(), Some(ms(3500)));
        assert!(cart.view(button).disabled);
    }

    #[test]
    fn unknown_item_is_an_error() {
        let mut scheduler = Scheduler::new();
        let mut cart = CartFeedback::default();
        let err = cart
            .add_to_cart(&mut scheduler, ms(0), ms(2000), CartButton::School(99))
            .expect_err("no such bottle");
        assert!(matches!(err, KernelError::UnknownItem { index: 99, .. }));
        assert!(scheduler.is_empty());
    }

    #[test]
    fn offer_restores_its_own_label() {
        let mut scheduler = Scheduler::new();
        let mut cart = CartFeedback::default();
        let button = CartButton::Offer(3);

        let notice = cart.add_to_cart(&mut scheduler, ms(0), ms(2000), button).expect("known");
        assert_eq!(notice.message, "📦 Monthly subscription activated! 20% off every delivery!");
        assert_eq!(cart.view(button).label, ADDED_LABEL);
        cart.restore(button);
        assert_eq!(cart.view(button).label, "Subscribe");
        assert_eq!(cart.view(button).background, None);
    }

    #[test]
    fn countdown_badge() {
        let mut countdown = OfferCountdown::new(Duration::ZERO, Duration::from_secs(7200));
        assert_eq!(countdown.badge(), "Ends in 2h 0m");

        assert!(countdown.refresh(Duration::from_secs(60)));
        assert_eq!(countdown.badge(), "Ends in 1h 59m");

        assert!(!countdown.refresh(Duration::from_secs(7200)));
        assert_eq!(countdown.badge(), EXPIRED_BADGE);
        assert_eq!(countdown.card_style(), "opacity: 0.6; pointer-events: none;");
    }

    #[test]
    fn modal_find_near_you_scrolls_to_locator() {
        let mut modal = ProductModal::default();
        assert_eq!(modal.open(1).expect("known").name, "Alkaline Water");
        assert!(modal.current().is_some());
        assert_eq!(modal.find_near_you(), Section::Locator);
        assert!(modal.current().is_none());
        assert!(modal.open(7).is_err());
    }

    #[test]
    fn locator_search() {
        let mut scheduler = Scheduler::new();
        let mut locator = Locator::default();

        locator.input("   ");
        let notice = locator.search(&mut scheduler, ms(0), ms(1500)).expect("empty query");
        assert_eq!(notice, Notice::error(LOCATION_REQUIRED));
        assert!(scheduler.is_empty());

        locator.input(" Lahore ");
        assert!(locator.search(&mut scheduler, ms(0), ms(1500)).is_none());
        assert_eq!(locator.button_label(), SEARCHING_LABEL);

        let notice = locator.finish().expect("search pending");
        assert_eq!(
            notice.message,
            "Found 5 stores near \"Lahore\". Check your local retailers!"
        );
        assert_eq!(locator.query(), "");
        assert_eq!(locator.button_label(), SEARCH_LABEL);
    }
}

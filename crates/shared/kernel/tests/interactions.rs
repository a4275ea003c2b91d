use aqua_kernel::context::{Effect, SiteContext, UiEvent};
use aqua_kernel::domain::catalog::Section;
use aqua_kernel::domain::constants::{ABOUT_MESSAGE, ADDED_LABEL, EXPIRED_BADGE, REGIONAL_ORDER_LABEL};
use aqua_kernel::domain::features::FeatureSet;
use aqua_kernel::domain::notification::Severity;
use aqua_kernel::navigation::HeaderStyle;
use aqua_kernel::reveal::{RevealGroup, RevealKey};
use aqua_kernel::ripple::{Click, RippleHost};
use aqua_kernel::shop::CartButton;
use std::time::Duration;

const fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn last_message(site: &SiteContext) -> String {
    site.notifications().iter().last().map(|n| n.message.clone()).unwrap_or_default()
}

#[test]
fn navigation_menu_and_header() {
    let mut site = SiteContext::default();

    site.dispatch(ms(0), UiEvent::HamburgerClicked);
    assert!(site.navigation().is_open());
    assert_eq!(site.navigation().body_overflow(), "hidden");

    let effects = site.dispatch(ms(10), UiEvent::NavLinkClicked(Section::About));
    assert_eq!(effects, [Effect::ScrollTo(Section::About)]);
    assert!(!site.navigation().is_open());

    site.dispatch(ms(20), UiEvent::HamburgerClicked);
    site.dispatch(ms(30), UiEvent::OutsideClicked);
    assert!(!site.navigation().is_open());

    site.dispatch(ms(40), UiEvent::HamburgerClicked);
    site.dispatch(ms(50), UiEvent::Resized { width: 1200.0 });
    assert!(!site.navigation().is_open());

    site.dispatch(ms(60), UiEvent::Scrolled { offset: 250.0 });
    assert_eq!(site.header(), HeaderStyle::Solid);
    site.dispatch(ms(70), UiEvent::Scrolled { offset: 0.0 });
    assert_eq!(site.header(), HeaderStyle::Translucent);

    assert_eq!(site.dispatch(ms(80), UiEvent::CtaClicked), [Effect::ScrollTo(Section::Products)]);
}

#[test]
fn page_buttons_close_an_open_menu() {
    let mut site = SiteContext::default();
    let host = RippleHost::School(0);

    // A button click bubbles up to the page, so its own event lands before the outside click.
    site.dispatch(ms(0), UiEvent::HamburgerClicked);
    site.dispatch(ms(10), UiEvent::Ripple { host, click: Click::default() });
    site.dispatch(ms(10), UiEvent::SchoolAddToCart(0));
    site.dispatch(ms(10), UiEvent::OutsideClicked);
    assert!(!site.navigation().is_open());
    assert_eq!(site.ripples().for_host(host).count(), 1);
    assert!(site.cart().is_added(CartButton::School(0)));

    site.dispatch(ms(15), UiEvent::HamburgerClicked);
    site.dispatch(ms(15), UiEvent::OfferClicked(1));
    site.dispatch(ms(15), UiEvent::OutsideClicked);
    assert!(!site.navigation().is_open());
    assert!(last_message(&site).contains("NEW15"));

    site.dispatch(ms(20), UiEvent::HamburgerClicked);
    let effects = site.dispatch(ms(30), UiEvent::CtaClicked);
    site.dispatch(ms(30), UiEvent::OutsideClicked);
    assert_eq!(effects, [Effect::ScrollTo(Section::Products)]);
    assert!(!site.navigation().is_open());

    site.dispatch(ms(40), UiEvent::HamburgerClicked);
    site.dispatch(ms(50), UiEvent::AboutClicked);
    site.dispatch(ms(50), UiEvent::OutsideClicked);
    assert!(!site.navigation().is_open());
    assert_eq!(last_message(&site), ABOUT_MESSAGE);
}

#[test]
fn reveal_through_context() {
    let mut site = SiteContext::default();
    let key = RevealKey::new(RevealGroup::Benefit, 3);

    site.dispatch(ms(0), UiEvent::ElementVisible { key, ratio: 0.0 });
    assert!(!site.reveal().is_revealed(key));
    site.dispatch(ms(0), UiEvent::ElementVisible { key, ratio: 0.2 });
    assert!(site.reveal().is_revealed(key));
    site.dispatch(ms(0), UiEvent::ElementVisible { key, ratio: 0.0 });
    assert!(site.reveal().is_revealed(key));
}

#[test]
fn single_sliver_entry_reveals_for_good() {
    let mut site = SiteContext::default();
    let key = RevealKey::new(RevealGroup::Section, 0);

    // The only entry reported while an element scrolls in slowly.
    site.dispatch(ms(0), UiEvent::ElementVisible { key, ratio: 0.04 });
    assert!(site.reveal().is_revealed(key));
    assert_eq!(site.reveal().class(key), "fade-in-up");
}

#[test]
fn closing_sections_reveal_independently() {
    let mut site = SiteContext::default();
    let locator = RevealKey::new(RevealGroup::Section, 11);
    let contact = RevealKey::new(RevealGroup::Section, 12);

    site.dispatch(ms(0), UiEvent::ElementVisible { key: locator, ratio: 0.3 });
    assert_eq!(site.reveal().class(locator), "fade-in-up");
    assert!(!site.reveal().is_revealed(contact));
    assert_eq!(site.reveal().class(contact), "");

    site.dispatch(ms(10), UiEvent::ElementVisible { key: contact, ratio: 0.1 });
    assert_eq!(site.reveal().class(contact), "fade-in-up");
}

#[test]
fn ripple_lives_for_six_hundred_ms() {
    let mut site = SiteContext::default();
    let host = RippleHost::Product(2);
    let click = Click { x: 20.0, y: 20.0, width: 120.0, height: 40.0 };

    site.dispatch(ms(100), UiEvent::Ripple { host, click });
    assert_eq!(site.ripples().for_host(host).count(), 1);

    site.tick(ms(699));
    assert_eq!(site.ripples().len(), 1);
    site.tick(ms(700));
    assert!(site.ripples().is_empty());
}

#[test]
fn regional_order_disables_the_button_for_two_seconds() {
    let mut site = SiteContext::default();
    let button = CartButton::Regional(0);

    site.dispatch(ms(0), UiEvent::RegionalOrder(0));
    assert_eq!(last_message(&site), "✅ Nestlé Pure Life 1.5L added to cart for Rs 90!");
    let view = site.cart().view(button);
    assert_eq!(view.label, ADDED_LABEL);
    assert!(view.disabled);

    // Clicks on a disabled button do nothing.
    site.dispatch(ms(500), UiEvent::RegionalOrder(0));
    assert_eq!(site.notifications().len(), 1);

    site.tick(ms(2000));
    assert_eq!(site.cart().view(button).label, REGIONAL_ORDER_LABEL);
    assert!(!site.cart().view(button).disabled);
}

#[test]
fn repeated_school_clicks_extend_the_feedback() {
    let mut site = SiteContext::default();
    let button = CartButton::School(2);

    site.dispatch(ms(0), UiEvent::SchoolAddToCart(2));
    site.dispatch(ms(1500), UiEvent::SchoolAddToCart(2));
    assert_eq!(site.notifications().len(), 2);

    site.tick(ms(2000));
    assert!(site.cart().is_added(button), "first timer was cancelled");
    site.tick(ms(3500));
    assert!(!site.cart().is_added(button));
}

#[test]
fn offers_until_the_window_closes() {
    let mut site = SiteContext::default();
    assert_eq!(site.countdown().badge(), "Ends in 2h 0m");

    site.dispatch(ms(0), UiEvent::OfferClicked(1));
    assert_eq!(
        last_message(&site),
        "🎉 New customer discount code: NEW15 applied! 15% off your first order!"
    );

    site.tick(Duration::from_secs(61));
    assert_eq!(site.countdown().badge(), "Ends in 1h 59m");

    site.tick(Duration::from_secs(7200));
    assert_eq!(site.countdown().badge(), EXPIRED_BADGE);

    let before = site.notifications().len();
    site.dispatch(Duration::from_secs(7201), UiEvent::OfferClicked(0));
    assert_eq!(site.notifications().len(), before, "expired limited-time offer ignored");

    site.dispatch(Duration::from_secs(7201), UiEvent::OfferClicked(2));
    assert_eq!(
        last_message(&site),
        "🍓 Buy 2 Get 1 Free offer activated! Choose your favorite flavors."
    );
}

#[test]
fn product_modal() {
    let mut site = SiteContext::default();
    site.dispatch(ms(0), UiEvent::ProductClicked(0));
    assert_eq!(site.modal().current().map(|p| p.name), Some("Pure Spring Water"));

    site.dispatch(ms(10), UiEvent::ModalClosed);
    assert!(site.modal().current().is_none());

    site.dispatch(ms(20), UiEvent::ProductClicked(2));
    let effects = site.dispatch(ms(30), UiEvent::ModalFindNearYou);
    assert_eq!(effects, [Effect::ScrollTo(Section::Locator)]);
    assert!(site.modal().current().is_none());
}

#[test]
fn checklist_verification() {
    let mut site = SiteContext::default();
    for (feature, _) in FeatureSet::LABELED.iter().take(6) {
        site.dispatch(ms(0), UiEvent::FeatureToggled { feature: *feature, checked: true });
    }
    assert_eq!(site.checklist().progress_text(), "6/8 features checked");

    site.dispatch(ms(100), UiEvent::Verify);
    assert!(site.checklist().is_verifying());
    site.dispatch(ms(200), UiEvent::UncheckAll);

    site.tick(ms(1600));
    assert!(!site.checklist().is_verifying());
    let verdict = site.checklist().verdict().expect("result panel shown");
    assert_eq!(verdict.title(), "Great Selection!");
    assert_eq!(verdict.message(), "You've selected 6 out of 8 features. You're getting excellent value!");

    let last = site.notifications().iter().last().expect("verdict notification");
    assert_eq!(last.message, "👍 Great! Most features selected!");
    assert_eq!(last.severity, Severity::Info);
}

#[test]
fn store_locator() {
    let mut site = SiteContext::default();
    site.dispatch(ms(0), UiEvent::LocationSearch);
    let error = site.notifications().iter().last().expect("error shown");
    assert_eq!(error.message, "Please enter a location.");
    assert_eq!(error.severity, Severity::Error);

    site.dispatch(ms(10), UiEvent::LocationInput("Karachi".to_owned()));
    site.dispatch(ms(20), UiEvent::LocationSearch);
    assert!(site.locator().is_searching());

    site.tick(ms(1520));
    assert_eq!(
        last_message(&site),
        "Found 5 stores near \"Karachi\". Check your local retailers!"
    );
    assert_eq!(site.locator().query(), "");
    assert!(!site.locator().is_searching());
}

use aqua_kernel::context::{SiteContext, UiEvent};
use aqua_kernel::domain::constants::ABOUT_MESSAGE;
use aqua_kernel::domain::notification::Severity;
use std::time::Duration;

const fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn notification_expires_at_exactly_five_seconds() {
    let mut site = SiteContext::default();
    site.dispatch(ms(0), UiEvent::AboutClicked);

    let shown = site.notifications().iter().next().expect("shown immediately");
    assert_eq!(shown.message, ABOUT_MESSAGE);
    assert_eq!(shown.severity, Severity::Info);
    assert_eq!(shown.class(), "notification notification-info");

    site.tick(ms(4999));
    assert_eq!(site.notifications().len(), 1);

    site.tick(ms(5000));
    assert!(site.notifications().is_empty());
}

#[test]
fn dismissed_notification_is_removed_immediately() {
    let mut site = SiteContext::default();
    site.dispatch(ms(0), UiEvent::AboutClicked);
    let id = site.notifications().iter().next().map(|n| n.id).expect("shown");

    site.dispatch(ms(1), UiEvent::NotificationDismissed(id));
    assert!(site.notifications().get(id).is_none());

    // A second dismissal of the same id is a no-op.
    site.dispatch(ms(2), UiEvent::NotificationDismissed(id));
    assert!(site.notifications().is_empty());
}

#[test]
fn notifications_stack_in_insertion_order() {
    let mut site = SiteContext::default();
    site.dispatch(ms(0), UiEvent::SocialClicked(0));
    site.dispatch(ms(1000), UiEvent::SocialClicked(1));
    site.dispatch(ms(1000), UiEvent::SocialClicked(1));

    let messages: Vec<_> = site.notifications().iter().map(|n| n.message.as_str()).collect();
    assert_eq!(messages, ["Opening Facebook...", "Opening Instagram...", "Opening Instagram..."]);

    site.tick(ms(5000));
    assert_eq!(site.notifications().len(), 2, "only the first one expired");
    site.tick(ms(6000));
    assert!(site.notifications().is_empty());
}

#[test]
fn unknown_social_link_is_reported() {
    let mut site = SiteContext::default();
    assert!(site.try_dispatch(ms(0), UiEvent::SocialClicked(42)).is_err());
    assert!(site.dispatch(ms(0), UiEvent::SocialClicked(42)).is_empty());
    assert!(site.notifications().is_empty());
}

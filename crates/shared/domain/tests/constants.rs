use aqua_domain::favicon::{FAVICON_SIZES, FAVICON_SOURCE};
use aqua_domain::form::FieldId;
use aqua_domain::images::{VARIANT_WIDTHS, variant_name};
use aqua_domain::notification::Severity;

#[test]
fn favicon_sizes_are_fixed() {
    let triples: Vec<_> = FAVICON_SIZES.iter().map(|s| (s.width, s.height, s.filename)).collect();
    assert_eq!(
        triples,
        vec![
            (32, 32, "favicon-32.png"),
            (64, 64, "favicon-64.png"),
            (180, 180, "apple-touch-icon-180.png"),
            (192, 192, "favicon-192.png"),
        ]
    );
    assert_eq!(FAVICON_SOURCE, "favicon.svg");
}

#[test]
fn field_messages_match_form_copy() {
    assert_eq!(FieldId::Name.error_message(), "Name must be at least 3 characters long");
    assert_eq!(FieldId::Email.error_message(), "Please enter a valid email address");
    assert_eq!(FieldId::Phone.error_message(), "Please enter a valid phone number");
    assert_eq!(FieldId::Subject.error_message(), "Please select a subject");
    assert_eq!(FieldId::Message.error_message(), "Message must be at least 10 characters long");
    assert_eq!(FieldId::Email.error_id(), "emailError");
}

#[test]
fn severity_classes() {
    assert_eq!(Severity::default(), Severity::Info);
    assert_eq!(Severity::Success.css_class(), "notification-success");
    assert_eq!(Severity::Error.to_string(), "error");
}

#[test]
fn image_variants_are_named_by_width() {
    assert_eq!(VARIANT_WIDTHS, [320, 640, 1024]);
    assert_eq!(variant_name("hero", 640), "hero-640.webp");
}

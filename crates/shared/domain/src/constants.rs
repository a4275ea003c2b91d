//! User-facing strings that several components share.

pub const FORM_INVALID: &str = "Please fix the errors in the form";
pub const FORM_SENT: &str = "Message sent successfully!";

pub const LOCATION_REQUIRED: &str = "Please enter a location.";
pub const ABOUT_MESSAGE: &str = "Learn more about our commitment to purity and sustainability!";

pub const ALL_FEATURES_CHECKED: &str = "✅ All features checked!";
pub const ALL_FEATURES_RESET: &str = "🔄 All features reset!";

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SUBMIT_LOADING_LABEL: &str = "Sending...";
pub const VERIFY_LABEL: &str = "Verify Selection";
pub const VERIFYING_LABEL: &str = "🔍 Verifying...";
pub const SEARCH_LABEL: &str = "Search";
pub const SEARCHING_LABEL: &str = "Searching...";

pub const SCHOOL_CART_LABEL: &str = "Add to Cart - 10% Off";
pub const SCHOOL_ADDED_LABEL: &str = "✓ Added to Cart!";
pub const REGIONAL_ORDER_LABEL: &str = "Order Now";
pub const ADDED_LABEL: &str = "✓ Added!";

pub const EXPIRED_BADGE: &str = "Expired";

/// Simulated store count reported by the locator.
pub const STORES_FOUND: u32 = 5;

//! Static page content the interactive components act on.

use serde::{Deserialize, Serialize};

/// Page sections reachable through anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Home,
    Products,
    Features,
    School,
    Regional,
    Offers,
    Locator,
    About,
    Contact,
}

impl Section {
    /// Sections listed in the navigation menu.
    pub const NAV: [Self; 7] = [
        Self::Home,
        Self::Products,
        Self::Features,
        Self::Offers,
        Self::Locator,
        Self::About,
        Self::Contact,
    ];

    /// Anchor id, without the leading `#`.
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Products => "products",
            Self::Features => "features",
            Self::School => "school",
            Self::Regional => "regional",
            Self::Offers => "offers",
            Self::Locator => "locator",
            Self::About => "about",
            Self::Contact => "contact",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Products => "Products",
            Self::Features => "Features",
            Self::School => "School Bottles",
            Self::Regional => "Local Favorites",
            Self::Offers => "Offers",
            Self::Locator => "Find Us",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub name: &'static str,
    pub tagline: &'static str,
}

/// Details listed in every product modal.
pub const PRODUCT_FEATURES: [&str; 4] = [
    "Premium filtration process",
    "Enhanced with essential minerals",
    "Eco-friendly packaging",
    "Available in multiple sizes",
];

pub const PRODUCTS: [Product; 3] = [
    Product { name: "Pure Spring Water", tagline: "Naturally sourced, gently filtered." },
    Product { name: "Alkaline Water", tagline: "pH 8.5+ for smooth hydration." },
    Product { name: "Sparkling Water", tagline: "Crisp bubbles, zero calories." },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchoolBottle {
    pub name: &'static str,
    pub regular_price: &'static str,
    pub discounted_price: &'static str,
}

pub const SCHOOL_BOTTLES: [SchoolBottle; 3] = [
    SchoolBottle { name: "Mini Sipper 350ml", regular_price: "Rs 120", discounted_price: "Rs 108" },
    SchoolBottle { name: "Lunchbox 500ml", regular_price: "Rs 150", discounted_price: "Rs 135" },
    SchoolBottle { name: "Sports Flask 750ml", regular_price: "Rs 220", discounted_price: "Rs 198" },
];

pub const SCHOOL_BENEFITS: [&str; 4] = [
    "10% student discount",
    "Leak-proof lids",
    "Name labels included",
    "Delivered to campus",
];

pub const ORDER_STEPS: [&str; 3] =
    ["Pick your bottles", "Share your school details", "Collect at school"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionalBottle {
    pub name: &'static str,
    pub price: &'static str,
    pub brand: &'static str,
}

pub const REGIONAL_BOTTLES: [RegionalBottle; 4] = [
    RegionalBottle { name: "Nestlé Pure Life 1.5L", price: "Rs 90", brand: "Nestlé" },
    RegionalBottle { name: "Aquafina 1.5L", price: "Rs 85", brand: "Aquafina" },
    RegionalBottle { name: "Dasani 1.5L", price: "Rs 80", brand: "Dasani" },
    RegionalBottle { name: "Murree Sparkletts 19L", price: "Rs 450", brand: "Sparkletts" },
];

pub const DELIVERY_CITIES: [&str; 6] =
    ["Karachi", "Lahore", "Islamabad", "Rawalpindi", "Faisalabad", "Peshawar"];

/// What an offer button does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OfferAction {
    ShopNow,
    GetCode,
    ViewFlavors,
    Subscribe,
}

impl OfferAction {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ShopNow => "Shop Now",
            Self::GetCode => "Get Code",
            Self::ViewFlavors => "View Flavors",
            Self::Subscribe => "Subscribe",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offer {
    pub title: &'static str,
    pub discount: &'static str,
    pub action: OfferAction,
    /// Shows a countdown badge while the offer window is open.
    pub limited_time: bool,
}

pub const OFFERS: [Offer; 4] = [
    Offer { title: "Family Pack", discount: "25%", action: OfferAction::ShopNow, limited_time: true },
    Offer { title: "New Customer", discount: "15%", action: OfferAction::GetCode, limited_time: false },
    Offer {
        title: "Flavored Water",
        discount: "Buy 2 Get 1",
        action: OfferAction::ViewFlavors,
        limited_time: false,
    },
    Offer {
        title: "Monthly Delivery",
        discount: "20%",
        action: OfferAction::Subscribe,
        limited_time: true,
    },
];

/// Social links: (platform title, url).
pub const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("Facebook", "https://facebook.com"),
    ("Instagram", "https://instagram.com"),
    ("Twitter", "https://twitter.com"),
    ("WhatsApp", "https://wa.me"),
];

pub const CONTACT_INFO: [(&str, &str); 3] = [
    ("Visit Us", "Plot 12, Industrial Area, Lahore"),
    ("Call Us", "+92 300 1234567"),
    ("Email Us", "hello@aquapure.pk"),
];

use super::{Reveal, RippleButton, anchor};
use crate::driver::Site;
use aqua_domain::catalog::{PRODUCT_FEATURES, PRODUCTS, Section};
use aqua_kernel::context::UiEvent;
use aqua_kernel::reveal::{RevealGroup, RevealKey};
use aqua_kernel::ripple::RippleHost;
use dioxus::prelude::*;

/// First class-animated reveal slot of this section.
const REVEAL_BASE: usize = 0;

#[component]
pub fn Products() -> Element {
    let site = use_context::<Site>();

    rsx! {
        section { id: "products", class: "products", onmounted: anchor(site, Section::Products),
            div { class: "container",
                h2 { class: "section-title", "Our Products" }
                div { class: "products-grid",
                    for (i, product) in PRODUCTS.iter().enumerate() {
                        Reveal {
                            key: "{product.name}",
                            slot: RevealKey::new(RevealGroup::Section, REVEAL_BASE + i),
                            class: "product-card",
                            div { class: "product-icon", "💧" }
                            h3 { "{product.name}" }
                            p { "{product.tagline}" }
                            RippleButton {
                                host: RippleHost::Product(i),
                                class: "btn-product",
                                label: "Learn More",
                                onpress: move |()| site.dispatch(UiEvent::ProductClicked(i)),
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Details overlay opened from a product card.
#[component]
pub fn ProductModal() -> Element {
    let site = use_context::<Site>();
    // Set by clicks on the dialog so the backdrop, which sees them bubble up, stays open.
    let mut inside = use_signal(|| false);
    let Some(product) = site.ctx.read().modal().current() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "product-modal",
            onclick: move |_| {
                if inside.replace(false) {
                    return;
                }
                site.dispatch(UiEvent::ModalClosed);
            },
            div {
                class: "modal-content",
                onclick: move |_| inside.set(true),
                span {
                    class: "close-modal",
                    onclick: move |_| site.dispatch(UiEvent::ModalClosed),
                    "×"
                }
                h3 { "{product.name}" }
                p {
                    "Experience the pure, refreshing taste of our {product.name}. Perfectly filtered and enhanced with essential minerals for optimal hydration."
                }
                div { class: "product-details",
                    h4 { "Features:" }
                    ul {
                        for feature in PRODUCT_FEATURES {
                            li { "{feature}" }
                        }
                    }
                }
                button {
                    class: "modal-cta",
                    onclick: move |_| site.dispatch(UiEvent::ModalFindNearYou),
                    "Find Near You"
                }
            }
        }
    }
}

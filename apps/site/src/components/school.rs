use super::{Reveal, RippleButton, anchor};
use crate::driver::Site;
use aqua_domain::catalog::{ORDER_STEPS, SCHOOL_BENEFITS, SCHOOL_BOTTLES, Section};
use aqua_kernel::context::UiEvent;
use aqua_kernel::reveal::{RevealGroup, RevealKey};
use aqua_kernel::ripple::RippleHost;
use aqua_kernel::shop::CartButton;
use dioxus::prelude::*;

#[component]
pub fn SchoolBottles() -> Element {
    let site = use_context::<Site>();
    let ctx = site.ctx.read();

    rsx! {
        section { id: "school", class: "school-bottles", onmounted: anchor(site, Section::School),
            div { class: "container",
                h2 { class: "section-title", "School Bottles" }
                p { class: "section-subtitle", "Student prices with 10% off every bottle." }
                div { class: "school-grid",
                    for (i, bottle) in SCHOOL_BOTTLES.iter().enumerate() {
                        Reveal {
                            key: "{bottle.name}",
                            slot: RevealKey::new(RevealGroup::SchoolCard, i),
                            class: "school-card",
                            h3 { "{bottle.name}" }
                            div { class: "price",
                                span { class: "regular-price", "{bottle.regular_price}" }
                                span { class: "discounted-price", "{bottle.discounted_price}" }
                            }
                            {
                                let view = ctx.cart().view(CartButton::School(i));
                                let background = view.background.unwrap_or_default();
                                rsx! {
                                    RippleButton {
                                        host: RippleHost::School(i),
                                        class: "add-to-cart-btn",
                                        label: "{view.label}",
                                        background: "{background}",
                                        disabled: view.disabled,
                                        onpress: move |()| site.dispatch(UiEvent::SchoolAddToCart(i)),
                                    }
                                }
                            }
                        }
                    }
                }
                div { class: "school-benefits",
                    for (i, benefit) in SCHOOL_BENEFITS.iter().enumerate() {
                        Reveal {
                            key: "{benefit}",
                            slot: RevealKey::new(RevealGroup::Benefit, i),
                            class: "benefit-item",
                            "✓ {benefit}"
                        }
                    }
                }
                div { class: "order-steps",
                    for (i, step) in ORDER_STEPS.iter().enumerate() {
                        Reveal {
                            key: "{step}",
                            slot: RevealKey::new(RevealGroup::OrderStep, i),
                            class: "order-step",
                            span { class: "step-number", "{i + 1}" }
                            p { "{step}" }
                        }
                    }
                }
            }
        }
    }
}

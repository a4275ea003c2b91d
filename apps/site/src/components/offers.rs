use super::{Reveal, anchor};
use crate::driver::Site;
use aqua_domain::catalog::{OFFERS, Section};
use aqua_kernel::context::UiEvent;
use aqua_kernel::reveal::{RevealGroup, RevealKey};
use aqua_kernel::shop::CartButton;
use dioxus::prelude::*;

const REVEAL_BASE: usize = 4;

#[component]
pub fn Offers() -> Element {
    let site = use_context::<Site>();
    let ctx = site.ctx.read();
    let countdown = ctx.countdown();
    let badge = countdown.badge();

    rsx! {
        section { id: "offers", class: "offers", onmounted: anchor(site, Section::Offers),
            div { class: "container",
                h2 { class: "section-title", "Special Offers" }
                div { class: "offers-grid",
                    for (i, offer) in OFFERS.iter().enumerate() {
                        Reveal {
                            key: "{offer.title}",
                            slot: RevealKey::new(RevealGroup::Section, REVEAL_BASE + i),
                            class: "offer-card",
                            div {
                                style: if offer.limited_time { countdown.card_style() } else { "" },
                                if offer.limited_time {
                                    span {
                                        class: "offer-badge",
                                        style: "background: {countdown.badge_background()};",
                                        "{badge}"
                                    }
                                }
                                h3 { "{offer.title}" }
                                p { class: "offer-discount", "{offer.discount}" }
                                {
                                    let view = ctx.cart().view(CartButton::Offer(i));
                                    let style = view.background.map(|bg| format!("background: {bg};")).unwrap_or_default();
                                    rsx! {
                                        button {
                                            class: "offer-button",
                                            style,
                                            disabled: view.disabled,
                                            onclick: move |_| site.dispatch(UiEvent::OfferClicked(i)),
                                            "{view.label}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

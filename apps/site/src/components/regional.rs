use super::{Reveal, RippleButton, anchor};
use crate::driver::Site;
use aqua_domain::catalog::{DELIVERY_CITIES, REGIONAL_BOTTLES, Section};
use aqua_kernel::context::UiEvent;
use aqua_kernel::reveal::{RevealGroup, RevealKey};
use aqua_kernel::ripple::RippleHost;
use aqua_kernel::shop::CartButton;
use dioxus::prelude::*;

#[component]
pub fn RegionalBottles() -> Element {
    let site = use_context::<Site>();
    let ctx = site.ctx.read();

    rsx! {
        section { id: "regional", class: "regional-bottles", onmounted: anchor(site, Section::Regional),
            div { class: "container",
                h2 { class: "section-title", "Local Favorites" }
                div { class: "regional-grid",
                    for (i, bottle) in REGIONAL_BOTTLES.iter().enumerate() {
                        Reveal {
                            key: "{bottle.name}",
                            slot: RevealKey::new(RevealGroup::RegionalCard, i),
                            class: "regional-card",
                            span { class: "brand", "{bottle.brand}" }
                            h3 { "{bottle.name}" }
                            p { class: "regional-price", "{bottle.price}" }
                            {
                                let view = ctx.cart().view(CartButton::Regional(i));
                                let background = view.background.unwrap_or_default();
                                rsx! {
                                    RippleButton {
                                        host: RippleHost::Regional(i),
                                        class: "order-btn",
                                        label: "{view.label}",
                                        background: "{background}",
                                        disabled: view.disabled,
                                        onpress: move |()| site.dispatch(UiEvent::RegionalOrder(i)),
                                    }
                                }
                            }
                        }
                    }
                }
                div { class: "delivery-info",
                    h3 { "We deliver in" }
                    ul { class: "city-list",
                        for city in DELIVERY_CITIES {
                            li { key: "{city}", "{city}" }
                        }
                    }
                }
            }
        }
    }
}

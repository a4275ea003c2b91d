use super::anchor;
use crate::driver::Site;
use aqua_domain::catalog::Section;
use aqua_kernel::context::UiEvent;
use dioxus::prelude::*;

#[component]
pub fn Hero() -> Element {
    let site = use_context::<Site>();

    rsx! {
        section { id: "home", class: "hero", onmounted: anchor(site, Section::Home),
            div { class: "hero-content",
                h1 { class: "hero-title", "Pure Water, Pure Life" }
                p { class: "hero-subtitle",
                    "Premium drinking water, purified in seven stages and delivered to your door."
                }
                button {
                    class: "cta-button",
                    onclick: move |_| site.dispatch(UiEvent::CtaClicked),
                    "Explore Products"
                }
            }
            div { class: "hero-image",
                div { class: "water-bottle",
                    div { class: "bottle-cap" }
                    div { class: "bottle-body", div { class: "water-level" } }
                }
            }
        }
    }
}

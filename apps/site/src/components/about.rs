use super::{Reveal, anchor};
use crate::driver::Site;
use aqua_domain::catalog::Section;
use aqua_kernel::context::UiEvent;
use aqua_kernel::reveal::{RevealGroup, RevealKey};
use dioxus::prelude::*;

const REVEAL_BASE: usize = 8;

const HIGHLIGHTS: [(&str, &str); 3] = [
    ("🔬", "Seven-stage purification"),
    ("🌱", "Recyclable packaging"),
    ("🚚", "Same-day delivery"),
];

#[component]
pub fn About() -> Element {
    let site = use_context::<Site>();

    rsx! {
        section { id: "about", class: "about", onmounted: anchor(site, Section::About),
            div { class: "container",
                h2 { class: "section-title", "About AquaPure" }
                p { class: "about-text",
                    "For over a decade we have bottled water we would happily give our own families."
                }
                div { class: "about-features",
                    for (i, (icon, text)) in HIGHLIGHTS.into_iter().enumerate() {
                        Reveal {
                            key: "{text}",
                            slot: RevealKey::new(RevealGroup::Section, REVEAL_BASE + i),
                            class: "about-feature",
                            span { class: "about-icon", "{icon}" }
                            p { "{text}" }
                        }
                    }
                }
                button {
                    class: "about-button",
                    onclick: move |_| site.dispatch(UiEvent::AboutClicked),
                    "Learn More"
                }
            }
        }
    }
}

use super::{Reveal, anchor};
use crate::driver::Site;
use aqua_domain::catalog::Section;
use aqua_kernel::context::UiEvent;
use aqua_kernel::reveal::{RevealGroup, RevealKey};
use dioxus::prelude::*;

const REVEAL_SLOT: usize = 11;

#[component]
pub fn Locator() -> Element {
    let site = use_context::<Site>();
    let ctx = site.ctx.read();
    let locator = ctx.locator();
    let query = locator.query().to_owned();

    rsx! {
        section { id: "locator", class: "locator", onmounted: anchor(site, Section::Locator),
            div { class: "container",
                h2 { class: "section-title", "Find a Store Near You" }
                Reveal { slot: RevealKey::new(RevealGroup::Section, REVEAL_SLOT), class: "locator-search",
                    input {
                        id: "locationInput",
                        r#type: "text",
                        placeholder: "Enter your city or postal code",
                        value: "{query}",
                        oninput: move |evt: FormEvent| site.dispatch(UiEvent::LocationInput(evt.value())),
                        onkeydown: move |evt: KeyboardEvent| {
                            if evt.key() == Key::Enter {
                                site.dispatch(UiEvent::LocationSearch);
                            }
                        },
                    }
                    button {
                        class: "search-btn",
                        disabled: locator.is_searching(),
                        onclick: move |_| site.dispatch(UiEvent::LocationSearch),
                        "{locator.button_label()}"
                    }
                }
            }
        }
    }
}

use crate::driver::Site;
use aqua_domain::catalog::SOCIAL_LINKS;
use aqua_kernel::context::UiEvent;
use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    let site = use_context::<Site>();

    rsx! {
        footer { class: "footer",
            div { class: "container",
                div { class: "social-links",
                    for (i, (title, url)) in SOCIAL_LINKS.into_iter().enumerate() {
                        a {
                            key: "{title}",
                            class: "social-link",
                            href: url,
                            title,
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                site.dispatch(UiEvent::SocialClicked(i));
                            },
                            "{title}"
                        }
                    }
                }
                p { class: "copyright", "© AquaPure. All rights reserved." }
            }
        }
    }
}

use crate::driver::Site;
use aqua_domain::catalog::Section;
use aqua_kernel::context::UiEvent;
use dioxus::prelude::*;

#[component]
pub fn Header() -> Element {
    let site = use_context::<Site>();
    let ctx = site.ctx.read();
    let active = ctx.navigation().active_class();
    let style = ctx.header().style();

    rsx! {
        header { class: "header", style,
            nav { class: "navbar",
                a {
                    class: "nav-logo",
                    href: "#home",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        site.dispatch(UiEvent::NavLinkClicked(Section::Home));
                    },
                    "💧 AquaPure"
                }
                ul {
                    class: "nav-menu {active}",
                    onclick: move |evt: MouseEvent| evt.stop_propagation(),
                    for section in Section::NAV {
                        li { key: "{section.anchor()}", class: "nav-item",
                            a {
                                class: "nav-link",
                                href: "#{section.anchor()}",
                                onclick: move |evt: MouseEvent| {
                                    evt.prevent_default();
                                    evt.stop_propagation();
                                    site.dispatch(UiEvent::NavLinkClicked(section));
                                },
                                "{section.title()}"
                            }
                        }
                    }
                }
                div {
                    class: "hamburger {active}",
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        site.dispatch(UiEvent::HamburgerClicked);
                    },
                    span { class: "bar" }
                    span { class: "bar" }
                    span { class: "bar" }
                }
            }
        }
    }
}

//! Page components. Each one reads the kernel state through [`Site`] and reports DOM events
//! back as [`UiEvent`]s.

mod about;
mod contact;
mod features;
mod footer;
mod header;
mod hero;
mod locator;
mod notifications;
mod offers;
mod products;
mod regional;
mod school;

use crate::driver::{self, Site};
use aqua_domain::catalog::Section;
use aqua_domain::config::SiteConfig;
use aqua_kernel::context::UiEvent;
use aqua_kernel::navigation::HeaderStyle;
use aqua_kernel::reveal::RevealKey;
use aqua_kernel::ripple::{Click, RippleHost};
use dioxus::html::MountedData;
use dioxus::prelude::*;
use std::rc::Rc;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config = use_context::<SiteConfig>();
    let site = use_context_provider(|| Site::new(config));
    driver::use_task_loop(site);

    let overflow = site.ctx.read().navigation().body_overflow();

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        div {
            class: "page",
            style: "overflow-y: {overflow};",
            onclick: move |_| {
                if site.ctx.peek().navigation().is_open() {
                    site.dispatch(UiEvent::OutsideClicked);
                }
            },
            onscroll: move |evt: ScrollEvent| {
                let offset = evt.scroll_top();
                let threshold = site.ctx.peek().config().layout.header_scroll_threshold;
                if HeaderStyle::from_scroll(offset, threshold) != site.ctx.peek().header() {
                    site.dispatch(UiEvent::Scrolled { offset });
                }
            },
            onresize: move |evt: ResizeEvent| {
                if let Ok(size) = evt.get_content_box_size() {
                    site.dispatch(UiEvent::Resized { width: size.width });
                }
            },
            header::Header {}
            main {
                hero::Hero {}
                products::Products {}
                features::Features {}
                school::SchoolBottles {}
                regional::RegionalBottles {}
                offers::Offers {}
                locator::Locator {}
                about::About {}
                contact::Contact {}
            }
            footer::Footer {}
            products::ProductModal {}
            notifications::Notifications {}
        }
    }
}

/// Records the element behind a section anchor so links can scroll to it.
fn anchor(site: Site, section: Section) -> impl FnMut(MountedEvent) {
    move |evt: MountedEvent| site.register_anchor(section, evt.data())
}

/// Wraps content that animates in the first time it scrolls into view.
#[component]
pub fn Reveal(slot: RevealKey, #[props(default)] class: String, children: Element) -> Element {
    let site = use_context::<Site>();
    let ctx = site.ctx.read();
    let reveal_class = ctx.reveal().class(slot);
    let style = ctx.reveal().style(slot);

    rsx! {
        div {
            class: "{class} reveal {reveal_class}",
            style,
            onvisible: move |evt: VisibleEvent| {
                if site.ctx.peek().reveal().is_revealed(slot) {
                    return;
                }
                if !evt.is_intersecting().unwrap_or(false) {
                    return;
                }
                if let Ok(ratio) = evt.get_intersection_ratio() {
                    site.dispatch(UiEvent::ElementVisible { key: slot, ratio });
                }
            },
            {children}
        }
    }
}

/// Button drawing click ripples from the kernel's ripple state.
#[component]
pub fn RippleButton(
    host: RippleHost,
    class: String,
    label: String,
    #[props(default)] background: String,
    #[props(default)] disabled: bool,
    onpress: EventHandler<()>,
) -> Element {
    let site = use_context::<Site>();
    let mut element = use_signal(|| None::<Rc<MountedData>>);
    let ctx = site.ctx.read();
    let style = if background.is_empty() { String::new() } else { format!("background: {background};") };

    rsx! {
        button {
            class: "{class} ripple-host",
            style,
            disabled,
            onmounted: move |evt: MountedEvent| element.set(Some(evt.data())),
            onclick: move |evt: MouseEvent| {
                let point = evt.element_coordinates();
                onpress.call(());

                let mounted = element.peek().clone();
                spawn(async move {
                    let (width, height) = match mounted {
                        Some(el) => el
                            .get_client_rect()
                            .await
                            .map_or((0.0, 0.0), |rect| (rect.size.width, rect.size.height)),
                        None => (0.0, 0.0),
                    };
                    let click = Click { x: point.x, y: point.y, width, height };
                    site.dispatch(UiEvent::Ripple { host, click });
                });
            },
            "{label}"
            for ripple in ctx.ripples().for_host(host) {
                span { key: "{ripple.id:?}", class: "ripple", style: ripple.style() }
            }
        }
    }
}

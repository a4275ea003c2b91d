use crate::driver::Site;
use aqua_kernel::context::UiEvent;
use dioxus::prelude::*;

/// Toast stack; the kernel removes entries once their lifetime ends.
#[component]
pub fn Notifications() -> Element {
    let site = use_context::<Site>();
    let ctx = site.ctx.read();

    rsx! {
        div { class: "notification-container",
            for note in ctx.notifications().iter() {
                {
                    let id = note.id;
                    rsx! {
                        div { key: "{id}", id: "{id}", class: note.class(),
                            span { class: "notification-message", "{note.message}" }
                            button {
                                class: "notification-close",
                                onclick: move |_| site.dispatch(UiEvent::NotificationDismissed(id)),
                                "×"
                            }
                        }
                    }
                }
            }
        }
    }
}

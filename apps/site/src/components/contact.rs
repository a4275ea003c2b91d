use super::{Reveal, anchor};
use crate::driver::Site;
use aqua_domain::catalog::{CONTACT_INFO, Section};
use aqua_domain::form::{FieldId, SUBJECT_OPTIONS};
use aqua_kernel::context::UiEvent;
use aqua_kernel::reveal::{RevealGroup, RevealKey};
use dioxus::prelude::*;

const REVEAL_SLOT: usize = 12;

#[component]
pub fn Contact() -> Element {
    let site = use_context::<Site>();
    let ctx = site.ctx.read();
    let form = ctx.form();
    let form_display = if form.is_form_visible() { "flex" } else { "none" };
    let success_display = if form.is_success_visible() { "block" } else { "none" };
    let loading = if form.is_loading() { "loading" } else { "" };

    rsx! {
        section { id: "contact", class: "contact", onmounted: anchor(site, Section::Contact),
            div { class: "container",
                h2 { class: "section-title", "Get in Touch" }
                Reveal { slot: RevealKey::new(RevealGroup::Section, REVEAL_SLOT), class: "contact-content",
                    div { class: "contact-info",
                        for (title, detail) in CONTACT_INFO {
                            div { key: "{title}", class: "info-item",
                                h4 { "{title}" }
                                p { "{detail}" }
                            }
                        }
                    }
                    form {
                        id: "contactForm",
                        class: "contact-form",
                        style: "display: {form_display};",
                        novalidate: true,
                        onsubmit: move |evt: FormEvent| {
                            evt.prevent_default();
                            site.dispatch(UiEvent::FormSubmitted);
                        },
                        Field { id: FieldId::Name, kind: "text" }
                        Field { id: FieldId::Email, kind: "email" }
                        Field { id: FieldId::Phone, kind: "tel" }
                        Field { id: FieldId::Subject }
                        Field { id: FieldId::Message }
                        button {
                            r#type: "submit",
                            class: "submit-btn {loading}",
                            disabled: form.is_loading(),
                            "{form.submit_label()}"
                        }
                    }
                    div {
                        id: "successMessage",
                        class: "success-message",
                        style: "display: {success_display};",
                        div { class: "success-icon", "✓" }
                        h3 { "Thank you!" }
                        p { "Your message has been sent. We will get back to you soon." }
                    }
                }
            }
        }
    }
}

/// One labelled input with its inline error.
#[component]
fn Field(id: FieldId, #[props(default)] kind: String) -> Element {
    let site = use_context::<Site>();
    let ctx = site.ctx.read();
    let form = ctx.form();
    let value = form.field(id).value.clone();
    let style = form.border_color(id).map(|c| format!("border-color: {c};")).unwrap_or_default();
    let error = form.error_text(id);
    let error_class = if error.is_some() { "error-message show" } else { "error-message" };

    let oninput = move |evt: FormEvent| site.dispatch(UiEvent::FieldInput { field: id, value: evt.value() });
    let onblur = move |_: FocusEvent| site.dispatch(UiEvent::FieldBlur(id));

    rsx! {
        div { class: "form-group",
            label { r#for: id.as_str(), "{id.label()}" }
            match id {
                FieldId::Subject => rsx! {
                    select { id: id.as_str(), name: id.as_str(), value: "{value}", style, oninput, onblur,
                        for (option, text) in SUBJECT_OPTIONS.iter().copied() {
                            option { key: "{option}", value: option, selected: value == option, "{text}" }
                        }
                    }
                },
                FieldId::Message => rsx! {
                    textarea { id: id.as_str(), name: id.as_str(), rows: 5, value: "{value}", style, oninput, onblur }
                },
                _ => rsx! {
                    input { id: id.as_str(), name: id.as_str(), r#type: kind, value: "{value}", style, oninput, onblur }
                },
            }
            span { id: id.error_id(), class: error_class, "{error.unwrap_or_default()}" }
        }
    }
}

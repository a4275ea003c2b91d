use super::{Reveal, anchor};
use crate::driver::Site;
use aqua_domain::catalog::Section;
use aqua_domain::features::FeatureSet;
use aqua_kernel::context::UiEvent;
use aqua_kernel::reveal::{RevealGroup, RevealKey};
use dioxus::prelude::*;

const REVEAL_BASE: usize = 3;

#[component]
pub fn Features() -> Element {
    let site = use_context::<Site>();
    let ctx = site.ctx.read();
    let checklist = ctx.checklist();
    let checked = checklist.checked();
    let verifying = checklist.is_verifying();
    let verify_label = checklist.verify_label();
    let progress_text = checklist.progress_text();
    let progress_style = checklist.progress_style();
    let verdict = checklist.verdict().copied();

    rsx! {
        section { id: "features", class: "features", onmounted: anchor(site, Section::Features),
            div { class: "container",
                h2 { class: "section-title", "Check Our Premium Features" }
                Reveal {
                    slot: RevealKey::new(RevealGroup::Section, REVEAL_BASE),
                    class: "features-checklist",
                    for (i, (feature, text)) in FeatureSet::LABELED.into_iter().enumerate() {
                        label { key: "{i}", class: "feature-checkbox",
                            input {
                                r#type: "checkbox",
                                checked: checked.contains(feature),
                                onchange: move |evt: FormEvent| {
                                    site.dispatch(UiEvent::FeatureToggled { feature, checked: evt.checked() });
                                },
                            }
                            span { class: "checkmark" }
                            "{text}"
                        }
                    }
                }
                div { class: "checklist-actions",
                    button {
                        class: "check-all-btn",
                        onclick: move |_| site.dispatch(UiEvent::CheckAll),
                        "Check All"
                    }
                    button {
                        class: "uncheck-all-btn",
                        onclick: move |_| site.dispatch(UiEvent::UncheckAll),
                        "Uncheck All"
                    }
                    button {
                        class: "verify-btn",
                        disabled: verifying,
                        onclick: move |_| site.dispatch(UiEvent::Verify),
                        "{verify_label}"
                    }
                }
                div { class: "progress-container",
                    div { class: "progress-bar", div { class: "progress-fill", style: progress_style } }
                    p { class: "progress-text", "{progress_text}" }
                }
                if let Some(verdict) = verdict {
                    div {
                        class: "verification-result",
                        style: "background: {verdict.background()}; border-color: {verdict.border_color()};",
                        div { class: "result-icon", "{verdict.icon()}" }
                        h3 { "{verdict.title()}" }
                        p { "{verdict.message()}" }
                    }
                }
            }
        }
    }
}

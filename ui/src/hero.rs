use api::HttpQuoteClient;
use dioxus::prelude::*;
use oneisok_core::{
    Budget, CheckboxVerifier, Field, FieldValue, FormState, Priority, QuoteClient, Service,
    SubmitOutcome,
};
use tracing::{info, warn};

use crate::RELAY_BASE_URL;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");
const LOGO: Asset = asset!("/assets/oneisok.svg");

/// Token handed to the verifier when the "I'm not a robot" box is ticked
const CHECKBOX_TOKEN: &str = "checked";

const PARTICLES: usize = 20;
const PROGRESS_DOTS: usize = 3;

/// Landing hero with the quote request form.
#[component]
pub fn Hero() -> Element {
    let mut form = use_signal(FormState::new);
    let focused = use_signal(|| None::<Field>);
    let mut notice = use_signal(|| None::<SubmitOutcome>);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        // Same gate as the button, re-checked in case the disabled state is stale
        let Some(payload) = form.write().begin_submit() else {
            return;
        };
        notice.set(None);

        let mut form = form;
        let mut notice = notice;
        spawn(async move {
            let client = HttpQuoteClient::new(RELAY_BASE_URL);
            let result = client.send(&payload).await;
            let outcome = form.write().finish_submit(result);
            if outcome.is_success() {
                info!("Quote request sent");
            } else {
                warn!("Quote request failed: {}", outcome.message());
            }
            notice.set(Some(outcome));
        });
    };

    let state = form.read();
    let percent = state.completion_percent();
    let lit_dots = state.progress_steps(PROGRESS_DOTS);
    let human = state.human_verified();
    let consent = state.submission().consent;
    let priority = state.submission().priority.clone();
    let comments = state.submission().comments.clone();
    let comments_done = state.is_completed(Field::Comments);
    let in_flight = state.in_flight();
    let submit_enabled = state.submit_enabled();
    let all_done = state.is_complete();
    drop(state);
    let notice_view = notice().map(|outcome| (outcome.is_success(), outcome.message()));

    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        div {
            id: "hero",
            for i in 0..PARTICLES {
                div {
                    key: "{i}",
                    class: "particle",
                    style: "left: {(i * 37) % 100}%; top: {(i * 53) % 100}%; width: {1 + i % 3}px; height: {1 + i % 3}px; animation-duration: {10 + i}s;",
                }
            }

            div {
                class: "hero-inner",
                div {
                    class: "hero-header",
                    a {
                        href: "https://oneisok.co/",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        img { class: "logo", src: LOGO, alt: "Oneisok Logo" }
                    }
                    div {
                        class: "progress-track",
                        div { class: "progress-fill", style: "width: {percent}%;" }
                    }
                    p { class: "progress-label", "Form Progress: {percent}%" }
                    p { class: "tagline", "Thank you for connect with Oneisok." }
                }

                div {
                    class: "form-card",
                    div {
                        class: "form-title-row",
                        h2 { "QUOTE " span { class: "accent", "REQUEST" } }
                        div {
                            class: "progress-dots",
                            for i in 0..PROGRESS_DOTS {
                                div {
                                    key: "{i}",
                                    class: if i < lit_dots { "dot lit" } else { "dot" },
                                }
                            }
                        }
                    }

                    form {
                        onsubmit: on_submit,

                        TextField { form, focused, field: Field::Name, label: "Your Name", kind: "text" }
                        TextField { form, focused, field: Field::Email, label: "Your Email", kind: "email" }
                        TextField { form, focused, field: Field::Phone, label: "Contact Phone", kind: "tel" }
                        TextField { form, focused, field: Field::Address, label: "Your Address", kind: "text" }

                        SelectField {
                            form,
                            focused,
                            field: Field::Service,
                            label: "Select Service",
                            placeholder: "--- Select a Service* ---",
                            options: Service::options().map(|s| (s.as_str(), s.label())).collect::<Vec<_>>(),
                        }
                        SelectField {
                            form,
                            focused,
                            field: Field::Budget,
                            label: "Select Budget",
                            placeholder: "--- Select Project Budget* ---",
                            options: Budget::options().map(|b| (b.as_str(), b.label())).collect::<Vec<_>>(),
                        }

                        div {
                            class: "priority-group",
                            label { class: "group-label", "Project Priority" span { class: "pill", "{priority}" } }
                            div {
                                class: "priority-options",
                                for choice in Priority::options() {
                                    label {
                                        key: "{choice}",
                                        class: if priority == choice.as_str() { "priority selected" } else { "priority" },
                                        input {
                                            r#type: "radio",
                                            name: "priority",
                                            value: choice.as_str(),
                                            checked: priority == choice.as_str(),
                                            onchange: move |_| {
                                                form.write().update_field(Field::Priority, FieldValue::Text(choice.as_str().to_owned()))
                                            },
                                        }
                                        span { "{choice}" }
                                    }
                                }
                            }
                        }

                        TextField { form, focused, field: Field::LaunchDate, label: "Estimated Launch Date", kind: "date" }

                        div {
                            class: "field",
                            label {
                                class: if !comments.is_empty() { "field-label raised" } else { "field-label" },
                                "Your Comments*"
                                if comments_done { span { class: "tick", "✓" } }
                            }
                            textarea {
                                name: Field::Comments.as_str(),
                                rows: "4",
                                required: true,
                                placeholder: "Tell us about your project*",
                                class: if comments_done { "field-input multiline done" } else { "field-input multiline" },
                                value: "{comments}",
                                oninput: move |evt: FormEvent| {
                                    form.write().update_field(Field::Comments, FieldValue::Text(evt.value()))
                                },
                            }
                        }

                        div {
                            class: if human { "check-row verified" } else { "check-row" },
                            input {
                                r#type: "checkbox",
                                checked: human,
                                onchange: move |evt: FormEvent| {
                                    if evt.checked() {
                                        form.write().verify_human(&CheckboxVerifier, CHECKBOX_TOKEN);
                                    } else {
                                        form.write().clear_human_verification();
                                    }
                                },
                            }
                            span { "I'm not a robot" if human { " ✓" } }
                            div {
                                class: "captcha-badge",
                                if human { "✓" } else { "reCAPTCHA" }
                            }
                        }

                        div {
                            class: if consent { "check-row consented" } else { "check-row" },
                            input {
                                r#type: "checkbox",
                                name: Field::Consent.as_str(),
                                checked: consent,
                                onchange: move |evt: FormEvent| {
                                    form.write().update_field(Field::Consent, FieldValue::Checked(evt.checked()))
                                },
                            }
                            p {
                                "I consent to Collect my data according to the "
                                a { href: "#", "Privacy Policy" }
                                if consent { span { class: "tick", "✓" } }
                            }
                        }

                        div {
                            class: "submit-row",
                            button {
                                r#type: "submit",
                                disabled: !submit_enabled,
                                class: if submit_enabled { "submit ready" } else { "submit" },
                                if in_flight {
                                    div { class: "spinner" }
                                } else {
                                    "SUBMIT REQUEST"
                                }
                            }
                            if all_done {
                                p { class: "all-done", "🎉 All fields completed!" }
                            }
                        }
                    }

                    if let Some((success, message)) = notice_view {
                        div {
                            class: if success { "notice success" } else { "notice error" },
                            "{message}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CompletedBadge(visible: bool) -> Element {
    rsx! {
        div {
            class: if visible { "badge shown" } else { "badge" },
            span { "✓" }
        }
    }
}

#[component]
fn TextField(
    mut form: Signal<FormState>,
    mut focused: Signal<Option<Field>>,
    field: Field,
    label: &'static str,
    kind: &'static str,
) -> Element {
    let value = form
        .read()
        .submission()
        .text(field)
        .unwrap_or_default()
        .to_owned();
    let done = form.read().is_completed(field);
    let active = focused() == Some(field);

    let label_class = if active || !value.is_empty() {
        "field-label raised"
    } else {
        "field-label"
    };
    let input_class = match (active, done) {
        (true, _) => "field-input focused",
        (false, true) => "field-input done",
        (false, false) => "field-input",
    };

    rsx! {
        div {
            class: "field",
            label {
                class: label_class,
                "{label}*"
                if done { span { class: "tick", "✓" } }
            }
            input {
                r#type: kind,
                name: field.as_str(),
                value: "{value}",
                placeholder: "{label}*",
                required: true,
                class: input_class,
                oninput: move |evt: FormEvent| {
                    form.write().update_field(field, FieldValue::Text(evt.value()))
                },
                onfocus: move |_| focused.set(Some(field)),
                onblur: move |_| focused.set(None),
            }
            CompletedBadge { visible: done }
        }
    }
}

#[component]
fn SelectField(
    mut form: Signal<FormState>,
    mut focused: Signal<Option<Field>>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    options: Vec<(&'static str, &'static str)>,
) -> Element {
    let value = form
        .read()
        .submission()
        .text(field)
        .unwrap_or_default()
        .to_owned();
    let done = form.read().is_completed(field);
    let active = focused() == Some(field);

    rsx! {
        div {
            class: "field",
            label {
                class: if active || !value.is_empty() { "field-label raised" } else { "field-label" },
                "{label}*"
                if done { span { class: "tick", "✓" } }
            }
            select {
                name: field.as_str(),
                required: true,
                value: "{value}",
                class: if done { "field-input select done" } else { "field-input select" },
                onchange: move |evt: FormEvent| {
                    form.write().update_field(field, FieldValue::Text(evt.value()))
                },
                onfocus: move |_| focused.set(Some(field)),
                onblur: move |_| focused.set(None),
                option { value: "", "{placeholder}" }
                for (wire, text) in options {
                    option {
                        key: "{wire}",
                        value: wire,
                        selected: value == wire,
                        "{text}"
                    }
                }
            }
            CompletedBadge { visible: done }
        }
    }
}

#![allow(non_snake_case)]

use crate::client;
use crate::common;

use client::log_to_console;
use client::ConsentState;
use common::content::*;
use common::Icon;
use common::CONFIG;
use dioxus::prelude::*;

/// Blocking terms and conditions dialog.
///
/// `onaccept` fires when the user submits after ticking the checkbox, and when the
/// dialog is dismissed with escape unless `dismiss_accepts` is turned off in the config.
/// The dialog never hides itself, flip `visible` from the caller.
#[component]
pub fn ConsentDialog(visible: bool, onaccept: EventHandler<()>) -> Element {
    let state = use_signal(ConsentState::new);

    if !visible {
        return None;
    }

    rsx! {
        ConsentDialogBody { state, onaccept }
    }
}

#[component]
fn ConsentDialogBody(state: Signal<ConsentState>, onaccept: EventHandler<()>) -> Element {
    let mut state = state;
    let current = state();
    let can_submit = current.can_submit();
    let expanded = current.privacy_notice_expanded();

    let min_width = CONFIG.min_width_px;
    let dismiss_accepts = CONFIG.dismiss_accepts;
    let points = display_points();
    let bullets = privacy_bullets(&CONFIG);

    let on_dismiss = onaccept.clone();

    rsx! {
        style { { include_str!("consent.css") } }
        div {
            // Blocking, clicking the backdrop does not dismiss.
            class: "dialog-overlay",

            div {
                class: "dialog",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "dialog-title",
                tabindex: "0",
                min_width: "{min_width}px",
                // Escape only reaches the dialog once it has focus.
                onmounted: move |event| async move {
                    if let Err(e) = event.set_focus(true).await {
                        log_to_console(("could not focus terms dialog:", e));
                    }
                },
                onkeydown: move |event| {
                    if event.key() == Key::Escape {
                        dismiss(state, dismiss_accepts, || on_dismiss.call(()));
                    }
                },

                h2 { id: "dialog-title", class: "dialog-title", {TITLE} }

                div {
                    id: "welcome-message",
                    span { {WELCOME} }
                    " "
                    { icon(Icon::Robot) }
                }
                br {}

                div {
                    class: "terms-points",
                    for (index, point) in points.into_iter().enumerate() {
                        div {
                            key: "{index}",
                            id: "terms-point-{index}",
                            class: "terms-point",
                            { icon(point.icon) }
                            { point_text(point.text) }
                        }
                    }
                }

                br {}
                button {
                    id: "privacy-toggle",
                    class: "default-button",
                    onclick: move |_| {
                        state.write().toggle_privacy_notice();
                        log_to_console(("privacy notice expanded:", state.read().privacy_notice_expanded()));
                    },
                    { icon(current.privacy_toggle_icon()) }
                    " "
                    {current.privacy_toggle_label()}
                }

                if expanded {
                    div {
                        class: "privacy-notice",
                        h3 { class: "privacy-heading", {PRIVACY_HEADING} }
                        ul {
                            for bullet in bullets {
                                li { { point_text(bullet) } }
                            }
                        }
                    }
                }

                br {}
                div {
                    class: "checkbox",
                    input {
                        r#type: "checkbox",
                        id: "terms-checkbox",
                        checked: current.agreed(),
                        onchange: move |event| change_agreement(state, is_checked(&event.value())),
                    }
                    label { r#for: "terms-checkbox", {AGREEMENT_LABEL} }
                }

                div {
                    class: "dialog-footer",
                    "data-testid": "dialog-footer",
                    button {
                        id: "submit-button",
                        class: if can_submit { "primary-button" } else { "primary-button disabled" },
                        disabled: !can_submit,
                        onclick: move |_| {
                            submit(state, || onaccept.call(()));
                        },
                        {SUBMIT_LABEL}
                    }
                }
            }
        }
    }
}

fn change_agreement(mut state: Signal<ConsentState>, checked: bool) {
    state.write().toggle_agreement(checked);
    log_to_console(("terms agreed:", checked));
}

fn submit(state: Signal<ConsentState>, on_accept: impl FnOnce()) -> bool {
    let current = *state.peek();
    let submitted = current.submit(on_accept);
    if submitted {
        log_to_console("terms accepted");
    } else {
        log_to_console("submit ignored, terms not agreed");
    }
    submitted
}

fn dismiss(state: Signal<ConsentState>, dismiss_accepts: bool, on_accept: impl FnOnce()) -> bool {
    let current = *state.peek();
    let dismissed = current.dismiss(dismiss_accepts, on_accept);
    if dismissed {
        log_to_console("terms dialog dismissed, treating as accepted");
    } else {
        log_to_console("terms dialog dismiss ignored");
    }
    dismissed
}

/// Checkbox inputs report their checked state as the event value.
fn is_checked(value: &str) -> bool {
    value == "true"
}

fn icon(icon: Icon) -> Element {
    let class = icon.class();
    let glyph = icon.glyph();

    rsx! {
        span { class: "{class}", aria_hidden: "true", "{glyph}" }
    }
}

fn point_text(text: PointText) -> Element {
    match text {
        PointText::Plain(s) => rsx! {
            span { "{s}" }
        },
        PointText::Rich(parts) => rsx! {
            span {
                for part in parts {
                    { inline(part) }
                }
            }
        },
    }
}

fn inline(part: Inline) -> Element {
    match part {
        Inline::Text(s) => rsx! { "{s}" },
        Inline::MailTo(address) => rsx! {
            a { href: "mailto:{address}", "{address}" }
        },
        Inline::ExternalLink { label, href } => rsx! {
            a {
                href: "{href}",
                target: "_blank",
                rel: "noopener noreferrer",
                "{label}"
            }
        },
    }
}

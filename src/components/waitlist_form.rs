//! Waitlist form wiring: validation, simulated submission, success panel

use dioxus::prelude::*;

use crate::analytics::Analytics;
use crate::components::Notifications;
use crate::content::{PROVIDER_TYPES, STATES};
use crate::form::{
    email_field_hint, first_name_field_hint, FormFlow, SubmitOutcome, SUBMIT_DELAY_MS,
};
use crate::notify::NotificationKind;
use crate::storage;
use crate::time;
use crate::types::SignupFields;

const SUCCESS_MESSAGE: &str =
    "Successfully joined the waitlist! Check your email for next steps.";

#[component]
pub fn WaitlistForm() -> Element {
    let notifications = use_context::<Notifications>();
    let analytics = use_context::<Analytics>();

    let mut email = use_signal(String::new);
    let mut first_name = use_signal(String::new);
    let mut provider_type = use_signal(String::new);
    let mut state = use_signal(String::new);
    let mut flow = use_signal(FormFlow::new);

    // Inline hints raised when a field loses focus; cleared on input.
    let mut email_hint = use_signal(|| None::<&'static str>);
    let mut first_name_hint = use_signal(|| None::<&'static str>);

    let handle_submit = move |_| {
        let fields = SignupFields {
            email: email(),
            first_name: first_name(),
            provider_type: provider_type(),
            state: state(),
        };

        let outcome = flow.write().begin_submit(&fields);
        match outcome {
            Err(err) => notifications.show(err.to_string(), NotificationKind::Error),
            Ok(SubmitOutcome::Ignored) => {}
            Ok(SubmitOutcome::Accepted) => {
                let analytics = analytics.clone();
                spawn(async move {
                    // Simulated network round trip; no failure path.
                    time::sleep_ms(SUBMIT_DELAY_MS).await;

                    let record = flow.write().complete(&fields);
                    tracing::info!(email = %record.email, "waitlist signup completed");

                    analytics.conversion();
                    notifications.show(SUCCESS_MESSAGE, NotificationKind::Success);

                    email.set(String::new());
                    first_name.set(String::new());
                    provider_type.set(String::new());
                    state.set(String::new());

                    storage::store_signup(&record);
                });
            }
        }
    };

    rsx! {
        section {
            id: "waitlist",
            class: "bg-blue-50 border-t border-blue-100",
            div {
                class: "max-w-xl mx-auto px-4 py-16",

                if flow.read().is_succeeded() {
                    // Success panel; this flow instance is finished.
                    div {
                        class: "bg-green-50 border border-green-200 text-green-700 p-6 rounded-lg text-center",
                        h3 { class: "text-lg font-semibold mb-2", "You're on the list!" }
                        p {
                            "Thanks for joining the CareSlot waitlist. We'll be in touch \
                             when onboarding opens for your state."
                        }
                    }
                } else {
                    h2 {
                        class: "text-3xl font-bold text-gray-900 text-center mb-2",
                        "Join the Waitlist"
                    }
                    p {
                        class: "text-gray-600 text-center mb-8",
                        "Be first in line when CareSlot opens in your state."
                    }

                    form {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 space-y-5",
                        onsubmit: handle_submit,

                        div {
                            label {
                                class: "block text-sm font-medium text-gray-700 mb-2",
                                "Email "
                                span { class: "text-red-500", "*" }
                            }
                            input {
                                r#type: "email",
                                name: "email",
                                value: "{email}",
                                oninput: move |e| {
                                    email.set(e.value());
                                    email_hint.set(None);
                                },
                                onblur: move |_| email_hint.set(email_field_hint(&email())),
                                placeholder: "you@yourpractice.com.au",
                                class: if email_hint().is_some() {
                                    "w-full px-4 py-3 border border-red-400 rounded-lg focus:outline-none focus:ring-2 focus:ring-red-400"
                                } else {
                                    "w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                                }
                            }
                            if let Some(hint) = email_hint() {
                                p { class: "mt-1 text-sm text-red-500", "{hint}" }
                            }
                        }

                        div {
                            label {
                                class: "block text-sm font-medium text-gray-700 mb-2",
                                "First name "
                                span { class: "text-red-500", "*" }
                            }
                            input {
                                r#type: "text",
                                name: "firstName",
                                value: "{first_name}",
                                oninput: move |e| {
                                    first_name.set(e.value());
                                    first_name_hint.set(None);
                                },
                                onblur: move |_| first_name_hint.set(first_name_field_hint(&first_name())),
                                placeholder: "Ann",
                                class: if first_name_hint().is_some() {
                                    "w-full px-4 py-3 border border-red-400 rounded-lg focus:outline-none focus:ring-2 focus:ring-red-400"
                                } else {
                                    "w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                                }
                            }
                            if let Some(hint) = first_name_hint() {
                                p { class: "mt-1 text-sm text-red-500", "{hint}" }
                            }
                        }

                        div {
                            label {
                                class: "block text-sm font-medium text-gray-700 mb-2",
                                "Provider type"
                            }
                            select {
                                name: "providerType",
                                value: "{provider_type}",
                                onchange: move |e| provider_type.set(e.value()),
                                class: "w-full px-4 py-3 border border-gray-300 rounded-lg bg-white focus:outline-none focus:ring-2 focus:ring-blue-500",
                                option { value: "", "Select your provider type" }
                                for (value, label) in PROVIDER_TYPES.iter() {
                                    option { key: "{value}", value: "{value}", "{label}" }
                                }
                            }
                        }

                        div {
                            label {
                                class: "block text-sm font-medium text-gray-700 mb-2",
                                "State"
                            }
                            select {
                                name: "state",
                                value: "{state}",
                                onchange: move |e| state.set(e.value()),
                                class: "w-full px-4 py-3 border border-gray-300 rounded-lg bg-white focus:outline-none focus:ring-2 focus:ring-blue-500",
                                option { value: "", "Select your state" }
                                for option_state in STATES.iter() {
                                    option { key: "{option_state}", value: "{option_state}", "{option_state}" }
                                }
                            }
                        }

                        button {
                            r#type: "submit",
                            class: "w-full py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors font-medium disabled:opacity-50 disabled:cursor-not-allowed",
                            disabled: flow.read().is_submitting(),
                            if flow.read().is_submitting() {
                                span { class: "inline-block animate-spin mr-2", "\u{25E0}" }
                                "Joining..."
                            } else {
                                "Join the Waitlist"
                            }
                        }
                    }
                }
            }
        }
    }
}

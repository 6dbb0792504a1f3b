//! Stat band with counter animations

use dioxus::prelude::*;

use crate::content::STATS;
use crate::counter::{CounterAnimation, COUNTER_STEP_MS};
use crate::time;

#[component]
pub fn StatsBand() -> Element {
    rsx! {
        section {
            class: "bg-white border-y border-gray-100",
            div {
                class: "max-w-5xl mx-auto px-4 py-12 grid gap-8 sm:grid-cols-3 text-center",
                for stat in STATS.iter() {
                    StatCounter { key: "{stat.label}", value: stat.value, label: stat.label }
                }
            }
        }
    }
}

/// One stat. Animatable values count up from zero on mount; labels like
/// "Zero" render as-is.
#[component]
fn StatCounter(value: &'static str, label: &'static str) -> Element {
    let mut display = use_signal(|| value.to_string());

    use_future(move || async move {
        let Some(mut anim) = CounterAnimation::parse(value) else {
            return;
        };
        display.set(anim.label());
        while !anim.is_done() {
            time::sleep_ms(COUNTER_STEP_MS).await;
            display.set(anim.tick());
        }
    });

    rsx! {
        div {
            div { class: "text-4xl font-bold text-blue-700 mb-1", "{display}" }
            div { class: "text-sm text-gray-500", "{label}" }
        }
    }
}

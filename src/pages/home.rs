//! The landing page
//!
//! Assembles the sections and owns the page-level analytics wiring:
//! scroll-depth milestones from a window scroll listener and time-on-page
//! milestones from a once-a-second ticker that stops itself when the last
//! milestone has fired.

use dioxus::prelude::*;

use crate::analytics::{Analytics, MilestoneTracker, TIME_ON_PAGE_MILESTONES};
use crate::components::{FaqSection, Navbar, StatsBand, WaitlistForm};
use crate::time;

const FEATURES: &[(&str, &str, &str)] = &[
    (
        "\u{1F4C5}",
        "Fill cancellations automatically",
        "Open slots are matched against your patient waitlist the moment a \
         cancellation lands, no phone tag required.",
    ),
    (
        "\u{1F514}",
        "Patients confirm themselves",
        "Matched patients get an SMS and confirm with one tap; the first \
         confirmation takes the slot.",
    ),
    (
        "\u{1F4CA}",
        "See what you recover",
        "A simple dashboard shows recovered appointments and hours of admin \
         saved each week.",
    ),
];

#[component]
pub fn Home() -> Element {
    let analytics = use_context::<Analytics>();

    // Time-on-page milestones
    {
        let analytics = analytics.clone();
        use_future(move || {
            let analytics = analytics.clone();
            async move {
                let mut tracker = MilestoneTracker::new(TIME_ON_PAGE_MILESTONES);
                let mut elapsed = 0u32;
                while !tracker.is_complete() {
                    time::sleep_ms(1000).await;
                    elapsed += 1;
                    for milestone in tracker.crossed(elapsed) {
                        analytics.time_on_page(milestone);
                    }
                }
            }
        });
    }

    // Scroll-depth milestones
    {
        let analytics = analytics.clone();
        use_hook(move || {
            #[cfg(feature = "web")]
            attach_scroll_depth_listener(analytics);
            #[cfg(not(feature = "web"))]
            let _ = analytics;
        });
    }

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-blue-50 to-white",

            Navbar {}

            // Hero
            section {
                id: "hero",
                class: "max-w-3xl mx-auto px-4 py-20 text-center",
                h1 {
                    class: "text-4xl sm:text-5xl font-bold text-gray-900 mb-4",
                    "Stop losing appointments to cancellations"
                }
                p {
                    class: "text-lg sm:text-xl text-gray-600 mb-8",
                    "CareSlot refills cancelled appointments from your waitlist \
                     automatically, so your books stay full and your front desk \
                     stays off the phone."
                }
                a {
                    href: "#waitlist",
                    class: "inline-flex items-center gap-2 px-6 py-3 bg-blue-600 text-white rounded-xl hover:bg-blue-700 transition-colors font-medium shadow-sm hover:shadow-md",
                    onclick: {
                        let analytics = analytics.clone();
                        move |_| analytics.button_click("Join the Waitlist", "hero")
                    },
                    "Join the Waitlist"
                }
            }

            StatsBand {}

            // Features
            section {
                id: "features",
                class: "max-w-5xl mx-auto px-4 py-16",
                h2 {
                    class: "text-3xl font-bold text-gray-900 text-center mb-10",
                    "Built for busy practices"
                }
                div {
                    class: "grid gap-6 sm:grid-cols-3",
                    for (icon, title, body) in FEATURES.iter() {
                        div {
                            key: "{title}",
                            class: "bg-white border border-gray-200 rounded-lg p-6",
                            div { class: "text-3xl mb-3", "{icon}" }
                            h3 { class: "font-semibold text-gray-900 mb-2", "{title}" }
                            p { class: "text-sm text-gray-600 leading-relaxed", "{body}" }
                        }
                    }
                }
            }

            FaqSection {}

            WaitlistForm {}

            footer {
                class: "bg-white border-t border-gray-100",
                div {
                    class: "max-w-7xl mx-auto px-4 py-8 text-center",
                    h2 { class: "text-lg font-semibold text-gray-900 mb-2", "CareSlot" }
                    p {
                        class: "text-gray-500 text-sm max-w-md mx-auto",
                        "Keeping Australian practices booked solid. Made in Melbourne."
                    }
                }
            }
        }
    }
}

/// Reports each scroll-depth milestone once. The listener stays attached
/// for the page lifetime; the tracker inside it goes quiet once all
/// milestones have fired.
#[cfg(feature = "web")]
fn attach_scroll_depth_listener(analytics: Analytics) {
    use wasm_bindgen::prelude::Closure;
    use wasm_bindgen::JsCast;

    use crate::analytics::SCROLL_DEPTH_MILESTONES;

    let Some(window) = web_sys::window() else {
        return;
    };
    let mut tracker = MilestoneTracker::new(SCROLL_DEPTH_MILESTONES);
    let callback = Closure::<dyn FnMut()>::new({
        let window = window.clone();
        move || {
            let Some(root) = window.document().and_then(|d| d.document_element()) else {
                return;
            };
            let viewport = window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            let track = f64::from(root.scroll_height()) - viewport;
            if track <= 0.0 {
                return;
            }
            let scroll_y = window.scroll_y().unwrap_or(0.0);
            let percent = ((scroll_y / track) * 100.0).round().clamp(0.0, 100.0) as u32;
            for milestone in tracker.crossed(percent) {
                analytics.scroll_depth(milestone);
            }
        }
    });
    if window
        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
        .is_ok()
    {
        // Listener lives as long as the page does.
        callback.forget();
    }
}

//! FAQ section: category tabs and the single-open accordion

use dioxus::prelude::*;

use crate::content::{faq_item_base, faq_item_count, FAQ_CATEGORIES};
use crate::disclosure::DisclosureState;

#[component]
pub fn FaqSection() -> Element {
    let mut disclosure =
        use_signal(|| DisclosureState::new(FAQ_CATEGORIES.len(), faq_item_count()));

    rsx! {
        section {
            id: "faq",
            class: "max-w-3xl mx-auto px-4 py-16",

            h2 {
                class: "text-3xl font-bold text-gray-900 text-center mb-2",
                "Frequently Asked Questions"
            }
            p {
                class: "text-gray-600 text-center mb-8",
                "Everything you need to know before joining the waitlist."
            }

            // Category tabs
            div {
                class: "flex flex-wrap justify-center gap-2 mb-8",
                for (idx, category) in FAQ_CATEGORIES.iter().enumerate() {
                    button {
                        key: "{category.id}",
                        class: if disclosure.read().is_category_active(idx) {
                            "px-4 py-2 rounded-lg text-sm font-medium transition-all bg-blue-100 text-blue-700"
                        } else {
                            "px-4 py-2 rounded-lg text-sm font-medium transition-all bg-gray-50 text-gray-600 hover:bg-gray-100"
                        },
                        onclick: move |_| disclosure.write().select_category(idx),
                        "{category.label}"
                    }
                }
            }

            // Active category's items
            for (cat_idx, category) in FAQ_CATEGORIES.iter().enumerate() {
                if disclosure.read().is_category_active(cat_idx) {
                    div {
                        key: "{category.id}",
                        class: "space-y-3",
                        for (offset, item) in category.items.iter().enumerate() {
                            {
                                let item_idx = faq_item_base(cat_idx) + offset;
                                let is_open = disclosure.read().is_item_open(item_idx);
                                rsx! {
                                    div {
                                        key: "{item.question}",
                                        class: "bg-white border border-gray-200 rounded-lg",
                                        button {
                                            class: "w-full flex items-center justify-between px-5 py-4 text-left font-medium text-gray-900",
                                            onclick: move |_| disclosure.write().toggle_item(item_idx),
                                            "{item.question}"
                                            span {
                                                class: "text-gray-400 ml-4",
                                                if is_open { "\u{2212}" } else { "+" }
                                            }
                                        }
                                        if is_open {
                                            div {
                                                class: "px-5 pb-4 text-gray-600 text-sm leading-relaxed",
                                                "{item.answer}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

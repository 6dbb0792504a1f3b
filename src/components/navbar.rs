//! Site header with the mobile menu toggle
//!
//! The mobile menu opens via the hamburger toggle and closes via the close
//! control, any link tap, or a tap anywhere outside the panel (a backdrop
//! element covering the rest of the viewport while the menu is open).

use dioxus::prelude::*;

use crate::analytics::Analytics;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#features", "Features"),
    ("#faq", "FAQ"),
    ("#waitlist", "Join the Waitlist"),
];

/// Mobile menu disclosure state. Every close path (close control, link
/// tap, outside tap) funnels through `close`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[component]
pub fn Navbar() -> Element {
    let analytics = use_context::<Analytics>();
    let mut menu = use_signal(NavMenu::new);

    rsx! {
        header {
            class: "bg-white border-b border-gray-100 sticky top-0 z-40",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex items-center justify-between h-16",

                a {
                    href: "#hero",
                    class: "text-xl font-bold text-blue-700",
                    "CareSlot"
                }

                // Desktop links
                nav {
                    class: "hidden sm:flex items-center gap-6",
                    for (href, label) in NAV_LINKS.iter() {
                        a {
                            key: "{href}",
                            href: "{href}",
                            class: "text-sm text-gray-600 hover:text-gray-900",
                            onclick: {
                                let analytics = analytics.clone();
                                move |_| analytics.button_click(label, "nav")
                            },
                            "{label}"
                        }
                    }
                }

                // Mobile menu toggle
                button {
                    class: "sm:hidden text-gray-600 hover:text-gray-900 text-xl",
                    onclick: move |_| menu.write().open(),
                    "\u{2630}"
                }
            }

            // Mobile menu
            if menu.read().is_open() {
                // Tapping anywhere outside the panel closes the menu
                div {
                    class: "fixed inset-0 z-30 sm:hidden",
                    onclick: move |_| menu.write().close(),
                }
                div {
                    class: "sm:hidden relative bg-white border-t border-gray-100 px-4 py-4",
                    div {
                        class: "flex justify-end",
                        button {
                            class: "text-gray-500 hover:text-gray-700",
                            onclick: move |_| menu.write().close(),
                            "\u{2715}"
                        }
                    }
                    nav {
                        class: "flex flex-col gap-3",
                        for (href, label) in NAV_LINKS.iter() {
                            a {
                                key: "{href}",
                                href: "{href}",
                                class: "text-gray-700 hover:text-gray-900 py-1",
                                // Any link tap also closes the menu
                                onclick: move |_| menu.write().close(),
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

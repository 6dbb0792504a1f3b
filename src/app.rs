//! Root application component

use dioxus::prelude::*;

use crate::analytics::Analytics;
use crate::components::{Notifications, NotificationHost};
use crate::pages::Home;

/// Root application component
#[component]
pub fn App() -> Element {
    // App-wide capabilities: the notification slot and the analytics sink
    // (gtag-backed on web, no-op elsewhere).
    use_context_provider(Notifications::new);
    use_context_provider(Analytics::for_platform);

    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/main.css") }

        Home {}
        NotificationHost {}
    }
}

//! Notification display: context handle plus the host component
//!
//! [`Notifications`] is the app-wide handle components use to raise
//! transient messages. It wraps the pure [`Presenter`] in a signal and owns
//! the timer side: showing schedules the auto-dismiss, dismissing schedules
//! the removal after the exit transition. [`NotificationHost`] renders
//! whatever the presenter currently holds.

use dioxus::prelude::*;

use crate::notify::{Notification, NotificationKind, Presenter, AUTO_DISMISS_MS, EXIT_MS};
use crate::time;

/// Shared handle to the single notification slot.
#[derive(Clone, Copy)]
pub struct Notifications {
    presenter: Signal<Presenter>,
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            presenter: Signal::new(Presenter::new()),
        }
    }

    /// Shows a notification, replacing any visible one, and schedules its
    /// auto-dismissal. The scheduled timer is id-guarded, so it cannot take
    /// down a later notification that replaced this one.
    pub fn show(&self, message: impl Into<String>, kind: NotificationKind) {
        let mut presenter = self.presenter;
        let id = presenter.write().show(message.into(), kind);
        spawn(async move {
            time::sleep_ms(AUTO_DISMISS_MS).await;
            Self::dismiss_inner(presenter, id);
        });
    }

    /// Dismisses by id; safe to call any number of times.
    pub fn dismiss(&self, id: u64) {
        Self::dismiss_inner(self.presenter, id);
    }

    fn dismiss_inner(mut presenter: Signal<Presenter>, id: u64) {
        if presenter.write().begin_dismiss(id) {
            spawn(async move {
                time::sleep_ms(EXIT_MS).await;
                presenter.write().finish_dismiss(id);
            });
        }
    }

    pub fn current(&self) -> Option<Notification> {
        self.presenter.read().current().cloned()
    }
}

/// Renders the current notification in a fixed slot below the header.
#[component]
pub fn NotificationHost() -> Element {
    let notifications = use_context::<Notifications>();

    let Some(notification) = notifications.current() else {
        return rsx! {};
    };
    let id = notification.id;
    let motion = if notification.leaving {
        "notification-leave"
    } else {
        "notification-enter"
    };

    rsx! {
        div {
            class: "fixed top-24 right-5 z-50 max-w-sm rounded-lg px-6 py-4 text-white shadow-lg {notification.kind.color_class()} {motion}",
            div {
                class: "flex items-center gap-2",
                span { "{notification.kind.icon()}" }
                span { class: "text-sm", "{notification.message}" }
                button {
                    class: "ml-auto text-white/80 hover:text-white",
                    onclick: move |_| notifications.dismiss(id),
                    "\u{2715}"
                }
            }
        }
    }
}

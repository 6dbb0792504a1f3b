//! Reusable UI components

mod faq;
mod navbar;
mod notification;
mod stats;
mod waitlist_form;

pub use faq::*;
pub use navbar::*;
pub use notification::*;
pub use stats::*;
pub use waitlist_form::*;

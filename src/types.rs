//! Shared data types for the waitlist flow

use serde::{Deserialize, Serialize};

/// Raw field values captured from the waitlist form at submit time.
///
/// Values are kept exactly as entered; trimming happens during validation
/// and when the signup record is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupFields {
    pub email: String,
    pub first_name: String,
    pub provider_type: String,
    pub state: String,
}

/// The single record persisted to localStorage on a successful submission.
///
/// Keys serialize in camelCase to match the stored `waitlistSignup` format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistSignup {
    pub email: String,
    pub first_name: String,
    pub provider_type: String,
    pub state: String,
    /// RFC 3339 UTC timestamp taken when the simulated submission completed.
    pub timestamp: String,
}

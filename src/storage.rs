//! Best-effort persistence of the last waitlist signup
//!
//! One localStorage key, overwritten whole on every successful submission
//! and never read back by the page. Storage being unavailable (private
//! browsing, quota, disabled) must not disturb the submission flow, so all
//! failures are logged and swallowed.

use crate::types::WaitlistSignup;

/// localStorage key holding the serialized last signup.
pub const SIGNUP_KEY: &str = "waitlistSignup";

/// Writes the signup record, last-writer-wins.
pub fn store_signup(signup: &WaitlistSignup) {
    if let Err(err) = try_store(signup) {
        tracing::warn!(%err, "failed to persist waitlist signup");
    }
}

#[cfg(feature = "web")]
fn try_store(signup: &WaitlistSignup) -> anyhow::Result<()> {
    use anyhow::{anyhow, Context};

    let storage = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or_else(|| anyhow!("localStorage unavailable"))?;
    let json = serde_json::to_string(signup).context("serializing signup record")?;
    storage
        .set_item(SIGNUP_KEY, &json)
        .map_err(|_| anyhow!("localStorage rejected the write"))
}

#[cfg(not(feature = "web"))]
fn try_store(signup: &WaitlistSignup) -> anyhow::Result<()> {
    tracing::debug!(email = %signup.email, "no storage backend, dropping signup record");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_record_round_trips_as_json() {
        let signup = WaitlistSignup {
            email: "a@b.co".to_string(),
            first_name: "Ann".to_string(),
            provider_type: "psychologist".to_string(),
            state: "QLD".to_string(),
            timestamp: "2025-06-01T10:30:00.000Z".to_string(),
        };
        let json = serde_json::to_string(&signup).unwrap();
        let parsed: WaitlistSignup = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, signup);
    }

    #[test]
    fn test_store_never_fails_visibly() {
        let signup = WaitlistSignup {
            email: "a@b.co".to_string(),
            first_name: "Ann".to_string(),
            provider_type: String::new(),
            state: String::new(),
            timestamp: "2025-06-01T10:30:00.000Z".to_string(),
        };
        store_signup(&signup);
    }
}

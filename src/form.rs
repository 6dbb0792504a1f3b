//! Waitlist form flow: validation and the submission state machine
//!
//! The flow moves `Idle -> Submitting -> Succeeded`. Validation failures
//! keep it in `Idle`; the simulated transport has no failure path, so once
//! `Submitting` is entered the flow always completes. `Succeeded` is
//! terminal for the page visit (there is no reset transition, see
//! DESIGN.md).

use chrono::{SecondsFormat, Utc};
use thiserror::Error;

use crate::types::{SignupFields, WaitlistSignup};

/// Simulated network round-trip latency for the waitlist submission.
pub const SUBMIT_DELAY_MS: u32 = 2000;

/// Client-side validation failures. The `Display` strings are shown to the
/// user verbatim as error notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingRequired,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

/// What a submit gesture did to the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed and the flow entered `Submitting`; the caller owns
    /// scheduling the simulated transport.
    Accepted,
    /// The flow was not `Idle` (already submitting, or succeeded); nothing
    /// changed and nothing must be scheduled.
    Ignored,
}

/// One waitlist submission flow instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormFlow {
    phase: FormPhase,
}

impl FormFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn is_succeeded(&self) -> bool {
        self.phase == FormPhase::Succeeded
    }

    /// Validates the fields and, if they pass, enters `Submitting`.
    ///
    /// Checks run in order and the first failure wins, so one attempt
    /// produces at most one error. Submitting anywhere but `Idle` yields
    /// `Ignored` rather than `Accepted`, so a caller can never schedule a
    /// second transport task for the same flow; the disabled submit
    /// control makes that path unreachable from the UI anyway.
    pub fn begin_submit(&mut self, fields: &SignupFields) -> Result<SubmitOutcome, ValidationError> {
        if self.phase != FormPhase::Idle {
            return Ok(SubmitOutcome::Ignored);
        }
        validate(fields)?;
        self.phase = FormPhase::Submitting;
        Ok(SubmitOutcome::Accepted)
    }

    /// Completes the simulated submission and builds the signup record.
    /// Called once the fixed transport delay has elapsed.
    pub fn complete(&mut self, fields: &SignupFields) -> WaitlistSignup {
        self.phase = FormPhase::Succeeded;
        WaitlistSignup {
            email: fields.email.trim().to_string(),
            first_name: fields.first_name.trim().to_string(),
            provider_type: fields.provider_type.clone(),
            state: fields.state.clone(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

fn validate(fields: &SignupFields) -> Result<(), ValidationError> {
    if fields.email.trim().is_empty() || fields.first_name.trim().is_empty() {
        return Err(ValidationError::MissingRequired);
    }
    if !is_valid_email(fields.email.trim()) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Inline hint shown under the email field when it loses focus. Empty
/// input gets no hint; the required-field complaint belongs to the submit
/// attempt, not to tabbing through the form.
pub fn email_field_hint(value: &str) -> Option<&'static str> {
    (!value.is_empty() && !is_valid_email(value)).then_some("Please enter a valid email address")
}

/// Inline hint shown under the first name field when it loses focus.
pub fn first_name_field_hint(value: &str) -> Option<&'static str> {
    value.trim().is_empty().then_some("First name is required")
}

/// Shape check only: no whitespace, exactly one `@` with a non-empty local
/// part, and a domain containing a `.` with at least one character on each
/// side. Deliverability is not our problem.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .match_indices('.')
        .any(|(i, _)| i > 0 && i < domain.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(email: &str, first_name: &str) -> SignupFields {
        SignupFields {
            email: email.to_string(),
            first_name: first_name.to_string(),
            provider_type: "gp".to_string(),
            state: "VIC".to_string(),
        }
    }

    #[test]
    fn test_valid_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@clinic.com.au"));
        assert!(is_valid_email("x@sub.domain.io"));
    }

    #[test]
    fn test_invalid_email_shapes() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@co."));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("a@b@c.co"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_missing_first_name_rejected_before_submitting() {
        let mut flow = FormFlow::new();
        let err = flow.begin_submit(&fields("a@b.co", "  ")).unwrap_err();
        assert_eq!(err, ValidationError::MissingRequired);
        assert_eq!(flow.phase(), FormPhase::Idle);
    }

    #[test]
    fn test_missing_fields_reported_before_email_shape() {
        let mut flow = FormFlow::new();
        // Both checks would fail; the required-field check must win.
        let err = flow.begin_submit(&fields("", "")).unwrap_err();
        assert_eq!(err, ValidationError::MissingRequired);
    }

    #[test]
    fn test_malformed_email_rejected() {
        let mut flow = FormFlow::new();
        let err = flow.begin_submit(&fields("not-an-email", "Ann")).unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail);
        assert_eq!(flow.phase(), FormPhase::Idle);
    }

    #[test]
    fn test_successful_submit_walks_the_phases() {
        let mut flow = FormFlow::new();
        let input = fields("a@b.co", "Ann");
        assert_eq!(flow.begin_submit(&input), Ok(SubmitOutcome::Accepted));
        assert!(flow.is_submitting());

        let record = flow.complete(&input);
        assert!(flow.is_succeeded());
        assert_eq!(record.email, "a@b.co");
        assert_eq!(record.first_name, "Ann");
        assert!(chrono::DateTime::parse_from_rfc3339(&record.timestamp).is_ok());
    }

    #[test]
    fn test_record_trims_entered_values() {
        let mut flow = FormFlow::new();
        let input = fields("  a@b.co ", " Ann ");
        flow.begin_submit(&input).unwrap();
        let record = flow.complete(&input);
        assert_eq!(record.email, "a@b.co");
        assert_eq!(record.first_name, "Ann");
    }

    #[test]
    fn test_resubmit_while_submitting_is_ignored() {
        let mut flow = FormFlow::new();
        flow.begin_submit(&fields("a@b.co", "Ann")).unwrap();
        // The rejection is distinguishable from acceptance, so a caller
        // never schedules a second transport task for the same flow.
        assert_eq!(
            flow.begin_submit(&fields("a@b.co", "Ann")),
            Ok(SubmitOutcome::Ignored)
        );
        assert!(flow.is_submitting());
    }

    #[test]
    fn test_succeeded_is_terminal() {
        let mut flow = FormFlow::new();
        let input = fields("a@b.co", "Ann");
        flow.begin_submit(&input).unwrap();
        flow.complete(&input);
        assert_eq!(flow.begin_submit(&input), Ok(SubmitOutcome::Ignored));
        assert!(flow.is_succeeded());
    }

    #[test]
    fn test_email_hint_only_for_nonempty_invalid_input() {
        assert_eq!(email_field_hint(""), None);
        assert_eq!(email_field_hint("a@b.co"), None);
        assert_eq!(
            email_field_hint("not-an-email"),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_first_name_hint_for_blank_input() {
        assert_eq!(first_name_field_hint("Ann"), None);
        assert_eq!(first_name_field_hint(""), Some("First name is required"));
        assert_eq!(first_name_field_hint("   "), Some("First name is required"));
    }
}

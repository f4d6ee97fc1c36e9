//! Profile-save policy: optimistic local apply on transport failure.
//!
//! When the backend explicitly rejects a profile edit, nothing is applied
//! and the rejection is surfaced. When the backend simply cannot be reached,
//! the edit is applied to the local session anyway so the UI stays usable.
//! Local state can diverge from backend truth on this path; it reconverges
//! on the next login.

use api::ApiError;

/// What the dashboard should do with a profile edit after the backend call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Backend accepted the edit; apply it locally.
    Saved,
    /// Backend unreachable; apply locally anyway (optimistic local apply).
    SavedLocally,
    /// Backend rejected the edit; do not apply, show the message.
    Rejected(String),
}

impl SaveOutcome {
    /// Whether the edit should be merged into the session store.
    pub fn applies_locally(&self) -> bool {
        matches!(self, SaveOutcome::Saved | SaveOutcome::SavedLocally)
    }
}

/// Map an `update_profile` result onto the save policy.
pub fn resolve_profile_save(result: Result<(), ApiError>) -> SaveOutcome {
    match result {
        Ok(()) => SaveOutcome::Saved,
        Err(err) if err.is_transport() => SaveOutcome::SavedLocally,
        Err(err) => SaveOutcome::Rejected(
            err.backend_message()
                .unwrap_or("Failed to update profile.")
                .to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_edit_is_saved() {
        assert_eq!(resolve_profile_save(Ok(())), SaveOutcome::Saved);
        assert!(SaveOutcome::Saved.applies_locally());
    }

    #[test]
    fn transport_failure_applies_locally() {
        let outcome = resolve_profile_save(Err(ApiError::Network("connection refused".into())));
        assert_eq!(outcome, SaveOutcome::SavedLocally);
        assert!(outcome.applies_locally());
    }

    #[test]
    fn backend_rejection_is_not_applied() {
        let outcome = resolve_profile_save(Err(ApiError::Status {
            status: 400,
            message: "bio too long".into(),
        }));
        assert_eq!(outcome, SaveOutcome::Rejected("bio too long".into()));
        assert!(!outcome.applies_locally());
    }

    #[test]
    fn empty_rejection_body_gets_a_generic_message() {
        let outcome = resolve_profile_save(Err(ApiError::Status {
            status: 500,
            message: String::new(),
        }));
        assert_eq!(
            outcome,
            SaveOutcome::Rejected("Failed to update profile.".into())
        );
    }
}

use crate::shared::api::ApiError;
use crate::shared::confirm_dialog::DialogIntent;
use crate::shared::notifications::Notice;
use contracts::domain::common::{MasterRecord, RecordId};

/// Submit lifecycle: `Idle -> DialogOpen -> Submitting -> Idle`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    DialogOpen,
    Submitting,
}

/// The request a confirmed submit sends
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitPlan<T> {
    Create(T),
    Update(RecordId, T),
}

/// Result of asking to submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRequest {
    /// Confirmation dialog is now open
    Opened,
    /// A dialog or a submission is already active; nothing changed
    Busy,
    /// Validation failed; the message goes into a warning toast
    Invalid(String),
}

/// What the screen does after a submission finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub notice: Notice,
    /// Go back to the list
    pub navigate: bool,
}

/// State of one create/edit form
#[derive(Debug, Clone, PartialEq)]
pub struct FormState<T> {
    draft: T,
    edit_id: Option<RecordId>,
    phase: FormPhase,
    loading: bool,
    saved: bool,
}

impl<T: MasterRecord> FormState<T> {
    /// Form seeded with the empty template; `edit_id` selects update mode
    pub fn new(edit_id: Option<RecordId>) -> Self {
        Self {
            draft: T::default(),
            edit_id,
            phase: FormPhase::Idle,
            loading: false,
            saved: false,
        }
    }

    pub fn draft(&self) -> &T {
        &self.draft
    }

    pub fn edit_id(&self) -> Option<RecordId> {
        self.edit_id
    }

    pub fn is_edit(&self) -> bool {
        self.edit_id.is_some()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn dialog_open(&self) -> bool {
        self.phase == FormPhase::DialogOpen
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Set once a submission succeeded
    pub fn is_saved(&self) -> bool {
        self.saved
    }

    pub fn dialog_intent(&self) -> DialogIntent {
        DialogIntent::for_submit(self.is_edit())
    }

    /// Text of the confirmation dialog
    pub fn confirm_message(&self) -> String {
        let element = T::element_name().to_lowercase();
        if self.is_edit() {
            format!("Do you want to update this {}?", element)
        } else {
            format!("Do you want to save this {}?", element)
        }
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Id to fetch, if the form edits an existing record
    pub fn begin_load(&mut self) -> Option<RecordId> {
        let id = self.edit_id?;
        self.loading = true;
        Some(id)
    }

    /// Replace the draft with the fetched record; on failure keep the template
    pub fn finish_load(&mut self, result: Result<T, ApiError>) -> Option<Notice> {
        self.loading = false;
        match result {
            Ok(record) => {
                self.draft = record;
                None
            }
            Err(err) => Some(Notice::error(err.describe(format!(
                "Error occurred while loading {}",
                T::element_name().to_lowercase()
            )))),
        }
    }

    // ------------------------------------------------------------------
    // Editing
    // ------------------------------------------------------------------

    /// Merge one field; a rejected value leaves the draft unchanged
    pub fn set_field(&mut self, field: &str, value: String) -> Result<(), Notice> {
        let mut next = self.draft.clone();
        next.set_field(field, value).map_err(Notice::warning)?;
        self.draft = next;
        Ok(())
    }

    /// Back to the empty template; edit id and phase stay
    pub fn reset(&mut self) {
        self.draft = T::default();
    }

    // ------------------------------------------------------------------
    // Submit workflow
    // ------------------------------------------------------------------

    pub fn request_submit(&mut self) -> SubmitRequest {
        if self.phase != FormPhase::Idle {
            return SubmitRequest::Busy;
        }
        if let Err(message) = self.draft.validate() {
            return SubmitRequest::Invalid(message);
        }
        self.phase = FormPhase::DialogOpen;
        SubmitRequest::Opened
    }

    pub fn cancel_submit(&mut self) {
        if self.phase == FormPhase::DialogOpen {
            self.phase = FormPhase::Idle;
        }
    }

    /// Close the dialog and start submitting; `None` unless the dialog is open
    pub fn confirm_submit(&mut self) -> Option<SubmitPlan<T>> {
        if self.phase != FormPhase::DialogOpen {
            return None;
        }
        self.phase = FormPhase::Submitting;
        let record = self.draft.clone();
        Some(match self.edit_id {
            Some(id) => SubmitPlan::Update(id, record),
            None => SubmitPlan::Create(record),
        })
    }

    /// Apply the submission result
    pub fn finish_submit(&mut self, result: Result<(), ApiError>) -> SubmitOutcome {
        self.phase = FormPhase::Idle;
        let element = T::element_name();
        let (saved_text, failed_text) = if self.is_edit() {
            (
                format!("{} updated successfully", element),
                "Error occurred while updating data",
            )
        } else {
            (
                format!("{} saved successfully", element),
                "Error occurred while saving data",
            )
        };

        match result {
            Ok(()) => {
                self.saved = true;
                SubmitOutcome {
                    notice: Notice::success(saved_text),
                    navigate: true,
                }
            }
            Err(err) => {
                let notice = if err.is_duplicate_key() {
                    Notice::warning(format!("{} already exists", element))
                } else if err.is_server_error() {
                    Notice::error(format!(
                        "Server error: {}",
                        err.backend_message().unwrap_or("please try again later")
                    ))
                } else {
                    Notice::error(err.describe(failed_text))
                };
                SubmitOutcome {
                    notice,
                    navigate: false,
                }
            }
        }
    }

    /// Cleanup for a submission that ended without a result
    pub fn abort_submit(&mut self) {
        if self.phase == FormPhase::Submitting {
            self.phase = FormPhase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notifications::Severity;
    use contracts::domain::a002_role::aggregate::Role;
    use contracts::domain::a003_qualification::aggregate::Qualification;

    fn filled_form(edit_id: Option<RecordId>) -> FormState<Role> {
        let mut form = FormState::<Role>::new(edit_id);
        form.set_field("roleName", "Inspector".into()).unwrap();
        form
    }

    #[test]
    fn test_second_request_while_dialog_open_is_ignored() {
        let mut form = filled_form(None);
        assert_eq!(form.request_submit(), SubmitRequest::Opened);
        assert_eq!(form.request_submit(), SubmitRequest::Busy);
        assert!(form.dialog_open());

        let first = form.confirm_submit();
        let second = form.confirm_submit();
        assert!(matches!(first, Some(SubmitPlan::Create(_))));
        assert_eq!(second, None);
        assert_eq!(form.request_submit(), SubmitRequest::Busy);
    }

    #[test]
    fn test_create_conflict_is_a_warning() {
        let mut form = filled_form(None);
        form.request_submit();
        form.confirm_submit();
        let outcome = form.finish_submit(Err(ApiError::from_status(409, "")));
        assert_eq!(outcome.notice.severity, Severity::Warning);
        assert!(outcome.notice.message.contains("already exists"));
        assert!(!outcome.navigate);
        assert_eq!(form.phase(), FormPhase::Idle);
    }

    #[test]
    fn test_server_uniqueness_message_is_a_conflict() {
        let mut form = filled_form(None);
        form.request_submit();
        form.confirm_submit();
        let body = r#"{"message":"duplicate key value violates unique constraint"}"#;
        let outcome = form.finish_submit(Err(ApiError::from_status(500, body)));
        assert_eq!(outcome.notice.severity, Severity::Warning);
        assert_eq!(outcome.notice.message, "Role already exists");
    }

    #[test]
    fn test_other_server_error() {
        let mut form = filled_form(Some(4));
        form.request_submit();
        form.confirm_submit();
        let body = r#"{"message":"database unavailable"}"#;
        let outcome = form.finish_submit(Err(ApiError::from_status(503, body)));
        assert_eq!(outcome.notice.severity, Severity::Error);
        assert_eq!(outcome.notice.message, "Server error: database unavailable");
    }

    #[test]
    fn test_generic_failure_text_depends_on_mode() {
        let mut create = filled_form(None);
        create.request_submit();
        create.confirm_submit();
        let outcome = create.finish_submit(Err(ApiError::Transport("offline".into())));
        assert_eq!(outcome.notice.message, "Error occurred while saving data");

        let mut update = filled_form(Some(2));
        update.request_submit();
        update.confirm_submit();
        let outcome = update.finish_submit(Err(ApiError::from_status(
            400,
            r#"{"message":"Role code too long"}"#,
        )));
        assert_eq!(
            outcome.notice.message,
            "Error occurred while updating data: Role code too long"
        );
    }

    #[test]
    fn test_successful_update_navigates() {
        let mut form = filled_form(Some(7));
        assert_eq!(form.dialog_intent(), DialogIntent::Update);
        form.request_submit();
        let plan = form.confirm_submit();
        assert!(matches!(plan, Some(SubmitPlan::Update(7, _))));
        assert!(form.is_submitting());

        let outcome = form.finish_submit(Ok(()));
        assert_eq!(outcome.notice.message, "Role updated successfully");
        assert!(outcome.navigate);
        assert!(form.is_saved());
    }

    #[test]
    fn test_invalid_draft_stays_idle() {
        let mut form = FormState::<Role>::new(None);
        assert_eq!(
            form.request_submit(),
            SubmitRequest::Invalid("Role Name is required".to_string())
        );
        assert_eq!(form.phase(), FormPhase::Idle);
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let mut form = filled_form(None);
        form.request_submit();
        form.cancel_submit();
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.confirm_submit(), None);
    }

    #[test]
    fn test_numeric_field_rejects_text() {
        let mut form = FormState::<Qualification>::new(None);
        form.set_field("minExperienceYears", "3".into()).unwrap();
        let err = form.set_field("minExperienceYears", "three".into()).unwrap_err();
        assert_eq!(err.severity, Severity::Warning);
        assert_eq!(form.draft().min_experience_years, Some(3));
    }

    #[test]
    fn test_failed_load_keeps_template() {
        let mut form = FormState::<Role>::new(Some(5));
        assert_eq!(form.begin_load(), Some(5));
        assert!(form.is_loading());
        let notice = form.finish_load(Err(ApiError::from_status(404, "")));
        assert_eq!(notice.map(|n| n.severity), Some(Severity::Error));
        assert_eq!(form.draft(), &Role::default());
        assert!(!form.is_loading());
    }

    #[test]
    fn test_reset_keeps_edit_id() {
        let mut form = filled_form(Some(3));
        form.reset();
        assert_eq!(form.draft(), &Role::default());
        assert_eq!(form.edit_id(), Some(3));
    }
}

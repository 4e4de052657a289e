//! Survey state machine
//!
//! Owns the form record plus the two UI flags:
//! - `touched` - a submit was attempted, so empty required fields are flagged
//! - `dialog_open` - the confirmation dialog is showing
//!
//! Nothing here renders. Validation is derived on demand, never stored.

use super::form::{Field, FieldChange, FormData, MAX_RATING};
use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Buttons (and the backdrop) that can close the confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogChoice {
    No,
    #[default]
    Yes,
    /// Closed without pressing a button (Esc)
    Backdrop,
}

impl DialogChoice {
    pub fn label(&self) -> &'static str {
        match self {
            DialogChoice::No => "No",
            DialogChoice::Yes => "Sí",
            DialogChoice::Backdrop => "backdrop",
        }
    }
}

/// Snapshot of the form taken when the user submits
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub submitted_at: DateTime<Local>,
    pub data: FormData,
    /// Required fields that were empty at submit time
    pub missing: Vec<Field>,
}

impl Submission {
    fn capture(data: &FormData) -> Self {
        Self {
            submitted_at: Local::now(),
            data: data.clone(),
            missing: data.missing_required(),
        }
    }

    pub fn formatted_time(&self) -> String {
        self.submitted_at.format("%H:%M:%S").to_string()
    }
}

/// Complete state of the survey form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurveyState {
    data: FormData,
    touched: bool,
    dialog_open: bool,
}

impl SurveyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn touched(&self) -> bool {
        self.touched
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog_open
    }

    /// Replace one field. No validation happens here.
    pub fn on_field_change(&mut self, change: FieldChange) {
        debug!(field = ?change.field(), "field changed");
        self.data.apply(change);
    }

    /// Set the rating; a cleared widget (`None`) stores zero
    pub fn on_rating_change(&mut self, value: Option<u8>) {
        let rating = value.unwrap_or(0).min(MAX_RATING);
        debug!(rating, "rating changed");
        self.data.rating = rating;
    }

    /// Mark the form as touched, log the snapshot and open the dialog.
    ///
    /// The dialog opens whether or not required fields are filled in.
    pub fn on_submit(&mut self) -> Submission {
        self.touched = true;

        let submission = Submission::capture(&self.data);
        match serde_json::to_string(&submission) {
            Ok(snapshot) => info!(
                target: "survey::submit",
                missing = submission.missing.len(),
                %snapshot,
                "form submitted"
            ),
            Err(err) => warn!(target: "survey::submit", %err, "could not serialize form snapshot"),
        }

        self.dialog_open = true;
        submission
    }

    /// Reset every field and hide validation errors
    pub fn on_clear(&mut self) {
        info!("form cleared");
        self.data = FormData::default();
        self.touched = false;
    }

    pub fn on_dialog_dismiss(&mut self) {
        self.dialog_open = false;
    }

    /// Every choice currently just closes the dialog
    pub fn on_dialog_choice(&mut self, choice: DialogChoice) {
        info!(choice = choice.label(), "confirmation dialog closed");
        match choice {
            DialogChoice::No | DialogChoice::Yes | DialogChoice::Backdrop => {
                self.on_dialog_dismiss()
            }
        }
    }

    /// Whether the field's error text should be shown
    pub fn is_invalid(&self, field: Field) -> bool {
        self.touched && field.is_required() && self.data.is_empty(field)
    }

    /// Fields currently showing an error, in display order
    pub fn errors(&self) -> Vec<Field> {
        Field::all()
            .into_iter()
            .filter(|f| self.is_invalid(*f))
            .collect()
    }

    /// The submit control is enabled only once the terms are accepted
    pub fn submit_enabled(&self) -> bool {
        self.data.terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::form::{Gender, Language};

    fn filled() -> SurveyState {
        let mut state = SurveyState::new();
        state.on_field_change(FieldChange::Name("Marta".to_string()));
        state.on_field_change(FieldChange::Surname("Ruiz".to_string()));
        state.on_field_change(FieldChange::Age("27".to_string()));
        state.on_field_change(FieldChange::Gender(Some(Gender::Female)));
        state.on_field_change(FieldChange::Language(Some(Language::Java)));
        state.on_rating_change(Some(4));
        state.on_field_change(FieldChange::Terms(true));
        state
    }

    #[test]
    fn test_initial_state() {
        let state = SurveyState::new();
        assert_eq!(state.data(), &FormData::default());
        assert!(!state.touched());
        assert!(!state.dialog_open());
        assert!(state.errors().is_empty());
        assert!(!state.submit_enabled());
    }

    #[test]
    fn test_field_change_touches_only_that_field() {
        let changes = vec![
            FieldChange::Name("Pablo".to_string()),
            FieldChange::Surname("Soto".to_string()),
            FieldChange::Age("45".to_string()),
            FieldChange::Gender(Some(Gender::Male)),
            FieldChange::Language(Some(Language::Python)),
        ];

        for change in changes {
            let mut state = filled();
            let before = state.data().clone();
            let field = change.field();

            let mut expected = before.clone();
            expected.apply(change.clone());
            state.on_field_change(change);

            assert_ne!(state.data(), &before, "{:?} did not change", field);
            assert_eq!(state.data(), &expected, "editing {:?} leaked", field);
            assert!(!state.touched());
        }
    }

    #[test]
    fn test_field_change_does_not_validate() {
        let mut state = SurveyState::new();
        state.on_field_change(FieldChange::Surname("Vidal".to_string()));
        assert!(!state.touched());
        assert!(state.errors().is_empty());
    }

    #[test]
    fn test_rating_change() {
        let mut state = SurveyState::new();
        state.on_rating_change(Some(3));
        assert_eq!(state.data().rating, 3);

        state.on_rating_change(None);
        assert_eq!(state.data().rating, 0);
    }

    #[test]
    fn test_submit_with_missing_fields_still_opens_dialog() {
        let mut state = SurveyState::new();
        state.on_field_change(FieldChange::Name("Iker".to_string()));

        let submission = state.on_submit();

        assert!(state.touched());
        assert!(state.dialog_open());
        assert!(state.is_invalid(Field::Gender));
        assert!(state.is_invalid(Field::Language));
        assert!(!state.is_invalid(Field::Name));
        assert_eq!(submission.missing, vec![Field::Gender, Field::Language]);
        assert_eq!(submission.data, *state.data());
    }

    #[test]
    fn test_terms_alone_enables_submit() {
        let mut state = SurveyState::new();
        state.on_field_change(FieldChange::Terms(true));
        assert!(state.submit_enabled());

        state.on_submit();
        assert!(state.dialog_open());
        assert_eq!(
            state.errors(),
            vec![Field::Name, Field::Gender, Field::Language]
        );
    }

    #[test]
    fn test_name_error_tracks_name_field() {
        let mut state = SurveyState::new();
        state.on_field_change(FieldChange::Language(Some(Language::JavaScript)));
        state.on_submit();
        assert!(state.is_invalid(Field::Name));

        state.on_field_change(FieldChange::Name("Noa".to_string()));
        assert!(!state.is_invalid(Field::Name));
    }

    #[test]
    fn test_optional_fields_never_invalid() {
        let mut state = SurveyState::new();
        state.on_submit();
        assert!(!state.is_invalid(Field::Surname));
        assert!(!state.is_invalid(Field::Age));
        assert!(!state.is_invalid(Field::Rating));
        assert!(!state.is_invalid(Field::Terms));
    }

    #[test]
    fn test_clear_restores_initial_form() {
        let mut state = filled();
        state.on_submit();

        state.on_clear();

        assert_eq!(state.data(), &FormData::default());
        assert!(!state.touched());
        assert!(state.errors().is_empty());
        assert!(!state.submit_enabled());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut once = filled();
        once.on_submit();
        once.on_clear();

        let mut twice = once.clone();
        twice.on_clear();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_every_dialog_choice_closes_without_mutation() {
        for choice in [DialogChoice::No, DialogChoice::Yes, DialogChoice::Backdrop] {
            let mut state = filled();
            state.on_submit();
            let data = state.data().clone();

            state.on_dialog_choice(choice);

            assert!(!state.dialog_open(), "{:?} left the dialog open", choice);
            assert_eq!(state.data(), &data);
            assert!(state.touched());
        }
    }

    #[test]
    fn test_submit_clear_submit_is_reproducible() {
        let mut state = SurveyState::new();
        state.on_submit();
        state.on_dialog_dismiss();
        let first = state.clone();

        state.on_clear();
        state.on_submit();
        state.on_dialog_dismiss();

        assert_eq!(state, first);

        state.on_dialog_dismiss();
        assert!(!state.dialog_open());
    }

    #[test]
    fn test_submission_snapshot_serializes() {
        let mut state = filled();
        let submission = state.on_submit();
        let json = serde_json::to_value(&submission).unwrap();

        assert_eq!(json["data"]["gender"], "m");
        assert_eq!(json["data"]["language"], "java");
        assert_eq!(json["data"]["rating"], 4);
        assert_eq!(json["missing"], serde_json::json!([]));
        assert_eq!(submission.formatted_time().len(), 8);
    }
}

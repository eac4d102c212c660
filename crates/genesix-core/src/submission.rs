//! The step-1 form engine: editable state, validation errors and the
//! submission state machine.
//!
//! ```text
//! Idle ──submit──▶ validate ──errors──▶ (status unchanged, errors shown)
//!                     │
//!                     └─valid──▶ Submitting ──▶ Succeeded | Failed
//! Succeeded | Failed ──submit──▶ Submitting
//! any ──reset──▶ Idle
//! ```

use crate::error::Result;
use crate::form::{CompetitorField, Field, FormState, JobField, ListField, TextField};
use crate::payload::{build_payload, Payload};
use crate::validation::{validate, ErrorMap};
use crate::webhook::WebhookClient;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Message used when a failure carries no text of its own.
pub const SUBMIT_FAILURE_FALLBACK: &str = "Falha ao enviar dados.";

// ---------------------------------------------------------------------------
// SubmissionStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Succeeded {
        /// The payload the webhook accepted.
        payload: Payload,
        /// Response body, when it was JSON.
        response: Option<serde_json::Value>,
        submitted_at: DateTime<Utc>,
    },
    Failed {
        message: String,
    },
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Submitting => "submitting",
            SubmissionStatus::Succeeded { .. } => "succeeded",
            SubmissionStatus::Failed { .. } => "failed",
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }

    /// The last payload the webhook accepted, if the status is `Succeeded`.
    pub fn last_payload(&self) -> Option<&Payload> {
        match self {
            SubmissionStatus::Succeeded { payload, .. } => Some(payload),
            _ => None,
        }
    }
}

/// Outcome of [`Step1Form::begin_submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAttempt {
    /// Validation passed; the status is now `Submitting` and the payload
    /// must be sent exactly once.
    Ready(Payload),
    /// Validation failed; errors were stored and the status left alone.
    Invalid,
    /// A submission is already in flight.
    Busy,
}

// ---------------------------------------------------------------------------
// Step1Form
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Step1Form {
    state: FormState,
    errors: ErrorMap,
    status: SubmissionStatus,
    in_flight: Option<Payload>,
}

impl Default for Step1Form {
    fn default() -> Self {
        Self::new()
    }
}

impl Step1Form {
    pub fn new() -> Self {
        Self::with_state(FormState::default())
    }

    /// Start from an existing draft.
    pub fn with_state(state: FormState) -> Self {
        Self {
            state,
            errors: ErrorMap::new(),
            status: SubmissionStatus::Idle,
            in_flight: None,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    // ---------------------------------------------------------------------------
    // Edits (each clears the edited field's error)
    // ---------------------------------------------------------------------------

    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        self.state.set_text(field, value);
        self.clear_error(field.into());
    }

    pub fn set_list_item(
        &mut self,
        field: ListField,
        index: usize,
        value: impl Into<String>,
    ) -> Result<()> {
        self.state.set_list_item(field, index, value)?;
        self.clear_error(field.into());
        Ok(())
    }

    /// Returns `false` when the list is at its cap; nothing changes then.
    pub fn add_list_item(&mut self, field: ListField) -> bool {
        let added = self.state.add_list_item(field);
        if added {
            self.clear_error(field.into());
        }
        added
    }

    pub fn remove_list_item(&mut self, field: ListField, index: usize) -> Result<()> {
        self.state.remove_list_item(field, index)?;
        self.clear_error(field.into());
        Ok(())
    }

    pub fn set_job_field(
        &mut self,
        index: usize,
        field: JobField,
        value: impl Into<String>,
    ) -> Result<()> {
        self.state.set_job_field(index, field, value)?;
        self.clear_error(Field::JobsToBeDone);
        Ok(())
    }

    pub fn add_job(&mut self) {
        self.state.add_job();
        self.clear_error(Field::JobsToBeDone);
    }

    pub fn remove_job(&mut self, index: usize) -> Result<()> {
        self.state.remove_job(index)?;
        self.clear_error(Field::JobsToBeDone);
        Ok(())
    }

    pub fn set_competitor_field(
        &mut self,
        index: usize,
        field: CompetitorField,
        value: impl Into<String>,
    ) -> Result<()> {
        self.state.set_competitor_field(index, field, value)?;
        self.clear_error(Field::Concorrentes);
        Ok(())
    }

    pub fn add_competitor(&mut self) {
        self.state.add_competitor();
        self.clear_error(Field::Concorrentes);
    }

    pub fn remove_competitor(&mut self, index: usize) -> Result<()> {
        self.state.remove_competitor(index)?;
        self.clear_error(Field::Concorrentes);
        Ok(())
    }

    fn clear_error(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    // ---------------------------------------------------------------------------
    // Submission
    // ---------------------------------------------------------------------------

    /// Validate and, if valid, enter `Submitting`.
    ///
    /// The error map is recomputed on every attempt that is not `Busy`.
    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.status.is_submitting() {
            debug!("submit ignored, request already in flight");
            return SubmitAttempt::Busy;
        }

        self.errors = validate(&self.state);
        if !self.errors.is_empty() {
            debug!(count = self.errors.len(), "step-1 form has validation errors");
            return SubmitAttempt::Invalid;
        }

        let payload = build_payload(&self.state);
        self.in_flight = Some(payload.clone());
        self.status = SubmissionStatus::Submitting;
        SubmitAttempt::Ready(payload)
    }

    /// Record the result of sending the payload returned by `begin_submit`.
    ///
    /// Ignored when no submission is in flight (e.g. the form was reset
    /// while the request was pending).
    pub fn finish_submit(&mut self, result: Result<Option<serde_json::Value>>) {
        let Some(payload) = self.in_flight.take() else {
            debug!("submit result arrived with nothing in flight, dropping it");
            return;
        };

        self.status = match result {
            Ok(response) => {
                info!("step-1 data sent");
                SubmissionStatus::Succeeded {
                    payload,
                    response,
                    submitted_at: Utc::now(),
                }
            }
            Err(e) => {
                let mut message = e.to_string();
                if message.is_empty() {
                    message = SUBMIT_FAILURE_FALLBACK.to_string();
                }
                warn!("step-1 submission failed: {message}");
                SubmissionStatus::Failed { message }
            }
        };
    }

    /// Validate, send and record the outcome in one call.
    pub async fn submit(&mut self, client: &WebhookClient) -> &SubmissionStatus {
        if let SubmitAttempt::Ready(payload) = self.begin_submit() {
            let result = client.send(&payload).await;
            self.finish_submit(result);
        }
        &self.status
    }

    /// Back to the initial form, no errors, `Idle`.
    pub fn reset(&mut self) {
        self.state = FormState::default();
        self.errors.clear();
        self.status = SubmissionStatus::Idle;
        self.in_flight = None;
    }

    // ---------------------------------------------------------------------------
    // Advancing
    // ---------------------------------------------------------------------------

    /// The "continue" action is enabled only after a successful submission.
    pub fn can_advance(&self) -> bool {
        matches!(self.status, SubmissionStatus::Succeeded { .. })
    }

    /// Invoke `on_advance` if advancing is allowed. Returns whether it ran.
    pub fn advance(&self, on_advance: impl FnOnce()) -> bool {
        if !self.can_advance() {
            return false;
        }
        on_advance();
        true
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

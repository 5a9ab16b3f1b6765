//! Contact form controller: per-field validation, error lifecycle, and
//! the simulated submission sequence.
//!
//! The controller owns the four field values, their error state, and a
//! three-state submission lifecycle (idle, submitting, succeeded). There
//! is no real network call: a valid submit schedules a completion task,
//! and success schedules the auto-hide of the confirmation notice. Both
//! delays live in [`TaskQueue`], so swapping the timer for a real request
//! later does not touch the state machine.

use std::time::{Duration, Instant};

use crate::schedule::{TaskId, TaskQueue};

/// Simulated latency between a valid submit and its success.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);
/// How long the success notice stays visible before auto-hiding.
pub const NOTICE_DURATION: Duration = Duration::from_millis(5000);

/// One of the four contact form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldId {
    pub const ALL: [FieldId; 4] = [FieldId::Name, FieldId::Email, FieldId::Subject, FieldId::Message];

    pub fn label(self) -> &'static str {
        match self {
            FieldId::Name => "Name",
            FieldId::Email => "Email",
            FieldId::Subject => "Subject",
            FieldId::Message => "Message",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Subject => "subject",
            FieldId::Message => "message",
        }
    }

    fn index(self) -> usize {
        match self {
            FieldId::Name => 0,
            FieldId::Email => 1,
            FieldId::Subject => 2,
            FieldId::Message => 3,
        }
    }
}

/// Every way a field can fail validation, with its fixed user-facing
/// message. Empty and malformed email are deliberately distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    EmptyName,
    EmptyEmail,
    MalformedEmail,
    EmptySubject,
    EmptyMessage,
}

impl FieldError {
    pub fn message(self) -> &'static str {
        match self {
            FieldError::EmptyName => "Please enter your name.",
            FieldError::EmptyEmail => "Please enter your email.",
            FieldError::MalformedEmail => "Please enter a valid email.",
            FieldError::EmptySubject => "Please enter a subject.",
            FieldError::EmptyMessage => "Please write your message.",
        }
    }
}

/// Lifecycle of a single submit attempt. At most one is in flight; the
/// submit control stays disabled for the whole `Submitting` span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormTask {
    CompleteSubmission,
    HideNotice,
}

/// The contact form: field values, field errors, submission state, and
/// the scheduled tasks driving the simulated submission.
#[derive(Debug, Default)]
pub struct ContactForm {
    values: [String; 4],
    errors: [Option<FieldError>; 4],
    state: SubmissionState,
    notice_visible: bool,
    hide_notice_task: Option<TaskId>,
    tasks: TaskQueue<FormTask>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FieldId) -> &str {
        &self.values[field.index()]
    }

    /// Current error for the field; `None` means the field is valid. The
    /// displayed message exists iff the field is invalid.
    pub fn error(&self, field: FieldId) -> Option<FieldError> {
        self.errors[field.index()]
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// The submit control is enabled whenever no submission is in flight.
    pub fn submit_enabled(&self) -> bool {
        !self.is_submitting()
    }

    pub fn notice_visible(&self) -> bool {
        self.notice_visible
    }

    /// Replaces the field's text and clears that field's error, leaving
    /// every other field's error state untouched.
    pub fn edit(&mut self, field: FieldId, value: impl Into<String>) {
        self.values[field.index()] = value.into();
        self.errors[field.index()] = None;
    }

    fn check(&self, field: FieldId) -> Option<FieldError> {
        let value = self.values[field.index()].trim();
        match field {
            FieldId::Name => value.is_empty().then_some(FieldError::EmptyName),
            FieldId::Email => {
                if value.is_empty() {
                    Some(FieldError::EmptyEmail)
                } else if !looks_like_email(value) {
                    Some(FieldError::MalformedEmail)
                } else {
                    None
                }
            }
            FieldId::Subject => value.is_empty().then_some(FieldError::EmptySubject),
            FieldId::Message => value.is_empty().then_some(FieldError::EmptyMessage),
        }
    }

    /// Re-evaluates every field: records an error for each failure and
    /// clears the error of each pass. Idempotent. Returns overall
    /// validity.
    pub fn validate_all(&mut self) -> bool {
        let mut all_valid = true;
        for field in FieldId::ALL {
            let error = self.check(field);
            all_valid &= error.is_none();
            self.errors[field.index()] = error;
        }
        all_valid
    }

    /// The submit action. A validation failure aborts with the errors
    /// left visible and no state transition. A valid submit starts the
    /// simulated sequence; re-entry while one is in flight is refused.
    /// Returns whether a submission started.
    pub fn submit(&mut self, now: Instant) -> bool {
        if self.is_submitting() {
            return false;
        }
        if !self.validate_all() {
            tracing::debug!("contact form submit blocked by validation");
            return false;
        }

        // A fresh attempt supersedes a still-visible success notice.
        if let Some(id) = self.hide_notice_task.take() {
            self.tasks.cancel(id);
            self.notice_visible = false;
        }

        self.state = SubmissionState::Submitting;
        self.tasks.schedule(now + SUBMIT_DELAY, FormTask::CompleteSubmission);
        tracing::debug!("contact form submission started");
        true
    }

    /// Drives the scheduled transitions; called whenever the UI loop
    /// runs. Once `Submitting` begins the sequence always runs to
    /// completion, there is no abort path.
    pub fn tick(&mut self, now: Instant) {
        for task in self.tasks.poll(now) {
            match task {
                FormTask::CompleteSubmission => {
                    self.state = SubmissionState::Succeeded;
                    for value in &mut self.values {
                        value.clear();
                    }
                    self.errors = [None; 4];
                    self.notice_visible = true;
                    self.hide_notice_task =
                        Some(self.tasks.schedule(now + NOTICE_DURATION, FormTask::HideNotice));
                    tracing::debug!("contact form submission succeeded");
                }
                FormTask::HideNotice => {
                    self.notice_visible = false;
                    self.hide_notice_task = None;
                    self.state = SubmissionState::Idle;
                }
            }
        }
    }

    /// Earliest pending transition, used to schedule the next repaint.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.tasks.next_deadline()
    }
}

/// Matches the original `local@domain.tld` shape: one or more characters
/// that are neither whitespace nor `@`, a literal `@`, one or more such
/// characters, a literal `.`, and one or more such characters.
pub fn looks_like_email(value: &str) -> bool {
    fn plain(part: &str) -> bool {
        !part.is_empty() && part.chars().all(|c| !c.is_whitespace() && c != '@')
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    plain(local) && plain(host) && plain(tld)
}

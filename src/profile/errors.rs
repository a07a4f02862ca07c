//! Classification errors

use serde::Serialize;
use thiserror::Error;

/// Machine-readable discriminant of a conformance violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The subject is described through a borrow instead of as an owned type.
    BorrowedSubject,
    /// The subject never claims the mark for itself.
    MissingSelfClaim,
    /// The subject claims a mark for some other type.
    ForeignClaim,
    /// The subject claims its own mark more than once.
    DuplicateClaim,
    /// The subject is itself a sequence.
    SubjectIsSequence,
    /// The subject accepts no sequence type at all.
    NoSequenceInput,
}

impl ErrorCode {
    /// Stable lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::BorrowedSubject => "borrowed_subject",
            ErrorCode::MissingSelfClaim => "missing_self_claim",
            ErrorCode::ForeignClaim => "foreign_claim",
            ErrorCode::DuplicateClaim => "duplicate_claim",
            ErrorCode::SubjectIsSequence => "subject_is_sequence",
            ErrorCode::NoSequenceInput => "no_sequence_input",
        }
    }
}

/// A single conformance violation against one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{}: {} ({})", .code.as_str(), .message, .subject)]
pub struct ClaimError {
    /// Violation discriminant.
    pub code: ErrorCode,
    /// Name of the described type.
    pub subject: String,
    /// Human-readable description.
    pub message: String,
    /// Optional remediation hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ClaimError {
    /// Create a new violation for `subject`.
    pub fn new(code: ErrorCode, subject: impl Into<String>, message: impl Into<String>) -> Self {
        ClaimError {
            code,
            subject: subject.into(),
            message: message.into(),
            hint: None,
        }
    }

    /// Attach a remediation hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

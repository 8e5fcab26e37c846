use thiserror::Error;

use crate::api::{ControlValidationError, DanglingReference, DefaultIssue, RepeatedReference};

pub type ControlResult<T> = Result<T, ControlError>;

#[derive(Debug, Error)]
pub enum ControlError {
    #[error("unknown control `{0}`")]
    UnknownControl(String),

    #[error("unknown visualization type `{0}`")]
    UnknownVisType(String),

    #[error("control `{0}` is already defined")]
    DuplicateControl(String),

    #[error("visualization type `{0}` is already defined")]
    DuplicateVisType(String),

    #[error("{} dangling control reference(s): {}", .0.len(), join_display(.0))]
    DanglingReferences(Vec<DanglingReference>),

    #[error("{} control(s) repeated within a row: {}", .0.len(), join_display(.0))]
    RepeatedReferences(Vec<RepeatedReference>),

    #[error("{} invalid default value(s): {}", .0.len(), join_display(.0))]
    InvalidDefaults(Vec<DefaultIssue>),

    #[error("{} control(s) failed validation: {}", .0.len(), join_display(.0))]
    InvalidControls(Vec<ControlValidationError>),

    #[error("unknown control type tag `{0}`")]
    UnknownControlKind(String),

    #[error("unknown validator `{0}`")]
    UnknownValidator(String),

    #[error("invalid plural expression `{expression}`: {reason}")]
    InvalidPluralRule { expression: String, reason: String },

    #[error("unknown locale `{0}`")]
    UnknownLocale(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

fn join_display<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::messages;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A field the form requires before a case may be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RequiredField {
    Name,
    Age,
    Gender,
    Email,
    Number,
    Image,
}

impl RequiredField {
    /// Every required field, in form order.
    pub const ALL: [RequiredField; 6] = [
        RequiredField::Name,
        RequiredField::Age,
        RequiredField::Gender,
        RequiredField::Email,
        RequiredField::Number,
        RequiredField::Image,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequiredField::Name => "name",
            RequiredField::Age => "age",
            RequiredField::Gender => "gender",
            RequiredField::Email => "email",
            RequiredField::Number => "number",
            RequiredField::Image => "image",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client-side rejection of user input. Always recoverable: the user
/// corrects the input and tries again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required fields: {}", join_fields(fields))]
    MissingFields { fields: Vec<RequiredField> },

    #[error("unknown case field: {0:?}")]
    UnknownField(String),

    #[error("unsupported gender: {0:?}")]
    InvalidGender(String),

    #[error("unsupported image type: {file_name:?}")]
    UnsupportedImage { file_name: String },

    #[error("no image selected")]
    NoImageSelected,
}

impl ValidationError {
    /// Text shown to the user in a transient notification.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::MissingFields { .. }
            | ValidationError::UnknownField(_)
            | ValidationError::InvalidGender(_) => messages::FILL_ALL_FIELDS,
            ValidationError::UnsupportedImage { .. } | ValidationError::NoImageSelected => {
                messages::UNSUPPORTED_IMAGE
            }
        }
    }
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(RequiredField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

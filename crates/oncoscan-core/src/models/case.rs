use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{RequiredField, ValidationError};
use crate::models::image::CaseImage;

/// The closed set of genders the intake form offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("male") {
            Ok(Gender::Male)
        } else if trimmed.eq_ignore_ascii_case("female") {
            Ok(Gender::Female)
        } else {
            Err(ValidationError::InvalidGender(s.to_string()))
        }
    }
}

/// One of the free-text inputs on the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CaseField {
    Name,
    Age,
    Gender,
    Email,
    /// Phone number. Named after its wire key.
    Number,
}

impl CaseField {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseField::Name => "name",
            CaseField::Age => "age",
            CaseField::Gender => "gender",
            CaseField::Email => "email",
            CaseField::Number => "number",
        }
    }
}

impl fmt::Display for CaseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(CaseField::Name),
            "age" => Ok(CaseField::Age),
            "gender" => Ok(CaseField::Gender),
            "email" => Ok(CaseField::Email),
            "number" | "phone" | "phoneNumber" => Ok(CaseField::Number),
            other => Err(ValidationError::UnknownField(other.to_string())),
        }
    }
}

impl From<CaseField> for RequiredField {
    fn from(field: CaseField) -> Self {
        match field {
            CaseField::Name => RequiredField::Name,
            CaseField::Age => RequiredField::Age,
            CaseField::Gender => RequiredField::Gender,
            CaseField::Email => RequiredField::Email,
            CaseField::Number => RequiredField::Number,
        }
    }
}

/// The case record as the user is editing it.
///
/// Values are kept exactly as typed; nothing is checked until
/// [`CaseDraft::validate`] runs at submit time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseDraft {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub email: String,
    pub number: String,
    pub image: Option<CaseImage>,
}

impl CaseDraft {
    pub fn get(&self, field: CaseField) -> &str {
        match field {
            CaseField::Name => &self.name,
            CaseField::Age => &self.age,
            CaseField::Gender => &self.gender,
            CaseField::Email => &self.email,
            CaseField::Number => &self.number,
        }
    }

    /// Overwrite one field, leaving the others untouched.
    pub fn set(&mut self, field: CaseField, value: impl Into<String>) {
        let slot = match field {
            CaseField::Name => &mut self.name,
            CaseField::Age => &mut self.age,
            CaseField::Gender => &mut self.gender,
            CaseField::Email => &mut self.email,
            CaseField::Number => &mut self.number,
        };
        *slot = value.into();
    }

    /// Required fields that are still empty, in form order.
    /// Whitespace-only text counts as empty.
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        RequiredField::ALL
            .into_iter()
            .filter(|field| match field {
                RequiredField::Name => self.name.trim().is_empty(),
                RequiredField::Age => self.age.trim().is_empty(),
                RequiredField::Gender => self.gender.trim().is_empty(),
                RequiredField::Email => self.email.trim().is_empty(),
                RequiredField::Number => self.number.trim().is_empty(),
                RequiredField::Image => self.image.is_none(),
            })
            .collect()
    }

    /// Check that every field is present and produce the submission.
    pub fn validate(&self) -> Result<CaseSubmission, ValidationError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields { fields: missing });
        }

        let gender = self.gender.parse::<Gender>()?;
        let Some(image) = self.image.clone() else {
            return Err(ValidationError::MissingFields {
                fields: vec![RequiredField::Image],
            });
        };

        Ok(CaseSubmission {
            name: self.name.trim().to_string(),
            age: self.age.trim().to_string(),
            gender,
            email: self.email.trim().to_string(),
            number: self.number.trim().to_string(),
            image,
        })
    }
}

/// A complete, validated case ready to be sent for prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseSubmission {
    pub name: String,
    pub age: String,
    pub gender: Gender,
    pub email: String,
    pub number: String,
    pub image: CaseImage,
}

impl CaseSubmission {
    /// The text parts of the multipart payload, keyed by wire name.
    pub fn text_fields(&self) -> [(&'static str, String); 5] {
        [
            ("name", self.name.clone()),
            ("age", self.age.clone()),
            ("gender", self.gender.to_string()),
            ("email", self.email.clone()),
            ("number", self.number.clone()),
        ]
    }
}

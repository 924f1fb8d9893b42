use std::{str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::Deserialize;
use validator::Validate;

use crate::{ProjectType, ValidationError};

static RE_EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Contact form payload exactly as the front end posts it.
///
/// Every field is optional here so that a missing or `null` field is reported
/// as a validation failure instead of a decoding failure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub project_type: Option<String>,
}

/// A validated contact request. Only constructed through `TryFrom<ContactForm>`.
///
/// Values are kept exactly as submitted; whitespace only matters for the
/// required-field check.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct ContactSubmission {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    #[validate(
        custom(function = "validate_not_blank"),
        regex(path = *RE_EMAIL_SHAPE, code = "email_shape")
    )]
    pub email: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub subject: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub message: String,
    /// Shown verbatim in the notification. `None` when absent or empty.
    pub project_type: Option<String>,
}

impl ContactSubmission {
    /// The project type when it names one of the form's categories.
    pub fn known_project_type(&self) -> Option<ProjectType> {
        self.project_type
            .as_deref()
            .and_then(|value| ProjectType::from_str(value).ok())
    }
}

impl TryFrom<ContactForm> for ContactSubmission {
    type Error = ValidationError;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        let submission = Self {
            name: form.name.unwrap_or_default(),
            email: form.email.unwrap_or_default(),
            subject: form.subject.unwrap_or_default(),
            message: form.message.unwrap_or_default(),
            project_type: form.project_type.filter(|value| !value.is_empty()),
        };

        submission.validate()?;

        Ok(submission)
    }
}

fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("required"));
    }

    Ok(())
}

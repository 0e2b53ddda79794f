//! Accumulated validation failures keyed by field path.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::path::FieldPath;

/// A single violated rule.
///
/// `Display` yields the human-readable message shown next to the offending
/// field; [`Violation::code`] yields the stable machine-readable identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    /// The name was empty once trimmed.
    #[error("name is required")]
    NameRequired,
    /// The email was empty.
    #[error("email is required")]
    EmailRequired,
    /// The email does not look like an address.
    #[error("invalid email format")]
    EmailInvalid,
    /// The email does not carry the organisation suffix.
    #[error("email must belong to the organisation domain")]
    EmailWrongDomain,
    /// The password has fewer characters than the minimum.
    #[error("password must be at least {min} characters")]
    PasswordTooShort {
        /// Required minimum length.
        min: usize,
    },
    /// The technology list is shorter than the minimum.
    #[error("at least {min} technologies are required")]
    TooFewTechs {
        /// Required minimum entry count.
        min: usize,
    },
    /// No technology scores above the learning ceiling.
    #[error("still learning: no technology above knowledge {ceiling}")]
    StillLearning {
        /// Highest score that still counts as learning.
        ceiling: u32,
    },
    /// A technology title was empty once trimmed.
    #[error("title is required")]
    TitleRequired,
    /// A knowledge score failed to coerce into the accepted range.
    #[error("knowledge must be between {min} and {max}")]
    KnowledgeOutOfRange {
        /// Lowest accepted score.
        min: u32,
        /// Highest accepted score.
        max: u32,
    },
}

impl Violation {
    /// Stable machine-readable code for adapters and logs.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NameRequired => "name_required",
            Self::EmailRequired => "email_required",
            Self::EmailInvalid => "email_invalid",
            Self::EmailWrongDomain => "email_wrong_domain",
            Self::PasswordTooShort { .. } => "password_too_short",
            Self::TooFewTechs { .. } => "too_few_techs",
            Self::StillLearning { .. } => "still_learning",
            Self::TitleRequired => "title_required",
            Self::KnowledgeOutOfRange { .. } => "knowledge_out_of_range",
        }
    }
}

/// One violated rule attached to the field it occurred on.
///
/// Serialises as `{ "path": ..., "code": ..., "message": ... }` so inline
/// error displays need no knowledge of the rule enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "FieldErrorDto")]
pub struct FieldError {
    path: FieldPath,
    violation: Violation,
}

impl FieldError {
    pub(crate) const fn new(path: FieldPath, violation: Violation) -> Self {
        Self { path, violation }
    }

    /// Field the rule was violated on.
    #[must_use]
    pub const fn path(&self) -> FieldPath {
        self.path
    }

    /// The violated rule.
    #[must_use]
    pub const fn violation(&self) -> Violation {
        self.violation
    }

    /// Human-readable message for inline display.
    #[must_use]
    pub fn message(&self) -> String {
        self.violation.to_string()
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.violation)
    }
}

#[derive(Debug, Clone, Serialize)]
struct FieldErrorDto {
    path: String,
    code: &'static str,
    message: String,
}

impl From<FieldError> for FieldErrorDto {
    fn from(value: FieldError) -> Self {
        Self {
            path: value.path.to_string(),
            code: value.violation.code(),
            message: value.message(),
        }
    }
}

/// Every rule violated by one submit attempt, in field order.
///
/// The report is both an ordered sequence (for rendering all errors) and a
/// path-keyed lookup (for rendering the error adjacent to one field). An
/// empty report is never returned from validation; rejection always carries
/// at least one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    /// An empty report.
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub(crate) fn push(&mut self, path: FieldPath, violation: Violation) {
        self.errors.push(FieldError::new(path, violation));
    }

    /// `true` when no rule was violated.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of violated rules.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.errors.len()
    }

    /// Errors in accumulation order.
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    /// First error recorded for the given field, if any.
    #[must_use]
    pub fn first_for(&self, path: FieldPath) -> Option<&FieldError> {
        self.errors.iter().find(|error| error.path() == path)
    }

    /// Display message for the given field, if it has an error.
    #[must_use]
    pub fn message_for(&self, path: FieldPath) -> Option<String> {
        self.first_for(path).map(FieldError::message)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

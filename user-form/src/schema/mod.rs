//! Declarative validation engine for the create-user draft.
//!
//! Purpose: evaluate a raw [`UserDraft`] against the fixed field rules and
//! collection refinements, accumulating every violated field into one
//! [`ValidationReport`] rather than stopping at the first failure. On success
//! the engine returns the fully normalised [`UserRecord`].
//!
//! Public surface:
//! - [`UserSchema`] — the rule set; [`UserSchema::validate`] is the single
//!   entry point.
//! - [`FieldPath`], [`Violation`], [`FieldError`], [`ValidationReport`] —
//!   the structured failure side.

mod path;
mod report;
mod rules;

pub use path::FieldPath;
pub use report::{FieldError, ValidationReport, Violation};

use crate::domain::{ORGANISATION_EMAIL_SUFFIX, TechEntry, UserDraft, UserRecord};

/// Convenient validation result alias.
pub type ValidationResult = Result<UserRecord, ValidationReport>;

/// The create-user rule set.
///
/// `Default` carries the standard organisation email suffix; deployments
/// validating against another domain construct the schema with
/// [`UserSchema::with_email_suffix`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSchema {
    email_suffix: String,
}

impl Default for UserSchema {
    fn default() -> Self {
        Self {
            email_suffix: ORGANISATION_EMAIL_SUFFIX.to_owned(),
        }
    }
}

impl UserSchema {
    /// Schema with the standard organisation suffix.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schema validating emails against a custom suffix.
    #[must_use]
    pub fn with_email_suffix(suffix: impl Into<String>) -> Self {
        Self {
            email_suffix: suffix.into(),
        }
    }

    /// Suffix every accepted email must end with.
    #[must_use]
    pub fn email_suffix(&self) -> &str {
        &self.email_suffix
    }

    /// Evaluate a raw draft.
    ///
    /// Field rules run independently and their failures accumulate; within a
    /// single field the rule chain stops at the first violation. Collection
    /// refinements over the technology list run unconditionally, so an
    /// under-length list can surface both the minimum-count and the
    /// still-learning violations in one report.
    ///
    /// # Errors
    ///
    /// Returns the accumulated [`ValidationReport`] when any rule is
    /// violated; the report orders errors name, email, password, per-row
    /// (title before knowledge), then collection refinements.
    pub fn validate(&self, draft: &UserDraft) -> ValidationResult {
        let mut report = ValidationReport::new();

        let valid_name = collect(&mut report, FieldPath::Name, rules::normalise_name(&draft.name));
        let valid_email = collect(
            &mut report,
            FieldPath::Email,
            rules::normalise_email(&draft.email, &self.email_suffix),
        );
        let valid_password = collect(
            &mut report,
            FieldPath::Password,
            rules::check_password(&draft.password),
        );

        let mut entries: Vec<Option<TechEntry>> = Vec::with_capacity(draft.techs.len());
        for (index, tech) in draft.techs.iter().enumerate() {
            let title = collect(
                &mut report,
                FieldPath::TechTitle { index },
                rules::check_title(&tech.title),
            );
            let knowledge = collect(
                &mut report,
                FieldPath::TechKnowledge { index },
                rules::coerce_knowledge(&tech.knowledge),
            );
            entries.push(title.zip(knowledge).map(|(t, k)| TechEntry::new(t, k)));
        }

        if let Err(violation) = rules::check_tech_count(&draft.techs) {
            report.push(FieldPath::Techs, violation);
        }
        if let Err(violation) = rules::check_confidence(&draft.techs) {
            report.push(FieldPath::Techs, violation);
        }

        let valid_techs: Option<Vec<TechEntry>> = entries.into_iter().collect();
        match (valid_name, valid_email, valid_password, valid_techs) {
            (Some(name), Some(email), Some(password), Some(techs)) if report.is_empty() => {
                Ok(UserRecord::new(name, email, password, techs))
            }
            _ => Err(report),
        }
    }
}

/// Record a failed rule against its field, passing successes through.
fn collect<T>(
    report: &mut ValidationReport,
    path: FieldPath,
    outcome: Result<T, Violation>,
) -> Option<T> {
    match outcome {
        Ok(value) => Some(value),
        Err(violation) => {
            report.push(path, violation);
            None
        }
    }
}

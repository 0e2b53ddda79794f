//! Behavioural core of the "create user" form.
//!
//! This crate implements the two halves of the form flow without any UI or
//! transport concerns:
//!
//! - [`schema`] — a declarative validation engine. Given a raw draft it
//!   either produces a fully normalised [`UserRecord`] or an accumulated,
//!   path-keyed [`ValidationReport`] suitable for inline display.
//! - [`form`] — the interaction controller. It owns the live draft,
//!   manages the variable-length technology list under stable entry keys,
//!   and runs validation on submit.
//!
//! # Example
//!
//! ```
//! use user_form::{FormController, SubmitOutcome};
//!
//! let mut form = FormController::new();
//! form.set_name("  ana maria ");
//! form.set_email("ANA@ROCKETSEAT.COM");
//! form.set_password("123456");
//!
//! let react = form.add_tech();
//! form.set_tech_title(react, "react");
//! form.set_tech_knowledge(react, "80");
//!
//! let node = form.add_tech();
//! form.set_tech_title(node, "node");
//! form.set_tech_knowledge(node, "30");
//!
//! assert_eq!(form.submit(), SubmitOutcome::Accepted);
//! let record = form.accepted().expect("accepted record");
//! assert_eq!(record.name(), "Ana Maria");
//! assert_eq!(record.email(), "ana@rocketseat.com");
//! ```

pub mod domain;
pub mod form;
pub mod schema;

pub use domain::{
    KNOWLEDGE_LEARNING_MAX, KNOWLEDGE_MAX, KNOWLEDGE_MIN, ORGANISATION_EMAIL_SUFFIX,
    PASSWORD_MIN, TECHS_MIN, TechDraft, TechEntry, UserDraft, UserRecord,
};
pub use form::{FormController, FormEvent, SubmitOutcome, TechKey};
pub use schema::{
    FieldError, FieldPath, UserSchema, ValidationReport, ValidationResult, Violation,
};

//! Domain types for the create-user form.
//!
//! Purpose: define the raw draft shape edited by the form controller and the
//! normalised record produced by the validation engine. Keep normalised types
//! immutable and document invariants and serialisation contracts (serde) in
//! each type's Rustdoc.
//!
//! Public surface:
//! - [`UserDraft`] / [`TechDraft`] — raw, unvalidated field values.
//! - [`UserRecord`] / [`TechEntry`] — normalised output, invariants enforced
//!   by the schema engine.
//! - Rule constants shared by the engine and its callers.

mod draft;
mod record;
#[cfg(test)]
mod tests;

pub use draft::{TechDraft, UserDraft};
pub use record::{TechEntry, UserRecord};

/// Minimum password length, counted in characters.
pub const PASSWORD_MIN: usize = 6;

/// Minimum number of technology entries required at submission time.
pub const TECHS_MIN: usize = 2;

/// Lowest accepted knowledge score.
pub const KNOWLEDGE_MIN: u32 = 1;

/// Highest accepted knowledge score.
pub const KNOWLEDGE_MAX: u32 = 100;

/// Knowledge at or below this value counts as "still learning". At least one
/// entry must score above it for a draft to be accepted.
pub const KNOWLEDGE_LEARNING_MAX: u32 = 50;

/// Email suffix every account must belong to.
pub const ORGANISATION_EMAIL_SUFFIX: &str = "@rocketseat.com";

//! Normalised record types produced by the validation engine.

use serde::Serialize;

/// A validated technology entry.
///
/// ## Invariants
/// - `title` is non-empty once trimmed of whitespace.
/// - `knowledge` lies within `[KNOWLEDGE_MIN, KNOWLEDGE_MAX]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechEntry {
    title: String,
    knowledge: u32,
}

impl TechEntry {
    /// Build an entry from components the schema engine has already checked.
    pub(crate) const fn new(title: String, knowledge: u32) -> Self {
        Self { title, knowledge }
    }

    /// Technology name, stored verbatim from the draft.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Knowledge score in `[1, 100]`.
    #[must_use]
    pub const fn knowledge(&self) -> u32 {
        self.knowledge
    }
}

/// A fully normalised user record.
///
/// Serialises with the display field order: name, email, password, techs.
///
/// ## Invariants
/// - `name` is capitalised per word and single-space separated.
/// - `email` is lowercase, well-formed, and carries the organisation suffix.
/// - `password` has at least `PASSWORD_MIN` characters.
/// - `techs` has at least `TECHS_MIN` entries, one scoring above
///   `KNOWLEDGE_LEARNING_MAX`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    name: String,
    email: String,
    password: String,
    techs: Vec<TechEntry>,
}

impl UserRecord {
    /// Build a record from components the schema engine has already checked.
    pub(crate) const fn new(
        name: String,
        email: String,
        password: String,
        techs: Vec<TechEntry>,
    ) -> Self {
        Self {
            name,
            email,
            password,
            techs,
        }
    }

    /// Normalised display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lowercased organisation email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Password as submitted.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Technology entries in display order.
    #[must_use]
    pub fn techs(&self) -> &[TechEntry] {
        &self.techs
    }
}

//! Events emitted by the form controller.
//!
//! Observers receive these synchronously after each mutation and re-read the
//! controller snapshot for the new state; events deliberately carry only
//! enough detail to decide what to re-read.

use crate::schema::FieldPath;

use super::TechKey;

/// A change notification from the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// A raw field value changed.
    DraftEdited {
        /// Field that changed, technology rows addressed positionally.
        path: FieldPath,
    },
    /// A technology row was appended.
    TechAdded {
        /// Stable key of the new row.
        key: TechKey,
    },
    /// A technology row was removed.
    TechRemoved {
        /// Stable key of the removed row.
        key: TechKey,
    },
    /// A submit attempt passed validation; the accepted record is readable.
    SubmitAccepted,
    /// A submit attempt failed validation; the error map is readable.
    SubmitRejected {
        /// Number of violated rules in the stored report.
        errors: usize,
    },
}

/// Outcome of one submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The draft validated; the normalised record was stored.
    Accepted,
    /// The draft was rejected; the error map was stored.
    Rejected,
}

impl SubmitOutcome {
    /// `true` for [`SubmitOutcome::Accepted`].
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

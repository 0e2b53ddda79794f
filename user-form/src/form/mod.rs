//! Form interaction controller.
//!
//! Purpose: own the live draft for one form session, keep the
//! variable-length technology list addressable by stable keys, and run the
//! schema engine on submit. All operations are synchronous; validation
//! failures never escape as errors, they become the displayable report.
//!
//! Public surface:
//! - [`FormController`] — draft ownership, list management, submit.
//! - [`TechKey`] — stable identity for one technology row.
//! - [`FormEvent`] / [`SubmitOutcome`] — change notifications and submit
//!   results.

use std::fmt;

use tracing::debug;

use crate::domain::{TechDraft, UserDraft, UserRecord};
use crate::schema::{FieldPath, UserSchema, ValidationReport};

mod events;

pub use events::{FormEvent, SubmitOutcome};

/// Stable identity of one technology row.
///
/// Keys are generated monotonically per controller and never reused, so a
/// key stays valid across removals of other rows and never aliases a later
/// addition. Row positions shift; keys do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TechKey(u64);

impl fmt::Display for TechKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tech-{}", self.0)
    }
}

/// One keyed technology row.
struct TechSlot {
    key: TechKey,
    draft: TechDraft,
}

type Observer = Box<dyn FnMut(&FormEvent)>;

/// Owns the editable draft for one form session.
///
/// The controller is single-threaded and event-driven: every mutation runs
/// to completion, notifies subscribers, and returns. Submitting mid-edit
/// simply validates the current snapshot.
pub struct FormController {
    schema: UserSchema,
    name: String,
    email: String,
    password: String,
    techs: Vec<TechSlot>,
    next_key: u64,
    errors: ValidationReport,
    accepted: Option<UserRecord>,
    observers: Vec<Observer>,
}

impl Default for FormController {
    fn default() -> Self {
        Self::with_schema(UserSchema::default())
    }
}

impl FormController {
    /// Controller over an empty draft and the standard schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller over an empty draft and the given schema.
    #[must_use]
    pub fn with_schema(schema: UserSchema) -> Self {
        Self {
            schema,
            name: String::new(),
            email: String::new(),
            password: String::new(),
            techs: Vec::new(),
            next_key: 0,
            errors: ValidationReport::new(),
            accepted: None,
            observers: Vec::new(),
        }
    }

    /// Register a change observer for the lifetime of this controller.
    pub fn subscribe(&mut self, observer: impl FnMut(&FormEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Update the raw name value.
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
        self.notify(FormEvent::DraftEdited {
            path: FieldPath::Name,
        });
    }

    /// Update the raw email value.
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
        self.notify(FormEvent::DraftEdited {
            path: FieldPath::Email,
        });
    }

    /// Update the raw password value.
    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
        self.notify(FormEvent::DraftEdited {
            path: FieldPath::Password,
        });
    }

    /// Append a blank technology row and return its stable key.
    pub fn add_tech(&mut self) -> TechKey {
        let key = TechKey(self.next_key);
        self.next_key += 1;
        self.techs.push(TechSlot {
            key,
            draft: TechDraft::default(),
        });
        debug!(%key, "technology row added");
        self.notify(FormEvent::TechAdded { key });
        key
    }

    /// Remove the row with the given key.
    ///
    /// Returns `false` without notifying when the key is not present.
    /// Surviving rows keep their keys; only their positions shift.
    pub fn remove_tech(&mut self, key: TechKey) -> bool {
        let Some(index) = self.position_of(key) else {
            return false;
        };
        self.techs.remove(index);
        debug!(%key, "technology row removed");
        self.notify(FormEvent::TechRemoved { key });
        true
    }

    /// Update the raw title of the row with the given key.
    ///
    /// Returns `false` without notifying when the key is not present.
    pub fn set_tech_title(&mut self, key: TechKey, value: impl Into<String>) -> bool {
        let Some(index) = self.position_of(key) else {
            return false;
        };
        let Some(slot) = self.techs.get_mut(index) else {
            return false;
        };
        slot.draft.title = value.into();
        self.notify(FormEvent::DraftEdited {
            path: FieldPath::TechTitle { index },
        });
        true
    }

    /// Update the raw knowledge score of the row with the given key.
    ///
    /// Returns `false` without notifying when the key is not present.
    pub fn set_tech_knowledge(&mut self, key: TechKey, value: impl Into<String>) -> bool {
        let Some(index) = self.position_of(key) else {
            return false;
        };
        let Some(slot) = self.techs.get_mut(index) else {
            return false;
        };
        slot.draft.knowledge = value.into();
        self.notify(FormEvent::DraftEdited {
            path: FieldPath::TechKnowledge { index },
        });
        true
    }

    /// Snapshot of the raw draft in display order.
    #[must_use]
    pub fn draft(&self) -> UserDraft {
        UserDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            techs: self.techs.iter().map(|slot| slot.draft.clone()).collect(),
        }
    }

    /// Row keys in display order.
    pub fn tech_keys(&self) -> impl Iterator<Item = TechKey> + '_ {
        self.techs.iter().map(|slot| slot.key)
    }

    /// Validate the current snapshot.
    ///
    /// Acceptance stores the normalised record and clears the error map.
    /// Rejection stores the report and leaves any previously accepted output
    /// in place, so the last successful dump stays displayable.
    pub fn submit(&mut self) -> SubmitOutcome {
        let snapshot = self.draft();
        match self.schema.validate(&snapshot) {
            Ok(record) => {
                debug!(name = record.name(), "submission accepted");
                self.errors = ValidationReport::new();
                self.accepted = Some(record);
                self.notify(FormEvent::SubmitAccepted);
                SubmitOutcome::Accepted
            }
            Err(report) => {
                let count = report.len();
                debug!(errors = count, "submission rejected");
                self.errors = report;
                self.notify(FormEvent::SubmitRejected { errors: count });
                SubmitOutcome::Rejected
            }
        }
    }

    /// The record accepted by the most recent successful submit.
    #[must_use]
    pub const fn accepted(&self) -> Option<&UserRecord> {
        self.accepted.as_ref()
    }

    /// Pretty-printed JSON dump of the accepted record, the display payload.
    #[must_use]
    pub fn output_json(&self) -> Option<String> {
        self.accepted
            .as_ref()
            .and_then(|record| serde_json::to_string_pretty(record).ok())
    }

    /// Error map from the most recent rejected submit.
    #[must_use]
    pub const fn errors(&self) -> &ValidationReport {
        &self.errors
    }

    /// Inline display message for one field, if it has an error.
    #[must_use]
    pub fn error_message(&self, path: FieldPath) -> Option<String> {
        self.errors.message_for(path)
    }

    fn position_of(&self, key: TechKey) -> Option<usize> {
        self.techs.iter().position(|slot| slot.key == key)
    }

    fn notify(&mut self, event: FormEvent) {
        for observer in &mut self.observers {
            observer(&event);
        }
    }
}

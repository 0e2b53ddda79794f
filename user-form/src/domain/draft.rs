//! Raw draft values as edited by the form controller.
//!
//! Draft fields hold whatever the user typed, including the knowledge score,
//! which stays a string until the schema engine coerces it. Nothing here is
//! validated; the engine owns every rule.

use serde::{Deserialize, Serialize};

/// One unvalidated technology row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechDraft {
    /// Technology name as typed.
    pub title: String,
    /// Knowledge score as typed; coerced to a number during validation.
    pub knowledge: String,
}

impl Default for TechDraft {
    /// The row appended by the controller's add action: empty title, score 0.
    fn default() -> Self {
        Self {
            title: String::new(),
            knowledge: "0".to_owned(),
        }
    }
}

/// The full unvalidated record, one field per form control.
///
/// `Default` mirrors the freshly mounted form: empty strings and no
/// technology rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    /// Name as typed.
    pub name: String,
    /// Email as typed.
    pub email: String,
    /// Password as typed.
    pub password: String,
    /// Technology rows in display order.
    pub techs: Vec<TechDraft>,
}

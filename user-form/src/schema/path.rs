//! Field locators used to key validation errors.

use std::fmt;

/// Locates the form field an error belongs to.
///
/// Technology rows are addressed positionally, in draft display order, so the
/// rendered path matches what an inline error display expects:
/// `techs[1].title`, `techs[0].knowledge`, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPath {
    /// The name input.
    Name,
    /// The email input.
    Email,
    /// The password input.
    Password,
    /// The technology collection as a whole.
    Techs,
    /// The title input of one technology row.
    TechTitle {
        /// Zero-based row position in display order.
        index: usize,
    },
    /// The knowledge input of one technology row.
    TechKnowledge {
        /// Zero-based row position in display order.
        index: usize,
    },
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => f.write_str("name"),
            Self::Email => f.write_str("email"),
            Self::Password => f.write_str("password"),
            Self::Techs => f.write_str("techs"),
            Self::TechTitle { index } => write!(f, "techs[{index}].title"),
            Self::TechKnowledge { index } => write!(f, "techs[{index}].knowledge"),
        }
    }
}

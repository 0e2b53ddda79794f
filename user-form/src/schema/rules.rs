//! Per-field validators and normalising transforms.
//!
//! Each rule takes a raw draft value and yields either the normalised value
//! or the single violation for that field. Rule chains within a field stop at
//! the first failure; accumulation across fields happens in the engine.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::{
    KNOWLEDGE_LEARNING_MAX, KNOWLEDGE_MAX, KNOWLEDGE_MIN, PASSWORD_MIN, TECHS_MIN, TechDraft,
};

use super::report::Violation;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Single @, non-empty local part, dotted domain, no whitespace.
        let pattern = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Trim, collapse whitespace runs, and capitalise the first letter of each
/// word. Rejects names that are empty once trimmed.
///
/// Splitting on whitespace runs means consecutive spaces can never produce an
/// empty token, so capitalisation is total.
pub(super) fn normalise_name(raw: &str) -> Result<String, Violation> {
    if raw.trim().is_empty() {
        return Err(Violation::NameRequired);
    }
    let words: Vec<String> = raw.split_whitespace().map(capitalise).collect();
    Ok(words.join(" "))
}

fn capitalise(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        let mut out = String::with_capacity(word.len());
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
        out
    })
}

/// Lowercase the email, then check syntax and the organisation suffix.
///
/// The lowercase transform runs before the suffix check, so uppercase input
/// against a lowercase suffix still matches.
pub(super) fn normalise_email(raw: &str, suffix: &str) -> Result<String, Violation> {
    if raw.is_empty() {
        return Err(Violation::EmailRequired);
    }
    let lowered = raw.to_lowercase();
    if !email_regex().is_match(&lowered) {
        return Err(Violation::EmailInvalid);
    }
    if !lowered.ends_with(suffix) {
        return Err(Violation::EmailWrongDomain);
    }
    Ok(lowered)
}

/// Require at least [`PASSWORD_MIN`] characters. The password is otherwise
/// passed through untouched.
pub(super) fn check_password(raw: &str) -> Result<String, Violation> {
    if raw.chars().count() < PASSWORD_MIN {
        return Err(Violation::PasswordTooShort { min: PASSWORD_MIN });
    }
    Ok(raw.to_owned())
}

/// Require a non-blank title. The stored value is the raw title, verbatim.
pub(super) fn check_title(raw: &str) -> Result<String, Violation> {
    if raw.trim().is_empty() {
        return Err(Violation::TitleRequired);
    }
    Ok(raw.to_owned())
}

/// Coerce a raw knowledge score into `[KNOWLEDGE_MIN, KNOWLEDGE_MAX]`.
///
/// Input that does not parse as an integer folds into the out-of-range
/// violation, mirroring coerce-then-min/max semantics.
pub(super) fn coerce_knowledge(raw: &str) -> Result<u32, Violation> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|score| (KNOWLEDGE_MIN..=KNOWLEDGE_MAX).contains(score))
        .ok_or(Violation::KnowledgeOutOfRange {
            min: KNOWLEDGE_MIN,
            max: KNOWLEDGE_MAX,
        })
}

/// Collection refinement: the list must hold at least [`TECHS_MIN`] rows.
pub(super) fn check_tech_count(techs: &[TechDraft]) -> Result<(), Violation> {
    if techs.len() < TECHS_MIN {
        return Err(Violation::TooFewTechs { min: TECHS_MIN });
    }
    Ok(())
}

/// Collection refinement: at least one row must score above
/// [`KNOWLEDGE_LEARNING_MAX`].
///
/// Evaluated over raw drafts so it never depends on per-row validity; a row
/// whose score does not parse counts as still learning. Safe on an empty or
/// under-length list.
pub(super) fn check_confidence(techs: &[TechDraft]) -> Result<(), Violation> {
    let confident = techs.iter().any(|tech| {
        tech.knowledge
            .trim()
            .parse::<u32>()
            .is_ok_and(|score| score > KNOWLEDGE_LEARNING_MAX)
    });
    if confident {
        Ok(())
    } else {
        Err(Violation::StillLearning {
            ceiling: KNOWLEDGE_LEARNING_MAX,
        })
    }
}

//! Unit tests for the domain draft and record types.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use rstest::rstest;
use serde_json::json;

use super::*;

#[rstest]
fn default_draft_matches_mounted_form() {
    let draft = UserDraft::default();
    assert_eq!(draft.name, "");
    assert_eq!(draft.email, "");
    assert_eq!(draft.password, "");
    assert!(draft.techs.is_empty());
}

#[rstest]
fn default_tech_draft_is_blank_title_zero_knowledge() {
    let tech = TechDraft::default();
    assert_eq!(tech.title, "");
    assert_eq!(tech.knowledge, "0");
}

#[rstest]
fn draft_serde_round_trips() {
    let draft = UserDraft {
        name: "ana".to_owned(),
        email: "ana@rocketseat.com".to_owned(),
        password: "123456".to_owned(),
        techs: vec![TechDraft {
            title: "react".to_owned(),
            knowledge: "80".to_owned(),
        }],
    };
    let value = serde_json::to_value(&draft).expect("serialise draft");
    let parsed: UserDraft = serde_json::from_value(value).expect("parse draft");
    assert_eq!(parsed, draft);
}

#[rstest]
fn record_serialises_in_display_field_order() {
    let record = UserRecord::new(
        "Ana Maria".to_owned(),
        "ana@rocketseat.com".to_owned(),
        "123456".to_owned(),
        vec![TechEntry::new("react".to_owned(), 80)],
    );
    let text = serde_json::to_string(&record).expect("serialise record");
    let name_at = text.find("\"name\"").expect("name key");
    let email_at = text.find("\"email\"").expect("email key");
    let password_at = text.find("\"password\"").expect("password key");
    let techs_at = text.find("\"techs\"").expect("techs key");
    assert!(name_at < email_at);
    assert!(email_at < password_at);
    assert!(password_at < techs_at);
}

#[rstest]
fn record_accessors_expose_components() {
    let record = UserRecord::new(
        "Ana Maria".to_owned(),
        "ana@rocketseat.com".to_owned(),
        "123456".to_owned(),
        vec![
            TechEntry::new("react".to_owned(), 80),
            TechEntry::new("node".to_owned(), 30),
        ],
    );
    assert_eq!(record.name(), "Ana Maria");
    assert_eq!(record.email(), "ana@rocketseat.com");
    assert_eq!(record.password(), "123456");
    assert_eq!(record.techs().len(), 2);
    let first = record.techs().first().expect("first tech");
    assert_eq!(first.title(), "react");
    assert_eq!(first.knowledge(), 80);
}

#[rstest]
fn tech_entry_serialises_title_then_knowledge() {
    let entry = TechEntry::new("react".to_owned(), 80);
    let value = serde_json::to_value(&entry).expect("serialise entry");
    assert_eq!(value, json!({ "title": "react", "knowledge": 80 }));
}

//! Behavioural tests for the create-user validation flow.
//!
//! These tests validate the schema engine against Gherkin scenarios covering
//! normalisation, domain rejection, and the technology collection
//! refinements.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use user_form::{
    FieldPath, TechDraft, UserDraft, UserRecord, UserSchema, ValidationReport, Violation,
};

// ============================================================================
// Test fixtures
// ============================================================================

fn tech(title: &str, knowledge: &str) -> TechDraft {
    TechDraft {
        title: title.to_owned(),
        knowledge: knowledge.to_owned(),
    }
}

fn valid_draft() -> UserDraft {
    UserDraft {
        name: "  ana maria ".to_owned(),
        email: "ANA@ROCKETSEAT.COM".to_owned(),
        password: "123456".to_owned(),
        techs: vec![tech("react", "80"), tech("node", "30")],
    }
}

/// Test world holding the draft under edit and the validation outcome.
#[derive(Default, ScenarioState)]
struct World {
    draft: Slot<UserDraft>,
    outcome: Slot<Result<UserRecord, ValidationReport>>,
}

impl World {
    /// Extracts the draft from the world state.
    fn draft(&self) -> UserDraft {
        self.draft.get().expect("draft should be set")
    }

    /// Extracts the accepted record from the world state.
    fn record(&self) -> UserRecord {
        self.outcome
            .get()
            .expect("outcome should be set")
            .expect("validation should succeed")
    }

    /// Extracts the rejection report from the world state.
    fn report(&self) -> ValidationReport {
        self.outcome
            .get()
            .expect("outcome should be set")
            .expect_err("validation should fail")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("a draft with every field valid")]
fn a_draft_with_every_field_valid(world: &World) {
    world.draft.set(valid_draft());
}

#[given("a personal email address")]
fn a_personal_email_address(world: &World) {
    let mut draft = world.draft();
    draft.email = "user@gmail.com".to_owned();
    world.draft.set(draft);
}

#[given("only one technology listed")]
fn only_one_technology_listed(world: &World) {
    let mut draft = world.draft();
    draft.techs = vec![tech("react", "40")];
    world.draft.set(draft);
}

#[given("no technology above the learning ceiling")]
fn no_technology_above_the_learning_ceiling(world: &World) {
    let mut draft = world.draft();
    draft.techs = vec![tech("react", "50"), tech("node", "30")];
    world.draft.set(draft);
}

// ============================================================================
// When steps
// ============================================================================

#[when("the draft is validated")]
fn the_draft_is_validated(world: &World) {
    let draft = world.draft();
    let schema = UserSchema::new();
    world.outcome.set(schema.validate(&draft));
}

// ============================================================================
// Then steps
// ============================================================================

#[then("validation succeeds")]
fn validation_succeeds(world: &World) {
    let _ = world.record();
}

#[then("the name is capitalised per word")]
fn the_name_is_capitalised_per_word(world: &World) {
    assert_eq!(world.record().name(), "Ana Maria");
}

#[then("the email is lowercased")]
fn the_email_is_lowercased(world: &World) {
    assert_eq!(world.record().email(), "ana@rocketseat.com");
}

#[then("validation fails only on the email domain")]
fn validation_fails_only_on_the_email_domain(world: &World) {
    let report = world.report();
    assert_eq!(report.len(), 1, "no other field may error");
    let error = report.first_for(FieldPath::Email).expect("email error");
    assert_eq!(error.violation(), Violation::EmailWrongDomain);
}

#[then("validation fails on the technology collection")]
fn validation_fails_on_the_technology_collection(world: &World) {
    let report = world.report();
    let collection: Vec<Violation> = report
        .iter()
        .filter(|error| error.path() == FieldPath::Techs)
        .map(|error| error.violation())
        .collect();
    assert!(
        collection
            .iter()
            .any(|violation| matches!(violation, Violation::TooFewTechs { .. })),
        "minimum-count violation expected, got {collection:?}"
    );
}

#[then("validation fails with the still-learning violation")]
fn validation_fails_with_the_still_learning_violation(world: &World) {
    let report = world.report();
    let error = report.first_for(FieldPath::Techs).expect("collection error");
    assert!(matches!(error.violation(), Violation::StillLearning { .. }));
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/user_form.feature",
    name = "Valid draft is accepted and normalised"
)]
fn valid_draft_is_accepted_and_normalised(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/user_form.feature",
    name = "Personal email is rejected on domain alone"
)]
fn personal_email_is_rejected_on_domain_alone(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/user_form.feature",
    name = "A single technology is not enough"
)]
fn a_single_technology_is_not_enough(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/user_form.feature",
    name = "Learning-only scores are rejected"
)]
fn learning_only_scores_are_rejected(world: World) {
    let _ = world;
}

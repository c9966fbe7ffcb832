//! Integration tests for the lesson design wizard.
//!
//! These tests drive the public domain API the way one editing session
//! does:
//! 1. Curriculum selections cascade
//! 2. The generalization follows its three sources
//! 3. Step gating and question editing hold for arbitrary input
//! 4. Pagination matches the page policy

use std::sync::Arc;

use proptest::prelude::*;

use concept_design::domain::curriculum::Catalog;
use concept_design::domain::design::{recompute, DesignUpdate, QuestionKind};
use concept_design::domain::export::{ImageDimensions, PageSize, PaginationPlan};
use concept_design::domain::foundation::{SchoolLevel, WizardStep};
use concept_design::domain::wizard::WizardController;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn catalog() -> Arc<Catalog> {
    Arc::new(Catalog::embedded().unwrap().clone())
}

fn controller() -> WizardController {
    WizardController::new(catalog())
}

fn middle_school_english() -> WizardController {
    let mut c = controller();
    c.select_school_level(Some(SchoolLevel::Middle));
    c.select_subject("md-eng-1").unwrap();
    c
}

fn standard_codes(c: &WizardController) -> Vec<String> {
    c.state()
        .selected_standards()
        .iter()
        .map(|s| s.code.clone())
        .collect()
}

fn concept_update(lens: &str, macro_concept: &str, micro_concept: &str) -> DesignUpdate {
    DesignUpdate {
        conceptual_lens: Some(lens.to_string()),
        macro_concept: Some(macro_concept.to_string()),
        micro_concept: Some(micro_concept.to_string()),
        ..DesignUpdate::default()
    }
}

fn question_kind() -> impl Strategy<Value = QuestionKind> {
    prop_oneof![
        Just(QuestionKind::Factual),
        Just(QuestionKind::Conceptual),
        Just(QuestionKind::Debatable),
    ]
}

fn school_level() -> impl Strategy<Value = Option<SchoolLevel>> {
    prop_oneof![
        Just(None),
        Just(Some(SchoolLevel::Middle)),
        Just(Some(SchoolLevel::High)),
    ]
}

/// Up to five standards of middle school English, by index.
fn standard_picks() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..21, 0..5)
}

fn toggle_picks(c: &mut WizardController, picks: &[usize]) {
    let codes: Vec<String> = c
        .state()
        .subject()
        .map(|s| s.standards.iter().map(|st| st.code.clone()).collect())
        .unwrap_or_default();
    for &i in picks {
        if let Some(code) = codes.get(i) {
            c.toggle_standard(code).unwrap();
        }
    }
}

// =============================================================================
// End-to-end scenario
// =============================================================================

#[test]
fn teacher_designs_a_unit_from_empty_state() {
    let mut c = controller();
    assert!(!c.is_step_valid(1));
    assert!(!c.advance());

    c.select_school_level(Some(SchoolLevel::Middle));
    c.select_subject("md-eng-1").unwrap();
    assert!(c.toggle_standard("[9영01-01]").unwrap());
    assert!(c.is_step_valid(1));
    assert!(c.advance());
    assert_eq!(c.current_step(), WizardStep::ConceptDesign);

    c.apply_update(DesignUpdate {
        topic: Some("AI".to_string()),
        ..concept_update("인과 (Causality)", "변화", "알고리즘")
    })
    .unwrap();

    assert_eq!(
        c.state().generalization(),
        Some("학생들은 인과 (Causality)(을/를) 통해 변화(와/과) 알고리즘(이)가 상호작용함을 이해한다.")
    );
    assert!(c.is_step_valid(2));
    assert!(c.advance());

    assert!(!c.advance());
    c.add_question(QuestionKind::Debatable, "AI는 창의적인가?");
    assert!(c.advance());
    assert!(c.advance());
    assert_eq!(c.current_step(), WizardStep::Review);
    assert!(!c.advance());

    // Walking back keeps every answer.
    while c.retreat() {}
    assert_eq!(c.current_step(), WizardStep::Curriculum);
    assert_eq!(standard_codes(&c), vec!["[9영01-01]".to_string()]);
    assert_eq!(c.state().topic(), Some("AI"));
    assert_eq!(c.state().questions().count(QuestionKind::Debatable), 1);
}

#[test]
fn editing_a_concept_refreshes_the_statement() {
    let mut c = middle_school_english();
    c.apply_update(concept_update("관점", "갈등", "비극")).unwrap();
    assert_eq!(
        c.state().generalization(),
        Some("학생들은 관점(을/를) 통해 갈등(와/과) 비극(이)가 상호작용함을 이해한다.")
    );

    c.apply_update(DesignUpdate {
        micro_concept: Some(String::new()),
        ..DesignUpdate::default()
    })
    .unwrap();
    assert_eq!(c.state().generalization(), None);
}

#[test]
fn rejected_update_leaves_state_untouched() {
    let mut c = middle_school_english();
    c.toggle_standard("[9영01-01]").unwrap();
    let before = c.state().clone();

    let result = c.apply_update(DesignUpdate {
        topic: Some("Climate".to_string()),
        selected_standards: Some(vec!["[12영99-99]".to_string()]),
        ..DesignUpdate::default()
    });

    assert!(result.is_err());
    assert_eq!(c.state(), &before);
}

#[test]
fn exact_multiple_of_page_height_emits_trailing_page() {
    let page = PageSize::A4;
    // 210 x 594 mm is exactly two A4 pages tall once fitted to width.
    let plan = PaginationPlan::for_image(ImageDimensions { width: 210, height: 594 }, page).unwrap();
    assert_eq!(plan.page_count(), 3);
}

#[test]
fn pagination_of_a_long_document() {
    // 2.3 page heights once fitted to the A4 width.
    let plan = PaginationPlan::for_image(
        ImageDimensions {
            width: 2100,
            height: 6831,
        },
        PageSize::A4,
    )
    .unwrap();

    assert_eq!(plan.page_count(), 3);
    assert_eq!(plan.offsets_mm[0], 0.0);
    assert!((plan.offsets_mm[1] + 297.0).abs() < 1e-6);
    assert!((plan.offsets_mm[2] + 594.0).abs() < 1e-6);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn changing_school_level_clears_subject_and_standards(
        picks in standard_picks(),
        level in school_level(),
    ) {
        let mut c = middle_school_english();
        toggle_picks(&mut c, &picks);

        c.select_school_level(level);

        prop_assert!(c.state().subject().is_none());
        prop_assert!(c.state().selected_standards().is_empty());
        prop_assert_eq!(c.state().school_level(), level);
    }

    #[test]
    fn changing_subject_clears_standards(picks in standard_picks()) {
        let mut c = middle_school_english();
        toggle_picks(&mut c, &picks);

        c.select_subject("md-eng-1").unwrap();

        prop_assert!(c.state().selected_standards().is_empty());
    }

    #[test]
    fn toggling_twice_restores_selection(picks in standard_picks(), target in 0usize..21) {
        let mut c = middle_school_english();
        toggle_picks(&mut c, &picks);
        let before = standard_codes(&c);

        toggle_picks(&mut c, &[target, target]);

        let mut after = standard_codes(&c);
        let mut expected = before;
        after.sort();
        expected.sort();
        prop_assert_eq!(after, expected);
    }

    #[test]
    fn step_one_valid_iff_subject_and_standards(
        with_subject in any::<bool>(),
        picks in standard_picks(),
    ) {
        let mut c = controller();
        if with_subject {
            c.select_school_level(Some(SchoolLevel::Middle));
            c.select_subject("md-eng-1").unwrap();
            toggle_picks(&mut c, &picks);
        }

        let expected = c.state().subject().is_some()
            && !c.state().selected_standards().is_empty();
        prop_assert_eq!(c.is_step_valid(1), expected);
    }

    #[test]
    fn statement_defined_iff_all_sources_present(
        lens in "[가-힣a-z ]{0,8}",
        macro_concept in "[가-힣a-z]{0,6}",
        micro_concept in "[가-힣a-z]{0,6}",
    ) {
        let mut c = controller();
        c.apply_update(concept_update(&lens, &macro_concept, &micro_concept)).unwrap();

        let all_present =
            !lens.is_empty() && !macro_concept.is_empty() && !micro_concept.is_empty();
        prop_assert_eq!(c.state().generalization().is_some(), all_present);
        prop_assert_eq!(
            c.state().generalization().map(str::to_owned),
            recompute(Some(lens.as_str()), Some(macro_concept.as_str()), Some(micro_concept.as_str()))
        );
    }

    #[test]
    fn blank_questions_are_ignored(kind in question_kind(), blank in "[ \t\n]{0,5}") {
        let mut c = controller();
        prop_assert!(!c.add_question(kind, blank));
        prop_assert_eq!(c.state().questions().count(kind), 0);
    }

    #[test]
    fn questions_append_at_end(
        kind in question_kind(),
        existing in prop::collection::vec("[a-z]{1,6}", 0..5),
        text in "[a-z]{1,6}\\?",
    ) {
        let mut c = controller();
        for q in &existing {
            c.add_question(kind, q.clone());
        }

        prop_assert!(c.add_question(kind, text.clone()));

        let list = c.state().questions().list(kind);
        prop_assert_eq!(list.len(), existing.len() + 1);
        prop_assert_eq!(&list[..existing.len()], &existing[..]);
        prop_assert_eq!(list.last(), Some(&text));
    }

    #[test]
    fn removing_a_question_shifts_the_rest(
        questions in prop::collection::vec("[a-z]{1,6}", 1..8),
        index in 0usize..10,
    ) {
        let mut c = controller();
        for q in &questions {
            c.add_question(QuestionKind::Conceptual, q.clone());
        }

        let removed = c.remove_question(QuestionKind::Conceptual, index);

        let mut expected = questions.clone();
        if index < questions.len() {
            prop_assert_eq!(removed, Some(expected.remove(index)));
        } else {
            prop_assert_eq!(removed, None);
        }
        prop_assert_eq!(c.state().questions().list(QuestionKind::Conceptual), &expected[..]);
    }

    #[test]
    fn retreat_never_changes_state(steps_back in 1usize..6) {
        let mut c = middle_school_english();
        c.toggle_standard("[9영01-02]").unwrap();
        c.advance();
        let before = c.state().clone();

        for _ in 0..steps_back {
            c.retreat();
        }

        prop_assert_eq!(c.state(), &before);
        prop_assert_eq!(c.current_step(), WizardStep::Curriculum);
    }
}

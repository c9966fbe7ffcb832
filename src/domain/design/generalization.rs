//! Generalization statement engine.
//!
//! The statement is derived, never authored: it is a literal template
//! substitution of the conceptual lens and the two concepts.

/// Recomputes the generalization statement.
///
/// Returns `None` unless all three inputs are non-empty. Values are inserted
/// verbatim.
pub fn recompute(
    lens: Option<&str>,
    macro_concept: Option<&str>,
    micro_concept: Option<&str>,
) -> Option<String> {
    let lens = lens.filter(|s| !s.is_empty())?;
    let macro_concept = macro_concept.filter(|s| !s.is_empty())?;
    let micro_concept = micro_concept.filter(|s| !s.is_empty())?;

    Some(format!(
        "학생들은 {}(을/를) 통해 {}(와/과) {}(이)가 상호작용함을 이해한다.",
        lens, macro_concept, micro_concept
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fills_the_template_verbatim() {
        assert_eq!(
            recompute(Some("관점"), Some("갈등"), Some("비극")).as_deref(),
            Some("학생들은 관점(을/를) 통해 갈등(와/과) 비극(이)가 상호작용함을 이해한다.")
        );
    }

    #[test]
    fn keeps_markup_and_parentheses_unescaped() {
        let out = recompute(Some("인과 (Causality)"), Some("<b>변화</b>"), Some("a&b")).unwrap();
        assert!(out.contains("인과 (Causality)(을/를)"));
        assert!(out.contains("<b>변화</b>(와/과)"));
        assert!(out.contains("a&b(이)가"));
    }

    #[test]
    fn missing_or_empty_input_yields_none() {
        assert_eq!(recompute(None, Some("갈등"), Some("비극")), None);
        assert_eq!(recompute(Some("관점"), Some(""), Some("비극")), None);
        assert_eq!(recompute(Some("관점"), Some("갈등"), None), None);
    }

    proptest! {
        #[test]
        fn defined_iff_all_inputs_non_empty(
            lens in ".{0,8}",
            macro_concept in ".{0,8}",
            micro_concept in ".{0,8}",
        ) {
            let out = recompute(Some(&lens), Some(&macro_concept), Some(&micro_concept));
            let all_present = !lens.is_empty() && !macro_concept.is_empty() && !micro_concept.is_empty();
            prop_assert_eq!(out.is_some(), all_present);
        }

        #[test]
        fn is_idempotent(lens in "\\PC{1,8}", macro_concept in "\\PC{1,8}", micro_concept in "\\PC{1,8}") {
            let first = recompute(Some(&lens), Some(&macro_concept), Some(&micro_concept));
            let second = recompute(Some(&lens), Some(&macro_concept), Some(&micro_concept));
            prop_assert_eq!(first, second);
        }
    }
}

//! Read-only vocabularies offered while designing concepts.

/// Common conceptual lenses.
pub const COMMON_LENSES: [&str; 12] = [
    "구조 (Structure)",
    "기능 (Function)",
    "변화 (Change)",
    "인과 (Causality)",
    "시스템 (System)",
    "패턴 (Pattern)",
    "관점 (Perspective)",
    "문화 (Culture)",
    "정체성 (Identity)",
    "지속가능성 (Sustainability)",
    "권력 (Power)",
    "의사소통 (Communication)",
];

/// Example macro concepts.
pub const MACRO_CONCEPT_EXAMPLES: [&str; 6] = ["환경", "정의", "갈등", "혁신", "관계", "발견"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenses_are_unique() {
        let mut lenses = COMMON_LENSES.to_vec();
        lenses.sort_unstable();
        lenses.dedup();
        assert_eq!(lenses.len(), COMMON_LENSES.len());
    }
}

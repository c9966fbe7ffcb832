//! Inquiry questions - three independent, ordered lists.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// The question-type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Factual,
    Conceptual,
    Debatable,
}

impl QuestionKind {
    pub fn all() -> &'static [QuestionKind] {
        &[
            QuestionKind::Factual,
            QuestionKind::Conceptual,
            QuestionKind::Debatable,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::Factual => "factual",
            QuestionKind::Conceptual => "conceptual",
            QuestionKind::Debatable => "debatable",
        }
    }

    /// Tab label, e.g. `사실적`.
    pub fn short_label(&self) -> &'static str {
        match self {
            QuestionKind::Factual => "사실적",
            QuestionKind::Conceptual => "개념적",
            QuestionKind::Debatable => "토론적",
        }
    }

    /// Section label used in the exported document.
    pub fn document_label(&self) -> &'static str {
        match self {
            QuestionKind::Factual => "사실적 질문",
            QuestionKind::Conceptual => "개념적 질문",
            QuestionKind::Debatable => "토론적 질문",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuestionKind::Factual => "사실적 질문 (Factual)",
            QuestionKind::Conceptual => "개념적 질문 (Conceptual)",
            QuestionKind::Debatable => "토론적 질문 (Debatable)",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            QuestionKind::Factual => "사실과 지식에 기반한 질문입니다. 정해진 답이 있습니다.",
            QuestionKind::Conceptual => {
                "개념들을 연결하는 질문입니다. 시간과 문화를 초월하여 적용 가능합니다."
            }
            QuestionKind::Debatable => {
                "다양한 관점과 논의를 이끌어내는 질문입니다. 하나의 정답이 없습니다."
            }
        }
    }

    pub fn example(&self) -> &'static str {
        match self {
            QuestionKind::Factual => "비극적 영웅의 주요 특징은 무엇인가?",
            QuestionKind::Conceptual => "갈등은 어떻게 인간의 조건을 드러내는가?",
            QuestionKind::Debatable => "비극은 인간 존재의 피할 수 없는 부분인가?",
        }
    }

    /// What this kind of question targets.
    pub fn focus(&self) -> &'static str {
        match self {
            QuestionKind::Factual => "지식과 이해",
            QuestionKind::Conceptual => "연결과 전이",
            QuestionKind::Debatable => "논쟁과 가치",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QuestionKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "factual" => Ok(QuestionKind::Factual),
            "conceptual" => Ok(QuestionKind::Conceptual),
            "debatable" => Ok(QuestionKind::Debatable),
            other => Err(ValidationError::invalid_format(
                "question_kind",
                format!("unknown kind '{}'", other),
            )),
        }
    }
}

/// Factual, conceptual and debatable questions in entry order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryQuestions {
    #[serde(default)]
    factual: Vec<String>,
    #[serde(default)]
    conceptual: Vec<String>,
    #[serde(default)]
    debatable: Vec<String>,
}

impl InquiryQuestions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self, kind: QuestionKind) -> &[String] {
        match kind {
            QuestionKind::Factual => &self.factual,
            QuestionKind::Conceptual => &self.conceptual,
            QuestionKind::Debatable => &self.debatable,
        }
    }

    fn list_mut(&mut self, kind: QuestionKind) -> &mut Vec<String> {
        match kind {
            QuestionKind::Factual => &mut self.factual,
            QuestionKind::Conceptual => &mut self.conceptual,
            QuestionKind::Debatable => &mut self.debatable,
        }
    }

    /// Appends a question; whitespace-only text is ignored.
    ///
    /// Returns true if the list changed.
    pub fn add(&mut self, kind: QuestionKind, text: impl Into<String>) -> bool {
        let text = text.into();
        if text.trim().is_empty() {
            return false;
        }
        self.list_mut(kind).push(text);
        true
    }

    /// Removes the question at `index`; out-of-bounds indices are ignored.
    pub fn remove(&mut self, kind: QuestionKind, index: usize) -> Option<String> {
        let list = self.list_mut(kind);
        if index < list.len() {
            Some(list.remove(index))
        } else {
            None
        }
    }

    /// Replaces a whole list.
    pub fn replace(&mut self, kind: QuestionKind, questions: Vec<String>) {
        *self.list_mut(kind) = questions;
    }

    pub fn count(&self, kind: QuestionKind) -> usize {
        self.list(kind).len()
    }

    pub fn total(&self) -> usize {
        QuestionKind::all().iter().map(|k| self.count(*k)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_appends_to_the_end() {
        let mut q = InquiryQuestions::new();
        assert!(q.add(QuestionKind::Factual, "Q1"));
        assert!(q.add(QuestionKind::Factual, "Q2"));
        assert_eq!(q.list(QuestionKind::Factual), &["Q1".to_string(), "Q2".to_string()]);
        assert!(q.list(QuestionKind::Conceptual).is_empty());
    }

    #[test]
    fn add_ignores_blank_text() {
        let mut q = InquiryQuestions::new();
        assert!(!q.add(QuestionKind::Factual, ""));
        assert!(!q.add(QuestionKind::Factual, "   \t"));
        assert!(q.is_empty());
    }

    #[test]
    fn add_keeps_text_verbatim() {
        let mut q = InquiryQuestions::new();
        q.add(QuestionKind::Debatable, "  왜 그런가? ");
        assert_eq!(q.list(QuestionKind::Debatable)[0], "  왜 그런가? ");
    }

    #[test]
    fn remove_shifts_later_elements_down() {
        let mut q = InquiryQuestions::new();
        for text in ["a", "b", "c", "d"] {
            q.add(QuestionKind::Conceptual, text);
        }
        assert_eq!(q.remove(QuestionKind::Conceptual, 1).as_deref(), Some("b"));
        assert_eq!(
            q.list(QuestionKind::Conceptual),
            &["a".to_string(), "c".to_string(), "d".to_string()]
        );
    }

    #[test]
    fn remove_out_of_bounds_is_noop() {
        let mut q = InquiryQuestions::new();
        q.add(QuestionKind::Factual, "only");
        assert_eq!(q.remove(QuestionKind::Factual, 5), None);
        assert_eq!(q.count(QuestionKind::Factual), 1);
    }

    #[test]
    fn totals_span_all_kinds() {
        let mut q = InquiryQuestions::new();
        q.add(QuestionKind::Factual, "a");
        q.add(QuestionKind::Debatable, "b");
        assert_eq!(q.total(), 2);
        assert!(!q.is_empty());
    }

    #[test]
    fn kind_parses_from_wire_name() {
        assert_eq!("debatable".parse::<QuestionKind>().unwrap(), QuestionKind::Debatable);
        assert!("rhetorical".parse::<QuestionKind>().is_err());
    }
}

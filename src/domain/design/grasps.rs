//! GRASPS performance assessment template.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One of the six GRASPS fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraspsField {
    Goal,
    Role,
    Audience,
    Situation,
    Product,
    Standards,
}

impl GraspsField {
    pub fn all() -> &'static [GraspsField] {
        &[
            GraspsField::Goal,
            GraspsField::Role,
            GraspsField::Audience,
            GraspsField::Situation,
            GraspsField::Product,
            GraspsField::Standards,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            GraspsField::Goal => "goal",
            GraspsField::Role => "role",
            GraspsField::Audience => "audience",
            GraspsField::Situation => "situation",
            GraspsField::Product => "product",
            GraspsField::Standards => "standards",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GraspsField::Goal => "목표 (Goal)",
            GraspsField::Role => "역할 (Role)",
            GraspsField::Audience => "청중 (Audience)",
            GraspsField::Situation => "상황 (Situation)",
            GraspsField::Product => "결과물 (Product)",
            GraspsField::Standards => "기준 (Standards)",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            GraspsField::Goal => "이 수행평가의 목표는 무엇인가요?",
            GraspsField::Role => "학생의 역할은 무엇인가요?",
            GraspsField::Audience => "누가 결과물을 보게 되나요?",
            GraspsField::Situation => "어떤 맥락이나 시나리오인가요?",
            GraspsField::Product => "이해를 증명할 결과물은 무엇인가요?",
            GraspsField::Standards => "성공 기준은 무엇인가요?",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            GraspsField::Goal => "예: 시의회에서 ~를 채택하도록 설득하기",
            GraspsField::Role => "예: 환경 과학자",
            GraspsField::Audience => "예: 지역 주민, 심사위원",
            GraspsField::Situation => "예: 마을 회관 회의에서...",
            GraspsField::Product => "예: 설득력 있는 연설문 및 인포그래픽",
            GraspsField::Standards => "예: 설득적 언어 사용, 데이터의 정확성",
        }
    }
}

impl FromStr for GraspsField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GraspsField::all()
            .iter()
            .copied()
            .find(|f| f.key() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("grasps_field", format!("unknown field '{}'", s))
            })
    }
}

/// Goal, Role, Audience, Situation, Product, Standards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Grasps {
    pub goal: String,
    pub role: String,
    pub audience: String,
    pub situation: String,
    pub product: String,
    pub standards: String,
}

impl Grasps {
    pub fn get(&self, field: GraspsField) -> &str {
        match field {
            GraspsField::Goal => &self.goal,
            GraspsField::Role => &self.role,
            GraspsField::Audience => &self.audience,
            GraspsField::Situation => &self.situation,
            GraspsField::Product => &self.product,
            GraspsField::Standards => &self.standards,
        }
    }

    pub fn set(&mut self, field: GraspsField, value: impl Into<String>) {
        let slot = match field {
            GraspsField::Goal => &mut self.goal,
            GraspsField::Role => &mut self.role,
            GraspsField::Audience => &mut self.audience,
            GraspsField::Situation => &mut self.situation,
            GraspsField::Product => &mut self.product,
            GraspsField::Standards => &mut self.standards,
        };
        *slot = value.into();
    }

    /// Fields paired with their values, in template order.
    pub fn entries(&self) -> impl Iterator<Item = (GraspsField, &str)> + '_ {
        GraspsField::all().iter().map(move |f| (*f, self.get(*f)))
    }

    /// The task prompt preview read to students; blanks render as `...`.
    pub fn scenario_sentence(&self) -> String {
        let or_dots = |v: &str| if v.is_empty() { "...".to_string() } else { v.to_string() };
        format!(
            "당신의 목표는 {} 하는 것입니다. 당신은 {} 로서, {}에게 전달합니다. \
             상황은 {}입니다. 당신은 {} (을/를) 만들어야 하며, 평가 기준은 {}입니다.",
            or_dots(&self.goal),
            or_dots(&self.role),
            or_dots(&self.audience),
            or_dots(&self.situation),
            or_dots(&self.product),
            or_dots(&self.standards),
        )
    }
}

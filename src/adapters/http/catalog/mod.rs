//! HTTP adapter for curriculum lookups and step suggestions.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    GraspsFieldGuide, LevelSubjectsResponse, QuestionKindGuide, StandardGroupResponse,
    SubjectStandardsResponse, SuggestionsResponse,
};
pub use routes::catalog_routes;

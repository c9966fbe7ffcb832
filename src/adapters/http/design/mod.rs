//! HTTP adapter for design session endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AddQuestionRequest, DesignResponse, EmailDesignRequest, ExportQuery, NavigateResponse,
    SelectSchoolLevelRequest, SelectSubjectRequest, SetGraspsFieldRequest, ToggleStandardRequest,
};
pub use routes::design_routes;

//! Review document rendering.

mod html;
mod rendered;
mod renderer;

pub use html::to_html;
pub use rendered::{
    AssessmentSection, ConceptualFoundation, CurricularContext, GraspsCell,
    InquiryQuestionsSection, LabeledValue, QuestionGroup, RenderedDocument, StandardLine,
    DOCUMENT_TITLE, PLACEHOLDER,
};
pub use renderer::render;

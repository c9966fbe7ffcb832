//! Self-contained HTML page for a RenderedDocument.
//!
//! The same markup serves the HTML preview export and the page the
//! rasterizer captures, so both show identical content. User text is
//! HTML-escaped; the page background is opaque white.

use html_escape::encode_text;

use super::rendered::{LabeledValue, RenderedDocument};

const DOCUMENT_CSS: &str = r#"
* { box-sizing: border-box; }
html, body { margin: 0; padding: 0; background: #ffffff; }
body {
    font-family: "Noto Sans KR", "Apple SD Gothic Neo", "Malgun Gothic", sans-serif;
    color: #1e293b;
    line-height: 1.6;
}
.design-document { padding: 32px; background: #ffffff; }
header { text-align: center; border-bottom: 1px solid #e2e8f0; padding-bottom: 24px; margin-bottom: 32px; }
header h1 { font-size: 30px; margin: 0 0 8px; color: #0f172a; }
header p { margin: 0; color: #64748b; }
section { margin-bottom: 40px; }
h3 { font-size: 14px; text-transform: uppercase; letter-spacing: 0.05em; border-bottom: 1px solid #e2e8f0; padding-bottom: 8px; }
.standards { background: #f8fafc; border: 1px solid #f1f5f9; border-radius: 8px; padding: 24px; }
.standards h4 { margin: 0 0 12px; font-size: 14px; color: #334155; }
.code { font-family: monospace; background: #ffffff; border: 1px solid #e2e8f0; border-radius: 4px; padding: 2px 6px; margin-right: 8px; }
.concepts { display: grid; grid-template-columns: 1fr 1fr; gap: 24px; margin-bottom: 24px; }
.concept { padding: 20px; border: 1px solid #e0e7ff; border-radius: 8px; background: #eef2ff; }
.label { font-size: 12px; font-weight: 700; text-transform: uppercase; color: #4f46e5; margin-bottom: 8px; }
.value { font-size: 20px; font-weight: 700; }
.generalization { padding: 32px; border-left: 4px solid #6366f1; background: #f8fafc; font-style: italic; font-size: 20px; }
.questions { border: 1px solid #e2e8f0; border-radius: 8px; padding: 16px; margin-bottom: 16px; }
.badge { display: inline-block; background: #f1f5f9; border-radius: 9999px; padding: 2px 10px; font-size: 12px; font-weight: 600; }
.focus { font-size: 12px; color: #94a3b8; margin-left: 8px; }
.grasps { display: grid; grid-template-columns: repeat(3, 1fr); border: 1px solid #e2e8f0; border-radius: 12px; }
.cell { padding: 20px; }
.cell .key { font-size: 10px; text-transform: uppercase; color: #94a3b8; font-weight: 700; margin-bottom: 8px; }
.cell .text { white-space: pre-wrap; font-weight: 500; }
"#;

fn concept_box(item: &LabeledValue) -> String {
    format!(
        r#"<div class="concept"><div class="label">{}</div><div class="value">{}</div></div>"#,
        encode_text(item.label),
        encode_text(&item.value)
    )
}

/// Renders the document as a complete HTML page.
pub fn to_html(doc: &RenderedDocument) -> String {
    let mut body = String::new();

    body.push_str(&format!(
        "<header><h1>{}</h1><p>{}</p></header>\n",
        encode_text(&doc.title),
        encode_text(&doc.subtitle)
    ));

    let context = &doc.curricular_context;
    body.push_str(&format!(
        "<section><h3>{}</h3><div class=\"standards\"><h4>{}</h4><ul>",
        encode_text(context.heading),
        encode_text(context.standards_label)
    ));
    for line in &context.standards {
        body.push_str(&format!(
            "<li><span class=\"code\">{}</span>{}</li>",
            encode_text(&line.code),
            encode_text(&line.description)
        ));
    }
    body.push_str("</ul></div></section>\n");

    let foundation = &doc.conceptual_foundation;
    body.push_str(&format!(
        "<section><h3>{}</h3><div class=\"concepts\">{}{}{}{}</div>",
        encode_text(foundation.heading),
        concept_box(&foundation.topic),
        concept_box(&foundation.conceptual_lens),
        concept_box(&foundation.macro_concept),
        concept_box(&foundation.micro_concept),
    ));
    body.push_str(&format!(
        "<div class=\"generalization\"><div class=\"label\">{}</div><p>&quot;{}&quot;</p></div></section>\n",
        encode_text(foundation.generalization.label),
        encode_text(&foundation.generalization.value)
    ));

    let questions = &doc.inquiry_questions;
    body.push_str(&format!("<section><h3>{}</h3>", encode_text(questions.heading)));
    for group in &questions.groups {
        body.push_str(&format!(
            "<div class=\"questions {}\"><span class=\"badge\">{}</span><span class=\"focus\">{}</span><ul>",
            group.kind.as_str(),
            encode_text(group.label),
            encode_text(group.focus)
        ));
        for question in &group.questions {
            body.push_str(&format!("<li>{}</li>", encode_text(question)));
        }
        body.push_str("</ul></div>");
    }
    body.push_str("</section>\n");

    let assessment = &doc.assessment;
    body.push_str(&format!(
        "<section><h3>{}</h3><div class=\"grasps\">",
        encode_text(assessment.heading)
    ));
    for cell in &assessment.cells {
        body.push_str(&format!(
            "<div class=\"cell\"><div class=\"key\">{}</div><div class=\"text\">{}</div></div>",
            cell.key,
            encode_text(&cell.value)
        ));
    }
    body.push_str("</div></section>\n");

    format!(
        r#"<!DOCTYPE html>
<html lang="ko">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
    <article class="design-document">
{body}
    </article>
</body>
</html>"#,
        title = encode_text(&doc.title),
        css = DOCUMENT_CSS,
        body = body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::design::DesignState;
    use crate::domain::document::render;

    #[test]
    fn page_has_white_background_and_all_sections() {
        let html = to_html(&render(&DesignState::new()));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("background: #ffffff"));
        assert!(html.contains("1. 교육과정 맥락 (Curricular Context)"));
        assert!(html.contains("2. 개념적 기반 (Conceptual Foundation)"));
        assert!(html.contains("3. 탐구 질문 (Inquiry Questions)"));
        assert!(html.contains("4. 수행평가 설계 (GRASPS Assessment)"));
        assert_eq!(html.matches("class=\"cell\"").count(), 6);
    }

    #[test]
    fn user_text_is_escaped() {
        let mut doc = render(&DesignState::new());
        doc.conceptual_foundation.topic.value = "<script>alert(1)</script>".to_string();
        let html = to_html(&doc);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}

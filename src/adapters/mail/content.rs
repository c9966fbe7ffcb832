//! Fixed content of the design email.

pub const SUBJECT: &str = "[Concept Design] 단원 설계 PDF 파일입니다.";

pub const HTML_BODY: &str = r#"
<div style="font-family: sans-serif; padding: 20px; color: #333;">
  <h2 style="color: #4F46E5;">Concept-Based Inquiry Learning Design</h2>
  <p>작성하신 단원 설계안을 PDF로 첨부하여 보내드립니다.</p>
  <hr style="border: 0; border-top: 1px solid #eee; margin: 20px 0;" />
  <p style="font-size: 12px; color: #888;">이 메일은 자동 발송되었습니다.</p>
</div>
"#;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

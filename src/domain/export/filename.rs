//! Names given to exported files.

/// Attachment name used when the PDF is mailed.
pub const ATTACHMENT_FILENAME: &str = "lesson-plan.pdf";

/// `lesson-plan-{subject}`, falling back to `design` without a subject.
pub fn download_basename(subject_name: Option<&str>) -> String {
    let name = subject_name.filter(|s| !s.is_empty()).unwrap_or("design");
    format!("lesson-plan-{}", name)
}

/// PDF download name.
pub fn download_filename(subject_name: Option<&str>) -> String {
    format!("{}.pdf", download_basename(subject_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_subject_name() {
        assert_eq!(
            download_filename(Some("영어 (중1~3)")),
            "lesson-plan-영어 (중1~3).pdf"
        );
    }

    #[test]
    fn falls_back_to_design() {
        assert_eq!(download_filename(None), "lesson-plan-design.pdf");
        assert_eq!(download_filename(Some("")), "lesson-plan-design.pdf");
    }

    #[test]
    fn basename_has_no_extension() {
        assert_eq!(download_basename(Some("영어 I")), "lesson-plan-영어 I");
    }
}

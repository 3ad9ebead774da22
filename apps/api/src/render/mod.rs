// CV rendering: JSON CV record in, PDF bytes out.
// Layout is written against the `Canvas` trait; `PdfCanvas` is the printpdf backend.
// Rendering is CPU-bound and must run inside tokio::task::spawn_blocking.

pub mod canvas;
pub mod cv_layout;
pub mod font_metrics;
pub mod handlers;
pub mod pdf_canvas;

use thiserror::Error;
use tracing::debug;

use crate::models::cv::CvData;

pub use cv_layout::render_cv;
pub use pdf_canvas::{PageConfig, PdfCanvas};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF error: {0}")]
    Pdf(String),
}

/// Lays out `cv` on fresh pages and returns the serialized document.
pub fn render_cv_pdf(cv: &CvData, config: &PageConfig) -> Result<Vec<u8>, RenderError> {
    let title = if cv.full_name.trim().is_empty() {
        "Curriculum Vitae".to_string()
    } else {
        format!("{} - Curriculum Vitae", cv.full_name.trim())
    };

    let mut canvas = PdfCanvas::new(&title, config.clone())?;
    render_cv(cv, &mut canvas);
    debug!("Laid out CV on {} page(s)", canvas.page_count());
    canvas.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cv::Experience;

    /// The `Tj` operand printpdf writes for a built-in-font string, e.g. `<4A616E65> Tj`.
    fn shown_text(text: &str) -> Vec<u8> {
        let hex: String = text.bytes().map(|b| format!("{b:02X}")).collect();
        format!("<{hex}> Tj").into_bytes()
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    fn jane() -> CvData {
        CvData {
            full_name: "Jane Doe".to_string(),
            title: "Engineer".to_string(),
            email: "jane@x.com".to_string(),
            phone: "555-1234".to_string(),
            summary: "Ships reliable backends.".to_string(),
            work_experience: vec![Experience {
                company: "Acme".to_string(),
                position: "Dev".to_string(),
                year: "2020-2022".to_string(),
                description: "Built things.".to_string(),
            }],
            education: vec![],
            skills: vec!["Go".to_string(), "SQL".to_string()],
        }
    }

    #[test]
    fn test_pdf_contains_jane_doe_sections() {
        let bytes = render_cv_pdf(&jane(), &PageConfig::a4()).unwrap();

        for text in [
            "Jane Doe",
            "Engineer",
            "jane@x.com | 555-1234",
            "Summary",
            "Dev at Acme",
            "Go, SQL",
        ] {
            assert!(contains(&bytes, &shown_text(text)), "missing {text:?}");
        }
        assert!(!contains(&bytes, &shown_text("Education")));
    }

    #[test]
    fn test_pdf_draws_sections_in_order() {
        let bytes = render_cv_pdf(&jane(), &PageConfig::a4()).unwrap();
        let offset = |text: &str| {
            let needle = shown_text(text);
            bytes
                .windows(needle.len())
                .position(|w| w == needle.as_slice())
                .unwrap_or_else(|| panic!("missing {text:?}"))
        };

        assert!(offset("Jane Doe") < offset("Summary"));
        assert!(offset("Summary") < offset("Work Experience"));
        assert!(offset("Work Experience") < offset("Dev at Acme"));
        assert!(offset("Dev at Acme") < offset("Skills"));
        assert!(offset("Skills") < offset("Go, SQL"));
    }

    #[test]
    fn test_pdf_encodes_latin1_text() {
        let mut cv = jane();
        cv.full_name = "Café".to_string();
        let bytes = render_cv_pdf(&cv, &PageConfig::a4()).unwrap();
        assert!(contains(&bytes, b"<436166E9"));
    }

    #[test]
    fn test_render_cv_pdf_produces_document() {
        let cv = CvData {
            full_name: "Jane Doe".to_string(),
            title: "Engineer".to_string(),
            work_experience: vec![Experience {
                company: "Acme".to_string(),
                position: "Dev".to_string(),
                year: "2020-2022".to_string(),
                description: "Built things. ".repeat(300),
            }],
            skills: vec!["Go".to_string(), "SQL".to_string()],
            ..CvData::default()
        };

        let bytes = render_cv_pdf(&cv, &PageConfig::a4()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn test_render_cv_pdf_handles_empty_record() {
        let bytes = render_cv_pdf(&CvData::default(), &PageConfig::a4()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}

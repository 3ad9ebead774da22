//! The CV page layout: a fixed sequence of drawing calls.
//!
//! Section order is header, summary, education, work experience, skills.
//! Education, work experience and skills are skipped entirely when empty.
//! The summary is always drawn, even when blank.

use crate::models::cv::CvData;
use crate::render::canvas::Canvas;
use crate::render::font_metrics::FontStyle;

const NAME_SIZE_PT: f32 = 24.0;
const TITLE_SIZE_PT: f32 = 14.0;
const CONTACT_SIZE_PT: f32 = 10.0;
const HEADING_SIZE_PT: f32 = 14.0;
const BODY_SIZE_PT: f32 = 11.0;

pub const SUMMARY_HEADING: &str = "Summary";
pub const EDUCATION_HEADING: &str = "Education";
pub const EXPERIENCE_HEADING: &str = "Work Experience";
pub const SKILLS_HEADING: &str = "Skills";

pub fn render_cv<C: Canvas>(cv: &CvData, canvas: &mut C) {
    draw_header(cv, canvas);
    separator(canvas);

    heading(canvas, SUMMARY_HEADING, 8.0);
    canvas.set_font(FontStyle::Regular, BODY_SIZE_PT);
    canvas.multi_cell(6.0, &cv.summary);
    canvas.line_break(10.0);
    separator(canvas);

    if !cv.education.is_empty() {
        heading(canvas, EDUCATION_HEADING, 10.0);
        canvas.set_font(FontStyle::Regular, BODY_SIZE_PT);
        for edu in &cv.education {
            canvas.set_style(FontStyle::Bold);
            canvas.cell(6.0, &edu.institution);
            canvas.line_break(5.0);

            canvas.set_style(FontStyle::Regular);
            canvas.cell(6.0, &edu.major);
            canvas.line_break(5.0);

            canvas.set_style(FontStyle::Italic);
            canvas.cell(6.0, &edu.year);
            canvas.line_break(8.0);
        }
    }
    separator(canvas);

    if !cv.work_experience.is_empty() {
        heading(canvas, EXPERIENCE_HEADING, 10.0);
        canvas.set_font(FontStyle::Regular, BODY_SIZE_PT);
        for exp in &cv.work_experience {
            canvas.set_style(FontStyle::Bold);
            canvas.cell(6.0, &exp.headline());
            canvas.line_break(5.0);

            canvas.set_style(FontStyle::Italic);
            canvas.cell(6.0, &exp.year);
            canvas.line_break(6.0);

            canvas.set_style(FontStyle::Regular);
            canvas.multi_cell(5.0, &exp.description);
            canvas.line_break(8.0);
        }
    }
    separator(canvas);

    if !cv.skills.is_empty() {
        heading(canvas, SKILLS_HEADING, 10.0);
        canvas.set_font(FontStyle::Regular, BODY_SIZE_PT);
        canvas.multi_cell(6.0, &cv.skills.join(", "));
        canvas.line_break(10.0);
    }
}

fn draw_header<C: Canvas>(cv: &CvData, canvas: &mut C) {
    canvas.set_font(FontStyle::Bold, NAME_SIZE_PT);
    canvas.cell(12.0, &cv.full_name);
    canvas.line_break(12.0);

    canvas.set_font(FontStyle::Regular, TITLE_SIZE_PT);
    canvas.cell(8.0, &cv.title);
    canvas.line_break(8.0);

    canvas.set_font(FontStyle::Regular, CONTACT_SIZE_PT);
    canvas.cell(6.0, &cv.contact_line());
    canvas.line_break(10.0);
}

fn heading<C: Canvas>(canvas: &mut C, title: &str, gap: f32) {
    canvas.set_font(FontStyle::Bold, HEADING_SIZE_PT);
    canvas.cell(8.0, title);
    canvas.line_break(gap);
}

fn separator<C: Canvas>(canvas: &mut C) {
    canvas.rule();
    canvas.line_break(10.0);
}

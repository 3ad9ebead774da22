//! `Canvas` implementation on top of `printpdf`, using the built-in Helvetica faces.

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rgb,
};

use crate::render::canvas::Canvas;
use crate::render::font_metrics::{FontMetricTable, FontStyle};
use crate::render::RenderError;

const LAYER_NAME: &str = "Layer 1";
/// Points per millimetre.
const PT_PER_MM: f32 = 72.0 / 25.4;
/// Separator grey, 200/255 on every channel.
const RULE_GREY: f32 = 200.0 / 255.0;

/// Page geometry, all in millimetres.
#[derive(Debug, Clone)]
pub struct PageConfig {
    pub width_mm: f32,
    pub height_mm: f32,
    pub margin_left_mm: f32,
    pub margin_right_mm: f32,
    pub margin_top_mm: f32,
    /// Content that would cross this distance from the bottom edge moves to a new page.
    pub page_break_mm: f32,
}

impl PageConfig {
    /// A4 portrait with 10 mm side and top margins and a 20 mm page-break zone.
    pub fn a4() -> Self {
        Self {
            width_mm: 210.0,
            height_mm: 297.0,
            margin_left_mm: 10.0,
            margin_right_mm: 10.0,
            margin_top_mm: 10.0,
            page_break_mm: 20.0,
        }
    }

    pub fn text_width_mm(&self) -> f32 {
        self.width_mm - self.margin_left_mm - self.margin_right_mm
    }
}

pub struct PdfCanvas {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
    config: PageConfig,
    /// Distance of the cursor from the top edge of the current page.
    cursor_y: f32,
    style: FontStyle,
    size_pt: f32,
    pages: usize,
}

impl PdfCanvas {
    pub fn new(title: &str, config: PageConfig) -> Result<Self, RenderError> {
        let (doc, page, layer) = PdfDocument::new(
            title,
            Mm(config.width_mm),
            Mm(config.height_mm),
            LAYER_NAME,
        );
        let regular = add_font(&doc, BuiltinFont::Helvetica)?;
        let bold = add_font(&doc, BuiltinFont::HelveticaBold)?;
        let italic = add_font(&doc, BuiltinFont::HelveticaOblique)?;
        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            italic,
            cursor_y: config.margin_top_mm,
            config,
            style: FontStyle::Regular,
            size_pt: 11.0,
            pages: 1,
        })
    }

    pub fn page_count(&self) -> usize {
        self.pages
    }

    /// Serializes the finished document. Nothing is written anywhere until this succeeds.
    pub fn finish(self) -> Result<Vec<u8>, RenderError> {
        self.doc
            .save_to_bytes()
            .map_err(|e| RenderError::Pdf(e.to_string()))
    }

    fn font(&self) -> &IndirectFontRef {
        match self.style {
            FontStyle::Regular => &self.regular,
            FontStyle::Bold => &self.bold,
            FontStyle::Italic => &self.italic,
        }
    }

    fn ensure_room(&mut self, height: f32) {
        let limit = self.config.height_mm - self.config.page_break_mm;
        if self.cursor_y + height > limit && self.cursor_y > self.config.margin_top_mm {
            let (page, layer) = self.doc.add_page(
                Mm(self.config.width_mm),
                Mm(self.config.height_mm),
                LAYER_NAME,
            );
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.cursor_y = self.config.margin_top_mm;
            self.pages += 1;
        }
    }

    fn draw_line_of_text(&mut self, height: f32, text: &str) {
        self.ensure_room(height);
        if text.is_empty() {
            return;
        }
        // Vertically centre the glyphs in the cell.
        let size_mm = self.size_pt / PT_PER_MM;
        let baseline_from_top = self.cursor_y + height / 2.0 + 0.3 * size_mm;
        self.layer.use_text(
            to_win_ansi(text),
            self.size_pt,
            Mm(self.config.margin_left_mm),
            Mm(self.config.height_mm - baseline_from_top),
            self.font(),
        );
    }
}

impl Canvas for PdfCanvas {
    fn set_font(&mut self, style: FontStyle, size_pt: f32) {
        self.style = style;
        self.size_pt = size_pt;
    }

    fn set_style(&mut self, style: FontStyle) {
        self.style = style;
    }

    fn cell(&mut self, height: f32, text: &str) {
        self.draw_line_of_text(height, text);
    }

    fn multi_cell(&mut self, line_height: f32, text: &str) {
        let lines = FontMetricTable::for_style(self.style).wrap_text(
            text,
            self.size_pt,
            self.config.text_width_mm(),
        );
        for line in lines {
            self.draw_line_of_text(line_height, &line);
            self.cursor_y += line_height;
        }
    }

    fn line_break(&mut self, height: f32) {
        self.cursor_y += height;
    }

    fn rule(&mut self) {
        let y = Mm(self.config.height_mm - self.cursor_y);
        self.layer
            .set_outline_color(Color::Rgb(Rgb::new(RULE_GREY, RULE_GREY, RULE_GREY, None)));
        self.layer.set_outline_thickness(0.5);
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(self.config.margin_left_mm), y), false),
                (
                    Point::new(Mm(self.config.width_mm - self.config.margin_right_mm), y),
                    false,
                ),
            ],
            is_closed: false,
        });
    }
}

fn add_font(doc: &PdfDocumentReference, font: BuiltinFont) -> Result<IndirectFontRef, RenderError> {
    doc.add_builtin_font(font)
        .map_err(|e| RenderError::Pdf(format!("could not register built-in font: {e}")))
}

/// The built-in faces only cover WinAnsi; anything outside Latin-1 becomes `?`.
fn to_win_ansi(text: &str) -> String {
    text.chars()
        .map(|c| {
            if (c as u32) < 0x100 && !c.is_control() {
                c
            } else {
                '?'
            }
        })
        .collect()
}

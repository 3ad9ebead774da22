//! Cursor-based drawing surface the CV layout is written against.
//!
//! Units are millimetres for distances and points for font sizes. The cursor
//! starts at the top-left margin; `cell` draws without moving it, while
//! `multi_cell` and `line_break` move it down.

use crate::render::font_metrics::FontStyle;

pub trait Canvas {
    /// Switches face and size for subsequent text.
    fn set_font(&mut self, style: FontStyle, size_pt: f32);

    /// Switches face, keeping the current size.
    fn set_style(&mut self, style: FontStyle);

    /// Draws a single line of text in a cell of `height` at the cursor.
    fn cell(&mut self, height: f32, text: &str);

    /// Draws `text` word-wrapped to the printable width, one `line_height` per line.
    fn multi_cell(&mut self, line_height: f32, text: &str);

    /// Moves the cursor down by `height` and back to the left margin.
    fn line_break(&mut self, height: f32);

    /// Draws a light horizontal separator across the printable width at the cursor.
    fn rule(&mut self);
}

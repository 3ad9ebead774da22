//! Static font-metric tables for the built-in Helvetica family.
//!
//! Widths come from the Adobe core-14 AFM files, in thousandths of an em.
//! Oblique shares the regular widths. All tables cover ASCII 0x20..=0x7E
//! (95 printable characters). Index = (char as usize) - 32.

/// Points per millimetre.
const PT_PER_MM: f32 = 72.0 / 25.4;

// ────────────────────────────────────────────────────────────────────────────
// Font style
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Regular,
    Bold,
    Italic,
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Character-width table for one face.
///
/// Slot layout follows the ASCII order from space (0x20) to tilde (0x7E).
pub struct FontMetricTable {
    widths: [u16; 95],
    /// Fallback width for anything outside printable ASCII.
    pub average_char_width: u16,
}

impl FontMetricTable {
    pub fn for_style(style: FontStyle) -> &'static FontMetricTable {
        match style {
            FontStyle::Bold => &HELVETICA_BOLD_TABLE,
            FontStyle::Regular | FontStyle::Italic => &HELVETICA_TABLE,
        }
    }

    /// Width of `s` in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        let thousandths: u32 = s
            .chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32] as u32
                } else {
                    self.average_char_width as u32
                }
            })
            .sum();
        thousandths as f32 / 1000.0
    }

    /// Width of `s` in millimetres when set at `size_pt`.
    pub fn measure_mm(&self, s: &str, size_pt: f32) -> f32 {
        self.measure_str(s) * size_pt / PT_PER_MM
    }

    /// Greedy word-wrap of `text` into lines no wider than `max_width_mm`.
    ///
    /// Explicit newlines always start a new line, and blank input lines are kept
    /// so paragraph spacing survives. A single word wider than the line is broken
    /// between characters.
    pub fn wrap_text(&self, text: &str, size_pt: f32, max_width_mm: f32) -> Vec<String> {
        let space_w = self.measure_mm(" ", size_pt);
        let mut lines = Vec::new();

        for paragraph in text.split('\n') {
            let words: Vec<&str> = paragraph.split_whitespace().collect();
            if words.is_empty() {
                lines.push(String::new());
                continue;
            }

            let mut current = String::new();
            let mut current_width = 0.0_f32;

            for word in words {
                let word_w = self.measure_mm(word, size_pt);

                if word_w > max_width_mm {
                    if !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                    }
                    let mut pieces = self.break_word(word, size_pt, max_width_mm);
                    // Keep the tail open so following words can join it.
                    let tail = pieces.pop().unwrap_or_default();
                    lines.extend(pieces);
                    current_width = self.measure_mm(&tail, size_pt);
                    current = tail;
                    continue;
                }

                if current.is_empty() {
                    current.push_str(word);
                    current_width = word_w;
                } else if current_width + space_w + word_w > max_width_mm {
                    lines.push(std::mem::replace(&mut current, word.to_string()));
                    current_width = word_w;
                } else {
                    current.push(' ');
                    current.push_str(word);
                    current_width += space_w + word_w;
                }
            }

            lines.push(current);
        }

        lines
    }

    fn break_word(&self, word: &str, size_pt: f32, max_width_mm: f32) -> Vec<String> {
        let mut pieces = Vec::new();
        let mut piece = String::new();
        let mut piece_width = 0.0_f32;

        for c in word.chars() {
            let mut buf = [0u8; 4];
            let char_w = self.measure_mm(c.encode_utf8(&mut buf), size_pt);
            if !piece.is_empty() && piece_width + char_w > max_width_mm {
                pieces.push(std::mem::take(&mut piece));
                piece_width = 0.0;
            }
            piece.push(c);
            piece_width += char_w;
        }
        pieces.push(piece);
        pieces
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0    1    2    3    4    5    6    7    8    9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        278, 278, 584, 584, 584, 556, 1015,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        278, 278, 278, 469, 556, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
        // {    |    }    ~
        334, 260, 334, 584,
    ],
    average_char_width: 556,
};

static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0    1    2    3    4    5    6    7    8    9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        333, 333, 584, 584, 584, 611, 975,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        333, 278, 333, 584, 556, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
        // {    |    }    ~
        389, 280, 389, 584,
    ],
    average_char_width: 611,
};

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn regular() -> &'static FontMetricTable {
        FontMetricTable::for_style(FontStyle::Regular)
    }

    #[test]
    fn test_measure_known_glyphs() {
        // "Hi" = H(722) + i(222)
        assert!((regular().measure_str("Hi") - 0.944).abs() < 1e-6);
        // Bold "Hi" = H(722) + i(278)
        let bold = FontMetricTable::for_style(FontStyle::Bold);
        assert!((bold.measure_str("Hi") - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_italic_shares_regular_widths() {
        let italic = FontMetricTable::for_style(FontStyle::Italic);
        assert_eq!(italic.measure_str("Work"), regular().measure_str("Work"));
    }

    #[test]
    fn test_non_ascii_uses_average_width() {
        assert!((regular().measure_str("é") - 0.556).abs() < 1e-6);
    }

    #[test]
    fn test_short_text_stays_on_one_line() {
        let lines = regular().wrap_text("Built things.", 11.0, 190.0);
        assert_eq!(lines, vec!["Built things."]);
    }

    #[test]
    fn test_long_text_wraps_without_losing_words() {
        let text = "lorem ipsum dolor sit amet ".repeat(20);
        let lines = regular().wrap_text(&text, 11.0, 100.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(regular().measure_mm(line, 11.0) <= 100.0);
        }
        assert_eq!(
            lines.join(" ").split_whitespace().count(),
            text.split_whitespace().count()
        );
    }

    #[test]
    fn test_explicit_newlines_are_kept() {
        let lines = regular().wrap_text("first\n\nthird", 11.0, 190.0);
        assert_eq!(lines, vec!["first", "", "third"]);
    }

    #[test]
    fn test_oversized_word_is_broken() {
        let word = "x".repeat(200);
        let lines = regular().wrap_text(&word, 11.0, 50.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
        for line in &lines {
            assert!(regular().measure_mm(line, 11.0) <= 50.0);
        }
    }

    #[test]
    fn test_empty_text_yields_one_blank_line() {
        assert_eq!(regular().wrap_text("", 11.0, 190.0), vec![String::new()]);
    }
}

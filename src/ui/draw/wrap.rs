//! Hard wrapping by display width
//!
//! The response panel and toasts wrap their text here instead of through
//! `Paragraph::wrap`, so the number of rows is known before drawing.

use unicode_width::UnicodeWidthChar;

/// Split `text` into rows no wider than `width` columns.
///
/// Every source line yields at least one row. A width of zero leaves lines
/// unwrapped.
pub fn hard_wrap(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width);
    let mut rows = Vec::new();

    for line in text.lines() {
        if width == 0 {
            rows.push(line.to_string());
            continue;
        }

        let mut row = String::new();
        let mut row_width = 0;
        for c in line.chars() {
            let char_width = c.width().unwrap_or(0);
            if row_width + char_width > width && !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            row.push(c);
            row_width += char_width;
        }
        rows.push(row);
    }

    if rows.is_empty() {
        rows.push(String::new());
    }
    rows
}

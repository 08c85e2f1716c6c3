use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Terminal cells needed to draw `s`
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Cut `s` down to at most `max_cells` cells, ending with `…` when cut.
/// Never splits a grapheme cluster.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let budget = max_cells - 1;
    let mut used = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        let w = display_width(g);
        if used + w > budget {
            break;
        }
        used += w;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Byte offset of the grapheme boundary after `offset` (clamped to `s.len()`)
pub fn next_boundary(s: &str, offset: usize) -> usize {
    if offset >= s.len() {
        return s.len();
    }
    s[offset..]
        .grapheme_indices(true)
        .nth(1)
        .map_or(s.len(), |(i, _)| offset + i)
}

/// Byte offset of the grapheme boundary before `offset` (0 at the start)
pub fn prev_boundary(s: &str, offset: usize) -> usize {
    let offset = offset.min(s.len());
    s[..offset]
        .grapheme_indices(true)
        .next_back()
        .map_or(0, |(i, _)| i)
}

/// Display column of byte `offset`
pub fn column_at(s: &str, offset: usize) -> usize {
    display_width(&s[..offset.min(s.len())])
}

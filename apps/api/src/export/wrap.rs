//! Greedy word wrap against a static metric table.
//!
//! Words are never hyphenated. A single word wider than the line is broken
//! at the last character that still fits so nothing runs past the margin.

use crate::export::font_metrics::FontMetricTable;

/// Wraps `text` into lines no wider than `max_width_pt`.
///
/// Whitespace runs collapse to single spaces. Blank text yields no lines.
pub fn wrap_text(
    text: &str,
    metrics: &FontMetricTable,
    size_pt: f32,
    bold: bool,
    max_width_pt: f32,
) -> Vec<String> {
    let measure = |s: &str| metrics.measure_pt(s, size_pt, bold);
    let space_w = metrics.space_pt(size_pt, bold);

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for word in text.split_whitespace() {
        let word_w = measure(word);

        if !current.is_empty() && current_width + space_w + word_w <= max_width_pt {
            current.push(' ');
            current.push_str(word);
            current_width += space_w + word_w;
            continue;
        }

        // Current line is full, or this is the first word.
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if word_w <= max_width_pt {
            current.push_str(word);
            current_width = word_w;
        } else {
            let mut pieces = break_word(word, &measure, max_width_pt);
            // The last piece stays open so following words can join it.
            let last = pieces.pop().unwrap_or_default();
            lines.extend(pieces);
            current_width = measure(&last);
            current = last;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn break_word(word: &str, measure: &impl Fn(&str) -> f32, max_width_pt: f32) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    for c in word.chars() {
        piece.push(c);
        if measure(&piece) > max_width_pt && piece.chars().count() > 1 {
            piece.pop();
            pieces.push(std::mem::take(&mut piece));
            piece.push(c);
        }
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::font_metrics::{get_metrics, FontFamily};

    fn sans() -> &'static FontMetricTable {
        get_metrics(FontFamily::Sans)
    }

    #[test]
    fn test_blank_text_has_no_lines() {
        assert!(wrap_text("", sans(), 9.0, false, 200.0).is_empty());
        assert!(wrap_text("   \n ", sans(), 9.0, false, 200.0).is_empty());
    }

    #[test]
    fn test_short_text_is_one_line_with_collapsed_spaces() {
        let lines = wrap_text("Built   the\tthing", sans(), 9.0, false, 200.0);
        assert_eq!(lines, vec!["Built the thing"]);
    }

    #[test]
    fn test_long_text_wraps_within_width() {
        let text = "Architected a distributed caching layer using consistent hashing, \
                    reducing p99 latency by 40% under peak load across three regions";
        let width = 150.0;
        let lines = wrap_text(text, sans(), 9.0, false, width);
        assert!(lines.len() >= 3, "expected several lines, got {lines:?}");
        for line in &lines {
            assert!(
                sans().measure_pt(line, 9.0, false) <= width,
                "line '{line}' exceeds the column"
            );
        }
        assert_eq!(lines.join(" "), text.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn test_oversized_word_is_broken() {
        let url = "https://example.com/a/very/long/path/that/cannot/possibly/fit/on/one/line";
        let width = 80.0;
        let lines = wrap_text(url, sans(), 9.0, false, width);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), url);
        for line in &lines {
            assert!(sans().measure_pt(line, 9.0, false) <= width);
        }
    }

    #[test]
    fn test_words_continue_after_broken_word() {
        let lines = wrap_text("aaaaaaaaaaaaaaaaaaaaaaaa b", sans(), 10.0, false, 60.0);
        // 10 pt Helvetica fits ten 'a' per 60 pt line.
        assert_eq!(lines.last().map(String::as_str), Some("aaaa b"));
    }
}

pub mod handler;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shortens `text` to at most `max_width` terminal columns, ending with an
/// ellipsis when anything was cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width + 1 > max_width {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::truncate_to_width;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_to_width("blue monday", 20), "blue monday");
    }

    #[test]
    fn long_text_ends_in_ellipsis_within_limit() {
        let truncated = truncate_to_width("a very long song title indeed", 10);
        assert!(truncated.ends_with('…'));
        assert!(unicode_width::UnicodeWidthStr::width(truncated.as_str()) <= 10);
    }

    #[test]
    fn zero_width_yields_nothing() {
        assert_eq!(truncate_to_width("song", 0), "");
    }
}

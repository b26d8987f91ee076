use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Wrap text to `width` display cells. Each logical line wraps
/// independently; breaks land after whitespace when possible, with a
/// character-level fallback for tokens wider than the full width.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return text.lines().map(str::to_string).collect();
    }
    let mut out = Vec::new();
    for line in text.lines() {
        wrap_line(line, width, &mut out);
    }
    if out.is_empty() {
        out.push(String::new());
    }
    out
}

fn wrap_line(line: &str, width: usize, out: &mut Vec<String>) {
    if UnicodeWidthStr::width(line) <= width {
        out.push(line.to_string());
        return;
    }

    let mut current = String::new();
    let mut col = 0;
    // Byte length of `current` up to and including the last whitespace break
    let mut break_at: Option<usize> = None;

    for g in line.graphemes(true) {
        let gw = UnicodeWidthStr::width(g);
        if col + gw > width && !current.is_empty() {
            if let Some(at) = break_at {
                let rest = current.split_off(at);
                out.push(std::mem::take(&mut current));
                current = rest;
            } else {
                out.push(std::mem::take(&mut current));
            }
            col = UnicodeWidthStr::width(current.as_str());
            break_at = None;
        }
        current.push_str(g);
        col += gw;
        if g.chars().all(char::is_whitespace) {
            break_at = Some(current.len());
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_short_line_untouched() {
        assert_eq!(wrap_text("hello", 10), vec!["hello"]);
    }

    #[test]
    fn test_breaks_after_whitespace() {
        assert_eq!(
            wrap_text("one two three", 8),
            vec!["one two ", "three"]
        );
    }

    #[test]
    fn test_long_token_char_wraps() {
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_logical_lines_wrap_independently() {
        assert_eq!(
            wrap_text("first line\nsecond", 6),
            vec!["first ", "line", "second"]
        );
    }

    #[test]
    fn test_empty_text_yields_one_empty_line() {
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn test_zero_width_passthrough() {
        assert_eq!(wrap_text("anything at all", 0), vec!["anything at all"]);
    }
}

//! Small text helpers shared by the TUI and CLI output.

/// Truncate a string to a maximum length, handling multi-byte
/// characters properly. Appends "..." if truncated.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// End a line with "..." within the given width.
fn ellipsize(line: &str, width: usize) -> String {
    let kept: String = line.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Greedy word-wrap into at most `max_lines` lines of `width` chars.
///
/// Words longer than the width are broken mid-word. When the text does
/// not fit, the final line ends in "...".
pub fn wrap_text_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return vec![];
    }

    let text = text.trim();
    if text.is_empty() {
        return vec![];
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: String = word.to_string();

        loop {
            let current_len = current.chars().count();
            let word_len = word.chars().count();

            if current.is_empty() && word_len > width {
                // Break an over-long word at the line width
                let head: String = word.chars().take(width).collect();
                word = word.chars().skip(width).collect();
                lines.push(head);
            } else if current_len + usize::from(!current.is_empty()) + word_len <= width {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(&word);
                break;
            } else {
                lines.push(std::mem::take(&mut current));
            }

            if lines.len() >= max_lines {
                // Out of lines with text left over
                let last = lines.pop().unwrap_or_default();
                lines.push(ellipsize(&last, width));
                return lines;
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

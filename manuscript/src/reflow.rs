//! Line reflow: re-wraps ragged lines to a fixed column width.

/// Default maximum line width in characters.
pub const DEFAULT_MAX_WIDTH: usize = 72;

/// Re-wrap text so no line exceeds `max_width` characters.
///
/// Each input line is wrapped on its own; lines are never joined, and a
/// blank (or whitespace-only) line is kept as an empty line so paragraph
/// breaks survive. A single word wider than `max_width` is emitted alone
/// rather than split.
///
/// # Arguments
/// * `text` - The text to reflow (`\r\n` is normalized to `\n`)
/// * `max_width` - Maximum line width, counted in characters
///
/// # Returns
/// The reflowed text, lines joined with `\n`.
pub fn reflow(text: &str, max_width: usize) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = text.replace("\r\n", "\n");
    let mut output: Vec<String> = Vec::new();

    for line in text.split('\n') {
        if line.trim().is_empty() {
            output.push(String::new());
            continue;
        }
        wrap_line(line, max_width, &mut output);
    }

    output.join("\n")
}

/// Reflow text that may be absent. Missing input yields an empty string.
pub fn reflow_optional(text: Option<&str>, max_width: usize) -> String {
    text.map(|t| reflow(t, max_width)).unwrap_or_default()
}

/// Greedily pack the words of one line into `output`.
fn wrap_line(line: &str, max_width: usize, output: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_len = 0;

    for word in line.split(' ').filter(|w| !w.is_empty()) {
        let word_len = word.chars().count();

        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= max_width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            output.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        output.push(current);
    }
}

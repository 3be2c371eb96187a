//! Quote-aware splitting of one delimited line.

/// Field separator used by the batch import format.
pub const TAB: char = '\t';

/// Splits one line of text into trimmed field values.
///
/// A literal `"` toggles quoted state and is never emitted into the field;
/// while quoted, the separator is ordinary text. Unbalanced quotes are not
/// an error: the toggle simply stays on through end of line. The final
/// accumulated field is always appended, so the result is never empty.
pub fn parse_delimited_line(line: &str, separator: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    for ch in line.chars() {
        if ch == '"' {
            in_quotes = !in_quotes;
        } else if ch == separator && !in_quotes {
            fields.push(current.trim().to_string());
            current.clear();
        } else {
            current.push(ch);
        }
    }
    fields.push(current.trim().to_string());
    fields
}

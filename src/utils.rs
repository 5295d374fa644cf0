/// Field separator of a serialized record.
pub const SEPARATOR: char = '|';

/// Escapes every literal `|` in a title as `\|`.
pub fn escape_title(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());

    for c in s.chars() {
        if c == SEPARATOR {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Reverses [`escape_title`]. Only the `\|` sequence is touched.
pub fn unescape_title(s: &str) -> String {
    s.replace("\\|", "|")
}

/// Splits a serialized record into its fields.
///
/// Style and duration never contain `|`, so the last two separators are taken
/// from the right. The remaining title part is split only on `|` not preceded
/// by a backslash, which keeps titles ending in a backslash intact. Escape sequences
/// are left in place for [`unescape_title`].
pub fn split_record(line: &str) -> Vec<&str> {
    let mut tail: Vec<&str> = line.rsplitn(3, SEPARATOR).collect();
    if tail.len() < 3 {
        return split_unescaped(line);
    }
    tail.reverse();

    let mut fields = split_unescaped(tail[0]);
    fields.extend_from_slice(&tail[1..]);
    fields
}

fn split_unescaped(s: &str) -> Vec<&str> {
    let mut fields = Vec::with_capacity(1);
    let mut start = 0;
    let mut prev = None;

    for (i, c) in s.char_indices() {
        if c == SEPARATOR && prev != Some('\\') {
            fields.push(&s[start..i]);
            start = i + c.len_utf8();
        }
        prev = Some(c);
    }
    fields.push(&s[start..]);

    fields
}

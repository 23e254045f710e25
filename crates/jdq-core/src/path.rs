// Dot-path tokenizer. Unescaped `.` splits segments; `\` escapes the next
// character, so `\.` is a literal dot and `\\` a literal backslash.

pub fn split_segments(path: &str) -> Vec<String> {
    let mut segs = Vec::new();
    let mut buf = String::new();
    let mut escaping = false;
    for ch in path.chars() {
        if escaping {
            buf.push(ch);
            escaping = false;
        } else if ch == '\\' {
            escaping = true;
        } else if ch == '.' {
            segs.push(std::mem::take(&mut buf));
        } else {
            buf.push(ch);
        }
    }
    // A dangling escape at end of input is kept as a literal backslash
    // rather than dropped.
    if escaping {
        buf.push('\\');
    }
    segs.push(buf);
    segs
}

// Inverse of the tokenizer for a single key: `a.b` becomes `a\.b`.
pub fn escape_segment(seg: &str) -> String {
    let mut out = String::with_capacity(seg.len() + 4);
    for ch in seg.chars() {
        if ch == '.' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

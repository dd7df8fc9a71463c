pub fn unescape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => out.push('\n'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Parse a line like "KEY;PARAM=VAL:value" -> ("KEY", "value").
/// Colons inside double-quoted parameter values do not end the name.
pub fn parse_ical_line(line: &str) -> Option<(&str, &str)> {
    let mut in_quotes = false;
    let colon_pos = line.char_indices().find_map(|(i, c)| match c {
        '"' => {
            in_quotes = !in_quotes;
            None
        }
        ':' if !in_quotes => Some(i),
        _ => None,
    })?;
    let key_part = &line[..colon_pos];
    let value = &line[colon_pos + 1..];
    // Strip parameters (e.g., "SUMMARY;LANGUAGE=en" -> "SUMMARY")
    let key = key_part.split(';').next().unwrap_or(key_part);
    Some((key, value))
}

/// Unfold RFC 5545 continuation lines, keeping the 1-based line number each logical line starts on.
pub fn unfold_lines(input: &str) -> Vec<(usize, String)> {
    let mut result: Vec<(usize, String)> = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.starts_with(' ') || line.starts_with('\t') {
            if let Some((_, prev)) = result.last_mut() {
                prev.push_str(&line[1..]);
                continue;
            }
        }
        result.push((idx + 1, line.to_string()));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unescape_sequences() {
        assert_eq!(unescape_text(r"Buy milk\, eggs\; bread"), "Buy milk, eggs; bread");
        assert_eq!(unescape_text(r"line one\nline two"), "line one\nline two");
        assert_eq!(unescape_text(r"C:\\temp"), r"C:\temp");
        assert_eq!(unescape_text(r"\\n is literal"), r"\n is literal");
    }

    #[test]
    fn line_with_params() {
        assert_eq!(parse_ical_line("SUMMARY;LANGUAGE=en:Ship it"), Some(("SUMMARY", "Ship it")));
        assert_eq!(parse_ical_line("PRIORITY:5"), Some(("PRIORITY", "5")));
        assert_eq!(parse_ical_line("garbage"), None);
    }

    #[test]
    fn quoted_parameter_with_colon() {
        assert_eq!(
            parse_ical_line("SUMMARY;ALTREP=\"cid:x\":Ship it"),
            Some(("SUMMARY", "Ship it"))
        );
        assert_eq!(
            parse_ical_line("DESCRIPTION;ALTREP=\"http://a/b\":see: here"),
            Some(("DESCRIPTION", "see: here"))
        );
    }

    #[test]
    fn unfold_keeps_first_line_number() {
        let input = "BEGIN:VTODO\r\nSUMMARY:A very\r\n  long summary\r\nEND:VTODO\r\n";
        let lines = unfold_lines(input);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], (2, "SUMMARY:A very long summary".to_string()));
        assert_eq!(lines[2].0, 4);
    }
}

use std::fmt;

/// An in-progress line from the work log, with its bullet removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub text: String,
}

impl WorkItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl fmt::Display for WorkItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Extract bulleted lines from a work-log dump, skipping `header_lines` of banner first.
pub fn parse_work_log(output: &str, header_lines: usize, bullet: char) -> Vec<WorkItem> {
    output
        .lines()
        .skip(header_lines)
        .filter_map(|line| line.trim().strip_prefix(bullet))
        .map(|rest| WorkItem::new(rest.trim()))
        .collect()
}

/// Collapse an edited buffer into the single line the tool accepts as a new item.
pub fn single_line(text: &str) -> String {
    text.replace("\r\n", " ").replace('\n', " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(items: &[WorkItem]) -> Vec<&str> {
        items.iter().map(|i| i.text.as_str()).collect()
    }

    #[test]
    fn keeps_bulleted_lines_after_header() {
        let output = "Header\n* Write report\n- misc note\n* Buy milk\n";
        let items = parse_work_log(output, 1, '*');
        assert_eq!(texts(&items), vec!["Write report", "Buy milk"]);
    }

    #[test]
    fn header_lines_are_never_items() {
        let output = "* banner\n* second banner\n* Real work\n";
        assert_eq!(texts(&parse_work_log(output, 2, '*')), vec!["Real work"]);
        assert_eq!(parse_work_log(output, 0, '*').len(), 3);
    }

    #[test]
    fn indentation_and_blank_lines() {
        let output = "\
Work log

    -   Indented task
\t- Tabbed task
not - a task
";
        let items = parse_work_log(output, 1, '-');
        assert_eq!(texts(&items), vec!["Indented task", "Tabbed task"]);
    }

    #[test]
    fn header_longer_than_output() {
        assert!(parse_work_log("* only\n", 5, '*').is_empty());
        assert!(parse_work_log("", 0, '*').is_empty());
    }

    #[test]
    fn bare_bullet_yields_empty_item() {
        let items = parse_work_log("*\n", 0, '*');
        assert_eq!(texts(&items), vec![""]);
    }

    #[test]
    fn single_line_collapses_newlines() {
        assert_eq!(single_line("  Fix\nthe faucet\n"), "Fix the faucet");
        assert_eq!(single_line("a\r\nb"), "a b");
        assert_eq!(single_line("\n\n"), "");
    }
}

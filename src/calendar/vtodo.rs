use super::CalendarError;
use super::ical::{parse_ical_line, unescape_text, unfold_lines};
use crate::core::task_record::TaskRecord;

fn malformed(line: usize, reason: impl Into<String>) -> CalendarError {
    CalendarError::Malformed { line, reason: reason.into() }
}

fn parse_number(line: usize, key: &str, value: &str) -> Result<u32, CalendarError> {
    value
        .trim()
        .parse()
        .map_err(|_| malformed(line, format!("{} is not a number: {:?}", key, value)))
}

/// Extract every VTODO in a calendar. Properties of components nested in a VTODO
/// (alarms, mostly) are not the task's own and are skipped.
pub fn parse_todos(ical: &str) -> Result<Vec<TaskRecord>, CalendarError> {
    let mut records = Vec::new();
    let mut stack: Vec<String> = Vec::new();
    let mut current: Option<TaskRecord> = None;
    let mut todo_depth = 0;
    let mut last_line = 0;

    for (line_no, line) in unfold_lines(ical) {
        last_line = line_no;
        if line.trim().is_empty() {
            continue;
        }
        let (key, value) =
            parse_ical_line(&line).ok_or_else(|| malformed(line_no, "expected NAME:VALUE"))?;
        let key = key.to_ascii_uppercase();

        match key.as_str() {
            "BEGIN" => {
                let component = value.trim().to_ascii_uppercase();
                if component == "VTODO" {
                    if current.is_some() {
                        return Err(malformed(line_no, "VTODO nested inside VTODO"));
                    }
                    current = Some(TaskRecord::default());
                    todo_depth = stack.len() + 1;
                }
                stack.push(component);
            }
            "END" => {
                let component = value.trim().to_ascii_uppercase();
                match stack.pop() {
                    Some(open) if open == component => {}
                    Some(open) => {
                        let reason = format!("END:{} does not close BEGIN:{}", component, open);
                        return Err(malformed(line_no, reason));
                    }
                    None => {
                        return Err(malformed(line_no, format!("END:{} without BEGIN", component)));
                    }
                }
                if component == "VTODO" {
                    if let Some(record) = current.take() {
                        records.push(record);
                    }
                }
            }
            _ => {
                let Some(record) = current.as_mut() else { continue };
                if stack.len() != todo_depth {
                    continue;
                }
                match key.as_str() {
                    "SUMMARY" => record.summary = unescape_text(value),
                    "PRIORITY" => record.priority = Some(parse_number(line_no, "PRIORITY", value)?),
                    "PERCENT-COMPLETE" => {
                        let percent = parse_number(line_no, "PERCENT-COMPLETE", value)?;
                        record.percent_complete = Some(percent)
                    }
                    _ => {}
                }
            }
        }
    }

    if let Some(open) = stack.pop() {
        return Err(malformed(last_line, format!("BEGIN:{} is never closed", open)));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_todo_fields() {
        let input = "\
BEGIN:VCALENDAR\r
VERSION:2.0\r
BEGIN:VTODO\r
UID:1\r
SUMMARY:Fix the leaky faucet\\, again\r
PRIORITY:5\r
PERCENT-COMPLETE:40\r
END:VTODO\r
BEGIN:VTODO\r
SUMMARY:Unranked\r
END:VTODO\r
END:VCALENDAR\r
";
        let records = parse_todos(input).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].summary, "Fix the leaky faucet, again");
        assert_eq!(records[0].priority, Some(5));
        assert_eq!(records[0].percent_complete, Some(40));
        assert_eq!(records[1].priority, None);
    }

    #[test]
    fn events_are_not_tasks() {
        let input = "\
BEGIN:VCALENDAR
BEGIN:VEVENT
SUMMARY:Standup
PRIORITY:9
END:VEVENT
END:VCALENDAR
";
        assert!(parse_todos(input).unwrap().is_empty());
    }

    #[test]
    fn alarm_properties_stay_with_the_alarm() {
        let input = "\
BEGIN:VTODO
SUMMARY:Renew passport
PRIORITY:3
BEGIN:VALARM
SUMMARY:Reminder
PRIORITY:1
END:VALARM
END:VTODO
";
        let records = parse_todos(input).unwrap();
        assert_eq!(records[0].summary, "Renew passport");
        assert_eq!(records[0].priority, Some(3));
    }

    #[test]
    fn folded_summary() {
        let input = "BEGIN:VTODO\nSUMMARY:Write the quarterly\n  report\nPRIORITY:1\nEND:VTODO\n";
        let records = parse_todos(input).unwrap();
        assert_eq!(records[0].summary, "Write the quarterly report");
    }

    #[test]
    fn summary_with_quoted_altrep() {
        let input = "BEGIN:VTODO\nSUMMARY;ALTREP=\"cid:part1@example.org\":Ship it\nEND:VTODO\n";
        let records = parse_todos(input).unwrap();
        assert_eq!(records[0].summary, "Ship it");
    }

    #[test]
    fn bad_priority_is_an_error() {
        let input = "BEGIN:VTODO\nSUMMARY:x\nPRIORITY:high\nEND:VTODO\n";
        match parse_todos(input) {
            Err(CalendarError::Malformed { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected malformed, got {:?}", other),
        }
    }

    #[test]
    fn unbalanced_components_are_errors() {
        assert!(parse_todos("BEGIN:VTODO\nSUMMARY:x\n").is_err());
        assert!(parse_todos("END:VTODO\n").is_err());
        assert!(parse_todos("BEGIN:VTODO\nEND:VEVENT\n").is_err());
        assert!(parse_todos("BEGIN:VTODO\nBEGIN:VTODO\nEND:VTODO\nEND:VTODO\n").is_err());
    }

    #[test]
    fn line_without_colon_is_an_error() {
        assert!(matches!(
            parse_todos("BEGIN:VTODO\nnonsense\nEND:VTODO\n"),
            Err(CalendarError::Malformed { line: 2, .. })
        ));
    }

    #[test]
    fn empty_input() {
        assert!(parse_todos("").unwrap().is_empty());
    }
}

// src/report/mod.rs
// =============================================================================
// Turns the engine's entries into output.
//
// Two formats:
// - text: one "<STATUS> - <URL>" line per entry, CRLF-terminated
// - json: a JSON array of {"url": ..., "status": ...} objects
//
// Both write to any `Write` sink (stdout in main.rs, a Vec<u8> in tests).
// Entries are written exactly in the order the engine recorded them - no
// sorting, filtering or deduplication happens here.
// =============================================================================

use std::io::{self, Write};

use crate::model::ReportEntry;

// Writes the plain-text report
//
// Example output:
//   200 - http://www.bobbylough.com\r\n
//   INVALID - test.com\r\n
pub fn report<W: Write + ?Sized>(entries: &[ReportEntry], out: &mut W) -> io::Result<()> {
    for entry in entries {
        write!(out, "{} - {}\r\n", entry.outcome, entry.url)?;
    }
    out.flush()
}

// Writes the report as pretty-printed JSON, followed by a newline
pub fn report_json<W: Write + ?Sized>(entries: &[ReportEntry], out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, entries)?;
    writeln!(out)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Outcome;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<ReportEntry> {
        vec![
            ReportEntry::new("http://www.bobbylough.com", Outcome::Status(200)),
            ReportEntry::new("test.com", Outcome::Invalid),
            ReportEntry::new("http://www.bobbylough.com/gone", Outcome::Status(404)),
        ]
    }

    #[test]
    fn test_text_report_lines() {
        let mut out = Vec::new();
        report(&sample(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "200 - http://www.bobbylough.com\r\n\
             INVALID - test.com\r\n\
             404 - http://www.bobbylough.com/gone\r\n"
        );
    }

    #[test]
    fn test_empty_report_writes_nothing() {
        let mut out = Vec::new();
        report(&[], &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_json_report_keeps_order() {
        let mut out = Vec::new();
        report_json(&sample(), &mut out).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let items = parsed.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["url"], "http://www.bobbylough.com");
        assert_eq!(items[0]["status"], 200);
        assert_eq!(items[1]["status"], "INVALID");
        assert_eq!(items[2]["status"], 404);
    }
}

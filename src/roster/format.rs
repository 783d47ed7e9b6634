//! Line-level encoding of the roster store file.
//!
//! The store is a tab-separated UTF-8 text file, one record per line,
//! preceded by an optional `#nextId=N` header. Two older layouts (4 and
//! 5 fields) are still accepted on read; writes always emit the current
//! 6-field layout:
//!
//! ```text
//! #nextId=7
//! 1\tAna\tana@example.com\t30\t1000.50\tF
//! ```
//!
//! Parsing never fails: a line that cannot be understood is reported as
//! [`ParsedLine::Skip`] and the caller drops it. That policy is what lets
//! a store survive hand edits and files written by older versions.

use crate::model::Record;
use tracing::warn;

/// Header token recording the next id to assign, compared
/// case-insensitively on read.
pub const NEXT_ID_PREFIX: &str = "#nextId=";

/// Outcome of parsing one line of the store file.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedLine {
    /// A well-formed record line, in any of the accepted layouts.
    Record(Record),
    /// The `#nextId=` header line.
    NextId(u32),
    /// Blank, comment, or malformed. Dropped without error.
    Skip,
}

pub fn parse_line(line: &str) -> ParsedLine {
    if line.trim().is_empty() {
        return ParsedLine::Skip;
    }
    if line.starts_with('#') {
        return parse_header(line);
    }

    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < 4 {
        warn!(field_count = fields.len(), "skipping short line");
        return ParsedLine::Skip;
    }
    let Ok(id) = fields[0].trim().parse::<u32>() else {
        warn!(value = fields[0], "skipping line with unparseable id");
        return ParsedLine::Skip;
    };
    let Ok(age) = fields[3].trim().parse::<u32>() else {
        warn!(id, value = fields[3], "skipping line with unparseable age");
        return ParsedLine::Skip;
    };

    // Layouts: 4 fields stop at age, 5 add salary, 6 add gender.
    let salary = if fields.len() >= 5 {
        fields[4].trim().parse::<f64>().unwrap_or(0.0)
    } else {
        0.0
    };
    let gender = if fields.len() >= 6 {
        fields[5].trim().to_uppercase()
    } else {
        String::new()
    };

    ParsedLine::Record(Record {
        id,
        name: fields[1].to_string(),
        email: fields[2].to_string(),
        age,
        salary,
        gender,
    })
}

fn parse_header(line: &str) -> ParsedLine {
    let is_next_id = line
        .get(..NEXT_ID_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(NEXT_ID_PREFIX));
    if !is_next_id {
        // Any other # line is a comment.
        return ParsedLine::Skip;
    }
    match line[NEXT_ID_PREFIX.len()..].trim().parse::<i64>() {
        Ok(n) => ParsedLine::NextId(n.clamp(1, u32::MAX as i64) as u32),
        Err(_) => ParsedLine::Skip,
    }
}

/// Renders a record as one line in the current 6-field layout.
///
/// Text fields have embedded separators replaced with a space and are
/// trimmed, so a saved file always splits back into the same field count.
/// Salary uses a fixed two-decimal representation with `.` as the
/// decimal separator regardless of locale.
pub fn serialize_record(record: &Record) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{:.2}\t{}",
        record.id,
        clean_field(&record.name),
        clean_field(&record.email),
        record.age,
        record.salary,
        clean_field(&record.gender),
    )
}

fn clean_field(value: &str) -> String {
    value
        .replace(['\t', '\n', '\r'], " ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed_record(line: &str) -> Record {
        match parse_line(line) {
            ParsedLine::Record(r) => r,
            other => panic!("expected a record from {:?}, got {:?}", line, other),
        }
    }

    #[test]
    fn parses_current_six_field_layout() {
        let r = parsed_record("3\tAna\tana@example.com\t30\t1000.50\tf");
        assert_eq!(r.id, 3);
        assert_eq!(r.name, "Ana");
        assert_eq!(r.email, "ana@example.com");
        assert_eq!(r.age, 30);
        assert_eq!(r.salary, 1000.50);
        assert_eq!(r.gender, "F");
    }

    #[test]
    fn parses_five_field_legacy_layout() {
        let r = parsed_record("2\tBob\tbob@example.com\t41\t950.25");
        assert_eq!(r.salary, 950.25);
        assert_eq!(r.gender, "");
    }

    #[test]
    fn parses_four_field_legacy_layout() {
        let r = parsed_record("1\tCarla\tcarla@example.com\t25");
        assert_eq!(r.salary, 0.0);
        assert_eq!(r.gender, "");
    }

    #[test]
    fn unparseable_salary_defaults_to_zero() {
        let r = parsed_record("1\tAna\tana@example.com\t30\tlots\tM");
        assert_eq!(r.salary, 0.0);
        assert_eq!(r.gender, "M");
    }

    #[test]
    fn skips_blank_comment_and_short_lines() {
        assert_eq!(parse_line(""), ParsedLine::Skip);
        assert_eq!(parse_line("   \t  "), ParsedLine::Skip);
        assert_eq!(parse_line("# a comment"), ParsedLine::Skip);
        assert_eq!(parse_line("only\ttwo"), ParsedLine::Skip);
    }

    #[test]
    fn skips_lines_with_bad_id_or_age() {
        assert_eq!(
            parse_line("abc\tAna\tana@example.com\t30"),
            ParsedLine::Skip
        );
        assert_eq!(
            parse_line("1\tAna\tana@example.com\tthirty"),
            ParsedLine::Skip
        );
    }

    #[test]
    fn header_is_case_insensitive() {
        assert_eq!(parse_line("#nextId=12"), ParsedLine::NextId(12));
        assert_eq!(parse_line("#NEXTID=12"), ParsedLine::NextId(12));
        assert_eq!(parse_line("#nextid=12"), ParsedLine::NextId(12));
    }

    #[test]
    fn header_value_is_clamped_to_at_least_one() {
        assert_eq!(parse_line("#nextId=0"), ParsedLine::NextId(1));
        assert_eq!(parse_line("#nextId=-5"), ParsedLine::NextId(1));
    }

    #[test]
    fn garbled_header_is_a_comment() {
        assert_eq!(parse_line("#nextId=soon"), ParsedLine::Skip);
        assert_eq!(parse_line("#next"), ParsedLine::Skip);
    }

    #[test]
    fn serializes_in_current_layout() {
        let r = Record {
            id: 7,
            name: "Ana".into(),
            email: "ana@example.com".into(),
            age: 30,
            salary: 1000.5,
            gender: "F".into(),
        };
        assert_eq!(
            serialize_record(&r),
            "7\tAna\tana@example.com\t30\t1000.50\tF"
        );
    }

    #[test]
    fn serializer_strips_embedded_tabs() {
        let r = Record {
            id: 1,
            name: " Ana\tMaria ".into(),
            email: "ana@example.com".into(),
            age: 30,
            salary: 0.0,
            gender: "F".into(),
        };
        let line = serialize_record(&r);
        assert_eq!(line.split('\t').count(), 6);
        assert!(line.contains("Ana Maria"));
    }

    #[test]
    fn record_round_trips_through_a_line() {
        let original = Record {
            id: 42,
            name: "Zoé".into(),
            email: "zoe@example.com".into(),
            age: 58,
            salary: 2345.67,
            gender: "F".into(),
        };
        let reparsed = parsed_record(&serialize_record(&original));
        assert_eq!(reparsed, original);
    }
}

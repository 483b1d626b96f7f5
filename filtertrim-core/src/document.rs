// Filter list document model
//
// A filter list is split once into a header (the leading run of comment and
// blank lines) and a body (everything from the first rule onward). Trimming
// never touches the header; it keeps a prefix of the body's rules.

use crate::classifier::LineClassifier;
use crate::types::{TrimMarker, TrimReport};
use serde::{Deserialize, Serialize};

/// Characters that end a line. `\r\n` counts as a single break.
pub const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Split text into lines on any of [`LINE_BREAKS`].
///
/// Terminators are not kept, a trailing terminator does not produce an empty
/// last line, and empty input yields no lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        match rest.char_indices().find(|(_, c)| LINE_BREAKS.contains(c)) {
            Some((idx, c)) => {
                lines.push(&rest[..idx]);
                let terminator = if rest[idx..].starts_with("\r\n") { 2 } else { c.len_utf8() };
                rest = &rest[idx + terminator..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }

    lines
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterList {
    pub header: Vec<String>,
    pub body: Vec<String>,
}

impl FilterList {
    pub fn parse(text: &str, classifier: &LineClassifier) -> Self {
        let lines = split_lines(text);

        // No rule at all means the whole file is header
        let body_start = lines
            .iter()
            .position(|line| !classifier.classify(line).is_header_line())
            .unwrap_or(lines.len());

        let (header, body) = lines.split_at(body_start);
        log::debug!(
            "Split filter list: {} header lines, {} body lines",
            header.len(),
            body.len()
        );

        Self {
            header: header.iter().map(|line| line.to_string()).collect(),
            body: body.iter().map(|line| line.to_string()).collect(),
        }
    }

    /// Rule lines of the body, in order. Body comments and blanks are skipped.
    pub fn rules<'a>(&'a self, classifier: &'a LineClassifier) -> impl Iterator<Item = &'a str> + 'a {
        self.body
            .iter()
            .map(String::as_str)
            .filter(move |line| classifier.is_rule(line))
    }

    /// Keep body rules under the untouched header as `marker.max_rules` allows:
    /// the first N, or all but the last N when the limit is negative.
    pub fn trim(&self, classifier: &LineClassifier, marker: TrimMarker) -> (TrimmedList, TrimReport) {
        let rules_found = self.rules(classifier).count();
        let kept: Vec<String> = self
            .rules(classifier)
            .take(marker.max_rules.kept_count(rules_found))
            .map(str::to_string)
            .collect();

        let report = TrimReport {
            header_lines: self.header.len(),
            rules_found,
            rules_kept: kept.len(),
            rules_discarded: rules_found - kept.len(),
            body_lines_dropped: self.body.len() - rules_found,
        };

        let trimmed = TrimmedList {
            header: self.header.clone(),
            marker,
            rules: kept,
        };

        (trimmed, report)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrimmedList {
    pub header: Vec<String>,
    pub marker: TrimMarker,
    pub rules: Vec<String>,
}

impl TrimmedList {
    /// Header, marker, then rules.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.header.len() + 1 + self.rules.len());
        lines.extend(self.header.iter().cloned());
        lines.push(self.marker.to_string());
        lines.extend(self.rules.iter().cloned());
        lines
    }

    /// Newline-joined with exactly one trailing newline.
    pub fn render(&self) -> String {
        let mut out = self.lines().join("\n");
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RuleLimit;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn marker(max_rules: usize) -> TrimMarker {
        marker_for(RuleLimit::keep_first(max_rules))
    }

    fn marker_for(limit: RuleLimit) -> TrimMarker {
        TrimMarker::new(limit, Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap())
    }

    #[test]
    fn test_split_lines_terminators() {
        assert_eq!(split_lines(""), Vec::<&str>::new());
        assert_eq!(split_lines("a"), vec!["a"]);
        assert_eq!(split_lines("a\n"), vec!["a"]);
        assert_eq!(split_lines("a\n\n"), vec!["a", ""]);
        assert_eq!(split_lines("a\r\nb\rc\n"), vec!["a", "b", "c"]);
        assert_eq!(split_lines("\n"), vec![""]);
    }

    #[test]
    fn test_split_lines_every_break_character() {
        for brk in LINE_BREAKS {
            let text = format!("a{brk}b{brk}");
            assert_eq!(split_lines(&text), vec!["a", "b"], "break {:?}", brk);
        }
        assert_eq!(
            split_lines("a\u{0c}b\u{2028}c\u{0b}d\u{1c}e\u{85}f\u{1d}g\u{1e}h\u{2029}i"),
            vec!["a", "b", "c", "d", "e", "f", "g", "h", "i"]
        );
        // \r\n is one break, \n\r is two
        assert_eq!(split_lines("a\r\nb\n\rc"), vec!["a", "b", "", "c"]);
    }

    #[test]
    fn test_separators_split_rules_and_unit_separator_is_blank() {
        let classifier = LineClassifier::default();
        let list = FilterList::parse(
            "! h\na\u{0c}b\u{2028}c\u{0b}d\u{1c}e\u{85}f\n\u{1f}\n",
            &classifier,
        );
        let (trimmed, report) = list.trim(&classifier, marker(800));

        assert_eq!(trimmed.header, vec!["! h"]);
        assert_eq!(trimmed.rules, vec!["a", "b", "c", "d", "e", "f"]);
        assert_eq!(report.rules_found, 6);
        assert_eq!(report.body_lines_dropped, 1);
    }

    #[test]
    fn test_parse_header_and_body() {
        let classifier = LineClassifier::default();
        let list = FilterList::parse("! Title\n\n# x\nrule1\n! mid\nrule2", &classifier);
        assert_eq!(list.header, vec!["! Title", "", "# x"]);
        assert_eq!(list.body, vec!["rule1", "! mid", "rule2"]);
    }

    #[test]
    fn test_parse_without_rules_is_all_header() {
        let classifier = LineClassifier::default();
        let list = FilterList::parse("! a\n\n# b\n", &classifier);
        assert_eq!(list.header, vec!["! a", "", "# b"]);
        assert!(list.body.is_empty());
    }

    #[test]
    fn test_trim_drops_body_comments_and_extra_rules() {
        let classifier = LineClassifier::default();
        let list = FilterList::parse("# header\n\nrule1\n! comment\nrule2\nrule3", &classifier);
        let (trimmed, report) = list.trim(&classifier, marker(2));

        assert_eq!(trimmed.rules, vec!["rule1", "rule2"]);
        assert_eq!(
            report,
            TrimReport {
                header_lines: 2,
                rules_found: 3,
                rules_kept: 2,
                rules_discarded: 1,
                body_lines_dropped: 1,
            }
        );
    }

    #[test]
    fn test_body_blanks_dropped_even_under_limit() {
        let classifier = LineClassifier::default();
        let list = FilterList::parse("a\n\nb\n   \nc\n", &classifier);
        let (trimmed, report) = list.trim(&classifier, marker(100));

        assert_eq!(trimmed.rules, vec!["a", "b", "c"]);
        assert_eq!(report.body_lines_dropped, 2);
        assert_eq!(report.rules_discarded, 0);
    }

    #[test]
    fn test_zero_max_rules_keeps_header_only() {
        let classifier = LineClassifier::default();
        let list = FilterList::parse("! h\nrule\n", &classifier);
        let (trimmed, _) = list.trim(&classifier, marker(0));
        assert_eq!(
            trimmed.render(),
            "! h\n! Trimmed to 0 rules on 2024-01-02T03:04:05Z\n"
        );
    }

    #[test]
    fn test_render_layout() {
        let classifier = LineClassifier::default();
        let list = FilterList::parse("# header\n\nrule1\n! comment\nrule2\nrule3", &classifier);
        let (trimmed, report) = list.trim(&classifier, marker(2));

        assert_eq!(
            trimmed.render(),
            "# header\n\n! Trimmed to 2 rules on 2024-01-02T03:04:05Z\nrule1\nrule2\n"
        );
        assert_eq!(trimmed.lines().len(), report.output_lines());
    }

    #[test]
    fn test_empty_input_renders_marker_only() {
        let classifier = LineClassifier::default();
        let (trimmed, _) = FilterList::parse("", &classifier).trim(&classifier, marker(800));
        assert_eq!(
            trimmed.render(),
            "! Trimmed to 800 rules on 2024-01-02T03:04:05Z\n"
        );
    }

    #[test]
    fn test_negative_limit_drops_rules_from_the_end() {
        let classifier = LineClassifier::default();
        let list = FilterList::parse("! h\nr1\n! c\nr2\nr3\nr4\nr5\n", &classifier);
        let (trimmed, report) = list.trim(&classifier, marker_for("-3".parse().unwrap()));

        assert_eq!(trimmed.rules, vec!["r1", "r2"]);
        assert_eq!(report.rules_discarded, 3);
        assert_eq!(
            trimmed.lines()[1],
            "! Trimmed to -3 rules on 2024-01-02T03:04:05Z"
        );

        let (trimmed, _) = list.trim(&classifier, marker_for("-9".parse().unwrap()));
        assert!(trimmed.rules.is_empty());
    }

    #[test]
    fn test_oversized_limit_keeps_everything() {
        let classifier = LineClassifier::default();
        let list = FilterList::parse("r1\nr2\n", &classifier);
        let limit: RuleLimit = "99999999999999999999999".parse().unwrap();
        let (trimmed, report) = list.trim(&classifier, marker_for(limit));

        assert_eq!(trimmed.rules, vec!["r1", "r2"]);
        assert_eq!(report.rules_discarded, 0);
        assert_eq!(
            trimmed.lines()[0],
            "! Trimmed to 99999999999999999999999 rules on 2024-01-02T03:04:05Z"
        );
    }
}

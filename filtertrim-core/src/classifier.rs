use crate::config::TrimConfig;
use crate::types::LineKind;

/// Whitespace for blank-line detection and number parsing: Unicode
/// whitespace plus the information separators U+001C..=U+001F.
pub fn is_blank_char(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Sorts filter list lines into comments, blanks and rules.
///
/// Comment detection looks at the raw line: `  ! note` is a rule, not a
/// comment, because the prefix check does not skip leading whitespace.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    comment_prefixes: Vec<String>,
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::from_config(&TrimConfig::default())
    }
}

impl LineClassifier {
    pub fn new<I, S>(comment_prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            comment_prefixes: comment_prefixes
                .into_iter()
                .map(Into::into)
                .filter(|p: &String| !p.is_empty())
                .collect(),
        }
    }

    pub fn from_config(config: &TrimConfig) -> Self {
        Self::new(config.comment_prefixes.iter().cloned())
    }

    pub fn classify(&self, line: &str) -> LineKind {
        if self.is_comment(line) {
            LineKind::Comment
        } else if self.is_blank(line) {
            LineKind::Blank
        } else {
            LineKind::Rule
        }
    }

    pub fn is_comment(&self, line: &str) -> bool {
        self.comment_prefixes
            .iter()
            .any(|prefix| line.starts_with(prefix.as_str()))
    }

    pub fn is_blank(&self, line: &str) -> bool {
        line.chars().all(is_blank_char)
    }

    pub fn is_rule(&self, line: &str) -> bool {
        self.classify(line) == LineKind::Rule
    }
}

use crate::classifier::LineClassifier;
use crate::config::TrimConfig;
use crate::document::{FilterList, TrimmedList};
use crate::error::Result;
use crate::storage::{FileStorage, ListStorage};
use crate::types::{TrimMarker, TrimReport};
use chrono::{DateTime, Utc};
use std::path::Path;

pub struct ListTrimmer {
    config: TrimConfig,
    classifier: LineClassifier,
    storage: Box<dyn ListStorage>,
}

impl ListTrimmer {
    /// Create ListTrimmer with an explicit storage backend
    pub fn new_with_storage(config: TrimConfig, storage: Box<dyn ListStorage>) -> Self {
        Self {
            classifier: LineClassifier::from_config(&config),
            config,
            storage,
        }
    }

    /// Convenience constructor for CLI usage on local files
    pub fn new(config: TrimConfig) -> Self {
        Self::new_with_storage(config, Box::new(FileStorage::new()))
    }

    pub fn config(&self) -> &TrimConfig {
        &self.config
    }

    /// Text → trimmed list, with no I/O. `trimmed_at` goes into the marker line.
    pub fn trim_text(&self, text: &str, trimmed_at: DateTime<Utc>) -> (TrimmedList, TrimReport) {
        let list = FilterList::parse(text, &self.classifier);
        let marker = TrimMarker::new(self.config.max_rules.clone(), trimmed_at);
        list.trim(&self.classifier, marker)
    }

    /// Read `input`, trim it, and write the result to `output`.
    ///
    /// `input` and `output` may be the same path; the list is fully read before
    /// anything is written.
    pub fn trim_file(&self, input: &Path, output: &Path) -> Result<TrimReport> {
        let text = self.storage.read_list(input)?;
        log::debug!("Read {} bytes from {}", text.len(), input.display());

        let (trimmed, report) = self.trim_text(&text, Utc::now());
        self.storage.write_list(output, &trimmed.render())?;

        log::info!(
            "Trimmed {}: kept {} of {} rules (max {}), dropped {} body comment/blank lines",
            output.display(),
            report.rules_kept,
            report.rules_found,
            self.config.max_rules,
            report.body_lines_dropped
        );
        if report.rules_discarded > 0 {
            log::debug!("Discarded {} rules past the limit", report.rules_discarded);
        }

        Ok(report)
    }

    /// Trim a list in place
    pub fn trim_in_place(&self, path: &Path) -> Result<TrimReport> {
        self.trim_file(path, path)
    }
}

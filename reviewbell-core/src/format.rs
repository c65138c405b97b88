//! Status message formatting

use serde_json::Value;

use crate::domain::{StatusLexicon, WorkItemRecord};
use crate::error::Result;

/// Turns work item records into the text delivered to the recipient
#[derive(Debug, Clone, Default)]
pub struct StatusFormatter {
    lexicon: StatusLexicon,
}

impl StatusFormatter {
    pub fn new(lexicon: StatusLexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &StatusLexicon {
        &self.lexicon
    }

    /// Formats one raw record taken from the `homeworks` array
    pub fn format(&self, record: &Value) -> Result<String> {
        let record = WorkItemRecord::from_value(record)?;
        self.format_record(&record)
    }

    /// Formats an already extracted record
    ///
    /// Recipients match on this exact template; keep it byte-for-byte.
    pub fn format_record(&self, record: &WorkItemRecord) -> Result<String> {
        let verdict = self.lexicon.verdict(&record.status)?;
        Ok(format!(
            "Изменился статус проверки работы \"{}\". {}",
            record.name, verdict
        ))
    }
}

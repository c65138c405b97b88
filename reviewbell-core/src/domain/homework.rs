//! Work item domain types

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::{Result, ValidationError};

/// Key of the work item name inside a record
pub const NAME_FIELD: &str = "homework_name";

/// Key of the review status inside a record
pub const STATUS_FIELD: &str = "status";

/// A single work item as reported by the status endpoint
///
/// Only the fields the notifier needs are kept. Records are produced by
/// one poll and dropped once their message has been derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItemRecord {
    #[serde(rename = "homework_name")]
    pub name: String,
    pub status: String,
}

impl WorkItemRecord {
    /// Extracts a record from one raw element of the `homeworks` array
    ///
    /// Missing keys are reported by name. Extra keys are ignored.
    pub fn from_value(value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| ValidationError::schema("запись в homeworks не словарь"))?;

        let name = required_str(object, NAME_FIELD)?;
        let status = required_str(object, STATUS_FIELD)?;

        Ok(Self {
            name: name.to_string(),
            status: status.to_string(),
        })
    }
}

fn required_str<'a>(
    object: &'a serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<&'a str> {
    match object.get(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingField(field)),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(ValidationError::schema(format!(
            "ключ {} не является строкой",
            field
        ))),
    }
}

/// Mapping from status codes to human-readable verdicts
///
/// Built once at startup and read-only afterwards. Looking up a code
/// that is not in the lexicon is an error, never a silent default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLexicon {
    verdicts: BTreeMap<String, String>,
}

impl StatusLexicon {
    /// Creates a lexicon from `(status, verdict)` pairs
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            verdicts: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Looks up the verdict for a status code
    pub fn verdict(&self, status: &str) -> Result<&str> {
        self.verdicts
            .get(status)
            .map(String::as_str)
            .ok_or_else(|| ValidationError::UnknownStatus(status.to_string()))
    }

    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }
}

impl Default for StatusLexicon {
    fn default() -> Self {
        Self::new([
            ("approved", "Работа проверена: ревьюеру всё понравилось. Ура!"),
            ("reviewing", "Работа взята на проверку ревьюером."),
            ("rejected", "Работа проверена: у ревьюера есть замечания."),
        ])
    }
}

//! Status endpoint response DTO and structural validation

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, ValidationError};

/// Key of the records array in a status response
pub const RECORDS_FIELD: &str = "homeworks";

/// Key of the server-issued cursor in a status response
pub const CURSOR_FIELD: &str = "current_date";

/// One structurally valid status endpoint response
///
/// Records are kept as raw JSON. Per-record checks happen when a record
/// is formatted, so a single malformed record never hides a valid cursor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusPage {
    pub homeworks: Vec<Value>,
    pub current_date: i64,
}

impl StatusPage {
    /// Consumes the page, keeping only the most recent record
    pub fn into_latest(self) -> Option<Value> {
        self.homeworks.into_iter().next()
    }

    pub fn is_empty(&self) -> bool {
        self.homeworks.is_empty()
    }
}

/// Structurally validates a decoded status payload
///
/// Checks, in order: the payload is an object, it carries an integer
/// `current_date`, it carries `homeworks`, and `homeworks` is an array.
pub fn validate_response(payload: Value) -> Result<StatusPage> {
    let Value::Object(mut object) = payload else {
        return Err(ValidationError::schema("ответ API не словарь"));
    };

    let current_date = match object.get(CURSOR_FIELD) {
        None | Some(Value::Null) => return Err(ValidationError::MissingCursor),
        Some(value) => value.as_i64().ok_or_else(|| {
            ValidationError::schema(format!("ключ {} не является целым числом", CURSOR_FIELD))
        })?,
    };

    let homeworks = match object.remove(RECORDS_FIELD) {
        None => return Err(ValidationError::MissingField(RECORDS_FIELD)),
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(ValidationError::schema(format!(
                "ключ {} не является списком",
                RECORDS_FIELD
            )));
        }
    };

    Ok(StatusPage {
        homeworks,
        current_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_page_with_records() {
        let payload = json!({
            "homeworks": [
                {"homework_name": "proj2", "status": "reviewing"},
                {"homework_name": "proj1", "status": "approved"}
            ],
            "current_date": 1000
        });

        let page = validate_response(payload).unwrap();
        assert_eq!(page.current_date, 1000);
        assert_eq!(page.homeworks.len(), 2);
        assert_eq!(page.into_latest().unwrap()["homework_name"], "proj2");
    }

    #[test]
    fn test_validate_empty_page() {
        let page = validate_response(json!({"homeworks": [], "current_date": 2000})).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.current_date, 2000);
        assert_eq!(page.into_latest(), None);
    }

    #[test]
    fn test_validate_passes_malformed_records_through() {
        let page = validate_response(json!({
            "homeworks": [{"unexpected": true}, 42],
            "current_date": 5
        }))
        .unwrap();
        assert_eq!(page.homeworks, vec![json!({"unexpected": true}), json!(42)]);
    }

    #[test]
    fn test_validate_rejects_non_object() {
        for payload in [json!([]), json!("text"), json!(null), json!(12)] {
            let err = validate_response(payload).unwrap_err();
            assert!(matches!(err, ValidationError::Schema(_)));
        }
    }

    #[test]
    fn test_validate_missing_cursor() {
        assert_eq!(
            validate_response(json!({"homeworks": []})),
            Err(ValidationError::MissingCursor)
        );
        assert_eq!(
            validate_response(json!({"homeworks": [], "current_date": null})),
            Err(ValidationError::MissingCursor)
        );
    }

    #[test]
    fn test_validate_missing_cursor_reported_before_records() {
        assert_eq!(validate_response(json!({})), Err(ValidationError::MissingCursor));
    }

    #[test]
    fn test_validate_missing_records() {
        assert_eq!(
            validate_response(json!({"current_date": 1000})),
            Err(ValidationError::MissingField("homeworks"))
        );
    }

    #[test]
    fn test_validate_records_not_a_list() {
        let err = validate_response(json!({"homeworks": {"a": 1}, "current_date": 1}))
            .unwrap_err();
        assert!(matches!(err, ValidationError::Schema(_)));
    }

    #[test]
    fn test_validate_cursor_not_an_integer() {
        let err = validate_response(json!({"homeworks": [], "current_date": "soon"}))
            .unwrap_err();
        assert!(matches!(err, ValidationError::Schema(_)));
    }
}

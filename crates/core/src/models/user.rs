use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::CoreError;

/// A user's document in the store.
///
/// Beyond the fields this service owns (`totalBalance`, `lastUpdated`),
/// documents may carry arbitrary fields written by other services
/// (`displayName`, `email`, ...). Unknown fields are preserved verbatim in
/// the flattened `extra` map, so a merge write can never clobber them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Last persisted total, absent until the first recalculation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_balance: Option<Decimal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,

    /// Any other fields present on the document, kept as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserDocument {
    /// Apply a field-level merge: the named fields are inserted or
    /// overwritten, every other field on the document is left untouched.
    pub fn merged_with(&self, fields: &Map<String, Value>) -> Result<UserDocument, CoreError> {
        let Value::Object(mut doc) = serde_json::to_value(self)? else {
            return Err(CoreError::Serialization(
                "User document did not serialize to an object".into(),
            ));
        };
        for (key, value) in fields {
            doc.insert(key.clone(), value.clone());
        }
        serde_json::from_value(Value::Object(doc))
            .map_err(|e| CoreError::Deserialization(format!("Merged user document invalid: {e}")))
    }
}

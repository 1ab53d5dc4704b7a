//! Object metadata shared by every API version.
//!
//! This is a deliberately small subset of the Kubernetes `meta/v1` types. Only the
//! fields the conversion engine reads or must carry across a round trip are modelled.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// String-keyed metadata entries (labels, annotations).
pub type StringMap = BTreeMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeMeta {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_version: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
}

impl TypeMeta {
    pub fn new(api_version: &str, kind: &str) -> Self {
        Self {
            api_version: api_version.to_string(),
            kind: kind.to_string(),
        }
    }
}

/// Per-object metadata.
///
/// Everything except `labels` and `annotations` is identity metadata: it tracks the live
/// object and is never stashed or restored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generate_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: StringMap,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: StringMap,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub owner_references: Vec<OwnerReference>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub finalizers: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub managed_fields: Vec<ManagedFieldsEntry>,
}

impl ObjectMeta {
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }

    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.annotations.get(key).map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerReference {
    pub api_version: String,
    pub kind: String,
    pub name: String,
    pub uid: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controller: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_owner_deletion: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedFieldsEntry {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub manager: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub operation: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_version: Option<String>,

    #[serde(default, rename = "continue", skip_serializing_if = "Option::is_none")]
    pub continue_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectReference {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uid: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_version: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource_version: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub field_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelSelector {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub match_labels: StringMap,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub match_expressions: Vec<LabelSelectorRequirement>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelSelectorRequirement {
    pub key: String,
    pub operator: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

/// A value that is either an integer or a string, e.g. `maxSurge: 1` or `maxSurge: "25%"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IntOrString {
    Int(i32),
    String(String),
}

/// Condition status values.
pub mod condition_status {
    pub const TRUE: &str = "True";
    pub const FALSE: &str = "False";
    pub const UNKNOWN: &str = "Unknown";
}

/// An observation of an object's state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type")]
    pub type_: String,

    pub status: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub severity: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reason: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

/// Returns true if a condition of `type_` is present with status `True`.
pub fn is_condition_true(conditions: &[Condition], type_: &str) -> bool {
    conditions
        .iter()
        .any(|c| c.type_ == type_ && c.status == condition_status::TRUE)
}

/// Sets the condition of `type_` to `True`, replacing an existing entry of the same type.
///
/// The transition time is left untouched: conversions are pure and never read the clock.
pub fn mark_condition_true(conditions: &mut Vec<Condition>, type_: &str) {
    if let Some(existing) = conditions.iter_mut().find(|c| c.type_ == type_) {
        existing.status = condition_status::TRUE.to_string();
        existing.severity.clear();
        existing.reason.clear();
        existing.message.clear();
        return;
    }
    conditions.push(Condition {
        type_: type_.to_string(),
        status: condition_status::TRUE.to_string(),
        ..Default::default()
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_meta_omits_empty_maps() {
        let meta = ObjectMeta::named("m-0");
        let json = serde_json::to_value(&meta).expect("serialize");
        assert_eq!(json, serde_json::json!({ "name": "m-0" }));
    }

    #[test]
    fn list_meta_uses_continue_on_the_wire() {
        let meta = ListMeta {
            resource_version: None,
            continue_token: Some("abc".to_string()),
        };
        let json = serde_json::to_value(&meta).expect("serialize");
        assert_eq!(json, serde_json::json!({ "continue": "abc" }));
    }

    #[test]
    fn int_or_string_accepts_both_shapes() {
        let int: IntOrString = serde_json::from_str("1").expect("int");
        let pct: IntOrString = serde_json::from_str("\"25%\"").expect("string");
        assert_eq!(int, IntOrString::Int(1));
        assert_eq!(pct, IntOrString::String("25%".to_string()));
    }

    #[test]
    fn mark_condition_true_replaces_existing_entry() {
        let mut conditions = vec![Condition {
            type_: "Ready".to_string(),
            status: condition_status::FALSE.to_string(),
            reason: "Waiting".to_string(),
            ..Default::default()
        }];

        mark_condition_true(&mut conditions, "Ready");
        mark_condition_true(&mut conditions, "ControlPlaneInitialized");

        assert_eq!(conditions.len(), 2);
        assert!(is_condition_true(&conditions, "Ready"));
        assert!(conditions[0].reason.is_empty());
        assert!(is_condition_true(&conditions, "ControlPlaneInitialized"));
        assert!(!is_condition_true(&conditions, "Paused"));
    }
}

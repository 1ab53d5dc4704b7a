//! `apiextensions.k8s.io/v1` ConversionReview handling.
//!
//! Only the request/response mapping lives here. Serving it over HTTPS is up to the
//! caller.

use crate::dispatch::convert_document;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

pub const REVIEW_API_VERSION: &str = "apiextensions.k8s.io/v1";
pub const REVIEW_KIND: &str = "ConversionReview";

pub const STATUS_SUCCESS: &str = "Success";
pub const STATUS_FAILURE: &str = "Failure";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionReview {
    #[serde(default)]
    pub api_version: String,

    #[serde(default)]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<ConversionRequest>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<ConversionResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub uid: String,

    #[serde(rename = "desiredAPIVersion")]
    pub desired_api_version: String,

    #[serde(default)]
    pub objects: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResponse {
    pub uid: String,

    #[serde(default)]
    pub converted_objects: Vec<Value>,

    pub result: ReviewStatus,
}

/// The `metav1.Status` subset a conversion response carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewStatus {
    pub status: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl ReviewStatus {
    pub fn success() -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            message: String::new(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_FAILURE.to_string(),
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

/// Answers a ConversionReview.
///
/// Objects are converted in order. The first failure fails the whole review and no
/// objects are returned.
pub fn review(request: &ConversionReview) -> ConversionReview {
    let response = match &request.request {
        Some(req) => respond(req),
        None => ConversionResponse {
            result: ReviewStatus::failure("conversion review has no request"),
            ..Default::default()
        },
    };

    ConversionReview {
        api_version: REVIEW_API_VERSION.to_string(),
        kind: REVIEW_KIND.to_string(),
        request: None,
        response: Some(response),
    }
}

fn respond(req: &ConversionRequest) -> ConversionResponse {
    let mut converted = Vec::with_capacity(req.objects.len());
    for (index, object) in req.objects.iter().enumerate() {
        match convert_document(object.clone(), &req.desired_api_version) {
            Ok(value) => converted.push(value),
            Err(err) => {
                warn!(uid = %req.uid, index, error = %err, "conversion failed");
                return ConversionResponse {
                    uid: req.uid.clone(),
                    converted_objects: Vec::new(),
                    result: ReviewStatus::failure(format!("object {}: {}", index, err)),
                };
            }
        }
    }

    info!(
        uid = %req.uid,
        objects = converted.len(),
        desired = %req.desired_api_version,
        "conversion review answered"
    );
    ConversionResponse {
        uid: req.uid.clone(),
        converted_objects: converted,
        result: ReviewStatus::success(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn wire_names_follow_apiextensions() {
        let review: ConversionReview = serde_json::from_value(json!({
            "apiVersion": "apiextensions.k8s.io/v1",
            "kind": "ConversionReview",
            "request": {
                "uid": "abc",
                "desiredAPIVersion": "cluster.x-k8s.io/v1beta1",
                "objects": []
            }
        }))
        .expect("parse");
        let req = review.request.expect("request");
        assert_eq!(req.desired_api_version, "cluster.x-k8s.io/v1beta1");

        let resp = ConversionResponse {
            uid: "abc".to_string(),
            converted_objects: vec![],
            result: ReviewStatus::success(),
        };
        let value = serde_json::to_value(resp).expect("serialize");
        assert_eq!(
            value,
            json!({"uid": "abc", "convertedObjects": [], "result": {"status": "Success"}})
        );
    }

    #[test]
    fn missing_request_fails() {
        let out = review(&ConversionReview::default());
        let resp = out.response.expect("response");
        assert!(!resp.result.is_success());
        assert_eq!(out.kind, REVIEW_KIND);
    }
}

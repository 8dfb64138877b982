// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The textbench authors

//! Report document shapes sent to the collection endpoints.
//!
//! Field names follow the collector's wire format, which is why several
//! fields carry serde renames. Optional fields are omitted, not nulled.

use serde::Serialize;
use serde_json::Value;

/// Report for an uncaught failure on the UI thread. Carries the source
/// location of the panic.
#[derive(Debug, Serialize)]
pub struct ErrorReport {
    pub colno: u32,
    pub filename: String,
    pub lineno: u32,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Best-effort raw serialization of the failure value; absent when
    /// serialization itself failed.
    #[serde(rename = "rawError", skip_serializing_if = "Option::is_none")]
    pub raw_error: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
}

/// Report for a failure on a background worker thread. No source location;
/// workers are the analog of unobserved asynchronous work.
#[derive(Debug, Serialize)]
pub struct RejectionReport {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "rawReason", skip_serializing_if = "Option::is_none")]
    pub raw_reason: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
}

/// Structured detail extracted from a recognized failure value.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    /// A chained application error.
    Generic {
        name: String,
        stack: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        cause: Option<String>,
    },
    /// An operating-system level error with a numeric code.
    Platform {
        message: String,
        name: String,
        code: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_report_serializes_with_wire_field_names() {
        let report = ErrorReport {
            colno: 7,
            filename: "src/mvu/mod.rs".into(),
            lineno: 42,
            message: "boom".into(),
            kind: "string".into(),
            raw_error: Some(json!("boom")),
            error: None,
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(
            value,
            json!({
                "colno": 7,
                "filename": "src/mvu/mod.rs",
                "lineno": 42,
                "message": "boom",
                "type": "string",
                "rawError": "boom",
            })
        );
    }

    #[test]
    fn rejection_report_omits_absent_fields() {
        let report = RejectionReport {
            kind: "string".into(),
            raw_reason: None,
            error: None,
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value, json!({ "type": "string" }));
    }

    #[test]
    fn generic_detail_flattens_without_a_tag() {
        let detail = ErrorDetail::Generic {
            name: "Error".into(),
            stack: "0: main".into(),
            cause: Some("root cause".into()),
        };

        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(
            value,
            json!({ "name": "Error", "stack": "0: main", "cause": "root cause" })
        );
    }

    #[test]
    fn platform_detail_carries_numeric_code() {
        let detail = ErrorDetail::Platform {
            message: "permission denied".into(),
            name: "PermissionDenied".into(),
            code: 13,
        };

        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(
            value,
            json!({ "message": "permission denied", "name": "PermissionDenied", "code": 13 })
        );
    }
}

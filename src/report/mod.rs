// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The textbench authors

//! Global failure capture and best-effort reporting.
//!
//! [`install()`] registers a single process-wide panic hook at startup; the
//! hook lives for the process, so there is no teardown. The hook
//! normalizes whatever value escaped, assembles a report document, and hands
//! it to the transport. Failures on named worker threads count as unhandled
//! rejections of background work and go to a separate endpoint, without
//! source location.
//!
//! Nothing in this module may panic while handling a failure; every
//! serialization step is best-effort and absorbed.

pub mod payload;
pub mod transport;

use std::any::Any;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::report::payload::{ErrorDetail, ErrorReport, RejectionReport};
use crate::report::transport::Transport;

/// Endpoint path for uncaught UI-thread failures.
pub const ERROR_PATH: &str = "/api/report/error";
/// Endpoint path for background worker failures.
pub const REJECTION_PATH: &str = "/api/report/unhandled-rejection";

/// Name prefix for threads whose panics are reported as rejections.
pub const WORKER_THREAD_PREFIX: &str = "command-worker";

/// A failure value captured at a process boundary, classified by shape.
#[derive(Debug)]
pub enum Failure {
    /// Chained application error with message, optional cause, and backtrace.
    Error(anyhow::Error),
    /// Operating-system level error carrying a numeric code.
    Os(std::io::Error),
    /// Plain payload with no recognized structure, kept as text.
    Payload(String),
}

impl Failure {
    /// Classify a panic payload. Panics in practice carry `&str` or `String`;
    /// `panic_any` payloads with an OS error keep their code, anything else
    /// is reduced to a placeholder rather than dropped.
    pub fn from_panic_payload(payload: &(dyn Any + Send)) -> Failure {
        if let Some(text) = payload.downcast_ref::<&str>() {
            Failure::Payload((*text).to_string())
        } else if let Some(text) = payload.downcast_ref::<String>() {
            Failure::Payload(text.clone())
        } else if let Some(err) = payload.downcast_ref::<std::io::Error>() {
            // io::Error is not Clone; rebuild it, keeping the raw code.
            let rebuilt = match err.raw_os_error() {
                Some(code) => std::io::Error::from_raw_os_error(code),
                None => std::io::Error::new(err.kind(), err.to_string()),
            };
            Failure::Os(rebuilt)
        } else {
            Failure::Payload("<opaque panic payload>".to_string())
        }
    }

    /// Classification tag: the value's type name, or the primitive tag for
    /// plain payloads.
    pub fn class_tag(&self) -> &'static str {
        match self {
            Failure::Error(_) => "Error",
            Failure::Os(_) => "OsError",
            Failure::Payload(_) => "string",
        }
    }

    /// Human-readable top-level message.
    pub fn message(&self) -> String {
        match self {
            Failure::Error(err) => err.to_string(),
            Failure::Os(err) => err.to_string(),
            Failure::Payload(text) => text.clone(),
        }
    }

    /// Best-effort raw serialization of the original value. `None` when the
    /// value does not serialize; that failure is swallowed here.
    pub fn raw(&self) -> Option<Value> {
        let rendered = match self {
            Failure::Error(err) => format!("{err:#}"),
            Failure::Os(err) => err.to_string(),
            Failure::Payload(text) => text.clone(),
        };
        serde_json::to_value(rendered).ok()
    }

    /// Structured detail for recognized shapes; plain payloads have none.
    pub fn detail(&self) -> Option<ErrorDetail> {
        match self {
            Failure::Error(err) => Some(ErrorDetail::Generic {
                name: "Error".to_string(),
                stack: err.backtrace().to_string(),
                cause: err.chain().nth(1).map(|cause| cause.to_string()),
            }),
            Failure::Os(err) => Some(ErrorDetail::Platform {
                message: err.to_string(),
                name: format!("{:?}", err.kind()),
                code: err.raw_os_error().unwrap_or(-1),
            }),
            Failure::Payload(_) => None,
        }
    }
}

/// Source location attached to uncaught-error reports.
#[derive(Clone, Debug, Default)]
pub struct SourceLocation {
    pub filename: String,
    pub lineno: u32,
    pub colno: u32,
}

/// Reporter configuration: where the collection endpoints live.
#[derive(Clone, Debug)]
pub struct ReporterConfig {
    pub base_url: String,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".to_string(),
        }
    }
}

impl ReporterConfig {
    /// Read the endpoint base from `TEXTBENCH_REPORT_URL`, falling back to
    /// the default collector address.
    pub fn from_env() -> Self {
        match std::env::var("TEXTBENCH_REPORT_URL") {
            Ok(url) if !url.trim().is_empty() => Self {
                base_url: url.trim_end_matches('/').to_string(),
            },
            _ => Self::default(),
        }
    }
}

/// Assembles report documents and hands them to the transport.
#[derive(Clone)]
pub struct Reporter {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl Reporter {
    pub fn new(config: ReporterConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: config.base_url,
            transport,
        }
    }

    /// Report an uncaught failure on the UI thread, with source location.
    pub fn report_error(&self, failure: &Failure, location: &SourceLocation) {
        let report = ErrorReport {
            colno: location.colno,
            filename: location.filename.clone(),
            lineno: location.lineno,
            message: failure.message(),
            kind: failure.class_tag().to_string(),
            raw_error: failure.raw(),
            error: failure.detail(),
        };
        self.post(ERROR_PATH, serde_json::to_value(&report));
    }

    /// Report a failure of background work, without source location.
    pub fn report_rejection(&self, failure: &Failure) {
        let report = RejectionReport {
            kind: failure.class_tag().to_string(),
            raw_reason: failure.raw(),
            error: failure.detail(),
        };
        self.post(REJECTION_PATH, serde_json::to_value(&report));
    }

    fn post(&self, path: &str, body: Result<Value, serde_json::Error>) {
        // A document that fails to serialize is dropped; errors about errors
        // must not escape the hook.
        match body {
            Ok(body) => self.transport.send(format!("{}{}", self.base_url, path), body),
            Err(err) => debug!(error = %err, "report document did not serialize"),
        }
    }
}

/// Register the process-wide panic hook. Call once at startup.
///
/// The previous hook still runs afterwards, so the standard panic message
/// stays on stderr.
pub fn install(reporter: Reporter) {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let failure = Failure::from_panic_payload(info.payload());
        let on_worker = std::thread::current()
            .name()
            .is_some_and(|name| name.starts_with(WORKER_THREAD_PREFIX));

        if on_worker {
            reporter.report_rejection(&failure);
        } else {
            let location = info
                .location()
                .map(|loc| SourceLocation {
                    filename: loc.file().to_string(),
                    lineno: loc.line(),
                    colno: loc.column(),
                })
                .unwrap_or_default();
            reporter.report_error(&failure, &location);
        }

        previous(info);
    }));
}

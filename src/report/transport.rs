// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The textbench authors

//! Detached transport for report delivery.
//!
//! The contract is fire-and-forget: `send` hands the document off and
//! returns immediately, the delivery outcome is never surfaced and there is
//! no retry. Failures are logged at debug level only.

use std::time::Duration;

use serde_json::Value;
use tracing::debug;

/// HTTP request timeout for a single delivery attempt.
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Outbound channel for report documents.
pub trait Transport: Send + Sync {
    /// Detached send of `body` as a JSON POST to `url`. Result ignored,
    /// no retry. Must never panic.
    fn send(&self, url: String, body: Value);
}

/// Production transport: blocking HTTP POST from a short-lived thread, so the
/// caller (possibly a panic hook) never waits on the network.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn send(&self, url: String, body: Value) {
        let client = self.client.clone();
        let target = url.clone();
        let spawned = std::thread::Builder::new()
            .name("report-send".into())
            .spawn(move || match client.post(&target).json(&body).send() {
                Ok(response) => {
                    debug!(url = %target, status = %response.status(), "report delivered")
                }
                Err(err) => debug!(url = %target, error = %err, "report delivery failed"),
            });
        if spawned.is_err() {
            debug!(%url, "could not spawn report delivery thread");
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn http_send_returns_immediately_and_never_panics() {
        // Nothing listens on the discard port; the delivery thread swallows
        // the refusal while the caller has long since moved on.
        let transport = HttpTransport::new();
        transport.send(
            "http://127.0.0.1:9/api/report/error".to_string(),
            json!({ "type": "string" }),
        );
        transport.send(
            "http://127.0.0.1:9/api/report/unhandled-rejection".to_string(),
            json!({ "type": "Error" }),
        );
    }
}

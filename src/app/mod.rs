// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The textbench authors

//! Application entry point wiring logging, crash reporting, and the egui
//! event loop.

use std::sync::Arc;

use eframe::egui;
use egui_phosphor::Variant;
use tracing_subscriber::EnvFilter;

use crate::report::{self, Failure, Reporter, ReporterConfig, SourceLocation};
use crate::report::transport::HttpTransport;
use crate::ui::TextBenchApp;

/// Bootstrap the desktop application and run the main egui event loop.
pub fn run() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let reporter = Reporter::new(ReporterConfig::from_env(), Arc::new(HttpTransport::new()));
    report::install(reporter.clone());

    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([500.0, 400.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        "textbench",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(TextBenchApp::new(cc)))
        }),
    );

    // A failed launch never reached the panic hook; report it through the
    // same pipeline before handing the error back.
    if let Err(err) = &result {
        let failure = Failure::Error(anyhow::anyhow!("event loop failed: {err}"));
        reporter.report_error(&failure, &SourceLocation::default());
    }

    result
}

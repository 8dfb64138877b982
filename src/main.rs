// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The textbench authors

mod app;
mod logic;
mod models;
mod mvu;
mod report;
mod ui;
mod utils;

fn main() -> eframe::Result<()> {
    app::run()
}

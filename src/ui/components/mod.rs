// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The textbench authors

//! Reusable egui components structured for MVU-style updates.

pub mod io;
pub mod picker;

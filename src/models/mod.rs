// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The textbench authors

//! Domain layer: the function catalog and result types shared between UI and logic.

pub mod function;

// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The textbench authors

//! Business logic for the transform functions.

pub mod transforms;

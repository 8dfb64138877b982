// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The textbench authors

//! Shared helper utilities reused by UI and business logic.

pub mod hash;

/// Compute the hex digest of a string with the given algorithm.
pub use hash::hash_str;

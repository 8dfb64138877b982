// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The textbench authors

//! Closed catalog of transform functions offered by the picker.

use crate::utils::hash::HashAlgorithm;

/// One selectable transform function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FunctionId {
    DecodeBase64,
    EncodeBase64,
    Sha1,
    Sha256,
    Sha512,
    JsonEscape,
    LinesToJsonArray,
    JsonArrayToLines,
    Length,
    Deindent,
}

/// Picker group a function is listed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Decode,
    Encode,
    Hash,
    Json,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Decode,
        Category::Encode,
        Category::Hash,
        Category::Json,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Decode => "Decode",
            Category::Encode => "Encode",
            Category::Hash => "Hash",
            Category::Json => "JSON",
            Category::Other => "Other",
        }
    }
}

impl FunctionId {
    pub const ALL: [FunctionId; 10] = [
        FunctionId::DecodeBase64,
        FunctionId::EncodeBase64,
        FunctionId::Sha1,
        FunctionId::Sha256,
        FunctionId::Sha512,
        FunctionId::JsonEscape,
        FunctionId::LinesToJsonArray,
        FunctionId::JsonArrayToLines,
        FunctionId::Length,
        FunctionId::Deindent,
    ];

    /// Stable identifier, also the persisted form of the last selection.
    pub fn id(self) -> &'static str {
        match self {
            FunctionId::DecodeBase64 => "decode-base64",
            FunctionId::EncodeBase64 => "encode-base64",
            FunctionId::Sha1 => "SHA-1",
            FunctionId::Sha256 => "SHA-256",
            FunctionId::Sha512 => "SHA-512",
            FunctionId::JsonEscape => "json-escape",
            FunctionId::LinesToJsonArray => "lines-to-json-array",
            FunctionId::JsonArrayToLines => "json-array-to-lines",
            FunctionId::Length => "length",
            FunctionId::Deindent => "deindent",
        }
    }

    /// Human-facing label shown in the picker.
    pub fn label(self) -> &'static str {
        match self {
            FunctionId::DecodeBase64 => "Base64 decode",
            FunctionId::EncodeBase64 => "Base64 encode",
            FunctionId::Sha1 => "SHA-1",
            FunctionId::Sha256 => "SHA-256",
            FunctionId::Sha512 => "SHA-512",
            FunctionId::JsonEscape => "JSON escape",
            FunctionId::LinesToJsonArray => "Lines to JSON array",
            FunctionId::JsonArrayToLines => "JSON array to lines",
            FunctionId::Length => "Length",
            FunctionId::Deindent => "Deindent",
        }
    }

    pub fn category(self) -> Category {
        match self {
            FunctionId::DecodeBase64 => Category::Decode,
            FunctionId::EncodeBase64 => Category::Encode,
            FunctionId::Sha1 | FunctionId::Sha256 | FunctionId::Sha512 => Category::Hash,
            FunctionId::JsonEscape
            | FunctionId::LinesToJsonArray
            | FunctionId::JsonArrayToLines => Category::Json,
            FunctionId::Length | FunctionId::Deindent => Category::Other,
        }
    }

    /// Parse a persisted identifier back into a function.
    pub fn parse(id: &str) -> Option<FunctionId> {
        FunctionId::ALL.into_iter().find(|f| f.id() == id)
    }

    /// Digest algorithm backing this function, for the hash group.
    pub fn digest_algorithm(self) -> Option<HashAlgorithm> {
        match self {
            FunctionId::Sha1 => Some(HashAlgorithm::Sha1),
            FunctionId::Sha256 => Some(HashAlgorithm::Sha256),
            FunctionId::Sha512 => Some(HashAlgorithm::Sha512),
            _ => None,
        }
    }
}

/// Outcome of applying one transform to the current input.
///
/// Exactly one side is meaningful: on error the output is always empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransformResult {
    pub output: String,
    pub is_error: bool,
}

impl TransformResult {
    pub fn ok(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            is_error: false,
        }
    }

    pub fn error() -> Self {
        Self {
            output: String::new(),
            is_error: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_function_round_trips_through_its_id() {
        for function in FunctionId::ALL {
            assert_eq!(FunctionId::parse(function.id()), Some(function));
        }
    }

    #[test]
    fn unknown_id_does_not_parse() {
        assert_eq!(FunctionId::parse(""), None);
        assert_eq!(FunctionId::parse("sha-256"), None);
        assert_eq!(FunctionId::parse("rot13"), None);
    }

    #[test]
    fn only_hash_functions_have_a_digest_algorithm() {
        for function in FunctionId::ALL {
            let expects_digest = function.category() == Category::Hash;
            assert_eq!(function.digest_algorithm().is_some(), expects_digest);
        }
    }

    #[test]
    fn every_category_lists_at_least_one_function() {
        for category in Category::ALL {
            assert!(
                FunctionId::ALL.iter().any(|f| f.category() == category),
                "category {:?} has no functions",
                category
            );
        }
    }

    #[test]
    fn error_result_has_empty_output() {
        let result = TransformResult::error();
        assert!(result.is_error);
        assert!(result.output.is_empty());
    }
}

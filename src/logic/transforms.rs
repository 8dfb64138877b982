// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The textbench authors

//! Business logic for the transform functions.
//!
//! Responsibilities:
//! - Map a selected function plus the current input to a [`TransformResult`].
//! - Keep every failure local: a bad input flips the error flag, nothing
//!   here ever panics toward the UI.
//!
//! The digest functions are pure here as well; the asynchronous delivery of
//! their results is handled by the MVU kernel, which runs them on worker
//! threads.

use base64::Engine;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD as BASE64};
use base64::engine::DecodePaddingMode;
use serde_json::Value;

use crate::models::function::{FunctionId, TransformResult};
use crate::utils::hash_str;

/// Decoder that accepts both padded and unpadded input, like the usual
/// text-tool decoders do.
const BASE64_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Apply `function` to `input`.
///
/// Recoverable failures (malformed base64, invalid JSON, unencodable
/// characters) surface as `is_error = true` with empty output.
pub fn apply(function: FunctionId, input: &str) -> TransformResult {
    match function {
        FunctionId::DecodeBase64 => decode_base64(input),
        FunctionId::EncodeBase64 => encode_base64(input),
        FunctionId::Sha1 | FunctionId::Sha256 | FunctionId::Sha512 => {
            // Guarded by the enum: the three hash arms always carry an algorithm.
            match function.digest_algorithm() {
                Some(algorithm) => TransformResult::ok(hash_str(algorithm, input)),
                None => TransformResult::error(),
            }
        }
        FunctionId::JsonEscape => json_escape(input),
        FunctionId::LinesToJsonArray => lines_to_json_array(input),
        FunctionId::JsonArrayToLines => json_array_to_lines(input),
        FunctionId::Length => TransformResult::ok(length(input)),
        FunctionId::Deindent => TransformResult::ok(deindent(input)),
    }
}

/// Encode byte-per-character: each char must fit in a single byte.
///
/// Code points above 255 have no single-byte form and flag an error, matching
/// the classic Latin-1 interpretation of base64 text encoders.
fn encode_base64(input: &str) -> TransformResult {
    let mut bytes = Vec::with_capacity(input.len());
    for ch in input.chars() {
        let code_point = ch as u32;
        if code_point > 0xFF {
            return TransformResult::error();
        }
        bytes.push(code_point as u8);
    }
    TransformResult::ok(BASE64.encode(bytes))
}

/// Decode base64 and reinterpret every byte as one character.
fn decode_base64(input: &str) -> TransformResult {
    match BASE64_LENIENT.decode(input) {
        Ok(bytes) => TransformResult::ok(bytes.into_iter().map(char::from).collect::<String>()),
        Err(_) => TransformResult::error(),
    }
}

/// JSON string encoding of the input with the enclosing quotes stripped.
fn json_escape(input: &str) -> TransformResult {
    match serde_json::to_string(input) {
        Ok(quoted) => TransformResult::ok(&quoted[1..quoted.len() - 1]),
        Err(_) => TransformResult::error(),
    }
}

/// Split on newline and emit a JSON array of the lines.
fn lines_to_json_array(input: &str) -> TransformResult {
    let lines: Vec<&str> = input.split('\n').collect();
    match serde_json::to_string(&lines) {
        Ok(encoded) => TransformResult::ok(encoded),
        Err(_) => TransformResult::error(),
    }
}

/// Parse a JSON array of scalars and join the elements with newlines.
///
/// Strings join verbatim, numbers and booleans in their literal form, and
/// `null` as an empty element. Nested arrays or objects have no joined form.
fn json_array_to_lines(input: &str) -> TransformResult {
    let Ok(Value::Array(items)) = serde_json::from_str::<Value>(input) else {
        return TransformResult::error();
    };

    let mut lines = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::String(s) => lines.push(s),
            Value::Number(n) => lines.push(n.to_string()),
            Value::Bool(b) => lines.push(b.to_string()),
            Value::Null => lines.push(String::new()),
            Value::Array(_) | Value::Object(_) => return TransformResult::error(),
        }
    }
    TransformResult::ok(lines.join("\n"))
}

/// Count of UTF-16 code units, as a decimal string.
fn length(input: &str) -> String {
    input.encode_utf16().count().to_string()
}

/// Strip the common leading whitespace shared by all indented lines.
///
/// The minimum is taken only over lines with at least one leading whitespace
/// character; that many characters are then removed from every line, so an
/// unindented line shorter than the minimum becomes empty. With no indented
/// lines at all, the input is returned unchanged.
fn deindent(input: &str) -> String {
    let lines: Vec<&str> = input.split('\n').collect();
    let min_indent = lines
        .iter()
        .filter_map(|line| {
            let leading = line.chars().take_while(|c| c.is_whitespace()).count();
            (leading > 0).then_some(leading)
        })
        .min()
        .unwrap_or(0);

    if min_indent == 0 {
        return input.to_string();
    }

    lines
        .iter()
        .map(|line| {
            let mut chars = line.chars();
            for _ in 0..min_indent {
                chars.next();
            }
            chars.as_str()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(function: FunctionId, input: &str) -> String {
        let result = apply(function, input);
        assert!(!result.is_error, "{:?} flagged error on {:?}", function, input);
        result.output
    }

    fn expect_error(function: FunctionId, input: &str) {
        let result = apply(function, input);
        assert!(result.is_error, "{:?} accepted {:?}", function, input);
        assert!(result.output.is_empty());
    }

    #[test]
    fn encode_base64_handles_plain_ascii() {
        assert_eq!(output(FunctionId::EncodeBase64, "hello"), "aGVsbG8=");
        assert_eq!(output(FunctionId::EncodeBase64, ""), "");
    }

    #[test]
    fn encode_base64_accepts_latin1_range() {
        // U+00E9 fits in one byte; its encoding decodes back to the same char.
        assert_eq!(output(FunctionId::EncodeBase64, "caf\u{e9}"), "Y2Fm6Q==");
    }

    #[test]
    fn encode_base64_rejects_wide_characters() {
        expect_error(FunctionId::EncodeBase64, "sn\u{2603}wman");
    }

    #[test]
    fn decode_base64_rejects_malformed_input() {
        expect_error(FunctionId::DecodeBase64, "not base64!");
        expect_error(FunctionId::DecodeBase64, "a");
    }

    #[test]
    fn decode_base64_tolerates_missing_padding() {
        assert_eq!(output(FunctionId::DecodeBase64, "aGVsbG8"), "hello");
        assert_eq!(output(FunctionId::DecodeBase64, "aGVsbG8="), "hello");
    }

    #[test]
    fn base64_round_trips_encodable_strings() {
        for original in ["", "hello world", "line\nbreaks\nand\ttabs", "caf\u{e9}"] {
            let encoded = output(FunctionId::EncodeBase64, original);
            assert_eq!(output(FunctionId::DecodeBase64, &encoded), original);
        }
    }

    #[test]
    fn sha256_matches_known_empty_digest() {
        assert_eq!(
            output(FunctionId::Sha256, ""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn sha1_and_sha512_produce_hex_of_expected_width() {
        assert_eq!(output(FunctionId::Sha1, "abc").len(), 40);
        assert_eq!(output(FunctionId::Sha512, "abc").len(), 128);
    }

    #[test]
    fn json_escape_strips_enclosing_quotes() {
        assert_eq!(output(FunctionId::JsonEscape, "plain"), "plain");
        assert_eq!(
            output(FunctionId::JsonEscape, "say \"hi\"\n"),
            "say \\\"hi\\\"\\n"
        );
        assert_eq!(output(FunctionId::JsonEscape, ""), "");
    }

    #[test]
    fn lines_to_json_array_preserves_order_and_empties() {
        assert_eq!(
            output(FunctionId::LinesToJsonArray, "a\nb\n\nc"),
            r#"["a","b","","c"]"#
        );
        assert_eq!(output(FunctionId::LinesToJsonArray, ""), r#"[""]"#);
    }

    #[test]
    fn json_array_to_lines_joins_scalars() {
        assert_eq!(
            output(FunctionId::JsonArrayToLines, r#"["a", "b"]"#),
            "a\nb"
        );
        assert_eq!(
            output(FunctionId::JsonArrayToLines, r#"[1, true, null, "x"]"#),
            "1\ntrue\n\nx"
        );
    }

    #[test]
    fn json_array_to_lines_rejects_non_arrays_and_nesting() {
        expect_error(FunctionId::JsonArrayToLines, "not json");
        expect_error(FunctionId::JsonArrayToLines, r#"{"a": 1}"#);
        expect_error(FunctionId::JsonArrayToLines, r#"[["nested"]]"#);
        expect_error(FunctionId::JsonArrayToLines, r#"[{"a": 1}]"#);
    }

    #[test]
    fn lines_and_array_round_trip() {
        for text in ["single", "two\nlines", "with\n\nblank\nlines"] {
            let encoded = output(FunctionId::LinesToJsonArray, text);
            assert_eq!(output(FunctionId::JsonArrayToLines, &encoded), text);
        }
    }

    #[test]
    fn length_counts_utf16_code_units() {
        assert_eq!(output(FunctionId::Length, ""), "0");
        assert_eq!(output(FunctionId::Length, "abc"), "3");
        // U+1F600 needs a surrogate pair, so it counts as two units.
        assert_eq!(output(FunctionId::Length, "\u{1F600}"), "2");
    }

    #[test]
    fn deindent_strips_common_prefix() {
        assert_eq!(
            output(FunctionId::Deindent, "    a\n    b\n      c"),
            "a\nb\n  c"
        );
        assert_eq!(output(FunctionId::Deindent, "\tx\n\ty"), "x\ny");
    }

    #[test]
    fn deindent_without_indentation_is_identity() {
        let text = "a\nb\nc";
        assert_eq!(output(FunctionId::Deindent, text), text);
        assert_eq!(output(FunctionId::Deindent, ""), "");
    }

    #[test]
    fn deindent_minimum_ignores_unindented_lines_but_strips_them() {
        // "b" carries no indentation; the minimum comes from the other lines,
        // and stripping still applies to every line.
        assert_eq!(output(FunctionId::Deindent, "  a\nb\n  c"), "a\n\nc");
    }

    #[test]
    fn deindent_counts_whitespace_only_lines() {
        // The blank-ish middle line has one leading whitespace char and pulls
        // the minimum down to one.
        assert_eq!(output(FunctionId::Deindent, "  a\n \n  b"), " a\n\n b");
    }

    #[test]
    fn deindent_is_idempotent() {
        // Holds whenever the indented lines share one prefix; uneven indents
        // keep a shorter remainder that a second pass would strip again.
        for text in ["    a\n    b", "a\nb", "\t\tx\n\t\ty", "  a\nb\n  c"] {
            let once = output(FunctionId::Deindent, text);
            assert_eq!(output(FunctionId::Deindent, &once), once);
        }
    }

    #[test]
    fn no_function_panics_on_awkward_input() {
        let inputs = ["", "\n", "\u{0}", "\u{1F600}\u{2603}", "]}{[", " "];
        for function in FunctionId::ALL {
            for input in inputs {
                let _ = apply(function, input);
            }
        }
    }
}

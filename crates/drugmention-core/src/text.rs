//! Cleanup of literal `\xNN` escape runs left in exported text.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// One or more consecutive literal `\x` + two hex digit sequences.
static HEX_ESCAPE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\\x[0-9a-fA-F]{2})+").expect("Invalid hex escape regex"));

/// Replace every escape run with the UTF-8 text its bytes encode.
///
/// A run whose bytes are not valid UTF-8 is removed entirely. All other
/// characters are left untouched.
pub fn clean_hex_escapes(value: &str) -> Cow<'_, str> {
    HEX_ESCAPE_RUN.replace_all(value, |caps: &Captures<'_>| decode_escape_run(&caps[0]))
}

fn decode_escape_run(run: &str) -> String {
    let digits: String = run.split("\\x").collect();
    hex::decode(digits)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_single_escape() {
        assert_eq!(clean_hex_escapes("Aspirin\\x20Extra"), "Aspirin Extra");
    }

    #[test]
    fn decodes_multibyte_run() {
        assert_eq!(
            clean_hex_escapes("H\\xc3\\xb4pitaux Universitaires de Gen\\xc3\\xa8ve"),
            "Hôpitaux Universitaires de Genève"
        );
    }

    #[test]
    fn drops_invalid_utf8_run() {
        assert_eq!(
            clean_hex_escapes("Journal of emergency nursing\\xc3\\x28"),
            "Journal of emergency nursing"
        );
    }

    #[test]
    fn leaves_plain_text_borrowed() {
        let cleaned = clean_hex_escapes("Psychopharmacology");
        assert!(matches!(cleaned, Cow::Borrowed(_)));
    }

    #[test]
    fn ignores_incomplete_escape() {
        assert_eq!(clean_hex_escapes("value\\x2"), "value\\x2");
    }
}

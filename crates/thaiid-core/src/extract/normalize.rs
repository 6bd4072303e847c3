//! Character-level repair of raw OCR text.

/// Literal substitutions for systematic OCR misreads, applied in order.
///
/// No replacement produces text matched by any search string, so applying the
/// table twice gives the same result as applying it once.
pub const OCR_SUBSTITUTIONS: &[(&str, &str)] = &[
    // digit 1 read as a pipe
    ("|", "1"),
    // stray phinthu below consonants
    ("\u{0E3A}", ""),
    // lowercase l read as a bracket
    ("]", "l"),
];

/// Join fragments with a single space and repair them into the cleaned text
/// every field rule runs against.
pub fn normalize<S: AsRef<str>>(fragments: &[S]) -> String {
    let joined = fragments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ");

    normalize_text(&joined)
}

/// Repair an already joined text.
pub fn normalize_text(text: &str) -> String {
    let mut text = text.to_lowercase().replace('\n', " ");
    for (from, to) in OCR_SUBSTITUTIONS {
        text = text.replace(from, to);
    }
    text
}

/// Collapse every whitespace run to a single space.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let empty: [&str; 0] = [];
        assert_eq!(normalize(&empty), "");
    }

    #[test]
    fn test_join_lowercase_and_newlines() {
        assert_eq!(normalize(&["Mr SMITH", "Last\nName"]), "mr smith last name");
    }

    #[test]
    fn test_ocr_substitutions() {
        assert_eq!(normalize(&["|234"]), "1234");
        assert_eq!(normalize(&["ศาสนา พุทธ\u{0E3A}"]), "ศาสนา พุทธ");
        assert_eq!(normalize(&["Sa]ee"]), "salee");
    }

    #[test]
    fn test_repeated_whitespace_kept() {
        assert_eq!(normalize(&["a  b", "c"]), "a  b c");
    }

    #[test]
    fn test_idempotent() {
        let raw = ["Name Mr. |SOMCHAI ]", "ตำบ\u{0E3A}ล\nในเมือง", "  1 2345 67890 |2 3 "];
        let once = normalize(&raw);
        let twice = normalize(&[once.as_str()]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \t b   c "), "a b c");
    }
}

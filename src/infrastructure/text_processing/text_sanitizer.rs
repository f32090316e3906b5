use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static BLANK_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*(?:\n[ \t]*)+").unwrap());

/// Prepares a knowledge file for splitting.
///
/// Composes Vietnamese diacritics to NFC so identical words embed identically whatever
/// editor produced the file, drops a leading BOM, unifies line endings, collapses
/// spaces inside lines and squeezes runs of blank lines into one paragraph break.
pub fn normalize_knowledge_text(raw: &str) -> String {
    let composed: String = raw.trim_start_matches('\u{feff}').nfc().collect();
    let unix = composed.replace("\r\n", "\n").replace('\r', "\n");
    let paragraphs = BLANK_RUNS.replace_all(&unix, "\n\n");

    let mut result = String::with_capacity(paragraphs.len());
    for (i, line) in paragraphs.split('\n').enumerate() {
        if i > 0 {
            result.push('\n');
        }
        collapse_internal_whitespace(line.trim(), &mut result);
    }

    result.trim().to_string()
}

fn collapse_internal_whitespace(line: &str, out: &mut String) {
    let mut prev_was_space = false;

    for ch in line.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                out.push(' ');
                prev_was_space = true;
            }
        } else {
            out.push(ch);
            prev_was_space = false;
        }
    }
}
